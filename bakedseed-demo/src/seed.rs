use std::{
    fmt,
    str::FromStr,
    time::{SystemTime, UNIX_EPOCH},
};

use thiserror::Error;

/// Milliseconds since the epoch when this binary was compiled.
const BUILD_MILLIS: &str = env!("BAKEDSEED_BUILD_MILLIS");

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// Fixed when the binary was built. Every run sees the same value.
    Baked,
    /// Read from the wall clock each time it is resolved.
    Clock,
    Fixed(i64),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SeedError {
    #[error("Invalid seed {0:?} (expected \"baked\", \"clock\" or an integer)")]
    Invalid(String),
    #[error("Build timestamp {0:?} is not a number")]
    BadBuildTimestamp(&'static str),
    #[error("System clock is set before the Unix epoch")]
    ClockBeforeEpoch,
}

impl SeedSource {
    pub fn resolve(self) -> Result<i64, SeedError> {
        match self {
            SeedSource::Baked => BUILD_MILLIS
                .parse()
                .map_err(|_| SeedError::BadBuildTimestamp(BUILD_MILLIS)),
            SeedSource::Clock => {
                let elapsed = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map_err(|_| SeedError::ClockBeforeEpoch)?;
                Ok(elapsed.as_millis() as i64)
            }
            SeedSource::Fixed(seed) => Ok(seed),
        }
    }
}

impl FromStr for SeedSource {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<SeedSource, SeedError> {
        match s.trim() {
            "baked" => Ok(SeedSource::Baked),
            "clock" => Ok(SeedSource::Clock),
            other => other
                .parse()
                .map(SeedSource::Fixed)
                .map_err(|_| SeedError::Invalid(s.into())),
        }
    }
}

impl fmt::Display for SeedSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SeedSource::Baked => write!(f, "baked"),
            SeedSource::Clock => write!(f, "clock"),
            SeedSource::Fixed(seed) => write!(f, "{}", seed),
        }
    }
}
