use std::io::{self, Write};

use anyhow::Context;
use bakedseed_engine::Rand;
use log::*;
use structopt::StructOpt;

mod seed;

use seed::SeedSource;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "bakedseed",
    about = "Shows what happens when a generator is seeded at build time"
)]
struct Opt {
    /// Seed source: "baked" (build timestamp), "clock" (run time) or an integer.
    /// Pass negative integers as --seed=-5
    #[structopt(short, long, default_value = "baked")]
    seed: SeedSource,

    /// Log debug output
    #[structopt(short, long)]
    verbose: bool,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Print successive values of the generator
    Sequence {
        /// Number of values to print
        #[structopt(short = "n", long, default_value = "3")]
        count: usize,
    },
    /// Print how many steps it takes for the generator to repeat
    Period,
}

fn write_sequence<W: Write>(out: &mut W, rand: Rand, count: usize) -> io::Result<()> {
    write!(out, "An entirely random sequence:")?;
    for val in rand.take(count) {
        write!(out, " {}", val)?;
    }
    writeln!(out)
}

fn main() -> anyhow::Result<()> {
    let args = Opt::from_args();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::builder()
        .filter(Some("bakedseed"), level)
        .init();

    let seed = args
        .seed
        .resolve()
        .with_context(|| format!("Error resolving seed source {}", args.seed))?;
    let rand = Rand::new(seed);
    debug!(
        "Seed source {} resolved to {} (state {})",
        args.seed,
        seed,
        rand.state()
    );
    if args.seed == SeedSource::Baked {
        info!("Seed was fixed at build time; every run prints the same values");
    }

    match args.cmd {
        Command::Sequence { count } => {
            let stdout = io::stdout();
            write_sequence(&mut stdout.lock(), rand, count)
                .context("Error writing sequence to stdout")?
        }
        Command::Period => println!("Period: {}", rand.period()),
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn sequence(seed: i64, count: usize) -> String {
        let mut out = Vec::new();
        write_sequence(&mut out, Rand::new(seed), count).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_sequence() {
        assert_eq!(sequence(1, 3), "An entirely random sequence: 2 4 8\n");
        assert_eq!(sequence(0, 2), "An entirely random sequence: 0 0\n");
        assert_eq!(sequence(1, 0), "An entirely random sequence:\n");
    }

    #[test]
    fn test_write_sequence_streams() {
        // Counts write calls; nothing is kept.
        struct Counting(usize);

        impl Write for Counting {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0 += 1;
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut out = Counting(0);
        write_sequence(&mut out, Rand::new(1), 100_000).unwrap();
        assert!(out.0 >= 100_000);
    }

    #[test]
    fn test_args() {
        let opt = Opt::from_iter(&["bakedseed", "--seed=-5", "sequence", "-n", "4"]);
        assert_eq!(opt.seed, SeedSource::Fixed(-5));
        match opt.cmd {
            Command::Sequence { count } => assert_eq!(count, 4),
            Command::Period => panic!("expected sequence"),
        }

        let opt = Opt::from_iter(&["bakedseed", "period"]);
        assert_eq!(opt.seed, SeedSource::Baked);
        assert!(!opt.verbose);
    }

    #[test]
    fn test_seed_does_not_swallow_flags() {
        let opt = Opt::from_iter(&["bakedseed", "--seed", "clock", "--verbose", "period"]);
        assert_eq!(opt.seed, SeedSource::Clock);
        assert!(opt.verbose);

        assert!(Opt::from_iter_safe(&["bakedseed", "--seed", "--verbose", "period"]).is_err());
    }

    #[test]
    fn test_bad_seed_rejected() {
        assert!(Opt::from_iter_safe(&["bakedseed", "--seed", "soon", "period"]).is_err());
    }
}
