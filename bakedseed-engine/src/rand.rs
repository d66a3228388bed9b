/// Prime bound on every generator state.
pub const MODULUS: u32 = 7937;
const MUL: u32 = 2;

/// Doubling map modulo [`MODULUS`].
///
/// Not cryptographically secure. Two generators built from the same seed
/// yield the same values forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rand(u32);

impl Rand {
    /// Negative seeds wrap around, so `-1` becomes `MODULUS - 1`.
    pub fn new(seed: i64) -> Rand {
        Rand(seed.rem_euclid(MODULUS as i64) as _)
    }

    pub fn state(&self) -> u32 {
        self.0
    }

    pub fn gen(&mut self) -> u32 {
        self.0 = next(self.0);
        self.0
    }

    /// Steps until the state comes back around. The map is a bijection on
    /// `[0, MODULUS)`, so every state lies on a cycle.
    pub fn period(&self) -> usize {
        let mut s = next(self.0);
        let mut steps = 1;
        while s != self.0 {
            s = next(s);
            steps += 1;
        }
        steps
    }
}

impl Iterator for Rand {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.gen())
    }
}

fn next(s: u32) -> u32 {
    (s * MUL) % MODULUS
}
