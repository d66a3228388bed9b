//! Deterministic doubling-map sequence generator.
//!
//! The generator is only as unpredictable as its seed: seed it with a value
//! fixed at build time and every run of the program repeats the same
//! sequence.

mod rand;

pub use self::rand::{Rand, MODULUS};
