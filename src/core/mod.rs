//! Core utilities shared by every layer: macros and the random source.

#[macro_use]
pub mod utils;
pub mod random;

pub use random::{RandomSource, XorShift32, DEFAULT_SEED};
