//! Systems - the per-tick rules applied to particles.

pub mod behaviors;
