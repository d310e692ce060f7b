//! Domain types: materials, particles and engine configuration.

pub mod config;
pub mod materials;
pub mod particle;

pub use config::EngineConfig;
pub use materials::{Material, MaterialId, Rgb};
pub use particle::{Particle, ParticleView};
