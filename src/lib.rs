//! Sandfall Engine - falling-sand particle simulation in WASM
//!
//! Architecture:
//! - core/        - Macros and the pluggable random source
//! - domain/      - Materials, particles, configuration
//! - spatial/     - Occupancy index and density grid
//! - systems/     - Per-material behaviors
//! - simulation/  - Orchestration and the JS facade

// Macros must be declared before the modules that use them.
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

pub use domain::materials;
pub use systems::behaviors;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Sandfall engine v{} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{RandomSource, XorShift32};
pub use domain::{EngineConfig, Material, Particle, ParticleView, Rgb};
pub use simulation::{PerfStats, SimulationCore, World};

// Export material ids for JS
#[wasm_bindgen]
pub fn mat_sand() -> u8 { materials::MAT_SAND }
#[wasm_bindgen]
pub fn mat_water() -> u8 { materials::MAT_WATER }
#[wasm_bindgen]
pub fn mat_fire() -> u8 { materials::MAT_FIRE }
#[wasm_bindgen]
pub fn mat_stone() -> u8 { materials::MAT_STONE }
#[wasm_bindgen]
pub fn mat_empty() -> u8 { materials::MAT_EMPTY }
