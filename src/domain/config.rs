//! Engine configuration
//!
//! Defaults reproduce the classic 1280x720 sandbox. A shell can override any
//! subset of fields with a JSON object; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_SEED;

/// Largest accepted canvas side. Keeps `width * height` and all coordinate
/// arithmetic comfortably inside `i32`.
pub const MAX_CANVAS_DIMENSION: u32 = 8192;

/// Largest accepted `density_cap`. Stacked spawns on one coordinate are bounded
/// by it, and the occupancy index stores per-coordinate counts as `u16`.
pub const MAX_DENSITY_CAP: u32 = u16::MAX as u32;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub width: u32,
    pub height: u32,
    /// Hard cap on live particles
    pub max_particles: usize,
    /// Side of one density-grid cell in pixels
    pub density_cell_size: u32,
    /// Spawner stops filling a density cell once it holds this many particles
    pub density_cap: u32,
    /// Initial fire lifetime
    pub fire_lifetime: i32,
    pub seed: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            max_particles: 50_000,
            density_cell_size: 16,
            density_cap: 50,
            fire_lifetime: 100,
            seed: DEFAULT_SEED,
        }
    }
}

impl EngineConfig {
    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: EngineConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!("canvas must be non-empty: {}x{}", self.width, self.height));
        }
        if self.width > MAX_CANVAS_DIMENSION || self.height > MAX_CANVAS_DIMENSION {
            return Err(format!(
                "canvas too large: {}x{} (max side {})",
                self.width, self.height, MAX_CANVAS_DIMENSION
            ));
        }
        if self.max_particles == 0 {
            return Err("max_particles must be at least 1".to_string());
        }
        if self.density_cell_size == 0 || self.density_cell_size > MAX_CANVAS_DIMENSION {
            return Err(format!(
                "density_cell_size must be in 1..={}, got {}",
                MAX_CANVAS_DIMENSION, self.density_cell_size
            ));
        }
        if self.density_cap == 0 || self.density_cap > MAX_DENSITY_CAP {
            return Err(format!(
                "density_cap must be in 1..={}, got {}",
                MAX_DENSITY_CAP, self.density_cap
            ));
        }
        if self.fire_lifetime <= 0 {
            return Err(format!("fire_lifetime must be positive, got {}", self.fire_lifetime));
        }
        Ok(())
    }
}
