use wasm_bindgen::prelude::*;

use crate::domain::materials::material_manifest_json;
use crate::domain::{EngineConfig, Material};

use super::perf_stats::PerfStats;
use super::SimulationCore;

/// JS-facing handle. Keeps the transfer buffers the renderer reads through
/// raw pointers into wasm memory.
#[wasm_bindgen]
pub struct World {
    core: SimulationCore,
    snapshot_buffer: Vec<u32>,
    frame_buffer: Vec<u32>,
}

impl World {
    fn from_core(core: SimulationCore) -> Self {
        let pixels = (core.width() as usize) * (core.height() as usize);
        Self {
            core,
            snapshot_buffer: Vec::new(),
            frame_buffer: vec![super::BG_COLOR; pixels],
        }
    }

    /// Native-side access for embedding and tests
    pub fn core(&self) -> &SimulationCore {
        &self.core
    }
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions and default limits
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<World, JsValue> {
        let core = SimulationCore::with_config(EngineConfig::with_dimensions(width, height))
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::from_core(core))
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<World, JsValue> {
        let config = EngineConfig::from_json(json).map_err(|e| {
            console_warn!("Rejected engine config: {}", e);
            JsValue::from_str(&e)
        })?;
        let core = SimulationCore::with_config(config).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::from_core(core))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn capacity(&self) -> u32 { self.core.capacity() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Palette for the material buttons
    pub fn material_manifest_json(&self) -> String {
        material_manifest_json()
    }

    /// Brush stroke. Unknown material ids are ignored.
    pub fn spawn(&mut self, x: i32, y: i32, radius: i32, material: u8) {
        if let Some(material) = Material::from_id(material) {
            self.core.spawn(x, y, radius, material);
        }
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward
    pub fn tick(&mut self) {
        self.core.tick();
    }

    pub fn is_empty_at(&self, x: i32, y: i32) -> bool {
        self.core.is_empty_at(x, y)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    // === SNAPSHOT TRANSFER ===

    /// Pack live particles as `[x, y, abgr]` triples into the snapshot buffer.
    /// Returns the particle count; read `snapshot_len()` u32s at `snapshot_ptr()`.
    pub fn collect_snapshot(&mut self) -> usize {
        self.snapshot_buffer.clear();
        self.core.write_snapshot(&mut self.snapshot_buffer)
    }

    pub fn snapshot_ptr(&self) -> *const u32 {
        self.snapshot_buffer.as_ptr()
    }

    /// Length in u32 elements
    pub fn snapshot_len(&self) -> usize {
        self.snapshot_buffer.len()
    }

    // === FULL FRAME TRANSFER ===

    /// Rasterize the canvas into the frame buffer and return its pointer
    pub fn render_frame(&mut self) -> *const u32 {
        if let Err(e) = self.core.fill_frame(&mut self.frame_buffer) {
            console_warn!("render_frame skipped: {}", e);
        }
        self.frame_buffer.as_ptr()
    }

    /// Pointer to the last rendered frame (no re-rasterization)
    pub fn frame_ptr(&self) -> *const u32 {
        self.frame_buffer.as_ptr()
    }

    pub fn frame_len_elements(&self) -> usize {
        self.frame_buffer.len()
    }

    pub fn frame_len_bytes(&self) -> usize {
        self.frame_buffer.len() * std::mem::size_of::<u32>()
    }
}
