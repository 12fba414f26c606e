use wasm_bindgen::prelude::*;

use crate::domain::{Body, CollisionAlgorithm, ColorPolicy, MassPolicy, Vec2};
use crate::error::InsertError;

use super::perf_stats::PerfStats;
use super::WorldCore;

/// Where the two snapshot buffers live in wasm memory right now.
/// Invalid after the next call that inserts or steps.
#[wasm_bindgen]
pub struct SnapshotLayout {
    body_ptr: u32,
    body_len_elements: u32,
    body_len_bytes: u32,
    color_ptr: u32,
    color_len_elements: u32,
    color_len_bytes: u32,
    body_count: u32,
}

#[wasm_bindgen]
impl SnapshotLayout {
    #[wasm_bindgen(getter)]
    pub fn body_ptr(&self) -> u32 { self.body_ptr }
    #[wasm_bindgen(getter)]
    pub fn body_len_elements(&self) -> u32 { self.body_len_elements }
    #[wasm_bindgen(getter)]
    pub fn body_len_bytes(&self) -> u32 { self.body_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn color_ptr(&self) -> u32 { self.color_ptr }
    #[wasm_bindgen(getter)]
    pub fn color_len_elements(&self) -> u32 { self.color_len_elements }
    #[wasm_bindgen(getter)]
    pub fn color_len_bytes(&self) -> u32 { self.color_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    pub fn body_count(&self) -> usize {
        self.core.body_count()
    }

    pub fn obstacle_count(&self) -> usize {
        self.core.obstacle_count()
    }

    /// Copy of the body at `index`
    pub fn body(&self, index: usize) -> Option<Body> {
        self.core.body(index).copied()
    }

    /// Adds the body to the world if the space is unoccupied.
    pub fn try_insert(&mut self, body: Body) -> bool {
        self.core.try_insert(body)
    }

    pub fn add_obstacle(&mut self, start: Vec2, end: Vec2) {
        self.core.add_obstacle(start, end);
    }

    /// Step one frame; returns the number of broad-phase overlap tests
    pub fn step_frame(&mut self, dt: f32, drag: f32, substeps: u32, algorithm: CollisionAlgorithm) -> u32 {
        self.core.step_frame(dt, drag, substeps, algorithm)
    }

    /// Step one frame with the configured drag, sub-steps and algorithm
    pub fn step(&mut self, dt: f32) -> u32 {
        self.core.step(dt)
    }

    pub fn momentum(&self) -> f32 {
        self.core.momentum()
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) -> Result<(), JsValue> {
        self.core
            .set_gravity(x, y)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn set_restitution(&mut self, restitution: f32) -> Result<(), JsValue> {
        self.core
            .set_restitution(restitution)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn set_mass_policy(&mut self, policy: MassPolicy) {
        self.core.set_mass_policy(policy);
    }

    pub fn set_color_policy(&mut self, policy: ColorPolicy) {
        self.core.set_color_policy(policy);
    }

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    pub fn config_json(&self) -> Result<String, JsValue> {
        self.core
            .config_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get pointer to body buffer (5 f32 per body, for JS rendering)
    pub fn body_buffer_ptr(&self) -> *const f32 {
        self.core.body_buffer_ptr()
    }

    /// Get pointer to color buffer (3 u8 per body, for JS rendering)
    pub fn color_buffer_ptr(&self) -> *const u8 {
        self.core.color_buffer_ptr()
    }

    pub fn body_buffer_len(&self) -> usize {
        self.core.body_buffer().len()
    }

    pub fn color_buffer_len(&self) -> usize {
        self.core.color_buffer().len()
    }

    pub fn snapshot_layout(&self) -> SnapshotLayout {
        let data = self.core.snapshot_layout_data();
        SnapshotLayout {
            body_ptr: data.body_ptr as u32,
            body_len_elements: data.body_len_elements as u32,
            body_len_bytes: data.body_len_bytes as u32,
            color_ptr: data.color_ptr as u32,
            color_len_elements: data.color_len_elements as u32,
            color_len_bytes: data.color_len_bytes as u32,
            body_count: data.body_count as u32,
        }
    }
}

// Rust-side API (not exported to JS)
impl World {
    pub fn core(&self) -> &WorldCore {
        &self.core
    }

    pub fn insert(&mut self, body: Body) -> Result<usize, InsertError> {
        self.core.insert(body)
    }

    pub fn body_buffer(&self) -> &[f32] {
        self.core.body_buffer()
    }

    pub fn color_buffer(&self) -> &[u8] {
        self.core.color_buffer()
    }
}
