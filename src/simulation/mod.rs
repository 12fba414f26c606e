//! World - owns the body/obstacle arenas and runs the frame loop
//!
//! WorldCore only orchestrates:
//! - insertion and obstacles in commands/
//! - sub-stepping in step/ (integration + broad/narrow phase from systems/)
//! - render-facing snapshot buffers in render/
//!
//! Bodies live in one Vec for the lifetime of the world. Their index is the
//! handle the renderer sees, so the Vec is append-only and never reordered.

use crate::domain::{Body, CollisionAlgorithm, ColorPolicy, MassPolicy, Segment, SimConfig, Vec2};
use crate::error::{ConfigError, InsertError};
use crate::systems::broad_phase::{BroadPhaseRegistry, CandidatePair};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "step/substep.rs"]
mod substep;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::{SnapshotLayout, World};
pub use perf_stats::PerfStats;
pub use render_extract::{BODY_STRIDE, COLOR_STRIDE};

use perf_timer::PerfTimer;

pub(crate) struct RenderBuffers {
    pub(crate) body_buffer: Vec<f32>,
    pub(crate) color_buffer: Vec<u8>,
}

pub(crate) struct SnapshotLayoutData {
    pub(crate) body_ptr: *const f32,
    pub(crate) body_len_elements: usize,
    pub(crate) body_len_bytes: usize,
    pub(crate) color_ptr: *const u8,
    pub(crate) color_len_elements: usize,
    pub(crate) color_len_bytes: usize,
    pub(crate) body_count: usize,
}

/// The simulation world
pub struct WorldCore {
    width: u32,
    height: u32,
    bodies: Vec<Body>,
    segments: Vec<Segment>,
    config: SimConfig,

    // Scratch reused every pass
    broad_phase: BroadPhaseRegistry,
    pairs: Vec<CandidatePair>,

    render: RenderBuffers,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create an empty world with fixed bounds [0, width] x [0, height]
    pub fn new(width: u32, height: u32) -> Self {
        init::create_world_core(width, height)
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn obstacle_count(&self) -> usize { self.segments.len() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn bodies(&self) -> &[Body] { &self.bodies }

    pub fn body(&self, index: usize) -> Option<&Body> { self.bodies.get(index) }

    pub fn config(&self) -> &SimConfig { &self.config }

    // === BODIES & OBSTACLES ===

    /// Add a body unless it overlaps a body, an obstacle or the bounds.
    /// Returns the assigned index.
    pub fn insert(&mut self, body: Body) -> Result<usize, InsertError> {
        commands::insert(self, body)
    }

    /// `insert` reduced to accepted / rejected
    pub fn try_insert(&mut self, body: Body) -> bool {
        commands::try_insert(self, body)
    }

    pub fn add_obstacle(&mut self, start: Vec2, end: Vec2) {
        commands::add_obstacle(self, start, end)
    }

    // === STEPPING ===

    pub fn step_frame(&mut self, dt: f32, drag: f32, substeps: u32, algorithm: CollisionAlgorithm) -> u32 {
        step::step_frame(self, dt, drag, substeps, algorithm)
    }

    pub fn step(&mut self, dt: f32) -> u32 {
        step::step(self, dt)
    }

    // === DIAGNOSTICS ===

    /// Σ mass · |velocity| (sum of per-body scalar magnitudes)
    pub fn momentum(&self) -> f32 {
        let policy = self.config.mass_policy;
        self.bodies
            .iter()
            .map(|b| b.mass(policy) * b.velocity.length())
            .sum()
    }

    /// Σ mass · velocity
    pub fn momentum_vector(&self) -> Vec2 {
        let policy = self.config.mass_policy;
        self.bodies
            .iter()
            .fold(Vec2::zero(), |acc, b| acc + b.velocity * b.mass(policy))
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last frame's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === SETTINGS ===

    pub fn set_gravity(&mut self, x: f32, y: f32) -> Result<(), ConfigError> {
        settings::set_gravity(self, x, y)
    }

    pub fn set_restitution(&mut self, restitution: f32) -> Result<(), ConfigError> {
        settings::set_restitution(self, restitution)
    }

    pub fn set_mass_policy(&mut self, policy: MassPolicy) {
        settings::set_mass_policy(self, policy);
    }

    pub fn set_color_policy(&mut self, policy: ColorPolicy) {
        settings::set_color_policy(self, policy);
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<(), ConfigError> {
        settings::load_config_json(self, json)
    }

    pub fn config_json(&self) -> Result<String, ConfigError> {
        settings::config_json(self)
    }

    // === SNAPSHOT BUFFERS ===

    /// [posX, posY, velX, velY, radius] per body
    pub fn body_buffer(&self) -> &[f32] { &self.render.body_buffer }

    /// [r, g, b] per body
    pub fn color_buffer(&self) -> &[u8] { &self.render.color_buffer }

    /// Get pointer to body buffer (for JS rendering)
    pub fn body_buffer_ptr(&self) -> *const f32 {
        self.render.body_buffer.as_ptr()
    }

    /// Get pointer to color buffer (for JS rendering)
    pub fn color_buffer_ptr(&self) -> *const u8 {
        self.render.color_buffer.as_ptr()
    }

    pub(crate) fn snapshot_layout_data(&self) -> SnapshotLayoutData {
        SnapshotLayoutData {
            body_ptr: self.body_buffer_ptr(),
            body_len_elements: self.render.body_buffer.len(),
            body_len_bytes: self.render.body_buffer.len() * std::mem::size_of::<f32>(),
            color_ptr: self.color_buffer_ptr(),
            color_len_elements: self.render.color_buffer.len(),
            color_len_bytes: self.render.color_buffer.len(),
            body_count: self.bodies.len(),
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
