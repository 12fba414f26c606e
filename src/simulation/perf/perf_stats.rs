use wasm_bindgen::prelude::*;

use crate::systems::StepCounters;

/// Snapshot of the last `step_frame` (zeros while perf metrics are disabled)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) broad_phase_ms: f64,
    pub(super) narrow_phase_ms: f64,
    pub(super) constraints_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) substeps: u32,
    pub(super) overlap_tests: u32,
    pub(super) candidate_pairs: u32,
    pub(super) contacts_resolved: u32,
    pub(super) wall_contacts: u32,
    pub(super) obstacle_contacts: u32,
    pub(super) relaxation_passes: u32,
    pub(super) separation_passes: u32,
    pub(super) body_count: u32,
    pub(super) obstacle_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn record_counters(&mut self, counters: &StepCounters) {
        self.overlap_tests = counters.overlap_tests;
        self.candidate_pairs = counters.candidate_pairs;
        self.contacts_resolved = counters.contacts_resolved;
        self.wall_contacts = counters.wall_contacts;
        self.obstacle_contacts = counters.obstacle_contacts;
        self.relaxation_passes = counters.relaxation_passes;
        self.separation_passes = counters.separation_passes;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn broad_phase_ms(&self) -> f64 { self.broad_phase_ms }
    #[wasm_bindgen(getter)]
    pub fn narrow_phase_ms(&self) -> f64 { self.narrow_phase_ms }
    #[wasm_bindgen(getter)]
    pub fn constraints_ms(&self) -> f64 { self.constraints_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn substeps(&self) -> u32 { self.substeps }
    #[wasm_bindgen(getter)]
    pub fn overlap_tests(&self) -> u32 { self.overlap_tests }
    #[wasm_bindgen(getter)]
    pub fn candidate_pairs(&self) -> u32 { self.candidate_pairs }
    #[wasm_bindgen(getter)]
    pub fn contacts_resolved(&self) -> u32 { self.contacts_resolved }
    #[wasm_bindgen(getter)]
    pub fn wall_contacts(&self) -> u32 { self.wall_contacts }
    #[wasm_bindgen(getter)]
    pub fn obstacle_contacts(&self) -> u32 { self.obstacle_contacts }
    #[wasm_bindgen(getter)]
    pub fn relaxation_passes(&self) -> u32 { self.relaxation_passes }
    #[wasm_bindgen(getter)]
    pub fn separation_passes(&self) -> u32 { self.separation_passes }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn obstacle_count(&self) -> u32 { self.obstacle_count }
}
