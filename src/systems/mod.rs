//! Systems - broad phase, narrow phase and integration
//!
//! Stateless over the world: each system takes the body slice it works on.

pub mod broad_phase;
pub mod integrator;
pub mod narrow_phase;

/// Work done by one or more sub-steps (instrumentation only)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepCounters {
    /// Primitive AABB overlap tests in the broad phase
    pub overlap_tests: u32,
    pub candidate_pairs: u32,
    pub contacts_resolved: u32,
    pub wall_contacts: u32,
    pub obstacle_contacts: u32,
    /// Detection+resolution passes beyond the first
    pub relaxation_passes: u32,
    /// Position-only passes that moved something
    pub separation_passes: u32,
}

impl StepCounters {
    pub fn accumulate(&mut self, other: &StepCounters) {
        self.overlap_tests = self.overlap_tests.saturating_add(other.overlap_tests);
        self.candidate_pairs = self.candidate_pairs.saturating_add(other.candidate_pairs);
        self.contacts_resolved = self.contacts_resolved.saturating_add(other.contacts_resolved);
        self.wall_contacts = self.wall_contacts.saturating_add(other.wall_contacts);
        self.obstacle_contacts = self.obstacle_contacts.saturating_add(other.obstacle_contacts);
        self.relaxation_passes = self.relaxation_passes.saturating_add(other.relaxation_passes);
        self.separation_passes = self.separation_passes.saturating_add(other.separation_passes);
    }
}
