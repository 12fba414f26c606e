//! Broad phase - cheap AABB culling that produces candidate pairs
//!
//! Both strategies emit the same pair set, as `(i, j)` with `i < j`, sorted
//! ascending. Only the amount of work differs. Narrow phase relies on the
//! ordering being identical to stay deterministic across strategies.

mod pairwise;
mod sweep_and_prune;

pub use pairwise::Pairwise;
pub use sweep_and_prune::SweepAndPrune;

use crate::domain::{Aabb, Body, CollisionAlgorithm};

/// Candidate pair of body indices, always `(lower, higher)`
pub type CandidatePair = (usize, usize);

/// Broad-phase strategy
pub trait BroadPhase {
    /// Fill `pairs` (cleared first) with every AABB-overlapping pair.
    /// Returns the number of primitive overlap tests performed.
    fn find_pairs(&mut self, boxes: &[Aabb], pairs: &mut Vec<CandidatePair>) -> u32;
}

/// Strategy registry - dispatch by algorithm id, owns shared scratch
pub struct BroadPhaseRegistry {
    pairwise: Pairwise,
    sweep_and_prune: SweepAndPrune,
    boxes: Vec<Aabb>,
}

impl BroadPhaseRegistry {
    pub fn new() -> Self {
        Self {
            pairwise: Pairwise::new(),
            sweep_and_prune: SweepAndPrune::new(),
            boxes: Vec::new(),
        }
    }

    pub fn get_mut(&mut self, algorithm: CollisionAlgorithm) -> &mut dyn BroadPhase {
        match algorithm {
            CollisionAlgorithm::Pairwise => &mut self.pairwise,
            CollisionAlgorithm::SweepAndPrune => &mut self.sweep_and_prune,
        }
    }

    /// Rebuild boxes from current positions and run the selected strategy
    pub fn find_pairs(
        &mut self,
        algorithm: CollisionAlgorithm,
        bodies: &[Body],
        pairs: &mut Vec<CandidatePair>,
    ) -> u32 {
        self.boxes.clear();
        self.boxes.extend(bodies.iter().map(Body::aabb));

        let boxes = std::mem::take(&mut self.boxes);
        let tests = self.get_mut(algorithm).find_pairs(&boxes, pairs);
        self.boxes = boxes;
        tests
    }
}

impl Default for BroadPhaseRegistry {
    fn default() -> Self {
        Self::new()
    }
}
