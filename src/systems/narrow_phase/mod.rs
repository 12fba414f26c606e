//! Narrow phase - exact overlap tests and contact response
//!
//! Body-body contacts exchange momentum along the center line. Walls and
//! segments are infinite mass: only the body's normal velocity is reflected.
//! Separation passes move positions only and run until dense piles are clear.

mod circle;
mod segment;
mod wall;

pub use circle::{resolve_circle_pair, separate_circle_pair};
pub use segment::collide_segment;
pub use wall::constrain_to_bounds;

use crate::domain::{Body, MassPolicy, Segment};

use super::broad_phase::CandidatePair;

/// Extra separation past exact tangency so the strict overlap test passes
/// after a correction despite f32 rounding.
pub const CONTACT_SLOP: f32 = 1e-3;

/// Overlap a separation pass leaves alone
pub const PENETRATION_TOLERANCE: f32 = 5e-3;

#[derive(Clone, Copy, Debug)]
pub struct ContactParams {
    pub mass_policy: MassPolicy,
    pub restitution: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConstraintHits {
    pub walls: u32,
    pub obstacles: u32,
}

impl ConstraintHits {
    pub fn any(&self) -> bool {
        self.walls > 0 || self.obstacles > 0
    }
}

/// Two distinct mutable bodies out of one slice
#[inline]
pub fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j);
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

/// Resolve candidates one pair at a time, in the given (ascending) order.
/// Returns the number of confirmed contacts.
pub fn resolve_pairs(bodies: &mut [Body], pairs: &[CandidatePair], params: &ContactParams) -> u32 {
    let mut contacts = 0u32;
    for &(i, j) in pairs {
        let (a, b) = pair_mut(bodies, i, j);
        if resolve_circle_pair(a, b, params) {
            contacts += 1;
        }
    }
    contacts
}

/// Position-only pass over the candidates, back to front when `reverse`.
/// Returns the number of pairs moved.
pub fn separate_pairs(
    bodies: &mut [Body],
    pairs: &[CandidatePair],
    mass_policy: MassPolicy,
    reverse: bool,
) -> u32 {
    let mut moved = 0u32;
    let mut visit = |&(i, j): &CandidatePair| {
        let (a, b) = pair_mut(bodies, i, j);
        if separate_circle_pair(a, b, mass_policy) {
            moved += 1;
        }
    };
    if reverse {
        pairs.iter().rev().for_each(&mut visit);
    } else {
        pairs.iter().for_each(&mut visit);
    }
    moved
}

/// Obstacles first, walls last so bounds always hold at the end of a pass
pub fn apply_constraints(
    bodies: &mut [Body],
    segments: &[Segment],
    width: f32,
    height: f32,
    restitution: f32,
) -> ConstraintHits {
    let mut hits = ConstraintHits::default();
    for body in bodies.iter_mut() {
        for segment in segments {
            if collide_segment(body, segment, restitution) {
                hits.obstacles += 1;
            }
        }
        if constrain_to_bounds(body, width, height, restitution) {
            hits.walls += 1;
        }
    }
    hits
}
