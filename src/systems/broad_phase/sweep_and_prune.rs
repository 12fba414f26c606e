use crate::domain::Aabb;

use super::{BroadPhase, CandidatePair};

/// Sort-and-sweep along x with an active list.
///
/// Bodies are never reordered: the sweep works on an index permutation kept
/// between calls, so the nearly-sorted order from the previous sub-step makes
/// the sort cheap.
pub struct SweepAndPrune {
    order: Vec<usize>,
    active: Vec<usize>,
}

impl SweepAndPrune {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            active: Vec::new(),
        }
    }

    fn rebuild_order(&mut self, boxes: &[Aabb]) {
        // Body count only grows, keep the previous permutation and append new ids
        if self.order.len() != boxes.len() {
            if self.order.len() > boxes.len() {
                self.order.clear();
            }
            let start = self.order.len();
            self.order.extend(start..boxes.len());
        }
        // Stable sort is adaptive: near-linear on the previous sub-step's order
        self.order
            .sort_by(|&a, &b| boxes[a].min.x.total_cmp(&boxes[b].min.x));
    }
}

impl Default for SweepAndPrune {
    fn default() -> Self {
        Self::new()
    }
}

impl BroadPhase for SweepAndPrune {
    fn find_pairs(&mut self, boxes: &[Aabb], pairs: &mut Vec<CandidatePair>) -> u32 {
        pairs.clear();
        self.active.clear();
        self.rebuild_order(boxes);

        let mut tests = 0u32;

        for &j in self.order.iter() {
            let opened = fast!(boxes, [j]);

            // Close every box the sweep line has passed
            self.active.retain(|&i| boxes[i].max.x >= opened.min.x);

            // Remaining active boxes overlap on x, finish with y
            for &i in self.active.iter() {
                tests = tests.saturating_add(1);
                if fast!(boxes, [i]).overlaps_y(opened) {
                    pairs.push(if i < j { (i, j) } else { (j, i) });
                }
            }

            self.active.push(j);
        }

        pairs.sort_unstable();
        tests
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Vec2;

    fn boxes(centers: &[(f32, f32)], r: f32) -> Vec<Aabb> {
        centers
            .iter()
            .map(|&(x, y)| Aabb::around_circle(Vec2::new(x, y), r))
            .collect()
    }

    #[test]
    fn unsorted_input_still_yields_ordered_pairs() {
        let b = boxes(&[(20.0, 0.0), (0.0, 0.0), (1.5, 0.0), (19.0, 0.0)], 1.0);
        let mut pairs = Vec::new();
        SweepAndPrune::new().find_pairs(&b, &mut pairs);
        assert_eq!(pairs, vec![(0, 3), (1, 2)]);
    }

    #[test]
    fn x_overlap_without_y_overlap_is_pruned() {
        let b = boxes(&[(0.0, 0.0), (0.5, 10.0)], 1.0);
        let mut pairs = Vec::new();
        let tests = SweepAndPrune::new().find_pairs(&b, &mut pairs);
        assert_eq!(tests, 1);
        assert!(pairs.is_empty());
    }

    #[test]
    fn touching_intervals_stay_active() {
        // max.x of the first equals min.x of the second
        let b = boxes(&[(0.0, 0.0), (2.0, 0.0)], 1.0);
        let mut pairs = Vec::new();
        SweepAndPrune::new().find_pairs(&b, &mut pairs);
        assert_eq!(pairs, vec![(0, 1)]);
    }

    #[test]
    fn order_is_reused_when_bodies_are_added() {
        let mut sap = SweepAndPrune::new();
        let mut pairs = Vec::new();
        sap.find_pairs(&boxes(&[(0.0, 0.0), (10.0, 0.0)], 1.0), &mut pairs);
        assert!(pairs.is_empty());
        sap.find_pairs(&boxes(&[(0.0, 0.0), (10.0, 0.0), (9.0, 0.5)], 1.0), &mut pairs);
        assert_eq!(pairs, vec![(1, 2)]);
    }
}
