use crate::domain::Aabb;

use super::{BroadPhase, CandidatePair};

/// O(n²) baseline: every unordered pair is tested
pub struct Pairwise;

impl Pairwise {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Pairwise {
    fn default() -> Self {
        Self::new()
    }
}

impl BroadPhase for Pairwise {
    fn find_pairs(&mut self, boxes: &[Aabb], pairs: &mut Vec<CandidatePair>) -> u32 {
        pairs.clear();
        let mut tests = 0u32;

        for i in 0..boxes.len() {
            let a = fast!(boxes, [i]);
            for j in (i + 1)..boxes.len() {
                tests = tests.saturating_add(1);
                if a.overlaps(fast!(boxes, [j])) {
                    pairs.push((i, j));
                }
            }
        }

        tests
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Vec2;

    #[test]
    fn pairs_come_out_in_index_order() {
        let boxes: Vec<Aabb> = [0.0, 1.0, 2.0, 50.0]
            .iter()
            .map(|&x| Aabb::around_circle(Vec2::new(x, 0.0), 1.0))
            .collect();
        let mut pairs = Vec::new();
        let tests = Pairwise::new().find_pairs(&boxes, &mut pairs);
        assert_eq!(tests, 6);
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    }
}
