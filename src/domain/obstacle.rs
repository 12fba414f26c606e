use super::vec2::Vec2;

/// Static line obstacle (infinite mass, never moves)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Closest point on the segment to `p` (projection clamped to the extent)
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        let dir = self.end - self.start;
        let len_sq = dir.length_squared();
        if len_sq <= f32::EPSILON {
            return self.start;
        }
        let t = ((p - self.start).dot(dir) / len_sq).clamp(0.0, 1.0);
        self.start + dir * t
    }

    /// Unit normal on the left of start -> end (zero for a degenerate segment)
    pub fn left_normal(&self) -> Vec2 {
        (self.end - self.start).perp().normalize()
    }

    /// True if a circle at `center` is strictly closer than `radius`
    pub fn touches_circle(&self, center: Vec2, radius: f32) -> bool {
        self.closest_point(center).dist_squared(center) < radius * radius
    }
}
