use super::vec2::Vec2;

/// Axis-aligned bounding box (closed on both axes)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box of a circle: [center - r, center + r] per axis
    #[inline]
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self {
            min: Vec2::new(center.x - radius, center.y - radius),
            max: Vec2::new(center.x + radius, center.y + radius),
        }
    }

    #[inline]
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x && other.min.x <= self.max.x
    }

    #[inline]
    pub fn overlaps_y(&self, other: &Aabb) -> bool {
        self.min.y <= other.max.y && other.min.y <= self.max.y
    }

    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }
}
