use wasm_bindgen::prelude::*;

use super::aabb::Aabb;
use super::policy::MassPolicy;
use super::vec2::Vec2;

/// Dynamic circular particle
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Center (pixels)
    #[wasm_bindgen(skip)]
    pub pos: Vec2,
    /// Pixels per second
    #[wasm_bindgen(skip)]
    pub velocity: Vec2,
    /// Always > 0
    #[wasm_bindgen(skip)]
    pub radius: f32,
}

#[wasm_bindgen]
impl Body {
    /// Panics on a non-positive or non-finite radius (host bug, not a runtime condition)
    #[wasm_bindgen(constructor)]
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        assert_valid_radius(radius);
        Self {
            pos: position,
            velocity,
            radius,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    #[wasm_bindgen(setter)]
    pub fn set_position(&mut self, position: Vec2) {
        self.pos = position;
    }

    #[wasm_bindgen(getter)]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[wasm_bindgen(setter)]
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    #[wasm_bindgen(getter)]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[wasm_bindgen(setter)]
    pub fn set_radius(&mut self, radius: f32) {
        assert_valid_radius(radius);
        self.radius = radius;
    }

    /// True if the point lies strictly inside the circle
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.dist_squared(point) < self.radius * self.radius
    }
}

impl Body {
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::around_circle(self.pos, self.radius)
    }

    #[inline]
    pub fn mass(&self, policy: MassPolicy) -> f32 {
        policy.mass(self.radius)
    }

    /// Circles overlap iff d < r1 + r2 (tangency is not an overlap)
    #[inline]
    pub fn overlaps(&self, other: &Body) -> bool {
        let radius_sum = self.radius + other.radius;
        self.pos.dist_squared(other.pos) < radius_sum * radius_sum
    }
}

#[inline]
fn assert_valid_radius(radius: f32) {
    assert!(
        radius.is_finite() && radius > 0.0,
        "body radius must be finite and > 0, got {radius}"
    );
}
