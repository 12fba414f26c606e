//! Integrator - drag, optional gravity, semi-implicit Euler
//!
//! Velocity changes from the previous sub-step's contacts are already in
//! `velocity`, so the translation below uses the post-contact velocity.

use crate::domain::{Body, Vec2};

#[derive(Clone, Copy, Debug)]
pub struct IntegrationParams {
    /// Sub-step length in seconds
    pub dt: f32,
    /// Velocity factor per sub-step (1 = none, 0 = instant stop)
    pub drag: f32,
    pub gravity: Vec2,
    /// Squared speed under which the body is put to rest (0 disables)
    pub rest_speed_sq: f32,
}

pub fn integrate(bodies: &mut [Body], params: &IntegrationParams) {
    let gravity_dv = params.gravity * params.dt;
    for body in bodies.iter_mut() {
        body.velocity = body.velocity * params.drag + gravity_dv;
        if body.velocity.length_squared() < params.rest_speed_sq {
            body.velocity = Vec2::zero();
        }
        body.pos += body.velocity * params.dt;
    }
}
