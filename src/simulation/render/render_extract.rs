//! Snapshot buffers read by the renderer through raw pointers.
//!
//! Layout: body buffer = [posX, posY, velX, velY, radius] per body,
//! color buffer = [r, g, b] per body, both in body-index order.

use crate::domain::{Body, ColorPolicy};

use super::{RenderBuffers, WorldCore};

pub const BODY_STRIDE: usize = 5;
pub const COLOR_STRIDE: usize = 3;

/// Rewrite both buffers from the body arena (end of every `step_frame`)
pub(super) fn refresh_snapshot(world: &mut WorldCore) {
    let n = world.bodies.len();
    world.render.body_buffer.resize(n * BODY_STRIDE, 0.0);
    world.render.color_buffer.resize(n * COLOR_STRIDE, 0);

    let policy = world.config.color_policy;
    for (i, body) in world.bodies.iter().enumerate() {
        write_body(&mut world.render, i, body, policy);
    }
}

/// Grow both buffers by one freshly inserted body
pub(super) fn append_body(world: &mut WorldCore, index: usize) {
    debug_assert_eq!(index + 1, world.bodies.len());
    world.render.body_buffer.resize((index + 1) * BODY_STRIDE, 0.0);
    world.render.color_buffer.resize((index + 1) * COLOR_STRIDE, 0);
    let policy = world.config.color_policy;
    write_body(&mut world.render, index, &world.bodies[index], policy);
}

#[inline]
fn write_body(render: &mut RenderBuffers, index: usize, body: &Body, policy: ColorPolicy) {
    let base = index * BODY_STRIDE;
    fast!(render.body_buffer, [base] = body.pos.x);
    fast!(render.body_buffer, [base + 1] = body.pos.y);
    fast!(render.body_buffer, [base + 2] = body.velocity.x);
    fast!(render.body_buffer, [base + 3] = body.velocity.y);
    fast!(render.body_buffer, [base + 4] = body.radius);

    let color = policy.color_for(index, body.velocity.length());
    let base = index * COLOR_STRIDE;
    fast!(render.color_buffer, [base] = color.r);
    fast!(render.color_buffer, [base + 1] = color.g);
    fast!(render.color_buffer, [base + 2] = color.b);
}
