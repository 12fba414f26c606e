use crate::domain::{Body, Segment, Vec2};
use crate::error::InsertError;

use super::render_extract;
use super::WorldCore;

/// Append `body` if its circle is inside the bounds and clear of every body
/// and obstacle. Returns the new body index.
pub(super) fn insert(world: &mut WorldCore, body: Body) -> Result<usize, InsertError> {
    let r = body.radius;
    let p = body.pos;
    let (w, h) = (world.width as f32, world.height as f32);

    let inside = p.x >= r && p.x <= w - r && p.y >= r && p.y <= h - r;
    if !p.is_finite() || !inside {
        return Err(InsertError::OutOfBounds);
    }
    if !body.velocity.is_finite() {
        return Err(InsertError::NonFiniteVelocity);
    }

    if let Some(i) = world.bodies.iter().position(|other| other.overlaps(&body)) {
        return Err(InsertError::OverlapsBody(i));
    }

    if let Some(i) = world.segments.iter().position(|s| s.touches_circle(p, r)) {
        return Err(InsertError::OverlapsObstacle(i));
    }

    world.bodies.push(body);
    let index = world.bodies.len() - 1;
    render_extract::append_body(world, index);
    Ok(index)
}

pub(super) fn try_insert(world: &mut WorldCore, body: Body) -> bool {
    match insert(world, body) {
        Ok(_) => true,
        Err(e) => {
            console_log!("({}, {}) rejected: {}", body.pos.x, body.pos.y, e);
            false
        }
    }
}

/// No placement check: crossing existing bodies is the caller's business
pub(super) fn add_obstacle(world: &mut WorldCore, start: Vec2, end: Vec2) {
    world.segments.push(Segment::new(start, end));
}
