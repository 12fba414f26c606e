use crate::domain::Body;

/// Keep the circle inside [0, width] x [0, height].
///
/// A center closer than `radius` to an edge is clamped back and the velocity
/// component pointing into that edge is reflected, scaled by `restitution`.
/// Returns true on contact.
pub fn constrain_to_bounds(body: &mut Body, width: f32, height: f32, restitution: f32) -> bool {
    let r = body.radius;
    let x_hit = constrain_axis(&mut body.pos.x, &mut body.velocity.x, r, width, restitution);
    let y_hit = constrain_axis(&mut body.pos.y, &mut body.velocity.y, r, height, restitution);
    x_hit || y_hit
}

#[inline]
fn constrain_axis(pos: &mut f32, vel: &mut f32, radius: f32, extent: f32, restitution: f32) -> bool {
    if *pos < radius {
        *pos = radius;
        if *vel < 0.0 {
            *vel = -*vel * restitution;
        }
        true
    } else if *pos > extent - radius {
        *pos = extent - radius;
        if *vel > 0.0 {
            *vel = -*vel * restitution;
        }
        true
    } else {
        false
    }
}
