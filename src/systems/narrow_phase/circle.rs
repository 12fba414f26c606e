use crate::domain::{Body, MassPolicy, Vec2};

use super::{ContactParams, CONTACT_SLOP, PENETRATION_TOLERANCE};

/// Circle-circle test and response.
///
/// Normal velocity components are exchanged with the 1-D collision formula
/// (mass-weighted, scaled by restitution) only while the bodies approach;
/// tangential components are untouched. The overlap is then removed along the
/// normal, split by inverse mass. Returns false if the circles don't overlap.
pub fn resolve_circle_pair(a: &mut Body, b: &mut Body, params: &ContactParams) -> bool {
    if !a.overlaps(b) {
        return false;
    }

    let axis = b.pos - a.pos;
    let dist = axis.length();
    // Coincident centers: any direction works, +x keeps it deterministic
    let normal = if dist > 1e-6 { axis / dist } else { Vec2::new(1.0, 0.0) };

    let m1 = a.mass(params.mass_policy);
    let m2 = b.mass(params.mass_policy);
    let total = m1 + m2;

    let v1n = a.velocity.dot(normal);
    let v2n = b.velocity.dot(normal);
    let approach = v1n - v2n;

    if approach > 0.0 {
        let e = params.restitution;
        let p = m1 * v1n + m2 * v2n;
        let new_v1n = (p - m2 * e * approach) / total;
        let new_v2n = (p + m1 * e * approach) / total;
        a.velocity += normal * (new_v1n - v1n);
        b.velocity += normal * (new_v2n - v2n);
    }

    push_apart(a, b, normal, a.radius + b.radius - dist + CONTACT_SLOP, m1, m2);

    true
}

/// Position-only correction: removes an overlap deeper than
/// `PENETRATION_TOLERANCE`, velocities untouched. Returns true if it moved
/// the bodies.
pub fn separate_circle_pair(a: &mut Body, b: &mut Body, mass_policy: MassPolicy) -> bool {
    let axis = b.pos - a.pos;
    let dist = axis.length();
    let penetration = a.radius + b.radius - dist;
    if penetration <= PENETRATION_TOLERANCE {
        return false;
    }

    let normal = if dist > 1e-6 { axis / dist } else { Vec2::new(1.0, 0.0) };
    let m1 = a.mass(mass_policy);
    let m2 = b.mass(mass_policy);
    push_apart(a, b, normal, penetration + CONTACT_SLOP, m1, m2);

    true
}

// Heavier body moves less: share_a = (1/m1) / (1/m1 + 1/m2) = m2 / total
#[inline]
fn push_apart(a: &mut Body, b: &mut Body, normal: Vec2, push: f32, m1: f32, m2: f32) {
    let total = m1 + m2;
    a.pos -= normal * (push * (m2 / total));
    b.pos += normal * (push * (m1 / total));
}
