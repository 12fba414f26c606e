use crate::domain::{Body, Segment, Vec2};

use super::CONTACT_SLOP;

/// Circle vs static segment.
///
/// The closest point on the segment is the contact origin. If the center is
/// closer than `radius`, it is pushed out along the contact normal and the
/// normal velocity is reflected (scaled by `restitution`) when it points into
/// the segment.
pub fn collide_segment(body: &mut Body, segment: &Segment, restitution: f32) -> bool {
    let closest = segment.closest_point(body.pos);
    let offset = body.pos - closest;
    let dist_sq = offset.length_squared();
    let r = body.radius;

    if dist_sq >= r * r {
        return false;
    }

    let dist = dist_sq.sqrt();
    let normal = if dist > 1e-6 {
        offset / dist
    } else {
        on_segment_normal(body, segment)
    };

    body.pos = closest + normal * (r + CONTACT_SLOP);

    let vn = body.velocity.dot(normal);
    if vn < 0.0 {
        body.velocity -= normal * ((1.0 + restitution) * vn);
    }

    true
}

/// Center lies on the segment: push back toward the side it came from
fn on_segment_normal(body: &Body, segment: &Segment) -> Vec2 {
    let mut normal = segment.left_normal();
    if normal == Vec2::zero() {
        // Degenerate segment: back along the velocity, else +y
        normal = (-body.velocity).normalize();
        if normal == Vec2::zero() {
            normal = Vec2::new(0.0, 1.0);
        }
        return normal;
    }
    if body.velocity.dot(normal) > 0.0 {
        normal = -normal;
    }
    normal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Segment {
        Segment::new(Vec2::new(0.0, 100.0), Vec2::new(200.0, 100.0))
    }

    #[test]
    fn falling_body_bounces_off_floor() {
        let mut b = Body::new(Vec2::new(50.0, 96.0), Vec2::new(3.0, 40.0), 5.0);
        assert!(collide_segment(&mut b, &floor(), 1.0));
        assert!(b.pos.y <= 95.0);
        assert_eq!(b.velocity, Vec2::new(3.0, -40.0));
    }

    #[test]
    fn endpoint_acts_as_round_cap() {
        let mut b = Body::new(Vec2::new(203.0, 97.0), Vec2::new(-4.0, 0.0), 5.0);
        assert!(collide_segment(&mut b, &floor(), 1.0));
        let end = Vec2::new(200.0, 100.0);
        assert!(b.pos.dist(end) >= 5.0);
        // Normal points from the endpoint to the center, velocity now leaves it
        assert!(b.velocity.dot(b.pos - end) >= 0.0);
    }

    #[test]
    fn far_body_is_untouched() {
        let mut b = Body::new(Vec2::new(50.0, 80.0), Vec2::new(0.0, 40.0), 5.0);
        let before = b;
        assert!(!collide_segment(&mut b, &floor(), 1.0));
        assert_eq!(b, before);
    }

    #[test]
    fn center_on_segment_goes_back_where_it_came_from() {
        let mut b = Body::new(Vec2::new(50.0, 100.0), Vec2::new(0.0, 10.0), 5.0);
        assert!(collide_segment(&mut b, &floor(), 1.0));
        assert!(b.pos.y < 100.0);
        assert!(b.velocity.y < 0.0);
    }

    #[test]
    fn restitution_damps_the_bounce() {
        let mut b = Body::new(Vec2::new(50.0, 96.0), Vec2::new(3.0, 40.0), 5.0);
        assert!(collide_segment(&mut b, &floor(), 0.95));
        assert!((b.velocity.y + 38.0).abs() < 1e-4);
        assert_eq!(b.velocity.x, 3.0);
    }
}
