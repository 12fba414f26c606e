use collisions::{Body, CollisionAlgorithm, Vec2, World, BODY_STRIDE, COLOR_STRIDE};

const DT: f32 = 1.0 / 60.0;

fn xorshift(state: &mut u32) -> f32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    (x as f32) / (u32::MAX as f32)
}

/// Bodies on a jittered grid with random velocities, a couple of obstacles
fn populated_world(seed: u32) -> World {
    let mut world = World::new(800, 600);
    world.add_obstacle(Vec2::new(200.0, 450.0), Vec2::new(600.0, 520.0));
    world.add_obstacle(Vec2::new(100.0, 100.0), Vec2::new(100.0, 250.0));

    let mut rng = seed;
    for gx in 0..12 {
        for gy in 0..8 {
            let pos = Vec2::new(
                40.0 + gx as f32 * 62.0 + xorshift(&mut rng) * 10.0,
                40.0 + gy as f32 * 68.0 + xorshift(&mut rng) * 10.0,
            );
            let vel = Vec2::new(
                (xorshift(&mut rng) - 0.5) * 600.0,
                (xorshift(&mut rng) - 0.5) * 600.0,
            );
            let radius = 6.0 + xorshift(&mut rng) * 10.0;
            // Some spots land on an obstacle and get rejected, that's fine
            world.try_insert(Body::new(pos, vel, radius));
        }
    }
    world
}

fn bodies(world: &World) -> Vec<Body> {
    world.core().bodies().to_vec()
}

fn assert_separated(world: &World, frame: usize) {
    let bs = world.core().bodies();
    for i in 0..bs.len() {
        for j in (i + 1)..bs.len() {
            let d = bs[i].pos.dist(bs[j].pos);
            assert!(
                d >= bs[i].radius + bs[j].radius - 1e-2,
                "frame {frame}: bodies {i} and {j} overlap, d = {d}"
            );
        }
    }
}

#[test]
fn gravity_pile_stays_separated() {
    let mut world = World::new(300, 300);
    assert!(world.set_gravity(0.0, 500.0).is_ok());
    for row in 0..10 {
        for col in 0..14 {
            let pos = Vec2::new(11.0 + col as f32 * 21.0, 11.0 + row as f32 * 21.0);
            assert!(world.try_insert(Body::new(pos, Vec2::zero(), 10.0)));
        }
    }
    assert_eq!(world.body_count(), 140);

    for frame in 0..240 {
        world.step_frame(DT, 1.0, 8, CollisionAlgorithm::SweepAndPrune);
        assert_separated(&world, frame);
        for b in bodies(&world) {
            assert!(b.pos.y >= 10.0 && b.pos.y <= 290.0, "y = {}", b.pos.y);
        }
    }
}

#[test]
fn jammed_box_stays_separated() {
    // 10 x 10 tangent bodies filling a 200 x 200 box exactly
    let mut world = World::new(200, 200);
    let mut rng = 99u32;
    for row in 0..10 {
        for col in 0..10 {
            let pos = Vec2::new(10.0 + col as f32 * 20.0, 10.0 + row as f32 * 20.0);
            let vel = Vec2::new(
                (xorshift(&mut rng) - 0.5) * 400.0,
                (xorshift(&mut rng) - 0.5) * 400.0,
            );
            assert!(world.try_insert(Body::new(pos, vel, 10.0)));
        }
    }

    for frame in 0..120 {
        world.step_frame(DT, 1.0, 8, CollisionAlgorithm::SweepAndPrune);
        assert_separated(&world, frame);
        for b in bodies(&world) {
            assert!(b.pos.x >= 10.0 && b.pos.x <= 190.0);
            assert!(b.pos.y >= 10.0 && b.pos.y <= 190.0);
        }
    }
}

#[test]
fn no_two_bodies_overlap_after_step() {
    let mut world = populated_world(2024);
    assert!(world.body_count() > 60);

    for frame in 0..180 {
        world.step_frame(DT, 1.0, 8, CollisionAlgorithm::SweepAndPrune);
        assert_separated(&world, frame);
    }
}

#[test]
fn bodies_stay_inside_bounds() {
    let mut world = populated_world(77);
    for _ in 0..120 {
        world.step_frame(DT, 1.0, 8, CollisionAlgorithm::Pairwise);
        for b in bodies(&world) {
            assert!(b.pos.x >= b.radius && b.pos.x <= 800.0 - b.radius);
            assert!(b.pos.y >= b.radius && b.pos.y <= 600.0 - b.radius);
        }
    }
}

#[test]
fn coincident_body_is_rejected() {
    let mut world = World::new(200, 200);
    let b = Body::new(Vec2::new(100.0, 100.0), Vec2::new(5.0, 0.0), 15.0);
    assert!(world.try_insert(b));
    assert!(!world.try_insert(b));
    assert_eq!(world.body_count(), 1);
}

#[test]
fn accepted_body_is_appended_last() {
    let mut world = World::new(200, 200);
    assert!(world.try_insert(Body::new(Vec2::new(50.0, 50.0), Vec2::zero(), 10.0)));
    let b = Body::new(Vec2::new(150.0, 150.0), Vec2::new(1.0, 2.0), 12.0);
    assert!(world.try_insert(b));
    assert_eq!(world.body_count(), 2);
    assert_eq!(world.body(1), Some(b));
    assert_eq!(world.insert(Body::new(Vec2::new(50.0, 150.0), Vec2::zero(), 5.0)), Ok(2));
}

#[test]
fn pairwise_and_sweep_and_prune_agree() {
    let mut brute = populated_world(31337);
    let mut sweep = populated_world(31337);
    assert_eq!(brute.body_buffer(), sweep.body_buffer());

    for frame in 0..240 {
        let brute_tests = brute.step_frame(DT, 0.999, 6, CollisionAlgorithm::Pairwise);
        let sweep_tests = sweep.step_frame(DT, 0.999, 6, CollisionAlgorithm::SweepAndPrune);
        assert!(sweep_tests <= brute_tests);

        for (k, (a, b)) in brute
            .body_buffer()
            .iter()
            .zip(sweep.body_buffer())
            .enumerate()
        {
            assert!((a - b).abs() <= 1e-4, "frame {frame}, slot {k}: {a} vs {b}");
        }
    }
}

#[test]
fn momentum_is_conserved_in_free_collision() {
    let mut world = World::new(2000, 2000);
    let a = Body::new(Vec2::new(900.0, 1000.0), Vec2::new(150.0, 20.0), 12.0);
    let b = Body::new(Vec2::new(1000.0, 1010.0), Vec2::new(-90.0, 0.0), 7.0);
    assert!(world.try_insert(a));
    assert!(world.try_insert(b));

    let mut collided = false;
    for _ in 0..60 {
        let before = world.core().momentum_vector();
        world.step_frame(DT, 1.0, 1, CollisionAlgorithm::SweepAndPrune);
        let after = world.core().momentum_vector();
        assert!((before - after).length() <= 1e-2 * before.length().max(1.0));
        if world.body(1).map(|b| b.velocity.x > 0.0).unwrap_or(false) {
            collided = true;
        }
    }
    assert!(collided, "bodies should have collided");
}

#[test]
fn wall_reverses_fast_body() {
    let mut world = World::new(1200, 800);
    assert!(world.try_insert(Body::new(Vec2::new(10.0, 400.0), Vec2::new(1000.0, 0.0), 7.0)));

    let mut reversed = false;
    for _ in 0..200 {
        world.step_frame(DT, 1.0, 1, CollisionAlgorithm::Pairwise);
        let b = world.body(0).expect("body 0 exists");
        assert!(b.pos.x >= 7.0 && b.pos.x <= 1193.0, "x = {}", b.pos.x);
        if !reversed && b.velocity.x < 0.0 {
            // Flipped exactly when the clamp put it on the wall
            assert_eq!(b.pos.x, 1193.0);
            reversed = true;
        }
    }
    assert!(reversed);
}

#[test]
fn buffers_track_body_count() {
    let mut world = World::new(400, 400);
    let check = |w: &World| {
        assert_eq!(w.body_buffer().len(), w.body_count() * BODY_STRIDE);
        assert_eq!(w.color_buffer().len(), w.body_count() * COLOR_STRIDE);
        assert_eq!(w.body_buffer_len(), w.body_count() * 5);
        assert_eq!(w.color_buffer_len(), w.body_count() * 3);
        let layout = w.snapshot_layout();
        assert_eq!(layout.body_len_elements() as usize, w.body_count() * 5);
        assert_eq!(layout.body_len_bytes() as usize, w.body_count() * 20);
        assert_eq!(layout.color_len_bytes() as usize, w.body_count() * 3);
    };

    check(&world);
    for i in 0..20 {
        let pos = Vec2::new(20.0 + (i % 10) as f32 * 36.0, 50.0 + (i / 10) as f32 * 100.0);
        world.try_insert(Body::new(pos, Vec2::new(40.0, -30.0), 10.0));
        check(&world);
        world.step_frame(DT, 1.0, 2, CollisionAlgorithm::SweepAndPrune);
        check(&world);
    }
    // Rejected inserts must not grow the buffers either
    let occupied = world.body(0).expect("body 0 exists");
    assert!(!world.try_insert(occupied));
    check(&world);
}
