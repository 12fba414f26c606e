use collisions::{Body, CollisionAlgorithm, ColorPolicy, ConfigError, MassPolicy, SimConfig, Vec2, World, WorldCore};

const CONFIG: &str = r#"{
    "drag": 0.999,
    "substeps": 4,
    "algorithm": "pairwise",
    "mass_policy": "uniform",
    "color_policy": "speed",
    "restitution": 0.9,
    "obstacle_restitution": 0.95,
    "gravity": [0.0, 500.0],
    "rest_speed_sq": 0.01,
    "max_relaxation_passes": 2,
    "max_separation_passes": 64
}"#;

#[test]
fn config_smoke_parses_and_drives_step() {
    let mut world = World::new(400, 300);
    world.load_config(CONFIG.to_string()).expect("config should load");

    let cfg = world.core().config();
    assert_eq!(cfg.substeps, 4);
    assert_eq!(cfg.algorithm, CollisionAlgorithm::Pairwise);
    assert_eq!(cfg.mass_policy, MassPolicy::Uniform);
    assert_eq!(cfg.color_policy, ColorPolicy::Speed);
    assert_eq!(cfg.gravity, [0.0, 500.0]);
    assert_eq!(cfg.obstacle_restitution, 0.95);
    assert_eq!(cfg.max_separation_passes, 64);

    assert!(world.try_insert(Body::new(Vec2::new(200.0, 100.0), Vec2::zero(), 10.0)));
    world.step(1.0 / 60.0);

    // Gravity pulls the body down
    let body = world.body(0).expect("body 0 exists");
    assert!(body.velocity.y > 0.0);
    assert!(body.pos.y > 100.0);

    let json = world.config_json().expect("config should serialize");
    let back = SimConfig::from_json(&json).expect("round trip");
    assert_eq!(&back, world.core().config());
}

#[test]
fn config_smoke_rejects_bad_values() {
    let mut core = WorldCore::new(100, 100);
    let err = core
        .load_config_json(r#"{"substeps": 0}"#)
        .expect_err("zero substeps must be rejected");
    assert!(matches!(err, ConfigError::InvalidParam(_)));
    assert_eq!(core.config(), &SimConfig::default());
}
