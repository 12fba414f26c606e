use crate::domain::{CollisionAlgorithm, Vec2};
use crate::systems::integrator::IntegrationParams;
use crate::systems::StepCounters;

use super::{render_extract, substep, PerfTimer, WorldCore};

/// Advance one displayed frame in `substeps` equal sub-steps.
/// Returns the broad-phase overlap tests performed across all sub-steps.
pub(super) fn step_frame(
    world: &mut WorldCore,
    dt: f32,
    drag: f32,
    substeps: u32,
    algorithm: CollisionAlgorithm,
) -> u32 {
    assert!(substeps >= 1, "step_frame needs at least one sub-step");

    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let params = IntegrationParams {
        dt: dt / substeps as f32,
        drag,
        gravity: Vec2::new(world.config.gravity[0], world.config.gravity[1]),
        rest_speed_sq: world.config.rest_speed_sq,
    };

    let mut totals = StepCounters::default();
    for _ in 0..substeps {
        let counters = substep::substep(world, &params, algorithm);
        totals.accumulate(&counters);
    }

    // Buffers change only here, after every sub-step has finished
    render_extract::refresh_snapshot(world);

    if perf_on {
        world.perf_stats.record_counters(&totals);
        world.perf_stats.substeps = substeps;
        world.perf_stats.body_count = world.bodies.len() as u32;
        world.perf_stats.obstacle_count = world.segments.len() as u32;
        if let Some(start) = step_start {
            world.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    world.frame += 1;
    totals.overlap_tests
}

/// `step_frame` with the configured drag, sub-steps and algorithm
pub(super) fn step(world: &mut WorldCore, dt: f32) -> u32 {
    let (drag, substeps, algorithm) = (world.config.drag, world.config.substeps, world.config.algorithm);
    step_frame(world, dt, drag, substeps, algorithm)
}
