use crate::domain::CollisionAlgorithm;
use crate::systems::integrator::{integrate, IntegrationParams};
use crate::systems::narrow_phase::{apply_constraints, resolve_pairs, separate_pairs, ContactParams};
use crate::systems::StepCounters;

use super::{PerfTimer, WorldCore};

/// One sub-step: integrate, then detection + resolution passes.
///
/// The first pass exchanges impulses and applies wall/obstacle constraints.
/// Resolving one pair can push a body into a third one (or into a wall), so
/// passes repeat while anything was touched, up to `max_relaxation_passes`
/// extra passes. Bodies still approaching in a later pass get an impulse too.
///
/// Dense piles can still overlap after that. Position-only separation passes
/// then run until none is deeper than `PENETRATION_TOLERANCE`, bounded by
/// `max_separation_passes`.
pub(super) fn substep(
    world: &mut WorldCore,
    params: &IntegrationParams,
    algorithm: CollisionAlgorithm,
) -> StepCounters {
    let perf_on = world.perf_enabled;
    let contact = ContactParams {
        mass_policy: world.config.mass_policy,
        restitution: world.config.restitution,
    };
    let (width, height) = (world.width as f32, world.height as f32);
    let max_extra = world.config.max_relaxation_passes;
    let max_separation = world.config.max_separation_passes;
    let obstacle_restitution = world.config.obstacle_restitution;

    let mut counters = StepCounters::default();

    PerfTimer::measure(perf_on, &mut world.perf_stats.integrate_ms, || {
        integrate(&mut world.bodies, params)
    });

    let mut pass = 0u32;
    loop {
        let tests = PerfTimer::measure(perf_on, &mut world.perf_stats.broad_phase_ms, || {
            world
                .broad_phase
                .find_pairs(algorithm, &world.bodies, &mut world.pairs)
        });

        let contacts = PerfTimer::measure(perf_on, &mut world.perf_stats.narrow_phase_ms, || {
            resolve_pairs(&mut world.bodies, &world.pairs, &contact)
        });

        let hits = PerfTimer::measure(perf_on, &mut world.perf_stats.constraints_ms, || {
            apply_constraints(&mut world.bodies, &world.segments, width, height, obstacle_restitution)
        });

        counters.overlap_tests = counters.overlap_tests.saturating_add(tests);
        counters.candidate_pairs = counters.candidate_pairs.saturating_add(world.pairs.len() as u32);
        counters.contacts_resolved += contacts;
        counters.wall_contacts += hits.walls;
        counters.obstacle_contacts += hits.obstacles;
        if pass > 0 {
            counters.relaxation_passes += 1;
        }

        let settled = contacts == 0 && !hits.any();
        if settled {
            // Nothing moved since detection: no overlap left
            return counters;
        }
        if pass >= max_extra {
            break;
        }
        pass += 1;
    }

    let mass_policy = contact.mass_policy;
    for sep in 0..max_separation {
        let tests = PerfTimer::measure(perf_on, &mut world.perf_stats.broad_phase_ms, || {
            world
                .broad_phase
                .find_pairs(algorithm, &world.bodies, &mut world.pairs)
        });
        counters.overlap_tests = counters.overlap_tests.saturating_add(tests);

        let moved = PerfTimer::measure(perf_on, &mut world.perf_stats.narrow_phase_ms, || {
            separate_pairs(&mut world.bodies, &world.pairs, mass_policy, sep % 2 == 1)
        });
        if moved == 0 {
            break;
        }

        let hits = PerfTimer::measure(perf_on, &mut world.perf_stats.constraints_ms, || {
            apply_constraints(&mut world.bodies, &world.segments, width, height, obstacle_restitution)
        });
        counters.wall_contacts += hits.walls;
        counters.obstacle_contacts += hits.obstacles;
        counters.separation_passes += 1;
    }

    counters
}
