use crate::domain::{ColorPolicy, MassPolicy, SimConfig};
use crate::error::ConfigError;

use super::perf_stats::PerfStats;
use super::render_extract;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

/// Apply `change` to a copy of the config and keep it only if it validates
fn update_config(world: &mut WorldCore, change: impl FnOnce(&mut SimConfig)) -> Result<(), ConfigError> {
    let mut config = world.config.clone();
    change(&mut config);
    config.validate()?;
    world.config = config;
    Ok(())
}

pub(super) fn set_gravity(world: &mut WorldCore, x: f32, y: f32) -> Result<(), ConfigError> {
    update_config(world, |c| c.gravity = [x, y])
}

/// Clamped to [0, 1]; NaN is rejected
pub(super) fn set_restitution(world: &mut WorldCore, restitution: f32) -> Result<(), ConfigError> {
    update_config(world, |c| c.restitution = restitution.clamp(0.0, 1.0))
}

pub(super) fn set_mass_policy(world: &mut WorldCore, policy: MassPolicy) {
    world.config.mass_policy = policy;
}

pub(super) fn set_color_policy(world: &mut WorldCore, policy: ColorPolicy) {
    world.config.color_policy = policy;
    render_extract::refresh_snapshot(world);
}

/// Replace the whole config. On error the previous config stays active.
pub(super) fn load_config_json(world: &mut WorldCore, json: &str) -> Result<(), ConfigError> {
    let config = SimConfig::from_json(json)?;
    console_log!(
        "config loaded: {:?}, {} substeps, drag {}",
        config.algorithm,
        config.substeps,
        config.drag
    );
    world.config = config;
    render_extract::refresh_snapshot(world);
    Ok(())
}

pub(super) fn config_json(world: &WorldCore) -> Result<String, ConfigError> {
    world.config.to_json()
}
