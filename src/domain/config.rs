//! SimConfig - world-level tuning loaded from JSON
//!
//! Missing fields fall back to defaults, so `{}` is a valid config.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::policy::{CollisionAlgorithm, ColorPolicy, MassPolicy};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Velocity factor per sub-step used by `step(dt)` (1 = no damping)
    pub drag: f32,
    /// Sub-steps per frame used by `step(dt)`
    pub substeps: u32,
    /// Broad phase used by `step(dt)`
    pub algorithm: CollisionAlgorithm,
    pub mass_policy: MassPolicy,
    pub color_policy: ColorPolicy,
    /// Body-body normal restitution (1 = elastic)
    pub restitution: f32,
    /// Normal restitution against walls and segments
    pub obstacle_restitution: f32,
    /// Acceleration in pixels/s², [x, y]
    pub gravity: [f32; 2],
    /// Squared speed below which a body is put to rest (0 = never)
    pub rest_speed_sq: f32,
    /// Impulse passes after the first one in each sub-step
    pub max_relaxation_passes: u32,
    /// Upper bound on position-only passes that clear remaining overlaps
    pub max_separation_passes: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            drag: 1.0,
            substeps: 8,
            algorithm: CollisionAlgorithm::SweepAndPrune,
            mass_policy: MassPolicy::Area,
            color_policy: ColorPolicy::IndexGradient,
            restitution: 1.0,
            obstacle_restitution: 1.0,
            gravity: [0.0, 0.0],
            rest_speed_sq: 0.0,
            max_relaxation_passes: 4,
            max_separation_passes: 512,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        unit_interval("drag", self.drag)?;
        unit_interval("restitution", self.restitution)?;
        unit_interval("obstacle_restitution", self.obstacle_restitution)?;
        if self.substeps == 0 {
            return Err(ConfigError::InvalidParam("substeps must be >= 1".to_string()));
        }
        if !self.gravity.iter().all(|g| g.is_finite()) {
            return Err(ConfigError::InvalidParam("gravity must be finite".to_string()));
        }
        if !(self.rest_speed_sq.is_finite() && self.rest_speed_sq >= 0.0) {
            return Err(ConfigError::InvalidParam(
                "rest_speed_sq must be finite and >= 0".to_string(),
            ));
        }
        Ok(())
    }
}

pub(crate) fn unit_interval(name: &str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidParam(format!("{name} must be in [0, 1], got {value}")))
    }
}
