//! Host-selectable policies (wasm-bindgen C-style enums, serde for config JSON)

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Broad-phase strategy id passed to `step_frame` (0 = Pairwise, 1 = SweepAndPrune)
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionAlgorithm {
    Pairwise = 0,
    SweepAndPrune = 1,
}

impl Default for CollisionAlgorithm {
    fn default() -> Self {
        Self::SweepAndPrune
    }
}

/// Effective mass derived from radius
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassPolicy {
    /// mass = radius² (area-proportional)
    Area = 0,
    /// every body weighs 1
    Uniform = 1,
}

impl MassPolicy {
    #[inline]
    pub fn mass(self, radius: f32) -> f32 {
        match self {
            MassPolicy::Area => radius * radius,
            MassPolicy::Uniform => 1.0,
        }
    }
}

impl Default for MassPolicy {
    fn default() -> Self {
        Self::Area
    }
}

/// How the color buffer is derived each frame
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorPolicy {
    /// Red -> blue by body index, repeating every `GRADIENT_PERIOD` bodies
    IndexGradient = 0,
    /// Blue (slow) -> red (fast)
    Speed = 1,
}

impl Default for ColorPolicy {
    fn default() -> Self {
        Self::IndexGradient
    }
}
