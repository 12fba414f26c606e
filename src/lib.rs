//! Collisions - real-time 2D particle collision engine in WASM
//!
//! Circles and static line segments in a fixed rectangle, stepped in
//! sub-steps with drag, wall containment and elastic body-body contacts.
//! The renderer reads packed snapshot buffers straight out of wasm memory.
//!
//! Architecture:
//! - core/        - Macros and logging
//! - domain/      - Vec2, Body, Segment, policies, config
//! - systems/     - Broad phase, narrow phase, integrator
//! - simulation/  - World orchestration and the JS facade

// Macros must be first for macro export!
#[macro_use]
pub mod core;
pub mod error;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("collisions engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{Body, CollisionAlgorithm, ColorPolicy, MassPolicy, SimConfig, Vec2};
pub use error::{ConfigError, InsertError};
pub use simulation::{PerfStats, SnapshotLayout, World, WorldCore, BODY_STRIDE, COLOR_STRIDE};
