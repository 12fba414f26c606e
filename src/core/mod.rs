//! Core utilities shared by every layer (macros first, see lib.rs)

#[macro_use]
#[path = "utils/safety.rs"]
pub mod safety;
#[macro_use]
pub mod log;
