//! Domain - value types, entities and host-selectable policies

pub mod aabb;
pub mod body;
pub mod color;
pub mod config;
pub mod obstacle;
pub mod policy;
pub mod vec2;

pub use aabb::Aabb;
pub use body::Body;
pub use color::Color;
pub use config::SimConfig;
pub use obstacle::Segment;
pub use policy::{CollisionAlgorithm, ColorPolicy, MassPolicy};
pub use vec2::Vec2;
