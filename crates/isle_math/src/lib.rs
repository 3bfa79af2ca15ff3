//! # isle_math
//!
//! Math types for the isle simulation. Re-exports [`glam`] for vector math
//! and defines the spatial [`Transform`] component.

pub mod transform;

pub use glam::DVec2;

pub use transform::Transform;
