//! 2-D transform component.
//!
//! [`Transform`] is an entity's position in world units. Physics systems are
//! the only writers.

use glam::DVec2;
use isle_component::Component;
use serde::{Deserialize, Serialize};

/// A 2-D world-space position.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Transform {
    /// World-space position. `+y` is up.
    pub position: DVec2,
}

impl Transform {
    /// Create a transform at `(x, y)`.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            position: DVec2::new(x, y),
        }
    }

    /// World-space x.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// World-space y.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Translate the transform by the given offset.
    #[must_use]
    pub fn translated(mut self, offset: DVec2) -> Self {
        self.position += offset;
        self
    }
}

impl Component for Transform {
    fn type_name() -> &'static str {
        "Transform"
    }
}
