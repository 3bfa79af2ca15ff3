//! Gameplay components.
//!
//! [`Transform`](isle_math::Transform) lives in `isle_math`; the rest of the
//! per-entity data used by the gameplay systems is here.

use isle_component::Component;
use serde::{Deserialize, Serialize};

use crate::assets::SpriteHandle;
use crate::input::Button;

/// Directional intent for the current frame.
///
/// Overwritten wholesale by input capture each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Component for Input {
    fn type_name() -> &'static str {
        "Input"
    }
}

/// Which button drives each direction. Assigned at spawn, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keybinds {
    pub up: Button,
    pub down: Button,
    pub left: Button,
    pub right: Button,
}

impl Keybinds {
    /// W/A/S/D.
    pub const WASD: Self = Self {
        up: Button::W,
        down: Button::S,
        left: Button::A,
        right: Button::D,
    };

    /// Arrow keys.
    pub const ARROWS: Self = Self {
        up: Button::Up,
        down: Button::Down,
        left: Button::Left,
        right: Button::Right,
    };
}

impl Component for Keybinds {
    fn type_name() -> &'static str {
        "Keybinds"
    }
}

/// Drawable handle for an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite(pub SpriteHandle);

impl Component for Sprite {
    fn type_name() -> &'static str {
        "Sprite"
    }
}
