//! Polled input.
//!
//! The simulation never sees device events. Once per frame the device's
//! pressed set is handed to a [`KeyboardState`], and systems query it
//! through [`InputSource`].

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

/// A logical button on the input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    Escape,
}

/// Read access to the current frame's input.
pub trait InputSource {
    /// `true` while the button is held.
    fn is_pressed(&self, button: Button) -> bool;

    /// `true` only on the first frame of a press.
    fn was_just_pressed(&self, button: Button) -> bool;
}

/// Pressed sets for the current and previous frame.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    current: HashSet<Button>,
    previous: HashSet<Button>,
}

impl KeyboardState {
    /// No buttons held, now or last frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame with the buttons held right now.
    pub fn begin_frame(&mut self, pressed: impl IntoIterator<Item = Button>) {
        self.previous = std::mem::take(&mut self.current);
        self.current.extend(pressed);
    }
}

impl InputSource for KeyboardState {
    fn is_pressed(&self, button: Button) -> bool {
        self.current.contains(&button)
    }

    fn was_just_pressed(&self, button: Button) -> bool {
        self.current.contains(&button) && !self.previous.contains(&button)
    }
}

/// Replays a fixed list of per-frame pressed sets.
///
/// Once the script runs out, no buttons are held.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<Button>>,
    keyboard: KeyboardState,
}

impl ScriptedInput {
    /// Script that plays `frames` in order, one per [`advance`](Self::advance).
    #[must_use]
    pub fn new(frames: impl IntoIterator<Item = Vec<Button>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            keyboard: KeyboardState::new(),
        }
    }

    /// Advance to the next scripted frame.
    pub fn advance(&mut self) {
        let pressed = self.frames.pop_front().unwrap_or_default();
        self.keyboard.begin_frame(pressed);
    }

    /// Scripted frames not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn is_pressed(&self, button: Button) -> bool {
        self.keyboard.is_pressed(button)
    }

    fn was_just_pressed(&self, button: Button) -> bool {
        self.keyboard.was_just_pressed(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_just_pressed_is_one_frame_per_press() {
        let mut keys = KeyboardState::new();

        keys.begin_frame([Button::Escape]);
        assert!(keys.is_pressed(Button::Escape));
        assert!(keys.was_just_pressed(Button::Escape));

        keys.begin_frame([Button::Escape]);
        assert!(keys.is_pressed(Button::Escape));
        assert!(!keys.was_just_pressed(Button::Escape));

        keys.begin_frame(std::iter::empty());
        assert!(!keys.is_pressed(Button::Escape));
        assert!(!keys.was_just_pressed(Button::Escape));

        keys.begin_frame([Button::Escape]);
        assert!(keys.was_just_pressed(Button::Escape));
    }

    #[test]
    fn test_scripted_input_replays_then_releases() {
        let mut input = ScriptedInput::new([vec![Button::W, Button::A], vec![Button::W]]);
        assert_eq!(input.remaining(), 2);

        input.advance();
        assert!(input.is_pressed(Button::W));
        assert!(input.is_pressed(Button::A));

        input.advance();
        assert!(input.is_pressed(Button::W));
        assert!(!input.was_just_pressed(Button::W));
        assert!(!input.is_pressed(Button::A));

        input.advance();
        assert_eq!(input.remaining(), 0);
        assert!(!input.is_pressed(Button::W));
    }
}
