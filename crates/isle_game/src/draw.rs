//! The draw capability.

use isle_math::DVec2;
use tracing::trace;

use crate::assets::SpriteHandle;

/// Receives drawables. Nothing the sink returns flows back into the
/// simulation.
pub trait DrawSink {
    /// Draw `sprite` at a world position.
    fn draw(&mut self, sprite: SpriteHandle, position: DVec2);

    /// Called before the first draw of a frame.
    fn clear(&mut self) {}

    /// Called after the last draw of a frame.
    fn present(&mut self) {}
}

/// Records every draw of the current frame.
#[derive(Debug, Clone, Default)]
pub struct DrawLog {
    pub draws: Vec<(SpriteHandle, DVec2)>,
    pub frames_presented: u64,
}

impl DrawSink for DrawLog {
    fn draw(&mut self, sprite: SpriteHandle, position: DVec2) {
        self.draws.push((sprite, position));
    }

    fn clear(&mut self) {
        self.draws.clear();
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}

/// Counts draws per frame and reports them at `trace` level. Used when no
/// window is attached.
#[derive(Debug, Default)]
pub struct TracingDrawSink {
    draws: u64,
    frames: u64,
}

impl TracingDrawSink {
    /// A sink with nothing drawn yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames presented so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl DrawSink for TracingDrawSink {
    fn draw(&mut self, sprite: SpriteHandle, position: DVec2) {
        self.draws += 1;
        trace!(sprite = sprite.0, x = position.x, y = position.y, "draw");
    }

    fn clear(&mut self) {
        self.draws = 0;
    }

    fn present(&mut self) {
        self.frames += 1;
        trace!(frame = self.frames, draws = self.draws, "present");
    }
}
