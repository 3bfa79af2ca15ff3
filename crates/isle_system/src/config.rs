//! Game loop configuration.

/// Configuration for the frame loop.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopConfig {
    /// Target frames per second. `None`, zero, negative or vanishingly small
    /// rates run frames back to back.
    pub frame_rate: Option<f64>,
    /// Maximum number of frames to run (0 = until shutdown).
    pub max_frames: u64,
}

impl LoopConfig {
    /// Pace frames to the given rate.
    #[must_use]
    pub fn with_frame_rate(mut self, frame_rate: f64) -> Self {
        self.frame_rate = Some(frame_rate);
        self
    }

    /// Stop after `max_frames` frames even without a shutdown request.
    #[must_use]
    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = max_frames;
        self
    }
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            frame_rate: None,
            max_frames: 0,
        }
    }
}
