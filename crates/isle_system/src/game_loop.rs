//! The frame loop.
//!
//! Each frame:
//!
//! 1. Check the shutdown signal. If set, stop before starting the frame.
//! 2. Measure the time since the previous frame.
//! 3. Run every group in order, every system within a group in order.
//! 4. Sleep out the rest of the frame budget when a frame rate is set.
//!
//! A frame that has begun always runs all of its systems, even if one of
//! them sets the signal.

use std::time::{Duration, Instant};

use isle_component::Engine;
use tracing::{debug, info, warn};

use crate::config::LoopConfig;
use crate::signal::ShutdownSignal;
use crate::system::SystemGroup;

/// Ordered system groups plus the signal that ends them.
#[derive(Debug)]
pub struct GameLoop {
    /// Frames completed so far.
    frame_id: u64,
    groups: Vec<SystemGroup>,
    signal: ShutdownSignal,
    config: LoopConfig,
}

impl GameLoop {
    /// Build a loop that has run no frames yet.
    #[must_use]
    pub fn new(groups: Vec<SystemGroup>, signal: ShutdownSignal, config: LoopConfig) -> Self {
        Self {
            frame_id: 0,
            groups,
            signal,
            config,
        }
    }

    /// Returns the number of frames completed.
    #[must_use]
    pub fn frame_id(&self) -> u64 {
        self.frame_id
    }

    /// Returns the shutdown signal this loop observes.
    #[must_use]
    pub fn signal(&self) -> &ShutdownSignal {
        &self.signal
    }

    /// Group names in run order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(SystemGroup::name)
    }

    /// Run exactly one frame with the given elapsed time, ignoring the
    /// signal.
    pub fn tick(&mut self, engine: &mut Engine, dt: Duration) {
        self.frame_id += 1;
        debug!(
            frame_id = self.frame_id,
            dt_us = dt.as_micros() as u64,
            groups = self.groups.len(),
            "frame start"
        );
        for group in &mut self.groups {
            group.run(engine, dt);
        }
    }

    /// Run frames until the signal is set or `max_frames` is reached.
    ///
    /// A frame rate whose budget does not fit in a [`Duration`] runs
    /// uncapped. Returns the number of frames run by this call.
    pub fn run(&mut self, engine: &mut Engine) -> u64 {
        let budget = self
            .config
            .frame_rate
            .filter(|rate| *rate > 0.0)
            .and_then(|rate| Duration::try_from_secs_f64(1.0 / rate).ok());
        let mut frames = 0u64;

        info!(
            frame_rate = ?self.config.frame_rate,
            max_frames = self.config.max_frames,
            groups = ?self.group_names().collect::<Vec<_>>(),
            "starting game loop"
        );

        let mut last = Instant::now();
        while !self.signal.is_set() {
            let start = Instant::now();
            let dt = start - last;
            last = start;

            self.tick(engine, dt);
            frames += 1;

            if self.config.max_frames > 0 && frames >= self.config.max_frames {
                info!(frames, "frame limit reached");
                break;
            }

            if let Some(budget) = budget {
                let elapsed = start.elapsed();
                if elapsed < budget {
                    std::thread::sleep(budget - elapsed);
                } else {
                    warn!(
                        frame_id = self.frame_id,
                        elapsed_ms = elapsed.as_millis() as u64,
                        budget_ms = budget.as_millis() as u64,
                        "frame exceeded time budget"
                    );
                }
            }
        }

        info!(frames, shutdown = self.signal.is_set(), "game loop stopped");
        frames
    }
}
