//! # isle_system
//!
//! Runs named update functions once per frame against a shared
//! [`Engine`](isle_component::Engine).
//!
//! - [`System`]: a `(name, update)` pair. `update` receives the registry and
//!   the time elapsed since the previous frame.
//! - [`SystemGroup`]: an ordered list of systems. Canonical groups are
//!   input capture, physics and render.
//! - [`GameLoop`]: runs every group in order, every system in order, one
//!   pass per frame, until a [`ShutdownSignal`] fires.
//!
//! Ordering is a correctness requirement: physics observes the current
//! frame's input and rendering observes the current frame's transforms.
//!
//! ## Usage
//!
//! ```rust
//! use isle_component::Engine;
//! use isle_system::{GameLoop, LoopConfig, ShutdownSignal, System, SystemGroup};
//!
//! let quit = ShutdownSignal::new();
//! let stop = quit.clone();
//! let groups = vec![SystemGroup::new(
//!     "input",
//!     vec![System::new("quit_immediately", move |_, _| stop.set())],
//! )];
//!
//! let mut engine = Engine::new();
//! let mut game_loop = GameLoop::new(groups, quit, LoopConfig::default());
//! let frames = game_loop.run(&mut engine);
//! assert_eq!(frames, 1);
//! ```

pub mod config;
pub mod game_loop;
pub mod signal;
pub mod system;

pub use config::LoopConfig;
pub use game_loop::GameLoop;
pub use signal::ShutdownSignal;
pub use system::{System, SystemGroup};
