//! # isle_game
//!
//! Gameplay on top of the registry. Systems here keep no storage of their
//! own; everything they read and write is a component:
//!
//! | system | reads | writes |
//! |---|---|---|
//! | input capture | `Keybinds`, input source | `Input` |
//! | movement | `Input`, `Transform` | `Transform` |
//! | draw | `Sprite`, `Transform` | draw sink only |
//!
//! Peripherals are reached through two capabilities, [`InputSource`] and
//! [`DrawSink`], so the systems run the same against a window, a script or
//! a test double.

pub mod assets;
pub mod components;
pub mod draw;
pub mod error;
pub mod input;
pub mod systems;
pub mod tile_batch;
pub mod world;

pub use assets::{SpriteHandle, SpriteNames, Spritesheet};
pub use components::{Input, Keybinds, Sprite};
pub use draw::{DrawLog, DrawSink, TracingDrawSink};
pub use error::AssetError;
pub use input::{Button, InputSource, KeyboardState, ScriptedInput};
pub use systems::{MOVE_STEP, apply_movement, capture_input, draw_sprites};
pub use tile_batch::{TileBatch, TileSprites};
pub use world::{LoadedWorld, load_world, spawn_player};
