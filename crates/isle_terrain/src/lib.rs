//! # isle_terrain
//!
//! Pure, deterministic world generation from `(seed, map_size, tile_size)`.
//!
//! Height at a tile is built in three steps:
//!
//! 1. [`NoiseMap`] sums several [`Octave`]s of normalized coherent noise and
//!    applies a redistribution exponent.
//! 2. [`island_height`] blends in a radial falloff so land gathers around
//!    the map centre.
//! 3. [`classify`] cuts the result into water, sand and grass bands.
//!
//! [`generate`] runs all three over a square grid and returns a [`Tilemap`].
//! Only [`WorldParams`] is ever persisted; the grid is reproducible from it.

pub mod error;
pub mod generate;
pub mod island;
pub mod noise_map;
pub mod params;
pub mod tile;
pub mod tilemap;

pub use error::TerrainError;
pub use generate::{generate, generate_with};
pub use island::island_height;
pub use noise_map::{Noise2, NoiseMap, NormalizedSimplex, Octave};
pub use params::WorldParams;
pub use tile::{SAND_LEVEL, Tile, TileKind, WATER_LEVEL, classify};
pub use tilemap::Tilemap;
