//! The generated tile grid.

use crate::tile::{Tile, TileKind};

/// A square grid of [`Tile`]s, `size x size`, plus the world-unit edge
/// length of one tile.
///
/// Built once at load time and read-only afterwards. Lookups outside the
/// grid return `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tilemap {
    size: usize,
    tile_size: u32,
    /// Column-major: the tile at `(x, y)` lives at `x * size + y`.
    tiles: Vec<Tile>,
}

impl Tilemap {
    /// Build a tilemap from column-major tiles.
    ///
    /// # Panics
    ///
    /// Panics if `tiles.len() != size * size`.
    #[must_use]
    pub fn new(size: usize, tile_size: u32, tiles: Vec<Tile>) -> Self {
        assert_eq!(
            tiles.len(),
            size * size,
            "tile count does not match a {size}x{size} grid"
        );
        Self {
            size,
            tile_size,
            tiles,
        }
    }

    /// An empty grid.
    #[must_use]
    pub fn empty(tile_size: u32) -> Self {
        Self::new(0, tile_size, Vec::new())
    }

    /// Tiles per side.
    #[must_use]
    pub fn width(&self) -> usize {
        self.size
    }

    /// World-unit edge length of one tile.
    #[must_use]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Returns `true` for a zero-sized grid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The tile at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, x: i64, y: i64) -> Option<&Tile> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x >= self.size || y >= self.size {
            return None;
        }
        self.tiles.get(x * self.size + y)
    }

    /// Iterate over `(x, y, tile)` in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Tile)> {
        let size = self.size;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| (i / size, i % size, tile))
    }

    /// Number of tiles of the given kind.
    #[must_use]
    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|tile| tile.kind == kind).count()
    }
}
