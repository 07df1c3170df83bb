//! Dense tile grid
//!
//! Row-major storage indexed `y * width + x` for cache locality and O(1)
//! bounds-checked access. All out-of-range lookups return `None`; all
//! out-of-range writes are ignored.

use serde::{Deserialize, Serialize};

use super::room::Room;
use super::tile::{Tile, TileKind};

/// Dense width x height grid of tiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileGrid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Create a grid of the given dimensions, every cell a wall
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let mut tiles = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                tiles.push(Tile::new(x, y, TileKind::Wall));
            }
        }
        Self {
            width,
            height,
            tiles,
        }
    }

    /// Grid width in tiles
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in tiles
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Check if a position is within grid bounds
    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    const fn idx(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Get the tile at a position, `None` if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<&Tile> {
        if self.in_bounds(x, y) {
            Some(&self.tiles[self.idx(x, y)])
        } else {
            None
        }
    }

    /// Get the tile kind at a position, `None` if out of bounds
    pub fn kind_at(&self, x: i32, y: i32) -> Option<TileKind> {
        self.get(x, y).map(|t| t.kind)
    }

    /// Set the tile kind at a position; out-of-bounds writes are ignored
    pub fn set_kind(&mut self, x: i32, y: i32, kind: TileKind) {
        if self.in_bounds(x, y) {
            let idx = self.idx(x, y);
            self.tiles[idx].kind = kind;
        }
    }

    /// Carve a position to floor, upgrading walls only
    ///
    /// Never downgrades an existing floor or stairs tile; out-of-bounds
    /// positions are ignored.
    pub fn carve(&mut self, x: i32, y: i32) {
        if self.in_bounds(x, y) {
            let idx = self.idx(x, y);
            if self.tiles[idx].kind == TileKind::Wall {
                self.tiles[idx].kind = TileKind::Floor;
            }
        }
    }

    /// Check if the tile at a position is walkable
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.kind_at(x, y).is_some_and(|k| k.is_walkable())
    }

    /// Iterate over all tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Count tiles of a given kind
    pub fn count_kind(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|t| t.kind == kind).count()
    }

    /// Check if any cell within a room's bounds has a stairs kind
    pub fn room_has_stairs(&self, room: &Room) -> bool {
        for y in room.y..=room.y2() {
            for x in room.x..=room.x2() {
                if self.kind_at(x, y).is_some_and(|k| k.is_stairs()) {
                    return true;
                }
            }
        }
        false
    }
}
