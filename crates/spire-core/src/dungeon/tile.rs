//! Tile types for the floor grid

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Tile/terrain kind
///
/// Traps and chests are tracked in side tables keyed by position (see
/// [`super::Floor`]); the `Trap`/`Chest` kinds exist so collaborators such as
/// renderers can materialize revealed features as tiles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TileKind {
    #[default]
    Wall = 0,
    Floor = 1,
    StairsUp = 2,
    StairsDown = 3,
    Trap = 4,
    Chest = 5,
}

impl TileKind {
    /// Check if this kind can be walked on
    pub const fn is_walkable(&self) -> bool {
        matches!(self, TileKind::Floor | TileKind::StairsUp | TileKind::StairsDown)
    }

    /// Check if this is a stairs kind
    pub const fn is_stairs(&self) -> bool {
        matches!(self, TileKind::StairsUp | TileKind::StairsDown)
    }

    /// Get the display character for this kind
    pub const fn symbol(&self) -> char {
        match self {
            TileKind::Wall => '#',
            TileKind::Floor => '.',
            TileKind::StairsUp => '<',
            TileKind::StairsDown => '>',
            TileKind::Trap => '^',
            TileKind::Chest => '=',
        }
    }
}

/// A single position on the floor grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
    pub kind: TileKind,
}

impl Tile {
    /// Create a new tile
    pub const fn new(x: i32, y: i32, kind: TileKind) -> Self {
        Self { x, y, kind }
    }

    /// Get position as a tuple
    pub const fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Check if this tile can be walked on
    pub const fn is_walkable(&self) -> bool {
        self.kind.is_walkable()
    }
}
