//! Dungeon floor system
//!
//! Contains the tile and room data model, the dense grid, and the generation
//! pipeline: room placement, grid carving, corridor connection, connectivity
//! validation, and feature placement.

mod corridor;
mod features;
mod floor;
mod generation;
mod grid;
mod room;
mod tile;

pub use corridor::{carve_corridors, is_fully_connected};
pub use features::{ChestInfo, TrapInfo, TrapKind, doorway_cells};
pub use floor::Floor;
pub use generation::{carve_rooms, place_rooms};
pub use grid::TileGrid;
pub use room::Room;
pub use tile::{Tile, TileKind};
