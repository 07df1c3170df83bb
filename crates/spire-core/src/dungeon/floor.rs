//! A single dungeon floor
//!
//! [`Floor`] owns the grid, the room list, the feature side tables, and the
//! seeded RNG that built them. The canonical pipeline is:
//!
//! ```text
//! generate -> connect_rooms -> place_stairs -> place_traps -> place_chests
//! ```
//!
//! Every stage draws from the floor's own RNG in a fixed order, so the same
//! seed and the same call sequence rebuild the same floor exactly.

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::config::{FloorParams, ParamsError};
use crate::rng::FloorRng;

use super::corridor::{carve_corridors, is_fully_connected};
use super::features::{
    ChestInfo, TrapInfo, place_chests, place_stairs_down, place_stairs_up, place_traps,
};
use super::generation::{carve_rooms, place_rooms};
use super::grid::TileGrid;
use super::room::Room;
use super::tile::Tile;

/// One floor of the spire
///
/// Created empty (all walls); [`Floor::generate`] and the later pipeline
/// stages fill it in. Traps and chests live in side tables keyed by position;
/// the tiles underneath stay floor so pathing is unaffected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Floor {
    seed: u64,
    params: FloorParams,
    grid: TileGrid,
    rooms: Vec<Room>,
    rng: FloorRng,
    #[serde(with = "pos_table")]
    traps: HashMap<(i32, i32), TrapInfo>,
    #[serde(with = "pos_table")]
    chests: HashMap<(i32, i32), ChestInfo>,
    stairs_up: Option<(i32, i32)>,
    stairs_down: Option<(i32, i32)>,
}

impl Floor {
    /// Create an empty floor with default parameters
    pub fn new(seed: u64) -> Self {
        let params = FloorParams::default();
        Self {
            seed,
            grid: TileGrid::new(params.width, params.height),
            rooms: Vec::new(),
            rng: FloorRng::new(seed),
            traps: HashMap::new(),
            chests: HashMap::new(),
            stairs_up: None,
            stairs_down: None,
            params,
        }
    }

    /// Create an empty floor with explicit parameters
    ///
    /// Rejects unusable configurations up front; generation itself never
    /// errors.
    pub fn with_params(seed: u64, params: FloorParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            seed,
            grid: TileGrid::new(params.width, params.height),
            rooms: Vec::new(),
            rng: FloorRng::new(seed),
            traps: HashMap::new(),
            chests: HashMap::new(),
            stairs_up: None,
            stairs_down: None,
            params,
        })
    }

    /// Place rooms and carve them into the grid
    ///
    /// Best-effort: a crowded or tiny grid yields fewer rooms than targeted,
    /// possibly zero. Call [`Floor::connect_rooms`] afterwards.
    pub fn generate(&mut self) {
        self.rooms = place_rooms(&self.params, &mut self.rng);
        carve_rooms(&mut self.grid, &self.rooms);
    }

    /// Connect the placed rooms with L-shaped corridors in placement order
    pub fn connect_rooms(&mut self) {
        carve_corridors(&mut self.grid, &self.rooms, &mut self.rng);
    }

    /// Check that every room is reachable from every other room
    pub fn is_fully_connected(&self) -> bool {
        is_fully_connected(&self.grid, &self.rooms)
    }

    /// Place the ascending stairs in a random room
    pub fn place_stairs(&mut self) -> Option<(i32, i32)> {
        let pos = place_stairs_up(&mut self.grid, &self.rooms, &mut self.rng);
        self.stairs_up = pos;
        pos
    }

    /// Place the descending stairs, avoiding the ascending stairs' room
    pub fn place_stairs_down(&mut self) -> Option<(i32, i32)> {
        let pos = place_stairs_down(&mut self.grid, &self.rooms, &mut self.rng);
        self.stairs_down = pos;
        pos
    }

    /// Place traps with the given per-cell probability
    ///
    /// Density is clamped to [0, 1]; zero is a no-op. New traps are merged
    /// into the trap table, never replacing existing entries.
    pub fn place_traps(&mut self, density: f64) {
        let occupied = self.occupied_positions();
        let placed = place_traps(&self.grid, &self.rooms, density, &occupied, &mut self.rng);
        self.traps.extend(placed);
    }

    /// Place up to `count` chests in room interiors
    ///
    /// Fewer eligible cells than `count` places as many as fit; zero is a
    /// no-op.
    pub fn place_chests(&mut self, count: usize) {
        let occupied = self.occupied_positions();
        let placed = place_chests(&self.grid, &self.rooms, count, &occupied, &mut self.rng);
        self.chests.extend(placed);
    }

    fn occupied_positions(&self) -> HashSet<(i32, i32)> {
        self.traps.keys().chain(self.chests.keys()).copied().collect()
    }

    /// The seed this floor was built from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The parameters this floor was built with
    pub fn params(&self) -> &FloorParams {
        &self.params
    }

    /// Grid width in tiles
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    /// Grid height in tiles
    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// The underlying tile grid
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// The placed rooms, in placement order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// The trap side table, keyed by position
    pub fn traps(&self) -> &HashMap<(i32, i32), TrapInfo> {
        &self.traps
    }

    /// The chest side table, keyed by position
    pub fn chests(&self) -> &HashMap<(i32, i32), ChestInfo> {
        &self.chests
    }

    /// Position of the ascending stairs, if placed
    pub fn stairs_up(&self) -> Option<(i32, i32)> {
        self.stairs_up
    }

    /// Position of the descending stairs, if placed
    pub fn stairs_down(&self) -> Option<(i32, i32)> {
        self.stairs_down
    }

    /// Get the tile at a position, `None` if out of bounds
    pub fn get_tile(&self, x: i32, y: i32) -> Option<&Tile> {
        self.grid.get(x, y)
    }

    /// Check if a position is within the floor's bounds
    pub fn is_valid_position(&self, x: i32, y: i32) -> bool {
        self.grid.in_bounds(x, y)
    }

    /// Check if the tile at a position can be walked on
    ///
    /// Traps and chests never affect walkability; only the tile kind does.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.grid.is_walkable(x, y)
    }

    /// The trap at a position, if any
    pub fn trap_at(&self, x: i32, y: i32) -> Option<&TrapInfo> {
        self.traps.get(&(x, y))
    }

    /// The chest at a position, if any
    pub fn chest_at(&self, x: i32, y: i32) -> Option<&ChestInfo> {
        self.chests.get(&(x, y))
    }
}

/// Serialize position-keyed tables as entry lists
///
/// JSON object keys must be strings, so `(i32, i32)`-keyed maps go through a
/// `[position, value]` pair sequence instead.
mod pos_table {
    use hashbrown::HashMap;
    use serde::de::Deserializer;
    use serde::ser::Serializer;
    use serde::{Deserialize, Serialize};

    pub fn serialize<S, V>(map: &HashMap<(i32, i32), V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        V: Serialize,
    {
        let mut entries: Vec<(&(i32, i32), &V)> = map.iter().collect();
        // Stable output for snapshot-friendly saves
        entries.sort_by_key(|(pos, _)| **pos);
        entries.serialize(serializer)
    }

    pub fn deserialize<'de, D, V>(deserializer: D) -> Result<HashMap<(i32, i32), V>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        let entries: Vec<((i32, i32), V)> = Vec::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::tile::TileKind;

    fn built_floor(seed: u64) -> Floor {
        let mut floor = Floor::new(seed);
        floor.generate();
        floor.connect_rooms();
        floor
    }

    #[test]
    fn test_new_floor_is_all_walls() {
        let floor = Floor::new(1);
        assert_eq!(floor.width(), 20);
        assert_eq!(floor.height(), 20);
        assert!(floor.rooms().is_empty());
        assert_eq!(floor.grid().count_kind(TileKind::Wall), 400);
    }

    #[test]
    fn test_with_params_rejects_bad_config() {
        let params = FloorParams::with_grid_size(0, 20);
        assert!(Floor::with_params(5, params).is_err());
    }

    #[test]
    fn test_generate_produces_connected_floor() {
        for seed in 0..20 {
            let floor = built_floor(seed);
            assert!(!floor.rooms().is_empty(), "seed {seed}");
            assert!(floor.is_fully_connected(), "seed {seed}");
        }
    }

    #[test]
    fn test_stairs_placed_once() {
        let mut floor = built_floor(8);
        let pos = floor.place_stairs().unwrap();
        assert_eq!(floor.stairs_up(), Some(pos));
        assert_eq!(floor.get_tile(pos.0, pos.1).unwrap().kind, TileKind::StairsUp);
        assert_eq!(floor.grid().count_kind(TileKind::StairsUp), 1);
    }

    #[test]
    fn test_features_do_not_break_connectivity() {
        let mut floor = built_floor(21);
        floor.place_stairs();
        floor.place_stairs_down();
        floor.place_traps(0.5);
        floor.place_chests(5);
        assert!(floor.is_fully_connected());
    }

    #[test]
    fn test_trap_and_chest_cells_stay_walkable() {
        let mut floor = built_floor(34);
        floor.place_traps(0.4);
        floor.place_chests(4);

        for &(x, y) in floor.traps().keys() {
            assert!(floor.is_walkable(x, y));
            assert!(floor.trap_at(x, y).is_some());
        }
        for &(x, y) in floor.chests().keys() {
            assert!(floor.is_walkable(x, y));
            assert!(floor.chest_at(x, y).is_some());
        }
    }

    #[test]
    fn test_repeated_placement_merges() {
        let mut floor = built_floor(55);
        floor.place_traps(0.3);
        let first = floor.traps().clone();
        floor.place_traps(0.0);
        // A zero-density pass never wipes existing traps
        assert_eq!(*floor.traps(), first);
    }

    #[test]
    fn test_traps_and_chests_never_share_a_cell() {
        let mut floor = built_floor(62);
        floor.place_traps(0.6);
        floor.place_chests(8);
        for pos in floor.chests().keys() {
            assert!(!floor.traps().contains_key(pos));
        }
    }

    #[test]
    fn test_out_of_bounds_queries() {
        let floor = built_floor(3);
        assert!(!floor.is_valid_position(-1, 0));
        assert!(!floor.is_valid_position(20, 20));
        assert!(floor.get_tile(100, 100).is_none());
        assert!(!floor.is_walkable(-5, -5));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut floor = built_floor(77);
        floor.place_stairs();
        floor.place_traps(0.3);
        floor.place_chests(3);

        let json = serde_json::to_string(&floor).unwrap();
        let restored: Floor = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.seed(), floor.seed());
        assert_eq!(restored.rooms(), floor.rooms());
        assert_eq!(restored.stairs_up(), floor.stairs_up());
        assert_eq!(*restored.traps(), *floor.traps());
        assert_eq!(*restored.chests(), *floor.chests());
        for y in 0..floor.height() {
            for x in 0..floor.width() {
                assert_eq!(
                    restored.grid().kind_at(x, y),
                    floor.grid().kind_at(x, y)
                );
            }
        }
    }
}
