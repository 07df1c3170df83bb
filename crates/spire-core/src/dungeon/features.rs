//! Feature placement: stairs, traps, and chests
//!
//! Stairs retag the chosen tile. Traps and chests leave the tile as floor and
//! are recorded in position-keyed side tables, so they never affect
//! walkability or connectivity; renderers materialize them once revealed.
//!
//! All placement is best-effort: insufficient space yields fewer features,
//! never an error.

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::rng::FloorRng;

use super::grid::TileGrid;
use super::room::Room;
use super::tile::TileKind;

const DIRS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Trap flavors
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum TrapKind {
    /// Direct damage
    Spike,
    /// Damage plus a poison status on the triggering entity
    Poison,
    /// Low damage, alerts nearby monsters
    Alarm,
}

impl TrapKind {
    /// All trap kinds, in selection order
    pub const ALL: [TrapKind; 3] = [TrapKind::Spike, TrapKind::Poison, TrapKind::Alarm];

    /// Base damage range (inclusive) rolled at placement time
    pub const fn damage_range(self) -> (i32, i32) {
        match self {
            TrapKind::Spike => (2, 3),
            TrapKind::Poison => (1, 2),
            TrapKind::Alarm => (1, 1),
        }
    }

    /// Display character once revealed
    pub const fn symbol(self) -> char {
        match self {
            TrapKind::Spike => '^',
            TrapKind::Poison => '~',
            TrapKind::Alarm => '!',
        }
    }
}

/// Per-trap metadata, keyed by position in the floor's trap table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrapInfo {
    pub kind: TrapKind,
    pub damage: i32,
    /// Traps start hidden; the trap handler flips this on detection
    pub revealed: bool,
}

/// Per-chest metadata, keyed by position in the floor's chest table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChestInfo {
    /// Loot quality; grows with placement order, with jitter
    pub loot_tier: u32,
    pub opened: bool,
}

/// Collect all doorway cells on the floor
///
/// A doorway is a room-boundary cell 4-adjacent to a floor cell that lies
/// outside every room (a corridor opening). The heuristic is approximate near
/// room corners; it is kept as-is because seeded layouts depend on it.
pub fn doorway_cells(grid: &TileGrid, rooms: &[Room]) -> HashSet<(i32, i32)> {
    let mut doorways = HashSet::new();
    for room in rooms {
        for y in room.y..=room.y2() {
            for x in room.x..=room.x2() {
                if !room.on_boundary(x, y) {
                    continue;
                }
                let opens_to_corridor = DIRS.iter().any(|&(dx, dy)| {
                    let (nx, ny) = (x + dx, y + dy);
                    grid.kind_at(nx, ny) == Some(TileKind::Floor)
                        && !rooms.iter().any(|r| r.contains(nx, ny))
                });
                if opens_to_corridor {
                    doorways.insert((x, y));
                }
            }
        }
    }
    doorways
}

/// Pick a stairs cell inside a room
///
/// Prefers the room center if it is floor and not a doorway; otherwise
/// chooses uniformly among the room's non-doorway floor cells. Returns `None`
/// if the room has no eligible cell.
fn stairs_spot(
    grid: &TileGrid,
    room: &Room,
    doorways: &HashSet<(i32, i32)>,
    rng: &mut FloorRng,
) -> Option<(i32, i32)> {
    let (cx, cy) = room.center();
    if grid.kind_at(cx, cy) == Some(TileKind::Floor) && !doorways.contains(&(cx, cy)) {
        return Some((cx, cy));
    }

    let mut candidates = Vec::new();
    for y in room.y..=room.y2() {
        for x in room.x..=room.x2() {
            if grid.kind_at(x, y) == Some(TileKind::Floor) && !doorways.contains(&(x, y)) {
                candidates.push((x, y));
            }
        }
    }
    rng.choose(&candidates).copied()
}

/// Place the ascending stairs in a random room
///
/// Returns the stairs position, or `None` when there are no rooms or the
/// chosen room has no eligible cell.
pub(super) fn place_stairs_up(
    grid: &mut TileGrid,
    rooms: &[Room],
    rng: &mut FloorRng,
) -> Option<(i32, i32)> {
    let room = *rng.choose(rooms)?;
    let doorways = doorway_cells(grid, rooms);
    let (x, y) = stairs_spot(grid, &room, &doorways, rng)?;
    grid.set_kind(x, y, TileKind::StairsUp);
    Some((x, y))
}

/// Place the descending stairs for multi-floor contexts
///
/// Uses the same policy as the ascending stairs but excludes rooms that
/// already contain a stairs tile, so the two land in different rooms whenever
/// more than one room exists.
pub(super) fn place_stairs_down(
    grid: &mut TileGrid,
    rooms: &[Room],
    rng: &mut FloorRng,
) -> Option<(i32, i32)> {
    let eligible: Vec<Room> = rooms
        .iter()
        .filter(|r| !grid.room_has_stairs(r))
        .copied()
        .collect();
    let room = if eligible.is_empty() {
        *rng.choose(rooms)?
    } else {
        *rng.choose(&eligible)?
    };

    let doorways = doorway_cells(grid, rooms);
    let (x, y) = stairs_spot(grid, &room, &doorways, rng)?;
    grid.set_kind(x, y, TileKind::StairsDown);
    Some((x, y))
}

/// Place traps over the floor with the given per-cell probability
///
/// Scans floor cells in row-major order and includes each independently with
/// probability `density` (clamped to [0, 1]). Room centers (spawn points),
/// doorways and cells adjacent to doorways, and already-occupied positions
/// are skipped. Tiles are left as floor; only the side table changes.
pub(super) fn place_traps(
    grid: &TileGrid,
    rooms: &[Room],
    density: f64,
    occupied: &HashSet<(i32, i32)>,
    rng: &mut FloorRng,
) -> HashMap<(i32, i32), TrapInfo> {
    let density = density.clamp(0.0, 1.0);
    let mut traps = HashMap::new();
    if density <= 0.0 {
        return traps;
    }

    let doorways = doorway_cells(grid, rooms);
    let centers: HashSet<(i32, i32)> = rooms.iter().map(Room::center).collect();

    for tile in grid.tiles() {
        if tile.kind != TileKind::Floor {
            continue;
        }
        let pos = tile.position();
        if occupied.contains(&pos) || centers.contains(&pos) || doorways.contains(&pos) {
            continue;
        }
        if DIRS
            .iter()
            .any(|&(dx, dy)| doorways.contains(&(pos.0 + dx, pos.1 + dy)))
        {
            continue;
        }

        if rng.next_float() < density {
            let kind = rng.choose(&TrapKind::ALL).copied().unwrap_or(TrapKind::Spike);
            let (lo, hi) = kind.damage_range();
            traps.insert(
                pos,
                TrapInfo {
                    kind,
                    damage: rng.int_range(lo, hi),
                    revealed: false,
                },
            );
        }
    }

    traps
}

/// Place up to `count` chests in room interiors
///
/// Candidates are floor cells strictly inside a room (the 1-cell border is
/// excluded so chests cannot crowd a doorway), skipping room centers, cells
/// at or adjacent to doorways, and occupied positions. Candidates are
/// shuffled and taken without replacement; fewer eligible cells than `count`
/// places as many as fit. Loot tiers grow with placement order plus jitter.
pub(super) fn place_chests(
    grid: &TileGrid,
    rooms: &[Room],
    count: usize,
    occupied: &HashSet<(i32, i32)>,
    rng: &mut FloorRng,
) -> HashMap<(i32, i32), ChestInfo> {
    let mut chests = HashMap::new();
    if count == 0 {
        return chests;
    }

    let doorways = doorway_cells(grid, rooms);
    let mut candidates: Vec<(i32, i32)> = Vec::new();

    for room in rooms {
        let center = room.center();
        for y in (room.y + 1)..room.y2() {
            for x in (room.x + 1)..room.x2() {
                let pos = (x, y);
                if grid.kind_at(x, y) != Some(TileKind::Floor) {
                    continue;
                }
                if pos == center || occupied.contains(&pos) || doorways.contains(&pos) {
                    continue;
                }
                if DIRS
                    .iter()
                    .any(|&(dx, dy)| doorways.contains(&(x + dx, y + dy)))
                {
                    continue;
                }
                candidates.push(pos);
            }
        }
    }

    rng.shuffle(&mut candidates);
    for (i, pos) in candidates.into_iter().take(count).enumerate() {
        let jitter = rng.int_range(0, 1) as u32;
        chests.insert(
            pos,
            ChestInfo {
                loot_tier: 1 + (i as u32) / 2 + jitter,
                opened: false,
            },
        );
    }

    chests
}
