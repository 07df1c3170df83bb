//! Room placement and grid carving
//!
//! Rejection-sampling placement: draw a target room count once, then draw
//! candidate rectangles until the target is met or the attempt budget runs
//! out. The result is best-effort; fewer rooms than targeted (including zero)
//! is valid, and every later stage tolerates it.

use crate::config::FloorParams;
use crate::rng::FloorRng;

use super::grid::TileGrid;
use super::room::Room;

/// Place non-overlapping rooms via rejection sampling
///
/// The draw order per attempt is fixed (width, height, x, y) so that the same
/// seed always yields the same room list. Rooms keep `edge_buffer` tiles of
/// margin from the grid border and `room_gap` tiles of separation from each
/// other.
pub fn place_rooms(params: &FloorParams, rng: &mut FloorRng) -> Vec<Room> {
    let target = rng.int_range(params.min_rooms as i32, params.max_rooms as i32) as usize;
    let mut rooms: Vec<Room> = Vec::with_capacity(target);

    let mut attempts = 0;
    while rooms.len() < target && attempts < params.max_attempts {
        attempts += 1;

        let width = rng.int_range(params.min_room_size, params.max_room_size);
        let height = rng.int_range(params.min_room_size, params.max_room_size);

        // Highest origin that keeps the room plus margin inside the grid
        let max_x = params.width - width - params.edge_buffer;
        let max_y = params.height - height - params.edge_buffer;

        if max_x < params.edge_buffer || max_y < params.edge_buffer {
            continue;
        }

        let x = rng.int_range(params.edge_buffer, max_x);
        let y = rng.int_range(params.edge_buffer, max_y);

        let candidate = Room::new(x, y, width, height);

        if rooms.iter().any(|r| candidate.overlaps(r, params.room_gap)) {
            continue;
        }

        rooms.push(candidate);
    }

    rooms
}

/// Carve accepted rooms into the wall grid
///
/// Sets every cell inside each room's bounds to floor. Deterministic, no
/// randomness.
pub fn carve_rooms(grid: &mut TileGrid, rooms: &[Room]) {
    for room in rooms {
        for y in room.y..=room.y2() {
            for x in room.x..=room.x2() {
                grid.carve(x, y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::tile::TileKind;

    #[test]
    fn test_rooms_respect_count_range() {
        let params = FloorParams::default();
        let mut rng = FloorRng::new(12345);
        let rooms = place_rooms(&params, &mut rng);
        assert!(rooms.len() <= params.max_rooms as usize);
    }

    #[test]
    fn test_rooms_do_not_overlap() {
        for seed in [12345, 54321, 99999, 11111, 77777] {
            let params = FloorParams::default();
            let mut rng = FloorRng::new(seed);
            let rooms = place_rooms(&params, &mut rng);

            for (i, a) in rooms.iter().enumerate() {
                for b in rooms.iter().skip(i + 1) {
                    assert!(
                        !a.overlaps(b, params.room_gap),
                        "seed {seed}: {a:?} overlaps {b:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_rooms_respect_edge_buffer() {
        for seed in 0..50 {
            let params = FloorParams::default();
            let mut rng = FloorRng::new(seed);
            for room in place_rooms(&params, &mut rng) {
                assert!(room.x >= params.edge_buffer);
                assert!(room.y >= params.edge_buffer);
                assert!(room.x2() < params.width - params.edge_buffer);
                assert!(room.y2() < params.height - params.edge_buffer);
            }
        }
    }

    #[test]
    fn test_tiny_grid_yields_few_or_no_rooms() {
        // A 4x4 grid cannot fit the default 5-room target; that is valid
        let params = FloorParams::with_grid_size(4, 4);
        let mut rng = FloorRng::new(7);
        let rooms = place_rooms(&params, &mut rng);
        assert!(rooms.len() <= 1);
    }

    #[test]
    fn test_placement_is_deterministic() {
        let params = FloorParams::default();
        let mut rng1 = FloorRng::new(42);
        let mut rng2 = FloorRng::new(42);
        assert_eq!(place_rooms(&params, &mut rng1), place_rooms(&params, &mut rng2));
    }

    #[test]
    fn test_carve_fills_room_interiors() {
        let mut grid = TileGrid::new(20, 20);
        let rooms = vec![Room::new(2, 2, 4, 3), Room::new(10, 10, 5, 5)];
        carve_rooms(&mut grid, &rooms);

        for room in &rooms {
            for y in room.y..=room.y2() {
                for x in room.x..=room.x2() {
                    assert_eq!(grid.kind_at(x, y), Some(TileKind::Floor));
                }
            }
        }
        // Nothing outside the rooms was touched
        let expected: i32 = rooms.iter().map(Room::area).sum();
        assert_eq!(grid.count_kind(TileKind::Floor), expected as usize);
    }
}
