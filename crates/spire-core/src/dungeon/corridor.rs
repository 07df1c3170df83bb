//! Corridor connection and connectivity validation
//!
//! Rooms are connected as a simple chain in placement order: room[i] to
//! room[i+1]. Chain order is enough to guarantee global connectivity because
//! reachability is transitive along the chain; this is intentionally not an
//! MST or Delaunay scheme, and changing it would change every seeded layout.

use std::collections::VecDeque;

use crate::rng::FloorRng;

use super::grid::TileGrid;
use super::room::Room;

/// Connect rooms in placement order with L-shaped corridors
///
/// For each adjacent pair, one coin flip decides the elbow order: horizontal
/// segment first then vertical, or the reverse. Carving only ever upgrades
/// walls to floor; existing floor and stairs tiles are left alone. Fewer than
/// two rooms is a no-op.
pub fn carve_corridors(grid: &mut TileGrid, rooms: &[Room], rng: &mut FloorRng) {
    if rooms.len() < 2 {
        return;
    }

    for pair in rooms.windows(2) {
        let (x1, y1) = pair[0].center();
        let (x2, y2) = pair[1].center();

        if rng.coin_flip() {
            carve_horizontal(grid, x1, x2, y1);
            carve_vertical(grid, y1, y2, x2);
        } else {
            carve_vertical(grid, y1, y2, x1);
            carve_horizontal(grid, x1, x2, y2);
        }
    }
}

/// Carve all cells between two x coordinates (inclusive) at a fixed y
fn carve_horizontal(grid: &mut TileGrid, x1: i32, x2: i32, y: i32) {
    for x in x1.min(x2)..=x1.max(x2) {
        grid.carve(x, y);
    }
}

/// Carve all cells between two y coordinates (inclusive) at a fixed x
fn carve_vertical(grid: &mut TileGrid, y1: i32, y2: i32, x: i32) {
    for y in y1.min(y2)..=y1.max(y2) {
        grid.carve(x, y);
    }
}

/// Check that every room is reachable from every other room
///
/// Flood fill (BFS, 4-directional) from the first room's center, traversing
/// walkable tiles only, with a dense `width * height` visited buffer. Success
/// is per-room: a room counts as reached if any cell in its bounds was
/// visited. Trivially true below two rooms.
///
/// Trap and chest side tables do not alter tile walkability, so this can be
/// called before or after feature placement with the same result.
pub fn is_fully_connected(grid: &TileGrid, rooms: &[Room]) -> bool {
    if rooms.len() < 2 {
        return true;
    }

    let width = grid.width();
    let height = grid.height();
    let mut visited = vec![false; (width * height) as usize];
    let mut queue = VecDeque::new();

    let (sx, sy) = rooms[0].center();
    if !grid.in_bounds(sx, sy) {
        return false;
    }
    visited[(sy * width + sx) as usize] = true;
    queue.push_back((sx, sy));

    while let Some((x, y)) = queue.pop_front() {
        for (dx, dy) in [(0, 1), (1, 0), (0, -1), (-1, 0)] {
            let (nx, ny) = (x + dx, y + dy);
            if !grid.is_walkable(nx, ny) {
                continue;
            }
            let idx = (ny * width + nx) as usize;
            if !visited[idx] {
                visited[idx] = true;
                queue.push_back((nx, ny));
            }
        }
    }

    rooms.iter().all(|room| {
        (room.y..=room.y2()).any(|y| {
            (room.x..=room.x2()).any(|x| grid.in_bounds(x, y) && visited[(y * width + x) as usize])
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::generation::carve_rooms;
    use crate::dungeon::tile::TileKind;

    fn carved_grid(rooms: &[Room]) -> TileGrid {
        let mut grid = TileGrid::new(20, 20);
        carve_rooms(&mut grid, rooms);
        grid
    }

    #[test]
    fn test_no_rooms_is_trivially_connected() {
        let grid = TileGrid::new(20, 20);
        assert!(is_fully_connected(&grid, &[]));
    }

    #[test]
    fn test_single_room_is_trivially_connected() {
        let rooms = [Room::new(2, 2, 4, 4)];
        let grid = carved_grid(&rooms);
        assert!(is_fully_connected(&grid, &rooms));
    }

    #[test]
    fn test_disjoint_rooms_are_not_connected() {
        let rooms = [Room::new(2, 2, 4, 4), Room::new(12, 12, 4, 4)];
        let grid = carved_grid(&rooms);
        assert!(!is_fully_connected(&grid, &rooms));
    }

    #[test]
    fn test_corridors_connect_rooms() {
        let rooms = [Room::new(2, 2, 4, 4), Room::new(12, 12, 4, 4)];
        let mut grid = carved_grid(&rooms);
        let mut rng = FloorRng::new(1);
        carve_corridors(&mut grid, &rooms, &mut rng);
        assert!(is_fully_connected(&grid, &rooms));
    }

    #[test]
    fn test_corridor_adds_floor_tiles() {
        let rooms = [Room::new(2, 2, 3, 3), Room::new(14, 14, 3, 3)];
        let mut grid = carved_grid(&rooms);
        let before = grid.count_kind(TileKind::Floor);

        let mut rng = FloorRng::new(5);
        carve_corridors(&mut grid, &rooms, &mut rng);
        assert!(grid.count_kind(TileKind::Floor) > before);
    }

    #[test]
    fn test_carving_never_downgrades_stairs() {
        let rooms = [Room::new(2, 2, 3, 3), Room::new(14, 14, 3, 3)];
        let mut grid = carved_grid(&rooms);
        let (cx, cy) = rooms[0].center();
        grid.set_kind(cx, cy, TileKind::StairsUp);

        let mut rng = FloorRng::new(5);
        carve_corridors(&mut grid, &rooms, &mut rng);
        assert_eq!(grid.kind_at(cx, cy), Some(TileKind::StairsUp));
    }

    #[test]
    fn test_single_room_corridor_noop() {
        let rooms = [Room::new(2, 2, 4, 4)];
        let mut grid = carved_grid(&rooms);
        let before = grid.count_kind(TileKind::Floor);

        let mut rng = FloorRng::new(9);
        carve_corridors(&mut grid, &rooms, &mut rng);
        assert_eq!(grid.count_kind(TileKind::Floor), before);
    }

    #[test]
    fn test_chain_connects_many_rooms() {
        let rooms = [
            Room::new(1, 1, 3, 3),
            Room::new(15, 1, 3, 3),
            Room::new(1, 15, 3, 3),
            Room::new(15, 15, 3, 3),
        ];
        let mut grid = carved_grid(&rooms);
        let mut rng = FloorRng::new(99);
        carve_corridors(&mut grid, &rooms, &mut rng);
        assert!(is_fully_connected(&grid, &rooms));
    }
}
