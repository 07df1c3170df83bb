//! Room rectangles
//!
//! Rooms are value objects created once during placement and never resized.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangular room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// X coordinate of the left edge
    pub x: i32,
    /// Y coordinate of the top edge
    pub y: i32,
    /// Width in tiles
    pub width: i32,
    /// Height in tiles
    pub height: i32,
}

impl Room {
    /// Create a new room
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge coordinate (inclusive)
    pub const fn x2(&self) -> i32 {
        self.x + self.width - 1
    }

    /// Bottom edge coordinate (inclusive)
    pub const fn y2(&self) -> i32 {
        self.y + self.height - 1
    }

    /// Integer center of the room
    pub const fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Room area in tiles
    pub const fn area(&self) -> i32 {
        self.width * self.height
    }

    /// Check if this room is too close to another
    ///
    /// Both rectangles are expanded by `gap` on every side before the
    /// intersection test, so `gap` tiles of separation are required.
    pub const fn overlaps(&self, other: &Room, gap: i32) -> bool {
        let ax1 = self.x - gap;
        let ay1 = self.y - gap;
        let ax2 = self.x2() + gap;
        let ay2 = self.y2() + gap;

        let bx1 = other.x - gap;
        let by1 = other.y - gap;
        let bx2 = other.x2() + gap;
        let by2 = other.y2() + gap;

        !(ax2 < bx1 || bx2 < ax1 || ay2 < by1 || by2 < ay1)
    }

    /// Check if a point is inside the room's bounds
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.x2() && y >= self.y && y <= self.y2()
    }

    /// Check if a point is strictly interior (excludes the 1-cell border)
    pub const fn contains_interior(&self, x: i32, y: i32) -> bool {
        x > self.x && x < self.x2() && y > self.y && y < self.y2()
    }

    /// Check if a point lies on the room's boundary ring
    pub const fn on_boundary(&self, x: i32, y: i32) -> bool {
        self.contains(x, y) && !self.contains_interior(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let room = Room::new(2, 3, 5, 4);
        assert_eq!(room.x2(), 6);
        assert_eq!(room.y2(), 6);
        assert_eq!(room.area(), 20);
    }

    #[test]
    fn test_center() {
        let room = Room::new(10, 10, 5, 5);
        assert_eq!(room.center(), (12, 12));

        // Even dimensions round toward the far edge
        let room = Room::new(0, 0, 4, 4);
        assert_eq!(room.center(), (2, 2));
    }

    #[test]
    fn test_overlap() {
        let room1 = Room::new(5, 5, 5, 5);
        let room2 = Room::new(8, 8, 5, 5);
        let room3 = Room::new(15, 15, 5, 5);

        assert!(room1.overlaps(&room2, 0));
        assert!(!room1.overlaps(&room3, 0));
        assert!(room1.overlaps(&room3, 10));
    }

    #[test]
    fn test_overlap_gap() {
        // Touching rooms are fine with gap 0 but rejected with gap 1
        let room1 = Room::new(0, 0, 3, 3);
        let room2 = Room::new(3, 0, 3, 3);
        assert!(!room1.overlaps(&room2, 0));
        assert!(room1.overlaps(&room2, 1));

        // One tile of air between them satisfies gap 1
        let room3 = Room::new(4, 0, 3, 3);
        assert!(!room1.overlaps(&room3, 1));
    }

    #[test]
    fn test_contains() {
        let room = Room::new(2, 2, 4, 4);
        assert!(room.contains(2, 2));
        assert!(room.contains(5, 5));
        assert!(!room.contains(6, 5));
        assert!(!room.contains(1, 2));
    }

    #[test]
    fn test_interior_excludes_border() {
        let room = Room::new(2, 2, 4, 4);
        assert!(room.contains_interior(3, 3));
        assert!(room.contains_interior(4, 4));
        assert!(!room.contains_interior(2, 3));
        assert!(!room.contains_interior(5, 4));

        assert!(room.on_boundary(2, 2));
        assert!(room.on_boundary(5, 3));
        assert!(!room.on_boundary(3, 3));
        assert!(!room.on_boundary(6, 6));

        // 3x3 room has exactly one interior cell
        let small = Room::new(0, 0, 3, 3);
        assert!(small.contains_interior(1, 1));
        assert!(!small.contains_interior(0, 1));
    }
}
