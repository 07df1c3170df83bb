//! Default generation constants
//!
//! These mirror the classic floor tuning: a 20x20 grid with 5-10 rooms of
//! size 3-8 kept one tile off the grid border and one tile apart.

/// Default floor dimensions
pub const FLOOR_WIDTH: i32 = 20;
pub const FLOOR_HEIGHT: i32 = 20;

/// Room count range drawn once per generation
pub const MIN_ROOMS: u32 = 5;
pub const MAX_ROOMS: u32 = 10;

/// Room dimension range (width and height drawn independently)
pub const MIN_ROOM_SIZE: i32 = 3;
pub const MAX_ROOM_SIZE: i32 = 8;

/// Minimum margin between any room and the grid border
pub const EDGE_BUFFER: i32 = 1;

/// Minimum separation between two rooms; the overlap test expands both
/// rectangles by this much before intersecting them
pub const ROOM_GAP: i32 = 1;

/// Total rejection-sampling budget for room placement
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;
