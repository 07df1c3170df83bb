//! Floor generation parameters
//!
//! All knobs that control a single generation run. The defaults reproduce the
//! classic 20x20 layout; collaborators can override any subset via JSON
//! (every field has a serde default).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{
    EDGE_BUFFER, FLOOR_HEIGHT, FLOOR_WIDTH, MAX_PLACEMENT_ATTEMPTS, MAX_ROOMS, MAX_ROOM_SIZE,
    MIN_ROOMS, MIN_ROOM_SIZE, ROOM_GAP,
};

/// Errors raised by parameter validation and parsing
///
/// Generation itself never errors; only rejecting an unusable configuration
/// up front does.
#[derive(Error, Debug)]
pub enum ParamsError {
    #[error("floor dimensions must be positive, got {width}x{height}")]
    BadDimensions { width: i32, height: i32 },

    #[error("room count range is inverted: {min}..{max}")]
    BadRoomCountRange { min: u32, max: u32 },

    #[error("room size range is invalid: {min}..{max} (minimum size is 1)")]
    BadRoomSizeRange { min: i32, max: i32 },

    #[error("edge buffer and room gap must be non-negative")]
    NegativeMargin,

    #[error("placement attempt budget must be at least 1")]
    NoAttemptBudget,

    #[error("failed to parse parameters: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parameters for one floor generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorParams {
    /// Grid width in tiles
    #[serde(default = "default_width")]
    pub width: i32,

    /// Grid height in tiles
    #[serde(default = "default_height")]
    pub height: i32,

    /// Minimum number of rooms to target
    #[serde(default = "default_min_rooms")]
    pub min_rooms: u32,

    /// Maximum number of rooms to target
    #[serde(default = "default_max_rooms")]
    pub max_rooms: u32,

    /// Minimum room width/height
    #[serde(default = "default_min_room_size")]
    pub min_room_size: i32,

    /// Maximum room width/height
    #[serde(default = "default_max_room_size")]
    pub max_room_size: i32,

    /// Margin kept between every room and the grid border
    #[serde(default = "default_edge_buffer")]
    pub edge_buffer: i32,

    /// Minimum separation between rooms; both rectangles are expanded by this
    /// before the intersection test
    #[serde(default = "default_room_gap")]
    pub room_gap: i32,

    /// Total rejection-sampling attempts before placement gives up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_width() -> i32 {
    FLOOR_WIDTH
}
fn default_height() -> i32 {
    FLOOR_HEIGHT
}
fn default_min_rooms() -> u32 {
    MIN_ROOMS
}
fn default_max_rooms() -> u32 {
    MAX_ROOMS
}
fn default_min_room_size() -> i32 {
    MIN_ROOM_SIZE
}
fn default_max_room_size() -> i32 {
    MAX_ROOM_SIZE
}
fn default_edge_buffer() -> i32 {
    EDGE_BUFFER
}
fn default_room_gap() -> i32 {
    ROOM_GAP
}
fn default_max_attempts() -> u32 {
    MAX_PLACEMENT_ATTEMPTS
}

impl Default for FloorParams {
    fn default() -> Self {
        Self {
            width: FLOOR_WIDTH,
            height: FLOOR_HEIGHT,
            min_rooms: MIN_ROOMS,
            max_rooms: MAX_ROOMS,
            min_room_size: MIN_ROOM_SIZE,
            max_room_size: MAX_ROOM_SIZE,
            edge_buffer: EDGE_BUFFER,
            room_gap: ROOM_GAP,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl FloorParams {
    /// Parameters for a square grid of the given side, other knobs default
    pub fn with_grid_size(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse parameters from JSON text; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ParamsError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Reject configurations that cannot produce a valid floor
    ///
    /// A valid configuration can still yield fewer rooms than targeted (that
    /// is best-effort, not an error); validation only catches nonsense like
    /// inverted ranges or a zero-sized grid.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.width < 1 || self.height < 1 {
            return Err(ParamsError::BadDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_rooms > self.max_rooms {
            return Err(ParamsError::BadRoomCountRange {
                min: self.min_rooms,
                max: self.max_rooms,
            });
        }
        if self.min_room_size < 1 || self.min_room_size > self.max_room_size {
            return Err(ParamsError::BadRoomSizeRange {
                min: self.min_room_size,
                max: self.max_room_size,
            });
        }
        if self.edge_buffer < 0 || self.room_gap < 0 {
            return Err(ParamsError::NegativeMargin);
        }
        if self.max_attempts == 0 {
            return Err(ParamsError::NoAttemptBudget);
        }
        Ok(())
    }
}
