//! Error types for map generation

use thiserror::Error;

/// Configuration rejected before any grid is built
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid must be at least {min}x{min} blocks, got {width}x{height}")]
    GridTooSmall { width: i32, height: i32, min: i32 },

    #[error("block size must be a positive finite number, got {0}")]
    InvalidBlockSize(f32),

    #[error("{name} corridor width must not be negative, got {value}")]
    NegativeCorridorWidth { name: &'static str, value: i32 },

    #[error("spawn size range [{min}, {max}] is invalid: {reason}")]
    InvalidSpawnRange {
        min: i32,
        max: i32,
        reason: &'static str,
    },

    #[error("spawn size {size} does not fit the {interior}-block interior")]
    SpawnExceedsInterior { size: i32, interior: i32 },

    #[error("site {width}x{height} does not fit the {interior_width}x{interior_height} interior")]
    SiteExceedsInterior {
        width: i32,
        height: i32,
        interior_width: i32,
        interior_height: i32,
    },

    #[error("site dimensions must be positive, got {width}x{height}")]
    InvalidSiteSize { width: i32, height: i32 },

    #[error("link start offset must not be negative, got {0}")]
    NegativeLinkOffset(i32),

    #[error("{name} axis bias must lie in [0, 1], got {value}")]
    InvalidBias { name: &'static str, value: f32 },

    #[error("{zone} cover probabilities invalid (min {min}, max {max})")]
    InvalidCoverProbability { zone: &'static str, min: f32, max: f32 },

    #[error("cover multiplier must be a non-negative finite number, got {0}")]
    InvalidCoverMultiplier(f32),

    #[error("interior wall levels must be 1 or 2, got {0}")]
    InvalidWallLevels(u8),

    #[error("room size must be positive when the room is enabled, got {0}")]
    InvalidRoomSize(i32),

    #[error("{kind} zone weight for {role} must be a non-negative finite number, got {value}")]
    InvalidZoneWeight {
        kind: &'static str,
        role: &'static str,
        value: f32,
    },
}

/// Top-level error for the map crate
#[derive(Error, Debug)]
pub enum MapError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used by fallible map operations
pub type MapResult<T> = Result<T, MapError>;
