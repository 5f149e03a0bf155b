//! Default generation tunables
//!
//! These seed `GeneratorConfig::default()`; nothing reads them directly
//! during generation.

/// Map dimensions in blocks
pub const DEFAULT_WIDTH: i32 = 20;
pub const DEFAULT_HEIGHT: i32 = 20;

/// Smallest grid that still leaves a usable interior
pub const MIN_GRID_SIZE: i32 = 8;

/// Cells kept between the interior and the grid edge (two per side)
pub const INTERIOR_MARGIN: i32 = 4;

/// World units per block
pub const DEFAULT_BLOCK_SIZE: f32 = 1.0;

/// Corridor half-widths (stamp radius around the walk cursor)
pub const DEFAULT_MAIN_WIDTH: i32 = 1;
pub const DEFAULT_LINK_WIDTH: i32 = 1;

/// Spawn rectangle size range; the drawn size is split over both axes
pub const DEFAULT_SPAWN_SIZE_MIN: i32 = 8;
pub const DEFAULT_SPAWN_SIZE_MAX: i32 = 10;

/// Site rectangle dimensions
pub const DEFAULT_SITE_WIDTH: i32 = 4;
pub const DEFAULT_SITE_HEIGHT: i32 = 4;

/// Jitter applied to a spawn anchor to start a link corridor
pub const DEFAULT_SPAWN_LINK_OFFSET: i32 = 2;

/// Probability of an x-step per walk iteration
pub const DEFAULT_MAIN_X_BIAS: f32 = 0.85;
pub const DEFAULT_LINK_X_BIAS: f32 = 0.15;

/// Central room edge length
pub const DEFAULT_ROOM_SIZE: i32 = 5;

/// Wall copies stacked over untouched interior floor
pub const DEFAULT_INTERIOR_WALL_LEVELS: u8 = 2;

/// Wall copies stacked over border cells
pub const BORDER_WALL_LEVELS: u8 = 2;

/// Walk iteration cap: `WALK_CAP_FACTOR * manhattan + WALK_CAP_SLACK`
pub const WALK_CAP_FACTOR: u64 = 32;
pub const WALK_CAP_SLACK: u64 = 256;

/// Map symbols
pub const S_FLOOR: char = '#';
pub const S_WALL: char = '|';
pub const S_SPAWN: char = 'S';
pub const S_SITE: char = 'X';
pub const S_MAIN: char = '=';
pub const S_LINK: char = '-';
pub const S_ROOM: char = 'o';
pub const S_ROAD: char = ':';
pub const S_NEUTRAL: char = 'n';
pub const S_EMPTY: char = ' ';
pub const S_NONE: char = '?';
pub const S_COVER: char = '*';
