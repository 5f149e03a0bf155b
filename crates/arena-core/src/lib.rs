//! arena-core: procedural arena generation for a tactical shooter
//!
//! Builds a block grid with two spawns, two objective sites, corridors
//! between them, an optional central room, border walls and scattered
//! cover, plus the zone list that bot and team logic query.
//!
//! The crate does no terminal I/O. Randomness always comes from an
//! explicitly passed [`MapRng`], so a seed reproduces a map exactly.

pub mod config;
pub mod error;
pub mod map;

mod consts;
mod rng;

pub use config::{CoverConfig, CoverProbability, GeneratorConfig, RoomConfig, ZoneWeightConfig};
pub use consts::*;
pub use error::{ConfigError, MapError, MapResult};
pub use map::{generate_map, GeneratedMap, MapGenerator};
pub use rng::MapRng;
