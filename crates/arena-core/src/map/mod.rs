//! Arena map system
//!
//! Contains the block grid, zone layout, corridor carving, wall extrusion,
//! cover placement and the zone query surface.

mod block;
mod border;
mod cover;
mod generator;
mod grid;
mod layout;
mod object;
mod path;
mod rect;
mod registry;
mod zone;

pub use block::{Block, BlockType, RejectReason, Transition};
pub use border::{duplicate_wall_blocks, fill_border_walls};
pub use cover::{cover_probability, is_edge_block, is_junction_block, local_density, place_covers};
pub use generator::{generate_map, GeneratedMap, MapGenerator, MapSummary};
pub use grid::{Grid, GridPos};
pub use layout::{
    clear_zone, mark_zones, plan_anchors, random_edge_point, random_point_near, PlannedRoad,
    ZoneAnchors, ZoneLayout,
};
pub use object::{MapObject, ObjectKind};
pub use path::{carve_path, walk_cap, PathStyle, WalkStats};
pub use rect::{Edge, ZoneRect};
pub use registry::{ZoneList, ZoneRegistry};
pub use zone::{BotRole, RoadLink, RoadType, RoleWeights, Zone, ZoneId, ZoneKind, ZoneSet};
