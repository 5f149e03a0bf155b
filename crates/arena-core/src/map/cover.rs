//! Cover placement
//!
//! Every registry entry of a cover zone type gets one independent roll.
//! The chance falls as the cell's 3x3 neighbourhood fills with its own
//! zone type, so zone fringes receive more cover than zone interiors.
//! Corridor cells (`Main`, `Link`) can be restricted to edges and
//! junctions to keep the middle of a corridor walkable.

use log::debug;

use crate::config::GeneratorConfig;
use crate::rng::MapRng;

use super::{BlockType, Grid, GridPos, MapObject, ObjectKind, ZoneRegistry};

const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

const SURROUNDING: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// In-bounds neighbours at `offsets` whose type differs from `zone`
fn differing_neighbours(
    grid: &Grid,
    pos: GridPos,
    zone: BlockType,
    offsets: &[(i32, i32)],
) -> usize {
    offsets
        .iter()
        .filter_map(|&(dx, dz)| grid.block_type(pos.x + dx, pos.z + dz))
        .filter(|&t| t != zone)
        .count()
}

/// Any orthogonal in-bounds neighbour is not of type `zone`
///
/// Off-grid neighbours are ignored rather than counted as different.
pub fn is_edge_block(grid: &Grid, pos: GridPos, zone: BlockType) -> bool {
    differing_neighbours(grid, pos, zone, &ORTHOGONAL) > 0
}

/// At least two of the eight surrounding in-bounds cells are not of type `zone`
pub fn is_junction_block(grid: &Grid, pos: GridPos, zone: BlockType) -> bool {
    differing_neighbours(grid, pos, zone, &SURROUNDING) >= 2
}

/// Fraction of the in-bounds 3x3 window (centre included) of type `zone`
///
/// Always in `[0, 1]`; an off-grid query with no in-bounds cells yields 0.
pub fn local_density(grid: &Grid, pos: GridPos, zone: BlockType) -> f32 {
    let mut total = 0u32;
    let mut same = 0u32;
    for dx in -1..=1 {
        for dz in -1..=1 {
            if let Some(t) = grid.block_type(pos.x + dx, pos.z + dz) {
                total += 1;
                if t == zone {
                    same += 1;
                }
            }
        }
    }
    if total == 0 {
        return 0.0;
    }
    same as f32 / total as f32
}

/// Final cover chance for a cell of `zone` at `density`
///
/// Zero for types without cover settings.
pub fn cover_probability(config: &GeneratorConfig, zone: BlockType, density: f32) -> f32 {
    config
        .cover
        .for_zone(zone)
        .map_or(0.0, |p| p.at_density(density) * config.cover.multiplier)
}

/// Roll cover for every registry entry of every cover zone type
///
/// Covers sit one level above their block. Duplicate registry entries are
/// rolled independently.
pub fn place_covers(
    grid: &Grid,
    registry: &ZoneRegistry,
    config: &GeneratorConfig,
    rng: &mut MapRng,
) -> Vec<MapObject> {
    let mut covers = Vec::new();

    for zone in BlockType::COVER_ZONES {
        let gated = config.edge_gating && matches!(zone, BlockType::Main | BlockType::Link);
        let mut skipped = 0usize;
        let before = covers.len();

        for &pos in registry.blocks(zone) {
            let Some(block) = grid.get(pos.x, pos.z) else {
                continue;
            };
            if gated && !is_edge_block(grid, pos, zone) && !is_junction_block(grid, pos, zone) {
                skipped += 1;
                continue;
            }
            let p = cover_probability(config, zone, local_density(grid, pos, zone));
            if rng.chance(p) {
                covers.push(MapObject::at(
                    ObjectKind::Cover,
                    zone,
                    block,
                    1,
                    config.block_size,
                ));
            }
        }

        debug!(
            "cover: {} placed on {} ({} entries, {} gated out)",
            covers.len() - before,
            zone,
            registry.len(zone),
            skipped
        );
    }

    covers
}
