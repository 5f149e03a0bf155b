//! Corridor carving
//!
//! A corridor is a biased random walk from `start` to `end`. Each iteration
//! stamps a square footprint around the cursor, then draws one value: below
//! the x-bias the cursor steps toward `end.x`, otherwise toward `end.z`. If
//! the chosen axis is already aligned the step is wasted. The loop stops as
//! soon as the cursor reaches `end`, so `end` itself is only covered by the
//! footprint of the previous stamp.
//!
//! Main corridors are wide, x-biased and record a running step weight.
//! Link corridors are thin and mostly step along z.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::consts::{WALK_CAP_FACTOR, WALK_CAP_SLACK};
use crate::rng::MapRng;

use super::{BlockType, Grid, GridPos, ZoneRegistry};

/// Corridor parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    /// Type stamped into the grid
    pub block_type: BlockType,
    /// Stamp radius: the footprint is `(2 * width + 1)` cells square
    pub width: i32,
    /// Probability of an x-step per iteration
    pub x_bias: f32,
    /// Write the running step counter into `Block::weight`
    pub track_weight: bool,
}

impl PathStyle {
    pub fn main(config: &GeneratorConfig) -> Self {
        Self {
            block_type: BlockType::Main,
            width: config.main_width,
            x_bias: config.main_x_bias,
            track_weight: true,
        }
    }

    pub fn link(config: &GeneratorConfig) -> Self {
        Self {
            block_type: BlockType::Link,
            width: config.link_width,
            x_bias: config.link_x_bias,
            track_weight: false,
        }
    }
}

/// What one walk did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkStats {
    /// Loop iterations (one stamp each)
    pub iterations: u64,
    /// Iterations whose chosen axis was already aligned
    pub wasted_steps: u64,
    /// The iteration cap was reached and the walk finished straight
    pub capped: bool,
}

/// Iteration budget for a walk between two points
///
/// Past the budget the walk stops drawing random axes and finishes along
/// x, then z.
pub fn walk_cap(start: GridPos, end: GridPos) -> u64 {
    WALK_CAP_FACTOR * start.manhattan(end) + WALK_CAP_SLACK
}

/// Stamp the footprint around `center`, recording every in-bounds cell
fn stamp(
    grid: &mut Grid,
    registry: &mut ZoneRegistry,
    center: GridPos,
    style: &PathStyle,
    weight: u32,
) {
    for dx in -style.width..=style.width {
        for dz in -style.width..=style.width {
            let pos = center.offset(dx, dz);
            let Some(block) = grid.get_mut(pos.x, pos.z) else {
                continue;
            };
            // rejection leaves spawn and site interiors intact
            let _ = block.set_type(style.block_type);
            if style.track_weight {
                block.weight = weight;
            }
            registry.record(style.block_type, pos);
        }
    }
}

/// Carve a corridor from `start` to `end`
///
/// Both points may lie outside the grid; off-grid cells are skipped.
pub fn carve_path(
    grid: &mut Grid,
    registry: &mut ZoneRegistry,
    start: GridPos,
    end: GridPos,
    style: &PathStyle,
    rng: &mut MapRng,
) -> WalkStats {
    let cap = walk_cap(start, end);
    let mut stats = WalkStats::default();
    let mut pos = start;
    let mut weight: u32 = 1;

    while pos != end {
        stamp(grid, registry, pos, style, weight);

        let step_x = if stats.iterations < cap {
            rng.value() < style.x_bias
        } else {
            if !stats.capped {
                warn!(
                    "{} walk {:?} -> {:?} hit its {} iteration cap, finishing straight",
                    style.block_type, start, end, cap
                );
                stats.capped = true;
            }
            pos.x != end.x
        };

        if step_x {
            if pos.x != end.x {
                pos.x += (end.x - pos.x).signum();
            } else {
                stats.wasted_steps += 1;
            }
        } else if pos.z != end.z {
            pos.z += (end.z - pos.z).signum();
        } else {
            stats.wasted_steps += 1;
        }

        weight = weight.saturating_add(1);
        stats.iterations += 1;
    }

    stats
}
