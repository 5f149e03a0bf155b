//! Border walls and vertical wall extrusion

use log::debug;

use crate::consts::BORDER_WALL_LEVELS;

use super::{BlockType, Grid, MapObject, ObjectKind};

/// Force the outer ring of cells to `Wall`
///
/// Walls are not a corridor type, so this also overrides spawn or site
/// cells that reach the edge. Returns the number of cells changed.
pub fn fill_border_walls(grid: &mut Grid) -> usize {
    let (width, height) = (grid.width(), grid.height());
    let mut changed = 0;
    for x in 0..width {
        for z in 0..height {
            if !grid.is_border(x, z) {
                continue;
            }
            if grid.block_type(x, z) != Some(BlockType::Wall)
                && grid.set_type(x, z, BlockType::Wall).is_some_and(|t| t.is_applied())
            {
                changed += 1;
            }
        }
    }
    debug!("border: {} cells walled", changed);
    changed
}

/// Wall copies stacked over border cells and untouched interior floor
///
/// Border cells get copies at levels 1 and 2. Interior `Floor` cells get
/// copies at levels `1..=interior_levels`.
pub fn duplicate_wall_blocks(grid: &Grid, interior_levels: u8, block_size: f32) -> Vec<MapObject> {
    let mut copies = Vec::new();
    for block in grid.blocks() {
        let levels = if grid.is_border(block.x, block.z) {
            BORDER_WALL_LEVELS
        } else if block.block_type() == BlockType::Floor {
            interior_levels
        } else {
            continue;
        };
        for level in 1..=levels {
            copies.push(MapObject::at(
                ObjectKind::WallCopy,
                BlockType::Wall,
                block,
                level,
                block_size,
            ));
        }
    }
    copies
}
