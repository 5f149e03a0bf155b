//! Objects instantiated by a generation pass

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::{Block, BlockType, GridPos};

/// What an object represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum ObjectKind {
    /// Ground-level block, one per cell
    Block,
    /// Wall stacked above a border or untouched floor cell
    WallCopy,
    /// Cover scattered over a zone cell
    Cover,
}

/// One placed object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapObject {
    pub kind: ObjectKind,
    /// Classification the object carries (`Wall` for copies, the zone type
    /// for cover)
    pub block_type: BlockType,
    pub cell: GridPos,
    /// Vertical level in blocks above the ground
    pub level: u8,
    pub position: [f32; 3],
}

impl MapObject {
    /// Object of `kind` above `block` at `level`
    pub fn at(
        kind: ObjectKind,
        block_type: BlockType,
        block: &Block,
        level: u8,
        block_size: f32,
    ) -> Self {
        Self {
            kind,
            block_type,
            cell: GridPos::new(block.x, block.z),
            level,
            position: block.world_position(level, block_size),
        }
    }
}
