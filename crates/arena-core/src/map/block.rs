//! Block classification and the guarded type transition

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::*;

/// Block classification
///
/// `Empty`, `None`, `Neutral` and `Road` are never produced by the
/// generator but stay valid for code consuming the grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum BlockType {
    Floor = 0,
    Wall = 1,
    Empty = 2,
    #[default]
    None = 3,
    Spawn = 4,
    Main = 5,
    Link = 6,
    Neutral = 7,
    Site = 8,
    Road = 9,
    Room = 10,
}

impl BlockType {
    /// Zone types that receive cover, in placement order
    pub const COVER_ZONES: [BlockType; 5] = [
        BlockType::Spawn,
        BlockType::Site,
        BlockType::Main,
        BlockType::Link,
        BlockType::Room,
    ];

    /// Spawn and site interiors are protected from corridor carving
    pub const fn is_protected(&self) -> bool {
        matches!(self, BlockType::Spawn | BlockType::Site)
    }

    /// Corridor types (the ones a protected block refuses)
    pub const fn is_road(&self) -> bool {
        matches!(self, BlockType::Main | BlockType::Link | BlockType::Road)
    }

    /// Types tracked by the zone registry
    pub const fn is_zone(&self) -> bool {
        matches!(
            self,
            BlockType::Spawn | BlockType::Site | BlockType::Main | BlockType::Link | BlockType::Room
        )
    }

    /// Get the display character for this block type
    pub const fn symbol(&self) -> char {
        match self {
            BlockType::Floor => S_FLOOR,
            BlockType::Wall => S_WALL,
            BlockType::Empty => S_EMPTY,
            BlockType::None => S_NONE,
            BlockType::Spawn => S_SPAWN,
            BlockType::Main => S_MAIN,
            BlockType::Link => S_LINK,
            BlockType::Neutral => S_NEUTRAL,
            BlockType::Site => S_SITE,
            BlockType::Road => S_ROAD,
            BlockType::Room => S_ROOM,
        }
    }
}

/// Why a transition was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// A spawn or site block was asked to become a corridor
    ProtectedZone {
        current: BlockType,
        requested: BlockType,
    },
}

/// Outcome of [`Block::set_type`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    Applied,
    Rejected(RejectReason),
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    typ: BlockType,

    /// Grid column
    pub x: i32,

    /// Grid row
    pub z: i32,

    /// Step index of the last main walk that stamped this block (0 = never)
    pub weight: u32,
}

impl Block {
    /// Create an unclassified block
    pub const fn new(x: i32, z: i32) -> Self {
        Self {
            typ: BlockType::None,
            x,
            z,
            weight: 0,
        }
    }

    /// Create a floor block
    pub const fn floor(x: i32, z: i32) -> Self {
        Self {
            typ: BlockType::Floor,
            x,
            z,
            weight: 0,
        }
    }

    /// Current classification
    pub const fn block_type(&self) -> BlockType {
        self.typ
    }

    /// Change the classification unless the priority rule forbids it
    ///
    /// Once a block is `Spawn` or `Site` it never becomes `Main`, `Link`
    /// or `Road`. Every other target, `Wall` included, is accepted.
    pub fn set_type(&mut self, new_type: BlockType) -> Transition {
        if self.typ.is_protected() && new_type.is_road() {
            return Transition::Rejected(RejectReason::ProtectedZone {
                current: self.typ,
                requested: new_type,
            });
        }
        self.typ = new_type;
        Transition::Applied
    }

    /// World position of this block at the given vertical level
    pub fn world_position(&self, level: u8, block_size: f32) -> [f32; 3] {
        [
            self.x as f32 * block_size,
            level as f32 * block_size,
            self.z as f32 * block_size,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_new_block_is_unclassified() {
        let block = Block::new(3, 4);
        assert_eq!(block.block_type(), BlockType::None);
        assert_eq!(block.weight, 0);
    }

    #[test]
    fn test_protected_rejects_roads() {
        for protected in [BlockType::Spawn, BlockType::Site] {
            for road in [BlockType::Main, BlockType::Link, BlockType::Road] {
                let mut block = Block::floor(0, 0);
                assert!(block.set_type(protected).is_applied());
                assert_eq!(
                    block.set_type(road),
                    Transition::Rejected(RejectReason::ProtectedZone {
                        current: protected,
                        requested: road,
                    })
                );
                assert_eq!(block.block_type(), protected);
            }
        }
    }

    #[test]
    fn test_protected_accepts_everything_else() {
        for target in BlockType::iter().filter(|t| !t.is_road()) {
            let mut block = Block::floor(0, 0);
            block.set_type(BlockType::Spawn);
            assert!(block.set_type(target).is_applied(), "{target} refused");
            assert_eq!(block.block_type(), target);
        }
    }

    #[test]
    fn test_wall_overrides_site() {
        let mut block = Block::floor(0, 0);
        block.set_type(BlockType::Site);
        assert!(block.set_type(BlockType::Wall).is_applied());
        assert_eq!(block.block_type(), BlockType::Wall);
    }

    #[test]
    fn test_unprotected_accepts_roads() {
        let mut block = Block::floor(1, 1);
        assert!(block.set_type(BlockType::Link).is_applied());
        assert!(block.set_type(BlockType::Main).is_applied());
        assert!(block.set_type(BlockType::Road).is_applied());
        assert_eq!(block.block_type(), BlockType::Road);
    }

    #[test]
    fn test_world_position() {
        let block = Block::floor(2, 5);
        assert_eq!(block.world_position(1, 2.0), [4.0, 2.0, 10.0]);
    }

    #[test]
    fn test_symbols_unique() {
        let symbols: Vec<char> = BlockType::iter().map(|t| t.symbol()).collect();
        for (i, a) in symbols.iter().enumerate() {
            for b in &symbols[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
