//! Zone registry: which cells were stamped with each zone type
//!
//! Membership is recorded when a cell is stamped, even if the guarded
//! transition refused the new type, so a list can contain cells whose
//! final type differs from the list's zone type.

use hashbrown::{HashMap, HashSet};
use serde::Serialize;

use super::{BlockType, GridPos};

/// Ordered member list for one zone type
#[derive(Debug, Clone, Default, Serialize)]
pub struct ZoneList {
    blocks: Vec<GridPos>,
    #[serde(skip)]
    seen: HashSet<GridPos>,
}

impl ZoneList {
    pub fn blocks(&self) -> &[GridPos] {
        &self.blocks
    }
}

/// Per-type member lists for `Spawn`, `Site`, `Main`, `Link` and `Room`
#[derive(Debug, Clone, Serialize)]
pub struct ZoneRegistry {
    dedup: bool,
    lists: HashMap<BlockType, ZoneList>,
}

impl ZoneRegistry {
    /// Create an empty registry
    ///
    /// With `dedup` each cell appears at most once per zone type, kept at
    /// its first insertion. Without it every stamp appends.
    pub fn new(dedup: bool) -> Self {
        let lists = BlockType::COVER_ZONES
            .iter()
            .map(|&t| (t, ZoneList::default()))
            .collect();
        Self { dedup, lists }
    }

    pub fn dedup(&self) -> bool {
        self.dedup
    }

    /// Record a stamp; returns true if an entry was appended
    pub fn record(&mut self, typ: BlockType, pos: GridPos) -> bool {
        if !typ.is_zone() {
            return false;
        }
        let Some(list) = self.lists.get_mut(&typ) else {
            return false;
        };
        if self.dedup && !list.seen.insert(pos) {
            return false;
        }
        list.blocks.push(pos);
        true
    }

    /// Members of a zone type, in insertion order
    pub fn blocks(&self, typ: BlockType) -> &[GridPos] {
        self.lists.get(&typ).map(ZoneList::blocks).unwrap_or(&[])
    }

    pub fn len(&self, typ: BlockType) -> usize {
        self.blocks(typ).len()
    }

    /// Entries across all zone types
    pub fn total(&self) -> usize {
        self.lists.values().map(|l| l.blocks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_tracks_only_zone_types() {
        let mut registry = ZoneRegistry::new(true);
        assert!(registry.record(BlockType::Spawn, GridPos::new(1, 1)));
        assert!(!registry.record(BlockType::Wall, GridPos::new(1, 1)));
        assert!(!registry.record(BlockType::Road, GridPos::new(1, 1)));
        assert_eq!(registry.total(), 1);
        assert!(registry.blocks(BlockType::Floor).is_empty());
    }

    #[test]
    fn test_record_accepts_exactly_zone_types() {
        let mut registry = ZoneRegistry::new(true);
        let p = GridPos::new(4, 4);
        for typ in BlockType::iter() {
            assert_eq!(registry.record(typ, p), typ.is_zone(), "{typ}");
        }
        assert_eq!(registry.total(), BlockType::COVER_ZONES.len());
        assert!(registry.dedup());
    }

    #[test]
    fn test_dedup_keeps_first_insertion_order() {
        let mut registry = ZoneRegistry::new(true);
        let a = GridPos::new(2, 3);
        let b = GridPos::new(4, 5);
        registry.record(BlockType::Main, a);
        registry.record(BlockType::Main, b);
        assert!(!registry.record(BlockType::Main, a));
        assert_eq!(registry.blocks(BlockType::Main), &[a, b]);
    }

    #[test]
    fn test_dedup_is_per_type() {
        let mut registry = ZoneRegistry::new(true);
        let p = GridPos::new(2, 3);
        assert!(registry.record(BlockType::Main, p));
        assert!(registry.record(BlockType::Link, p));
        assert_eq!(registry.total(), 2);
    }

    #[test]
    fn test_without_dedup_duplicates_kept() {
        let mut registry = ZoneRegistry::new(false);
        let p = GridPos::new(2, 3);
        registry.record(BlockType::Link, p);
        registry.record(BlockType::Link, p);
        assert_eq!(registry.len(BlockType::Link), 2);
    }
}
