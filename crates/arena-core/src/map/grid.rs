//! The block grid

use serde::{Deserialize, Serialize};

use super::{Block, BlockType, Transition};

/// Integer grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub z: i32,
}

impl GridPos {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Manhattan distance
    pub fn manhattan(&self, other: GridPos) -> u64 {
        (self.x.abs_diff(other.x) + self.z.abs_diff(other.z)) as u64
    }

    /// Euclidean distance
    pub fn distance(&self, other: GridPos) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dz = (self.z - other.z) as f32;
        (dx * dx + dz * dz).sqrt()
    }

    pub const fn offset(&self, dx: i32, dz: i32) -> GridPos {
        GridPos::new(self.x + dx, self.z + dz)
    }

    /// Grid cell of a world position (divide by block size, round to nearest)
    pub fn from_world(position: [f32; 3], block_size: f32) -> GridPos {
        GridPos::new(
            (position[0] / block_size).round() as i32,
            (position[2] / block_size).round() as i32,
        )
    }
}

/// Fixed-size 2D array of blocks, indexed `cells[x][z]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Vec<Block>>,
}

impl Grid {
    /// Create a grid of floor blocks
    ///
    /// Non-positive dimensions yield an empty grid.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let cells = (0..width)
            .map(|x| (0..height).map(|z| Block::floor(x, z)).collect())
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, x: i32, z: i32) -> bool {
        x >= 0 && x < self.width && z >= 0 && z < self.height
    }

    /// True on the outermost ring of cells
    pub fn is_border(&self, x: i32, z: i32) -> bool {
        x == 0 || x == self.width - 1 || z == 0 || z == self.height - 1
    }

    pub fn get(&self, x: i32, z: i32) -> Option<&Block> {
        if self.in_bounds(x, z) {
            Some(&self.cells[x as usize][z as usize])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: i32, z: i32) -> Option<&mut Block> {
        if self.in_bounds(x, z) {
            Some(&mut self.cells[x as usize][z as usize])
        } else {
            None
        }
    }

    /// Classification at `(x, z)`, `None` when out of bounds
    pub fn block_type(&self, x: i32, z: i32) -> Option<BlockType> {
        self.get(x, z).map(Block::block_type)
    }

    /// Guarded transition at `(x, z)`; `None` when out of bounds
    pub fn set_type(&mut self, x: i32, z: i32, new_type: BlockType) -> Option<Transition> {
        self.get_mut(x, z).map(|block| block.set_type(new_type))
    }

    /// All blocks, column by column
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.cells.iter().flat_map(|col| col.iter())
    }

    /// Number of blocks currently of type `typ`
    pub fn count(&self, typ: BlockType) -> usize {
        self.blocks().filter(|b| b.block_type() == typ).count()
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        (self.width * self.height) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_floor() {
        let grid = Grid::new(6, 4);
        assert_eq!(grid.len(), 24);
        assert_eq!(grid.count(BlockType::Floor), 24);
        let block = grid.get(5, 3).unwrap();
        assert_eq!((block.x, block.z), (5, 3));
    }

    #[test]
    fn test_bounds() {
        let grid = Grid::new(6, 4);
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(5, 3));
        assert!(!grid.in_bounds(6, 0));
        assert!(!grid.in_bounds(0, 4));
        assert!(!grid.in_bounds(-1, 2));
        assert!(grid.get(-1, 0).is_none());
        assert_eq!(grid.block_type(10, 10), None);
    }

    #[test]
    fn test_set_type_out_of_bounds() {
        let mut grid = Grid::new(4, 4);
        assert_eq!(grid.set_type(4, 0, BlockType::Wall), None);
        assert_eq!(grid.set_type(1, 1, BlockType::Wall), Some(Transition::Applied));
        assert_eq!(grid.block_type(1, 1), Some(BlockType::Wall));
    }

    #[test]
    fn test_is_border() {
        let grid = Grid::new(5, 7);
        assert!(grid.is_border(0, 3));
        assert!(grid.is_border(4, 3));
        assert!(grid.is_border(2, 0));
        assert!(grid.is_border(2, 6));
        assert!(!grid.is_border(2, 3));
        assert!(!grid.is_border(1, 1));
    }

    #[test]
    fn test_degenerate_dimensions() {
        let grid = Grid::new(-3, 5);
        assert!(grid.is_empty());
        assert!(!grid.in_bounds(0, 0));
    }

    #[test]
    fn test_from_world_rounds() {
        assert_eq!(GridPos::from_world([3.9, 1.0, 2.2], 2.0), GridPos::new(2, 1));
        assert_eq!(GridPos::from_world([4.0, 0.0, 6.0], 1.0), GridPos::new(4, 6));
    }

    #[test]
    fn test_distances() {
        let a = GridPos::new(1, 1);
        let b = GridPos::new(4, 5);
        assert_eq!(a.manhattan(b), 7);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }
}
