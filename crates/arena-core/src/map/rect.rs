//! Axis-aligned zone rectangles
//!
//! A rectangle is anchored at its minimum corner and covers `width` cells
//! along X and `height` cells along Z. The "top" edge is the minimum-Z row.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::GridPos;

/// Rectangle side, in tie-break order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// A rectangle of grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneRect {
    pub x: i32,
    pub z: i32,
    pub width: i32,
    pub height: i32,
}

impl ZoneRect {
    pub const fn new(x: i32, z: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            z,
            width,
            height,
        }
    }

    /// Last column covered
    pub fn max_x(&self) -> i32 {
        self.x + self.width - 1
    }

    /// Last row covered
    pub fn max_z(&self) -> i32 {
        self.z + self.height - 1
    }

    /// Check if the rectangle has positive area
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x >= self.x && pos.x <= self.max_x() && pos.z >= self.z && pos.z <= self.max_z()
    }

    /// Inside the rectangle and on its outermost ring
    pub fn on_boundary(&self, pos: GridPos) -> bool {
        let on_x_side = pos.x == self.x || pos.x == self.max_x();
        let on_z_side = pos.z == self.z || pos.z == self.max_z();
        self.contains(pos) && (on_x_side || on_z_side)
    }

    /// Every covered cell, column by column
    pub fn cells(&self) -> impl Iterator<Item = GridPos> + '_ {
        (self.x..self.x + self.width)
            .flat_map(move |x| (self.z..self.z + self.height).map(move |z| GridPos::new(x, z)))
    }

    /// Midpoint of one side (integer halves, biased toward the origin)
    pub fn edge_midpoint(&self, edge: Edge) -> GridPos {
        match edge {
            Edge::Top => GridPos::new(self.x + self.width / 2, self.z),
            Edge::Bottom => GridPos::new(self.x + self.width / 2, self.max_z()),
            Edge::Left => GridPos::new(self.x, self.z + self.height / 2),
            Edge::Right => GridPos::new(self.max_x(), self.z + self.height / 2),
        }
    }

    /// Side whose midpoint is nearest `reference`
    ///
    /// Ties go to the earlier side in Top, Bottom, Left, Right order.
    pub fn nearest_edge(&self, reference: GridPos) -> Edge {
        let mut best = Edge::Top;
        let mut best_dist = reference.distance(self.edge_midpoint(Edge::Top));
        for edge in [Edge::Bottom, Edge::Left, Edge::Right] {
            let dist = reference.distance(self.edge_midpoint(edge));
            if dist < best_dist {
                best = edge;
                best_dist = dist;
            }
        }
        best
    }

    /// Smallest rectangle covering both points, grown by `margin` on each side
    pub fn spanning(a: GridPos, b: GridPos, margin: i32) -> ZoneRect {
        let min_x = a.x.min(b.x) - margin;
        let min_z = a.z.min(b.z) - margin;
        let max_x = a.x.max(b.x) + margin;
        let max_z = a.z.max(b.z) + margin;
        ZoneRect::new(min_x, min_z, max_x - min_x + 1, max_z - min_z + 1)
    }

    /// Intersection with a `width` x `height` grid, `None` if nothing is left
    pub fn clip(&self, width: i32, height: i32) -> Option<ZoneRect> {
        let min_x = self.x.max(0);
        let min_z = self.z.max(0);
        let max_x = self.max_x().min(width - 1);
        let max_z = self.max_z().min(height - 1);
        let clipped = ZoneRect::new(min_x, min_z, max_x - min_x + 1, max_z - min_z + 1);
        clipped.is_valid().then_some(clipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_rect_dimensions() {
        let r = ZoneRect::new(10, 20, 6, 3);
        assert_eq!(r.max_x(), 15);
        assert_eq!(r.max_z(), 22);
        assert_eq!(r.cells().count(), 18);
    }

    #[test]
    fn test_boundary() {
        let r = ZoneRect::new(0, 0, 4, 4);
        assert!(r.on_boundary(GridPos::new(0, 2)));
        assert!(r.on_boundary(GridPos::new(3, 3)));
        assert!(!r.on_boundary(GridPos::new(1, 2)));
        assert!(!r.on_boundary(GridPos::new(4, 0)));
    }

    #[test]
    fn test_edge_midpoints_on_boundary() {
        let r = ZoneRect::new(3, 7, 5, 4);
        for edge in Edge::iter() {
            assert!(r.on_boundary(r.edge_midpoint(edge)), "{edge} midpoint off boundary");
        }
        assert_eq!(r.edge_midpoint(Edge::Top), GridPos::new(5, 7));
        assert_eq!(r.edge_midpoint(Edge::Right), GridPos::new(7, 9));
    }

    #[test]
    fn test_nearest_edge() {
        let r = ZoneRect::new(10, 10, 4, 4);
        assert_eq!(r.nearest_edge(GridPos::new(12, 0)), Edge::Top);
        assert_eq!(r.nearest_edge(GridPos::new(12, 30)), Edge::Bottom);
        assert_eq!(r.nearest_edge(GridPos::new(0, 12)), Edge::Left);
        assert_eq!(r.nearest_edge(GridPos::new(30, 12)), Edge::Right);
    }

    #[test]
    fn test_nearest_edge_tie_prefers_top() {
        // 1x1 rect: every midpoint is the same cell
        let r = ZoneRect::new(5, 5, 1, 1);
        assert_eq!(r.nearest_edge(GridPos::new(9, 9)), Edge::Top);
    }

    #[test]
    fn test_nearest_edge_tie_order() {
        let r = ZoneRect::new(10, 10, 4, 4);
        // (9, 9) is equally far from the top (12, 10) and left (10, 12) midpoints
        let top_left = GridPos::new(9, 9);
        let top = top_left.distance(r.edge_midpoint(Edge::Top));
        assert_eq!(top, top_left.distance(r.edge_midpoint(Edge::Left)));
        assert_eq!(r.nearest_edge(top_left), Edge::Top);

        // (14, 14) is equally far from the bottom (12, 13) and right (13, 12) midpoints
        let bottom_right = GridPos::new(14, 14);
        let bottom = bottom_right.distance(r.edge_midpoint(Edge::Bottom));
        assert_eq!(bottom, bottom_right.distance(r.edge_midpoint(Edge::Right)));
        assert_eq!(r.nearest_edge(bottom_right), Edge::Bottom);
    }

    #[test]
    fn test_spanning_and_clip() {
        let r = ZoneRect::spanning(GridPos::new(5, 1), GridPos::new(2, 4), 1);
        assert_eq!(r, ZoneRect::new(1, 0, 6, 6));

        let clipped = ZoneRect::new(-2, -2, 5, 5).clip(10, 10).unwrap();
        assert_eq!(clipped, ZoneRect::new(0, 0, 3, 3));
        assert!(ZoneRect::new(12, 12, 3, 3).clip(10, 10).is_none());
    }
}
