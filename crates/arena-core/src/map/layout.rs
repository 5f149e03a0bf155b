//! Zone layout planning
//!
//! Places the two spawn areas and two objective sites, clears them into the
//! grid, then carves four link corridors and four main corridors (each
//! spawn to each site) and optionally a central room.
//!
//! Anchors are drawn from an interior of `(width - 4) x (height - 4)`
//! cells measured from the grid origin. Spawns sit near the horizontal
//! centre in the first and last quarter of the interior height; sites sit
//! near the vertical centre in the first and last quarter of the interior
//! width.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::rng::MapRng;

use super::path::{carve_path, PathStyle, WalkStats};
use super::{BlockType, Edge, Grid, GridPos, RoadType, ZoneRect, ZoneRegistry};

/// Zone origins for one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneAnchors {
    pub spawn_a: GridPos,
    pub spawn_b: GridPos,
    pub site_a: GridPos,
    pub site_b: GridPos,
}

impl ZoneAnchors {
    /// Integer average of the four anchors
    pub fn centroid(&self) -> GridPos {
        let all = [self.spawn_a, self.spawn_b, self.site_a, self.site_b];
        GridPos::new(
            all.iter().map(|p| p.x).sum::<i32>() / 4,
            all.iter().map(|p| p.z).sum::<i32>() / 4,
        )
    }
}

/// A carved corridor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannedRoad {
    pub road_type: RoadType,
    /// Spawn index (0 = A, 1 = B)
    pub spawn: usize,
    /// Site index (0 = A, 1 = B)
    pub site: usize,
    pub start: GridPos,
    pub end: GridPos,
    pub stats: WalkStats,
}

/// Everything the planner decided
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneLayout {
    pub anchors: ZoneAnchors,
    pub spawn_rects: [ZoneRect; 2],
    pub site_rects: [ZoneRect; 2],
    /// Links first, then mains, in carving order
    pub roads: Vec<PlannedRoad>,
    pub room: Option<ZoneRect>,
}

/// Random point within `offset` of `base` on each axis (inclusive)
pub fn random_point_near(base: GridPos, offset: i32, rng: &mut MapRng) -> GridPos {
    let dx = rng.range_inclusive(-offset, offset);
    let dz = rng.range_inclusive(-offset, offset);
    base.offset(dx, dz)
}

/// Random point on the side of `rect` nearest `reference`
pub fn random_edge_point(rect: &ZoneRect, reference: GridPos, rng: &mut MapRng) -> GridPos {
    match rect.nearest_edge(reference) {
        Edge::Top => GridPos::new(rng.range(rect.x, rect.x + rect.width), rect.z),
        Edge::Bottom => GridPos::new(rng.range(rect.x, rect.x + rect.width), rect.max_z()),
        Edge::Left => GridPos::new(rect.x, rng.range(rect.z, rect.z + rect.height)),
        Edge::Right => GridPos::new(rect.max_x(), rng.range(rect.z, rect.z + rect.height)),
    }
}

/// Stamp every in-bounds cell of `rect` with `typ` and record it
///
/// Returns the number of in-bounds cells visited.
pub fn clear_zone(
    grid: &mut Grid,
    registry: &mut ZoneRegistry,
    rect: &ZoneRect,
    typ: BlockType,
) -> usize {
    let mut stamped = 0;
    for pos in rect.cells() {
        if grid.set_type(pos.x, pos.z, typ).is_some() {
            registry.record(typ, pos);
            stamped += 1;
        }
    }
    stamped
}

/// Draw a spawn rectangle at `origin`, size split over the two axes
fn spawn_rect(origin: GridPos, config: &GeneratorConfig, rng: &mut MapRng) -> ZoneRect {
    let size = rng.range_inclusive(config.spawn_size_min, config.spawn_size_max);
    ZoneRect::new(origin.x, origin.z, size / 2, size - size / 2)
}

/// Draw the four anchors
pub fn plan_anchors(config: &GeneratorConfig, rng: &mut MapRng) -> ZoneAnchors {
    let iw = config.interior_width();
    let ih = config.interior_height();

    let spawn_x = |rng: &mut MapRng| iw / 2 + rng.range(-iw / 10, iw / 10);
    let site_z = |rng: &mut MapRng| ih / 2 + rng.range(-ih / 10, ih / 10);

    let spawn_a = GridPos::new(spawn_x(rng), rng.range(0, ih / 4));
    let spawn_b = GridPos::new(spawn_x(rng), rng.range(ih - ih / 4, ih));
    let site_a = GridPos::new(rng.range(0, iw / 4), site_z(rng));
    let site_b = GridPos::new(rng.range(iw - iw / 4, iw), site_z(rng));

    ZoneAnchors {
        spawn_a,
        spawn_b,
        site_a,
        site_b,
    }
}

/// Plan and stamp all zones and corridors into `grid`
pub fn mark_zones(
    grid: &mut Grid,
    registry: &mut ZoneRegistry,
    config: &GeneratorConfig,
    rng: &mut MapRng,
) -> ZoneLayout {
    let anchors = plan_anchors(config, rng);
    let spawns = [anchors.spawn_a, anchors.spawn_b];

    let spawn_rects = [
        spawn_rect(anchors.spawn_a, config, rng),
        spawn_rect(anchors.spawn_b, config, rng),
    ];
    for rect in &spawn_rects {
        clear_zone(grid, registry, rect, BlockType::Spawn);
    }

    let site_rects = [
        ZoneRect::new(anchors.site_a.x, anchors.site_a.z, config.site_width, config.site_height),
        ZoneRect::new(anchors.site_b.x, anchors.site_b.z, config.site_width, config.site_height),
    ];
    for rect in &site_rects {
        clear_zone(grid, registry, rect, BlockType::Site);
    }
    debug!("zones cleared: spawns {:?}, sites {:?}", spawn_rects, site_rects);

    let mut roads = Vec::with_capacity(8);

    // Links start near a spawn and meet the facing edge of a site
    let link_style = PathStyle::link(config);
    for (spawn, site) in [(0, 1), (1, 0), (0, 0), (1, 1)] {
        let start = random_point_near(spawns[spawn], config.spawn_link_offset, rng);
        let end = random_edge_point(&site_rects[site], start, rng);
        let stats = carve_path(grid, registry, start, end, &link_style, rng);
        roads.push(PlannedRoad {
            road_type: RoadType::Link,
            spawn,
            site,
            start,
            end,
            stats,
        });
    }

    // Mains run straight from the spawn anchor
    let main_style = PathStyle::main(config);
    for (spawn, site) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
        let start = spawns[spawn];
        let end = random_edge_point(&site_rects[site], start, rng);
        let stats = carve_path(grid, registry, start, end, &main_style, rng);
        roads.push(PlannedRoad {
            road_type: RoadType::Main,
            spawn,
            site,
            start,
            end,
            stats,
        });
    }
    debug!(
        "corridors carved: {} link cells, {} main cells registered",
        registry.len(BlockType::Link),
        registry.len(BlockType::Main)
    );

    let room = config.room.enabled.then(|| {
        let mid = anchors.centroid();
        let half = config.room.size / 2;
        let rect = ZoneRect::new(mid.x - half, mid.z - half, config.room.size, config.room.size);
        clear_zone(grid, registry, &rect, BlockType::Room);
        rect
    });

    ZoneLayout {
        anchors,
        spawn_rects,
        site_rects,
        roads,
        room,
    }
}
