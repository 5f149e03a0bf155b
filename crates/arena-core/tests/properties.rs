use arena_core::map::{
    carve_path, local_density, random_edge_point, walk_cap, BlockType, Grid, GridPos, PathStyle,
    ZoneRect, ZoneRegistry,
};
use arena_core::{generate_map, GeneratorConfig, MapRng};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn block_type() -> impl Strategy<Value = BlockType> {
    let all: Vec<BlockType> = BlockType::iter().collect();
    prop::sample::select(all)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_border_is_wall(seed in any::<u64>(), width in 14i32..40, height in 14i32..40) {
        let config = GeneratorConfig { width, height, ..Default::default() };
        let map = generate_map(&config, &mut MapRng::new(seed)).unwrap();
        for x in 0..width {
            for z in 0..height {
                if map.grid.is_border(x, z) {
                    prop_assert_eq!(map.grid.block_type(x, z), Some(BlockType::Wall));
                }
            }
        }
    }

    #[test]
    fn prop_protected_cells_survive_carving(seed in any::<u64>()) {
        let config = GeneratorConfig::default();
        let map = generate_map(&config, &mut MapRng::new(seed)).unwrap();
        let room = map.layout.room;
        for typ in [BlockType::Spawn, BlockType::Site] {
            for &pos in map.registry.blocks(typ) {
                if map.grid.is_border(pos.x, pos.z) || room.is_some_and(|r| r.contains(pos)) {
                    continue;
                }
                let final_type = map.grid.block_type(pos.x, pos.z);
                prop_assert!(
                    matches!(final_type, Some(BlockType::Spawn | BlockType::Site)),
                    "{:?} ended as {:?}", pos, final_type
                );
            }
        }
    }

    #[test]
    fn prop_walk_terminates(
        seed in any::<u64>(),
        sx in 0i32..30, sz in 0i32..30,
        ex in 0i32..30, ez in 0i32..30,
        width in 0i32..3,
        x_bias in 0.0f32..=1.0,
    ) {
        let mut grid = Grid::new(30, 30);
        let mut registry = ZoneRegistry::new(true);
        let style = PathStyle { block_type: BlockType::Link, width, x_bias, track_weight: false };
        let start = GridPos::new(sx, sz);
        let end = GridPos::new(ex, ez);

        let mut rng = MapRng::new(seed);
        let stats = carve_path(&mut grid, &mut registry, start, end, &style, &mut rng);

        prop_assert!(stats.iterations <= walk_cap(start, end) + start.manhattan(end));
        prop_assert_eq!(stats.iterations - stats.wasted_steps, start.manhattan(end));
    }

    #[test]
    fn prop_edge_point_on_boundary(
        seed in any::<u64>(),
        x in -10i32..30, z in -10i32..30,
        w in 1i32..8, h in 1i32..8,
        rx in -20i32..40, rz in -20i32..40,
    ) {
        let rect = ZoneRect::new(x, z, w, h);
        let mut rng = MapRng::new(seed);
        let p = random_edge_point(&rect, GridPos::new(rx, rz), &mut rng);
        prop_assert!(rect.on_boundary(p), "{:?} not on {:?}", p, rect);
    }

    #[test]
    fn prop_density_in_unit_range(
        cells in prop::collection::vec(block_type(), 64),
        qx in -2i32..10, qz in -2i32..10,
        zone in block_type(),
    ) {
        let mut grid = Grid::new(8, 8);
        for (i, &t) in cells.iter().enumerate() {
            grid.set_type(i as i32 / 8, i as i32 % 8, t);
        }
        let d = local_density(&grid, GridPos::new(qx, qz), zone);
        prop_assert!((0.0..=1.0).contains(&d));
    }
}
