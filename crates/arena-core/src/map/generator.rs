//! Full generation pipeline
//!
//! A pass builds a fresh grid, plans and stamps the zones, walls the
//! border, instantiates ground blocks and wall copies, scatters cover and
//! finally derives the zone query surface. Nothing from an earlier pass
//! is reused.

use hashbrown::{HashMap, HashSet};
use log::{debug, info};
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::config::GeneratorConfig;
use crate::consts::S_COVER;
use crate::error::ConfigError;
use crate::rng::MapRng;

use super::border::{duplicate_wall_blocks, fill_border_walls};
use super::cover::place_covers;
use super::layout::{mark_zones, ZoneAnchors, ZoneLayout};
use super::{BlockType, Grid, GridPos, MapObject, ObjectKind, ZoneRegistry, ZoneSet};

/// Everything one generation pass produced
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedMap {
    pub config: GeneratorConfig,
    /// Seed of the generator that produced this pass
    pub seed: u64,
    /// Pass number within its `MapGenerator`, 0 for a standalone pass
    pub generation: u64,
    pub grid: Grid,
    pub registry: ZoneRegistry,
    pub layout: ZoneLayout,
    pub zones: ZoneSet,
    pub objects: Vec<MapObject>,
}

/// Compact description of a pass
#[derive(Debug, Clone, Serialize)]
pub struct MapSummary {
    pub seed: u64,
    pub generation: u64,
    pub width: i32,
    pub height: i32,
    pub blocks: HashMap<BlockType, usize>,
    /// Whether registry counts below are deduplicated
    pub dedup_registry: bool,
    pub registry: HashMap<BlockType, usize>,
    pub objects: HashMap<ObjectKind, usize>,
    pub anchors: ZoneAnchors,
    pub zones: ZoneSet,
    pub rows: Vec<String>,
}

impl GeneratedMap {
    pub fn anchors(&self) -> &ZoneAnchors {
        &self.layout.anchors
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn count_objects(&self, kind: ObjectKind) -> usize {
        self.objects.iter().filter(|o| o.kind == kind).count()
    }

    /// Cover objects, in placement order
    pub fn covers(&self) -> impl Iterator<Item = &MapObject> {
        self.objects.iter().filter(|o| o.kind == ObjectKind::Cover)
    }

    /// One line per grid row (`z`), one character per cell
    ///
    /// With `show_covers`, cells carrying at least one cover print as `*`.
    pub fn render_rows(&self, show_covers: bool) -> Vec<String> {
        let covered: HashSet<GridPos> = if show_covers {
            self.covers().map(|o| o.cell).collect()
        } else {
            Default::default()
        };

        (0..self.grid.height())
            .map(|z| {
                (0..self.grid.width())
                    .map(|x| {
                        if covered.contains(&GridPos::new(x, z)) {
                            return S_COVER;
                        }
                        self.grid
                            .block_type(x, z)
                            .map_or(BlockType::None.symbol(), |t| t.symbol())
                    })
                    .collect()
            })
            .collect()
    }

    /// The grid as text, rows separated by newlines
    pub fn render_ascii(&self, show_covers: bool) -> String {
        self.render_rows(show_covers).join("\n")
    }

    pub fn summary(&self) -> MapSummary {
        let blocks = BlockType::iter()
            .map(|t| (t, self.grid.count(t)))
            .filter(|&(_, n)| n > 0)
            .collect();
        let registry = BlockType::COVER_ZONES
            .iter()
            .map(|&t| (t, self.registry.len(t)))
            .collect();
        let objects = ObjectKind::iter()
            .map(|k| (k, self.count_objects(k)))
            .collect();
        MapSummary {
            seed: self.seed,
            generation: self.generation,
            width: self.grid.width(),
            height: self.grid.height(),
            blocks,
            dedup_registry: self.registry.dedup(),
            registry,
            objects,
            anchors: self.layout.anchors,
            zones: self.zones.clone(),
            rows: self.render_rows(true),
        }
    }
}

/// Run one complete generation pass
///
/// The configuration is validated first; an invalid configuration yields
/// no grid at all.
pub fn generate_map(
    config: &GeneratorConfig,
    rng: &mut MapRng,
) -> Result<GeneratedMap, ConfigError> {
    config.validate()?;

    let mut grid = Grid::new(config.width, config.height);
    let mut registry = ZoneRegistry::new(config.dedup_registry);

    let layout = mark_zones(&mut grid, &mut registry, config, rng);
    debug!(
        "layout: spawns {}, sites {}, room {}",
        registry.len(BlockType::Spawn),
        registry.len(BlockType::Site),
        registry.len(BlockType::Room)
    );

    fill_border_walls(&mut grid);

    let mut objects: Vec<MapObject> = grid
        .blocks()
        .map(|b| MapObject::at(ObjectKind::Block, b.block_type(), b, 0, config.block_size))
        .collect();

    let walls = duplicate_wall_blocks(&grid, config.interior_wall_levels, config.block_size);
    debug!("walls: {} copies", walls.len());
    objects.extend(walls);

    let covers = place_covers(&grid, &registry, config, rng);
    let cover_count = covers.len();
    objects.extend(covers);

    let zones = ZoneSet::from_layout(&layout, config);

    info!(
        "generated {}x{} map: {} objects, {} covers, {} zones",
        grid.width(),
        grid.height(),
        objects.len(),
        cover_count,
        zones.len()
    );

    Ok(GeneratedMap {
        config: config.clone(),
        seed: rng.seed(),
        generation: 0,
        grid,
        registry,
        layout,
        zones,
        objects,
    })
}

/// Owns the configuration, the random source and the current map
///
/// Each `regenerate` drops the previous map entirely; callers must
/// re-fetch zones and grid references afterwards.
#[derive(Debug, Clone)]
pub struct MapGenerator {
    config: GeneratorConfig,
    rng: MapRng,
    current: Option<GeneratedMap>,
    generation: u64,
}

impl MapGenerator {
    pub fn new(config: GeneratorConfig, rng: MapRng) -> Self {
        Self {
            config,
            rng,
            current: None,
            generation: 0,
        }
    }

    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Self {
        Self::new(config, MapRng::new(seed))
    }

    /// Replace the current map with a freshly generated one
    ///
    /// On error the previous map is kept.
    pub fn regenerate(&mut self) -> Result<&GeneratedMap, ConfigError> {
        let mut map = generate_map(&self.config, &mut self.rng)?;
        self.generation += 1;
        map.generation = self.generation;
        Ok(&*self.current.insert(map))
    }

    pub fn map(&self) -> Option<&GeneratedMap> {
        self.current.as_ref()
    }

    pub fn zones(&self) -> Option<&ZoneSet> {
        self.current.as_ref().map(|m| &m.zones)
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Takes effect on the next `regenerate`
    pub fn set_config(&mut self, config: GeneratorConfig) {
        self.config = config;
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Passes run so far
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
