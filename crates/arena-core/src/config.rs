//! Generator configuration
//!
//! Every generation tunable lives here. Configurations are plain data,
//! loadable from JSON, and checked by [`GeneratorConfig::validate`] before
//! a generation pass touches the grid.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, MapResult};
use crate::map::{BlockType, RoleWeights};

/// Cover probability bounds for one zone type
///
/// `max` applies to a block with no same-type neighbours (density 0),
/// `min` to a block fully surrounded by its own zone (density 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverProbability {
    pub min: f32,
    pub max: f32,
}

impl CoverProbability {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Linear interpolation from `max` at density 0 to `min` at density 1
    pub fn at_density(&self, density: f32) -> f32 {
        let t = density.clamp(0.0, 1.0);
        self.max + (self.min - self.max) * t
    }

    fn validate(&self, zone: &'static str) -> Result<(), ConfigError> {
        let in_unit = |p: f32| p.is_finite() && (0.0..=1.0).contains(&p);
        if !in_unit(self.min) || !in_unit(self.max) || self.min > self.max {
            return Err(ConfigError::InvalidCoverProbability {
                zone,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Cover placement tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverConfig {
    /// Global multiplier applied after interpolation
    pub multiplier: f32,
    pub spawn: CoverProbability,
    pub site: CoverProbability,
    pub main: CoverProbability,
    pub link: CoverProbability,
    pub room: CoverProbability,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            multiplier: 1.0,
            spawn: CoverProbability::new(0.3, 0.6),
            site: CoverProbability::new(0.2, 0.5),
            main: CoverProbability::new(0.1, 0.8),
            link: CoverProbability::new(0.1, 0.8),
            room: CoverProbability::new(0.5, 0.7),
        }
    }
}

impl CoverConfig {
    /// Probability bounds for a cover zone type, `None` for other types
    pub fn for_zone(&self, zone: BlockType) -> Option<CoverProbability> {
        match zone {
            BlockType::Spawn => Some(self.spawn),
            BlockType::Site => Some(self.site),
            BlockType::Main => Some(self.main),
            BlockType::Link => Some(self.link),
            BlockType::Room => Some(self.room),
            _ => None,
        }
    }
}

/// Central room settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    pub enabled: bool,
    /// Edge length of the square room
    pub size: i32,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            size: DEFAULT_ROOM_SIZE,
        }
    }
}

/// Role weights handed to each generated zone, by zone kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneWeightConfig {
    pub spawn: RoleWeights,
    pub site: RoleWeights,
    pub main_road: RoleWeights,
    pub link_road: RoleWeights,
    pub neutral: RoleWeights,
}

impl Default for ZoneWeightConfig {
    fn default() -> Self {
        Self {
            spawn: RoleWeights::new(0.2, 0.2, 0.1, 0.1),
            site: RoleWeights::new(1.0, 1.0, 0.5, 0.3),
            main_road: RoleWeights::new(0.8, 0.4, 0.2, 0.5),
            link_road: RoleWeights::new(0.3, 0.3, 1.0, 0.6),
            neutral: RoleWeights::new(0.2, 0.3, 0.4, 1.0),
        }
    }
}

impl ZoneWeightConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let kinds = [
            ("spawn", &self.spawn),
            ("site", &self.site),
            ("main road", &self.main_road),
            ("link road", &self.link_road),
            ("neutral", &self.neutral),
        ];
        for (kind, weights) in kinds {
            for (role, value) in weights.entries() {
                if !value.is_finite() || value < 0.0 {
                    return Err(ConfigError::InvalidZoneWeight { kind, role, value });
                }
            }
        }
        Ok(())
    }
}

/// All tunables for one generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Blocks along X
    pub width: i32,
    /// Blocks along Z
    pub height: i32,
    /// World units per block
    pub block_size: f32,
    /// Stamp radius of main corridors
    pub main_width: i32,
    /// Stamp radius of link corridors
    pub link_width: i32,
    pub spawn_size_min: i32,
    pub spawn_size_max: i32,
    pub site_width: i32,
    pub site_height: i32,
    /// Jitter around a spawn anchor where link corridors start
    pub spawn_link_offset: i32,
    /// Probability that a main walk steps along X
    pub main_x_bias: f32,
    /// Probability that a link walk steps along X
    pub link_x_bias: f32,
    pub room: RoomConfig,
    /// Restrict cover on main/link blocks to edges and junctions
    pub edge_gating: bool,
    /// Wall copies over untouched interior floor (1 or 2)
    pub interior_wall_levels: u8,
    /// Keep one registry entry per cell and zone type
    pub dedup_registry: bool,
    pub cover: CoverConfig,
    pub zone_weights: ZoneWeightConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            block_size: DEFAULT_BLOCK_SIZE,
            main_width: DEFAULT_MAIN_WIDTH,
            link_width: DEFAULT_LINK_WIDTH,
            spawn_size_min: DEFAULT_SPAWN_SIZE_MIN,
            spawn_size_max: DEFAULT_SPAWN_SIZE_MAX,
            site_width: DEFAULT_SITE_WIDTH,
            site_height: DEFAULT_SITE_HEIGHT,
            spawn_link_offset: DEFAULT_SPAWN_LINK_OFFSET,
            main_x_bias: DEFAULT_MAIN_X_BIAS,
            link_x_bias: DEFAULT_LINK_X_BIAS,
            room: RoomConfig::default(),
            edge_gating: true,
            interior_wall_levels: DEFAULT_INTERIOR_WALL_LEVELS,
            dedup_registry: true,
            cover: CoverConfig::default(),
            zone_weights: ZoneWeightConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Width of the region anchors are drawn from
    pub fn interior_width(&self) -> i32 {
        self.width - INTERIOR_MARGIN
    }

    /// Height of the region anchors are drawn from
    pub fn interior_height(&self) -> i32 {
        self.height - INTERIOR_MARGIN
    }

    /// Check every tunable, returning the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_GRID_SIZE || self.height < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                width: self.width,
                height: self.height,
                min: MIN_GRID_SIZE,
            });
        }

        if !self.block_size.is_finite() || self.block_size <= 0.0 {
            return Err(ConfigError::InvalidBlockSize(self.block_size));
        }

        for (name, value) in [("main", self.main_width), ("link", self.link_width)] {
            if value < 0 {
                return Err(ConfigError::NegativeCorridorWidth { name, value });
            }
        }

        if self.spawn_size_min < 2 {
            return Err(ConfigError::InvalidSpawnRange {
                min: self.spawn_size_min,
                max: self.spawn_size_max,
                reason: "minimum must be at least 2",
            });
        }
        if self.spawn_size_min > self.spawn_size_max {
            return Err(ConfigError::InvalidSpawnRange {
                min: self.spawn_size_min,
                max: self.spawn_size_max,
                reason: "minimum exceeds maximum",
            });
        }
        let interior = self.interior_width().min(self.interior_height());
        if self.spawn_size_max > interior {
            return Err(ConfigError::SpawnExceedsInterior {
                size: self.spawn_size_max,
                interior,
            });
        }

        if self.site_width < 1 || self.site_height < 1 {
            return Err(ConfigError::InvalidSiteSize {
                width: self.site_width,
                height: self.site_height,
            });
        }
        if self.site_width > self.interior_width() || self.site_height > self.interior_height() {
            return Err(ConfigError::SiteExceedsInterior {
                width: self.site_width,
                height: self.site_height,
                interior_width: self.interior_width(),
                interior_height: self.interior_height(),
            });
        }

        if self.spawn_link_offset < 0 {
            return Err(ConfigError::NegativeLinkOffset(self.spawn_link_offset));
        }

        for (name, value) in [("main", self.main_x_bias), ("link", self.link_x_bias)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidBias { name, value });
            }
        }

        if self.room.enabled && self.room.size < 1 {
            return Err(ConfigError::InvalidRoomSize(self.room.size));
        }

        if !(1..=2).contains(&self.interior_wall_levels) {
            return Err(ConfigError::InvalidWallLevels(self.interior_wall_levels));
        }

        let cover = &self.cover;
        if !cover.multiplier.is_finite() || cover.multiplier < 0.0 {
            return Err(ConfigError::InvalidCoverMultiplier(cover.multiplier));
        }
        cover.spawn.validate("spawn")?;
        cover.site.validate("site")?;
        cover.main.validate("main")?;
        cover.link.validate("link")?;
        cover.room.validate("room")?;

        self.zone_weights.validate()
    }

    /// Load and validate a JSON configuration file
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> MapResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a JSON configuration string
    pub fn from_json_str(text: &str) -> MapResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Pretty-printed JSON, suitable for `from_json_str`
    pub fn to_json_string(&self) -> MapResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MapError;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(GeneratorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_grid_too_small() {
        let config = GeneratorConfig {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridTooSmall { width: 0, .. })
        ));

        let config = GeneratorConfig {
            height: -5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridTooSmall { height: -5, .. })
        ));
    }

    #[test]
    fn test_spawn_exceeds_interior() {
        let config = GeneratorConfig {
            spawn_size_min: 12,
            spawn_size_max: 17,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SpawnExceedsInterior {
                size: 17,
                interior: 16
            })
        );
    }

    #[test]
    fn test_inverted_spawn_range() {
        let config = GeneratorConfig {
            spawn_size_min: 9,
            spawn_size_max: 8,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpawnRange { .. })
        ));
    }

    #[test]
    fn test_site_exceeds_interior() {
        let config = GeneratorConfig {
            site_width: 30,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SiteExceedsInterior { width: 30, .. })
        ));
    }

    #[test]
    fn test_bad_block_size() {
        for block_size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = GeneratorConfig {
                block_size,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidBlockSize(_))
            ));
        }
    }

    #[test]
    fn test_bad_bias() {
        let config = GeneratorConfig {
            link_x_bias: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBias { name: "link", .. })
        ));
    }

    #[test]
    fn test_bad_cover_probability() {
        let mut config = GeneratorConfig::default();
        config.cover.site = CoverProbability::new(0.9, 0.1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCoverProbability { zone: "site", .. })
        ));
    }

    #[test]
    fn test_wall_levels() {
        let config = GeneratorConfig {
            interior_wall_levels: 3,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidWallLevels(3)));
    }

    #[test]
    fn test_disabled_room_skips_size_check() {
        let config = GeneratorConfig {
            room: RoomConfig {
                enabled: false,
                size: 0,
            },
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_at_density() {
        let p = CoverProbability::new(0.2, 0.6);
        assert!((p.at_density(0.0) - 0.6).abs() < 1e-6);
        assert!((p.at_density(1.0) - 0.2).abs() < 1e-6);
        assert!((p.at_density(0.5) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_json_partial_uses_defaults() {
        let config = GeneratorConfig::from_json_str(r#"{ "width": 32, "height": 24 }"#).unwrap();
        assert_eq!(config.width, 32);
        assert_eq!(config.height, 24);
        assert_eq!(config.site_width, DEFAULT_SITE_WIDTH);
        assert_eq!(config.cover, CoverConfig::default());
    }

    #[test]
    fn test_json_round_trip() {
        let config = GeneratorConfig {
            edge_gating: false,
            ..Default::default()
        };
        let json = config.to_json_string().unwrap();
        assert_eq!(GeneratorConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_json_invalid_config_rejected() {
        let err = GeneratorConfig::from_json_str(r#"{ "width": 3 }"#).unwrap_err();
        assert!(matches!(err, MapError::Config(ConfigError::GridTooSmall { .. })));
    }
}
