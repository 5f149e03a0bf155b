//! Zone query surface for bot and team logic
//!
//! Zones are the named areas a generation pass produces: two spawns, two
//! sites, eight roads (a main and a link from each spawn to each site) and
//! an optional neutral room. Callers must re-fetch zones after every
//! regeneration; ids are only meaningful within one pass.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::config::GeneratorConfig;
use crate::rng::MapRng;

use super::layout::ZoneLayout;
use super::ZoneRect;

/// Index of a zone within its `ZoneSet`
pub type ZoneId = usize;

/// Tactical roles that weigh zones differently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum BotRole {
    Attacker,
    Defender,
    Flanker,
    Scout,
}

/// Per-role preference for a zone
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RoleWeights {
    pub attacker: f32,
    pub defender: f32,
    pub flanker: f32,
    pub scout: f32,
}

impl RoleWeights {
    pub const fn new(attacker: f32, defender: f32, flanker: f32, scout: f32) -> Self {
        Self {
            attacker,
            defender,
            flanker,
            scout,
        }
    }

    pub fn get(&self, role: BotRole) -> f32 {
        match role {
            BotRole::Attacker => self.attacker,
            BotRole::Defender => self.defender,
            BotRole::Flanker => self.flanker,
            BotRole::Scout => self.scout,
        }
    }

    /// `(role name, weight)` pairs
    pub fn entries(&self) -> [(&'static str, f32); 4] {
        [
            ("attacker", self.attacker),
            ("defender", self.defender),
            ("flanker", self.flanker),
            ("scout", self.scout),
        ]
    }
}

/// Road flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum RoadType {
    /// Wide, direct corridor
    Main,
    /// Narrow flanking corridor
    Link,
}

/// Which site a road leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadLink {
    pub road_type: RoadType,
    pub to_site: ZoneId,
}

/// Zone kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum ZoneKind {
    Spawn,
    Site,
    Road,
    Neutral,
}

/// A generated zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub kind: ZoneKind,
    /// Bounding rectangle in grid cells, clipped to the grid
    pub bounds: ZoneRect,
    pub weights: RoleWeights,
    /// Set for road zones only
    pub road: Option<RoadLink>,
}

impl Zone {
    pub fn weight(&self, role: BotRole) -> f32 {
        self.weights.get(role)
    }

    /// Uniform world-space point over the zone's bounding area at height `y`
    ///
    /// Blocks are centred on `cell * block_size`, so the area spans half a
    /// block beyond the outer cell centres.
    pub fn random_point(&self, rng: &mut MapRng, block_size: f32, y: f32) -> [f32; 3] {
        let min_x = (self.bounds.x as f32 - 0.5) * block_size;
        let max_x = (self.bounds.max_x() as f32 + 0.5) * block_size;
        let min_z = (self.bounds.z as f32 - 0.5) * block_size;
        let max_z = (self.bounds.max_z() as f32 + 0.5) * block_size;
        [rng.range_f32(min_x, max_x), y, rng.range_f32(min_z, max_z)]
    }

    /// Check if this is a road of `road_type` leading to `site`
    pub fn is_road_to(&self, site: ZoneId, road_type: RoadType) -> bool {
        self.road
            .is_some_and(|r| r.to_site == site && r.road_type == road_type)
    }
}

/// All zones of one generation pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneSet {
    zones: Vec<Zone>,
}

impl ZoneSet {
    /// Build the zone list from a planned layout
    ///
    /// Order: spawns, sites, roads (in carving order), then the room.
    pub fn from_layout(layout: &ZoneLayout, config: &GeneratorConfig) -> Self {
        let weights = &config.zone_weights;
        let mut set = ZoneSet::default();
        let clip = |rect: ZoneRect| rect.clip(config.width, config.height);

        for rect in layout.spawn_rects {
            if let Some(bounds) = clip(rect) {
                set.push(ZoneKind::Spawn, bounds, weights.spawn, None);
            }
        }

        let mut site_ids = [None; 2];
        for (i, rect) in layout.site_rects.into_iter().enumerate() {
            if let Some(bounds) = clip(rect) {
                site_ids[i] = Some(set.push(ZoneKind::Site, bounds, weights.site, None));
            }
        }

        for road in &layout.roads {
            let Some(to_site) = site_ids[road.site] else {
                continue;
            };
            let width = match road.road_type {
                RoadType::Main => config.main_width,
                RoadType::Link => config.link_width,
            };
            let Some(bounds) = clip(ZoneRect::spanning(road.start, road.end, width)) else {
                continue;
            };
            let role_weights = match road.road_type {
                RoadType::Main => weights.main_road,
                RoadType::Link => weights.link_road,
            };
            let link = RoadLink {
                road_type: road.road_type,
                to_site,
            };
            set.push(ZoneKind::Road, bounds, role_weights, Some(link));
        }

        if let Some(bounds) = layout.room.and_then(clip) {
            set.push(ZoneKind::Neutral, bounds, weights.neutral, None);
        }

        set
    }

    fn push(
        &mut self,
        kind: ZoneKind,
        bounds: ZoneRect,
        weights: RoleWeights,
        road: Option<RoadLink>,
    ) -> ZoneId {
        let id = self.zones.len();
        self.zones.push(Zone {
            id,
            kind,
            bounds,
            weights,
            road,
        });
        id
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn get(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(id)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Zones of one kind, in id order
    pub fn of_kind(&self, kind: ZoneKind) -> Vec<&Zone> {
        self.zones.iter().filter(|z| z.kind == kind).collect()
    }

    pub fn site_zones(&self) -> Vec<&Zone> {
        self.of_kind(ZoneKind::Site)
    }

    pub fn spawn_zones(&self) -> Vec<&Zone> {
        self.of_kind(ZoneKind::Spawn)
    }

    pub fn road_zones(&self) -> Vec<&Zone> {
        self.of_kind(ZoneKind::Road)
    }

    pub fn neutral_zones(&self) -> Vec<&Zone> {
        self.of_kind(ZoneKind::Neutral)
    }

    /// First road of `road_type` leading to `site`
    pub fn road_to(&self, site: ZoneId, road_type: RoadType) -> Option<&Zone> {
        self.zones.iter().find(|z| z.is_road_to(site, road_type))
    }
}
