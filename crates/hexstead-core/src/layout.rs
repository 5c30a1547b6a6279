//! Injected board layouts.
//!
//! A [`BoardConfig`] is the declarative description a [`crate::Board`] is
//! built from: a row-staggered matrix of tile specs plus the harbour
//! instances they reference. Configs are plain serde data, so custom layouts
//! can be loaded from JSON.

use crate::board::{Harbour, HarbourId, Resource, Terrain, TileId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors detected while turning a config into a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("no tile carries the robber")]
    NoRobberTile,
    #[error("more than one tile carries the robber")]
    MultipleRobberTiles,
    #[error("tile {tile} references harbour {harbour} which does not exist")]
    HarbourIndexOutOfRange { harbour: HarbourId, tile: TileId },
    #[error("tile {tile} moors a harbour at invalid slot {slot}")]
    HarbourSlotOutOfRange { slot: usize, tile: TileId },
    #[error("layout is not valid JSON: {0}")]
    Json(String),
}

/// One tile of a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileConfig {
    pub terrain: Terrain,
    /// Dice number (0 for the desert)
    pub number: u8,
    /// `(harbour index, slot)` moorings for this tile
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub harbours: Vec<(HarbourId, usize)>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub has_robber: bool,
}

impl TileConfig {
    pub fn new(terrain: Terrain, number: u8) -> Self {
        Self {
            terrain,
            number,
            harbours: Vec::new(),
            has_robber: false,
        }
    }

    pub fn with_harbours(mut self, harbours: &[(HarbourId, usize)]) -> Self {
        self.harbours = harbours.to_vec();
        self
    }

    pub fn with_robber(mut self) -> Self {
        self.has_robber = true;
        self
    }
}

/// A complete board layout: tile rows plus the harbours they share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub harbours: Vec<Harbour>,
    pub rows: Vec<Vec<TileConfig>>,
}

impl BoardConfig {
    /// Parse a layout from JSON.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        serde_json::from_str(json).map_err(|e| LayoutError::Json(e.to_string()))
    }

    /// The standard 19-tile layout: rows of 3-4-5-4-3 with the desert (and
    /// the robber) in the centre and nine harbours around the shore, several
    /// of them moored to two tiles.
    pub fn standard() -> Self {
        let tile = TileConfig::new;
        Self {
            harbours: vec![
                Harbour::general(),
                Harbour::specific(Resource::Grain),
                Harbour::specific(Resource::Ore),
                Harbour::specific(Resource::Lumber),
                Harbour::specific(Resource::Brick),
                Harbour::general(),
                Harbour::specific(Resource::Wool),
                Harbour::general(),
                Harbour::general(),
            ],
            rows: vec![
                vec![
                    tile(Terrain::Mountains, 10).with_harbours(&[(0, 0), (0, 5)]),
                    tile(Terrain::Pasture, 2).with_harbours(&[(1, 0), (1, 1)]),
                    tile(Terrain::Forest, 9).with_harbours(&[(2, 2), (1, 5)]),
                ],
                vec![
                    tile(Terrain::Fields, 12).with_harbours(&[(3, 4), (3, 5)]),
                    tile(Terrain::Hills, 6),
                    tile(Terrain::Pasture, 4),
                    tile(Terrain::Hills, 10).with_harbours(&[(2, 0), (2, 1)]),
                ],
                vec![
                    tile(Terrain::Fields, 9).with_harbours(&[(3, 0), (4, 3)]),
                    tile(Terrain::Forest, 11),
                    tile(Terrain::Desert, 0).with_robber(),
                    tile(Terrain::Forest, 3),
                    tile(Terrain::Mountains, 8).with_harbours(&[(5, 1), (5, 2)]),
                ],
                vec![
                    tile(Terrain::Forest, 8).with_harbours(&[(3, 4), (3, 5)]),
                    tile(Terrain::Mountains, 3),
                    tile(Terrain::Fields, 4),
                    tile(Terrain::Pasture, 5).with_harbours(&[(6, 2), (6, 3)]),
                ],
                vec![
                    tile(Terrain::Hills, 5).with_harbours(&[(7, 3), (7, 4)]),
                    tile(Terrain::Fields, 6).with_harbours(&[(8, 2), (8, 3)]),
                    tile(Terrain::Pasture, 11).with_harbours(&[(6, 1), (8, 4)]),
                ],
            ],
        }
    }
}
