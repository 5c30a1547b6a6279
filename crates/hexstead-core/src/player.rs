//! Player state, resource hands and building costs.

use crate::board::{Board, ConstructionId, HarbourId, PlayerId, Resource, RoadId, TileId};
use crate::cards::DevelopmentCard;
use crate::topology::mirror_slot;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A hand of resource cards, one counter per resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceHand {
    counts: [u32; 5],
}

impl ResourceHand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from `(resource, amount)` pairs.
    pub fn of(amounts: &[(Resource, u32)]) -> Self {
        let mut hand = Self::new();
        for &(resource, amount) in amounts {
            hand.add(resource, amount);
        }
        hand
    }

    fn idx(resource: Resource) -> usize {
        match resource {
            Resource::Brick => 0,
            Resource::Lumber => 1,
            Resource::Ore => 2,
            Resource::Grain => 3,
            Resource::Wool => 4,
        }
    }

    pub fn count(&self, resource: Resource) -> u32 {
        self.counts[Self::idx(resource)]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn add(&mut self, resource: Resource, amount: u32) {
        self.counts[Self::idx(resource)] += amount;
    }

    /// Whether this hand covers `cost`.
    pub fn can_afford(&self, cost: &ResourceHand) -> bool {
        self.counts
            .iter()
            .zip(cost.counts.iter())
            .all(|(have, need)| have >= need)
    }

    /// Remove `cost` from the hand. Returns false and leaves the hand
    /// untouched if it cannot be covered.
    pub fn subtract(&mut self, cost: &ResourceHand) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        for (have, need) in self.counts.iter_mut().zip(cost.counts.iter()) {
            *have -= need;
        }
        true
    }

    /// Remove every card of one resource, returning how many were taken.
    pub fn drain(&mut self, resource: Resource) -> u32 {
        std::mem::take(&mut self.counts[Self::idx(resource)])
    }

    /// Remove one uniformly random card, `None` if the hand is empty.
    pub fn steal_random<R: Rng>(&mut self, rng: &mut R) -> Option<Resource> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let mut pick = rng.gen_range(0..total);
        for (i, count) in self.counts.iter_mut().enumerate() {
            if pick < *count {
                *count -= 1;
                return Some(Resource::ALL[i]);
            }
            pick -= *count;
        }
        unreachable!("pick is bounded by the hand total")
    }
}

/// Building costs.
pub mod costs {
    use super::ResourceHand;
    use crate::board::Resource;

    /// Road: 1 brick, 1 lumber
    pub fn road() -> ResourceHand {
        ResourceHand::of(&[(Resource::Brick, 1), (Resource::Lumber, 1)])
    }

    /// Settlement: 1 brick, 1 lumber, 1 wool, 1 grain
    pub fn settlement() -> ResourceHand {
        ResourceHand::of(&[
            (Resource::Brick, 1),
            (Resource::Lumber, 1),
            (Resource::Wool, 1),
            (Resource::Grain, 1),
        ])
    }

    /// City upgrade: 3 ore, 2 grain
    pub fn city() -> ResourceHand {
        ResourceHand::of(&[(Resource::Ore, 3), (Resource::Grain, 2)])
    }

    /// Development card: 1 ore, 1 wool, 1 grain
    pub fn development_card() -> ResourceHand {
        ResourceHand::of(&[
            (Resource::Ore, 1),
            (Resource::Wool, 1),
            (Resource::Grain, 1),
        ])
    }
}

/// A single player's state. Board presence (tiles, roads, constructions,
/// harbours) is derived from the board arenas, never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub resources: ResourceHand,
    pub dev_cards: Vec<DevelopmentCard>,
    pub victory_points: u32,
    /// Knights played so far (for largest-army scoring by a caller)
    pub played_knights: u32,
}

impl Player {
    pub fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            resources: ResourceHand::new(),
            dev_cards: Vec::new(),
            victory_points: 0,
            played_knights: 0,
        }
    }
}

// Derived per-player views, recomputed from the arenas on every call.
impl Board {
    /// Roads owned by this player
    pub fn player_roads(&self, player: PlayerId) -> Vec<RoadId> {
        (0..self.roads().len())
            .filter(|id| self.road(*id).owner == player)
            .collect()
    }

    /// Settlements and cities owned by this player
    pub fn player_constructions(&self, player: PlayerId) -> Vec<ConstructionId> {
        (0..self.constructions().len())
            .filter(|id| self.construction(*id).owner == player)
            .collect()
    }

    /// Tiles the player has settled, not just put roads on
    pub fn controlled_tiles(&self, player: PlayerId) -> Vec<TileId> {
        let mut tiles = Vec::new();
        for id in self.player_constructions(player) {
            for &tile in &self.construction(id).tiles {
                if !tiles.contains(&tile) {
                    tiles.push(tile);
                }
            }
        }
        tiles
    }

    /// Every tile the player touches with a road or construction
    pub fn occupied_tiles(&self, player: PlayerId) -> Vec<TileId> {
        let mut tiles = self.controlled_tiles(player);
        for id in self.player_roads(player) {
            let road = self.road(id);
            if !tiles.contains(&road.tile) {
                tiles.push(road.tile);
            }
            if let Some(opposite) = self.tile(road.tile).neighbours[road.slot] {
                if !tiles.contains(&opposite) {
                    tiles.push(opposite);
                }
            }
        }
        tiles
    }

    /// Harbours reachable through the player's constructions: a harbour
    /// counts when it is moored at a vertex the player has settled.
    pub fn player_harbours(&self, player: PlayerId) -> Vec<HarbourId> {
        let mut harbours = Vec::new();
        for tile in self.controlled_tiles(player) {
            let tile = self.tile(tile);
            for slot in 0..6 {
                let (harbour, construction) =
                    match (tile.harbour_slots[slot], tile.construction_slots[slot]) {
                        (Some(h), Some(c)) => (h, c),
                        _ => continue,
                    };
                if self.construction(construction).owner == player && !harbours.contains(&harbour)
                {
                    harbours.push(harbour);
                }
            }
        }
        harbours
    }

    /// Roads the player owns that sit on this tile (either frame)
    pub fn player_roads_on_tile(&self, player: PlayerId, tile: TileId) -> Vec<RoadId> {
        self.player_roads(player)
            .into_iter()
            .filter(|id| {
                let road = self.road(*id);
                road.tile == tile
                    || self.tile(road.tile).neighbours[road.slot]
                        .map(|opposite| {
                            opposite == tile
                                && self.tile(tile).road_slots[mirror_slot(road.slot)] == Some(*id)
                        })
                        .unwrap_or(false)
            })
            .collect()
    }
}
