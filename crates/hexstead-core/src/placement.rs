//! Placement rules for roads, settlements and city upgrades.
//!
//! Every placement validates its preconditions, then applies all writes for
//! the physical location before returning: a road on an interior edge is
//! mirrored into the opposite tile's frame, a settlement is written into the
//! construction slot of every tile bordering its vertex. No partially
//! mirrored state is ever observable.

use crate::board::{
    Board, Construction, ConstructionId, ConstructionKind, PlayerId, Road, RoadId, TileId,
};
use crate::player::{costs, ResourceHand};
use crate::topology::{self, mirror_slot};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Why a placement was refused. Every violated precondition has its own
/// variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("slot index {0} is out of range")]
    InvalidSlotIndex(usize),
    #[error("the target slot is already occupied")]
    SlotOccupied,
    #[error("not connected to an owned road or settlement")]
    NotConnected,
    #[error("too close to an existing settlement")]
    TooClose,
    #[error("not enough resources")]
    InsufficientResources,
    #[error("{0:?} is not a buildable construction kind")]
    InvalidConstructionKind(String),
    #[error("no tile at ({x}, {y})")]
    UnknownTile { x: usize, y: usize },
}

/// Why an upgrade was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OwnershipError {
    #[error("the construction belongs to another player")]
    NotOwner,
    #[error("only settlements can be upgraded to cities")]
    NotASettlement,
}

/// Everything a player can spend resources on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstructionItem {
    Road,
    Settlement,
    City,
    DevelopmentCard,
}

impl ConstructionItem {
    /// The resource cost of this item
    pub fn cost(&self) -> ResourceHand {
        match self {
            ConstructionItem::Road => costs::road(),
            ConstructionItem::Settlement => costs::settlement(),
            ConstructionItem::City => costs::city(),
            ConstructionItem::DevelopmentCard => costs::development_card(),
        }
    }
}

impl FromStr for ConstructionItem {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Road" => Ok(ConstructionItem::Road),
            "Settlement" => Ok(ConstructionItem::Settlement),
            "City" => Ok(ConstructionItem::City),
            "Development Card" => Ok(ConstructionItem::DevelopmentCard),
            other => Err(PlacementError::InvalidConstructionKind(other.to_string())),
        }
    }
}

impl Board {
    /// Whether the player can pay for this item.
    pub fn has_resources_for(&self, player: PlayerId, item: ConstructionItem) -> bool {
        self.player(player).resources.can_afford(&item.cost())
    }

    // ==================== Roads ====================

    /// Place a road on edge `slot` of `tile`. The edge must be free and
    /// connected to the owner's network: an owned road on an adjacent edge,
    /// an owned settlement one vertex away, or an owned construction on the
    /// edge's own near vertex (where a freshly settled player starts from).
    pub fn place_road(
        &mut self,
        owner: PlayerId,
        tile: TileId,
        slot: usize,
    ) -> Result<RoadId, PlacementError> {
        self.check_road_site(tile, slot)?;
        if !self.road_connected(owner, tile, slot) {
            return Err(PlacementError::NotConnected);
        }
        Ok(self.insert_road(owner, tile, slot))
    }

    /// Setup-phase road placement: no connectivity requirement.
    pub fn place_initial_road(
        &mut self,
        owner: PlayerId,
        tile: TileId,
        slot: usize,
    ) -> Result<RoadId, PlacementError> {
        self.check_road_site(tile, slot)?;
        Ok(self.insert_road(owner, tile, slot))
    }

    fn check_road_site(&self, tile: TileId, slot: usize) -> Result<(), PlacementError> {
        if slot >= topology::SLOT_COUNT {
            return Err(PlacementError::InvalidSlotIndex(slot));
        }
        // mirror writes keep both frames in sync, so the home frame is enough
        if self.tile(tile).road_slots[slot].is_some() {
            return Err(PlacementError::SlotOccupied);
        }
        Ok(())
    }

    fn road_connected(&self, owner: PlayerId, tile: TileId, slot: usize) -> bool {
        let own_vertex = self.tile(tile).construction_slots[slot];
        if own_vertex.is_some_and(|c| self.construction(c).owner == owner) {
            return true;
        }
        if self
            .adjacent_settlements(tile, slot)
            .iter()
            .any(|c| self.construction(*c).owner == owner)
        {
            return true;
        }
        self.adjacent_roads(tile, slot)
            .iter()
            .any(|r| self.road(*r).owner == owner)
    }

    fn insert_road(&mut self, owner: PlayerId, tile: TileId, slot: usize) -> RoadId {
        let id = self.push_road(Road { owner, tile, slot });
        self.tile_mut(tile).road_slots[slot] = Some(id);
        if let Some(opposite) = self.tile(tile).neighbours[slot] {
            self.tile_mut(opposite).road_slots[mirror_slot(slot)] = Some(id);
        }
        id
    }

    // ==================== Settlements ====================

    /// Place a settlement on vertex `slot` of `tile`. The vertex must be
    /// free, reachable from an owned road, and at least two edges away from
    /// every existing settlement. Connectivity is checked before distance so
    /// the two failures stay distinguishable.
    pub fn place_settlement(
        &mut self,
        owner: PlayerId,
        tile: TileId,
        slot: usize,
    ) -> Result<ConstructionId, PlacementError> {
        self.check_settlement_site(tile, slot)?;
        if !self
            .adjacent_roads(tile, slot)
            .iter()
            .any(|r| self.road(*r).owner == owner)
        {
            return Err(PlacementError::NotConnected);
        }
        if !self.adjacent_settlements(tile, slot).is_empty() {
            return Err(PlacementError::TooClose);
        }
        Ok(self.insert_settlement(owner, tile, slot))
    }

    /// Setup-phase settlement placement: the distance rule applies, road
    /// connectivity does not.
    pub fn place_initial_settlement(
        &mut self,
        owner: PlayerId,
        tile: TileId,
        slot: usize,
    ) -> Result<ConstructionId, PlacementError> {
        self.check_settlement_site(tile, slot)?;
        if !self.adjacent_settlements(tile, slot).is_empty() {
            return Err(PlacementError::TooClose);
        }
        Ok(self.insert_settlement(owner, tile, slot))
    }

    fn check_settlement_site(&self, tile: TileId, slot: usize) -> Result<(), PlacementError> {
        if slot >= topology::SLOT_COUNT {
            return Err(PlacementError::InvalidSlotIndex(slot));
        }
        if self.tile(tile).construction_slots[slot].is_some() {
            return Err(PlacementError::SlotOccupied);
        }
        Ok(())
    }

    fn insert_settlement(&mut self, owner: PlayerId, tile: TileId, slot: usize) -> ConstructionId {
        let resolved = self.resolve_vertex(tile, slot);
        let id = self.push_construction(Construction {
            owner,
            kind: ConstructionKind::Settlement,
            tiles: resolved.iter().map(|(t, _)| *t).collect(),
        });
        for (frame_tile, frame_slot) in resolved {
            self.tile_mut(frame_tile).construction_slots[frame_slot] = Some(id);
        }
        self.player_mut(owner).victory_points += 1;
        id
    }

    /// Batch setup placement from `(x, y, slot)` matrix coordinates.
    pub fn init_position(
        &mut self,
        owner: PlayerId,
        settlements: &[(usize, usize, usize)],
        roads: &[(usize, usize, usize)],
    ) -> Result<(), PlacementError> {
        for &(x, y, slot) in settlements {
            let tile = self
                .tile_at(x, y)
                .ok_or(PlacementError::UnknownTile { x, y })?;
            self.place_initial_settlement(owner, tile, slot)?;
        }
        for &(x, y, slot) in roads {
            let tile = self
                .tile_at(x, y)
                .ok_or(PlacementError::UnknownTile { x, y })?;
            self.place_initial_road(owner, tile, slot)?;
        }
        Ok(())
    }

    // ==================== Upgrades ====================

    /// Upgrade an owned settlement to a city in place. The construction keeps
    /// its id and every slot referencing it.
    pub fn upgrade_to_city(
        &mut self,
        owner: PlayerId,
        construction: ConstructionId,
    ) -> Result<(), OwnershipError> {
        if self.construction(construction).owner != owner {
            return Err(OwnershipError::NotOwner);
        }
        if self.construction(construction).kind != ConstructionKind::Settlement {
            return Err(OwnershipError::NotASettlement);
        }
        self.construction_mut(construction).kind = ConstructionKind::City;
        self.player_mut(owner).victory_points += 1;
        Ok(())
    }

    // ==================== Funded building ====================

    /// Resource-funded wrapper around the placement rules: verifies the cost,
    /// delegates to the placement check, then deducts. Cities are upgraded
    /// through [`Board::upgrade_to_city`], never built directly.
    pub fn build(
        &mut self,
        owner: PlayerId,
        item: ConstructionItem,
        tile: TileId,
        slot: usize,
    ) -> Result<(), PlacementError> {
        if !self.has_resources_for(owner, item) {
            return Err(PlacementError::InsufficientResources);
        }
        match item {
            ConstructionItem::Road => {
                self.place_road(owner, tile, slot)?;
            }
            ConstructionItem::Settlement => {
                self.place_settlement(owner, tile, slot)?;
            }
            ConstructionItem::City => {
                return Err(PlacementError::InvalidConstructionKind("City".to_string()));
            }
            ConstructionItem::DevelopmentCard => {}
        }
        let cost = item.cost();
        let paid = self.player_mut(owner).resources.subtract(&cost);
        debug_assert!(paid);
        Ok(())
    }
}
