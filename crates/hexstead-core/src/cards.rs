//! Development cards and their effects on the board.
//!
//! Hand management (holding, drawing, discarding) lives on [`Player`]; the
//! geometric and resource effects live on [`Board`]. Turn sequencing decides
//! when a card may be played, which is the caller's business.

use crate::board::{Board, PlayerId, Resource, RoadId, TileId};
use crate::placement::PlacementError;
use crate::player::Player;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Development card types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DevelopmentCard {
    /// Move the robber and steal from a player on the target tile
    Knight,
    /// Worth one victory point when revealed
    VictoryPoint,
    /// Place two roads for free
    RoadBuilding,
    /// Take any two resources from the bank
    YearOfPlenty,
    /// Take every card of one resource from every other player
    Monopoly,
}

impl DevelopmentCard {
    /// The standard 25-card deck: 14 knights, 5 victory points and 2 of each
    /// of the rest.
    pub fn standard_deck() -> Vec<DevelopmentCard> {
        let mut deck = Vec::with_capacity(25);
        deck.extend(std::iter::repeat(DevelopmentCard::Knight).take(14));
        deck.extend(std::iter::repeat(DevelopmentCard::VictoryPoint).take(5));
        deck.extend(std::iter::repeat(DevelopmentCard::RoadBuilding).take(2));
        deck.extend(std::iter::repeat(DevelopmentCard::YearOfPlenty).take(2));
        deck.extend(std::iter::repeat(DevelopmentCard::Monopoly).take(2));
        deck
    }

    pub fn shuffle_deck<R: Rng>(deck: &mut [DevelopmentCard], rng: &mut R) {
        deck.shuffle(rng);
    }
}

impl Player {
    pub fn has_card(&self, card: DevelopmentCard) -> bool {
        self.dev_cards.contains(&card)
    }

    /// Remove one card of this type from the hand, false if none is held.
    /// Knights are tallied for largest-army scoring.
    pub fn play_card(&mut self, card: DevelopmentCard) -> bool {
        match self.dev_cards.iter().position(|c| *c == card) {
            Some(index) => {
                self.dev_cards.remove(index);
                if card == DevelopmentCard::Knight {
                    self.played_knights += 1;
                }
                true
            }
            None => false,
        }
    }
}

impl Board {
    /// Knight effect: move the robber and report who can be stolen from
    /// (players with a construction on the target tile, the knight's owner
    /// excepted).
    pub fn play_knight(&mut self, player: PlayerId, to: TileId) -> Vec<PlayerId> {
        let mut victims = self.move_robber(to);
        victims.retain(|p| *p != player);
        victims
    }

    /// Move one random resource card from `victim` to `thief`.
    pub fn steal_random_resource<R: Rng>(
        &mut self,
        thief: PlayerId,
        victim: PlayerId,
        rng: &mut R,
    ) -> Option<Resource> {
        let stolen = self.player_mut(victim).resources.steal_random(rng)?;
        self.player_mut(thief).resources.add(stolen, 1);
        Some(stolen)
    }

    /// Road-building effect: two road placements that keep the connectivity
    /// rule but cost nothing. Fails on the first illegal placement, after
    /// any earlier legal one has been applied.
    pub fn play_road_building(
        &mut self,
        player: PlayerId,
        placements: [(TileId, usize); 2],
    ) -> Result<[RoadId; 2], PlacementError> {
        let first = self.place_road(player, placements[0].0, placements[0].1)?;
        let second = self.place_road(player, placements[1].0, placements[1].1)?;
        Ok([first, second])
    }

    /// Monopoly effect: every other player hands over all their cards of one
    /// resource. Returns how many changed hands.
    pub fn play_monopoly(&mut self, player: PlayerId, resource: Resource) -> u32 {
        let ids: Vec<PlayerId> = self.players().iter().map(|p| p.id).collect();
        let mut taken = 0;
        for id in ids {
            if id != player {
                taken += self.player_mut(id).resources.drain(resource);
            }
        }
        self.player_mut(player).resources.add(resource, taken);
        taken
    }

    /// Year-of-plenty effect: two resources of choice from the bank.
    pub fn play_year_of_plenty(&mut self, player: PlayerId, first: Resource, second: Resource) {
        let hand = &mut self.player_mut(player).resources;
        hand.add(first, 1);
        hand.add(second, 1);
    }

    /// Reveal a victory-point card.
    pub fn play_victory_point(&mut self, player: PlayerId) {
        self.player_mut(player).victory_points += 1;
    }
}
