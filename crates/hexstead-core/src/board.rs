//! The game board: tiles, the arenas behind them, and the adjacency queries.
//!
//! The board owns every tile, road, construction, harbour and player; all
//! cross-references between them are stable indices into those arenas. A road
//! or settlement shared by several tiles is one arena entry referenced from
//! every slot it occupies, so "the same object by identity" is plain id
//! equality.

use crate::layout::{BoardConfig, LayoutError};
use crate::player::Player;
use crate::topology::{
    self, edge_neighbour_dirs, mirror_slot, neighbour_road_probes, same_tile_adjacent_edges,
    vertex_neighbour_dirs, vertex_slot,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Player identifier (0-3 for a 4-player game)
pub type PlayerId = u8;

/// Stable handle into the board's tile arena.
pub type TileId = usize;

/// Stable handle into the board's road arena.
pub type RoadId = usize;

/// Stable handle into the board's construction arena.
pub type ConstructionId = usize;

/// Stable handle into the board's harbour arena.
pub type HarbourId = usize;

/// Resource types produced by tiles and spent on constructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Brick,
    Lumber,
    Ore,
    Grain,
    Wool,
}

impl Resource {
    /// All resource types
    pub const ALL: [Resource; 5] = [
        Resource::Brick,
        Resource::Lumber,
        Resource::Ore,
        Resource::Grain,
        Resource::Wool,
    ];
}

/// Terrain of a hex tile. Every terrain except the desert produces a
/// resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    /// No production; the robber starts here
    Desert,
    Hills,
    Forest,
    Mountains,
    Fields,
    Pasture,
}

impl Terrain {
    /// The resource this terrain produces, if any
    pub fn resource(&self) -> Option<Resource> {
        match self {
            Terrain::Desert => None,
            Terrain::Hills => Some(Resource::Brick),
            Terrain::Forest => Some(Resource::Lumber),
            Terrain::Mountains => Some(Resource::Ore),
            Terrain::Fields => Some(Resource::Grain),
            Terrain::Pasture => Some(Resource::Wool),
        }
    }
}

/// A trading port referenced by one or two tile harbour slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Harbour {
    /// 2:1 trade for this resource, or 3:1 for anything when `None`
    pub resource: Option<Resource>,
}

impl Harbour {
    /// General 3:1 harbour
    pub fn general() -> Self {
        Self { resource: None }
    }

    /// Resource-specific 2:1 harbour
    pub fn specific(resource: Resource) -> Self {
        Self {
            resource: Some(resource),
        }
    }

    /// The exchange rate for this harbour
    pub fn rate(&self) -> u32 {
        match self.resource {
            None => 3,
            Some(_) => 2,
        }
    }
}

/// What a vertex construction currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstructionKind {
    /// 1 VP, 1 resource per adjacent production
    Settlement,
    /// 2 VP, 2 resources per adjacent production
    City,
}

impl ConstructionKind {
    /// Victory points provided by this construction
    pub fn victory_points(&self) -> u32 {
        match self {
            ConstructionKind::Settlement => 1,
            ConstructionKind::City => 2,
        }
    }

    /// Resource multiplier (how many resources per production)
    pub fn resource_multiplier(&self) -> u32 {
        match self {
            ConstructionKind::Settlement => 1,
            ConstructionKind::City => 2,
        }
    }
}

/// A road occupying one edge. The home (tile, slot) pair is where it was
/// placed from; interior edges mirror the same id into the neighbour's
/// opposite slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Road {
    pub owner: PlayerId,
    pub tile: TileId,
    pub slot: usize,
}

/// A settlement or city occupying one vertex, referenced from the
/// construction slot of every tile bordering that vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Construction {
    pub owner: PlayerId,
    pub kind: ConstructionKind,
    /// The 1-3 tiles whose construction slots reference this object
    pub tiles: Vec<TileId>,
}

/// A single hex tile with its six directional slot families.
///
/// Slot `i` here always means the same clockwise direction: the neighbour
/// across edge `i`, the road on edge `i`, the construction on vertex `i` and
/// the harbour moored off vertex `i`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    pub terrain: Terrain,
    /// Dice number that triggers production (0 for the desert)
    pub number: u8,
    pub neighbours: [Option<TileId>; 6],
    pub road_slots: [Option<RoadId>; 6],
    pub construction_slots: [Option<ConstructionId>; 6],
    pub harbour_slots: [Option<HarbourId>; 6],
    pub has_robber: bool,
}

impl Tile {
    fn new(terrain: Terrain, number: u8, has_robber: bool) -> Self {
        Self {
            terrain,
            number,
            neighbours: [None; 6],
            road_slots: [None; 6],
            construction_slots: [None; 6],
            harbour_slots: [None; 6],
            has_robber,
        }
    }

    /// The resource this tile produces, if any
    pub fn resource(&self) -> Option<Resource> {
        self.terrain.resource()
    }

    /// The resource handed out for this dice roll, if the number matches and
    /// the robber is elsewhere.
    pub fn check_proc(&self, number: u8) -> Option<Resource> {
        if self.number == number && !self.has_robber {
            self.resource()
        } else {
            None
        }
    }
}

/// The complete game board: the tile matrix and every object placed on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    tiles: Vec<Tile>,
    /// Row-staggered matrix of tile ids, as laid out by the injected config
    rows: Vec<Vec<TileId>>,
    roads: Vec<Road>,
    constructions: Vec<Construction>,
    harbours: Vec<Harbour>,
    players: Vec<Player>,
    robber_tile: TileId,
}

impl Board {
    /// Build a board from an injected layout. The neighbour-linking pass runs
    /// once here; tiles are never created or destroyed afterwards.
    pub fn from_config(config: &BoardConfig) -> Result<Self, LayoutError> {
        let mut tiles = Vec::new();
        let mut rows = Vec::new();
        let mut robber = None;

        for row in &config.rows {
            let mut ids = Vec::with_capacity(row.len());
            for spec in row {
                let id = tiles.len();
                let mut tile = Tile::new(spec.terrain, spec.number, spec.has_robber);
                for &(harbour, slot) in &spec.harbours {
                    if harbour >= config.harbours.len() {
                        return Err(LayoutError::HarbourIndexOutOfRange { harbour, tile: id });
                    }
                    if slot >= topology::SLOT_COUNT {
                        return Err(LayoutError::HarbourSlotOutOfRange { slot, tile: id });
                    }
                    tile.harbour_slots[slot] = Some(harbour);
                }
                if spec.has_robber && robber.replace(id).is_some() {
                    return Err(LayoutError::MultipleRobberTiles);
                }
                tiles.push(tile);
                ids.push(id);
            }
            rows.push(ids);
        }

        let robber_tile = robber.ok_or(LayoutError::NoRobberTile)?;

        let mut board = Self {
            tiles,
            rows,
            roads: Vec::new(),
            constructions: Vec::new(),
            harbours: config.harbours.clone(),
            players: Vec::new(),
            robber_tile,
        };
        board.link_neighbours();
        Ok(board)
    }

    /// The standard 19-tile layout in rows of 3-4-5-4-3 with nine harbours.
    pub fn standard() -> Self {
        Self::from_config(&BoardConfig::standard()).expect("standard layout is valid")
    }

    /// Link every tile to its east, south-east and south-west neighbours,
    /// writing both directions of each link so that
    /// `a.neighbours[i] == Some(b)` iff `b.neighbours[(i+3)%6] == Some(a)`.
    fn link_neighbours(&mut self) {
        for y in 0..self.rows.len() {
            for x in 0..self.rows[y].len() {
                let tile = self.rows[y][x];
                if x + 1 < self.rows[y].len() {
                    self.link(tile, 1, self.rows[y][x + 1]);
                }
                if y + 1 < self.rows.len() {
                    if self.rows[y + 1].len() > self.rows[y].len() {
                        // widening half of the board
                        self.link(tile, 3, self.rows[y + 1][x]);
                        self.link(tile, 2, self.rows[y + 1][x + 1]);
                    } else {
                        // narrowing half: the row below is shifted inwards
                        if x > 0 {
                            self.link(tile, 3, self.rows[y + 1][x - 1]);
                        }
                        if x < self.rows[y + 1].len() {
                            self.link(tile, 2, self.rows[y + 1][x]);
                        }
                    }
                }
            }
        }
    }

    fn link(&mut self, from: TileId, dir: usize, to: TileId) {
        self.tiles[from].neighbours[dir] = Some(to);
        self.tiles[to].neighbours[mirror_slot(dir)] = Some(from);
    }

    // ==================== Accessors ====================

    /// Tile id at matrix position (x, y), if in range
    pub fn tile_at(&self, x: usize, y: usize) -> Option<TileId> {
        self.rows.get(y)?.get(x).copied()
    }

    pub fn tile(&self, id: TileId) -> &Tile {
        &self.tiles[id]
    }

    pub(crate) fn tile_mut(&mut self, id: TileId) -> &mut Tile {
        &mut self.tiles[id]
    }

    /// All tile ids in layout order
    pub fn tile_ids(&self) -> impl Iterator<Item = TileId> + '_ {
        0..self.tiles.len()
    }

    /// The tile matrix, row by row
    pub fn rows(&self) -> &[Vec<TileId>] {
        &self.rows
    }

    pub fn road(&self, id: RoadId) -> &Road {
        &self.roads[id]
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    pub(crate) fn push_road(&mut self, road: Road) -> RoadId {
        self.roads.push(road);
        self.roads.len() - 1
    }

    pub fn construction(&self, id: ConstructionId) -> &Construction {
        &self.constructions[id]
    }

    pub fn constructions(&self) -> &[Construction] {
        &self.constructions
    }

    pub(crate) fn construction_mut(&mut self, id: ConstructionId) -> &mut Construction {
        &mut self.constructions[id]
    }

    pub(crate) fn push_construction(&mut self, construction: Construction) -> ConstructionId {
        self.constructions.push(construction);
        self.constructions.len() - 1
    }

    pub fn harbour(&self, id: HarbourId) -> &Harbour {
        &self.harbours[id]
    }

    pub fn harbour_count(&self) -> usize {
        self.harbours.len()
    }

    /// Register a player and return their id.
    pub fn add_player(&mut self, name: impl Into<String>) -> PlayerId {
        let id = self.players.len() as PlayerId;
        self.players.push(Player::new(id, name.into()));
        id
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id as usize]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id as usize]
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The tile the robber currently occupies
    pub fn robber_tile(&self) -> TileId {
        self.robber_tile
    }

    // ==================== Topology resolver ====================

    /// The (possibly absent) neighbour tiles touching vertex `vertex` of
    /// `tile`, clockwise. Absent entries are kept: position in this list
    /// drives the index arithmetic of dependent queries.
    ///
    /// Panics if `vertex` is not a valid slot index; the placement surface
    /// turns the same input into [`crate::PlacementError::InvalidSlotIndex`]
    /// before it reaches here.
    pub fn vertex_neighbours(&self, tile: TileId, vertex: usize) -> [Option<TileId>; 2] {
        assert!(vertex < topology::SLOT_COUNT);
        vertex_neighbour_dirs(vertex).map(|dir| self.tiles[tile].neighbours[dir])
    }

    /// The (possibly absent) tiles that see edge `edge` of `tile` from the
    /// other side, clockwise.
    ///
    /// Panics if `edge` is not a valid slot index.
    pub fn edge_neighbours(&self, tile: TileId, edge: usize) -> [Option<TileId>; 3] {
        assert!(edge < topology::SLOT_COUNT);
        edge_neighbour_dirs(edge).map(|dir| self.tiles[tile].neighbours[dir])
    }

    /// Every (tile, local slot) pair describing the physical vertex at
    /// `vertex` on `tile`, self first, absent tiles filtered out.
    ///
    /// Panics if `vertex` is not a valid slot index.
    pub fn resolve_vertex(&self, tile: TileId, vertex: usize) -> Vec<(TileId, usize)> {
        assert!(vertex < topology::SLOT_COUNT);
        let mut resolved = vec![(tile, vertex)];
        for (hop, dir) in vertex_neighbour_dirs(vertex).into_iter().enumerate() {
            if let Some(neighbour) = self.tiles[tile].neighbours[dir] {
                resolved.push((neighbour, vertex_slot(vertex, hop + 1)));
            }
        }
        resolved
    }

    /// All roads adjacent to edge `edge` of `tile`, de-duplicated by
    /// identity, in probe order: same-tile edges first, then the tiles across
    /// the edge clockwise. Interior adjacent edges are reachable from two
    /// probes, hence the de-duplication.
    ///
    /// Panics if `edge` is not a valid slot index.
    pub fn adjacent_roads(&self, tile: TileId, edge: usize) -> Vec<RoadId> {
        assert!(edge < topology::SLOT_COUNT);
        let mut roads = Vec::new();
        let home = &self.tiles[tile];
        for slot in same_tile_adjacent_edges(edge) {
            if let Some(id) = home.road_slots[slot] {
                if !roads.contains(&id) {
                    roads.push(id);
                }
            }
        }
        for (dir, slot) in neighbour_road_probes(edge) {
            if let Some(neighbour) = home.neighbours[dir] {
                if let Some(id) = self.tiles[neighbour].road_slots[slot] {
                    if !roads.contains(&id) {
                        roads.push(id);
                    }
                }
            }
        }
        roads
    }

    /// All settlements or cities on the vertices one edge away from vertex
    /// `vertex` of `tile`, de-duplicated by identity.
    pub fn adjacent_settlements(&self, tile: TileId, vertex: usize) -> Vec<ConstructionId> {
        let mut found = Vec::new();
        for (tile_id, idx) in self.resolve_vertex(tile, vertex) {
            let resolved = &self.tiles[tile_id];
            for probe in [(idx + 5) % 6, (idx + 1) % 6] {
                if let Some(id) = resolved.construction_slots[probe] {
                    if !found.contains(&id) {
                        found.push(id);
                    }
                }
            }
        }
        found
    }

    // ==================== Robber ====================

    /// Move the robber, preserving the exactly-one-robber invariant, and
    /// return the owners of constructions on the target tile (the players a
    /// knight could steal from).
    pub fn move_robber(&mut self, to: TileId) -> Vec<PlayerId> {
        self.tiles[self.robber_tile].has_robber = false;
        self.tiles[to].has_robber = true;
        self.robber_tile = to;
        self.players_on_tile(to)
    }

    /// Owners of constructions on this tile, de-duplicated
    pub fn players_on_tile(&self, tile: TileId) -> Vec<PlayerId> {
        let mut owners = Vec::new();
        for slot in self.tiles[tile].construction_slots.iter().flatten() {
            let owner = self.constructions[*slot].owner;
            if !owners.contains(&owner) {
                owners.push(owner);
            }
        }
        owners
    }

    // ==================== Resource production ====================

    /// Resources produced for a dice roll: every construction on a proc'ing
    /// tile is paid once per touched tile, cities twice. Robber-occupied
    /// tiles produce nothing.
    pub fn resources_for_roll(&self, roll: u8) -> HashMap<PlayerId, HashMap<Resource, u32>> {
        let mut distribution: HashMap<PlayerId, HashMap<Resource, u32>> = HashMap::new();
        for tile in &self.tiles {
            let resource = match tile.check_proc(roll) {
                Some(r) => r,
                None => continue,
            };
            for slot in tile.construction_slots.iter().flatten() {
                let construction = &self.constructions[*slot];
                *distribution
                    .entry(construction.owner)
                    .or_default()
                    .entry(resource)
                    .or_insert(0) += construction.kind.resource_multiplier();
            }
        }
        distribution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn terrain_at(board: &Board, id: Option<TileId>) -> Option<(Terrain, u8)> {
        id.map(|id| {
            let tile = board.tile(id);
            (tile.terrain, tile.number)
        })
    }

    #[test]
    fn standard_board_has_19_tiles_in_staggered_rows() {
        let board = Board::standard();
        let widths: Vec<usize> = board.rows().iter().map(|row| row.len()).collect();
        assert_eq!(widths, vec![3, 4, 5, 4, 3]);
        assert_eq!(board.tile_ids().count(), 19);
    }

    #[test]
    fn neighbour_links_are_symmetric() {
        let board = Board::standard();
        for id in board.tile_ids() {
            for (dir, neighbour) in board.tile(id).neighbours.iter().enumerate() {
                if let Some(n) = neighbour {
                    assert_eq!(
                        board.tile(*n).neighbours[mirror_slot(dir)],
                        Some(id),
                        "link {id} --{dir}--> {n} has no mirror"
                    );
                }
            }
        }
    }

    #[test]
    fn standard_board_linking_matches_layout() {
        let board = Board::standard();
        let corner = board.tile_at(0, 0).unwrap();
        assert_eq!(
            terrain_at(&board, Some(corner)),
            Some((Terrain::Mountains, 10))
        );
        assert_eq!(
            board.tile(corner).neighbours,
            [
                None,
                board.tile_at(1, 0),
                board.tile_at(1, 1),
                board.tile_at(0, 1),
                None,
                None,
            ]
        );

        // middle of the widening half
        let tile = board.tile_at(1, 1).unwrap();
        let named: Vec<Option<(Terrain, u8)>> = board
            .tile(tile)
            .neighbours
            .iter()
            .map(|n| terrain_at(&board, *n))
            .collect();
        assert_eq!(
            named,
            vec![
                Some((Terrain::Pasture, 2)),
                Some((Terrain::Pasture, 4)),
                Some((Terrain::Desert, 0)),
                Some((Terrain::Forest, 11)),
                Some((Terrain::Fields, 12)),
                Some((Terrain::Mountains, 10)),
            ]
        );

        // centre tile is fully surrounded
        let centre = board.tile_at(2, 2).unwrap();
        let numbers: Vec<u8> = board
            .tile(centre)
            .neighbours
            .iter()
            .map(|n| board.tile(n.unwrap()).number)
            .collect();
        assert_eq!(numbers, vec![4, 3, 4, 3, 11, 6]);

        // narrowing half: the south-west link shifts inwards
        let tile = board.tile_at(0, 3).unwrap();
        let named: Vec<Option<(Terrain, u8)>> = board
            .tile(tile)
            .neighbours
            .iter()
            .map(|n| terrain_at(&board, *n))
            .collect();
        assert_eq!(
            named,
            vec![
                Some((Terrain::Forest, 11)),
                Some((Terrain::Mountains, 3)),
                Some((Terrain::Hills, 5)),
                None,
                None,
                Some((Terrain::Fields, 9)),
            ]
        );

        let tile = board.tile_at(2, 4).unwrap();
        let named: Vec<Option<(Terrain, u8)>> = board
            .tile(tile)
            .neighbours
            .iter()
            .map(|n| terrain_at(&board, *n))
            .collect();
        assert_eq!(
            named,
            vec![
                Some((Terrain::Pasture, 5)),
                None,
                None,
                None,
                Some((Terrain::Fields, 6)),
                Some((Terrain::Fields, 4)),
            ]
        );
    }

    #[test]
    fn robber_starts_on_the_desert() {
        let board = Board::standard();
        let robber = board.tile(board.robber_tile());
        assert_eq!(robber.terrain, Terrain::Desert);
        assert!(robber.has_robber);
        let with_robber = board
            .tile_ids()
            .filter(|id| board.tile(*id).has_robber)
            .count();
        assert_eq!(with_robber, 1);
    }

    #[test]
    fn move_robber_keeps_exactly_one() {
        let mut board = Board::standard();
        let from = board.robber_tile();
        let to = board.tile_at(0, 0).unwrap();
        board.move_robber(to);
        assert!(!board.tile(from).has_robber);
        assert!(board.tile(to).has_robber);
        assert_eq!(board.robber_tile(), to);
    }

    #[test]
    fn check_proc_requires_number_and_no_robber() {
        let mut tile = Tile::new(Terrain::Hills, 3, false);
        assert_eq!(tile.check_proc(5), None);
        assert_eq!(tile.check_proc(3), Some(Resource::Brick));
        tile.has_robber = true;
        assert_eq!(tile.check_proc(3), None);
    }

    #[test]
    fn standard_harbours_are_shared_instances() {
        let board = Board::standard();
        let references: usize = board
            .tile_ids()
            .map(|id| board.tile(id).harbour_slots.iter().flatten().count())
            .sum();
        assert_eq!(references, 24);
        assert_eq!(board.harbour_count(), 9);

        // two slots of the corner tile reference the same general harbour
        let corner = board.tile(board.tile_at(0, 0).unwrap());
        assert!(corner.harbour_slots[0].is_some());
        assert_eq!(corner.harbour_slots[0], corner.harbour_slots[5]);
        let id = corner.harbour_slots[0].unwrap();
        assert_eq!(board.harbour(id).rate(), 3);

        // one harbour spanning two tiles
        let forest = board.tile(board.tile_at(2, 0).unwrap());
        let hills = board.tile(board.tile_at(3, 1).unwrap());
        assert_eq!(forest.harbour_slots[2], hills.harbour_slots[0]);
        assert_eq!(
            board.harbour(forest.harbour_slots[2].unwrap()).resource,
            Some(Resource::Ore)
        );
    }

    #[test]
    fn vertex_neighbours_keep_absent_entries() {
        let board = Board::standard();
        let corner = board.tile_at(0, 0).unwrap();
        assert_eq!(board.vertex_neighbours(corner, 0), [None, None]);
        assert_eq!(
            board.vertex_neighbours(corner, 2),
            [board.tile_at(1, 0), board.tile_at(1, 1)]
        );
        // shoreline vertex with only the second neighbour present
        assert_eq!(
            board.vertex_neighbours(corner, 1),
            [None, board.tile_at(1, 0)]
        );
    }

    #[test]
    fn edge_neighbours_extend_the_vertex_view() {
        let board = Board::standard();
        let corner = board.tile_at(0, 0).unwrap();
        assert_eq!(
            board.edge_neighbours(corner, 2),
            [board.tile_at(1, 0), board.tile_at(1, 1), board.tile_at(0, 1)]
        );
        assert_eq!(
            board.edge_neighbours(corner, 1),
            [None, board.tile_at(1, 0), board.tile_at(1, 1)]
        );
    }

    #[test]
    fn adjacent_roads_sees_every_bordering_frame() {
        let mut board = Board::standard();
        board.add_player("Alice");
        board.add_player("Bob");
        board.add_player("Charlie");

        board
            .init_position(0, &[], &[(1, 1, 5), (2, 0, 1), (3, 1, 0)])
            .unwrap();
        let t00 = board.tile_at(0, 0).unwrap();
        let t10 = board.tile_at(1, 0).unwrap();
        let t01 = board.tile_at(0, 1).unwrap();
        let t11 = board.tile_at(1, 1).unwrap();
        assert_eq!(board.adjacent_roads(t11, 4).len(), 1);
        assert_eq!(board.adjacent_roads(t11, 5).len(), 0);
        assert_eq!(board.adjacent_roads(t10, 4).len(), 1);
        assert_eq!(board.adjacent_roads(t10, 3).len(), 1);
        assert_eq!(board.adjacent_roads(t01, 0).len(), 1);
        assert_eq!(board.adjacent_roads(t00, 3).len(), 1);

        // two shoreline roads meeting at a junction find each other by id
        let t20 = board.tile_at(2, 0).unwrap();
        let t31 = board.tile_at(3, 1).unwrap();
        let found = board.adjacent_roads(t20, 1);
        assert_eq!(found.len(), 1);
        assert_eq!((board.road(found[0]).tile, board.road(found[0]).slot), (t31, 0));
        let found = board.adjacent_roads(t31, 0);
        assert_eq!(found.len(), 1);
        assert_eq!((board.road(found[0]).tile, board.road(found[0]).slot), (t20, 1));

        board.init_position(1, &[], &[(2, 2, 5), (2, 1, 3)]).unwrap();
        let t21 = board.tile_at(2, 1).unwrap();
        let t22 = board.tile_at(2, 2).unwrap();
        assert_eq!(board.adjacent_roads(t22, 5).len(), 1);
        assert_eq!(board.adjacent_roads(t11, 2).len(), 1);
        // the road on (2,2) slot 5 is reachable from two probes of this edge
        // but counted once
        assert_eq!(board.adjacent_roads(t21, 4).len(), 2);

        board
            .init_position(
                2,
                &[],
                &[(1, 3, 0), (2, 3, 5), (1, 3, 2), (2, 3, 3), (2, 3, 4), (4, 2, 2)],
            )
            .unwrap();
        let t13 = board.tile_at(1, 3).unwrap();
        assert_eq!(board.adjacent_roads(t13, 1).len(), 4);
        assert_eq!(board.adjacent_roads(t13, 2).len(), 2);

        // a shoreline road with no mirror frame is still seen from the tile
        // across its only junction
        let t33 = board.tile_at(3, 3).unwrap();
        let t42 = board.tile_at(4, 2).unwrap();
        assert_eq!(board.tile(t33).road_slots[1], None);
        let found = board.adjacent_roads(t33, 1);
        assert_eq!(found.len(), 1);
        assert_eq!((board.road(found[0]).tile, board.road(found[0]).slot), (t42, 2));
    }

    #[test]
    fn adjacent_settlements_grow_but_never_shrink_as_the_board_fills() {
        let mut board = Board::standard();
        board.add_player("Alice");
        board.add_player("Bob");
        board.add_player("Charlie");

        board.init_position(0, &[(1, 1, 4), (0, 0, 2)], &[]).unwrap();
        let t00 = board.tile_at(0, 0).unwrap();
        let t10 = board.tile_at(1, 0).unwrap();
        let t11 = board.tile_at(1, 1).unwrap();
        assert_eq!(board.adjacent_settlements(t00, 3).len(), 2);
        assert_eq!(board.adjacent_settlements(t10, 3).len(), 1);
        assert_eq!(board.adjacent_settlements(t11, 2).len(), 0);

        board.init_position(1, &[(1, 2, 2)], &[]).unwrap();
        let t12 = board.tile_at(1, 2).unwrap();
        let found = board.adjacent_settlements(t12, 1);
        assert_eq!(found.len(), 2);
        let owners: Vec<PlayerId> = found
            .iter()
            .map(|c| board.construction(*c).owner)
            .collect();
        assert_eq!(owners, vec![0, 1]);

        board.init_position(2, &[(1, 1, 2), (4, 2, 1)], &[]).unwrap();
        // the same query after more placements sees more, never fewer
        assert_eq!(board.adjacent_settlements(t12, 1).len(), 3);

        // a settlement on a single-frame shoreline vertex is found from both
        // of its tile's flanking vertices
        let t42 = board.tile_at(4, 2).unwrap();
        assert_eq!(board.adjacent_settlements(t42, 2).len(), 1);
        assert_eq!(board.adjacent_settlements(t42, 0).len(), 1);
    }

    #[test]
    fn resolve_vertex_walks_clockwise_with_the_plus_two_rule() {
        let board = Board::standard();
        let corner = board.tile_at(0, 0).unwrap();
        assert_eq!(
            board.resolve_vertex(corner, 2),
            vec![
                (corner, 2),
                (board.tile_at(1, 0).unwrap(), 4),
                (board.tile_at(1, 1).unwrap(), 0),
            ]
        );
        // shoreline vertex: the absent first hop must not shift the second
        let west = board.tile_at(0, 2).unwrap();
        assert_eq!(
            board.resolve_vertex(west, 0),
            vec![(west, 0), (board.tile_at(0, 1).unwrap(), 4)]
        );
    }
}
