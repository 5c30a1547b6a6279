//! Longest-road search.
//!
//! A road occupies an edge between two board vertices, so a player's roads
//! form a graph whose nodes are vertices and whose edges are the roads
//! themselves. The longest road is the longest trail in that graph: every
//! road is walked at most once, vertices may be revisited. Trail semantics
//! give the no-U-turn rule for free (leaving a vertex back across the road
//! just walked would reuse it) and handle forks, junctions and closed loops
//! without special cases.
//!
//! Vertices have no arena of their own; a physical vertex is the set of
//! (tile, slot) frames describing it, canonicalized here to the smallest
//! pair.

use crate::board::{Board, PlayerId, RoadId, TileId};
use crate::topology;
use std::collections::{HashMap, HashSet};

/// Canonical frame of a physical board vertex.
type Vertex = (TileId, usize);

impl Board {
    /// Length of the player's longest road, 0 when they own none.
    pub fn longest_road(&self, player: PlayerId) -> u32 {
        let mut graph: HashMap<Vertex, Vec<(RoadId, Vertex)>> = HashMap::new();
        for id in self.player_roads(player) {
            let road = self.road(id);
            let near = self.trail_vertex(road.tile, road.slot);
            let far = self.trail_vertex(road.tile, (road.slot + 1) % topology::SLOT_COUNT);
            graph.entry(near).or_default().push((id, far));
            graph.entry(far).or_default().push((id, near));
        }

        let mut best = 0;
        let mut walked = HashSet::new();
        for &start in graph.keys() {
            best = best.max(walk(&graph, start, &mut walked));
        }
        best
    }

    /// The smallest (tile, slot) frame describing the vertex at `vertex` on
    /// `tile`.
    fn trail_vertex(&self, tile: TileId, vertex: usize) -> Vertex {
        self.resolve_vertex(tile, vertex)
            .into_iter()
            .min()
            .unwrap_or((tile, vertex))
    }
}

/// Deepest trail leaving `at` over roads not yet walked, backtracking
/// through every choice.
fn walk(
    graph: &HashMap<Vertex, Vec<(RoadId, Vertex)>>,
    at: Vertex,
    walked: &mut HashSet<RoadId>,
) -> u32 {
    let mut deepest = 0;
    for &(road, next) in &graph[&at] {
        if walked.insert(road) {
            deepest = deepest.max(1 + walk(graph, next, walked));
            walked.remove(&road);
        }
    }
    deepest
}
