//! Slot-index arithmetic for the hex grid.
//!
//! A tile has six directional slots, indexed 0..6 clockwise. The same index
//! space is reused for neighbours, edges (roads), vertices (constructions)
//! and harbours: edge `i` runs between vertices `i` and `i+1`, and the
//! neighbour across edge `i` sits at directional slot `i`.
//!
//! There is no native vertex or edge object anywhere in the board model.
//! A physical vertex or edge exists only as a set of (tile, slot) pairs that
//! all describe the same point, and the functions here are the fixed modular
//! arithmetic that translates between those frames of reference:
//!
//! - opposite frames: slot `i` seen from the neighbour is `(i + 3) % 6`;
//! - rotating one hex step clockwise around a shared vertex advances the
//!   local slot index by exactly 2.

/// Number of directional slots on a tile.
pub const SLOT_COUNT: usize = 6;

/// The slot on the neighbour tile that describes the same physical edge.
pub const fn mirror_slot(slot: usize) -> usize {
    (slot + 3) % SLOT_COUNT
}

/// Directional slots of the (up to) two neighbour tiles touching vertex
/// `vertex`, in clockwise order.
///
/// Vertex `v` sits between edges `v-1` and `v`, so the touching neighbours
/// are the ones across those two edges. Callers must preserve absent
/// neighbours positionally: the position in this list feeds [`vertex_slot`].
pub const fn vertex_neighbour_dirs(vertex: usize) -> [usize; 2] {
    [(vertex + 5) % SLOT_COUNT, vertex]
}

/// Directional slots of the (up to) three tiles that see edge `edge` from
/// the other side, in clockwise order.
///
/// This is `vertex_neighbour_dirs(edge)` extended with the far vertex's
/// trailing neighbour, i.e. the last element of
/// `vertex_neighbour_dirs(edge + 1)`.
pub const fn edge_neighbour_dirs(edge: usize) -> [usize; 3] {
    [(edge + 5) % SLOT_COUNT, edge, (edge + 1) % SLOT_COUNT]
}

/// Local slot index for the tile at position `hop` in a clockwise
/// intersection list (self first) sharing the vertex at `slot` on self.
///
/// One hex step around a shared vertex advances the local index by 2.
pub const fn vertex_slot(slot: usize, hop: usize) -> usize {
    (slot + hop * 2) % SLOT_COUNT
}

/// The two edges on the same tile sharing an endpoint with edge `edge`.
pub const fn same_tile_adjacent_edges(edge: usize) -> [usize; 2] {
    [(edge + 5) % SLOT_COUNT, (edge + 1) % SLOT_COUNT]
}

/// Road-slot probes on the tiles across edge `edge`, as
/// `(directional slot of the tile, road slot on that tile)` pairs.
///
/// The two probes on the facing neighbour are the edges flanking the mirror
/// slot; the probes on the flanking tiles are the same physical edges seen
/// from their frames. Each interior adjacent edge is therefore reachable from
/// two probes and results must be de-duplicated by identity.
pub const fn neighbour_road_probes(edge: usize) -> [(usize, usize); 4] {
    [
        ((edge + 5) % SLOT_COUNT, (edge + 1) % SLOT_COUNT),
        (edge, (edge + 2) % SLOT_COUNT),
        (edge, (edge + 4) % SLOT_COUNT),
        ((edge + 1) % SLOT_COUNT, (edge + 5) % SLOT_COUNT),
    ]
}
