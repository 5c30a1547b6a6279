//! Hexstead - board topology and placement engine for a hexagonal
//! settlement game
//!
//! A hex grid has no native vertex or edge representation. Every tile here
//! exposes six clockwise directional slots, and the crate's job is keeping
//! the slot frames of neighbouring tiles consistent: a road or settlement
//! shared by up to three tiles is one object, referenced from every frame
//! that borders its physical location, and mutated exactly once per
//! placement.
//!
//! # Modules
//!
//! - [`topology`]: the pure slot-index arithmetic between tile frames
//! - [`layout`]: injected board configurations and the standard layout
//! - [`board`]: tiles, the board arenas, adjacency queries and production
//! - [`placement`]: placement rules for roads, settlements and cities
//! - [`longest_road`]: the longest-road trail search
//! - [`player`]: player state, resource hands and building costs
//! - [`cards`]: development cards and their board effects

pub mod board;
pub mod cards;
pub mod layout;
pub mod longest_road;
pub mod placement;
pub mod player;
pub mod topology;

// Re-export commonly used types
pub use board::{
    Board, Construction, ConstructionId, ConstructionKind, Harbour, HarbourId, PlayerId, Resource,
    Road, RoadId, Terrain, Tile, TileId,
};
pub use cards::DevelopmentCard;
pub use layout::{BoardConfig, LayoutError, TileConfig};
pub use placement::{ConstructionItem, OwnershipError, PlacementError};
pub use player::{costs, Player, ResourceHand};
