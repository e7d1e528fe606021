//! Placement rules consulted by board snapshots.
//!
//! Implement `PlacementRules` to plug the game's validation predicate into
//! the board. The crate never interprets line or scoring rules itself.

pub mod engine;

pub use engine::{ConnectedPlacement, MatchingPlacement, PlacementRules};
