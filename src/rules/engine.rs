//! Placement rules trait.
//!
//! The board does not know the game's line and scoring rules; it asks a
//! `PlacementRules` implementation whether a put move is legal. Snapshots
//! carry their rules, so whoever holds a snapshot can validate against it
//! without touching the live board.
//!
//! Two reference rule sets live here:
//! - `ConnectedPlacement`: the opening move covers the origin, later moves
//!   stay in one line and touch the existing tiles
//! - `MatchingPlacement`: connected, and every placed tile shares a shape or a
//!   color with each orthogonal neighbour
//!
//! Full line scoring stays with the board component that plugs in its own rules.

use crate::board::{BoardSnapshot, Coordinate};
use crate::core::PutMove;

/// Legality predicate for put moves.
///
/// ## Implementation Notes
///
/// - Called only for non-empty moves whose cells are all free; the snapshot
///   checks that before delegating
/// - Must be a pure function of `(board, placements)`
/// - Closures `Fn(&BoardSnapshot, &PutMove) -> bool` implement this trait
pub trait PlacementRules: Send + Sync {
    /// True iff the move may be applied to `board`.
    fn is_legal(&self, board: &BoardSnapshot, placements: &PutMove) -> bool;
}

impl<F> PlacementRules for F
where
    F: Fn(&BoardSnapshot, &PutMove) -> bool + Send + Sync,
{
    fn is_legal(&self, board: &BoardSnapshot, placements: &PutMove) -> bool {
        self(board, placements)
    }
}

/// Placements form one line and connect to the tiles already on the board.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConnectedPlacement;

impl PlacementRules for ConnectedPlacement {
    fn is_legal(&self, board: &BoardSnapshot, placements: &PutMove) -> bool {
        let cells: Vec<Coordinate> = placements.cells().collect();
        let Some(first) = cells.first().copied() else {
            return false;
        };

        let same_row = cells.iter().all(|c| c.y == first.y);
        let same_column = cells.iter().all(|c| c.x == first.x);
        if !same_row && !same_column {
            return false;
        }

        if board.is_empty() {
            return placements.get(Coordinate::ORIGIN).is_some();
        }

        cells
            .iter()
            .any(|c| c.neighbours().any(|n| board.is_occupied(n)))
    }
}

/// `ConnectedPlacement` plus pairwise compatibility with neighbours.
#[derive(Clone, Copy, Debug, Default)]
pub struct MatchingPlacement;

impl PlacementRules for MatchingPlacement {
    fn is_legal(&self, board: &BoardSnapshot, placements: &PutMove) -> bool {
        if !ConnectedPlacement.is_legal(board, placements) {
            return false;
        }

        placements.iter().all(|(cell, tile)| {
            cell.neighbours().all(|n| {
                match board.tile_at(n).or_else(|| placements.get(n)) {
                    Some(other) => tile.matches(other),
                    None => true,
                }
            })
        })
    }
}
