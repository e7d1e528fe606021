//! The live board and the controller interface players read it through.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use super::coordinate::Coordinate;
use super::snapshot::BoardSnapshot;
use crate::core::PutMove;
use crate::protocol::PlayError;
use crate::rules::PlacementRules;
use crate::tiles::Tile;

/// Source of board snapshots for players.
///
/// Implementations must hand out fully copied, immutable snapshots; players
/// never see the live board.
pub trait GameController: Send + Sync {
    /// Copy of the board as of this call.
    fn board_copy(&self) -> BoardSnapshot;
}

/// Mutable board owned by the orchestrator.
#[derive(Clone, Debug)]
pub struct Board {
    current: BoardSnapshot,
}

impl Board {
    /// An empty board validated by `rules`.
    #[must_use]
    pub fn new(rules: Arc<dyn PlacementRules>) -> Self {
        Self {
            current: BoardSnapshot::empty(rules),
        }
    }

    /// Rebuild a board from placements known to be on it, e.g. state received
    /// from the server. The placements are not validated.
    pub fn from_tiles(
        rules: Arc<dyn PlacementRules>,
        tiles: impl IntoIterator<Item = (Coordinate, Tile)>,
    ) -> Self {
        let current = tiles
            .into_iter()
            .fold(BoardSnapshot::empty(rules), |board, (cell, tile)| {
                board.with_move(&PutMove::single(cell, tile))
            });
        Self { current }
    }

    /// O(1) immutable copy.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.current.clone()
    }

    /// Validate and place a move.
    pub fn apply(&mut self, placements: &PutMove) -> Result<(), PlayError> {
        if !self.current.validate_move(placements) {
            warn!(placements = placements.len(), "board rejected move");
            return Err(PlayError::Rejected);
        }
        self.current = self.current.with_move(placements);
        debug!(
            tiles = self.current.len(),
            boundaries = ?self.current.boundaries().as_tuple(),
            "move applied"
        );
        Ok(())
    }
}

impl GameController for Board {
    fn board_copy(&self) -> BoardSnapshot {
        self.snapshot()
    }
}

/// Board shared between the orchestrator and a network layer.
///
/// Snapshots are taken under a read lock; the lock is released before the
/// caller starts searching.
#[derive(Clone, Debug)]
pub struct SharedBoard {
    inner: Arc<RwLock<Board>>,
}

impl SharedBoard {
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            inner: Arc::new(RwLock::new(board)),
        }
    }

    pub fn apply(&self, placements: &PutMove) -> Result<(), PlayError> {
        self.inner.write().apply(placements)
    }
}

impl GameController for SharedBoard {
    fn board_copy(&self) -> BoardSnapshot {
        self.inner.read().snapshot()
    }
}
