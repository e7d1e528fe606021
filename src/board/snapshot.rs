//! Immutable board snapshots.
//!
//! A `BoardSnapshot` is what move search reads. It owns its tiles through a
//! persistent `im::HashMap`, so taking a snapshot is O(1) and later changes
//! to the live board never show through. It holds no reference back to the
//! board it was copied from.

use std::sync::Arc;

use im::HashMap as ImHashMap;

use super::coordinate::{Boundaries, Coordinate};
use crate::core::PutMove;
use crate::rules::PlacementRules;
use crate::tiles::Tile;

/// Point-in-time copy of the placed tiles, their bounding rectangle, and the
/// rules used to validate moves against them.
#[derive(Clone)]
pub struct BoardSnapshot {
    tiles: ImHashMap<Coordinate, Tile>,
    boundaries: Boundaries,
    rules: Arc<dyn PlacementRules>,
}

impl BoardSnapshot {
    /// A board with no tiles.
    #[must_use]
    pub fn empty(rules: Arc<dyn PlacementRules>) -> Self {
        Self {
            tiles: ImHashMap::new(),
            boundaries: Boundaries::default(),
            rules,
        }
    }

    /// Bounding rectangle of the placed tiles; `Boundaries::default()` when empty.
    #[must_use]
    pub fn boundaries(&self) -> Boundaries {
        self.boundaries
    }

    #[must_use]
    pub fn tile_at(&self, cell: Coordinate) -> Option<Tile> {
        self.tiles.get(&cell).copied()
    }

    #[must_use]
    pub fn is_occupied(&self, cell: Coordinate) -> bool {
        self.tiles.contains_key(&cell)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Iterate over placed tiles in no particular order.
    pub fn tiles(&self) -> impl Iterator<Item = (Coordinate, Tile)> + '_ {
        self.tiles.iter().map(|(&c, &t)| (c, t))
    }

    /// True iff the whole move is legal on this board.
    ///
    /// Empty moves and moves onto occupied cells are rejected here; everything
    /// else is decided by the snapshot's rules.
    #[must_use]
    pub fn validate_move(&self, placements: &PutMove) -> bool {
        if placements.is_empty() {
            return false;
        }
        if placements.cells().any(|c| self.is_occupied(c)) {
            return false;
        }
        self.rules.is_legal(self, placements)
    }

    /// A new snapshot with the placements added. Does not validate.
    #[must_use]
    pub fn with_move(&self, placements: &PutMove) -> Self {
        let mut next = self.clone();
        for (cell, tile) in placements.iter() {
            next.boundaries = if next.tiles.is_empty() {
                Boundaries::around(cell)
            } else {
                next.boundaries.including(cell)
            };
            next.tiles.insert(cell, tile);
        }
        next
    }
}

impl std::fmt::Debug for BoardSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardSnapshot")
            .field("tiles", &self.tiles.len())
            .field("boundaries", &self.boundaries)
            .finish_non_exhaustive()
    }
}
