//! Move representation.
//!
//! A turn is either a *put* (tiles placed on the board, keyed by cell) or a
//! *trade* (tiles handed back to the bag in exchange for new ones):
//! - "Put a red square at the origin" = `PutMove` with one placement
//! - "Put three tiles in a row" = `PutMove` with three placements
//! - "Swap two tiles" = `TradeMove` with two tiles
//!
//! A move is always checked as a whole against the board before it is applied.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::board::Coordinate;
use crate::tiles::{Tile, HAND_SIZE};

/// Which kind of move a player wants to make this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveType {
    Put,
    Trade,
}

impl std::fmt::Display for MoveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveType::Put => write!(f, "put"),
            MoveType::Trade => write!(f, "trade"),
        }
    }
}

/// Two placements of one move target the same cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("cell {0} is targeted more than once")]
pub struct DuplicateCell(pub Coordinate);

/// One tile on one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Placement {
    pub coordinate: Coordinate,
    pub tile: Tile,
}

/// Simultaneous placements for a put turn.
///
/// Cells are unique by construction. Serializes as a list of placements
/// ordered by cell.
///
/// ```
/// use qwirkle_player::board::Coordinate;
/// use qwirkle_player::core::PutMove;
/// use qwirkle_player::tiles::{Color, Shape, Tile};
///
/// let tile = Tile::new(Shape::Square, Color::Red);
/// let mut mv = PutMove::single(Coordinate::ORIGIN, tile);
/// assert!(mv.insert(Coordinate::ORIGIN, tile).is_err());
/// assert_eq!(mv.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Placement>", into = "Vec<Placement>")]
pub struct PutMove {
    placements: FxHashMap<Coordinate, Tile>,
}

impl PutMove {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A move placing a single tile.
    #[must_use]
    pub fn single(coordinate: Coordinate, tile: Tile) -> Self {
        let mut placements = FxHashMap::default();
        placements.insert(coordinate, tile);
        Self { placements }
    }

    /// Build from placements, rejecting repeated cells.
    pub fn from_placements(
        placements: impl IntoIterator<Item = Placement>,
    ) -> Result<Self, DuplicateCell> {
        let mut mv = Self::new();
        for p in placements {
            mv.insert(p.coordinate, p.tile)?;
        }
        Ok(mv)
    }

    /// Add a placement. Fails without modifying the move if the cell is taken.
    pub fn insert(&mut self, coordinate: Coordinate, tile: Tile) -> Result<(), DuplicateCell> {
        if self.placements.contains_key(&coordinate) {
            return Err(DuplicateCell(coordinate));
        }
        self.placements.insert(coordinate, tile);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, coordinate: Coordinate) -> Option<Tile> {
        self.placements.get(&coordinate).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Iterate over (cell, tile) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Tile)> + '_ {
        self.placements.iter().map(|(&c, &t)| (c, t))
    }

    /// Iterate over the target cells.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.placements.keys().copied()
    }

    /// The tiles this move uses, as a multiset (order unspecified).
    #[must_use]
    pub fn tiles(&self) -> Vec<Tile> {
        self.placements.values().copied().collect()
    }

    /// Placements ordered by cell; stable for logging and the wire.
    #[must_use]
    pub fn sorted(&self) -> Vec<Placement> {
        let mut out: Vec<Placement> = self
            .iter()
            .map(|(coordinate, tile)| Placement { coordinate, tile })
            .collect();
        out.sort_unstable();
        out
    }
}

impl TryFrom<Vec<Placement>> for PutMove {
    type Error = DuplicateCell;

    fn try_from(placements: Vec<Placement>) -> Result<Self, Self::Error> {
        Self::from_placements(placements)
    }
}

impl From<PutMove> for Vec<Placement> {
    fn from(mv: PutMove) -> Self {
        mv.sorted()
    }
}

/// Tiles offered back to the bag, in the order chosen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TradeMove {
    /// SmallVec sized for a full hand.
    pub tiles: SmallVec<[Tile; HAND_SIZE]>,
}

impl TradeMove {
    #[must_use]
    pub fn new(tiles: &[Tile]) -> Self {
        Self {
            tiles: SmallVec::from_slice(tiles),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl FromIterator<Tile> for TradeMove {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

/// A complete move payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Put(PutMove),
    Trade(TradeMove),
}

impl Move {
    #[must_use]
    pub fn move_type(&self) -> MoveType {
        match self {
            Move::Put(_) => MoveType::Put,
            Move::Trade(_) => MoveType::Trade,
        }
    }
}

impl From<PutMove> for Move {
    fn from(mv: PutMove) -> Self {
        Move::Put(mv)
    }
}

impl From<TradeMove> for Move {
    fn from(mv: TradeMove) -> Self {
        Move::Trade(mv)
    }
}
