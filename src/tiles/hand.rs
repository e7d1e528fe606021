//! A player's hand.
//!
//! Only the orchestrator mutates a hand (drawing after a turn, removing played
//! or traded tiles). Players and the search see it as `&[Tile]`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::bag::TileBag;
use super::tile::Tile;
use crate::protocol::PlayError;

/// Tiles held by a player at the start of a turn.
pub const HAND_SIZE: usize = 6;

/// Ordered tiles held by one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: SmallVec<[Tile; HAND_SIZE]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_tiles(tiles: &[Tile]) -> Self {
        Self {
            tiles: SmallVec::from_slice(tiles),
        }
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    pub fn extend(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.tiles.extend(tiles);
    }

    /// True if every tile of `wanted` is held, counting duplicates.
    #[must_use]
    pub fn contains_all(&self, wanted: &[Tile]) -> bool {
        let mut pool: SmallVec<[Tile; HAND_SIZE]> = self.tiles.clone();
        wanted.iter().all(|t| match pool.iter().position(|held| held == t) {
            Some(i) => {
                pool.swap_remove(i);
                true
            }
            None => false,
        })
    }

    /// Remove the given tiles (as a multiset).
    ///
    /// Either every tile is removed or, if any is missing, the hand is left
    /// untouched and `TilesUnowned` is returned.
    pub fn remove_all(&mut self, tiles: &[Tile]) -> Result<(), PlayError> {
        if !self.contains_all(tiles) {
            return Err(PlayError::TilesUnowned);
        }
        for t in tiles {
            if let Some(i) = self.tiles.iter().position(|held| held == t) {
                self.tiles.remove(i);
            }
        }
        Ok(())
    }

    /// Draw from `bag` until the hand holds `target` tiles or the bag runs out.
    ///
    /// Returns the number of tiles drawn.
    pub fn refill_from(&mut self, bag: &mut TileBag, target: usize) -> usize {
        let missing = target.saturating_sub(self.len());
        let drawn = bag.draw(missing);
        let count = drawn.len();
        self.extend(drawn);
        count
    }
}
