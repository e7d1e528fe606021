//! The draw bag.

use tracing::debug;

use super::tile::{Tile, TILE_KINDS};
use crate::core::GameRng;
use crate::protocol::PlayError;

/// Copies of each tile in a standard set.
pub const DEFAULT_COPIES: usize = 3;

/// Shuffled tiles not yet drawn.
#[derive(Clone, Debug)]
pub struct TileBag {
    tiles: Vec<Tile>,
    rng: GameRng,
}

impl TileBag {
    /// A shuffled bag holding `copies` of each of the 36 tiles.
    #[must_use]
    pub fn full(copies: usize, rng: GameRng) -> Self {
        let mut tiles = Vec::with_capacity(copies * TILE_KINDS);
        for _ in 0..copies {
            tiles.extend(Tile::all());
        }
        Self::from_tiles(tiles, rng)
    }

    /// A shuffled bag with exactly these tiles.
    #[must_use]
    pub fn from_tiles(mut tiles: Vec<Tile>, mut rng: GameRng) -> Self {
        rng.shuffle(&mut tiles);
        Self { tiles, rng }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Draw up to `count` tiles; fewer if the bag runs out.
    pub fn draw(&mut self, count: usize) -> Vec<Tile> {
        let keep = self.tiles.len().saturating_sub(count);
        self.tiles.split_off(keep)
    }

    /// Swap `offered` for the same number of fresh tiles.
    ///
    /// New tiles are drawn before the offered ones go back in, so a player
    /// never draws back what they traded away.
    pub fn exchange(&mut self, offered: &[Tile]) -> Result<Vec<Tile>, PlayError> {
        if offered.is_empty() {
            return Err(PlayError::EmptyTrade);
        }
        if offered.len() > self.tiles.len() {
            return Err(PlayError::BagTooSmall {
                requested: offered.len(),
                available: self.tiles.len(),
            });
        }
        let drawn = self.draw(offered.len());
        self.tiles.extend_from_slice(offered);
        self.rng.shuffle(&mut self.tiles);
        debug!(traded = offered.len(), remaining = self.tiles.len(), "bag exchange");
        Ok(drawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::{Color, Shape};

    #[test]
    fn test_full_bag_contents() {
        let mut bag = TileBag::full(DEFAULT_COPIES, GameRng::new(5));
        assert_eq!(bag.len(), 108);

        let mut all = bag.draw(200);
        assert_eq!(all.len(), 108);
        assert!(bag.is_empty());

        all.sort_unstable();
        let red_squares = all
            .iter()
            .filter(|t| **t == Tile::new(Shape::Square, Color::Red))
            .count();
        assert_eq!(red_squares, 3);
    }

    #[test]
    fn test_same_seed_same_order() {
        let mut a = TileBag::full(1, GameRng::new(11));
        let mut b = TileBag::full(1, GameRng::new(11));
        assert_eq!(a.draw(36), b.draw(36));
    }

    #[test]
    fn test_exchange_keeps_size() {
        let mut bag = TileBag::full(1, GameRng::new(2));
        let offered = [Tile::new(Shape::Cross, Color::Cyan), Tile::new(Shape::Club, Color::Blue)];

        let drawn = bag.exchange(&offered).unwrap();
        assert_eq!(drawn.len(), 2);
        assert_eq!(bag.len(), 36);
    }

    #[test]
    fn test_exchange_needs_enough_tiles() {
        let mut bag = TileBag::from_tiles(vec![Tile::new(Shape::Cross, Color::Cyan)], GameRng::new(2));
        let offered = [Tile::new(Shape::Square, Color::Red), Tile::new(Shape::Circle, Color::Red)];

        assert_eq!(
            bag.exchange(&offered),
            Err(PlayError::BagTooSmall { requested: 2, available: 1 })
        );
        assert_eq!(bag.len(), 1);
        assert_eq!(bag.exchange(&[]), Err(PlayError::EmptyTrade));
    }
}
