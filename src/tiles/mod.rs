//! Tiles: identity and wire encoding, hands, and the draw bag.

pub mod tile;
pub mod hand;
pub mod bag;

pub use tile::{Color, Shape, Tile, TileCodeError, COLOR_COUNT, SHAPE_COUNT, TILE_KINDS};
pub use hand::{Hand, HAND_SIZE};
pub use bag::{TileBag, DEFAULT_COPIES};
