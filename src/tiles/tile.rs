//! Tile identity and its integer wire encoding.
//!
//! A tile is a `(Shape, Color)` pair. Both enumerations have six values, so
//! there are 36 distinct tiles. On the wire a tile travels as
//!
//! ```text
//! code = color_index * 6 + shape_index        code ∈ [0, 36)
//! ```
//!
//! and decoding inverts this (`shape = code % 6`, `color = code / 6`).
//!
//! ```
//! use qwirkle_player::tiles::{Color, Shape, Tile};
//!
//! let tile = Tile::new(Shape::Diamond, Color::Green);
//! assert_eq!(tile.code(), 8);
//! assert_eq!(Tile::from_code(8), Some(tile));
//! assert_eq!(Tile::from_code(36), None);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of distinct shapes.
pub const SHAPE_COUNT: usize = 6;

/// Number of distinct colors.
pub const COLOR_COUNT: usize = 6;

/// Number of distinct tiles (and of valid wire codes).
pub const TILE_KINDS: usize = SHAPE_COUNT * COLOR_COUNT;

/// Shape printed on a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shape {
    Square,
    Circle,
    Diamond,
    Club,
    Starburst,
    Cross,
}

impl Shape {
    /// All shapes in wire order.
    pub const ALL: [Shape; SHAPE_COUNT] = [
        Shape::Square,
        Shape::Circle,
        Shape::Diamond,
        Shape::Club,
        Shape::Starburst,
        Shape::Cross,
    ];

    /// Position of this shape in the wire ordering.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Shape at `index`, if in range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Single ASCII letter used in terminal output (`A` for square ... `F` for cross).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Shape::Square => 'A',
            Shape::Circle => 'B',
            Shape::Diamond => 'C',
            Shape::Club => 'D',
            Shape::Starburst => 'E',
            Shape::Cross => 'F',
        }
    }
}

/// Color of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl Color {
    /// All colors in wire order.
    pub const ALL: [Color; COLOR_COUNT] = [
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
    ];

    /// Position of this color in the wire ordering.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color at `index`, if in range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// ANSI foreground color code (31 = red ... 36 = cyan).
    #[must_use]
    pub const fn ansi(self) -> u8 {
        31 + self as u8
    }
}

/// A tile code outside `[0, 36)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("tile code {code} is outside 0..{}", TILE_KINDS)]
pub struct TileCodeError {
    /// The rejected code.
    pub code: i64,
}

/// A game tile.
///
/// Tiles are plain values: two tiles built independently from the same shape
/// and color are equal and hash identically, so they can be used directly as
/// set or map elements.
///
/// Serializes as its wire code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Tile {
    shape: Shape,
    color: Color,
}

impl Tile {
    /// Create a tile.
    #[must_use]
    pub const fn new(shape: Shape, color: Color) -> Self {
        Self { shape, color }
    }

    #[must_use]
    pub const fn shape(self) -> Shape {
        self.shape
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Wire code of this tile, always in `[0, 36)`.
    #[must_use]
    pub const fn code(self) -> u8 {
        (self.color.index() * SHAPE_COUNT + self.shape.index()) as u8
    }

    /// Decode a wire code.
    ///
    /// Returns `None` for any code outside `[0, 36)`; there is no partial or
    /// default tile.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        let code = usize::try_from(code).ok().filter(|&c| c < TILE_KINDS)?;
        let shape = Shape::from_index(code % SHAPE_COUNT)?;
        let color = Color::from_index(code / SHAPE_COUNT)?;
        Some(Self::new(shape, color))
    }

    /// Iterate over all 36 tiles in code order.
    pub fn all() -> impl Iterator<Item = Tile> {
        Color::ALL
            .into_iter()
            .flat_map(|color| Shape::ALL.into_iter().map(move |shape| Tile::new(shape, color)))
    }

    /// True if the two tiles share a shape or a color but are not identical.
    #[must_use]
    pub fn matches(self, other: Tile) -> bool {
        self != other && (self.shape == other.shape || self.color == other.color)
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> Self {
        tile.code()
    }
}

impl TryFrom<i32> for Tile {
    type Error = TileCodeError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Tile::from_code(code).ok_or(TileCodeError { code: i64::from(code) })
    }
}

impl TryFrom<u8> for Tile {
    type Error = TileCodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Tile::try_from(i32::from(code))
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\u{1b}[0;{}m {} \u{1b}[m", self.color.ansi(), self.shape.letter())
    }
}
