//! Error classification for the wire protocol.
//!
//! Every failure a remote peer can observe is first normalized to exactly one
//! [`ProtocolError`]. Domain errors stay rich inside the crate (`SearchError`,
//! `PlayError`, codec and tile errors); crossing the network boundary they are
//! converted into a [`QwirkleError`], whose only payload is the code.
//!
//! Add new categories to [`ProtocolError`] here; never send ad-hoc strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{DuplicateCell, PlayerId};
use crate::tiles::TileCodeError;

/// Closed set of error categories the protocol can carry.
///
/// On the wire each category travels as its ordinal ([`ProtocolError::code`]);
/// in text form as its SCREAMING_SNAKE name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtocolError {
    /// Message could not be parsed.
    InvalidCommand,
    /// Message parsed but an argument is out of range (e.g. a tile code).
    InvalidParameter,
    /// Player name does not meet the naming rules.
    NameInvalid,
    /// Player name already taken.
    NameUsed,
    /// Requested game queue does not exist.
    QueueInvalid,
    /// Move rejected by the board.
    MoveInvalid,
    /// Move uses tiles the player does not hold.
    MoveTilesUnowned,
    /// Not enough tiles left in the bag.
    DeckEmpty,
    /// Player acted out of turn.
    NotTurn,
    /// Request is not valid in the current game state.
    IllegalState,
}

impl ProtocolError {
    /// All categories in wire order.
    pub const ALL: [ProtocolError; 10] = [
        ProtocolError::InvalidCommand,
        ProtocolError::InvalidParameter,
        ProtocolError::NameInvalid,
        ProtocolError::NameUsed,
        ProtocolError::QueueInvalid,
        ProtocolError::MoveInvalid,
        ProtocolError::MoveTilesUnowned,
        ProtocolError::DeckEmpty,
        ProtocolError::NotTurn,
        ProtocolError::IllegalState,
    ];

    /// Numeric wire code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Category for a numeric wire code.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Canonical text name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ProtocolError::InvalidCommand => "INVALID_COMMAND",
            ProtocolError::InvalidParameter => "INVALID_PARAMETER",
            ProtocolError::NameInvalid => "NAME_INVALID",
            ProtocolError::NameUsed => "NAME_USED",
            ProtocolError::QueueInvalid => "QUEUE_INVALID",
            ProtocolError::MoveInvalid => "MOVE_INVALID",
            ProtocolError::MoveTilesUnowned => "MOVE_TILES_UNOWNED",
            ProtocolError::DeckEmpty => "DECK_EMPTY",
            ProtocolError::NotTurn => "NOT_TURN",
            ProtocolError::IllegalState => "ILLEGAL_STATE",
        }
    }
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProtocolError {
    type Err = ProtocolError;

    /// Unknown names are themselves a malformed message.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or(ProtocolError::InvalidCommand)
    }
}

/// A failure normalized for the wire: carries one [`ProtocolError`] and nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("{error}")]
pub struct QwirkleError {
    error: ProtocolError,
}

impl QwirkleError {
    #[must_use]
    pub const fn new(error: ProtocolError) -> Self {
        Self { error }
    }

    #[must_use]
    pub const fn error(self) -> ProtocolError {
        self.error
    }
}

impl From<ProtocolError> for QwirkleError {
    fn from(error: ProtocolError) -> Self {
        Self::new(error)
    }
}

/// Maps a domain failure onto its protocol category.
pub trait Classify {
    fn protocol_error(&self) -> ProtocolError;
}

/// The automated search could not produce a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    /// No tile of the hand validates on any searched cell.
    #[error("no legal single-tile placement for {hand_size} tiles over {cells} cells")]
    NoCandidate { hand_size: usize, cells: usize },
    /// Nothing to place or trade.
    #[error("hand is empty")]
    EmptyHand,
}

/// A turn could not be decided or applied.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("move rejected by the board")]
    Rejected,
    #[error(transparent)]
    DuplicateCell(#[from] DuplicateCell),
    #[error("move uses tiles not in hand")]
    TilesUnowned,
    #[error("trade offers no tiles")]
    EmptyTrade,
    #[error("trade of {requested} tiles but only {available} left in the bag")]
    BagTooSmall { requested: usize, available: usize },
    #[error("{actual} acted during the turn of {expected}")]
    NotTurn { expected: PlayerId, actual: PlayerId },
    #[error("user interface closed")]
    InterfaceClosed,
    #[error("user interface answered a different question")]
    UnexpectedDecision,
    #[error("game is over")]
    GameOver,
    #[error(transparent)]
    Tile(#[from] TileCodeError),
}

impl Classify for TileCodeError {
    fn protocol_error(&self) -> ProtocolError {
        ProtocolError::InvalidParameter
    }
}

impl Classify for DuplicateCell {
    fn protocol_error(&self) -> ProtocolError {
        ProtocolError::MoveInvalid
    }
}

impl Classify for SearchError {
    fn protocol_error(&self) -> ProtocolError {
        match self {
            SearchError::NoCandidate { .. } => ProtocolError::MoveInvalid,
            SearchError::EmptyHand => ProtocolError::IllegalState,
        }
    }
}

impl Classify for PlayError {
    fn protocol_error(&self) -> ProtocolError {
        match self {
            PlayError::Search(e) => e.protocol_error(),
            PlayError::Rejected => ProtocolError::MoveInvalid,
            PlayError::DuplicateCell(e) => e.protocol_error(),
            PlayError::TilesUnowned => ProtocolError::MoveTilesUnowned,
            PlayError::EmptyTrade => ProtocolError::MoveInvalid,
            PlayError::BagTooSmall { .. } => ProtocolError::DeckEmpty,
            PlayError::NotTurn { .. } => ProtocolError::NotTurn,
            PlayError::InterfaceClosed | PlayError::GameOver => ProtocolError::IllegalState,
            PlayError::UnexpectedDecision => ProtocolError::InvalidCommand,
            PlayError::Tile(e) => e.protocol_error(),
        }
    }
}

impl From<TileCodeError> for QwirkleError {
    fn from(e: TileCodeError) -> Self {
        Self::new(e.protocol_error())
    }
}

impl From<DuplicateCell> for QwirkleError {
    fn from(e: DuplicateCell) -> Self {
        Self::new(e.protocol_error())
    }
}

impl From<SearchError> for QwirkleError {
    fn from(e: SearchError) -> Self {
        Self::new(e.protocol_error())
    }
}

impl From<PlayError> for QwirkleError {
    fn from(e: PlayError) -> Self {
        Self::new(e.protocol_error())
    }
}
