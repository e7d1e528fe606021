//! # qwirkle-player
//!
//! Player and move-search subsystem for a networked Qwirkle-style tile game.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not live state**: players read an immutable
//!    `BoardSnapshot`, copied in O(1) through persistent `im` maps.
//!
//! 2. **One player contract**: humans and computer players implement the same
//!    `Player` trait; the orchestrator never branches on which it holds.
//!
//! 3. **Closed error set**: every failure a peer can see is classified into a
//!    single `ProtocolError` before it leaves the crate.
//!
//! ## Modules
//!
//! - `core`: player ids, moves, RNG, configuration
//! - `tiles`: tile identity and wire codes, hands, the bag
//! - `board`: cells, bounding rectangles, snapshots, the live board
//! - `rules`: pluggable placement validation
//! - `players`: player trait, human delegation, computer move search
//! - `protocol`: error classification and payload codecs
//! - `game`: turn orchestration and the table loop

pub mod core;
pub mod tiles;
pub mod board;
pub mod rules;
pub mod players;
pub mod protocol;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, GameRngState, Move, MoveType, Placement, PlayerId, PlayerInfo, SeatMap,
    PutMove, TradeMove,
};

pub use crate::tiles::{Color, Hand, Shape, Tile, TileBag, TileCodeError};

pub use crate::board::{Board, BoardSnapshot, Boundaries, Coordinate, GameController, SharedBoard};

pub use crate::rules::{ConnectedPlacement, MatchingPlacement, PlacementRules};

pub use crate::players::{
    AgentConfig, ChannelInterface, ComputerPlayer, Decision, HumanPlayer, Player, Turn, UserInterface,
};

pub use crate::protocol::{Classify, CodecError, PlayError, ProtocolError, QwirkleError, Reply, SearchError};

pub use crate::game::{Table, TurnOutcome, TurnRecord};
