//! Players: the shared turn contract and its two variants.
//!
//! - `HumanPlayer`: forwards every decision to a `UserInterface`
//! - `ComputerPlayer`: always puts, choosing a random legal single tile
//!
//! The orchestrator holds `Box<dyn Player>` and never branches on the variant.

pub mod config;
pub mod search;
pub mod human;
pub mod computer;

pub use config::AgentConfig;
pub use computer::ComputerPlayer;
pub use human::{ChannelInterface, Decision, HumanPlayer, UserInterface};
pub use search::{choose_put, choose_trade, put_candidates};

use crate::board::GameController;
use crate::core::{MoveType, PlayerInfo, PutMove, TradeMove};
use crate::protocol::PlayError;
use crate::tiles::Tile;

/// What a player may look at while deciding.
#[derive(Clone, Copy)]
pub struct Turn<'a> {
    /// The player being asked.
    pub player: &'a PlayerInfo,
    /// Their hand, read-only.
    pub hand: &'a [Tile],
    /// Source of board snapshots.
    pub controller: &'a dyn GameController,
}

impl<'a> Turn<'a> {
    pub fn new(player: &'a PlayerInfo, hand: &'a [Tile], controller: &'a dyn GameController) -> Self {
        Self {
            player,
            hand,
            controller,
        }
    }
}

/// Turn contract shared by every player variant.
///
/// The orchestrator first asks for a [`MoveType`], then for the matching
/// payload. It may also request a trade on its own, e.g. after a put search
/// found nothing.
pub trait Player: Send {
    /// Display name.
    fn name(&self) -> &str;

    fn decide_move_type(&mut self, turn: &Turn<'_>) -> Result<MoveType, PlayError>;

    /// Non-empty subset of the hand to exchange.
    fn compute_trade_move(&mut self, turn: &Turn<'_>) -> Result<TradeMove, PlayError>;

    fn compute_put_move(&mut self, turn: &Turn<'_>) -> Result<PutMove, PlayError>;
}
