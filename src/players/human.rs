//! Human player: every decision comes from a user interface.

use std::sync::mpsc::{self, Receiver, Sender};

use super::{Player, Turn};
use crate::core::{MoveType, PutMove, TradeMove};
use crate::protocol::PlayError;

/// Where a human's decisions come from.
///
/// Each call blocks until the person (or the remote peer speaking for them)
/// has decided. The turn identifies the requesting player and their hand.
pub trait UserInterface: Send {
    fn get_move_type(&mut self, turn: &Turn<'_>) -> Result<MoveType, PlayError>;

    fn get_trade_move(&mut self, turn: &Turn<'_>) -> Result<TradeMove, PlayError>;

    fn get_put_move(&mut self, turn: &Turn<'_>) -> Result<PutMove, PlayError>;
}

/// Player whose decisions are delegated unchanged to a [`UserInterface`].
#[derive(Debug)]
pub struct HumanPlayer<U> {
    name: String,
    ui: U,
}

impl<U: UserInterface> HumanPlayer<U> {
    pub fn new(name: impl Into<String>, ui: U) -> Self {
        Self {
            name: name.into(),
            ui,
        }
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }
}

impl<U: UserInterface> Player for HumanPlayer<U> {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide_move_type(&mut self, turn: &Turn<'_>) -> Result<MoveType, PlayError> {
        self.ui.get_move_type(turn)
    }

    fn compute_trade_move(&mut self, turn: &Turn<'_>) -> Result<TradeMove, PlayError> {
        self.ui.get_trade_move(turn)
    }

    fn compute_put_move(&mut self, turn: &Turn<'_>) -> Result<PutMove, PlayError> {
        self.ui.get_put_move(turn)
    }
}

/// One answer from the interactive side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    MoveType(MoveType),
    Trade(TradeMove),
    Put(PutMove),
}

/// [`UserInterface`] fed over a channel by an input or network thread.
#[derive(Debug)]
pub struct ChannelInterface {
    rx: Receiver<Decision>,
}

impl ChannelInterface {
    /// Create the interface and the sender the input side writes to.
    #[must_use]
    pub fn channel() -> (Sender<Decision>, Self) {
        let (tx, rx) = mpsc::channel();
        (tx, Self { rx })
    }

    fn next(&mut self) -> Result<Decision, PlayError> {
        self.rx.recv().map_err(|_| PlayError::InterfaceClosed)
    }
}

impl UserInterface for ChannelInterface {
    fn get_move_type(&mut self, _turn: &Turn<'_>) -> Result<MoveType, PlayError> {
        match self.next()? {
            Decision::MoveType(t) => Ok(t),
            _ => Err(PlayError::UnexpectedDecision),
        }
    }

    fn get_trade_move(&mut self, _turn: &Turn<'_>) -> Result<TradeMove, PlayError> {
        match self.next()? {
            Decision::Trade(mv) => Ok(mv),
            _ => Err(PlayError::UnexpectedDecision),
        }
    }

    fn get_put_move(&mut self, _turn: &Turn<'_>) -> Result<PutMove, PlayError> {
        match self.next()? {
            Decision::Put(mv) => Ok(mv),
            _ => Err(PlayError::UnexpectedDecision),
        }
    }
}
