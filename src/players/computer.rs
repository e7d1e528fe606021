//! Computer player that places a random legal tile.

use tracing::debug;

use super::config::AgentConfig;
use super::search::{choose_put, choose_trade};
use super::{Player, Turn};
use crate::core::{GameRng, MoveType, PutMove, TradeMove};
use crate::protocol::PlayError;

/// Automated player.
///
/// Always asks to put. When no single tile fits anywhere it reports
/// `SearchError::NoCandidate` and leaves it to the orchestrator to fall back
/// to [`Player::compute_trade_move`].
#[derive(Clone, Debug)]
pub struct ComputerPlayer {
    name: String,
    config: AgentConfig,
    rng: GameRng,
}

impl ComputerPlayer {
    pub fn new(name: impl Into<String>, config: AgentConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_rng(name, config, rng)
    }

    /// Use an explicit RNG, e.g. one forked from the table's master RNG.
    pub fn with_rng(name: impl Into<String>, config: AgentConfig, rng: GameRng) -> Self {
        Self {
            name: name.into(),
            config,
            rng,
        }
    }

    #[must_use]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }
}

impl Player for ComputerPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide_move_type(&mut self, _turn: &Turn<'_>) -> Result<MoveType, PlayError> {
        Ok(MoveType::Put)
    }

    fn compute_trade_move(&mut self, turn: &Turn<'_>) -> Result<TradeMove, PlayError> {
        Ok(choose_trade(turn.hand, &mut self.rng)?)
    }

    fn compute_put_move(&mut self, turn: &Turn<'_>) -> Result<PutMove, PlayError> {
        let board = turn.controller.board_copy();
        let mv = choose_put(turn.hand, &board, self.config.search_margin, &mut self.rng)?;
        debug!(player = %turn.player, placements = ?mv.sorted(), "computer put");
        Ok(mv)
    }
}
