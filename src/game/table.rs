//! A table of players sharing one board and one bag.

use std::sync::Arc;

use tracing::{debug, info};

use super::turn::{apply_move, play_turn, TurnOutcome, TurnRecord, TurnState};
use crate::board::Board;
use crate::core::{GameConfig, GameRng, Move, PlayerId, PlayerInfo, SeatMap};
use crate::players::Player;
use crate::protocol::{PlayError, QwirkleError};
use crate::rules::PlacementRules;
use crate::tiles::{Hand, TileBag};

/// Turn-by-turn game loop.
///
/// Errors leave the active player unchanged, so the same player is asked again.
///
/// ```
/// use std::sync::Arc;
/// use qwirkle_player::core::GameConfig;
/// use qwirkle_player::game::Table;
/// use qwirkle_player::players::{AgentConfig, ComputerPlayer, Player};
/// use qwirkle_player::rules::ConnectedPlacement;
///
/// let players: Vec<Box<dyn Player>> = vec![
///     Box::new(ComputerPlayer::new("a", AgentConfig::default().with_seed(1))),
///     Box::new(ComputerPlayer::new("b", AgentConfig::default().with_seed(2))),
/// ];
/// let mut table = Table::new(GameConfig::default(), Arc::new(ConnectedPlacement), players);
///
/// let record = table.play_turn().unwrap();
/// assert_eq!(record.turn, 1);
/// ```
pub struct Table {
    config: GameConfig,
    seats: Vec<PlayerInfo>,
    players: Vec<Box<dyn Player>>,
    hands: SeatMap<Hand>,
    board: Board,
    bag: TileBag,
    active: PlayerId,
    history: Vec<TurnRecord>,
}

impl Table {
    /// Seat the players in order and deal every hand.
    pub fn new(
        config: GameConfig,
        rules: Arc<dyn PlacementRules>,
        players: Vec<Box<dyn Player>>,
    ) -> Self {
        assert_eq!(
            players.len(),
            config.player_count,
            "Player list must match the configured player count"
        );

        let mut rng = GameRng::new(config.seed);
        let mut bag = TileBag::full(config.copies_per_tile, rng.fork());

        let seats = players
            .iter()
            .enumerate()
            .map(|(i, p)| PlayerInfo::new(PlayerId::new(i as u8), p.name()))
            .collect();

        let mut hands: SeatMap<Hand> = SeatMap::with_default(config.player_count);
        for player in PlayerId::all(config.player_count) {
            hands[player].refill_from(&mut bag, config.hand_size);
        }
        debug!(players = config.player_count, bag = bag.len(), "table dealt");

        Self {
            config,
            seats,
            players,
            hands,
            board: Board::new(rules),
            bag,
            active: PlayerId::new(0),
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn seat(&self, player: PlayerId) -> &PlayerInfo {
        &self.seats[player.index()]
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn bag_len(&self) -> usize {
        self.bag.len()
    }

    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// The bag is empty and some player has played out their hand.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.bag.is_empty() && self.hands.iter().any(|(_, hand)| hand.is_empty())
    }

    /// Let the active player take their turn.
    pub fn play_turn(&mut self) -> Result<TurnRecord, QwirkleError> {
        if self.is_over() {
            return Err(PlayError::GameOver.into());
        }
        let active = self.active;
        let Self {
            config,
            seats,
            players,
            hands,
            board,
            bag,
            ..
        } = self;
        let state = TurnState {
            hand: &mut hands[active],
            board,
            bag,
            hand_size: config.hand_size,
        };
        let outcome = play_turn(players[active.index()].as_mut(), &seats[active.index()], state)?;
        Ok(self.finish_turn(active, outcome))
    }

    /// Apply a move received from `player` over the wire.
    pub fn submit(&mut self, player: PlayerId, mv: Move) -> Result<TurnRecord, QwirkleError> {
        if self.is_over() {
            return Err(PlayError::GameOver.into());
        }
        if player != self.active {
            return Err(PlayError::NotTurn {
                expected: self.active,
                actual: player,
            }
            .into());
        }
        let state = TurnState {
            hand: &mut self.hands[player],
            board: &mut self.board,
            bag: &mut self.bag,
            hand_size: self.config.hand_size,
        };
        let outcome = apply_move(&self.seats[player.index()], mv, state)?;
        Ok(self.finish_turn(player, outcome))
    }

    fn finish_turn(&mut self, player: PlayerId, outcome: TurnOutcome) -> TurnRecord {
        let record = TurnRecord {
            player,
            turn: self.history.len() as u32 + 1,
            outcome,
        };
        self.history.push(record.clone());
        self.active = player.next(self.config.player_count);
        info!(turn = record.turn, player = %player, kind = %record.outcome.move_type(), "turn complete");
        record
    }
}
