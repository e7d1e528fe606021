//! Deciding and applying one turn.
//!
//! The orchestrator asks the player for a move type, then for the payload,
//! checks it against a fresh board snapshot and the player's hand, and applies
//! it. When a put search finds no legal placement the turn falls back to a
//! trade, as long as the bag has tiles to trade for. That trade is cut down
//! to the number of tiles left in the bag.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::board::Board;
use crate::core::{Move, MoveType, PlayerId, PlayerInfo, PutMove, TradeMove};
use crate::players::{Player, Turn};
use crate::protocol::{PlayError, SearchError};
use crate::tiles::{Hand, TileBag};

/// What a completed turn did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Tiles placed on the board.
    Placed(PutMove),
    /// Tiles exchanged with the bag.
    Traded(TradeMove),
}

impl TurnOutcome {
    #[must_use]
    pub fn move_type(&self) -> MoveType {
        match self {
            TurnOutcome::Placed(_) => MoveType::Put,
            TurnOutcome::Traded(_) => MoveType::Trade,
        }
    }
}

/// A completed turn, for history and replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub player: PlayerId,
    /// Turn number, starting at 1.
    pub turn: u32,
    pub outcome: TurnOutcome,
}

/// Mutable state a turn is applied to.
pub struct TurnState<'a> {
    pub hand: &'a mut Hand,
    pub board: &'a mut Board,
    pub bag: &'a mut TileBag,
    /// Hand size to refill to after the move.
    pub hand_size: usize,
}

/// Ask `player` for a move and apply it.
///
/// Nothing is changed if the player's decision fails or is rejected.
pub fn play_turn(
    player: &mut dyn Player,
    seat: &PlayerInfo,
    state: TurnState<'_>,
) -> Result<TurnOutcome, PlayError> {
    let move_type = player.decide_move_type(&Turn::new(seat, state.hand.tiles(), &*state.board))?;

    let mv = match move_type {
        MoveType::Put => {
            let attempt = player.compute_put_move(&Turn::new(seat, state.hand.tiles(), &*state.board));
            match attempt {
                Ok(mv) => Move::Put(mv),
                Err(PlayError::Search(e @ SearchError::NoCandidate { .. })) if !state.bag.is_empty() => {
                    warn!(player = %seat, reason = %e, "no placement found, trading instead");
                    let mut trade =
                        player.compute_trade_move(&Turn::new(seat, state.hand.tiles(), &*state.board))?;
                    // The fallback must stay legal when the bag is nearly empty.
                    trade.tiles.truncate(state.bag.len());
                    Move::Trade(trade)
                }
                Err(e) => return Err(e),
            }
        }
        MoveType::Trade => {
            Move::Trade(player.compute_trade_move(&Turn::new(seat, state.hand.tiles(), &*state.board))?)
        }
    };

    apply_move(seat, mv, state)
}

/// Check a move against the hand, bag, and board, then apply it.
///
/// Used directly for moves that arrive decoded from a remote peer.
pub fn apply_move(seat: &PlayerInfo, mv: Move, state: TurnState<'_>) -> Result<TurnOutcome, PlayError> {
    let TurnState {
        hand,
        board,
        bag,
        hand_size,
    } = state;

    match mv {
        Move::Put(put) => {
            let tiles = put.tiles();
            if !hand.contains_all(&tiles) {
                return Err(PlayError::TilesUnowned);
            }
            board.apply(&put)?;
            hand.remove_all(&tiles)?;
            let drawn = hand.refill_from(bag, hand_size);
            info!(player = %seat, placed = put.len(), drawn, "put applied");
            Ok(TurnOutcome::Placed(put))
        }
        Move::Trade(trade) => {
            if trade.is_empty() {
                return Err(PlayError::EmptyTrade);
            }
            if !hand.contains_all(&trade.tiles) {
                return Err(PlayError::TilesUnowned);
            }
            let drawn = bag.exchange(&trade.tiles)?;
            hand.remove_all(&trade.tiles)?;
            hand.extend(drawn);
            info!(player = %seat, traded = trade.len(), "trade applied");
            Ok(TurnOutcome::Traded(trade))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardSnapshot, Coordinate};
    use crate::core::GameRng;
    use crate::players::{AgentConfig, ComputerPlayer};
    use crate::rules::ConnectedPlacement;
    use crate::tiles::{Color, Shape, Tile};
    use std::sync::Arc;

    fn seat() -> PlayerInfo {
        PlayerInfo::new(PlayerId::new(0), "bot")
    }

    fn tile(shape: Shape) -> Tile {
        Tile::new(shape, Color::Magenta)
    }

    #[test]
    fn test_computer_places_on_empty_board() {
        let mut board = Board::new(Arc::new(ConnectedPlacement));
        let mut bag = TileBag::full(1, GameRng::new(3));
        let mut hand = Hand::from_tiles(&[tile(Shape::Club)]);
        let mut bot = ComputerPlayer::new("bot", AgentConfig::default().with_seed(3));

        let outcome = play_turn(
            &mut bot,
            &seat(),
            TurnState {
                hand: &mut hand,
                board: &mut board,
                bag: &mut bag,
                hand_size: 6,
            },
        )
        .unwrap();

        assert_eq!(
            outcome,
            TurnOutcome::Placed(PutMove::single(Coordinate::ORIGIN, tile(Shape::Club)))
        );
        assert_eq!(hand.len(), 6);
        assert_eq!(bag.len(), 30);
        assert_eq!(board.snapshot().len(), 1);
    }

    #[test]
    fn test_no_candidate_falls_back_to_trade() {
        let mut board = Board::new(Arc::new(|_: &BoardSnapshot, _: &PutMove| false));
        let mut bag = TileBag::full(1, GameRng::new(3));
        let mut hand = Hand::from_tiles(&[tile(Shape::Club), tile(Shape::Cross)]);
        let mut bot = ComputerPlayer::new("bot", AgentConfig::default().with_seed(3));

        let outcome = play_turn(
            &mut bot,
            &seat(),
            TurnState {
                hand: &mut hand,
                board: &mut board,
                bag: &mut bag,
                hand_size: 6,
            },
        )
        .unwrap();

        assert_eq!(outcome.move_type(), MoveType::Trade);
        assert_eq!(hand.len(), 2);
        assert_eq!(bag.len(), 36);
    }

    #[test]
    fn test_fallback_trade_fits_a_nearly_empty_bag() {
        let hand_tiles = [
            tile(Shape::Square),
            tile(Shape::Circle),
            tile(Shape::Diamond),
            tile(Shape::Club),
            tile(Shape::Starburst),
            tile(Shape::Cross),
        ];

        for seed in 0..40 {
            let mut board = Board::new(Arc::new(|_: &BoardSnapshot, _: &PutMove| false));
            let last = Tile::new(Shape::Square, Color::Blue);
            let mut bag = TileBag::from_tiles(vec![last], GameRng::new(seed));
            let mut hand = Hand::from_tiles(&hand_tiles);
            let mut bot = ComputerPlayer::new("bot", AgentConfig::default().with_seed(seed));

            let outcome = play_turn(
                &mut bot,
                &seat(),
                TurnState {
                    hand: &mut hand,
                    board: &mut board,
                    bag: &mut bag,
                    hand_size: 6,
                },
            )
            .unwrap();

            let TurnOutcome::Traded(trade) = outcome else {
                panic!("expected a trade, got {outcome:?}");
            };
            assert_eq!(trade.len(), 1);
            assert_eq!(hand.len(), 6);
            assert!(hand.tiles().contains(&last));
            assert_eq!(bag.len(), 1);
        }
    }

    #[test]
    fn test_no_candidate_with_empty_bag_is_reported() {
        let mut board = Board::new(Arc::new(|_: &BoardSnapshot, _: &PutMove| false));
        let mut bag = TileBag::from_tiles(Vec::new(), GameRng::new(3));
        let mut hand = Hand::from_tiles(&[tile(Shape::Club)]);
        let mut bot = ComputerPlayer::new("bot", AgentConfig::default().with_seed(3));

        let err = play_turn(
            &mut bot,
            &seat(),
            TurnState {
                hand: &mut hand,
                board: &mut board,
                bag: &mut bag,
                hand_size: 6,
            },
        )
        .unwrap_err();

        assert!(matches!(err, PlayError::Search(SearchError::NoCandidate { .. })));
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn test_apply_rejects_unowned_tiles() {
        let mut board = Board::new(Arc::new(ConnectedPlacement));
        let mut bag = TileBag::full(1, GameRng::new(3));
        let mut hand = Hand::from_tiles(&[tile(Shape::Club)]);

        let mv = Move::Put(PutMove::single(Coordinate::ORIGIN, tile(Shape::Cross)));
        let err = apply_move(
            &seat(),
            mv,
            TurnState {
                hand: &mut hand,
                board: &mut board,
                bag: &mut bag,
                hand_size: 6,
            },
        );

        assert_eq!(err, Err(PlayError::TilesUnowned));
        assert!(board.snapshot().is_empty());
    }

    #[test]
    fn test_apply_rejects_illegal_put_without_touching_hand() {
        let mut board = Board::new(Arc::new(ConnectedPlacement));
        let mut bag = TileBag::full(1, GameRng::new(3));
        let mut hand = Hand::from_tiles(&[tile(Shape::Club)]);

        let mv = Move::Put(PutMove::single(Coordinate::new(3, 3), tile(Shape::Club)));
        let err = apply_move(
            &seat(),
            mv,
            TurnState {
                hand: &mut hand,
                board: &mut board,
                bag: &mut bag,
                hand_size: 6,
            },
        );

        assert_eq!(err, Err(PlayError::Rejected));
        assert_eq!(hand.tiles(), &[tile(Shape::Club)]);
        assert_eq!(bag.len(), 36);
    }

    #[test]
    fn test_apply_trade_checks_bag() {
        let mut board = Board::new(Arc::new(ConnectedPlacement));
        let mut bag = TileBag::from_tiles(vec![tile(Shape::Square)], GameRng::new(3));
        let mut hand = Hand::from_tiles(&[tile(Shape::Club), tile(Shape::Cross)]);

        let mv = Move::Trade(TradeMove::new(&[tile(Shape::Club), tile(Shape::Cross)]));
        let err = apply_move(
            &seat(),
            mv,
            TurnState {
                hand: &mut hand,
                board: &mut board,
                bag: &mut bag,
                hand_size: 6,
            },
        );

        assert_eq!(err, Err(PlayError::BagTooSmall { requested: 2, available: 1 }));
        assert_eq!(hand.len(), 2);
    }
}
