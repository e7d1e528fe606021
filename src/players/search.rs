//! Move search for the computer player.
//!
//! The search is deliberately myopic: it only ever proposes single-tile
//! placements and treats every legal one as equally good.
//!
//! ## Put moves
//!
//! For each tile in hand, every cell of the board's bounding rectangle grown
//! by `margin` (1 by default) is tried as `{cell -> tile}`. Candidates the
//! snapshot validates are collected and one is picked uniformly at random.
//! Growing the rectangle reaches every cell next to a placed tile, and on an
//! empty board the ring around the origin.
//!
//! ## Trade moves
//!
//! A size `k` is drawn uniformly from `1..=|hand|`, then `k` distinct hand
//! positions are sampled uniformly. The hand itself is only read.
//!
//! Both functions are pure apart from the RNG they are given.

use tracing::debug;

use crate::board::BoardSnapshot;
use crate::core::{GameRng, PutMove, TradeMove};
use crate::protocol::SearchError;
use crate::tiles::Tile;

/// Every legal single-tile placement of `hand` on `board`.
///
/// Tiles held twice yield their candidates twice, so they are twice as
/// likely to be picked.
#[must_use]
pub fn put_candidates(hand: &[Tile], board: &BoardSnapshot, margin: i32) -> Vec<PutMove> {
    let boundaries = board.boundaries();
    let area = boundaries.grown(margin);
    debug!(
        top = boundaries.top,
        right = boundaries.right,
        bottom = boundaries.bottom,
        left = boundaries.left,
        "searching placements"
    );

    hand.iter()
        .flat_map(|&tile| area.cells().map(move |cell| PutMove::single(cell, tile)))
        .filter(|candidate| board.validate_move(candidate))
        .collect()
}

/// Pick one legal single-tile placement uniformly at random.
///
/// Fails with `EmptyHand` if there is nothing to place and with
/// `NoCandidate` if no tile fits anywhere in the searched area.
pub fn choose_put(
    hand: &[Tile],
    board: &BoardSnapshot,
    margin: i32,
    rng: &mut GameRng,
) -> Result<PutMove, SearchError> {
    if hand.is_empty() {
        return Err(SearchError::EmptyHand);
    }

    let candidates = put_candidates(hand, board, margin);
    debug!(candidates = candidates.len(), "put candidates");

    rng.choose(&candidates)
        .cloned()
        .ok_or_else(|| SearchError::NoCandidate {
            hand_size: hand.len(),
            cells: board.boundaries().grown(margin).area(),
        })
}

/// Pick a random non-empty subset of `hand` to trade.
pub fn choose_trade(hand: &[Tile], rng: &mut GameRng) -> Result<TradeMove, SearchError> {
    if hand.is_empty() {
        return Err(SearchError::EmptyHand);
    }

    let size = rng.between(1, hand.len());
    let trade: TradeMove = rng
        .sample_indices(hand.len(), size)
        .into_iter()
        .map(|i| hand[i])
        .collect();

    debug!(size, hand = hand.len(), "trade chosen");
    Ok(trade)
}
