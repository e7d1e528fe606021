//! Turn orchestration.
//!
//! - `play_turn`: ask one player for a move, fall back to a trade when a put
//!   search finds nothing, validate, apply
//! - `Table`: seats, hands, board, and bag for a whole game

pub mod turn;
pub mod table;

pub use turn::{apply_move, play_turn, TurnOutcome, TurnRecord, TurnState};
pub use table::Table;
