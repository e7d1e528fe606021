//! Core types: players, moves, RNG, configuration.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;

pub use player::{PlayerId, PlayerInfo, SeatMap};
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
pub use action::{DuplicateCell, Move, MoveType, Placement, PutMove, TradeMove};
