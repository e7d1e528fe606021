//! Shared test setup.

#![allow(dead_code)]

use std::sync::Arc;

use qwirkle_player::board::{Board, BoardSnapshot, Coordinate};
use qwirkle_player::core::{PlayerId, PlayerInfo, PutMove};
use qwirkle_player::rules::PlacementRules;
use qwirkle_player::tiles::Tile;
use tracing_subscriber::{fmt, EnvFilter};

/// Install a test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

pub fn seat(id: u8, name: &str) -> PlayerInfo {
    PlayerInfo::new(PlayerId::new(id), name)
}

/// Rules that accept every move onto free cells.
pub fn anywhere() -> Arc<dyn PlacementRules> {
    Arc::new(|_: &BoardSnapshot, _: &PutMove| true)
}

/// Rules that reject everything.
pub fn nowhere() -> Arc<dyn PlacementRules> {
    Arc::new(|_: &BoardSnapshot, _: &PutMove| false)
}

/// Board with `tiles` already placed, bypassing validation.
pub fn board_with(rules: Arc<dyn PlacementRules>, tiles: &[(i32, i32, Tile)]) -> Board {
    Board::from_tiles(
        rules,
        tiles.iter().map(|&(x, y, tile)| (Coordinate::new(x, y), tile)),
    )
}
