//! Criterion benches for the computer player's placement search.
//!
//! Boards are grown by seeded self-play so each size is reproducible. The
//! search cost scales with hand size times the searched rectangle's area.

use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use qwirkle_player::board::{Board, BoardSnapshot};
use qwirkle_player::core::GameRng;
use qwirkle_player::players::{choose_put, choose_trade};
use qwirkle_player::rules::MatchingPlacement;
use qwirkle_player::tiles::Tile;

fn grown_board(tiles: usize, seed: u64) -> BoardSnapshot {
    let mut board = Board::new(Arc::new(MatchingPlacement));
    let mut rng = GameRng::new(seed);
    let kinds: Vec<Tile> = Tile::all().collect();

    while board.snapshot().len() < tiles {
        let hand: Vec<Tile> = (0..6).map(|_| kinds[rng.index(kinds.len())]).collect();
        if let Ok(mv) = choose_put(&hand, &board.snapshot(), 1, &mut rng) {
            board.apply(&mv).expect("search only returns legal moves");
        }
    }
    board.snapshot()
}

fn bench_choose_put(c: &mut Criterion) {
    let hand: Vec<Tile> = Tile::all().step_by(7).take(6).collect();

    let mut group = c.benchmark_group("choose_put");
    for &tiles in &[1usize, 16, 64, 128] {
        let board = grown_board(tiles, 42);
        group.bench_with_input(BenchmarkId::from_parameter(tiles), &board, |b, board| {
            let mut rng = GameRng::new(7);
            b.iter(|| std::hint::black_box(choose_put(&hand, board, 1, &mut rng)));
        });
    }
    group.finish();
}

fn bench_choose_trade(c: &mut Criterion) {
    let hand: Vec<Tile> = Tile::all().take(6).collect();
    let mut rng = GameRng::new(7);
    c.bench_function("choose_trade", |b| {
        b.iter(|| std::hint::black_box(choose_trade(&hand, &mut rng)));
    });
}

criterion_group!(benches, bench_choose_put, bench_choose_trade);
criterion_main!(benches);
