use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::board::{Board, PlacedPiece};
use blockfall::core::{get_shape, is_blocked, GameState};
use blockfall::types::{HeldKeys, PieceKind};

/// A board with a locked row of O pieces along the floor and an O falling above.
fn stacked_board() -> Board {
    let mut board = Board::new();
    for col in (0..10).step_by(2) {
        board.push_falling(PlacedPiece::new(get_shape(PieceKind::O), col, 18));
        board.release_falling();
    }
    board.push_falling(PlacedPiece::new(get_shape(PieceKind::O), 4, 10));
    board
}

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);
    state.start(Duration::ZERO);
    let mut now = Duration::ZERO;

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            now += Duration::from_millis(16);
            state.tick(black_box(now), HeldKeys::NONE);
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);
    state.start(Duration::ZERO);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            state.board_mut().clear();
            state.spawn();
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut board = stacked_board();

    c.bench_function("try_move", |b| {
        b.iter(|| {
            board.try_move_falling(black_box(1), 0);
            board.try_move_falling(black_box(-1), 0);
        })
    });
}

fn bench_is_blocked(c: &mut Criterion) {
    let board = stacked_board();
    let candidate = PlacedPiece::new(get_shape(PieceKind::T), 3, 17);

    c.bench_function("is_blocked_stacked", |b| {
        b.iter(|| is_blocked(black_box(&candidate), board.locked()))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_piece_spawn,
    bench_try_move,
    bench_is_blocked
);
criterion_main!(benches);
