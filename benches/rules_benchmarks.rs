//! Benchmarks for move legality and application.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use console_chess::board::{Board, Square};
use console_chess::Game;

fn at(notation: &str) -> Square {
    notation.parse().unwrap()
}

fn bench_can_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("can_move");
    let board = Board::new();

    group.bench_function("pawn_double_step", |b| {
        b.iter(|| board.can_move(black_box(at("e2")), black_box(at("e4"))))
    });
    group.bench_function("blocked_queen", |b| {
        b.iter(|| board.can_move(black_box(at("d1")), black_box(at("d7"))))
    });
    group.bench_function("knight", |b| {
        b.iter(|| board.can_move(black_box(at("g1")), black_box(at("f3"))))
    });

    group.finish();
}

fn bench_legal_targets(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_targets");

    let start = Board::new();
    group.bench_function("startpos_all_pieces", |b| {
        b.iter(|| {
            start
                .pieces()
                .map(|p| start.legal_targets(p.square()).len())
                .sum::<usize>()
        })
    });

    let mut game = Game::new();
    for (from, to) in [("e2", "e4"), ("d7", "d5"), ("d1", "g4"), ("c8", "g4")] {
        game.move_squares(at(from), at(to));
    }
    let open = game.board().clone();
    group.bench_function("open_position_all_pieces", |b| {
        b.iter(|| {
            open.pieces()
                .map(|p| open.legal_targets(p.square()).len())
                .sum::<usize>()
        })
    });

    group.finish();
}

fn bench_game_moves(c: &mut Criterion) {
    c.bench_function("game_opening_sequence", |b| {
        b.iter(|| {
            let mut game = Game::new();
            for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6")] {
                black_box(game.move_squares(at(from), at(to)));
            }
            game
        })
    });
}

criterion_group!(benches, bench_can_move, bench_legal_targets, bench_game_moves);
criterion_main!(benches);
