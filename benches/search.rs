//! Search Benchmarks
//!
//! Turn generation, evaluation and fixed-depth search using Criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pentago::core::{Board, Cell, Colour};
use pentago::eval::rate;
use pentago::rules::{legal_turns, won};
use pentago::search::{NoCache, SearchEngine, TranspositionTable};

fn midgame() -> Board {
    let mut board = Board::new(Colour::PlayerA);
    let stones = [
        (0, 0, Cell::PlayerA),
        (0, 4, Cell::PlayerB),
        (1, 1, Cell::PlayerA),
        (1, 2, Cell::PlayerB),
        (3, 0, Cell::PlayerB),
        (3, 3, Cell::PlayerB),
        (4, 4, Cell::PlayerA),
        (5, 1, Cell::PlayerB),
    ];
    for (row, col, cell) in stones {
        let _ = board.set(row, col, cell);
    }
    board
}

fn bench_legal_turns(c: &mut Criterion) {
    let board = midgame();
    c.bench_function("legal_turns_midgame", |b| {
        b.iter(|| black_box(legal_turns(black_box(&board)).len()))
    });
}

fn bench_evaluation(c: &mut Criterion) {
    let board = midgame();
    c.bench_function("rate_midgame", |b| b.iter(|| black_box(rate(black_box(&board)))));
    c.bench_function("won_midgame", |b| b.iter(|| black_box(won(black_box(&board)))));
}

fn bench_find_best(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_best");
    group.sample_size(10);

    for depth in [1u8, 2] {
        group.bench_with_input(BenchmarkId::new("no_cache", depth), &depth, |b, &depth| {
            let mut board = midgame();
            b.iter(|| {
                let mut engine = SearchEngine::default().with_cache(NoCache);
                black_box(engine.find_best(&mut board, depth))
            })
        });
        group.bench_with_input(BenchmarkId::new("transposition_table", depth), &depth, |b, &depth| {
            let mut board = midgame();
            b.iter(|| {
                let mut engine = SearchEngine::default().with_cache(TranspositionTable::new(1 << 16));
                black_box(engine.find_best(&mut board, depth))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_legal_turns, bench_evaluation, bench_find_best);
criterion_main!(benches);
