use chess_rules::{utils::perft, Board, Cell, Color, Position};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn raw_move_count(board: &Board) -> usize {
    board.iter_pieces().map(|piece| piece.moves(board).len()).sum()
}

fn valid_move_count(board: &Board) -> usize {
    board
        .iter_pieces()
        .map(|piece| piece.valid_moves(board).map_or(0, |moves| moves.len()))
        .sum()
}

fn occupied_count(board: &Board) -> usize {
    let mut result = 0;
    for row in 0..8 {
        for col in 0..8 {
            if board.get(Position::new(row, col)) != Cell::Empty {
                result += 1;
            }
        }
    }
    result
}

fn utils_benchmark(c: &mut Criterion) {
    c.bench_function("occupied count", |b| {
        b.iter(|| occupied_count(black_box(&Board::default())))
    });
    c.bench_function("raw moves", |b| {
        b.iter(|| raw_move_count(black_box(&Board::default())))
    });
    c.bench_function("valid moves", |b| {
        b.iter(|| valid_move_count(black_box(&Board::default())))
    });
    c.bench_function("in check", |b| {
        b.iter(|| black_box(Board::default()).in_check(Color::White))
    });
    c.bench_function("duplicate", |b| {
        b.iter(|| black_box(Board::default()).duplicate())
    });
}

fn perft_benchmark(c: &mut Criterion) {
    for depth in [1, 2] {
        c.bench_function(&format!("perft start - {depth}"), |b| {
            b.iter(|| perft(black_box(&Board::default()), Color::White, depth))
        });
    }
}

criterion_group!(benches, utils_benchmark, perft_benchmark);
criterion_main!(benches);
