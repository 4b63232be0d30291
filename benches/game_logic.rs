use blockfall::core::{try_rotate, Board, FixedPieces, GameSession, Piece};
use blockfall::types::{GameAction, PieceKind};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_step(c: &mut Criterion) {
    let mut session = GameSession::new(12345);

    c.bench_function("session_step_16ms", |b| {
        b.iter(|| {
            if session.game_over() {
                session.reset();
            }
            session.step(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = Piece::spawn(PieceKind::T);
    piece.y = 5;

    c.bench_function("try_rotate", |b| {
        b.iter(|| try_rotate(black_box(&board), black_box(&piece)))
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut session = GameSession::with_source(FixedPieces::new(PieceKind::ALL));

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if session.game_over() {
                session.apply_action(GameAction::Restart);
            }
            session.hard_drop()
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_line_clear,
    bench_try_rotate,
    bench_hard_drop
);
criterion_main!(benches);
