use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use prime_rook_chess::game_state::board::Board;
use prime_rook_chess::game_state::chess_types::{Color, Piece, PieceKind, Square};
use prime_rook_chess::game_state::game_state::GameState;
use prime_rook_chess::move_generation::legal_move_checks::is_square_attacked;
use prime_rook_chess::move_generation::legal_move_generator::all_legal_moves;
use prime_rook_chess::move_generation::perft::perft;

#[derive(Clone)]
struct BenchCase {
    name: &'static str,
    state: GameState,
    depths: &'static [u8],
}

fn square(row: u8, col: u8) -> Square {
    Square::new(row, col).expect("benchmark square should be on the board")
}

/// Open middlegame-like position with both sides' rooks on half-open files.
fn rook_heavy_position() -> GameState {
    let mut board = Board::empty();
    board.place(square(7, 6), Piece::new(PieceKind::King, Color::White));
    board.place(square(0, 6), Piece::new(PieceKind::King, Color::Black));
    for (row, col, kind, color) in [
        (7, 0, PieceKind::Rook, Color::White),
        (7, 5, PieceKind::Rook, Color::White),
        (0, 0, PieceKind::Rook, Color::Black),
        (0, 3, PieceKind::Rook, Color::Black),
        (5, 2, PieceKind::Knight, Color::White),
        (2, 5, PieceKind::Knight, Color::Black),
        (4, 4, PieceKind::Bishop, Color::White),
        (3, 3, PieceKind::Bishop, Color::Black),
    ] {
        board.place(square(row, col), Piece::new(kind, color));
    }
    for col in [5u8, 6, 7] {
        board.place(square(6, col), Piece::new(PieceKind::Pawn, Color::White));
        board.place(square(1, col), Piece::new(PieceKind::Pawn, Color::Black));
    }
    GameState::from_board(board, Color::White)
}

fn selected_cases() -> Vec<BenchCase> {
    let deep = matches!(
        std::env::var("PRIME_ROOK_BENCH_SUITE"),
        Ok(value) if value.eq_ignore_ascii_case("standard")
    );
    vec![
        BenchCase {
            name: "startpos",
            state: GameState::new_game(),
            depths: if deep { &[1, 2, 3] } else { &[1, 2] },
        },
        BenchCase {
            name: "rook_heavy",
            state: rook_heavy_position(),
            depths: if deep { &[1, 2, 3] } else { &[1, 2] },
        },
    ]
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        for &depth in case.depths {
            let warmup = perft(&case.state, depth).expect("perft should run");
            group.throughput(Throughput::Elements(warmup.nodes as u64));

            let bench_name = format!("{}_d{}", case.name, depth);
            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                &warmup.nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(black_box(&case.state), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(count.nodes, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_move_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");
    for case in selected_cases() {
        group.bench_function(case.name, |b| {
            b.iter(|| {
                let moves = all_legal_moves(
                    black_box(&case.state.board),
                    case.state.side_to_move,
                    case.state.en_passant_target,
                );
                black_box(moves.len())
            });
        });
    }

    let state = rook_heavy_position();
    group.bench_function("attack_scan_all_squares", |b| {
        b.iter(|| {
            Square::all()
                .filter(|&sq| is_square_attacked(black_box(&state.board), sq, Color::Black))
                .count()
        });
    });
    group.finish();
}

criterion_group!(legal_move_benches, bench_perft, bench_move_generation);
criterion_main!(legal_move_benches);
