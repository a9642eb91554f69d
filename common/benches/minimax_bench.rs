use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{Board, Mark, MoveSelector, calculate_minimax_move};

fn board_with(marks: &[(usize, Mark)]) -> Board {
    let mut board = Board::new();
    for &(index, mark) in marks {
        board.set(index, mark);
    }
    board
}

fn bench_full_self_play_game() {
    let mut board = Board::new();
    let mut selector = MoveSelector::with_random_move_probability(0.0, SessionRng::new(1));
    let mut current_mark = Mark::X;

    while let Some(opponent) = current_mark.opponent() {
        match selector.select_move(&board, current_mark, opponent) {
            Some(index) => {
                board.set(index, current_mark);
                current_mark = opponent;
            }
            None => break,
        }
        if tictactoe_common::games::tictactoe::check_winner(&board).is_some() {
            break;
        }
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    let one_mark = board_with(&[(0, Mark::X)]);
    group.bench_function("search_after_corner_opening", |b| {
        b.iter(|| calculate_minimax_move(black_box(&one_mark), Mark::O, Mark::X))
    });

    let mid_game = board_with(&[(0, Mark::X), (4, Mark::O), (8, Mark::X)]);
    group.bench_function("search_mid_game", |b| {
        b.iter(|| calculate_minimax_move(black_box(&mid_game), Mark::O, Mark::X))
    });

    let empty = Board::new();
    group.bench_function("search_empty_board_without_opening_book", |b| {
        b.iter(|| calculate_minimax_move(black_box(&empty), Mark::X, Mark::O))
    });

    group.bench_function("self_play_game", |b| b.iter(bench_full_self_play_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
