use super::board::Board;
use super::types::{Mark, WinningLine};

pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board, mark: Mark) -> Option<WinningLine> {
    if mark == Mark::Empty {
        return None;
    }

    LINES
        .iter()
        .enumerate()
        .find(|(_, line)| line.iter().all(|&i| board.get(i) == mark))
        .map(|(line_index, line)| WinningLine::new(mark, line_index, *line))
}

pub fn has_won(board: &Board, mark: Mark) -> bool {
    check_win(board, mark).is_some()
}

pub fn check_winner(board: &Board) -> Option<WinningLine> {
    check_win(board, Mark::X).or_else(|| check_win(board, Mark::O))
}

pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}

/// True when `mark` holds exactly two cells of some line, blocked or not.
pub fn has_two_in_line(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }

    LINES.iter().any(|line| {
        let owned = line.iter().filter(|&&i| board.get(i) == mark).count();
        owned == 2
    })
}
