use crate::games::SessionRng;
use super::board::{BOARD_SIZE, Board};
use super::types::{Difficulty, Mark};
use super::win_detector::{has_won, is_draw};

const WIN_SCORE: i32 = 10;
const LOSE_SCORE: i32 = -10;
const DRAW_SCORE: i32 = 0;

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];

pub const POSITION_WEIGHTS: [i32; BOARD_SIZE] = [
    3, 2, 3,
    2, 4, 2,
    3, 2, 3,
];

/// Anything that can pick a cell for the side to move.
pub trait BotPlayer: Send {
    /// Returns an empty cell index in `0..9`, or `None` when no cell is free.
    fn calculate_move(&mut self, board: &Board, bot_mark: Mark, opponent_mark: Mark) -> Option<usize>;
}

pub struct MoveSelector {
    difficulty: Option<Difficulty>,
    random_move_probability: f64,
    rng: SessionRng,
}

impl MoveSelector {
    pub fn new(difficulty: Difficulty, rng: SessionRng) -> Self {
        Self {
            difficulty: Some(difficulty),
            random_move_probability: difficulty.random_move_probability(),
            rng,
        }
    }

    /// Overrides the difficulty's random-move chance; `0.0` gives fully
    /// deterministic play.
    pub fn with_random_move_probability(probability: f64, rng: SessionRng) -> Self {
        Self {
            difficulty: None,
            random_move_probability: probability.clamp(0.0, 1.0),
            rng,
        }
    }

    /// The preset this selector was built from; `None` for a custom probability.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn random_move_probability(&self) -> f64 {
        self.random_move_probability
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn select_move(&mut self, board: &Board, bot_mark: Mark, opponent_mark: Mark) -> Option<usize> {
        if self.should_make_random_move() {
            return self.random_move(board);
        }

        let available_moves = board.available_moves();
        if available_moves.is_empty() {
            return None;
        }

        if let Some(index) = opening_move(board) {
            return Some(index);
        }

        calculate_minimax_move(board, bot_mark, opponent_mark)
    }

    fn should_make_random_move(&mut self) -> bool {
        self.rng.random_unit() < self.random_move_probability
    }

    fn random_move(&mut self, board: &Board) -> Option<usize> {
        let available_moves = board.available_moves();
        if available_moves.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..available_moves.len());
        Some(available_moves[idx])
    }
}

impl BotPlayer for MoveSelector {
    fn calculate_move(&mut self, board: &Board, bot_mark: Mark, opponent_mark: Mark) -> Option<usize> {
        self.select_move(board, bot_mark, opponent_mark)
    }
}

fn opening_move(board: &Board) -> Option<usize> {
    if !board.is_empty_board() {
        return None;
    }
    if board.is_cell_empty(CENTER) {
        return Some(CENTER);
    }
    CORNERS.iter().copied().find(|&corner| board.is_cell_empty(corner))
}

/// Full-depth search with no randomization and no opening book.
pub fn calculate_minimax_move(board: &Board, bot_mark: Mark, opponent_mark: Mark) -> Option<usize> {
    let mut board = *board;
    let mut best_score = i32::MIN;
    let mut best_moves: Vec<usize> = Vec::new();

    for index in board.available_moves() {
        board.set(index, bot_mark);
        let score = minimax(&mut board, 0, false, bot_mark, opponent_mark, i32::MIN, i32::MAX);
        board.set(index, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(index);
        } else if score == best_score {
            best_moves.push(index);
        }
    }

    best_strategic_move(&best_moves)
}

/// Highest position weight wins; the first cell in index order breaks equal weights.
fn best_strategic_move(moves: &[usize]) -> Option<usize> {
    let (&first, rest) = moves.split_first()?;
    let mut best_move = first;
    for &index in rest {
        if POSITION_WEIGHTS[index] > POSITION_WEIGHTS[best_move] {
            best_move = index;
        }
    }
    Some(best_move)
}

fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if has_won(board, bot_mark) {
        return WIN_SCORE - depth;
    }
    if has_won(board, opponent_mark) {
        return LOSE_SCORE + depth;
    }
    if is_draw(board) {
        return DRAW_SCORE;
    }

    let mover = if is_maximizing { bot_mark } else { opponent_mark };
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for index in 0..BOARD_SIZE {
        if !board.is_cell_empty(index) {
            continue;
        }

        board.set(index, mover);
        let score = minimax(board, depth + 1, !is_maximizing, bot_mark, opponent_mark, alpha, beta);
        board.set(index, Mark::Empty);

        if is_maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }

        if beta <= alpha {
            break;
        }
    }

    best
}
