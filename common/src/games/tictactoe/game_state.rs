use super::board::{BOARD_SIZE, Board};
use super::types::{GameStatus, Mark, WinningLine};
use super::win_detector::{check_win, is_draw};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue { next: Mark },
    Won(WinningLine),
    Draw,
}

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    first_mark: Mark,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<usize>,
    winning_line: Option<WinningLine>,
}

impl TicTacToeGameState {
    pub fn new(first_mark: Mark) -> Self {
        let first_mark = if first_mark == Mark::Empty { Mark::X } else { first_mark };
        Self {
            board: Board::new(),
            first_mark,
            current_mark: first_mark,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<MoveOutcome, String> {
        if !self.is_active() {
            return Err("Game is already over".to_string());
        }

        if index >= BOARD_SIZE {
            return Err(format!("Cell {} is out of bounds", index));
        }

        if !self.board.is_cell_empty(index) {
            return Err(format!("Cell {} is already marked", index));
        }

        let mark = self.current_mark;
        self.board.set(index, mark);
        self.last_move = Some(index);

        if let Some(line) = check_win(&self.board, mark) {
            self.status = match mark {
                Mark::X => GameStatus::XWon,
                _ => GameStatus::OWon,
            };
            self.winning_line = Some(line);
            return Ok(MoveOutcome::Won(line));
        }

        if is_draw(&self.board) {
            self.status = GameStatus::Draw;
            return Ok(MoveOutcome::Draw);
        }

        self.switch_turn();
        Ok(MoveOutcome::Continue {
            next: self.current_mark,
        })
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.current_mark = self.first_mark;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.winning_line = None;
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }
}
