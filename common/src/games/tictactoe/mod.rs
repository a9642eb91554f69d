mod achievements;
mod board;
mod bot_controller;
mod controller;
mod game_state;
mod score;
mod types;
mod win_detector;

pub use achievements::{Achievement, AchievementKind, AchievementTracker};
pub use board::{BOARD_SIZE, BOARD_WIDTH, Board};
pub use bot_controller::{BotPlayer, MoveSelector, POSITION_WEIGHTS, calculate_minimax_move};
pub use controller::{GameController, GameEvent};
pub use game_state::{MoveOutcome, TicTacToeGameState};
pub use score::ScoreBoard;
pub use types::{Difficulty, GameMode, GameStatus, Mark, WinningLine};
pub use win_detector::{LINES, check_win, check_winner, has_two_in_line, has_won, is_draw};
