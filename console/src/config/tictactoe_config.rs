use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::{Difficulty, GameMode, Mark};

const MAX_BOT_MOVE_DELAY_MS: u64 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub bot_mark: Mark,
    pub first_mark: Mark,
    pub bot_move_delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_mark == Mark::Empty {
            return Err("bot_mark must be X or O".to_string());
        }
        if self.first_mark == Mark::Empty {
            return Err("first_mark must be X or O".to_string());
        }
        if self.bot_move_delay_ms > MAX_BOT_MOVE_DELAY_MS {
            return Err(format!(
                "bot_move_delay_ms must not exceed {}",
                MAX_BOT_MOVE_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::PlayerVsBot,
            difficulty: Difficulty::Medium,
            bot_mark: Mark::O,
            first_mark: Mark::X,
            bot_move_delay_ms: 500,
            seed: None,
        }
    }
}
