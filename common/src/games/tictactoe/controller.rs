use crate::log;
use super::board::{BOARD_SIZE, Board};
use super::bot_controller::BotPlayer;
use super::game_state::{MoveOutcome, TicTacToeGameState};
use super::score::ScoreBoard;
use super::types::{GameMode, Mark, WinningLine};

/// Messages emitted by the controller for whatever front end is listening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    CellPlayed { index: usize, mark: Mark },
    TurnChanged(Mark),
    Won(WinningLine),
    Draw,
    BoardReset,
    BotThinking,
    BotMoved(usize),
}

pub struct GameController {
    state: TicTacToeGameState,
    score: ScoreBoard,
    mode: GameMode,
    bot: Option<Box<dyn BotPlayer>>,
    bot_mark: Mark,
}

impl GameController {
    pub fn player_vs_player(first_mark: Mark) -> Self {
        Self {
            state: TicTacToeGameState::new(first_mark),
            score: ScoreBoard::new(),
            mode: GameMode::PlayerVsPlayer,
            bot: None,
            bot_mark: Mark::Empty,
        }
    }

    pub fn player_vs_bot(first_mark: Mark, bot: Box<dyn BotPlayer>, bot_mark: Mark) -> Result<Self, String> {
        if bot_mark == Mark::Empty {
            return Err("Bot must play X or O".to_string());
        }
        Ok(Self {
            state: TicTacToeGameState::new(first_mark),
            score: ScoreBoard::new(),
            mode: GameMode::PlayerVsBot,
            bot: Some(bot),
            bot_mark,
        })
    }

    pub fn new(
        mode: GameMode,
        first_mark: Mark,
        bot: Option<Box<dyn BotPlayer>>,
        bot_mark: Mark,
    ) -> Result<Self, String> {
        match (mode, bot) {
            (GameMode::PlayerVsPlayer, _) => Ok(Self::player_vs_player(first_mark)),
            (GameMode::PlayerVsBot, Some(bot)) => Self::player_vs_bot(first_mark, bot, bot_mark),
            (GameMode::PlayerVsBot, None) => {
                Err("A bot player is required for player vs bot mode".to_string())
            }
        }
    }

    pub fn game_mode(&self) -> GameMode {
        self.mode
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    pub fn current_mark(&self) -> Mark {
        self.state.current_mark()
    }

    pub fn is_game_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn bot_mark(&self) -> Option<Mark> {
        match self.mode {
            GameMode::PlayerVsBot => Some(self.bot_mark),
            GameMode::PlayerVsPlayer => None,
        }
    }

    pub fn human_mark(&self) -> Option<Mark> {
        self.bot_mark().and_then(Mark::opponent)
    }

    pub fn is_bot_turn(&self) -> bool {
        self.mode == GameMode::PlayerVsBot && self.state.current_mark() == self.bot_mark
    }

    /// Plays `index` for the human whose turn it is.
    pub fn try_play_cell(&mut self, index: usize) -> Result<Vec<GameEvent>, String> {
        if self.is_bot_turn() {
            return Err("Waiting for the bot to move".to_string());
        }
        self.apply_move(index)
    }

    fn apply_move(&mut self, index: usize) -> Result<Vec<GameEvent>, String> {
        let mark = self.state.current_mark();
        let outcome = self.state.place_mark(index)?;

        let mut events = vec![GameEvent::CellPlayed { index, mark }];
        match outcome {
            MoveOutcome::Won(line) => {
                self.score.add_win(line.mark);
                log!("{} wins on line {}", line.mark, line.line_index);
                events.push(GameEvent::Won(line));
            }
            MoveOutcome::Draw => {
                self.score.add_draw();
                log!("Game ended in a draw");
                events.push(GameEvent::Draw);
            }
            MoveOutcome::Continue { next } => {
                events.push(GameEvent::TurnChanged(next));
                if self.is_bot_turn() {
                    events.push(GameEvent::BotThinking);
                }
            }
        }
        Ok(events)
    }

    pub fn execute_bot_move(&mut self) -> Result<Vec<GameEvent>, String> {
        if self.mode != GameMode::PlayerVsBot {
            return Err("No bot in player vs player mode".to_string());
        }
        if !self.state.is_active() {
            return Err("Game is already over".to_string());
        }
        if !self.is_bot_turn() {
            return Err("Not the bot's turn".to_string());
        }

        let bot_mark = self.bot_mark;
        let opponent_mark = bot_mark
            .opponent()
            .ok_or_else(|| "Bot has no opponent mark".to_string())?;
        let board = *self.state.board();
        let bot = self
            .bot
            .as_mut()
            .ok_or_else(|| "Bot player is missing".to_string())?;

        let index = bot
            .calculate_move(&board, bot_mark, opponent_mark)
            .ok_or_else(|| "Bot found no legal move".to_string())?;
        if index >= BOARD_SIZE {
            return Err(format!("Bot chose out of range cell {}", index));
        }

        log!("Bot {} plays cell {}", bot_mark, index);
        let mut events = self.apply_move(index)?;
        events.push(GameEvent::BotMoved(index));
        Ok(events)
    }

    pub fn reset_board(&mut self) -> Vec<GameEvent> {
        self.state.reset();
        let mut events = vec![
            GameEvent::BoardReset,
            GameEvent::TurnChanged(self.state.current_mark()),
        ];
        if self.is_bot_turn() {
            events.push(GameEvent::BotThinking);
        }
        events
    }

    pub fn reset_scores(&mut self) {
        self.score.reset();
    }
}
