use std::time::Duration;

use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    AchievementTracker, Difficulty, GameController, GameEvent, GameMode, MoveSelector,
};
use tictactoe_common::log;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::config::TicTacToeConfig;
use crate::render::{describe_event, render_achievements, render_board, render_score};
use crate::state::ClientCommand;

/// One player's seat at the terminal: the controller plus the bookkeeping
/// that reacts to its events. All I/O stays in [`run_local_game`].
pub struct LocalSession {
    controller: GameController,
    achievements: AchievementTracker,
    difficulty: Difficulty,
}

impl LocalSession {
    pub fn new(config: &TicTacToeConfig) -> Result<Self, String> {
        let controller = match config.mode {
            GameMode::PlayerVsPlayer => GameController::player_vs_player(config.first_mark),
            GameMode::PlayerVsBot => {
                let rng = config
                    .seed
                    .map(SessionRng::new)
                    .unwrap_or_else(SessionRng::from_random);
                log!(
                    "Bot plays {} on {} (seed {})",
                    config.bot_mark,
                    config.difficulty,
                    rng.seed()
                );
                let selector = MoveSelector::new(config.difficulty, rng);
                GameController::player_vs_bot(config.first_mark, Box::new(selector), config.bot_mark)?
            }
        };

        Ok(Self {
            controller,
            achievements: AchievementTracker::new(),
            difficulty: config.difficulty,
        })
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    pub fn achievements(&self) -> &AchievementTracker {
        &self.achievements
    }

    pub fn start(&mut self) -> Vec<String> {
        let events = self.controller.reset_board();
        self.process_events(events)
    }

    pub fn needs_bot_move(&self) -> bool {
        self.controller.is_game_active() && self.controller.is_bot_turn()
    }

    pub fn play_bot_move(&mut self) -> Result<Vec<String>, String> {
        let events = self.controller.execute_bot_move()?;
        Ok(self.process_events(events))
    }

    /// `Ok(None)` means the player asked to quit.
    pub fn handle_command(&mut self, command: ClientCommand) -> Result<Option<Vec<String>>, String> {
        let output = match command {
            ClientCommand::PlaceMark { index } => {
                if !self.controller.is_game_active() {
                    return Err("Game is over, type r for a new game".to_string());
                }
                let events = self.controller.try_play_cell(index)?;
                self.process_events(events)
            }
            ClientCommand::Reset => {
                let events = self.controller.reset_board();
                self.process_events(events)
            }
            ClientCommand::ClearScores => {
                self.controller.reset_scores();
                log!("Scores cleared");
                vec![render_score(self.controller.score())]
            }
            ClientCommand::ShowScore => vec![render_score(self.controller.score())],
            ClientCommand::ShowAchievements => vec![render_achievements(self.achievements())],
            ClientCommand::Quit => return Ok(None),
        };
        Ok(Some(output))
    }

    fn process_events(&mut self, events: Vec<GameEvent>) -> Vec<String> {
        let mode = self.controller.game_mode();
        let mut output = Vec::new();
        let mut game_over = false;

        for event in &events {
            match event {
                GameEvent::BoardReset => {
                    self.achievements.on_game_started(mode);
                    output.push(render_board(self.controller.board()));
                }
                GameEvent::CellPlayed { .. } => {
                    self.achievements.on_cell_played(self.controller.board());
                    output.push(render_board(self.controller.board()));
                }
                GameEvent::Won(line) => {
                    game_over = true;
                    match self.controller.human_mark() {
                        Some(human) if human != line.mark => self.achievements.on_player_loss(),
                        human => self.achievements.on_player_win(
                            line.mark,
                            mode,
                            self.difficulty,
                            human.unwrap_or(line.mark),
                        ),
                    }
                }
                GameEvent::Draw => {
                    game_over = true;
                    self.achievements.on_draw();
                }
                _ => {}
            }
            if let Some(text) = describe_event(event) {
                output.push(text);
            }
        }

        if game_over {
            while let Some(achievement) = self.achievements.next_pending_notification() {
                output.push(format!("Achievement unlocked: {}", achievement.title()));
            }
            output.push(render_score(self.controller.score()));
            output.push("Type r for a new game or q to quit.".to_string());
        }
        output
    }
}

async fn read_commands(command_tx: mpsc::UnboundedSender<ClientCommand>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<ClientCommand>() {
                    Ok(command) => {
                        if command_tx.send(command).is_err() {
                            break;
                        }
                    }
                    Err(e) => println!("{}", e),
                }
            }
            Ok(None) => break,
            Err(e) => {
                log!("Failed to read from stdin: {}", e);
                break;
            }
        }
    }
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

pub async fn run_local_game(config: TicTacToeConfig) -> Result<(), String> {
    let mut session = LocalSession::new(&config)?;
    let bot_delay = Duration::from_millis(config.bot_move_delay_ms);

    let (command_tx, mut command_rx) = mpsc::unbounded_channel();
    let reader = tokio::spawn(read_commands(command_tx));

    println!("Cells are numbered 1-9. Commands: r reset, c clear scores, s score, a achievements, q quit.");
    print_lines(session.start());

    loop {
        if session.needs_bot_move() {
            tokio::time::sleep(bot_delay).await;
            print_lines(session.play_bot_move()?);
            continue;
        }

        let Some(command) = command_rx.recv().await else {
            break;
        };

        match session.handle_command(command) {
            Ok(Some(lines)) => print_lines(lines),
            Ok(None) => break,
            Err(e) => println!("{}", e),
        }
    }

    reader.abort();
    log!(
        "Session finished: {}",
        render_score(session.controller().score())
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::games::tictactoe::{AchievementKind, Mark};

    fn pvp_config() -> TicTacToeConfig {
        TicTacToeConfig {
            mode: GameMode::PlayerVsPlayer,
            ..TicTacToeConfig::default()
        }
    }

    fn play(session: &mut LocalSession, cells: &[usize]) -> Vec<String> {
        let mut output = Vec::new();
        for &index in cells {
            let lines = session
                .handle_command(ClientCommand::PlaceMark { index })
                .unwrap()
                .unwrap();
            output.extend(lines);
        }
        output
    }

    #[test]
    fn test_pvp_win_updates_score_and_achievements() {
        let mut session = LocalSession::new(&pvp_config()).unwrap();
        session.start();
        let output = play(&mut session, &[0, 3, 1, 4, 2]);

        assert!(output.iter().any(|line| line.starts_with("X wins!")));
        assert!(output.iter().any(|line| line == "Achievement unlocked: First Victory"));
        assert_eq!(session.controller().score().wins(Mark::X), 1);
        let first_victory = session
            .achievements()
            .achievement(AchievementKind::FirstVictory)
            .unwrap();
        assert!(first_victory.unlocked);
        assert_eq!(session.achievements().friend_games_played(), 1);
    }

    #[test]
    fn test_move_after_game_over_is_rejected_until_reset() {
        let mut session = LocalSession::new(&pvp_config()).unwrap();
        session.start();
        play(&mut session, &[0, 3, 1, 4, 2]);

        assert!(session.handle_command(ClientCommand::PlaceMark { index: 8 }).is_err());
        session.handle_command(ClientCommand::Reset).unwrap();
        assert!(session.handle_command(ClientCommand::PlaceMark { index: 8 }).is_ok());
    }

    #[test]
    fn test_bot_session_answers_human_move() {
        let config = TicTacToeConfig {
            seed: Some(17),
            bot_move_delay_ms: 0,
            ..TicTacToeConfig::default()
        };
        let mut session = LocalSession::new(&config).unwrap();
        session.start();
        assert!(!session.needs_bot_move());

        play(&mut session, &[4]);
        assert!(session.needs_bot_move());
        let output = session.play_bot_move().unwrap();
        assert!(output.iter().any(|line| line.starts_with("Bot played")));
        assert_eq!(session.controller().board().count(Mark::O), 1);
        assert!(!session.needs_bot_move());
    }

    #[test]
    fn test_clear_scores_keeps_current_game() {
        let mut session = LocalSession::new(&pvp_config()).unwrap();
        session.start();
        play(&mut session, &[0, 3, 1, 4, 2]);
        session.handle_command(ClientCommand::Reset).unwrap();
        play(&mut session, &[8]);
        assert_eq!(session.controller().score().games_played(), 1);

        let output = session
            .handle_command(ClientCommand::ClearScores)
            .unwrap()
            .unwrap();
        assert_eq!(output, vec!["X: 0  O: 0  Draws: 0".to_string()]);
        assert_eq!(session.controller().score().games_played(), 0);
        assert_eq!(session.controller().board().get(8), Mark::X);
        assert!(session.controller().is_game_active());
    }

    #[test]
    fn test_quit_and_info_commands() {
        let mut session = LocalSession::new(&pvp_config()).unwrap();
        assert_eq!(session.handle_command(ClientCommand::Quit), Ok(None));
        let score = session.handle_command(ClientCommand::ShowScore).unwrap().unwrap();
        assert_eq!(score, vec!["X: 0  O: 0  Draws: 0".to_string()]);
    }
}
