use std::str::FromStr;

use tictactoe_common::games::tictactoe::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    PlaceMark { index: usize },
    Reset,
    ClearScores,
    ShowScore,
    ShowAchievements,
    Quit,
}

impl FromStr for ClientCommand {
    type Err = String;

    /// Cells are typed 1-9, left to right and top to bottom.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_ascii_lowercase();
        match input.as_str() {
            "r" | "reset" => return Ok(ClientCommand::Reset),
            "c" | "clear" => return Ok(ClientCommand::ClearScores),
            "s" | "score" => return Ok(ClientCommand::ShowScore),
            "a" | "achievements" => return Ok(ClientCommand::ShowAchievements),
            "q" | "quit" | "exit" => return Ok(ClientCommand::Quit),
            _ => {}
        }

        let cell: usize = input
            .parse()
            .map_err(|_| format!("Unknown command '{}'", s.trim()))?;
        if cell == 0 || cell > BOARD_SIZE {
            return Err(format!("Cell must be between 1 and {}", BOARD_SIZE));
        }
        Ok(ClientCommand::PlaceMark { index: cell - 1 })
    }
}
