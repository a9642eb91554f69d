use tictactoe_common::games::tictactoe::{
    AchievementTracker, BOARD_WIDTH, Board, GameEvent, Mark, ScoreBoard,
};

/// Empty cells show their 1-based number so the player knows what to type.
pub fn render_board(board: &Board) -> String {
    let mut rows = Vec::new();
    for (row_index, row) in board.cells().chunks(BOARD_WIDTH).enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(col, &mark)| match mark {
                Mark::Empty => (row_index * BOARD_WIDTH + col + 1).to_string(),
                other => other.to_string(),
            })
            .collect();
        rows.push(format!(" {} ", cells.join(" | ")));
    }
    rows.join("\n---+---+---\n")
}

pub fn describe_event(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::Won(line) => Some(format!(
            "{} wins! (cells {}, {}, {})",
            line.mark,
            line.cells[0] + 1,
            line.cells[1] + 1,
            line.cells[2] + 1
        )),
        GameEvent::Draw => Some("It's a draw.".to_string()),
        GameEvent::BotThinking => Some("Bot is thinking...".to_string()),
        GameEvent::BotMoved(index) => Some(format!("Bot played {}", index + 1)),
        GameEvent::TurnChanged(mark) => Some(format!("{} to move", mark)),
        GameEvent::BoardReset => Some("New game.".to_string()),
        GameEvent::CellPlayed { .. } => None,
    }
}

pub fn render_score(score: &ScoreBoard) -> String {
    format!(
        "X: {}  O: {}  Draws: {}",
        score.wins(Mark::X),
        score.wins(Mark::O),
        score.draws()
    )
}

pub fn render_achievements(tracker: &AchievementTracker) -> String {
    let mut lines = vec![format!(
        "Achievements {}/{}",
        tracker.unlocked_count(),
        tracker.all_achievements().len()
    )];
    for achievement in tracker.all_achievements() {
        let marker = if achievement.unlocked { "x" } else { " " };
        lines.push(format!(
            "[{}] {} - {}",
            marker,
            achievement.title(),
            achievement.description()
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_board_numbers_empty_cells() {
        let mut board = Board::new();
        board.set(0, Mark::X);
        board.set(4, Mark::O);
        let rendered = render_board(&board);
        assert_eq!(
            rendered,
            " X | 2 | 3 \n---+---+---\n 4 | O | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_cell_played_is_silent() {
        let event = GameEvent::CellPlayed { index: 0, mark: Mark::X };
        assert_eq!(describe_event(&event), None);
        assert_eq!(
            describe_event(&GameEvent::BotMoved(4)),
            Some("Bot played 5".to_string())
        );
    }

    #[test]
    fn test_render_achievements_lists_all() {
        let tracker = AchievementTracker::new();
        let rendered = render_achievements(&tracker);
        assert!(rendered.starts_with("Achievements 0/5"));
        assert!(rendered.contains("[ ] Hat Trick - Win 3 games in a row"));
    }
}
