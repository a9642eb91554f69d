use tictactoe_common::games::tictactoe::{BotPlayer, Mark, MoveOutcome, ScoreBoard, TicTacToeGameState};
use tictactoe_common::log;

/// Plays `games` bot-vs-bot games, alternating who opens.
pub fn run_self_play(
    games: u32,
    x_bot: &mut dyn BotPlayer,
    o_bot: &mut dyn BotPlayer,
) -> Result<ScoreBoard, String> {
    let mut score = ScoreBoard::new();

    for game in 0..games {
        let first_mark = if game % 2 == 0 { Mark::X } else { Mark::O };
        let mut state = TicTacToeGameState::new(first_mark);

        loop {
            let mark = state.current_mark();
            let opponent = mark
                .opponent()
                .ok_or_else(|| "Current player has no opponent".to_string())?;
            let choice = match mark {
                Mark::X => x_bot.calculate_move(state.board(), mark, opponent),
                _ => o_bot.calculate_move(state.board(), mark, opponent),
            };
            let index = choice.ok_or_else(|| format!("Bot {} found no move in game {}", mark, game + 1))?;

            match state.place_mark(index)? {
                MoveOutcome::Continue { .. } => {}
                MoveOutcome::Won(line) => {
                    score.add_win(line.mark);
                    break;
                }
                MoveOutcome::Draw => {
                    score.add_draw();
                    break;
                }
            }
        }
    }

    log!(
        "Self-play finished: {} games, X {} / O {} / draws {}",
        games,
        score.wins(Mark::X),
        score.wins(Mark::O),
        score.draws()
    );
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::games::SessionRng;
    use tictactoe_common::games::tictactoe::{Difficulty, MoveSelector};

    #[test]
    fn test_perfect_bots_always_draw() {
        let mut x_bot = MoveSelector::with_random_move_probability(0.0, SessionRng::new(1));
        let mut o_bot = MoveSelector::with_random_move_probability(0.0, SessionRng::new(2));
        let score = run_self_play(4, &mut x_bot, &mut o_bot).unwrap();
        assert_eq!(score.draws(), 4);
        assert_eq!(score.games_played(), 4);
    }

    #[test]
    fn test_perfect_bot_never_loses_to_random_bot() {
        let mut perfect = MoveSelector::with_random_move_probability(0.0, SessionRng::new(3));
        let mut random = MoveSelector::with_random_move_probability(1.0, SessionRng::new(4));
        let score = run_self_play(50, &mut perfect, &mut random).unwrap();
        assert_eq!(score.wins(Mark::O), 0);
        assert_eq!(score.games_played(), 50);
    }

    #[test]
    fn test_every_game_is_counted() {
        let mut easy = MoveSelector::new(Difficulty::Easy, SessionRng::new(5));
        let mut medium = MoveSelector::new(Difficulty::Medium, SessionRng::new(6));
        let score = run_self_play(20, &mut easy, &mut medium).unwrap();
        assert_eq!(score.games_played(), 20);
    }
}
