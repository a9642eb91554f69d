mod config;
mod local_game;
mod render;
mod self_play;
mod state;

use std::path::PathBuf;

use clap::Parser;
use tictactoe_common::config::Validate;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{Difficulty, GameMode, MoveSelector};
use tictactoe_common::{log, logger};

use config::{Config, get_config_manager};
use local_game::run_local_game;
use render::render_score;
use self_play::run_self_play;

#[derive(Parser)]
#[command(name = "tictactoe", version, about = "Tic-tac-toe against a minimax bot")]
struct Args {
    /// YAML config file; defaults to tictactoe_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// pvp or pvb
    #[arg(long)]
    mode: Option<GameMode>,

    /// Let the bot open the game
    #[arg(long)]
    bot_first: bool,

    #[arg(long)]
    seed: Option<u64>,

    /// Play N bot-vs-bot games and print the tally
    #[arg(long, value_name = "N")]
    self_play: Option<u32>,

    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut Config) {
        let tictactoe = &mut config.tictactoe;
        if let Some(difficulty) = self.difficulty {
            tictactoe.difficulty = difficulty;
        }
        if let Some(mode) = self.mode {
            tictactoe.mode = mode;
        }
        if self.bot_first {
            tictactoe.first_mark = tictactoe.bot_mark;
        }
        if self.seed.is_some() {
            tictactoe.seed = self.seed;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = get_config_manager(args.config.as_deref()).get_config()?;
    args.apply_overrides(&mut config);
    config.validate()?;

    let prefix = if args.use_log_prefix {
        Some(config.log_prefix.clone().unwrap_or_else(|| "Console".to_string()))
    } else {
        config.log_prefix.clone()
    };
    logger::init_logger(prefix);
    log!("tictactoe {} starting", tictactoe_common::version::VERSION);

    if let Some(games) = args.self_play {
        let seed = config.tictactoe.seed.unwrap_or_else(|| SessionRng::from_random().seed());
        let difficulty = config.tictactoe.difficulty;
        let mut x_bot = MoveSelector::new(difficulty, SessionRng::new(seed));
        let mut o_bot = MoveSelector::new(difficulty, SessionRng::new(seed.wrapping_add(1)));
        let score = run_self_play(games, &mut x_bot, &mut o_bot)?;
        println!("{}", render_score(&score));
        return Ok(());
    }

    run_local_game(config.tictactoe).await?;
    Ok(())
}
