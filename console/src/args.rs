use clap::{Parser, Subcommand};
use tictactoe_engine::{Difficulty, GameConfig, GameMode, Player};

#[derive(Parser, Debug)]
#[command(name = "tictactoe", about = "Tic-tac-toe against a friend or the computer")]
pub struct Args {
    /// Path to the YAML config; defaults to tictactoe_config.yaml next to the binary
    #[arg(long)]
    pub config: Option<String>,

    /// pvp or pve
    #[arg(long)]
    pub mode: Option<GameMode>,

    /// easy, medium or hard
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// Mark played by the human in PvE (x or o)
    #[arg(long)]
    pub human: Option<Player>,

    /// Seed for the computer's randomness
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the effective settings back to the config file
    #[arg(long)]
    pub save_config: bool,

    #[arg(long)]
    pub use_log_prefix: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Interactive game on stdin
    #[default]
    Play,
    /// Random moves for the human side until the game ends
    Demo,
}

impl Args {
    pub fn apply_overrides(&self, config: &mut GameConfig) {
        if let Some(mode) = self.mode {
            config.game.mode = mode;
        }
        if let Some(difficulty) = self.difficulty {
            config.game.difficulty = difficulty;
        }
        if let Some(human) = self.human {
            config.game.human = human;
        }
    }

    pub fn log_prefix(&self, config: &GameConfig) -> Option<String> {
        match (&config.log.prefix, self.use_log_prefix) {
            (Some(prefix), _) => Some(prefix.clone()),
            (None, true) => Some("TicTacToe".to_string()),
            (None, false) => None,
        }
    }
}
