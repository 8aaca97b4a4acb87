use crate::games::tictactoe::{Difficulty, GameMode, Player, TicTacToeSessionSettings};

pub const BOT_MOVE_DELAY_MS: u64 = 260;
pub const DEMO_MOVE_INTERVAL_MS: u64 = 220;
pub const UNDO_CAPACITY: usize = 50;

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::PlayerVsComputer,
            difficulty: Difficulty::Hard,
            human: Player::X,
        }
    }
}
