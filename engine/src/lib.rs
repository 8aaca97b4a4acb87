pub mod config;
pub mod games;
pub mod logger;

mod defaults;

pub use config::GameConfig;
pub use games::tictactoe::{
    Board, Difficulty, EngineError, GameMode, GameOutcome, GamePhase, GameView, Mark, Move,
    MoveLog, Player, TicTacToeGameState, TicTacToeSession, TicTacToeSessionSettings,
    WinningLine,
};
