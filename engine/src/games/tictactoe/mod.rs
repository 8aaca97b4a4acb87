mod board;
mod bot_controller;
mod error;
mod game_state;
mod move_log;
mod session;
mod settings;
mod types;
mod undo;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BotInput, MEDIUM_OPTIMAL_PROBABILITY, calculate_minimax_move, calculate_move,
    calculate_random_move, evaluate_move,
};
pub use error::EngineError;
pub use game_state::{GameOverInfo, GameView, TicTacToeGameState};
pub use move_log::{MoveLog, apply_move, place_move, reconstruct_from_log};
pub use session::TicTacToeSession;
pub use settings::TicTacToeSessionSettings;
pub use types::{
    BOARD_SIDE, CELL_COUNT, Difficulty, GameMode, GameOutcome, GamePhase, Mark, Move, Player,
    WinningLine,
};
pub use undo::{UndoSnapshot, UndoStack};
pub use win_detector::{WIN_LINES, check_win, check_win_with_line};
