use std::future::Future;

use super::tictactoe::{GameOverInfo, GameView};

/// Receives session events. The presentation layer implements this to
/// render the board, the status line and the move history.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, state: GameView) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, info: GameOverInfo) -> impl Future<Output = ()> + Send;
}
