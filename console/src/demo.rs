use std::time::Duration;

use tictactoe_engine::games::{BotRandom, GameBroadcaster, SessionRng};
use tictactoe_engine::{GamePhase, TicTacToeSession, TicTacToeSessionSettings, log};

/// Plays uniformly random moves for every human side until the game ends.
/// In PvE the computer still answers through the session's own scheduling.
pub async fn run_demo<B: GameBroadcaster>(
    session: &TicTacToeSession<B>,
    settings: TicTacToeSessionSettings,
    interval: Duration,
    rng: &mut SessionRng,
) {
    session.start_new_game(settings).await;

    let mut ticker = tokio::time::interval(interval);
    ticker.tick().await;

    loop {
        ticker.tick().await;

        let view = session.get_state().await;
        if view.phase != GamePhase::InProgress {
            break;
        }
        if view.settings.is_computer(view.current_player) {
            continue;
        }

        let available = view.board.available_positions();
        if available.is_empty() {
            break;
        }
        let position = available[rng.pick(available.len())];
        session.submit_human_move(position).await;
    }

    let view = session.get_state().await;
    log!("Demo finished: {}", view.status_text());
}
