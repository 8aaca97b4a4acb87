use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::games::{GameBroadcaster, SessionRng};
use crate::{log, log_debug};
use super::bot_controller::calculate_move;
use super::game_state::{GameView, TicTacToeGameState};
use super::settings::TicTacToeSessionSettings;

/// A computer move waiting out its delay, valid only for `revision`.
struct ScheduledBotMove {
    revision: u64,
    handle: JoinHandle<()>,
}

struct SessionInner {
    game: TicTacToeGameState,
    pending_bot_move: Option<ScheduledBotMove>,
}

impl SessionInner {
    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending_bot_move.take() {
            pending.handle.abort();
            log_debug!(
                "Cancelled computer move scheduled for revision {}",
                pending.revision
            );
        }
    }
}

/// Live game driven by external input, with the computer's replies
/// scheduled on the tokio runtime after `bot_move_delay`.
///
/// Must be used from within a tokio runtime. Broadcasts run under the
/// session lock, so a broadcaster must not call back into the session.
#[derive(Clone)]
pub struct TicTacToeSession<B: GameBroadcaster> {
    inner: Arc<Mutex<SessionInner>>,
    broadcaster: B,
    bot_move_delay: Duration,
}

impl<B: GameBroadcaster> TicTacToeSession<B> {
    pub fn new(rng: SessionRng, broadcaster: B, bot_move_delay: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionInner {
                game: TicTacToeGameState::new(rng),
                pending_bot_move: None,
            })),
            broadcaster,
            bot_move_delay,
        }
    }

    pub async fn start_new_game(&self, settings: TicTacToeSessionSettings) {
        let mut inner = self.inner.lock().await;
        inner.cancel_pending();
        inner.game.start_new_game(settings);
        self.after_change(&mut inner).await;
    }

    /// Returns whether the move was played; illegal input is ignored.
    pub async fn submit_human_move(&self, position: usize) -> bool {
        let mut inner = self.inner.lock().await;
        if !inner.game.submit_human_move(position) {
            return false;
        }
        self.after_change(&mut inner).await;
        true
    }

    /// With nothing to undo this leaves the session alone, including a
    /// pending computer move.
    pub async fn undo(&self) -> bool {
        let mut inner = self.inner.lock().await;
        if inner.game.undo_depth() == 0 {
            return false;
        }
        inner.cancel_pending();
        inner.game.undo();
        self.after_change(&mut inner).await;
        true
    }

    pub async fn get_state(&self) -> GameView {
        self.inner.lock().await.game.view()
    }

    pub async fn has_pending_bot_move(&self) -> bool {
        self.inner
            .lock()
            .await
            .pending_bot_move
            .as_ref()
            .is_some_and(|pending| !pending.handle.is_finished())
    }

    /// Publishes the new state, then either reports the end of the game or
    /// schedules the computer's reply.
    async fn after_change(&self, inner: &mut SessionInner) {
        self.broadcaster.broadcast_state(inner.game.view()).await;

        if let Some(info) = inner.game.game_over_info() {
            self.broadcaster.broadcast_game_over(info).await;
            return;
        }

        if inner.game.is_computer_turn() {
            self.schedule_bot_move(inner);
        }
    }

    fn schedule_bot_move(&self, inner: &mut SessionInner) {
        inner.cancel_pending();

        let revision = inner.game.revision();
        let session = self.clone();
        let handle = tokio::spawn(async move {
            session.run_bot_move(revision).await;
        });

        inner.pending_bot_move = Some(ScheduledBotMove { revision, handle });
    }

    async fn run_bot_move(&self, revision: u64) {
        tokio::time::sleep(self.bot_move_delay).await;

        let (input, mut rng) = {
            let mut inner = self.inner.lock().await;
            if inner.game.revision() != revision {
                return;
            }
            let Some(input) = inner.game.bot_input() else {
                return;
            };
            (input, inner.game.fork_rng())
        };

        let started = Instant::now();
        let calculated =
            tokio::task::spawn_blocking(move || calculate_move(&input, &mut rng)).await;

        let position = match calculated {
            Ok(Ok(position)) => position,
            Ok(Err(e)) => {
                log!("Computer failed to choose a move: {}", e);
                return;
            }
            Err(e) => {
                log!("Computer move task failed: {}", e);
                return;
            }
        };

        let mut inner = self.inner.lock().await;
        if inner.game.revision() != revision {
            log_debug!("Discarded computer move {} for stale revision {}", position, revision);
            return;
        }
        // This task is the pending move; it must not abort itself from here on.
        inner.pending_bot_move = None;

        match inner.game.apply_computer_move(position) {
            Ok(mv) => {
                log!(
                    "Computer ({}) played {} in {:?}",
                    input.difficulty,
                    mv,
                    started.elapsed()
                );
                self.after_change(&mut inner).await;
            }
            Err(e) => {
                log!("Computer failed to place mark at {}: {}", position, e);
            }
        }
    }
}
