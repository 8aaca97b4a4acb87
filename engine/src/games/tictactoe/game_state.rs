use crate::defaults::UNDO_CAPACITY;
use crate::games::SessionRng;
use crate::{log, log_debug};
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::error::EngineError;
use super::move_log::{MoveLog, place_move};
use super::settings::TicTacToeSessionSettings;
use super::types::{GameOutcome, GamePhase, Move, Player, WinningLine};
use super::undo::{UndoSnapshot, UndoStack};
use super::win_detector::{check_win, check_win_with_line};

/// Read-only copy of the session handed to renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct GameView {
    pub board: Board,
    pub current_player: Player,
    pub phase: GamePhase,
    pub outcome: Option<GameOutcome>,
    pub winning_line: Option<WinningLine>,
    pub move_log: MoveLog,
    pub can_undo: bool,
    pub settings: TicTacToeSessionSettings,
}

impl GameView {
    pub fn status_text(&self) -> String {
        match (self.phase, self.outcome) {
            (GamePhase::AwaitingStart, _) => "Select settings and press Start".to_string(),
            (GamePhase::GameOver, Some(outcome)) => format!("Game over: {}", outcome),
            _ => format!("Playing ({})", self.settings.mode),
        }
    }

    pub fn turn_text(&self) -> String {
        match self.phase {
            GamePhase::InProgress => self.current_player.to_string(),
            _ => "-".to_string(),
        }
    }

    pub fn history_lines(&self) -> Vec<String> {
        if self.move_log.is_empty() {
            return vec!["No moves yet.".to_string()];
        }
        self.move_log.describe()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverInfo {
    pub outcome: GameOutcome,
    pub winning_line: Option<WinningLine>,
    pub move_count: usize,
}

/// The whole game session as a plain value: board, turn, history and undo.
///
/// Never spawns or sleeps. Whoever owns it decides when the computer plays,
/// see [`TicTacToeGameState::is_computer_turn`].
#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    current_player: Player,
    phase: GamePhase,
    outcome: Option<GameOutcome>,
    move_log: MoveLog,
    undo_stack: UndoStack,
    settings: TicTacToeSessionSettings,
    rng: SessionRng,
    revision: u64,
}

impl TicTacToeGameState {
    pub fn new(rng: SessionRng) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            phase: GamePhase::AwaitingStart,
            outcome: None,
            move_log: MoveLog::new(),
            undo_stack: UndoStack::new(UNDO_CAPACITY),
            settings: TicTacToeSessionSettings::default(),
            rng,
            revision: 0,
        }
    }

    pub fn start_new_game(&mut self, settings: TicTacToeSessionSettings) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.phase = GamePhase::InProgress;
        self.outcome = None;
        self.move_log = MoveLog::new();
        self.undo_stack.clear();
        self.settings = settings;
        self.revision += 1;

        log!(
            "New game started: mode={} difficulty={} human={} seed={}",
            settings.mode,
            settings.difficulty,
            settings.human,
            self.rng.seed()
        );
    }

    /// Human input path. Anything that is not a legal move right now is
    /// dropped and the state is left as it was.
    pub fn submit_human_move(&mut self, position: usize) -> bool {
        match self.try_human_move(position) {
            Ok(_) => true,
            Err(e) => {
                log_debug!("Ignored human move at {}: {}", position, e);
                false
            }
        }
    }

    pub fn try_human_move(&mut self, position: usize) -> Result<Move, EngineError> {
        self.ensure_in_progress()?;
        if self.settings.is_computer(self.current_player) {
            return Err(EngineError::IllegalTurn);
        }
        self.apply(position, self.current_player)
    }

    pub fn is_computer_turn(&self) -> bool {
        self.phase == GamePhase::InProgress && self.settings.is_computer(self.current_player)
    }

    /// What the opponent policy needs, if the computer is to move.
    pub fn bot_input(&self) -> Option<BotInput> {
        if !self.is_computer_turn() {
            return None;
        }
        Some(BotInput::new(
            self.board,
            self.settings.difficulty,
            self.current_player,
        ))
    }

    pub fn apply_computer_move(&mut self, position: usize) -> Result<Move, EngineError> {
        self.ensure_in_progress()?;
        if !self.settings.is_computer(self.current_player) {
            return Err(EngineError::IllegalTurn);
        }
        self.apply(position, self.current_player)
    }

    /// Chooses and plays the computer's move in one step, on the caller's thread.
    pub fn play_computer_move(&mut self) -> Result<Move, EngineError> {
        let input = self.bot_input().ok_or(EngineError::IllegalTurn)?;
        let position = calculate_move(&input, &mut self.rng)?;
        self.apply_computer_move(position)
    }

    /// Child generator for a computer move computed away from this value.
    pub fn fork_rng(&mut self) -> SessionRng {
        self.rng.fork()
    }

    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };

        self.board = snapshot.board;
        self.current_player = snapshot.current_player;
        self.move_log = snapshot.move_log;
        self.phase = GamePhase::InProgress;
        self.outcome = None;
        self.revision += 1;

        log_debug!(
            "Undo: {} moves on board, {} to move",
            self.move_log.len(),
            self.current_player
        );
        true
    }

    pub fn view(&self) -> GameView {
        GameView {
            board: self.board,
            current_player: self.current_player,
            phase: self.phase,
            outcome: self.outcome,
            winning_line: check_win_with_line(&self.board),
            move_log: self.move_log.clone(),
            can_undo: !self.undo_stack.is_empty(),
            settings: self.settings,
        }
    }

    pub fn game_over_info(&self) -> Option<GameOverInfo> {
        if self.phase != GamePhase::GameOver {
            return None;
        }
        Some(GameOverInfo {
            outcome: self.outcome?,
            winning_line: check_win_with_line(&self.board),
            move_count: self.move_log.len(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn move_log(&self) -> &MoveLog {
        &self.move_log
    }

    pub fn settings(&self) -> &TicTacToeSessionSettings {
        &self.settings
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Bumped on every change; a computer move computed for an older
    /// revision must not be applied.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn ensure_in_progress(&self) -> Result<(), EngineError> {
        if self.phase != GamePhase::InProgress {
            return Err(EngineError::GameNotInProgress);
        }
        Ok(())
    }

    fn apply(&mut self, position: usize, player: Player) -> Result<Move, EngineError> {
        let snapshot = UndoSnapshot {
            board: self.board,
            current_player: self.current_player,
            move_log: self.move_log.clone(),
        };
        let mv = place_move(&mut self.board, &mut self.move_log, position, player)?;
        self.undo_stack.push(snapshot);
        self.revision += 1;
        log_debug!("Move #{}: {}", self.move_log.len(), mv);

        self.post_move();
        Ok(mv)
    }

    fn post_move(&mut self) {
        match check_win(&self.board) {
            Some(outcome) => {
                self.phase = GamePhase::GameOver;
                self.outcome = Some(outcome);
                log!("Game over after {} moves: {}", self.move_log.len(), outcome);
            }
            None => {
                self.current_player = self.current_player.opponent();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::BotRandom;
    use crate::games::tictactoe::move_log::reconstruct_from_log;
    use crate::games::tictactoe::types::{Difficulty, GameMode};

    fn pvp() -> TicTacToeSessionSettings {
        TicTacToeSessionSettings::new(GameMode::PlayerVsPlayer, Difficulty::Hard, Player::X)
    }

    fn pve(difficulty: Difficulty, human: Player) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings::new(GameMode::PlayerVsComputer, difficulty, human)
    }

    fn started(settings: TicTacToeSessionSettings) -> TicTacToeGameState {
        let mut state = TicTacToeGameState::new(SessionRng::new(42));
        state.start_new_game(settings);
        state
    }

    #[test]
    fn test_new_state_awaits_start() {
        let mut state = TicTacToeGameState::new(SessionRng::new(1));
        assert_eq!(state.phase(), GamePhase::AwaitingStart);
        assert!(!state.submit_human_move(4));
        assert_eq!(state.view().status_text(), "Select settings and press Start");
        assert_eq!(state.view().turn_text(), "-");
    }

    #[test]
    fn test_start_resets_and_x_opens() {
        let mut state = started(pvp());
        assert!(state.submit_human_move(0));
        assert!(state.submit_human_move(4));

        state.start_new_game(pve(Difficulty::Easy, Player::O));
        assert_eq!(state.phase(), GamePhase::InProgress);
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(*state.board(), Board::new());
        assert!(state.move_log().is_empty());
        assert_eq!(state.undo_depth(), 0);
        assert!(state.is_computer_turn());
    }

    #[test]
    fn test_human_move_alternates_turn() {
        let mut state = started(pvp());
        assert!(state.submit_human_move(4));
        assert_eq!(state.current_player(), Player::O);
        assert!(state.submit_human_move(0));
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(
            state.move_log().as_slice(),
            &[Move::new(Player::X, 4), Move::new(Player::O, 0)]
        );
    }

    #[test]
    fn test_rejected_input_leaves_state_unchanged() {
        let mut state = started(pvp());
        state.submit_human_move(4);
        let before = state.view();
        let revision = state.revision();

        assert!(!state.submit_human_move(4));
        assert!(!state.submit_human_move(9));
        assert_eq!(state.try_human_move(4), Err(EngineError::CellOccupied(4)));
        assert_eq!(state.try_human_move(12), Err(EngineError::InvalidPosition(12)));

        assert_eq!(state.view(), before);
        assert_eq!(state.revision(), revision);
        assert_eq!(state.undo_depth(), 1);
    }

    #[test]
    fn test_human_cannot_move_on_computer_turn() {
        let mut state = started(pve(Difficulty::Hard, Player::X));
        assert!(state.submit_human_move(4));
        assert!(state.is_computer_turn());
        assert_eq!(state.try_human_move(0), Err(EngineError::IllegalTurn));
        assert_eq!(state.move_log().len(), 1);
    }

    #[test]
    fn test_computer_cannot_move_on_human_turn() {
        let mut state = started(pve(Difficulty::Hard, Player::X));
        assert_eq!(state.bot_input().map(|i| i.computer), None);
        assert_eq!(state.apply_computer_move(0), Err(EngineError::IllegalTurn));
        assert_eq!(state.play_computer_move(), Err(EngineError::IllegalTurn));
    }

    #[test]
    fn test_center_opening_gets_corner_reply() {
        let mut state = started(pve(Difficulty::Hard, Player::X));
        assert!(state.submit_human_move(4));
        let reply = state.play_computer_move().unwrap();
        assert_eq!(reply.player, Player::O);
        assert!([0, 2, 6, 8].contains(&reply.position));
        assert_eq!(state.current_player(), Player::X);
    }

    #[test]
    fn test_computer_opens_when_human_is_o() {
        let mut state = started(pve(Difficulty::Hard, Player::O));
        let input = state.bot_input().unwrap();
        assert_eq!(input.computer, Player::X);
        assert_eq!(input.human, Player::O);

        let opening = state.play_computer_move().unwrap();
        assert_eq!(opening.player, Player::X);
        assert!(!state.is_computer_turn());
        assert_eq!(state.current_player(), Player::O);
    }

    #[test]
    fn test_undo_round_trip() {
        let mut state = started(pvp());
        state.submit_human_move(4);
        let before = state.view();

        assert!(state.submit_human_move(8));
        assert!(state.undo());

        let after = state.view();
        assert_eq!(after.board, before.board);
        assert_eq!(after.current_player, before.current_player);
        assert_eq!(after.move_log, before.move_log);
    }

    #[test]
    fn test_undo_reverts_one_ply_at_a_time() {
        let mut state = started(pve(Difficulty::Hard, Player::X));
        state.submit_human_move(4);
        state.play_computer_move().unwrap();
        assert_eq!(state.undo_depth(), 2);

        assert!(state.undo());
        assert!(state.is_computer_turn());
        assert_eq!(state.move_log().len(), 1);

        assert!(state.undo());
        assert_eq!(state.current_player(), Player::X);
        assert!(state.move_log().is_empty());
        assert!(!state.undo());
    }

    #[test]
    fn test_undo_after_game_over_resumes_play() {
        let mut state = started(pvp());
        for position in [0, 3, 1, 4, 2] {
            assert!(state.submit_human_move(position));
        }
        assert_eq!(state.phase(), GamePhase::GameOver);
        assert_eq!(state.outcome(), Some(GameOutcome::Win(Player::X)));
        assert!(!state.submit_human_move(8));

        assert!(state.undo());
        assert_eq!(state.phase(), GamePhase::InProgress);
        assert_eq!(state.outcome(), None);
        assert_eq!(state.current_player(), Player::X);
        assert!(state.submit_human_move(8));
    }

    #[test]
    fn test_win_reports_line_and_status() {
        let mut state = started(pvp());
        for position in [0, 3, 1, 4, 2] {
            state.submit_human_move(position);
        }
        let view = state.view();
        assert_eq!(view.status_text(), "Game over: X wins");
        assert_eq!(view.turn_text(), "-");
        assert_eq!(view.winning_line, Some(WinningLine::new(Player::X, [0, 1, 2])));

        let info = state.game_over_info().unwrap();
        assert_eq!(info.outcome, GameOutcome::Win(Player::X));
        assert_eq!(info.move_count, 5);
    }

    #[test]
    fn test_tie_status() {
        let mut state = started(pvp());
        // X O X / X O O / O X X
        for position in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            assert!(state.submit_human_move(position));
        }
        let view = state.view();
        assert_eq!(view.outcome, Some(GameOutcome::Tie));
        assert_eq!(view.status_text(), "Game over: tie");
        assert_eq!(view.winning_line, None);
    }

    #[test]
    fn test_history_lines() {
        let mut state = started(pvp());
        assert_eq!(state.view().history_lines(), vec!["No moves yet."]);
        state.submit_human_move(4);
        state.submit_human_move(6);
        assert_eq!(state.view().history_lines(), vec!["#1 X r2c2", "#2 O r3c1"]);
        assert_eq!(state.view().status_text(), "Playing (PvP)");
        assert_eq!(state.view().turn_text(), "X");
    }

    #[test]
    fn test_revision_tracks_changes() {
        let mut state = started(pvp());
        let r0 = state.revision();
        state.submit_human_move(0);
        let r1 = state.revision();
        state.undo();
        let r2 = state.revision();
        state.start_new_game(pvp());
        assert!(r0 < r1 && r1 < r2 && r2 < state.revision());
    }

    #[test]
    fn test_log_replays_to_board_throughout_random_games() {
        let mut picker = SessionRng::new(2024);
        for _ in 0..50 {
            let mut state = started(pve(Difficulty::Medium, Player::X));
            while state.phase() == GamePhase::InProgress {
                if state.is_computer_turn() {
                    state.play_computer_move().unwrap();
                } else {
                    let available = state.board().available_positions();
                    let position = available[picker.pick(available.len())];
                    assert!(state.submit_human_move(position));
                }
                assert_eq!(reconstruct_from_log(state.move_log()), Ok(*state.board()));
                assert_eq!(state.move_log().len(), state.board().occupied_count());
                assert_eq!(check_win(state.board()), state.outcome());
            }
        }
    }

    #[test]
    fn test_hard_never_loses_to_random_human() {
        let mut picker = SessionRng::new(7);
        for human in [Player::X, Player::O] {
            for _ in 0..30 {
                let mut state = started(pve(Difficulty::Hard, human));
                while state.phase() == GamePhase::InProgress {
                    if state.is_computer_turn() {
                        state.play_computer_move().unwrap();
                    } else {
                        let available = state.board().available_positions();
                        state.submit_human_move(available[picker.pick(available.len())]);
                    }
                }
                assert_ne!(state.outcome(), Some(GameOutcome::Win(human)));
            }
        }
    }
}
