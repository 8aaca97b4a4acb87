use crate::games::BotRandom;
use super::board::Board;
use super::error::EngineError;
use super::types::{Difficulty, GameOutcome, Player};
use super::win_detector::check_win;

/// Share of Medium moves that come from the Hard search.
pub const MEDIUM_OPTIMAL_PROBABILITY: f64 = 0.6;

const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy)]
pub struct BotInput {
    pub board: Board,
    pub difficulty: Difficulty,
    pub computer: Player,
    pub human: Player,
}

impl BotInput {
    pub fn new(board: Board, difficulty: Difficulty, computer: Player) -> Self {
        Self {
            board,
            difficulty,
            computer,
            human: computer.opponent(),
        }
    }
}

pub fn calculate_move(input: &BotInput, rng: &mut impl BotRandom) -> Result<usize, EngineError> {
    match input.difficulty {
        Difficulty::Easy => calculate_random_move(&input.board, rng),
        Difficulty::Medium => {
            if input.board.is_full() {
                return Err(EngineError::NoAvailableMoves);
            }
            if rng.roll() < MEDIUM_OPTIMAL_PROBABILITY {
                calculate_minimax_move(&input.board, input.computer, input.human)
            } else {
                calculate_random_move(&input.board, rng)
            }
        }
        Difficulty::Hard => calculate_minimax_move(&input.board, input.computer, input.human),
    }
}

pub fn calculate_random_move(
    board: &Board,
    rng: &mut impl BotRandom,
) -> Result<usize, EngineError> {
    let available_moves = board.available_positions();
    if available_moves.is_empty() {
        return Err(EngineError::NoAvailableMoves);
    }
    Ok(available_moves[rng.pick(available_moves.len())])
}

/// Exhaustive alpha-beta search. Ties go to the lowest position.
///
/// Searches a private copy, so `board` is never touched.
pub fn calculate_minimax_move(
    board: &Board,
    computer: Player,
    human: Player,
) -> Result<usize, EngineError> {
    let mut scratch = *board;
    let mut best: Option<(usize, i32)> = None;
    let mut alpha = i32::MIN;

    for position in scratch.available_positions() {
        let score = {
            let mut trial = TrialMove::place(&mut scratch, position, computer);
            minimax(trial.board(), 1, false, computer, human, alpha, i32::MAX)
        };

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((position, score));
        }
        alpha = alpha.max(score);
    }

    best.map(|(position, _)| position)
        .ok_or(EngineError::NoAvailableMoves)
}

/// Exact minimax value of the computer playing `position` next.
pub fn evaluate_move(
    board: &Board,
    position: usize,
    computer: Player,
    human: Player,
) -> Result<i32, EngineError> {
    let mut scratch = board.with_mark(position, computer)?;
    Ok(minimax(&mut scratch, 1, false, computer, human, i32::MIN, i32::MAX))
}

fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    computer: Player,
    human: Player,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    match check_win(board) {
        Some(GameOutcome::Win(winner)) if winner == computer => return WIN_SCORE - depth,
        Some(GameOutcome::Win(_)) => return depth - WIN_SCORE,
        Some(GameOutcome::Tie) => return 0,
        None => {}
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for position in board.available_positions() {
            let eval = {
                let mut trial = TrialMove::place(board, position, computer);
                minimax(trial.board(), depth + 1, false, computer, human, alpha, beta)
            };
            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for position in board.available_positions() {
            let eval = {
                let mut trial = TrialMove::place(board, position, human);
                minimax(trial.board(), depth + 1, true, computer, human, alpha, beta)
            };
            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

/// A mark placed for the duration of one search branch, retracted on drop.
struct TrialMove<'a> {
    board: &'a mut Board,
    position: usize,
}

impl<'a> TrialMove<'a> {
    fn place(board: &'a mut Board, position: usize, player: Player) -> Self {
        board.put(position, player);
        Self { board, position }
    }

    fn board(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.clear(self.position);
    }
}
