use super::board::Board;
use super::error::EngineError;
use super::types::{Move, Player};

/// Moves in play order. Replaying it onto an empty board yields the live board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// One line per move, `#1 X r2c2`.
    pub fn describe(&self) -> Vec<String> {
        self.moves
            .iter()
            .enumerate()
            .map(|(i, mv)| format!("#{} {}", i + 1, mv))
            .collect()
    }
}

/// Marks the cell and appends the move. Turn order is not checked here.
pub fn place_move(
    board: &mut Board,
    log: &mut MoveLog,
    position: usize,
    player: Player,
) -> Result<Move, EngineError> {
    board.set(position, player)?;
    let mv = Move::new(player, position);
    log.moves.push(mv);
    Ok(mv)
}

/// Same as [`place_move`] but leaves the inputs untouched.
pub fn apply_move(
    board: &Board,
    log: &MoveLog,
    position: usize,
    player: Player,
) -> Result<(Board, MoveLog), EngineError> {
    let mut next_board = *board;
    let mut next_log = log.clone();
    place_move(&mut next_board, &mut next_log, position, player)?;
    Ok((next_board, next_log))
}

pub fn reconstruct_from_log(log: &MoveLog) -> Result<Board, EngineError> {
    let mut board = Board::new();
    for mv in log.iter() {
        board.set(mv.position, mv.player)?;
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::{GameOutcome, Mark};
    use crate::games::tictactoe::win_detector::{WIN_LINES, check_win};

    #[test]
    fn test_apply_move_is_pure() {
        let board = Board::new();
        let log = MoveLog::new();
        let (next_board, next_log) = apply_move(&board, &log, 4, Player::X).unwrap();

        assert_eq!(board, Board::new());
        assert!(log.is_empty());
        assert_eq!(next_board.get(4), Ok(Mark::X));
        assert_eq!(next_log.as_slice(), &[Move::new(Player::X, 4)]);
    }

    #[test]
    fn test_apply_move_rejects_occupied_and_out_of_range() {
        let (board, log) = apply_move(&Board::new(), &MoveLog::new(), 0, Player::X).unwrap();
        assert_eq!(
            apply_move(&board, &log, 0, Player::O),
            Err(EngineError::CellOccupied(0))
        );
        assert_eq!(
            apply_move(&board, &log, 9, Player::O),
            Err(EngineError::InvalidPosition(9))
        );
    }

    #[test]
    fn test_failed_place_leaves_log_unchanged() {
        let mut board = Board::new();
        let mut log = MoveLog::new();
        place_move(&mut board, &mut log, 2, Player::X).unwrap();
        assert!(place_move(&mut board, &mut log, 2, Player::O).is_err());
        assert_eq!(log.len(), 1);
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_reconstruct_round_trip() {
        let mut board = Board::new();
        let mut log = MoveLog::new();
        let mut player = Player::X;
        for position in [4, 0, 8, 2, 1, 7] {
            place_move(&mut board, &mut log, position, player).unwrap();
            player = player.opponent();
        }
        assert_eq!(reconstruct_from_log(&log), Ok(board));
        assert_eq!(log.len(), board.occupied_count());
    }

    #[test]
    fn test_describe_history() {
        let mut board = Board::new();
        let mut log = MoveLog::new();
        place_move(&mut board, &mut log, 4, Player::X).unwrap();
        place_move(&mut board, &mut log, 2, Player::O).unwrap();
        assert_eq!(log.describe(), vec!["#1 X r2c2", "#2 O r1c3"]);
    }

    fn completed_lines(board: &Board, player: Player) -> usize {
        WIN_LINES
            .iter()
            .filter(|line| line.iter().all(|&p| board.get(p) == Ok(Mark::from(player))))
            .count()
    }

    /// Walks every position reachable by legal play, stopping at terminal ones.
    fn assert_consistent_from(board: &Board, log: &MoveLog, to_move: Player) -> usize {
        assert_eq!(reconstruct_from_log(log), Ok(*board));
        assert_eq!(log.len(), board.occupied_count());

        let x_lines = completed_lines(board, Player::X);
        let o_lines = completed_lines(board, Player::O);
        assert!(x_lines == 0 || o_lines == 0, "two winners on\n{}", board);

        match check_win(board) {
            Some(GameOutcome::Win(winner)) => {
                assert_eq!(log.last().map(|m| m.player), Some(winner));
                assert!(completed_lines(board, winner) > 0);
                return 1;
            }
            Some(GameOutcome::Tie) => {
                assert!(board.is_full());
                assert_eq!(x_lines + o_lines, 0);
                return 1;
            }
            None => assert_eq!(x_lines + o_lines, 0),
        }

        let mut visited = 1;
        for position in board.available_positions() {
            let (next_board, next_log) = apply_move(board, log, position, to_move).unwrap();
            visited += assert_consistent_from(&next_board, &next_log, to_move.opponent());
        }
        visited
    }

    #[test]
    fn test_log_and_outcome_consistent_for_all_reachable_positions() {
        let visited = assert_consistent_from(&Board::new(), &MoveLog::new(), Player::X);
        // Number of nodes in the full game tree of tic-tac-toe.
        assert_eq!(visited, 549_946);
    }
}
