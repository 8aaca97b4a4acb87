use super::board::Board;
use super::types::{GameOutcome, WinningLine};

/// Rows, then columns, then the two diagonals. Scan order is fixed.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// `None` while the game is still open.
pub fn check_win(board: &Board) -> Option<GameOutcome> {
    if let Some(line) = check_win_with_line(board) {
        return Some(GameOutcome::Win(line.player));
    }
    if board.is_full() {
        return Some(GameOutcome::Tie);
    }
    None
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    WIN_LINES.iter().find_map(|&[a, b, c]| {
        let player = cells[a].player()?;
        if cells[b] == cells[a] && cells[c] == cells[a] {
            Some(WinningLine::new(player, [a, b, c]))
        } else {
            None
        }
    })
}
