use tictactoe_engine::games::GameBroadcaster;
use tictactoe_engine::games::tictactoe::{BOARD_SIDE, GameOverInfo, GameView, Mark};

/// Prints every state change to stdout.
#[derive(Clone, Default)]
pub struct ConsoleBroadcaster;

impl ConsoleBroadcaster {
    pub fn new() -> Self {
        Self
    }
}

impl GameBroadcaster for ConsoleBroadcaster {
    async fn broadcast_state(&self, state: GameView) {
        println!("{}", render_view(&state));
    }

    async fn broadcast_game_over(&self, info: GameOverInfo) {
        match info.winning_line {
            Some(line) => {
                let cells: Vec<String> = line.cells.iter().map(|c| (c + 1).to_string()).collect();
                println!(
                    "*** {} after {} moves (line {}) ***",
                    info.outcome,
                    info.move_count,
                    cells.join("-")
                );
            }
            None => println!("*** {} after {} moves ***", info.outcome, info.move_count),
        }
        println!("Press n for a new game or q to quit.");
    }
}

/// Empty cells show their input number; the winning line is bracketed.
pub fn render_board(view: &GameView) -> String {
    let mut rows = Vec::with_capacity(BOARD_SIDE);
    for row in 0..BOARD_SIDE {
        let cells: Vec<String> = (0..BOARD_SIDE)
            .map(|col| {
                let position = row * BOARD_SIDE + col;
                let symbol = match view.board.cells()[position] {
                    Mark::Empty => (position + 1).to_string(),
                    Mark::X => "X".to_string(),
                    Mark::O => "O".to_string(),
                };
                if view.winning_line.is_some_and(|line| line.contains(position)) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }
    rows.join("\n---+---+---\n")
}

pub fn render_view(view: &GameView) -> String {
    let history = view.history_lines().join(", ");
    format!(
        "\n{}\nStatus: {} | Turn: {}{}\nHistory: {}",
        render_board(view),
        view.status_text(),
        view.turn_text(),
        if view.can_undo { " | u to undo" } else { "" },
        history
    )
}
