use std::io;

use tictactoe_engine::games::GameBroadcaster;
use tictactoe_engine::games::tictactoe::CELL_COUNT;
use tictactoe_engine::{TicTacToeSession, TicTacToeSessionSettings, log};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Place(usize),
    Undo,
    NewGame,
    History,
    Help,
    Quit,
}

/// Cells are numbered 1-9, left to right and top to bottom.
pub fn parse_command(line: &str) -> Option<InputCommand> {
    let line = line.trim().to_ascii_lowercase();
    match line.as_str() {
        "u" | "undo" => Some(InputCommand::Undo),
        "n" | "new" => Some(InputCommand::NewGame),
        "h" | "history" => Some(InputCommand::History),
        "?" | "help" => Some(InputCommand::Help),
        "q" | "quit" | "exit" => Some(InputCommand::Quit),
        other => match other.parse::<usize>() {
            Ok(cell @ 1..=CELL_COUNT) => Some(InputCommand::Place(cell - 1)),
            _ => None,
        },
    }
}

fn print_help() {
    println!("1-9 place a mark, u undo, n new game, h history, q quit");
}

pub async fn run_play<B: GameBroadcaster>(
    session: &TicTacToeSession<B>,
    settings: TicTacToeSessionSettings,
) -> io::Result<()> {
    print_help();
    println!("New game started");
    session.start_new_game(settings).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = parse_command(&line) else {
            if !line.trim().is_empty() {
                println!("Unknown input: {}", line.trim());
                print_help();
            }
            continue;
        };

        match command {
            InputCommand::Place(position) => {
                if !session.submit_human_move(position).await {
                    println!("Cell {} is not available right now.", position + 1);
                }
            }
            InputCommand::Undo => {
                if !session.undo().await {
                    println!("Nothing to undo.");
                }
            }
            InputCommand::NewGame => {
                println!("New game started");
                session.start_new_game(settings).await;
            }
            InputCommand::History => {
                for line in session.get_state().await.history_lines() {
                    println!("{}", line);
                }
            }
            InputCommand::Help => print_help(),
            InputCommand::Quit => {
                log!("Quit requested");
                break;
            }
        }
    }
    Ok(())
}
