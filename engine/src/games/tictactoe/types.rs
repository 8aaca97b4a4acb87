use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[serde(rename = "x", alias = "X")]
    X,
    #[serde(rename = "o", alias = "O")]
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

impl FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x" => Ok(Player::X),
            "o" => Ok(Player::O),
            other => Err(format!("Unknown mark: {} (expected x or o)", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

/// One ply. Positions index the grid row-major, `0..9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub player: Player,
    pub position: usize,
}

impl Move {
    pub fn new(player: Player, position: usize) -> Self {
        Self { player, position }
    }

    /// 1-based row and column.
    pub fn row_col(&self) -> (usize, usize) {
        (self.position / BOARD_SIDE + 1, self.position % BOARD_SIDE + 1)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, col) = self.row_col();
        write!(f, "{} r{}c{}", self.player, row, col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Player),
    Tie,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(player) => write!(f, "{} wins", player),
            GameOutcome::Tie => write!(f, "tie"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(player: Player, cells: [usize; 3]) -> Self {
        Self { player, cells }
    }

    pub fn contains(&self, position: usize) -> bool {
        self.cells.contains(&position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[serde(rename = "pvp")]
    PlayerVsPlayer,
    #[serde(rename = "pve")]
    PlayerVsComputer,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::PlayerVsPlayer => write!(f, "PvP"),
            GameMode::PlayerVsComputer => write!(f, "PvE"),
        }
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pvp" => Ok(GameMode::PlayerVsPlayer),
            "pve" => Ok(GameMode::PlayerVsComputer),
            other => Err(format!("Unknown mode: {} (expected pvp or pve)", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "Unknown difficulty: {} (expected easy, medium or hard)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    AwaitingStart,
    InProgress,
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent().opponent(), Player::O);
    }

    #[test]
    fn test_move_display_uses_one_based_row_col() {
        assert_eq!(Move::new(Player::X, 0).to_string(), "X r1c1");
        assert_eq!(Move::new(Player::O, 5).to_string(), "O r2c3");
        assert_eq!(Move::new(Player::X, 8).to_string(), "X r3c3");
    }

    #[test]
    fn test_parse_settings_values() {
        assert_eq!("PvE".parse::<GameMode>(), Ok(GameMode::PlayerVsComputer));
        assert_eq!("pvp".parse::<GameMode>(), Ok(GameMode::PlayerVsPlayer));
        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("o".parse::<Player>(), Ok(Player::O));
        assert!("z".parse::<Player>().is_err());
        assert!("insane".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_mark_from_player() {
        assert_eq!(Mark::from(Player::X), Mark::X);
        assert_eq!(Mark::O.player(), Some(Player::O));
        assert_eq!(Mark::Empty.player(), None);
    }
}
