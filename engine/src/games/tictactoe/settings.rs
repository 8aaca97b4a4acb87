use serde::{Deserialize, Serialize};

use super::types::{Difficulty, GameMode, Player};

/// Read once per game; edits apply from the next `start_new_game`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    #[serde(rename = "human_mark")]
    pub human: Player,
}

impl TicTacToeSessionSettings {
    pub fn new(mode: GameMode, difficulty: Difficulty, human: Player) -> Self {
        Self {
            mode,
            difficulty,
            human,
        }
    }

    /// The computer's mark, or `None` when two humans play.
    pub fn computer(&self) -> Option<Player> {
        match self.mode {
            GameMode::PlayerVsComputer => Some(self.human.opponent()),
            GameMode::PlayerVsPlayer => None,
        }
    }

    pub fn is_computer(&self, player: Player) -> bool {
        self.computer() == Some(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computer_is_complement_of_human() {
        let settings =
            TicTacToeSessionSettings::new(GameMode::PlayerVsComputer, Difficulty::Easy, Player::O);
        assert_eq!(settings.computer(), Some(Player::X));
        assert!(settings.is_computer(Player::X));
        assert!(!settings.is_computer(Player::O));
    }

    #[test]
    fn test_no_computer_in_pvp() {
        let settings =
            TicTacToeSessionSettings::new(GameMode::PlayerVsPlayer, Difficulty::Hard, Player::X);
        assert_eq!(settings.computer(), None);
        assert!(!settings.is_computer(Player::O));
    }

    #[test]
    fn test_yaml_field_names() {
        let yaml = "mode: pve\ndifficulty: medium\nhuman_mark: o\n";
        let settings: TicTacToeSessionSettings = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(
            settings,
            TicTacToeSessionSettings::new(GameMode::PlayerVsComputer, Difficulty::Medium, Player::O)
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: TicTacToeSessionSettings = serde_yaml_ng::from_str("mode: pvp\n").unwrap();
        assert_eq!(settings.mode, GameMode::PlayerVsPlayer);
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.human, Player::X);
    }
}
