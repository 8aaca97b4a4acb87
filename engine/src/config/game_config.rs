use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Validate;
use crate::defaults::{BOT_MOVE_DELAY_MS, DEMO_MOVE_INTERVAL_MS};
use crate::games::tictactoe::TicTacToeSessionSettings;
use crate::logger::LogLevel;

const MAX_DELAY_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub prefix: Option<String>,
    pub level: LogLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub game: TicTacToeSessionSettings,
    pub bot_move_delay_ms: u64,
    pub demo_move_interval_ms: u64,
    pub log: LogConfig,
}

impl GameConfig {
    pub fn bot_move_delay(&self) -> Duration {
        Duration::from_millis(self.bot_move_delay_ms)
    }

    pub fn demo_move_interval(&self) -> Duration {
        Duration::from_millis(self.demo_move_interval_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game: TicTacToeSessionSettings::default(),
            bot_move_delay_ms: BOT_MOVE_DELAY_MS,
            demo_move_interval_ms: DEMO_MOVE_INTERVAL_MS,
            log: LogConfig::default(),
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_move_delay_ms > MAX_DELAY_MS {
            return Err(format!(
                "Bot move delay must be at most {}ms, got {}",
                MAX_DELAY_MS, self.bot_move_delay_ms
            ));
        }
        if self.demo_move_interval_ms < 1 || self.demo_move_interval_ms > MAX_DELAY_MS {
            return Err(format!(
                "Demo move interval must be between 1ms and {}ms, got {}",
                MAX_DELAY_MS, self.demo_move_interval_ms
            ));
        }
        if let Some(prefix) = &self.log.prefix
            && prefix.trim().is_empty()
        {
            return Err("Log prefix must not be blank".to_string());
        }
        Ok(())
    }
}
