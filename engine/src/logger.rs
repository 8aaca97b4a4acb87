use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::Local;
use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            other => Err(format!("Unknown log level: {}", other)),
        }
    }
}

pub struct Logger {
    prefix: Option<String>,
    min_level: LogLevel,
}

impl Logger {
    fn new(prefix: Option<String>, min_level: LogLevel) -> Self {
        Self { prefix, min_level }
    }

    pub fn log(&self, level: LogLevel, file: &str, line: u32, message: &str) {
        if level < self.min_level {
            return;
        }
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        // stdout belongs to the board renderer
        if let Some(ref prefix) = self.prefix {
            eprintln!("[{}][{}][{}][{}:{}] {}", timestamp, level, prefix, file_name, line, message);
        } else {
            eprintln!("[{}][{}][{}:{}] {}", timestamp, level, file_name, line, message);
        }
    }
}

pub fn init_logger(prefix: Option<String>, min_level: LogLevel) {
    LOGGER.get_or_init(|| Logger::new(prefix, min_level));
}

/// Silently drops the message until [`init_logger`] has been called.
pub fn log(level: LogLevel, file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Debug, file!(), line!(), &format!($($arg)*))
    };
}
