use std::path::PathBuf;
use std::time::Duration;

use simplelog::LevelFilter;

pub const TICK_INTERVAL_MS: u64 = 150;
pub const INPUT_POLL_MS: u64 = 50;

const LOG_LEVEL_VAR: &str = "TERMSNAKE_LOG";
const LOG_FILE_VAR: &str = "TERMSNAKE_LOG_FILE";
const DEFAULT_LOG_FILE: &str = "termsnake.log";

pub struct Config {
    pub width: usize,
    pub height: usize,
    pub tick: Duration,
    pub input_poll: Duration,
}

impl Config {
    pub fn new(width: usize, height: usize) -> Self {
        Config {
            width,
            height,
            tick: Duration::from_millis(TICK_INTERVAL_MS),
            input_poll: Duration::from_millis(INPUT_POLL_MS),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub file: PathBuf,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Unset or unparsable values fall back to `info` and `termsnake.log`.
    fn from_vars<F: Fn(&str) -> Option<String>>(var: F) -> Self {
        let level = var(LOG_LEVEL_VAR)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);
        let file = var(LOG_FILE_VAR)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        LogSettings { level, file }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let settings = LogSettings::from_vars(|_| None);
        assert_eq!(settings, LogSettings { level: LevelFilter::Info, file: PathBuf::from("termsnake.log") });
    }

    #[test]
    fn reads_level_and_file() {
        let settings = LogSettings::from_vars(|name| match name {
            "TERMSNAKE_LOG" => Some("trace".to_string()),
            "TERMSNAKE_LOG_FILE" => Some("/tmp/snake.log".to_string()),
            _ => None,
        });
        assert_eq!(settings.level, LevelFilter::Trace);
        assert_eq!(settings.file, PathBuf::from("/tmp/snake.log"));
    }

    #[test]
    fn bad_level_falls_back_to_info() {
        let settings = LogSettings::from_vars(|name| match name {
            "TERMSNAKE_LOG" => Some("loud".to_string()),
            _ => None,
        });
        assert_eq!(settings.level, LevelFilter::Info);
    }

    #[test]
    fn game_ticks_every_150ms() {
        let config = Config::new(20, 10);
        assert_eq!(config.tick, Duration::from_millis(150));
        assert!(config.input_poll < config.tick);
    }
}
