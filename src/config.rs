use std::path::PathBuf;

use tracing::Level;

pub const DEFAULT_QUESTIONS_FILE: &str = "questions.json";
pub const DEFAULT_LOG_LEVEL: Level = Level::ERROR;

/// Runtime settings, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub questions_path: PathBuf,
    pub log_level: Level,
    /// Raw `LOG_LEVEL` value that failed to parse, kept so it can be reported
    /// once logging is running.
    pub rejected_log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions_path: PathBuf::from(DEFAULT_QUESTIONS_FILE),
            log_level: DEFAULT_LOG_LEVEL,
            rejected_log_level: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("QUIZ_QUESTIONS_FILE").ok(),
            std::env::var("LOG_LEVEL").ok(),
        )
    }

    pub fn from_vars(questions_file: Option<String>, log_level: Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = questions_file.filter(|p| !p.trim().is_empty()) {
            config.questions_path = PathBuf::from(path);
        }

        if let Some(raw) = log_level {
            match raw.trim().parse::<Level>() {
                Ok(level) => config.log_level = level,
                Err(_) => config.rejected_log_level = Some(raw),
            }
        }

        config
    }
}
