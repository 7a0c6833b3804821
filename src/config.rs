//! Runtime settings shared by the CLI commands and the TUI

use crate::core::MAX_ATTEMPTS;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Default location of the persisted game statistics
pub const DEFAULT_STATS_PATH: &str = "wordle_stats.json";

/// Word list and keyboard language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::En => "en",
            Self::Fr => "fr",
        })
    }
}

/// Settings resolved from the command line and environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub language: Language,
    pub max_attempts: usize,
    pub stats_path: PathBuf,
    pub log_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            max_attempts: MAX_ATTEMPTS,
            stats_path: PathBuf::from(DEFAULT_STATS_PATH),
            log_json: false,
        }
    }
}
