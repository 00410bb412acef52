use crate::error::EngineError;
use derive_builder::Builder;
use std::path::PathBuf;

/// Input file used when no `file_path` is given.
pub const DEFAULT_FILE_PATH: &str = "./assets/mobydick.txt";

/// Number of words printed when no (or a negative) `words_count` is given.
pub const DEFAULT_WORDS_COUNT: usize = 20;

/// Run configuration. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into), build_fn(error = "EngineError"))]
pub struct Config {
    #[builder(default = "PathBuf::from(DEFAULT_FILE_PATH)")]
    pub file_path: PathBuf,
    #[builder(default = "DEFAULT_WORDS_COUNT")]
    pub words_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from(DEFAULT_FILE_PATH),
            words_count: DEFAULT_WORDS_COUNT,
        }
    }
}

impl Config {
    /// Map a raw, possibly negative, limit onto the configured limit.
    #[must_use]
    pub fn words_count_from(raw: i64) -> usize {
        usize::try_from(raw).unwrap_or(DEFAULT_WORDS_COUNT)
    }
}
