// crates/cli/src/config.rs
use crate::args::Args;
pub use topwords_engine::config::{Config, ConfigBuilder};
use topwords_engine::error::EngineError;

impl TryFrom<Args> for Config {
    type Error = EngineError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        ConfigBuilder::default()
            .file_path(args.file_path)
            .words_count(Config::words_count_from(args.words_count))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(file_path: &str, words_count: i64) -> Args {
        Args {
            file_path: PathBuf::from(file_path),
            words_count,
            rest: Vec::new(),
        }
    }

    #[test]
    fn carries_file_path_and_limit() {
        let config = Config::try_from(args("book.txt", 5)).unwrap();
        assert_eq!(config.file_path, PathBuf::from("book.txt"));
        assert_eq!(config.words_count, 5);
    }

    #[test]
    fn negative_limit_becomes_default() {
        let config = Config::try_from(args("book.txt", -1)).unwrap();
        assert_eq!(config.words_count, 20);
    }

    #[test]
    fn zero_limit_is_kept() {
        let config = Config::try_from(args("book.txt", 0)).unwrap();
        assert_eq!(config.words_count, 0);
    }
}
