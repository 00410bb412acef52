// crates/engine/src/lib.rs
pub mod aggregate;
pub mod config;
pub mod error;
pub mod reader;
pub mod tokenizer;

use crate::aggregate::WordCount;
use crate::config::Config;
use crate::error::Result;

/// Run the word frequency pipeline on the configured file.
///
/// Returns every distinct word, most frequent first. Truncation to
/// `config.words_count` is left to the caller.
///
/// # Errors
///
/// Fails when the file cannot be opened or read, or when it contains no words.
pub fn run(config: &Config) -> Result<Vec<WordCount>> {
    let buf = reader::read_file(&config.file_path)?;
    count_words(&buf)
}

/// Tokenize and aggregate an in-memory buffer.
///
/// # Errors
///
/// Returns [`error::EngineError::NoData`] when `buf` contains no words.
pub fn count_words(buf: &[u8]) -> Result<Vec<WordCount>> {
    let tokens = tokenizer::sorted_tokens(buf)?;
    Ok(aggregate::aggregate(tokens))
}
