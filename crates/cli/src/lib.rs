// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod presentation;

use crate::config::Config;
use crate::error::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Count the words of the configured file and print the top entries.
///
/// Nothing is printed unless every earlier stage succeeded.
///
/// # Errors
///
/// Returns the first failing stage's error.
pub fn run(config: &Config) -> Result<()> {
    let words = topwords_engine::run(config)?;
    presentation::print_results(&words, config.words_count)?;
    Ok(())
}
