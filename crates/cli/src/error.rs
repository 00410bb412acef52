// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] topwords_engine::error::EngineError),

    #[error("{0}")]
    Print(#[from] std::io::Error),
}

impl AppError {
    /// Stage label printed in front of the error message.
    #[must_use]
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::Engine(e) => e.stage(),
            Self::Print(_) => "Print",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
