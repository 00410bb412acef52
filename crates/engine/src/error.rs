use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read {path}: {source}")]
    ReadFrom {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no data")]
    NoData,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// Name of the pipeline stage that produced the error, used as the log prefix.
    #[must_use]
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::Open { .. } => "Open",
            Self::ReadFrom { .. } => "ReadFrom",
            Self::NoData => "getSortedRawData",
            Self::Config(_) => "Config",
        }
    }
}

impl From<derive_builder::UninitializedFieldError> for EngineError {
    fn from(e: derive_builder::UninitializedFieldError) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
