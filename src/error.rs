use std::path::PathBuf;
use std::time::Duration;

/// Errors a strategy can raise while choosing a move
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("the board is full, there is no move to make")]
    BoardFull,

    #[error("no legal column was found")]
    NoLegalMove,

    #[error("time limit exceeded: took {elapsed:?} of {budget:?}")]
    TimeUp { elapsed: Duration, budget: Duration },

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
