use thiserror::Error;

#[derive(Error, Debug)]
pub enum TkError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Odd hex length: {0}")]
    OddHexLength(usize),
    #[error("Invalid hex digit {found:?} at position {position}")]
    InvalidHexDigit { position: usize, found: char },
    #[error("Read failed: {0}")]
    Read(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TkError>;
