use thiserror::Error;

/// Errors that can occur during Makefile generation
#[derive(Error, Debug)]
pub enum MakeGenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type for Makefile generation operations
pub type Result<T> = std::result::Result<T, MakeGenError>;
