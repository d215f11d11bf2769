use thiserror::Error;

#[derive(Error, Debug)]
pub enum MutationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported conversion: {0}")]
    Unsupported(&'static str),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Degenerate candidate set: {0}")]
    Arity(String),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, MutationError>;
