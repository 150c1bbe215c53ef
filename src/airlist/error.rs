use thiserror::Error;

#[derive(Error, Debug)]
pub enum AirlistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("Shell error: {0}")]
    Shell(String),
}

pub type Result<T> = std::result::Result<T, AirlistError>;
