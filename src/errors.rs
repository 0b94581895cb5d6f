use thiserror::Error;

/// Error type that captures common storage and data failures.
#[derive(Debug, Error)]
pub enum AgroError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
