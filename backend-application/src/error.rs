use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Required settings are missing or malformed; the message names the key.
    #[error("{0}")]
    Config(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
