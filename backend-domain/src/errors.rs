use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogQueryError {
    /// Names the connection setting (`host`, `port`, `user`, `password` or
    /// `database`), not the environment variable it was read from.
    #[error("Missing environment variable: {0}")]
    MissingConfig(&'static str),
    #[error("Failed to fetch logs")]
    Query(#[source] anyhow::Error),
}

impl LogQueryError {
    pub fn is_config(&self) -> bool {
        matches!(self, LogQueryError::MissingConfig(_))
    }
}
