use thiserror::Error;

/// Custom error type for the hostdash application
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("History payload error: {0}")]
    History(String),
}

/// Result type alias for the hostdash application
pub type Result<T> = std::result::Result<T, DashboardError>;

impl DashboardError {
    /// Create a history payload error
    pub fn history<S: Into<String>>(msg: S) -> Self {
        DashboardError::History(msg.into())
    }
}
