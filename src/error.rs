use thiserror::Error;

/// Error type for every stage of a blacklist sync
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Configuration API rejected the update ({status}): {message}")]
    PublishRejected {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("{url} returned {status}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// Convenient Result type alias
pub type SyncResult<T> = Result<T, SyncError>;
