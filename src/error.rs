use thiserror::Error;

/// Configuration errors at the store boundary. These are returned to the
/// offending caller; the snapshot is never touched when one is raised.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Dispatch called while a dispatch is already in progress")]
    ReentrantDispatch,

    #[error("Malformed action: {0}")]
    MalformedAction(#[from] serde_json::Error),

    #[error("The store owning this dispatcher is gone")]
    Disconnected,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Request failed with status code {0}")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            ApiError::Status(status.as_u16())
        } else if error.is_decode() {
            ApiError::Decode(error.to_string())
        } else {
            ApiError::Transport(error.to_string())
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid API URL {0:?}: {1}")]
    InvalidUrl(String, url::ParseError),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
