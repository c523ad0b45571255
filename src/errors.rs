use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Caller is not authenticated: {0}")]
    Unauthorized(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Database request failed: {0}")]
    Database(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for PortalError {
    fn from(error: reqwest::Error) -> Self {
        PortalError::Http(error.to_string())
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(error: serde_json::Error) -> Self {
        PortalError::Parse(error.to_string())
    }
}
