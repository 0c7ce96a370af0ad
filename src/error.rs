use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RugcheckError {
    #[error("Please provide the token contract address using the -token flag")]
    MissingArgument,

    #[error("Request error: {0}")]
    Request(#[source] reqwest::Error),

    #[error("HTTP status error: {}", .0.as_u16())]
    HttpStatus(StatusCode),

    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("Failed to decode token report: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No {0} data available")]
    EmptyCollection(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RugcheckError {
    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            RugcheckError::Config(_) => 1,
            RugcheckError::MissingArgument => 2,
            RugcheckError::Request(_) | RugcheckError::HttpStatus(_) | RugcheckError::Body(_) => 3,
            RugcheckError::Decode(_) => 4,
            RugcheckError::EmptyCollection(_) => 5,
        }
    }
}
