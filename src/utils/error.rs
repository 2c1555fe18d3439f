use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    // The structured response body is logged at the call site, not carried
    // here; the message keeps only the status reason phrase.
    #[error("API error: {}", status_reason(.0))]
    Status(StatusCode),

    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, ApiError>;

fn status_reason(status: &StatusCode) -> &str {
    status.canonical_reason().unwrap_or_else(|| status.as_str())
}
