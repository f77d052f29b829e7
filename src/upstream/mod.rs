pub mod newsapi;
pub mod open_meteo;
pub mod types;

use thiserror::Error;

/// Failure modes shared by the upstream provider clients.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("JSON parsing failed: {0}")]
    JsonParsing(#[from] serde_json::Error),
    #[error("HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("news API key not configured")]
    MissingCredential,
}
