use thiserror::Error;

/// Failures of the generation call itself, as opposed to a decoded `Err`
/// answer from the service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Request never produced a response
    #[error("Connection to '{endpoint}' failed: {source}")]
    Connection {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Service answered with a non-success status
    #[error("Generation service returned {status}: {message}")]
    Upstream { status: u16, message: String },

    /// Response body could not be read off the connection
    #[error("Failed to read service response: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// Body was not JSON
    #[error("Failed to decode service response: {0}")]
    Decode(#[source] serde_json::Error),
}
