//! Error types for the Publitio client library.

use thiserror::Error;

/// The main error type for all Publitio client operations.
///
/// Every variant is terminal for the call that produced it: the client
/// never retries and never returns a partial result. Whether to retry is
/// the caller's decision.
#[derive(Error, Debug)]
pub enum PublitioError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Query string encoding error
    #[error("query encoding error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// Failed to read a local file for upload
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The server responded with a status code outside the known set
    #[error("API call returned unknown status code {0}")]
    UnknownStatusCode(u16),

    /// Known status code, but the body was not valid JSON
    #[error("server responded with invalid JSON. Original response: {body}")]
    MalformedResponse {
        /// Raw response text, kept for diagnosis
        body: String,
    },

    /// The media server failed to perform a transformation
    #[error("file transformation failed. Reason: {reason}")]
    TransformationFailed {
        /// HTTP reason phrase returned by the media server
        reason: String,
    },
}
