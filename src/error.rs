use reqwest::StatusCode;
use thiserror::Error;

/// The error type for every fallible operation in this crate.
///
/// Configuration of a call builder never fails; errors surface only when a
/// call is executed. Callers that need to decide whether a retry makes sense
/// can use [`Error::is_transport`] and [`Error::is_decode`] instead of
/// matching variants.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be sent or the connection failed.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not a well-formed `{data, pagination}` envelope.
    #[error("could not decode response envelope: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API answered with a non-success status code.
    #[error("api returned {status}: {message}")]
    Status {
        /// Status code of the response.
        status: StatusCode,
        /// Body of the error response, as returned by the API.
        message: String,
    },

    /// The client could not be constructed from the given configuration.
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// The rate limiter shut down before a request slot became available.
    #[error("{0}")]
    RateLimit(#[from] tokio::sync::AcquireError),
}

impl Error {
    /// Returns `true` if the error occurred before a response body could be
    /// decoded: connection failures, non-success statuses and a closed
    /// rate limiter all count as transport failures.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Transport(_) | Error::Status { .. } | Error::RateLimit(_)
        )
    }

    /// Returns `true` if a response arrived but its body did not match the
    /// expected envelope shape.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }
}
