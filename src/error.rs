//! Module for the error management
use crate::endpoints::Endpoint;
use thiserror::Error;

/// An error that can occur when talking to the realtime API.
#[derive(Error, Debug)]
pub enum Error {
    /// The transport call itself could not complete (unreachable host,
    /// timeout at the transport layer)
    #[error("impossible to reach the realtime API")]
    Fetch(#[from] reqwest::Error),
    /// The base URL and request path do not combine into a valid URL
    #[error("impossible to build a valid request url")]
    InvalidUrl(#[from] url::ParseError),
    /// The remote service answered with a non-success status. A missing or
    /// invalid API key is observed as status 401
    #[error("HTTP {status}: {text}")]
    Status {
        /// Numeric HTTP status code
        status: u16,
        /// Status text associated with the code
        text: String,
    },
    /// A successful response body could not be decoded into the declared
    /// response shape
    #[error("impossible to decode response body")]
    Decode(#[from] serde_json::Error),
    /// The mock dispatcher has no stored response for the requested endpoint
    #[error("no mock response set for endpoint: {0}")]
    NoMockResponse(Endpoint),
    /// The value is not an ISO 8601 date-time
    #[error("'{0}' is not a valid date-time; ISO 8601 format is expected")]
    InvalidDateTime(String),
    /// The value is not a YYYY-MM-DD date
    #[error("'{0}' is not a valid date; YYYY-MM-DD format is expected")]
    InvalidDate(String),
}
