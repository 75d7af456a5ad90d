//! Error types for survey store operations.
//!
//! The transport failure kinds are mutually exclusive so callers can pick
//! distinct user-facing messages: a timed-out list call is `Timeout`, an
//! unreachable server is `Network`, a 4xx rejection is `Client`. Server
//! errors on list are not represented here at all; they degrade to an
//! empty [`ListOutcome`](crate::types::ListOutcome) instead.

use thiserror::Error;

/// Error type for survey store operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request did not resolve within its deadline.
    #[error("request timed out")]
    Timeout,

    /// The server could not be reached.
    #[error("unable to reach server: {0}")]
    Network(String),

    /// The server rejected a read request (4xx other than 404 on get).
    #[error("server rejected request: HTTP {status}")]
    Client { status: u16 },

    /// The requested survey does not exist.
    #[error("survey not found")]
    NotFound,

    /// A fetch-by-id failed for a reason other than absence.
    #[error("failed to fetch survey: HTTP {status}")]
    Fetch { status: u16 },

    /// A create or update was refused; `message` carries the server's
    /// `detail` when it provided one.
    #[error("{message}")]
    Submit { message: String },

    /// A delete was refused.
    #[error("failed to delete survey: HTTP {status}")]
    Delete { status: u16 },

    /// The server answered 2xx with a body that does not match the
    /// contract.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Classify a transport-level failure from the HTTP client.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Network(err.to_string())
        }
    }

    /// Returns true if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout)
    }

    /// Returns true if the server was unreachable.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Returns true if the target survey was absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}
