//! Error types for remote collection calls.
//!
//! Every call returns a tagged result rather than leaving callers to sniff
//! response status: a failure is either a transport error, a rejection by
//! the store, or an undecodable success body.

use thiserror::Error;

/// Errors that can occur talking to the remote collection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request never completed (connection refused, DNS failure, ...).
    #[error("Request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The store answered with a non-2xx status.
    #[error("Store rejected the request (status {status})")]
    Rejected {
        status: u16,
        /// The `message` field of the response body, when the server
        /// provided one.
        message: Option<String>,
    },

    /// A 2xx response whose body could not be decoded.
    #[error("Invalid response from store: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

impl StoreError {
    /// The server-provided failure message, when present.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            StoreError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text for the user-facing notice: the server's own message when it
    /// sent one, otherwise the generic description.
    pub fn notice_text(&self) -> String {
        match self.server_message() {
            Some(message) => message.to_string(),
            None => self.to_string(),
        }
    }
}
