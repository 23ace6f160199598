//! Request failure kinds.
//!
//! The `Display` text of each variant is exactly what the error panel shows,
//! so callers can surface a failure with `err.to_string()`.

use thiserror::Error;

/// Message shown when the server has no joke matching the filter.
pub const NOT_FOUND_MESSAGE: &str = "No jokes found matching your criteria. Try different filters!";

/// Failure of a joke or tag request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered 404: nothing matches the filter.
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    /// The server answered with another non-2xx status.
    #[error("HTTP error! status: {status}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Message from the server's `{error, message}` envelope, if any.
        detail: Option<String>,
    },

    /// The request never produced an HTTP response.
    #[error("Failed to fetch: {0}")]
    Network(String),

    /// A 2xx response whose body is not the expected JSON.
    #[error("Invalid response from server: {0}")]
    Decode(String),

    /// The host has not granted `WebAccess`, so no request can be sent.
    #[error("Web access is not granted. Allow the permission request to fetch jokes.")]
    NoWebAccess,
}

impl ApiError {
    /// Text for the error panel.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Returns the HTTP status for server-side failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound => Some(404),
            Self::Http { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) | Self::NoWebAccess => None,
        }
    }
}
