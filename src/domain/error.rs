//! Error types for the Jokebox plugin.
//!
//! This module defines the crate-wide error type [`JokeboxError`] and a type alias
//! [`Result`] used throughout the plugin. Request-level failures live in
//! [`ApiError`](crate::api::ApiError); they end up in the error panel and are
//! never propagated as `JokeboxError`.

use thiserror::Error;

/// The main error type for Jokebox plugin operations.
///
/// Variants cover configuration problems, theme parsing and I/O.
///
/// # Examples
///
/// ```
/// use jokebox::JokeboxError;
///
/// fn validate_base_url() -> Result<(), JokeboxError> {
///     Err(JokeboxError::Config("base_url must be an absolute URL".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum JokeboxError {
    /// Filesystem or I/O operation failed, e.g. reading a theme file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Raised for malformed plugin options such as a relative `base_url`.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Jokebox operations.
pub type Result<T> = std::result::Result<T, JokeboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn read() -> Result<String> {
            Ok(std::fs::read_to_string("/nonexistent/jokebox/theme.toml")?)
        }
        let err = read().unwrap_err();
        assert!(matches!(err, JokeboxError::Io(_)));
        assert!(err.to_string().starts_with("IO error: "));
    }
}
