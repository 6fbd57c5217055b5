//! Error types exposed by the dashboard's GitHub layer.

use thiserror::Error;

/// Errors surfaced while validating input, talking to GitHub, or rendering.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DashboardError {
    /// No access token was available from any configuration source.
    #[error("GitHub access token is required")]
    MissingToken,

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// A repository path segment was empty or malformed.
    #[error("repository {segment} must be a non-empty path segment")]
    InvalidRepository {
        /// Which segment failed validation (`owner` or `name`).
        segment: &'static str,
    },

    /// The API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// The access token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error, including GraphQL
    /// error envelopes and responses missing the `data` payload.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The page template failed to render.
    #[error("template error: {message}")]
    Template {
        /// minijinja error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
