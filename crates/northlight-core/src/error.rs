//! Error types for the Northlight site.
//!
//! [`SiteError`] covers every error category the site can produce: HTTP
//! errors surfaced by the page handlers, template rendering failures,
//! configuration problems, and mail-relay failures. Each variant maps to
//! an HTTP status code via [`SiteError::status_code`].

use thiserror::Error;

/// The primary error type for the Northlight site.
#[derive(Error, Debug)]
pub enum SiteError {
    // ── HTTP errors ──────────────────────────────────────────────────

    /// HTTP 400 Bad Request.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// HTTP 404 Not Found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// HTTP 405 Method Not Allowed.
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// HTTP 500 Internal Server Error.
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    // ── Collaborators ────────────────────────────────────────────────

    /// The email relay reported a failed dispatch.
    #[error("Mail relay error: {0}")]
    RelayError(String),

    // ── Templates ────────────────────────────────────────────────────

    /// A template failed to render.
    #[error("Template error: {0}")]
    TemplateError(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SiteError {
    /// Returns the HTTP status code associated with this error.
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::NotFound(_) => 404,
            Self::MethodNotAllowed(_) => 405,
            Self::RelayError(_) => 502,
            Self::InternalServerError(_)
            | Self::TemplateError(_)
            | Self::ConfigurationError(_)
            | Self::IoError(_) => 500,
        }
    }
}

/// A convenience type alias for `Result<T, SiteError>`.
pub type SiteResult<T> = Result<T, SiteError>;
