//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // CMS API Errors
    // ─────────────────────────────────────────────────────────────
    #[error("HTTP request failed: {message}")]
    Http { message: String },

    #[error("Server returned {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Not logged in")]
    Unauthorized,

    #[error("Login rejected: {reason}")]
    LoginRejected { reason: String },

    #[error("Unexpected response: {message}")]
    InvalidResponse { message: String },

    #[error("Invalid API base URL: {url}")]
    InvalidBaseUrl { url: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn http(message: impl Into<String>) -> Self {
        Self::Http {
            message: message.into(),
        }
    }

    pub fn http_status(status: u16, url: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            url: url.into(),
        }
    }

    pub fn login_rejected(reason: impl Into<String>) -> Self {
        Self::LoginRejected {
            reason: reason.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    pub fn invalid_base_url(url: impl Into<String>) -> Self {
        Self::InvalidBaseUrl { url: url.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// A transient transport or server failure: sending the same request
    /// again may succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Http { .. } | Error::HttpStatus { .. } | Error::InvalidResponse { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::http("connection refused");
        assert_eq!(err.to_string(), "HTTP request failed: connection refused");

        let err = Error::http_status(500, "http://cms/getlist");
        assert_eq!(err.to_string(), "Server returned 500 for http://cms/getlist");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::http("reset").is_recoverable());
        assert!(Error::http_status(503, "http://cms/update_post").is_recoverable());
        assert!(!Error::Unauthorized.is_recoverable());
        assert!(!Error::login_rejected("bad password").is_recoverable());
        assert!(!Error::invalid_base_url("::nope").is_recoverable());
    }

    #[test]
    fn test_login_rejected_keeps_reason() {
        let err = Error::login_rejected("User not found");
        assert!(err.to_string().contains("User not found"));
    }

    #[test]
    fn test_context_preserves_variant() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.context("reading config").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
