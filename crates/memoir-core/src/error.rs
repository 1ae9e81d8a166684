//! Error types for the memoir core library.

/// Errors that can occur while loading and serving the datasets.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input document not found on disk
    #[error("Document not found: {path}")]
    NotFound {
        /// Path that could not be read
        path: String,
    },

    /// Input document exists but is not valid JSON for its schema
    #[error("Malformed document {path}: {source}")]
    Malformed {
        /// Path of the offending document
        path: String,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` type alias for memoir operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a not-found error for the given path.
    pub fn not_found(path: impl Into<String>) -> Self {
        Error::NotFound { path: path.into() }
    }

    /// Creates a malformed-document error for the given path.
    pub fn malformed(path: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Malformed {
            path: path.into(),
            source,
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = Error::not_found("data/roster.json");
        assert_eq!(err.to_string(), "Document not found: data/roster.json");
    }

    #[test]
    fn test_malformed_display() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = Error::malformed("data/compiled.json", source);
        let rendered = err.to_string();
        assert!(rendered.starts_with("Malformed document data/compiled.json:"));
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("listen address is empty");
        assert_eq!(
            err.to_string(),
            "Configuration error: listen address is empty"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_error.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
