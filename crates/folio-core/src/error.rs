//! Error types for Folio

use thiserror::Error;

/// Main error type for page setup and configuration.
///
/// Runtime event handling never fails; these errors only surface while
/// loading configuration or wiring a [`crate::Page`].
#[derive(Error, Debug)]
pub enum PageError {
    /// A target required by the initialization contract is absent
    #[error("Missing required target: {0}")]
    MissingTarget(String),

    /// Site configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using PageError
pub type PageResult<T> = Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PageError::MissingTarget("lightbox".to_string());
        assert_eq!(format!("{}", err), "Missing required target: lightbox");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let page_err: PageError = io_err.into();
        assert!(matches!(page_err, PageError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let page_err: PageError = json_err.into();
        assert!(matches!(page_err, PageError::Config(_)));
    }
}
