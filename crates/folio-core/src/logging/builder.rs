//! Builder for the global tracing subscriber.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::{PageError, PageResult};

/// Filter used when neither an explicit filter nor `RUST_LOG` is set
pub const DEFAULT_FILTER: &str = "folio=info,folio_core=info";

/// Builder for creating a tracing subscriber with console output.
pub struct LoggingBuilder {
    env_filter: Option<String>,
    ansi: bool,
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self {
            env_filter: None,
            ansi: true,
        }
    }

    /// Set the filter directives (e.g., "folio=info,folio_core=debug").
    ///
    /// Takes precedence over `RUST_LOG`.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Disable ANSI colors (for piping logs to a file).
    pub fn no_ansi(mut self) -> Self {
        self.ansi = false;
        self
    }

    /// Resolve the filter: explicit, then `RUST_LOG`, then [`DEFAULT_FILTER`].
    pub fn build_filter(&self) -> PageResult<EnvFilter> {
        match &self.env_filter {
            Some(directives) => {
                EnvFilter::try_new(directives).map_err(|e| PageError::Logging(e.to_string()))
            }
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
        }
    }

    /// Install the subscriber globally.
    pub fn init(self) -> PageResult<()> {
        let filter = self.build_filter()?;
        let fmt_layer = tracing_subscriber::fmt::layer().with_ansi(self.ansi);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| PageError::Logging(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_is_used() {
        let filter = LoggingBuilder::new()
            .with_filter("folio_core=debug")
            .build_filter()
            .unwrap();
        assert!(filter.to_string().contains("folio_core=debug"));
    }

    #[test]
    fn colors_on_unless_disabled() {
        assert!(LoggingBuilder::new().ansi);
        assert!(!LoggingBuilder::new().no_ansi().ansi);
    }

    #[test]
    fn invalid_filter_is_logging_error() {
        let err = LoggingBuilder::new()
            .with_filter("folio=notalevel")
            .build_filter()
            .unwrap_err();
        assert!(matches!(err, PageError::Logging(_)));
    }
}
