//! Logging setup and in-memory event capture.
//!
//! ## Usage
//!
//! ```ignore
//! use folio_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_filter("folio=debug,folio_core=debug")
//!     .init()?;
//! ```
//!
//! ### Capturing events in tests
//!
//! ```ignore
//! use folio_core::logging::CaptureLayer;
//! use tracing_subscriber::prelude::*;
//!
//! let capture = CaptureLayer::new();
//! let subscriber = tracing_subscriber::registry().with(capture.clone());
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::info!(answer = 42, "hello");
//! });
//! assert_eq!(capture.events()[0].message, "hello");
//! ```

pub mod builder;
pub mod capture;

pub use builder::{LoggingBuilder, DEFAULT_FILTER};
pub use capture::{CaptureLayer, CapturedEvent};
