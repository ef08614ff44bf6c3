//! Folio UI Components
//!
//! Dioxus components for the portfolio page. They are purely
//! presentational: state lives in `folio_core::Page`, and every user action
//! is reported through an `EventHandler` so the host can dispatch it.

pub mod components;

pub use components::*;
