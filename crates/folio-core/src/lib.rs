//! Folio Core Library
//!
//! Headless behavior model for an interactive portfolio page.
//!
//! ## Overview
//!
//! The page has four independent widgets:
//!
//! - **NavToggle**: opens and closes the mobile navigation panel, scrolling
//!   smoothly to in-page anchors
//! - **ProjectFilter**: shows the project items of the selected category
//! - **Lightbox**: full-size image overlay closed by Escape, the close
//!   control or a click on the backdrop
//! - **ContactFormValidator**: per-field validation on input and on submit
//!
//! They share nothing but the body-level [`UiState`] owned by [`Page`]. Each
//! widget declares its listeners up front, and the page routes events
//! through that table, so everything here runs without a renderer.
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::{Effect, Page, PageEvent, SiteConfig, Target};
//!
//! let mut page = Page::new(SiteConfig::default().targets).unwrap();
//!
//! page.dispatch(PageEvent::Click(Target::NavToggle));
//! assert!(page.ui().nav_open);
//!
//! let effects = page.dispatch(PageEvent::Click(Target::NavLink(2)));
//! assert!(effects.contains(&Effect::PreventDefault));
//! assert!(!page.ui().nav_open);
//! ```

pub mod config;
pub mod contact;
pub mod error;
pub mod events;
pub mod filter;
pub mod lightbox;
pub mod logging;
pub mod markup;
pub mod nav;
pub mod page;
pub mod types;

// Re-exports
pub use config::SiteConfig;
pub use contact::{
    is_valid_email, validate, ContactFormValidator, FieldValidation, Submission, ValidationError,
};
pub use error::{PageError, PageResult};
pub use events::{
    Effect, EventKind, Handler, Listener, ListenerTable, PageEvent, ScrollBehavior, Target,
};
pub use filter::{ProjectFilter, TrackedItem};
pub use lightbox::Lightbox;
pub use markup::{ContactFormTargets, FieldTarget, LightboxTargets, PageTargets};
pub use nav::NavToggle;
pub use page::{Page, UiState};
pub use types::*;
