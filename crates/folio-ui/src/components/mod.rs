//! Reusable UI components.

mod filter_pills;
mod form_field;

pub use filter_pills::*;
pub use form_field::*;
