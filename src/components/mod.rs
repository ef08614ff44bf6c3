//! UI Components for Folio.

mod contact_form;
mod lightbox;
mod nav_header;
mod project_grid;

pub use contact_form::ContactForm;
pub use lightbox::LightboxOverlay;
pub use nav_header::NavHeader;
pub use project_grid::ProjectGrid;
