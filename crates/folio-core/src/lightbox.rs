//! Image lightbox.
//!
//! Two states, Closed and Open. Opening copies the clicked thumbnail's
//! source and alt text, locks background scrolling and registers a
//! document-level keydown listener; every way of closing undoes all three.
//!
//! ```text
//!            thumbnail click
//!  Closed ─────────────────────▶ Open
//!    ▲                            │
//!    └────────────────────────────┘
//!     Escape | close control | overlay background
//! ```

use crate::events::{EventKind, Handler, Listener, ListenerTable, Target};
use crate::page::UiState;
use crate::types::ImageRef;

/// Key that closes an open lightbox
pub const ESCAPE_KEY: &str = "Escape";

/// The document keydown listener owned by an open lightbox.
pub fn escape_listener() -> Listener {
    Listener::new(EventKind::KeyDown, Target::Document, Handler::LightboxKeydown)
}

#[derive(Clone, Debug, Default)]
pub struct Lightbox {
    close_label: String,
    thumbnails: usize,
    open: bool,
    image: ImageRef,
}

impl Lightbox {
    pub fn new(close_label: impl Into<String>, thumbnails: usize) -> Self {
        Self {
            close_label: close_label.into(),
            thumbnails,
            ..Default::default()
        }
    }

    /// Static listeners: one per thumbnail, the close control and the overlay.
    ///
    /// The escape listener is not part of this set; it only exists while open.
    pub fn listeners(&self) -> Vec<Listener> {
        let mut listeners: Vec<Listener> = (0..self.thumbnails)
            .map(|i| {
                Listener::new(
                    EventKind::Click,
                    Target::ProjectImage(i),
                    Handler::OpenLightbox(i),
                )
            })
            .collect();
        listeners.push(Listener::new(
            EventKind::Click,
            Target::LightboxClose,
            Handler::CloseLightbox,
        ));
        listeners.push(Listener::new(
            EventKind::Click,
            Target::LightboxOverlay,
            Handler::CloseOnBackdrop,
        ));
        listeners
    }

    pub fn open(&mut self, image: &ImageRef, ui: &mut UiState, listeners: &mut ListenerTable) {
        self.open = true;
        self.image = image.clone();
        ui.scroll_locked = true;
        listeners.add(escape_listener());
        tracing::debug!(src = %self.image.src, "Lightbox opened");
    }

    pub fn close(&mut self, ui: &mut UiState, listeners: &mut ListenerTable) {
        self.open = false;
        ui.scroll_locked = false;
        listeners.remove(&escape_listener());
        tracing::debug!("Lightbox closed");
    }

    /// Close only when the click landed on the overlay itself.
    pub fn close_on_backdrop(
        &mut self,
        target: Target,
        ui: &mut UiState,
        listeners: &mut ListenerTable,
    ) {
        if target == Target::LightboxOverlay {
            self.close(ui, listeners);
        }
    }

    pub fn keydown(&mut self, key: &str, ui: &mut UiState, listeners: &mut ListenerTable) {
        if key == ESCAPE_KEY {
            self.close(ui, listeners);
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The image currently (or most recently) displayed.
    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    pub fn close_label(&self) -> &str {
        &self.close_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Lightbox, UiState, ListenerTable) {
        (Lightbox::new("Close", 2), UiState::default(), ListenerTable::new())
    }

    #[test]
    fn open_copies_image_and_locks_scroll() {
        let (mut lb, mut ui, mut table) = setup();
        let image = ImageRef::new("img/atlas.jpg", "Atlas dashboard");
        lb.open(&image, &mut ui, &mut table);

        assert!(lb.is_open());
        assert_eq!(lb.image(), &image);
        assert!(ui.scroll_locked);
        assert!(table.contains(&escape_listener()));
    }

    #[test]
    fn close_releases_everything() {
        let (mut lb, mut ui, mut table) = setup();
        lb.open(&ImageRef::new("a.jpg", "a"), &mut ui, &mut table);
        lb.close(&mut ui, &mut table);

        assert!(!lb.is_open());
        assert!(!ui.scroll_locked);
        assert_eq!(table.count(EventKind::KeyDown, Target::Document), 0);
    }

    #[test]
    fn only_escape_closes() {
        let (mut lb, mut ui, mut table) = setup();
        lb.open(&ImageRef::new("a.jpg", "a"), &mut ui, &mut table);
        lb.keydown("Enter", &mut ui, &mut table);
        assert!(lb.is_open());
        lb.keydown("Escape", &mut ui, &mut table);
        assert!(!lb.is_open());
    }

    #[test]
    fn backdrop_ignores_descendant_targets() {
        let (mut lb, mut ui, mut table) = setup();
        lb.open(&ImageRef::new("a.jpg", "a"), &mut ui, &mut table);
        lb.close_on_backdrop(Target::LightboxImage, &mut ui, &mut table);
        assert!(lb.is_open());
        lb.close_on_backdrop(Target::LightboxOverlay, &mut ui, &mut table);
        assert!(!lb.is_open());
    }

    #[test]
    fn close_when_closed_is_harmless() {
        let (mut lb, mut ui, mut table) = setup();
        lb.close(&mut ui, &mut table);
        assert!(!lb.is_open());
        assert!(table.is_empty());
    }

    #[test]
    fn static_listeners() {
        let (lb, _, _) = setup();
        let listeners = lb.listeners();
        assert_eq!(listeners.len(), 4);
        assert!(!listeners.contains(&escape_listener()));
    }
}
