//! Events, effects and the listener table.
//!
//! Every component declares the listeners it attaches at setup time as
//! plain [`Listener`] records. [`crate::Page`] keeps them in a
//! [`ListenerTable`] and routes each [`PageEvent`] along its propagation
//! path, so the complete behavior surface can be listed and exercised
//! without a rendering environment.

use serde::{Deserialize, Serialize};

use crate::contact::Submission;
use crate::types::FieldName;

/// Kinds of user input the page reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Click,
    Input,
    KeyDown,
    Submit,
}

/// Elements an event can be dispatched to.
///
/// Indexed targets refer to the position of the element in
/// [`crate::PageTargets`]; an index past the end names no element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    NavToggle,
    NavLink(usize),
    FilterButton(usize),
    ProjectImage(usize),
    LightboxOverlay,
    LightboxImage,
    LightboxClose,
    Field(FieldName),
    ContactForm,
    Document,
}

impl Target {
    /// The target followed by its ancestors, ending at the document.
    pub fn propagation_path(&self) -> Vec<Target> {
        match self {
            Target::Document => vec![Target::Document],
            Target::LightboxImage | Target::LightboxClose => {
                vec![*self, Target::LightboxOverlay, Target::Document]
            }
            Target::Field(_) => vec![*self, Target::ContactForm, Target::Document],
            _ => vec![*self, Target::Document],
        }
    }
}

/// A user event delivered to the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageEvent {
    Click(Target),
    Input { field: FieldName, value: String },
    KeyDown { key: String },
    Submit,
}

impl PageEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            PageEvent::Click(_) => EventKind::Click,
            PageEvent::Input { .. } => EventKind::Input,
            PageEvent::KeyDown { .. } => EventKind::KeyDown,
            PageEvent::Submit => EventKind::Submit,
        }
    }

    /// The element the event originated at.
    pub fn target(&self) -> Target {
        match self {
            PageEvent::Click(target) => *target,
            PageEvent::Input { field, .. } => Target::Field(*field),
            PageEvent::KeyDown { .. } => Target::Document,
            PageEvent::Submit => Target::ContactForm,
        }
    }

    pub fn key(key: impl Into<String>) -> Self {
        PageEvent::KeyDown { key: key.into() }
    }

    pub fn input(field: FieldName, value: impl Into<String>) -> Self {
        PageEvent::Input {
            field,
            value: value.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
}

impl ScrollBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollBehavior::Smooth => "smooth",
        }
    }
}

/// Host-side work requested by a dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Suppress the browser's default action for the event
    PreventDefault,
    /// Scroll the element with this identifier into view
    ScrollIntoView { id: String, behavior: ScrollBehavior },
    /// A valid form was accepted
    Submitted(Submission),
    /// Show a user-facing acknowledgment
    Acknowledge(String),
}

/// Behavior attached to a listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handler {
    ToggleNav,
    FollowNavLink(usize),
    SelectFilter(usize),
    OpenLightbox(usize),
    CloseLightbox,
    CloseOnBackdrop,
    LightboxKeydown,
    ValidateField(FieldName),
    SubmitContact,
}

/// One row of the subscription table: event kind on a target runs a handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Listener {
    pub kind: EventKind,
    pub on: Target,
    pub handler: Handler,
}

impl Listener {
    pub fn new(kind: EventKind, on: Target, handler: Handler) -> Self {
        Self { kind, on, handler }
    }
}

/// Registered listeners in registration order.
///
/// Adding a listener identical to one already present is a no-op, matching
/// `addEventListener`, so re-registering never accumulates duplicates.
#[derive(Clone, Debug, Default)]
pub struct ListenerTable {
    entries: Vec<Listener>,
}

impl ListenerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the listener was not already registered.
    pub fn add(&mut self, listener: Listener) -> bool {
        if self.entries.contains(&listener) {
            return false;
        }
        self.entries.push(listener);
        true
    }

    /// Returns `true` if the listener was registered.
    pub fn remove(&mut self, listener: &Listener) -> bool {
        let before = self.entries.len();
        self.entries.retain(|l| l != listener);
        self.entries.len() != before
    }

    pub fn contains(&self, listener: &Listener) -> bool {
        self.entries.contains(listener)
    }

    /// Handlers for `kind` attached exactly at `on`, in registration order.
    pub fn handlers_at(&self, kind: EventKind, on: Target) -> Vec<Handler> {
        self.entries
            .iter()
            .filter(|l| l.kind == kind && l.on == on)
            .map(|l| l.handler)
            .collect()
    }

    pub fn count(&self, kind: EventKind, on: Target) -> usize {
        self.entries
            .iter()
            .filter(|l| l.kind == kind && l.on == on)
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listener> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<Listener> for ListenerTable {
    fn extend<T: IntoIterator<Item = Listener>>(&mut self, iter: T) {
        for listener in iter {
            self.add(listener);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape_listener() -> Listener {
        Listener::new(EventKind::KeyDown, Target::Document, Handler::LightboxKeydown)
    }

    #[test]
    fn add_is_idempotent() {
        let mut table = ListenerTable::new();
        assert!(table.add(escape_listener()));
        assert!(!table.add(escape_listener()));
        assert_eq!(table.count(EventKind::KeyDown, Target::Document), 1);
    }

    #[test]
    fn remove_missing_listener_is_noop() {
        let mut table = ListenerTable::new();
        assert!(!table.remove(&escape_listener()));
        table.add(escape_listener());
        assert!(table.remove(&escape_listener()));
        assert!(table.is_empty());
    }

    #[test]
    fn image_click_bubbles_through_overlay() {
        assert_eq!(
            Target::LightboxImage.propagation_path(),
            vec![Target::LightboxImage, Target::LightboxOverlay, Target::Document]
        );
        assert_eq!(Target::Document.propagation_path(), vec![Target::Document]);
    }

    #[test]
    fn event_targets() {
        assert_eq!(
            PageEvent::input(FieldName::Email, "x").target(),
            Target::Field(FieldName::Email)
        );
        assert_eq!(PageEvent::key("Escape").target(), Target::Document);
        assert_eq!(PageEvent::Submit.kind(), EventKind::Submit);
    }
}
