//! Mobile navigation toggle.
//!
//! Flips the page-level `nav_open` flag and closes the panel whenever a nav
//! link is followed. In-page anchors are scrolled to smoothly instead of
//! jumping.

use crate::events::{Effect, EventKind, Handler, Listener, ScrollBehavior, Target};
use crate::markup::PageTargets;
use crate::page::UiState;
use crate::types::NavLink;

#[derive(Clone, Debug)]
pub struct NavToggle {
    label: String,
    links: Vec<NavLink>,
}

impl NavToggle {
    pub fn new(label: impl Into<String>, links: Vec<NavLink>) -> Self {
        Self {
            label: label.into(),
            links,
        }
    }

    /// Listeners attached at setup: the toggle plus one per link.
    pub fn listeners(&self) -> Vec<Listener> {
        let mut listeners = vec![Listener::new(
            EventKind::Click,
            Target::NavToggle,
            Handler::ToggleNav,
        )];
        listeners.extend((0..self.links.len()).map(|i| {
            Listener::new(EventKind::Click, Target::NavLink(i), Handler::FollowNavLink(i))
        }));
        listeners
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn toggle(&self, ui: &mut UiState) {
        ui.nav_open = !ui.nav_open;
        tracing::debug!(open = ui.nav_open, "Navigation toggled");
    }

    /// Handle a click on the link at `index`.
    ///
    /// The panel is closed for every link, including external ones.
    pub fn follow_link(&self, index: usize, ui: &mut UiState, page: &PageTargets) -> Vec<Effect> {
        let mut effects = Vec::new();

        if let Some(fragment) = self.links.get(index).and_then(NavLink::fragment) {
            effects.push(Effect::PreventDefault);
            if page.has_anchor(fragment) {
                effects.push(Effect::ScrollIntoView {
                    id: fragment.to_string(),
                    behavior: ScrollBehavior::Smooth,
                });
            } else {
                tracing::debug!(fragment, "Anchor target not found");
            }
        }

        ui.nav_open = false;
        effects
    }
}
