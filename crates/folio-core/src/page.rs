//! The page shell composing the four widgets.
//!
//! [`Page`] owns the page-level [`UiState`], one instance of each widget and
//! the [`ListenerTable`] they are wired through. Hosts feed user input into
//! [`Page::dispatch`] and perform the returned [`Effect`]s.

use crate::contact::ContactFormValidator;
use crate::error::PageResult;
use crate::events::{Effect, Handler, ListenerTable, PageEvent, Target};
use crate::filter::ProjectFilter;
use crate::lightbox::Lightbox;
use crate::markup::PageTargets;
use crate::nav::NavToggle;

/// Body-level flags shared by the widgets.
///
/// NavToggle only writes `nav_open`, Lightbox only writes `scroll_locked`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub nav_open: bool,
    pub scroll_locked: bool,
}

impl UiState {
    /// Value of the body `overflow` style.
    pub fn body_overflow(&self) -> &'static str {
        if self.scroll_locked {
            "hidden"
        } else {
            "auto"
        }
    }
}

#[derive(Clone, Debug)]
pub struct Page {
    targets: PageTargets,
    ui: UiState,
    listeners: ListenerTable,
    nav: NavToggle,
    filter: ProjectFilter,
    lightbox: Lightbox,
    contact: ContactFormValidator,
}

impl Page {
    /// Wire every widget to `targets`, failing if a required target is absent.
    pub fn new(targets: PageTargets) -> PageResult<Self> {
        targets.validate()?;

        let nav = NavToggle::new(
            targets.nav_toggle.clone().unwrap_or_default(),
            targets.nav_links.clone(),
        );
        let filter = ProjectFilter::new(targets.filter_buttons.clone(), targets.projects.clone());
        let lightbox = Lightbox::new(
            targets
                .lightbox
                .as_ref()
                .map(|l| l.close_label.clone())
                .unwrap_or_default(),
            targets.projects.len(),
        );
        let contact = ContactFormValidator::new();

        let mut listeners = ListenerTable::new();
        listeners.extend(nav.listeners());
        listeners.extend(filter.listeners());
        listeners.extend(lightbox.listeners());
        listeners.extend(contact.listeners());

        tracing::debug!(
            listeners = listeners.len(),
            projects = targets.projects.len(),
            "Page wired"
        );

        Ok(Self {
            targets,
            ui: UiState::default(),
            listeners,
            nav,
            filter,
            lightbox,
            contact,
        })
    }

    /// Route an event along its propagation path and run every listener.
    ///
    /// Listeners are collected before any handler runs, so a handler that
    /// deregisters a listener does not affect the current dispatch.
    pub fn dispatch(&mut self, event: PageEvent) -> Vec<Effect> {
        let kind = event.kind();
        let handlers: Vec<Handler> = event
            .target()
            .propagation_path()
            .into_iter()
            .flat_map(|node| self.listeners.handlers_at(kind, node))
            .collect();

        let mut effects = Vec::new();
        for handler in handlers {
            effects.extend(self.run(handler, &event));
        }
        effects
    }

    fn run(&mut self, handler: Handler, event: &PageEvent) -> Vec<Effect> {
        match handler {
            Handler::ToggleNav => {
                self.nav.toggle(&mut self.ui);
                Vec::new()
            }
            Handler::FollowNavLink(i) => self.nav.follow_link(i, &mut self.ui, &self.targets),
            Handler::SelectFilter(i) => {
                self.filter.select(i);
                Vec::new()
            }
            Handler::OpenLightbox(i) => {
                if let Some(project) = self.targets.projects.get(i) {
                    self.lightbox
                        .open(&project.image, &mut self.ui, &mut self.listeners);
                }
                Vec::new()
            }
            Handler::CloseLightbox => {
                self.lightbox.close(&mut self.ui, &mut self.listeners);
                Vec::new()
            }
            Handler::CloseOnBackdrop => {
                self.lightbox
                    .close_on_backdrop(event.target(), &mut self.ui, &mut self.listeners);
                Vec::new()
            }
            Handler::LightboxKeydown => {
                if let PageEvent::KeyDown { key } = event {
                    self.lightbox.keydown(key, &mut self.ui, &mut self.listeners);
                }
                Vec::new()
            }
            Handler::ValidateField(field) => {
                if let PageEvent::Input { value, .. } = event {
                    self.contact.input(field, value.clone());
                }
                Vec::new()
            }
            Handler::SubmitContact => self.contact.submit(),
        }
    }

    pub fn ui(&self) -> UiState {
        self.ui
    }

    pub fn targets(&self) -> &PageTargets {
        &self.targets
    }

    /// The full subscription table, including dynamically registered listeners.
    pub fn listeners(&self) -> &ListenerTable {
        &self.listeners
    }

    pub fn nav(&self) -> &NavToggle {
        &self.nav
    }

    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn contact(&self) -> &ContactFormValidator {
        &self.contact
    }

    /// Shorthand for dispatching a click.
    pub fn click(&mut self, target: Target) -> Vec<Effect> {
        self.dispatch(PageEvent::Click(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use crate::markup::{ContactFormTargets, LightboxTargets};
    use crate::types::{FilterButton, ImageRef, NavLink, ProjectItem};

    fn targets() -> PageTargets {
        PageTargets {
            nav_toggle: Some("Menu".to_string()),
            nav_links: vec![NavLink::new("Projects", "#projects")],
            anchors: Vec::new(),
            filter_buttons: vec![FilterButton::new("All", "all")],
            projects: vec![ProjectItem::new(
                "Atlas",
                "web-dev",
                ImageRef::new("atlas.jpg", "Atlas"),
            )],
            lightbox: Some(LightboxTargets::default()),
            contact_form: Some(ContactFormTargets::default()),
        }
    }

    #[test]
    fn new_rejects_incomplete_targets() {
        let result = Page::new(PageTargets::default());
        assert!(result.is_err());
    }

    #[test]
    fn static_table_has_one_listener_per_element() {
        let page = Page::new(targets()).unwrap();
        // toggle + 1 link + 1 filter + 1 thumbnail + close + overlay + 3 fields + submit
        assert_eq!(page.listeners().len(), 10);
        assert_eq!(page.listeners().count(EventKind::KeyDown, Target::Document), 0);
    }

    #[test]
    fn nav_and_lightbox_flags_are_independent() {
        let mut page = Page::new(targets()).unwrap();
        page.click(Target::NavToggle);
        page.click(Target::ProjectImage(0));
        assert_eq!(
            page.ui(),
            UiState {
                nav_open: true,
                scroll_locked: true
            }
        );

        page.click(Target::LightboxClose);
        assert!(page.ui().nav_open);
        assert_eq!(page.ui().body_overflow(), "auto");
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let mut page = Page::new(targets()).unwrap();
        assert!(page.click(Target::NavLink(7)).is_empty());
        assert!(page.click(Target::ProjectImage(7)).is_empty());
        assert!(!page.lightbox().is_open());
    }
}
