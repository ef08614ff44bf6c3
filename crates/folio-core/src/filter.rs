//! Project category filter.

use crate::events::{EventKind, Handler, Listener, Target};
use crate::types::{FilterButton, ProjectItem, ALL_CATEGORIES};

/// A project item together with its current visibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackedItem {
    pub item: ProjectItem,
    pub visible: bool,
}

/// Shows the project items matching the selected category button.
///
/// Once any button exists exactly one of them is active; the items' `visible`
/// flags always agree with [`ProjectFilter::active_filter`].
#[derive(Clone, Debug)]
pub struct ProjectFilter {
    buttons: Vec<FilterButton>,
    items: Vec<TrackedItem>,
    active: Option<usize>,
    active_filter: String,
}

impl ProjectFilter {
    /// The first `"all"` button starts active (or the first button if there
    /// is none), and its filter is applied immediately.
    pub fn new(buttons: Vec<FilterButton>, projects: Vec<ProjectItem>) -> Self {
        let active = buttons
            .iter()
            .position(|b| b.filter == ALL_CATEGORIES)
            .or_else(|| (!buttons.is_empty()).then_some(0));
        let initial = active
            .map(|i| buttons[i].filter.clone())
            .unwrap_or_else(|| ALL_CATEGORIES.to_string());

        let mut filter = Self {
            buttons,
            items: projects
                .into_iter()
                .map(|item| TrackedItem {
                    item,
                    visible: true,
                })
                .collect(),
            active,
            active_filter: String::new(),
        };
        filter.filter_projects(&initial);
        filter
    }

    pub fn listeners(&self) -> Vec<Listener> {
        (0..self.buttons.len())
            .map(|i| {
                Listener::new(
                    EventKind::Click,
                    Target::FilterButton(i),
                    Handler::SelectFilter(i),
                )
            })
            .collect()
    }

    /// Set visibility of every item for `category`.
    ///
    /// `"all"` shows everything; an unknown category hides everything.
    pub fn filter_projects(&mut self, category: &str) {
        for tracked in &mut self.items {
            tracked.visible = category == ALL_CATEGORIES || tracked.item.category == category;
        }
        self.active_filter = category.to_string();
    }

    /// Activate the button at `index` and apply its filter.
    pub fn select(&mut self, index: usize) {
        let Some(button) = self.buttons.get(index) else {
            return;
        };
        let category = button.filter.clone();
        self.active = Some(index);
        self.filter_projects(&category);
        tracing::debug!(
            category = %category,
            visible = self.visible_count(),
            "Project filter selected"
        );
    }

    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    pub fn items(&self) -> &[TrackedItem] {
        &self.items
    }

    pub fn active_button(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.items.get(index).map(|t| t.visible).unwrap_or(false)
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &ProjectItem> {
        self.items.iter().filter(|t| t.visible).map(|t| &t.item)
    }

    pub fn visible_count(&self) -> usize {
        self.items.iter().filter(|t| t.visible).count()
    }
}
