//! Filter Pills Component
//!
//! Horizontal row of project category filter buttons.

use dioxus::prelude::*;
use folio_core::FilterButton;

/// Properties for the FilterPills component
#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    /// Filter buttons in markup order
    pub buttons: Vec<FilterButton>,
    /// Index of the active button
    pub active: Option<usize>,
    /// Handler called with the index of the clicked button
    pub on_select: EventHandler<usize>,
}

/// Displays the filter buttons; exactly the active one carries `active`.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FilterPills {
///         buttons: page.read().filter().buttons().to_vec(),
///         active: page.read().filter().active_button(),
///         on_select: move |i| dispatch(PageEvent::Click(Target::FilterButton(i)))
///     }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    rsx! {
        div {
            class: "filter-buttons",
            role: "radiogroup",
            "aria-label": "Filter projects by category",
            for (index, button) in props.buttons.iter().enumerate() {
                {
                    let is_active = props.active == Some(index);
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{index}",
                            class: pill_class(is_active),
                            role: "radio",
                            "aria-checked": if is_active { "true" } else { "false" },
                            "data-filter": "{button.filter}",
                            onclick: move |_| on_select.call(index),
                            "{button.label}"
                        }
                    }
                }
            }
        }
    }
}

/// CSS class for a filter button.
pub fn pill_class(active: bool) -> &'static str {
    if active {
        "filter-btn active"
    } else {
        "filter-btn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_pill_has_active_class() {
        assert_eq!(pill_class(true), "filter-btn active");
        assert_eq!(pill_class(false), "filter-btn");
    }
}
