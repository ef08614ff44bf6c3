//! Navigation Header Component
//!
//! Site title, the mobile nav toggle and the nav links. The panel's
//! visibility is driven by the `nav-open` class on the page root.

use dioxus::prelude::*;
use folio_core::{PageEvent, Target};

use crate::context::{use_dispatcher, use_page};

#[component]
pub fn NavHeader(title: String) -> Element {
    let page = use_page();
    let dispatcher = use_dispatcher();

    let nav_open = page.read().ui().nav_open;
    let toggle_label = page.read().nav().label().to_string();
    let links = page.read().nav().links().to_vec();

    rsx! {
        header { class: "site-header",
            a { class: "site-logo", href: "#about", "{title}" }

            button {
                class: "nav-toggle",
                "aria-label": "{toggle_label}",
                "aria-expanded": if nav_open { "true" } else { "false" },
                onclick: move |_| {
                    dispatcher.dispatch(PageEvent::Click(Target::NavToggle));
                },
                span { class: "hamburger" }
            }

            nav { class: "main-nav",
                ul {
                    for (index, link) in links.into_iter().enumerate() {
                        li { key: "{index}",
                            a {
                                href: "{link.href}",
                                onclick: move |e: MouseEvent| {
                                    if dispatcher.dispatch(PageEvent::Click(Target::NavLink(index))) {
                                        e.prevent_default();
                                    }
                                },
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
