//! Project Grid Component
//!
//! Filter pills above a grid of project tiles. Hidden tiles keep their place
//! in the markup and carry the `hide` class.

use dioxus::prelude::*;
use folio_core::markup::ids;
use folio_core::{PageEvent, Target};
use folio_ui::FilterPills;

use crate::context::{use_dispatcher, use_page};

#[component]
pub fn ProjectGrid() -> Element {
    let page = use_page();
    let dispatcher = use_dispatcher();

    let (buttons, active, items) = {
        let page = page.read();
        let filter = page.filter();
        (
            filter.buttons().to_vec(),
            filter.active_button(),
            filter.items().to_vec(),
        )
    };

    rsx! {
        section { id: ids::PROJECTS, class: "projects",
            h2 { class: "section-title", "Projects" }

            FilterPills {
                buttons,
                active,
                on_select: move |index| {
                    dispatcher.dispatch(PageEvent::Click(Target::FilterButton(index)));
                },
            }

            div { class: "project-grid",
                for (index, tracked) in items.into_iter().enumerate() {
                    div {
                        key: "{index}",
                        class: if tracked.visible { "project-item" } else { "project-item hide" },
                        "data-category": "{tracked.item.category}",

                        img {
                            src: "{tracked.item.image.src}",
                            alt: "{tracked.item.image.alt}",
                            onclick: move |_| {
                                dispatcher.dispatch(PageEvent::Click(Target::ProjectImage(index)));
                            },
                        }
                        div { class: "project-info",
                            h3 { "{tracked.item.title}" }
                            span { class: "project-category", "{tracked.item.category}" }
                        }
                    }
                }
            }
        }
    }
}
