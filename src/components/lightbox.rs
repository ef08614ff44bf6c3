//! Lightbox Overlay Component
//!
//! Always present in the tree; shown while it carries the `active` class.
//! Clicks on the image and the close control stop propagating here, the
//! page model decides whether a click on the overlay closes it.

use dioxus::prelude::*;
use folio_core::markup::ids;
use folio_core::{PageEvent, Target};

use crate::context::{use_dispatcher, use_page};

#[component]
pub fn LightboxOverlay() -> Element {
    let page = use_page();
    let dispatcher = use_dispatcher();

    let (open, image, close_label) = {
        let page = page.read();
        let lightbox = page.lightbox();
        (
            lightbox.is_open(),
            lightbox.image().clone(),
            lightbox.close_label().to_string(),
        )
    };

    rsx! {
        div {
            id: ids::LIGHTBOX,
            class: if open { "lightbox active" } else { "lightbox" },
            role: "dialog",
            "aria-modal": "true",
            "aria-hidden": if open { "false" } else { "true" },
            onclick: move |_| {
                dispatcher.dispatch(PageEvent::Click(Target::LightboxOverlay));
            },

            button {
                class: "lightbox-close",
                "aria-label": "{close_label}",
                onclick: move |e| {
                    e.stop_propagation();
                    dispatcher.dispatch(PageEvent::Click(Target::LightboxClose));
                },
                "×"
            }

            img {
                id: ids::LIGHTBOX_IMAGE,
                src: "{image.src}",
                alt: "{image.alt}",
                onclick: move |e| {
                    e.stop_propagation();
                    dispatcher.dispatch(PageEvent::Click(Target::LightboxImage));
                },
            }
        }
    }
}
