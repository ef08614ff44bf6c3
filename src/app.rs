use dioxus::prelude::*;
use folio_core::markup::ids;
use folio_core::{PageEvent, SiteConfig};

use crate::components::{ContactForm, LightboxOverlay, NavHeader, ProjectGrid};
use crate::context::{get_site, sync_body_overflow, Dispatcher};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the page context. The page root carries the
/// `nav-open` flag; the lightbox scroll lock is mirrored onto
/// `document.body.style.overflow`.
#[component]
pub fn App() -> Element {
    let Some(site) = get_site() else {
        return rsx! {
            style { {GLOBAL_STYLES} }
            p { class: "fatal", "Site was not initialized." }
        };
    };

    let page = use_signal(|| site.page.clone());
    use_context_provider(|| page);
    let dispatcher = Dispatcher::new(page);

    let ui = page.read().ui();
    let root_class = if ui.nav_open { "page nav-open" } else { "page" };

    // Scroll lock applies to <body>, not the page root
    use_effect(move || {
        let overflow = page.read().ui().body_overflow();
        sync_body_overflow(overflow);
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "{root_class}",
            tabindex: "-1",
            onkeydown: move |e: KeyboardEvent| {
                dispatcher.dispatch(PageEvent::key(e.key().to_string()));
            },

            NavHeader { title: site.config.title.clone() }

            main {
                Hero { config: site.config.clone() }
                ProjectGrid {}
                ContactForm {}
            }

            footer { class: "site-footer",
                p { "© {site.config.title}" }
            }

            LightboxOverlay {}
        }
    }
}

#[component]
fn Hero(config: SiteConfig) -> Element {
    rsx! {
        section { id: ids::ABOUT, class: "hero",
            h1 { class: "hero-title", "{config.title}" }
            if !config.tagline.is_empty() {
                p { class: "hero-tagline", "{config.tagline}" }
            }
        }
    }
}
