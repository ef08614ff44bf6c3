//! Page context for Folio.
//!
//! The site configuration and the wired [`Page`] are built once in `main`,
//! then handed to the component tree through a signal.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let page = use_page();
//! let dispatcher = use_dispatcher();
//! dispatcher.dispatch(PageEvent::Click(Target::NavToggle));
//! ```

use std::sync::OnceLock;

use dioxus::prelude::*;
use folio_core::{Effect, Page, PageEvent, SiteConfig};

/// Configuration plus the page wired from it.
#[derive(Clone, Debug)]
pub struct Site {
    pub config: SiteConfig,
    pub page: Page,
}

/// Global site, set from main before launch
static SITE: OnceLock<Site> = OnceLock::new();

pub fn init_site(site: Site) {
    if SITE.set(site).is_err() {
        tracing::warn!("Site already initialized; keeping the first one");
    }
}

pub fn get_site() -> Option<&'static Site> {
    SITE.get()
}

/// Hook to access the page state from context.
pub fn use_page() -> Signal<Page> {
    use_context::<Signal<Page>>()
}

pub fn use_dispatcher() -> Dispatcher {
    Dispatcher { page: use_page() }
}

/// Feeds user events into the page and performs the host-side effects.
#[derive(Clone, Copy, PartialEq)]
pub struct Dispatcher {
    page: Signal<Page>,
}

impl Dispatcher {
    pub fn new(page: Signal<Page>) -> Self {
        Self { page }
    }

    /// Dispatch and perform effects.
    ///
    /// Returns `true` when the event's default action must be suppressed;
    /// the caller owns the DOM event and calls `prevent_default` itself.
    pub fn dispatch(self, event: PageEvent) -> bool {
        let mut page = self.page;
        let effects = page.write().dispatch(event);
        perform(&effects);
        effects.contains(&Effect::PreventDefault)
    }
}

fn perform(effects: &[Effect]) {
    for effect in effects {
        match effect {
            Effect::PreventDefault => {}
            Effect::ScrollIntoView { id, behavior } => {
                let _ = document::eval(&scroll_script(id, behavior.as_str()));
            }
            Effect::Submitted(submission) => {
                tracing::debug!(?submission, "Submission accepted");
            }
            Effect::Acknowledge(text) => {
                let _ = document::eval(&format!("alert({});", js_string(text)));
            }
        }
    }
}

/// Apply the page's scroll lock to the document body.
pub fn sync_body_overflow(overflow: &str) {
    let _ = document::eval(&body_overflow_script(overflow));
}

fn body_overflow_script(overflow: &str) -> String {
    format!("document.body.style.overflow = {};", js_string(overflow))
}

fn scroll_script(id: &str, behavior: &str) -> String {
    format!(
        "document.getElementById({})?.scrollIntoView({{ behavior: {} }});",
        js_string(id),
        js_string(behavior)
    )
}

/// Quote a string as a JavaScript literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_script_quotes_arguments() {
        assert_eq!(
            scroll_script("contact", "smooth"),
            r#"document.getElementById("contact")?.scrollIntoView({ behavior: "smooth" });"#
        );
    }

    #[test]
    fn body_overflow_targets_document_body() {
        assert_eq!(
            body_overflow_script("hidden"),
            r#"document.body.style.overflow = "hidden";"#
        );
        assert_eq!(
            body_overflow_script("auto"),
            r#"document.body.style.overflow = "auto";"#
        );
    }

    #[test]
    fn js_string_escapes_quotes() {
        assert_eq!(js_string(r#"it's "fine""#), r#""it's \"fine\"""#);
    }
}
