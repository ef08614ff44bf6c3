//! Initialization contract between the page markup and the components.
//!
//! [`PageTargets`] enumerates every element the widgets attach to. A
//! [`crate::Page`] is only built from targets that pass [`PageTargets::validate`],
//! so a missing lightbox or form field is reported at setup time instead of
//! being discovered when the first event arrives.
//!
//! ```json
//! {
//!   "nav_toggle": "Menu",
//!   "nav_links": [{ "label": "Contact", "href": "#contact" }],
//!   "anchors": ["testimonials"],
//!   "filter_buttons": [{ "label": "All", "filter": "all" }],
//!   "projects": [{ "title": "Atlas", "category": "web-dev",
//!                  "image": { "src": "img/atlas.jpg", "alt": "Atlas" } }],
//!   "lightbox": { "close_label": "Close" },
//!   "contact_form": { "fields": [
//!     { "field": "name", "error_slot": true },
//!     { "field": "email", "error_slot": true },
//!     { "field": "message", "error_slot": true }
//!   ] }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{PageError, PageResult};
use crate::types::{FieldName, FilterButton, NavLink, ProjectItem};

/// Identifiers of the elements the page shell always renders.
pub mod ids {
    pub const ABOUT: &str = "about";
    pub const PROJECTS: &str = "projects";
    pub const CONTACT: &str = "contact";
    pub const CONTACT_FORM: &str = "contact-form";
    pub const LIGHTBOX: &str = "lightbox";
    pub const LIGHTBOX_IMAGE: &str = "lightbox-img";

    pub const RENDERED: [&str; 6] = [
        ABOUT,
        PROJECTS,
        CONTACT,
        CONTACT_FORM,
        LIGHTBOX,
        LIGHTBOX_IMAGE,
    ];
}

/// Lightbox overlay with its close control and inner image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightboxTargets {
    #[serde(default = "default_close_label")]
    pub close_label: String,
}

fn default_close_label() -> String {
    "Close".to_string()
}

impl Default for LightboxTargets {
    fn default() -> Self {
        Self {
            close_label: default_close_label(),
        }
    }
}

/// One form field and whether its error display follows it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldTarget {
    pub field: FieldName,
    #[serde(default = "default_true")]
    pub error_slot: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormTargets {
    pub fields: Vec<FieldTarget>,
}

impl Default for ContactFormTargets {
    fn default() -> Self {
        Self {
            fields: FieldName::ALL
                .iter()
                .map(|&field| FieldTarget {
                    field,
                    error_slot: true,
                })
                .collect(),
        }
    }
}

/// Every element the page behavior is wired to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTargets {
    /// Label of the nav toggle control; `None` when the markup has none
    #[serde(default)]
    pub nav_toggle: Option<String>,
    #[serde(default)]
    pub nav_links: Vec<NavLink>,
    /// Extra element identifiers rendered from custom markup.
    ///
    /// The shell's own ids ([`ids::RENDERED`] and the form field ids) are
    /// always resolvable and need not be listed.
    #[serde(default)]
    pub anchors: Vec<String>,
    #[serde(default)]
    pub filter_buttons: Vec<FilterButton>,
    #[serde(default)]
    pub projects: Vec<ProjectItem>,
    #[serde(default)]
    pub lightbox: Option<LightboxTargets>,
    #[serde(default)]
    pub contact_form: Option<ContactFormTargets>,
}

impl PageTargets {
    /// Check the required singletons are present.
    ///
    /// Collections may be empty; a page without projects or links still works.
    pub fn validate(&self) -> PageResult<()> {
        if self.nav_toggle.is_none() {
            return Err(PageError::MissingTarget("nav toggle".to_string()));
        }
        if self.lightbox.is_none() {
            return Err(PageError::MissingTarget("lightbox".to_string()));
        }
        let form = self
            .contact_form
            .as_ref()
            .ok_or_else(|| PageError::MissingTarget("contact form".to_string()))?;

        for field in FieldName::ALL {
            match form.fields.iter().find(|t| t.field == field) {
                None => {
                    return Err(PageError::MissingTarget(format!("{} field", field)));
                }
                Some(t) if !t.error_slot => {
                    return Err(PageError::MissingTarget(format!(
                        "{} field error display",
                        field
                    )));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Every element identifier present on the rendered page.
    pub fn element_ids<'a>(&'a self) -> impl Iterator<Item = &'a str> + 'a {
        let rendered: [&'a str; 6] = ids::RENDERED;
        rendered
            .into_iter()
            .chain(FieldName::ALL.iter().map(|f| -> &'a str { f.as_str() }))
            .chain(self.anchors.iter().map(String::as_str))
    }

    /// Whether an element with this identifier exists on the page.
    pub fn has_anchor(&self, id: &str) -> bool {
        !id.is_empty() && self.element_ids().any(|a| a == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> PageTargets {
        PageTargets {
            nav_toggle: Some("Menu".to_string()),
            lightbox: Some(LightboxTargets::default()),
            contact_form: Some(ContactFormTargets::default()),
            ..Default::default()
        }
    }

    #[test]
    fn complete_targets_validate() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn missing_lightbox_is_fatal() {
        let targets = PageTargets {
            lightbox: None,
            ..complete()
        };
        let err = targets.validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing required target: lightbox");
    }

    #[test]
    fn missing_nav_toggle_is_fatal() {
        let targets = PageTargets {
            nav_toggle: None,
            ..complete()
        };
        assert!(matches!(targets.validate(), Err(PageError::MissingTarget(_))));
    }

    #[test]
    fn missing_field_is_fatal() {
        let mut targets = complete();
        targets
            .contact_form
            .as_mut()
            .unwrap()
            .fields
            .retain(|t| t.field != FieldName::Email);
        let err = targets.validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing required target: email field");
    }

    #[test]
    fn field_without_error_slot_is_fatal() {
        let mut targets = complete();
        targets.contact_form.as_mut().unwrap().fields[2].error_slot = false;
        let err = targets.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required target: message field error display"
        );
    }

    #[test]
    fn empty_anchor_never_matches() {
        assert!(!complete().has_anchor(""));
    }

    #[test]
    fn rendered_ids_resolve_without_config() {
        let targets = complete();
        assert!(targets.anchors.is_empty());
        let ids = ["about", "projects", "contact-form", "lightbox-img", "name", "message"];
        for id in ids {
            assert!(targets.has_anchor(id), "{id} should resolve");
        }
        assert!(!targets.has_anchor("testimonials"));
    }

    #[test]
    fn extra_anchors_extend_rendered_ids() {
        let targets = PageTargets {
            anchors: vec!["testimonials".to_string()],
            ..complete()
        };
        assert!(targets.has_anchor("testimonials"));
        assert!(targets.has_anchor("contact"));
    }

    #[test]
    fn deserializes_with_defaults() {
        let json = r#"{
            "nav_toggle": "Menu",
            "lightbox": {},
            "contact_form": { "fields": [
                { "field": "name" }, { "field": "email" }, { "field": "message" }
            ] }
        }"#;
        let targets: PageTargets = serde_json::from_str(json).unwrap();
        assert_eq!(targets.lightbox.as_ref().unwrap().close_label, "Close");
        assert!(targets.projects.is_empty());
        assert!(targets.validate().is_ok());
    }
}
