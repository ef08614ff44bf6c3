//! Core types shared across the page components.

use serde::{Deserialize, Serialize};

/// Category value that matches every project item.
pub const ALL_CATEGORIES: &str = "all";

/// An image as rendered in the page: source URL plus alt text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

impl ImageRef {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// A link inside the navigation panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    /// The fragment of an in-page anchor (`#contact` → `contact`).
    ///
    /// Returns `None` for external links.
    pub fn fragment(&self) -> Option<&str> {
        self.href.strip_prefix('#')
    }
}

/// A category filter button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterButton {
    pub label: String,
    pub filter: String,
}

impl FilterButton {
    pub fn new(label: impl Into<String>, filter: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            filter: filter.into(),
        }
    }
}

/// A project tile as declared in the markup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub title: String,
    pub category: String,
    pub image: ImageRef,
}

impl ProjectItem {
    pub fn new(title: impl Into<String>, category: impl Into<String>, image: ImageRef) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            image,
        }
    }
}

/// The contact form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 3] = [FieldName::Name, FieldName::Email, FieldName::Message];

    /// Element identifier used in the rendered form
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Email => "Email",
            FieldName::Message => "Message",
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_link_fragment() {
        assert_eq!(NavLink::new("Contact", "#contact").fragment(), Some("contact"));
        assert_eq!(NavLink::new("Top", "#").fragment(), Some(""));
        assert_eq!(NavLink::new("GitHub", "https://github.com").fragment(), None);
    }

    #[test]
    fn field_name_serde_is_lowercase() {
        let json = serde_json::to_string(&FieldName::Email).unwrap();
        assert_eq!(json, "\"email\"");
        let parsed: FieldName = serde_json::from_str("\"message\"").unwrap();
        assert_eq!(parsed, FieldName::Message);
    }
}
