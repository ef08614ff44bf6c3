//! Site configuration.
//!
//! A site is described by one JSON file: page title and tagline plus the
//! [`PageTargets`] the widgets are wired to (flattened into the same object).
//! Without a file, [`SiteConfig::default`] provides a sample portfolio.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PageResult;
use crate::markup::{ContactFormTargets, LightboxTargets, PageTargets};
use crate::types::{FilterButton, ImageRef, NavLink, ProjectItem};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(flatten)]
    pub targets: PageTargets,
}

impl SiteConfig {
    /// Read and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> PageResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        tracing::info!(path = %path.display(), title = %config.title, "Loaded site config");
        Ok(config)
    }

    pub fn from_json(raw: &str) -> PageResult<Self> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.targets.validate()?;
        Ok(config)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        let project = |title: &str, category: &str, slug: &str| {
            ProjectItem::new(
                title,
                category,
                ImageRef::new(
                    format!("https://picsum.photos/seed/{slug}/1200/800"),
                    format!("Screenshot of {title}"),
                ),
            )
        };

        Self {
            title: "Jo Doe".to_string(),
            tagline: "Web developer & designer".to_string(),
            targets: PageTargets {
                nav_toggle: Some("Menu".to_string()),
                nav_links: vec![
                    NavLink::new("About", "#about"),
                    NavLink::new("Projects", "#projects"),
                    NavLink::new("Contact", "#contact"),
                    NavLink::new("GitHub", "https://github.com"),
                ],
                anchors: Vec::new(),
                filter_buttons: vec![
                    FilterButton::new("All", "all"),
                    FilterButton::new("Web Dev", "web-dev"),
                    FilterButton::new("Design", "design"),
                    FilterButton::new("Photography", "photography"),
                ],
                projects: vec![
                    project("Atlas Dashboard", "web-dev", "atlas"),
                    project("Harbor Branding", "design", "harbor"),
                    project("Night Market", "photography", "market"),
                    project("Ledger API", "web-dev", "ledger"),
                    project("Moss Type Specimen", "design", "moss"),
                    project("Coastline", "photography", "coast"),
                ],
                lightbox: Some(LightboxTargets::default()),
                contact_form: Some(ContactFormTargets::default()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PageError;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        let config = SiteConfig::default();
        assert!(config.targets.validate().is_ok());
        assert_eq!(config.targets.projects.len(), 6);
    }

    #[test]
    fn json_roundtrip_through_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.json");
        let config = SiteConfig::default();
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = SiteConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = SiteConfig::load(temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, PageError::Io(_)));
    }

    #[test]
    fn incomplete_config_is_rejected() {
        let err = SiteConfig::from_json(r#"{ "title": "x", "nav_toggle": "Menu" }"#).unwrap_err();
        assert_eq!(err.to_string(), "Missing required target: lightbox");
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = SiteConfig::from_json("{ title").unwrap_err();
        assert!(matches!(err, PageError::Config(_)));
    }
}
