//! `[site]` section configuration.
//!
//! Contains site metadata and the page registry.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Volontulo"
//! cookie_store = ".portico/cookies.json"
//!
//! [[site.pages]]
//! id = "about-us"
//! title = "O nas"
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::page::{PageRegistry, StaticPage};

/// Site section configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title shown in the header chrome.
    pub title: String,

    /// Cookie jar of the headless host (relative to the project root).
    pub cookie_store: PathBuf,

    /// Mountable pages. Route bindings refer to them by `id`.
    pub pages: Vec<PageConfig>,
}

/// One `[[site.pages]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    pub id: String,
    pub title: String,
}

impl PageConfig {
    fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
        }
    }
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: "Volontulo".to_string(),
            cookie_store: PathBuf::from(".portico/cookies.json"),
            pages: vec![
                PageConfig::new("home", "Strona główna"),
                PageConfig::new("about-us", "O nas"),
                PageConfig::new("office", "Biuro"),
            ],
        }
    }
}

impl SiteSectionConfig {
    pub const PAGES: FieldPath = FieldPath::new("site.pages");

    /// Build the page registry, reporting duplicate or empty ids.
    pub fn page_registry(&self, diag: &mut ConfigDiagnostics) -> PageRegistry {
        let mut registry = PageRegistry::new();
        for page in &self.pages {
            let unit = StaticPage::new(page.id.trim(), page.title.clone());
            if let Err(err) = registry.register(Arc::new(unit)) {
                diag.error_with_hint(Self::PAGES, err.to_string(), "page ids must be unique and non-empty");
            }
        }
        registry
    }
}
