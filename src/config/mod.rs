//! Site configuration management for `portico.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site] + [[site.pages]]
//! │   ├── routes     # [routes] + [[routes.bindings]]
//! │   ├── consent    # [consent]
//! │   └── shell      # [shell]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Every section has defaults describing the stock site, so an empty
//! file (or no file at all) is a valid configuration.

mod section;
mod types;
mod util;

use util::find_config_file;

pub use section::{
    BindingConfig, ConsentConfig, PageConfig, RedirectConfig, RoutesConfig, ShellConfig,
    SiteSectionConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::log;
use crate::page::PageRegistry;
use crate::route::RouteTable;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing portico.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub routes: RoutesConfig,

    #[serde(default)]
    pub consent: ConsentConfig,

    #[serde(default)]
    pub shell: ShellConfig,
}

/// Validated runtime pieces built from a config.
#[derive(Debug)]
pub struct Site {
    pub pages: PageRegistry,
    pub table: RouteTable,
}

impl SiteConfig {
    /// Load configuration, searching upward from cwd for `config_name`.
    ///
    /// Without a config file the stock site is used, rooted at cwd.
    pub fn load(config_name: &Path) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let Some(config_path) = find_config_file(config_name, &cwd) else {
            log!("config"; "no {} found, using the built-in site", config_name.display());
            let mut config = Self::default();
            config.root = cwd;
            return Ok(config);
        };

        let mut config = Self::from_path(&config_path)?;
        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate every section and build the page registry and route table.
    ///
    /// All problems are collected before failing; warnings are printed.
    pub fn assemble(&self) -> Result<Site, ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        let pages = self.site.page_registry(&mut diag);
        self.consent.validate(&mut diag);
        let table = self.routes.route_table(&pages, &mut diag);

        let diag = diag.into_result().map_err(ConfigError::Diagnostics)?;
        diag.print_warnings();

        match table {
            Some(table) => Ok(Site { pages, table }),
            // route_table only returns None after reporting an error
            None => Err(ConfigError::Diagnostics(diag)),
        }
    }

    /// Validate without keeping the result.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.assemble().map(|_| ())
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Cookie jar used by the headless window.
    pub fn cookie_store(&self) -> PathBuf {
        self.root_join(&self.site.cookie_store)
    }
}

/// Parse a config snippet, failing on unknown fields.
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(extra).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[routes\nbindings = []");
        assert!(matches!(result, Err(ConfigError::Toml(_))));

        // the parser's message is part of the error, not only its source
        let err = SiteConfig::from_str("[routes.redirect]\npolicy = \"nowhere\"").unwrap_err();
        assert!(err.to_string().contains("nowhere"), "{err}");
    }

    #[test]
    fn test_empty_config_is_stock_site() {
        let config = SiteConfig::from_str("").unwrap();
        let site = config.assemble().unwrap();
        assert_eq!(site.pages.len(), 3);
        assert_eq!(site.table.len(), 3);
        assert_eq!(config.consent.cookie, "cookie-law-seen");
    }

    #[test]
    fn test_assemble_collects_errors_across_sections() {
        let config = test_parse_config(
            "[consent]\nmax_age_days = 0\n\n[routes.redirect]\npolicy = \"default\"\ntarget = \"nowhere\"",
        );
        match config.assemble() {
            Err(ConfigError::Diagnostics(diag)) => {
                assert_eq!(diag.len(), 2);
            }
            other => panic!("expected diagnostics, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"\n[routes.matching]\ncase_sensitive = false";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_from_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("portico.toml");
        fs::write(&path, "[site]\ntitle = \"Volontulo\"\n[shell]\nfooter = false").unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.site.title, "Volontulo");
        assert!(!config.shell.footer);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = SiteConfig::from_path(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    #[test]
    fn test_cookie_store_relative_to_root() {
        let mut config = SiteConfig::default();
        config.root = PathBuf::from("/srv/site");
        assert_eq!(
            config.cookie_store(),
            PathBuf::from("/srv/site/.portico/cookies.json")
        );
    }
}
