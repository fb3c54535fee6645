//! `[routes]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [routes.matching]
//! trailing_slash = "ignore"   # ignore | strict
//! case_sensitive = true
//!
//! [routes.redirect]
//! policy = "default"          # default | not_found
//! target = "o-nas"            # default: registered literal to navigate to
//! # page = "not-found"        # not_found: page mounted in place
//!
//! [[routes.bindings]]
//! path = ""
//! page = "home"
//! enabled = false             # kept for reference, not routed
//!
//! [[routes.bindings]]
//! path = "o-nas"
//! page = "about-us"
//!
//! [[routes.bindings]]
//! path = "**"
//! redirect = true
//! ```

use std::sync::Arc;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::debug;
use crate::page::{Page, PageRegistry, StaticPage};
use crate::route::{MatchPolicy, RedirectPolicy, RouteError, RouteTable, WILDCARD};

/// Route table declarations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Path normalization used for both patterns and locations.
    pub matching: MatchPolicy,

    /// What happens when nothing matches.
    pub redirect: RedirectConfig,

    /// Ordered bindings. Exactly one enabled `**` entry is required.
    pub bindings: Vec<BindingConfig>,
}

/// `[routes.redirect]`
///
/// `policy` may be left out, it defaults to `"default"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum RedirectConfig {
    /// Navigate to a registered literal path.
    Default { target: String },
    /// Mount a page without touching the address bar.
    NotFound { page: String },
}

/// `[routes.redirect]` as written, before the policy picks its fields.
#[derive(Deserialize)]
struct RawRedirectConfig {
    #[serde(default)]
    policy: PolicyKind,
    target: Option<String>,
    page: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum PolicyKind {
    #[default]
    Default,
    NotFound,
}

impl TryFrom<RawRedirectConfig> for RedirectConfig {
    type Error = String;

    fn try_from(raw: RawRedirectConfig) -> Result<Self, Self::Error> {
        match (raw.policy, raw.target, raw.page) {
            (PolicyKind::Default, Some(target), None) => Ok(Self::Default { target }),
            (PolicyKind::NotFound, None, Some(page)) => Ok(Self::NotFound { page }),
            (PolicyKind::Default, None, _) => {
                Err("`policy = \"default\"` needs a `target` route".to_string())
            }
            (PolicyKind::Default, Some(_), Some(_)) => {
                Err("`page` only applies to `policy = \"not_found\"`".to_string())
            }
            (PolicyKind::NotFound, _, None) => {
                Err("`policy = \"not_found\"` needs a `page` id".to_string())
            }
            (PolicyKind::NotFound, Some(_), Some(_)) => {
                Err("`target` only applies to `policy = \"default\"`".to_string())
            }
        }
    }
}

impl<'de> Deserialize<'de> for RedirectConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawRedirectConfig::deserialize(deserializer)?
            .try_into()
            .map_err(D::Error::custom)
    }
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self::Default {
            target: "o-nas".to_string(),
        }
    }
}

/// One `[[routes.bindings]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingConfig {
    pub path: String,

    /// Page id to mount. Mutually exclusive with `redirect`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,

    /// Bind to the redirect handler (only valid for `**`).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub redirect: bool,

    /// Disabled entries stay in the file but are not routed.
    #[serde(default = "enabled_default")]
    pub enabled: bool,
}

fn enabled_default() -> bool {
    true
}

impl BindingConfig {
    pub fn page(path: &str, page: &str) -> Self {
        Self {
            path: path.to_string(),
            page: Some(page.to_string()),
            redirect: false,
            enabled: true,
        }
    }

    pub fn redirect(path: &str) -> Self {
        Self {
            path: path.to_string(),
            page: None,
            redirect: true,
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            matching: MatchPolicy::default(),
            redirect: RedirectConfig::default(),
            bindings: vec![
                // home is deliberately not routed; `/` falls through to `**`
                BindingConfig::page("", "home").disabled(),
                BindingConfig::page("o-nas", "about-us"),
                BindingConfig::page("office", "office"),
                BindingConfig::redirect(WILDCARD),
            ],
        }
    }
}

impl RoutesConfig {
    pub const BINDINGS: FieldPath = FieldPath::new("routes.bindings");
    pub const REDIRECT_TARGET: FieldPath = FieldPath::new("routes.redirect.target");
    pub const REDIRECT_PAGE: FieldPath = FieldPath::new("routes.redirect.page");

    /// Build the route table from enabled bindings.
    ///
    /// Every problem is reported to `diag`, binding and structural ones
    /// alike. Returns `None` when any error was reported.
    pub fn route_table(
        &self,
        pages: &PageRegistry,
        diag: &mut ConfigDiagnostics,
    ) -> Option<RouteTable> {
        let before = diag.len();
        let mut builder = RouteTable::builder(self.matching);

        // unknown pages are declared with a stand-in so the structural
        // checks below still see their binding
        let page_or_stand_in = |id: &str| -> Arc<dyn Page> {
            match pages.get(id) {
                Some(page) => Arc::clone(page),
                None => Arc::new(StaticPage::new(id, id)),
            }
        };

        for binding in &self.bindings {
            if !binding.enabled {
                debug!("config"; "route `{}` is disabled", binding.path);
                continue;
            }
            match (&binding.page, binding.redirect) {
                (Some(id), false) => {
                    if !pages.contains(id) {
                        diag.error_with_hint(
                            Self::BINDINGS,
                            format!("route `{}` binds unknown page `{}`", binding.path, id),
                            "declare the page under [[site.pages]]",
                        );
                    }
                    builder = builder.page(&binding.path, page_or_stand_in(id.as_str()));
                }
                (None, true) => builder = builder.redirect(&binding.path),
                (Some(id), true) => {
                    diag.error(
                        Self::BINDINGS,
                        format!("route `{}` sets both `page` and `redirect`", binding.path),
                    );
                    builder = if binding.path.trim() == WILDCARD {
                        builder.redirect(&binding.path)
                    } else {
                        builder.page(&binding.path, page_or_stand_in(id.as_str()))
                    };
                }
                (None, false) => diag.error_with_hint(
                    Self::BINDINGS,
                    format!("route `{}` binds nothing", binding.path),
                    "set `page = \"<id>\"` or `redirect = true`",
                ),
            }
        }

        let redirect = match &self.redirect {
            RedirectConfig::Default { target } => Some(RedirectPolicy::Default {
                target: target.clone(),
            }),
            RedirectConfig::NotFound { page } => match pages.get(page) {
                Some(page) => Some(RedirectPolicy::NotFound {
                    page: Arc::clone(page),
                }),
                None => {
                    diag.error_with_hint(
                        Self::REDIRECT_PAGE,
                        format!("not-found page `{page}` is not registered"),
                        "declare the page under [[site.pages]]",
                    );
                    None
                }
            },
        };

        for err in builder.errors(redirect.as_ref()) {
            report_route_error(&err, diag);
        }
        if diag.len() > before {
            return None;
        }

        match builder.build(redirect?) {
            Ok(table) => {
                for path in table.shadowed() {
                    diag.warn(
                        Self::BINDINGS,
                        format!("route `{path}` is declared more than once, the first entry wins"),
                    );
                }
                Some(table)
            }
            Err(err) => {
                report_route_error(&err, diag);
                None
            }
        }
    }
}

fn report_route_error(err: &RouteError, diag: &mut ConfigDiagnostics) {
    let (field, hint) = route_error_hint(err);
    diag.error_with_hint(field, err.to_string(), hint);
}

/// Field and fix hint for a table construction error.
fn route_error_hint(err: &RouteError) -> (FieldPath, &'static str) {
    match err {
        RouteError::MissingWildcard => (
            RoutesConfig::BINDINGS,
            "add `[[routes.bindings]]` with `path = \"**\"` and `redirect = true`",
        ),
        RouteError::DuplicateWildcard(_) => (
            RoutesConfig::BINDINGS,
            "keep one `**` binding or set `enabled = false` on the others",
        ),
        RouteError::WildcardBoundToPage(_) => (
            RoutesConfig::BINDINGS,
            "bind `**` with `redirect = true`; use `policy = \"not_found\"` to show a page",
        ),
        RouteError::LiteralBoundToRedirect(_) => {
            (RoutesConfig::BINDINGS, "only the `**` binding may redirect")
        }
        RouteError::UnregisteredTarget(_) | RouteError::WildcardTarget => (
            RoutesConfig::REDIRECT_TARGET,
            "point the target at an enabled literal binding",
        ),
    }
}

// ============================================================================
// tests
// ============================================================================
