//! Route path normalization.
//!
//! Every path the router compares goes through [`RoutePath::from_browser`]
//! with the table's [`MatchPolicy`], both incoming locations and literal
//! patterns, so the two sides always agree on what "equal" means.
//!
//! Fixed rules (not configurable):
//! - surrounding whitespace is trimmed
//! - query string and fragment are stripped
//! - percent-encoding is decoded (raw path kept on invalid UTF-8)
//! - a leading `/` is added, the empty path is the root `/`
//! - absolute URLs (`https://host/path`) contribute only their path
//!
//! Configurable rules live in [`MatchPolicy`].

use std::borrow::{Borrow, Cow};
use std::sync::Arc;

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

/// How trailing slashes take part in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingSlash {
    /// `/office/` and `/office` are the same path.
    #[default]
    Ignore,

    /// `/office/` and `/office` are different paths.
    Strict,
}

/// Path comparison policy shared by a route table and its patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchPolicy {
    pub trailing_slash: TrailingSlash,
    pub case_sensitive: bool,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            trailing_slash: TrailingSlash::Ignore,
            case_sensitive: true,
        }
    }
}

/// Normalized route path.
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/`
/// - Never carries a query string or fragment
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePath(Arc<str>);

impl RoutePath {
    /// Normalize a browser location (or a route pattern) under `policy`.
    pub fn from_browser(raw: &str, policy: &MatchPolicy) -> Self {
        let path = path_component(raw.trim());
        let decoded = percent_decode_str(&path)
            .decode_utf8()
            .map(Cow::into_owned)
            .unwrap_or_else(|_| path.clone());
        Self::normalize(&decoded, policy)
    }

    /// The site root `/`.
    pub fn root() -> Self {
        Self(Arc::from("/"))
    }

    fn normalize(decoded: &str, policy: &MatchPolicy) -> Self {
        let trimmed = decoded.trim();
        if trimmed.is_empty() || trimmed == "/" {
            return Self::root();
        }

        let mut path = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };

        if policy.trailing_slash == TrailingSlash::Ignore {
            let end = path.trim_end_matches('/').len();
            if end == 0 {
                return Self::root();
            }
            path.truncate(end);
        }

        if !policy.case_sensitive {
            path = path.to_lowercase();
        }

        Self(Arc::from(path))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }
}

/// Extract the path part of a location, dropping query and fragment.
fn path_component(raw: &str) -> String {
    if let Ok(parsed) = url::Url::parse(raw)
        && parsed.has_host()
    {
        return parsed.path().to_string();
    }
    raw.split(['?', '#']).next().unwrap_or(raw).to_string()
}

impl std::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for RoutePath {
    fn default() -> Self {
        Self::root()
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RoutePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for RoutePath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for RoutePath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

// ============================================================================
// tests
// ============================================================================
