//! Route patterns: literal paths and the wildcard sentinel.

use std::fmt;

use super::path::{MatchPolicy, RoutePath};

/// Wildcard sentinel, as written in configuration.
pub const WILDCARD: &str = "**";

/// An immutable path matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    /// Exact match against a normalized path.
    Literal(RoutePath),
    /// Matches every path no literal matched.
    Wildcard,
}

impl RoutePattern {
    /// Parse a declared pattern. `**` is the wildcard, anything else is a
    /// literal normalized under `policy` (so `""` is the root).
    pub fn parse(raw: &str, policy: &MatchPolicy) -> Self {
        if raw.trim() == WILDCARD {
            Self::Wildcard
        } else {
            Self::Literal(RoutePath::from_browser(raw, policy))
        }
    }

    #[inline]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }

    pub fn literal(&self) -> Option<&RoutePath> {
        match self {
            Self::Literal(path) => Some(path),
            Self::Wildcard => None,
        }
    }

    /// Whether `path` (already normalized under the same policy) matches.
    pub fn matches(&self, path: &RoutePath) -> bool {
        match self {
            Self::Literal(literal) => literal == path,
            Self::Wildcard => true,
        }
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(path) => write!(f, "{path}"),
            Self::Wildcard => f.write_str(WILDCARD),
        }
    }
}
