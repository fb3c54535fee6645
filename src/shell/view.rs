//! What the shell shows after one navigation.

use std::sync::Arc;

use crate::page::Page;
use crate::route::{RedirectOutcome, RoutePath};

/// Persistent chrome around the outlet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    /// Site title the header shows
    pub title: Arc<str>,
    pub header: bool,
    pub footer: bool,
    pub cookie_banner: bool,
}

/// Shell state after handling a navigation event.
#[derive(Debug, Clone)]
pub struct View {
    /// Normalized location the mounted page belongs to
    pub location: RoutePath,
    /// Page in the outlet, `None` only if a redirect led nowhere
    pub page: Option<Arc<dyn Page>>,
    /// Set when the wildcard fired
    pub redirect: Option<RedirectOutcome>,
    pub chrome: Chrome,
}

impl View {
    pub fn page_id(&self) -> Option<&str> {
        self.page.as_deref().map(Page::id)
    }

    #[inline]
    pub fn redirected(&self) -> bool {
        self.redirect.is_some()
    }
}
