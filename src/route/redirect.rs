//! Fallback navigation for unmatched paths.
//!
//! Two policies, picked once when the table is built:
//!
//! | Policy      | Effect                                                  |
//! |-------------|---------------------------------------------------------|
//! | `Default`   | `navigate_to(target)`; target is a registered literal    |
//! | `NotFound`  | mount a dedicated page, address bar left untouched      |

use std::fmt;
use std::sync::Arc;

use crate::debug;
use crate::page::Page;
use crate::window::Window;

use super::path::RoutePath;

/// Declared redirect policy, before validation against the table.
#[derive(Debug, Clone)]
pub enum RedirectPolicy {
    /// Navigate to a fixed, registered path.
    Default { target: String },
    /// Mount `page` in place of the unknown path.
    NotFound { page: Arc<dyn Page> },
}

/// Validated redirect policy owned by a route table.
#[derive(Debug, Clone)]
pub struct RedirectHandler {
    action: Action,
}

#[derive(Debug, Clone)]
enum Action {
    Navigate(RoutePath),
    NotFound(Arc<dyn Page>),
}

/// What the handler did for one unmatched path.
#[derive(Debug, Clone)]
pub enum RedirectOutcome {
    Navigated { from: RoutePath, to: RoutePath },
    NotFound { requested: RoutePath, page: Arc<dyn Page> },
}

impl RedirectOutcome {
    /// The path the handler was invoked for.
    pub fn requested(&self) -> &RoutePath {
        match self {
            Self::Navigated { from, .. } => from,
            Self::NotFound { requested, .. } => requested,
        }
    }
}

impl RedirectHandler {
    pub(super) fn navigate(target: RoutePath) -> Self {
        Self {
            action: Action::Navigate(target),
        }
    }

    pub(super) fn not_found(page: Arc<dyn Page>) -> Self {
        Self {
            action: Action::NotFound(page),
        }
    }

    /// Default navigation target, if this is the `Default` policy.
    pub fn target(&self) -> Option<&RoutePath> {
        match &self.action {
            Action::Navigate(target) => Some(target),
            Action::NotFound(_) => None,
        }
    }

    /// Run the policy for `requested`.
    ///
    /// Only the `Default` policy touches the window, with exactly one
    /// `navigate_to` call.
    pub fn handle(&self, window: &dyn Window, requested: &RoutePath) -> RedirectOutcome {
        match &self.action {
            Action::Navigate(target) => {
                debug!("redirect"; "{} -> {}", requested, target);
                window.navigate_to(target.as_str());
                RedirectOutcome::Navigated {
                    from: requested.clone(),
                    to: target.clone(),
                }
            }
            Action::NotFound(page) => {
                debug!("redirect"; "{} -> not found page `{}`", requested, page.id());
                RedirectOutcome::NotFound {
                    requested: requested.clone(),
                    page: Arc::clone(page),
                }
            }
        }
    }
}

impl fmt::Display for RedirectHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.action {
            Action::Navigate(target) => write!(f, "navigate to {target}"),
            Action::NotFound(page) => write!(f, "mount page `{}`", page.id()),
        }
    }
}
