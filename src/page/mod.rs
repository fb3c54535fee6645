//! Mountable page units.
//!
//! Pages are opaque to the router: it only needs an id to bind and a
//! title to show. Content and rendering belong to whoever implements
//! [`Page`].

mod registry;

pub use registry::PageRegistry;

use std::fmt;
use thiserror::Error;

/// A page that can be mounted inside the application shell.
pub trait Page: fmt::Debug + Send + Sync {
    /// Stable identifier used by route bindings (e.g. `about-us`).
    fn id(&self) -> &str;

    /// Human-readable title.
    fn title(&self) -> &str;
}

/// Page described entirely by configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPage {
    id: String,
    title: String,
}

impl StaticPage {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl Page for StaticPage {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("page `{0}` is registered more than once")]
    Duplicate(String),

    #[error("page id must not be empty")]
    EmptyId,

    #[error("page id `{0}` has surrounding whitespace")]
    Whitespace(String),
}
