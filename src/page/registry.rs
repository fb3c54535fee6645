//! Page registry - id to page lookup.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::{Page, PageError};

/// The set of pages the composition root constructed.
///
/// Route bindings hold clones of the `Arc`s handed out here, so a page
/// is built once and shared by every binding that references it.
#[derive(Debug, Default, Clone)]
pub struct PageRegistry {
    /// Pages in registration order
    pages: Vec<Arc<dyn Page>>,
    /// id -> index into `pages`
    index: FxHashMap<String, usize>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page. Ids must be unique, non-empty and free of
    /// surrounding whitespace.
    pub fn register(&mut self, page: Arc<dyn Page>) -> Result<(), PageError> {
        let id = page.id();
        if id.trim().is_empty() {
            return Err(PageError::EmptyId);
        }
        if id.trim() != id {
            return Err(PageError::Whitespace(id.to_string()));
        }
        if self.index.contains_key(id) {
            return Err(PageError::Duplicate(id.to_string()));
        }
        self.index.insert(id.to_string(), self.pages.len());
        self.pages.push(page);
        Ok(())
    }

    /// Look up a page by id.
    pub fn get(&self, id: &str) -> Option<&Arc<dyn Page>> {
        self.index.get(id).map(|&i| &self.pages[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate pages in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Page>> {
        self.pages.iter()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
