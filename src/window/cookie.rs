//! Cookie jar with max-age expiry.
//!
//! Shared by the memory and headless hosts. Time is passed in as Unix
//! seconds so callers own the clock.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A single stored cookie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCookie {
    pub name: String,
    pub value: String,
    /// Unix seconds after which the cookie is gone
    pub expires_at: u64,
}

impl StoredCookie {
    #[inline]
    fn is_live(&self, now: u64) -> bool {
        self.expires_at > now
    }
}

/// Name-keyed cookie collection
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CookieJar {
    cookies: Vec<StoredCookie>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a live cookie.
    pub fn get(&self, name: &str, now: u64) -> Option<&str> {
        self.cookies
            .iter()
            .find(|c| c.name == name && c.is_live(now))
            .map(|c| c.value.as_str())
    }

    /// Set a cookie, replacing any cookie with the same name.
    ///
    /// A zero `max_age` removes the cookie.
    pub fn set(&mut self, name: &str, value: &str, max_age: Duration, now: u64) {
        self.cookies.retain(|c| c.name != name);
        if max_age.is_zero() {
            return;
        }
        self.cookies.push(StoredCookie {
            name: name.to_string(),
            value: value.to_string(),
            expires_at: now.saturating_add(max_age.as_secs()),
        });
    }

    /// Drop expired cookies. Returns how many were removed.
    pub fn purge_expired(&mut self, now: u64) -> usize {
        let before = self.cookies.len();
        self.cookies.retain(|c| c.is_live(now));
        before - self.cookies.len()
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

/// Find `name` in a `document.cookie` style header (`a=1; b=2`).
pub fn parse_cookie_header(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().to_string())
}
