//! Cookie-consent flag.
//!
//! One cookie, fixed name, value `true`, fixed max-age. Storage failures
//! read as "not acknowledged" so the banner shows again instead of
//! breaking navigation.

use std::time::Duration;

use crate::config::ConsentConfig;
use crate::debug;
use crate::window::{WindowError, WindowHandle};

/// Value written on acknowledgment.
const ACKNOWLEDGED: &str = "true";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentState {
    /// No (live) cookie, or storage unavailable: show the banner.
    Pending,
    Acknowledged,
}

impl ConsentState {
    #[inline]
    pub fn is_acknowledged(self) -> bool {
        self == Self::Acknowledged
    }
}

/// Reads and writes the consent cookie through the window.
pub struct ConsentStore {
    window: WindowHandle,
    cookie: String,
    max_age: Duration,
}

impl ConsentStore {
    pub fn new(window: WindowHandle, config: &ConsentConfig) -> Self {
        Self {
            window,
            cookie: config.cookie.clone(),
            max_age: config.max_age(),
        }
    }

    /// Current state. Never fails.
    pub fn read(&self) -> ConsentState {
        match self.window.cookie(&self.cookie) {
            Ok(Some(value)) if value == ACKNOWLEDGED => ConsentState::Acknowledged,
            Ok(_) => ConsentState::Pending,
            Err(err) => {
                debug!("consent"; "reading `{}` failed, treating as pending: {}", self.cookie, err);
                ConsentState::Pending
            }
        }
    }

    /// Persist acknowledgment for the configured max-age.
    pub fn acknowledge(&self) -> Result<(), WindowError> {
        self.window
            .set_cookie(&self.cookie, ACKNOWLEDGED, self.max_age)
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }
}
