//! `[consent]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [consent]
//! cookie = "cookie-law-seen"   # cookie name
//! max_age_days = 365           # how long an acknowledgment lasts
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

const SECS_PER_DAY: u64 = 86_400;

/// Consent cookie settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsentConfig {
    /// Cookie name.
    pub cookie: String,

    /// Lifetime of an acknowledgment, in days.
    pub max_age_days: u32,
}

impl Default for ConsentConfig {
    fn default() -> Self {
        Self {
            cookie: "cookie-law-seen".to_string(),
            max_age_days: 365,
        }
    }
}

impl ConsentConfig {
    pub const COOKIE: FieldPath = FieldPath::new("consent.cookie");
    pub const MAX_AGE_DAYS: FieldPath = FieldPath::new("consent.max_age_days");

    pub fn max_age(&self) -> Duration {
        Duration::from_secs(u64::from(self.max_age_days) * SECS_PER_DAY)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let name = self.cookie.as_str();
        if name.is_empty() {
            diag.error(Self::COOKIE, "cookie name must not be empty");
        } else if name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, ';' | '=' | ','))
        {
            diag.error_with_hint(
                Self::COOKIE,
                format!("`{name}` is not a valid cookie name"),
                "avoid whitespace, `;`, `=` and `,`",
            );
        }

        if self.max_age_days == 0 {
            diag.error_with_hint(
                Self::MAX_AGE_DAYS,
                "an acknowledgment that expires immediately shows the banner forever",
                "use at least 1 day",
            );
        }
    }
}
