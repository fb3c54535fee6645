//! `[shell]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [shell]
//! header = true
//! footer = true
//! cookie_banner = true    # consent still decides whether it shows
//! ```

use serde::{Deserialize, Serialize};

/// Which persistent chrome the shell renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub header: bool,
    pub footer: bool,
    pub cookie_banner: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            header: true,
            footer: true,
            cookie_banner: true,
        }
    }
}
