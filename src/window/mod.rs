//! Window capability - the only door to the ambient global environment.
//!
//! Nothing outside this module touches `web_sys::window()` or the process
//! environment for navigation or cookie storage. The composition root
//! asks [`WindowFactory`] for one handle at startup and passes it to every
//! consumer explicitly.
//!
//! # Hosts
//!
//! | Host       | Type             | Notes                                    |
//! |------------|------------------|------------------------------------------|
//! | `memory`   | `MemoryWindow`   | test substitute, manual clock            |
//! | `headless` | `HeadlessWindow` | CLI host, cookies in a JSON file         |
//! | `browser`  | `BrowserWindow`  | `wasm32` only, real `window`/`document`  |
//!
//! A host that cannot honour an operation returns
//! [`WindowError::Unsupported`] from that call, never from construction.

#[cfg(target_arch = "wasm32")]
mod browser;
mod cookie;
mod headless;
mod memory;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserWindow;
pub use cookie::{CookieJar, StoredCookie, parse_cookie_header};
pub use headless::HeadlessWindow;
pub use memory::MemoryWindow;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

/// Shared handle to the process-wide window.
pub type WindowHandle = Arc<dyn Window>;

/// Read/write surface over navigation and cookie storage.
pub trait Window: Send + Sync {
    /// Short host name used in diagnostics (`memory`, `headless`, `browser`).
    fn host(&self) -> &'static str;

    /// Current location as the host reports it (path, possibly with query).
    fn current_location(&self) -> String;

    /// Start navigating to `path`. Fire-and-forget.
    fn navigate_to(&self, path: &str);

    fn reload(&self) -> Result<(), WindowError>;

    /// Horizontal and vertical scroll offsets.
    fn scroll_position(&self) -> Result<(f64, f64), WindowError>;

    /// Read a cookie. `Ok(None)` when absent or expired.
    fn cookie(&self, name: &str) -> Result<Option<String>, WindowError>;

    /// Write a cookie that expires after `max_age`.
    fn set_cookie(&self, name: &str, value: &str, max_age: Duration) -> Result<(), WindowError>;
}

/// Window-related errors
#[derive(Debug, Error)]
pub enum WindowError {
    #[error("`{operation}` is not supported by the {host} host")]
    Unsupported {
        host: &'static str,
        operation: &'static str,
    },

    #[error("cookie storage is unavailable")]
    StorageDisabled,

    #[error("IO error when accessing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("cookie store `{0}` is not valid JSON")]
    Corrupt(PathBuf, #[source] serde_json::Error),

    #[error("browser call failed: {0}")]
    Browser(String),
}

/// Which host to build a window for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowKind {
    Memory { location: String },
    Headless { location: String, cookie_store: PathBuf },
    Browser,
}

/// Builds the single window handle of a process.
pub struct WindowFactory;

impl WindowFactory {
    /// Create the window for `kind`.
    ///
    /// Call once from the composition root and share the returned handle.
    pub fn create(kind: WindowKind) -> Result<WindowHandle, WindowError> {
        match kind {
            WindowKind::Memory { location } => Ok(Arc::new(MemoryWindow::new(&location))),
            WindowKind::Headless {
                location,
                cookie_store,
            } => Ok(Arc::new(HeadlessWindow::new(&location, cookie_store))),
            WindowKind::Browser => Self::browser(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn browser() -> Result<WindowHandle, WindowError> {
        Ok(Arc::new(BrowserWindow::new()?))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn browser() -> Result<WindowHandle, WindowError> {
        Err(WindowError::Unsupported {
            host: "native",
            operation: "browser window",
        })
    }
}

/// Seconds since the Unix epoch.
pub(crate) fn unix_now() -> u64 {
    use std::time::SystemTime;
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
