//! Headless window for the command-line host.
//!
//! Location lives in memory for the lifetime of the process. Cookies are
//! persisted to a JSON file so consent survives between runs:
//!
//! ```json
//! { "cookies": [ { "name": "cookie-law-seen", "value": "true", "expires_at": 1767225600 } ] }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use parking_lot::Mutex;

use super::{CookieJar, Window, WindowError, unix_now};

#[derive(Debug)]
pub struct HeadlessWindow {
    location: Mutex<String>,
    cookie_store: PathBuf,
}

impl HeadlessWindow {
    pub fn new(location: &str, cookie_store: PathBuf) -> Self {
        Self {
            location: Mutex::new(location.to_string()),
            cookie_store,
        }
    }

    pub fn cookie_store(&self) -> &Path {
        &self.cookie_store
    }

    /// Load the jar; a missing file is an empty jar.
    fn load_jar(&self) -> Result<CookieJar, WindowError> {
        let content = match fs::read_to_string(&self.cookie_store) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(CookieJar::new()),
            Err(err) => return Err(WindowError::Io(self.cookie_store.clone(), err)),
        };
        serde_json::from_str(&content)
            .map_err(|err| WindowError::Corrupt(self.cookie_store.clone(), err))
    }

    fn save_jar(&self, jar: &CookieJar) -> Result<(), WindowError> {
        let io_err = |err| WindowError::Io(self.cookie_store.clone(), err);

        if let Some(parent) = self.cookie_store.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(jar)
            .map_err(|err| WindowError::Corrupt(self.cookie_store.clone(), err))?;
        fs::write(&self.cookie_store, json).map_err(io_err)
    }
}

impl Window for HeadlessWindow {
    fn host(&self) -> &'static str {
        "headless"
    }

    fn current_location(&self) -> String {
        self.location.lock().clone()
    }

    fn navigate_to(&self, path: &str) {
        *self.location.lock() = path.to_string();
    }

    fn reload(&self) -> Result<(), WindowError> {
        Err(WindowError::Unsupported {
            host: self.host(),
            operation: "reload",
        })
    }

    fn scroll_position(&self) -> Result<(f64, f64), WindowError> {
        Err(WindowError::Unsupported {
            host: self.host(),
            operation: "scroll_position",
        })
    }

    fn cookie(&self, name: &str) -> Result<Option<String>, WindowError> {
        let jar = self.load_jar()?;
        Ok(jar.get(name, unix_now()).map(str::to_string))
    }

    fn set_cookie(&self, name: &str, value: &str, max_age: Duration) -> Result<(), WindowError> {
        let now = unix_now();
        let mut jar = self.load_jar()?;
        jar.purge_expired(now);
        jar.set(name, value, max_age, now);
        self.save_jar(&jar)
    }
}
