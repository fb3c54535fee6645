//! In-memory window for tests and alternate hosts.

use std::time::Duration;

use parking_lot::Mutex;

use super::{CookieJar, Window, WindowError};

/// Window substitute with fully defined semantics.
///
/// - `navigate_to` then `current_location` round-trips
/// - every navigation is appended to [`history`](Self::history)
/// - cookies expire against a manual clock moved by [`advance`](Self::advance)
#[derive(Debug)]
pub struct MemoryWindow {
    state: Mutex<MemoryState>,
    cookies_disabled: bool,
}

#[derive(Debug, Default)]
struct MemoryState {
    location: String,
    history: Vec<String>,
    reloads: usize,
    scroll: (f64, f64),
    jar: CookieJar,
    /// Manual clock in Unix seconds
    now: u64,
}

impl MemoryWindow {
    pub fn new(location: &str) -> Self {
        Self {
            state: Mutex::new(MemoryState {
                location: location.to_string(),
                ..MemoryState::default()
            }),
            cookies_disabled: false,
        }
    }

    /// Window whose cookie storage always fails.
    pub fn with_cookies_disabled(location: &str) -> Self {
        Self {
            cookies_disabled: true,
            ..Self::new(location)
        }
    }

    /// Move the manual clock forward.
    pub fn advance(&self, by: Duration) {
        let mut state = self.state.lock();
        state.now = state.now.saturating_add(by.as_secs());
    }

    /// Paths passed to `navigate_to`, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.state.lock().history.clone()
    }

    /// Number of `navigate_to` calls so far.
    pub fn navigations(&self) -> usize {
        self.state.lock().history.len()
    }

    pub fn reloads(&self) -> usize {
        self.state.lock().reloads
    }

    pub fn set_scroll(&self, x: f64, y: f64) {
        self.state.lock().scroll = (x, y);
    }
}

impl Window for MemoryWindow {
    fn host(&self) -> &'static str {
        "memory"
    }

    fn current_location(&self) -> String {
        self.state.lock().location.clone()
    }

    fn navigate_to(&self, path: &str) {
        let mut state = self.state.lock();
        state.location = path.to_string();
        state.history.push(path.to_string());
    }

    fn reload(&self) -> Result<(), WindowError> {
        self.state.lock().reloads += 1;
        Ok(())
    }

    fn scroll_position(&self) -> Result<(f64, f64), WindowError> {
        Ok(self.state.lock().scroll)
    }

    fn cookie(&self, name: &str) -> Result<Option<String>, WindowError> {
        if self.cookies_disabled {
            return Err(WindowError::StorageDisabled);
        }
        let state = self.state.lock();
        Ok(state.jar.get(name, state.now).map(str::to_string))
    }

    fn set_cookie(&self, name: &str, value: &str, max_age: Duration) -> Result<(), WindowError> {
        if self.cookies_disabled {
            return Err(WindowError::StorageDisabled);
        }
        let mut state = self.state.lock();
        let now = state.now;
        state.jar.set(name, value, max_age, now);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_round_trip() {
        let window = MemoryWindow::new("/");
        for path in ["/o-nas", "/office", "/unknown-path", ""] {
            window.navigate_to(path);
            assert_eq!(window.current_location(), path);
        }
        assert_eq!(window.navigations(), 4);
        assert_eq!(window.history()[0], "/o-nas");
    }

    #[test]
    fn test_initial_location_not_in_history() {
        let window = MemoryWindow::new("/office");
        assert_eq!(window.current_location(), "/office");
        assert!(window.history().is_empty());
    }

    #[test]
    fn test_reload_and_scroll_defined() {
        let window = MemoryWindow::new("/");
        window.reload().unwrap();
        assert_eq!(window.reloads(), 1);
        assert_eq!(window.scroll_position().unwrap(), (0.0, 0.0));
        window.set_scroll(0.0, 120.5);
        assert_eq!(window.scroll_position().unwrap(), (0.0, 120.5));
    }

    #[test]
    fn test_cookie_expiry_follows_clock() {
        let window = MemoryWindow::new("/");
        window
            .set_cookie("seen", "true", Duration::from_secs(60))
            .unwrap();
        window.advance(Duration::from_secs(59));
        assert_eq!(window.cookie("seen").unwrap().as_deref(), Some("true"));
        window.advance(Duration::from_secs(1));
        assert_eq!(window.cookie("seen").unwrap(), None);
    }

    #[test]
    fn test_cookies_disabled() {
        let window = MemoryWindow::with_cookies_disabled("/");
        assert!(matches!(
            window.cookie("seen"),
            Err(WindowError::StorageDisabled)
        ));
        assert!(
            window
                .set_cookie("seen", "true", Duration::from_secs(1))
                .is_err()
        );
        // navigation still works
        window.navigate_to("/office");
        assert_eq!(window.current_location(), "/office");
    }
}
