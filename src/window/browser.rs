//! Browser window backed by `web-sys`.
//!
//! Holds no JS handles: every call looks up the global `window` again, so
//! the type stays `Send + Sync` and never outlives the page it talks to.

use std::time::Duration;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlDocument;

use super::{Window, WindowError, parse_cookie_header};

#[derive(Debug, Default)]
pub struct BrowserWindow;

impl BrowserWindow {
    /// Fails when no `window` global exists (e.g. inside a worker).
    pub fn new() -> Result<Self, WindowError> {
        global()?;
        Ok(Self)
    }
}

fn global() -> Result<web_sys::Window, WindowError> {
    web_sys::window().ok_or(WindowError::Unsupported {
        host: "browser",
        operation: "window global",
    })
}

fn html_document() -> Result<HtmlDocument, WindowError> {
    global()?
        .document()
        .and_then(|doc| doc.dyn_into::<HtmlDocument>().ok())
        .ok_or(WindowError::StorageDisabled)
}

fn js_err(value: JsValue) -> WindowError {
    WindowError::Browser(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

impl Window for BrowserWindow {
    fn host(&self) -> &'static str {
        "browser"
    }

    fn current_location(&self) -> String {
        global()
            .ok()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn navigate_to(&self, path: &str) {
        let pushed = global().and_then(|w| {
            w.history()
                .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(path)))
                .map_err(js_err)
        });
        if let Err(err) = pushed {
            crate::debug!("redirect"; "pushState to {} failed: {}", path, err);
        }
    }

    fn reload(&self) -> Result<(), WindowError> {
        global()?.location().reload().map_err(js_err)
    }

    fn scroll_position(&self) -> Result<(f64, f64), WindowError> {
        let window = global()?;
        let x = window.scroll_x().map_err(js_err)?;
        let y = window.scroll_y().map_err(js_err)?;
        Ok((x, y))
    }

    fn cookie(&self, name: &str) -> Result<Option<String>, WindowError> {
        let header = html_document()?.cookie().map_err(js_err)?;
        Ok(parse_cookie_header(&header, name))
    }

    fn set_cookie(&self, name: &str, value: &str, max_age: Duration) -> Result<(), WindowError> {
        let cookie = format!(
            "{name}={value}; max-age={}; path=/; SameSite=Lax",
            max_age.as_secs()
        );
        html_document()?.set_cookie(&cookie).map_err(js_err)
    }
}
