//! Application shell - chrome around the routed outlet.
//!
//! The shell owns the route table, the window handle and the consent
//! store. Each navigation event reads the window's location, resolves it,
//! and either mounts the matched page or runs the redirect handler.
//! A `Default` redirect is followed by exactly one more resolution of the
//! new location; the table guarantees that target is a registered page.

mod view;

pub use view::{Chrome, View};

use std::sync::Arc;

use crate::config::ShellConfig;
use crate::consent::{ConsentState, ConsentStore};
use crate::page::Page;
use crate::route::{RedirectOutcome, Resolution, RoutePath, RouteTable};
use crate::window::WindowHandle;
use crate::{debug, log};

/// Persistent chrome around whichever page the route table selects.
pub struct ApplicationShell {
    table: RouteTable,
    window: WindowHandle,
    consent: ConsentStore,
    config: ShellConfig,
    title: Arc<str>,
    /// Banner visibility for this session
    banner: bool,
}

impl ApplicationShell {
    /// Start the shell. Consent is read once here.
    pub fn start(
        table: RouteTable,
        window: WindowHandle,
        consent: ConsentStore,
        config: ShellConfig,
    ) -> Self {
        let banner = config.cookie_banner && consent.read() == ConsentState::Pending;
        Self {
            table,
            window,
            consent,
            config,
            title: Arc::from(""),
            banner,
        }
    }

    /// Set the site title shown in the header.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Arc::from(title);
        self
    }

    /// Handle a navigation event at the window's current location.
    pub fn handle_navigation(&self) -> View {
        let location = self.window.current_location();
        match self.table.resolve(&location) {
            Resolution::Page { path, page, .. } => self.view(path, Some(Arc::clone(page)), None),
            Resolution::Fallback { path, handler, .. } => {
                let outcome = handler.handle(self.window.as_ref(), &path);
                if let RedirectOutcome::NotFound { page, .. } = &outcome {
                    let page = Arc::clone(page);
                    return self.view(path, Some(page), Some(outcome));
                }
                self.follow(outcome)
            }
        }
    }

    /// Navigate to `path`, then handle the resulting event.
    pub fn navigate(&self, path: &str) -> View {
        self.window.navigate_to(path);
        self.handle_navigation()
    }

    /// User dismissed the cookie banner.
    ///
    /// The banner is hidden for the rest of the session even if the
    /// cookie could not be written.
    pub fn dismiss_banner(&mut self) -> ConsentState {
        self.banner = false;
        match self.consent.acknowledge() {
            Ok(()) => ConsentState::Acknowledged,
            Err(err) => {
                log!("consent"; "could not persist acknowledgment: {}", err);
                ConsentState::Pending
            }
        }
    }

    #[inline]
    pub fn banner_visible(&self) -> bool {
        self.banner
    }

    #[inline]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    #[inline]
    pub fn window(&self) -> &WindowHandle {
        &self.window
    }

    pub fn chrome(&self) -> Chrome {
        Chrome {
            title: Arc::clone(&self.title),
            header: self.config.header,
            footer: self.config.footer,
            cookie_banner: self.banner,
        }
    }

    /// Resolve the location a `Default` redirect navigated to.
    fn follow(&self, outcome: RedirectOutcome) -> View {
        let location = self.window.current_location();
        match self.table.resolve(&location) {
            Resolution::Page { path, page, .. } => {
                self.view(path, Some(Arc::clone(page)), Some(outcome))
            }
            Resolution::Fallback { path, .. } => {
                // window did not report the redirect target back
                debug!("redirect"; "{} did not resolve to a page", path);
                self.view(path, None, Some(outcome))
            }
        }
    }

    fn view(
        &self,
        location: RoutePath,
        page: Option<Arc<dyn Page>>,
        redirect: Option<RedirectOutcome>,
    ) -> View {
        View {
            location,
            page,
            redirect,
            chrome: self.chrome(),
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConsentConfig;
    use crate::page::StaticPage;
    use crate::route::{MatchPolicy, RedirectPolicy};
    use crate::window::{MemoryWindow, Window};

    fn page(id: &str) -> Arc<dyn Page> {
        Arc::new(StaticPage::new(id, id))
    }

    fn table(redirect: RedirectPolicy) -> RouteTable {
        RouteTable::builder(MatchPolicy::default())
            .page("o-nas", page("about-us"))
            .page("office", page("office"))
            .redirect("**")
            .build(redirect)
            .unwrap()
    }

    fn shell_with(window: Arc<MemoryWindow>, redirect: RedirectPolicy) -> ApplicationShell {
        let consent = ConsentStore::new(window.clone(), &ConsentConfig::default());
        ApplicationShell::start(table(redirect), window, consent, ShellConfig::default())
    }

    fn shell(window: Arc<MemoryWindow>) -> ApplicationShell {
        shell_with(
            window,
            RedirectPolicy::Default {
                target: "o-nas".into(),
            },
        )
    }

    #[test]
    fn test_mounts_about_us_without_redirect() {
        let window = Arc::new(MemoryWindow::new("/o-nas"));
        let view = shell(window.clone()).handle_navigation();
        assert_eq!(view.page_id(), Some("about-us"));
        assert!(!view.redirected());
        assert_eq!(window.navigations(), 0);
    }

    #[test]
    fn test_mounts_office_without_redirect() {
        let window = Arc::new(MemoryWindow::new("/"));
        let view = shell(window.clone()).navigate("/office");
        assert_eq!(view.page_id(), Some("office"));
        assert_eq!(view.location, "/office");
        assert!(!view.redirected());
        // only the explicit navigation
        assert_eq!(window.navigations(), 1);
    }

    #[test]
    fn test_unknown_path_redirects_to_default_target() {
        let window = Arc::new(MemoryWindow::new("/unknown-path"));
        let view = shell(window.clone()).handle_navigation();

        assert_eq!(window.history(), ["/o-nas"]);
        assert_eq!(view.page_id(), Some("about-us"));
        assert_eq!(view.location, "/o-nas");
        match view.redirect {
            Some(RedirectOutcome::Navigated { from, to }) => {
                assert_eq!(from, "/unknown-path");
                assert_eq!(to, "/o-nas");
            }
            other => panic!("unexpected redirect: {other:?}"),
        }
    }

    #[test]
    fn test_root_redirects_while_home_disabled() {
        let window = Arc::new(MemoryWindow::new("/"));
        let view = shell(window.clone()).handle_navigation();
        assert!(view.redirected());
        assert_eq!(view.page_id(), Some("about-us"));
        assert_eq!(window.navigations(), 1);
    }

    #[test]
    fn test_not_found_policy_keeps_address() {
        let window = Arc::new(MemoryWindow::new("/nope"));
        let shell = shell_with(
            window.clone(),
            RedirectPolicy::NotFound {
                page: page("not-found"),
            },
        );
        let view = shell.handle_navigation();
        assert_eq!(view.page_id(), Some("not-found"));
        assert_eq!(view.location, "/nope");
        assert!(view.redirected());
        assert_eq!(window.navigations(), 0);
        assert_eq!(window.current_location(), "/nope");
    }

    #[test]
    fn test_chrome_and_banner_on_first_visit() {
        let window = Arc::new(MemoryWindow::new("/office"));
        let shell = shell(window);
        let view = shell.handle_navigation();
        assert_eq!(
            view.chrome,
            Chrome {
                title: Arc::from(""),
                header: true,
                footer: true,
                cookie_banner: true
            }
        );
    }

    #[test]
    fn test_title_carried_into_chrome() {
        let window = Arc::new(MemoryWindow::new("/unknown-path"));
        let app = shell(window).with_title("Volontulo");
        let view = app.handle_navigation();
        assert_eq!(&*view.chrome.title, "Volontulo");
        assert_eq!(view.page_id(), Some("about-us"));
    }

    #[test]
    fn test_dismiss_banner_persists() {
        let window = Arc::new(MemoryWindow::new("/office"));
        let mut first = shell(window.clone());
        assert!(first.banner_visible());
        assert_eq!(first.dismiss_banner(), ConsentState::Acknowledged);
        assert!(!first.handle_navigation().chrome.cookie_banner);

        // next start within max-age
        let second = shell(window);
        assert!(!second.banner_visible());
    }

    #[test]
    fn test_storage_failure_never_breaks_navigation() {
        let window = Arc::new(MemoryWindow::with_cookies_disabled("/office"));
        let mut app = shell(window.clone());
        assert!(app.banner_visible());
        assert_eq!(app.dismiss_banner(), ConsentState::Pending);
        assert!(!app.banner_visible());
        assert_eq!(app.navigate("/o-nas").page_id(), Some("about-us"));

        // next visit shows the banner again
        let again = shell(window);
        assert!(again.banner_visible());
    }

    #[test]
    fn test_banner_disabled_in_config() {
        let window = Arc::new(MemoryWindow::new("/office"));
        let consent = ConsentStore::new(window.clone(), &ConsentConfig::default());
        let config = ShellConfig {
            header: true,
            footer: false,
            cookie_banner: false,
        };
        let shell = ApplicationShell::start(
            table(RedirectPolicy::Default {
                target: "office".into(),
            }),
            window,
            consent,
            config,
        );
        let chrome = shell.handle_navigation().chrome;
        assert!(!chrome.cookie_banner);
        assert!(!chrome.footer);
    }

    #[test]
    fn test_window_shared_with_consent() {
        let window = Arc::new(MemoryWindow::new("/"));
        let mut shell = shell(window.clone());
        shell.dismiss_banner();
        assert_eq!(
            shell.window().cookie("cookie-law-seen").unwrap().as_deref(),
            Some("true")
        );
        assert_eq!(window.cookie("cookie-law-seen").unwrap().as_deref(), Some("true"));
    }
}
