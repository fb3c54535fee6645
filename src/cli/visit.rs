//! `portico visit` - drive the shell through a sequence of locations.

use std::sync::Arc;

use anyhow::Result;
use owo_colors::OwoColorize;
use portico::config::SiteConfig;
use portico::consent::{ConsentState, ConsentStore};
use portico::route::RedirectOutcome;
use portico::shell::{ApplicationShell, View};
use portico::window::WindowHandle;
use portico::{debug, log};

pub fn run_visit(
    config: &SiteConfig,
    window: WindowHandle,
    paths: &[String],
    accept_cookies: bool,
) -> Result<()> {
    let site = config.assemble()?;
    let consent = ConsentStore::new(Arc::clone(&window), &config.consent);
    let mut shell = ApplicationShell::start(site.table, window, consent, config.shell)
        .with_title(&config.site.title);

    let chrome = shell.chrome();
    if chrome.header {
        log!("shell"; "{}", chrome.title.bold());
    }

    for (i, path) in paths.iter().enumerate() {
        let view = shell.navigate(path);
        report(path, &view);

        if i == 0 && accept_cookies && shell.banner_visible() {
            match shell.dismiss_banner() {
                ConsentState::Acknowledged => log!("consent"; "cookie notice acknowledged"),
                ConsentState::Pending => log!("consent"; "banner hidden for this session only"),
            }
        }
    }
    Ok(())
}

fn report(requested: &str, view: &View) {
    if let Some(outcome) = &view.redirect {
        match outcome {
            RedirectOutcome::Navigated { from, to } => log!("redirect"; "{} -> {}", from, to),
            RedirectOutcome::NotFound { requested, page } => {
                log!("redirect"; "{} not found, showing `{}`", requested, page.id())
            }
        }
    }

    match &view.page {
        Some(page) => log!(
            "route";
            "{} -> {} {}",
            view.location,
            page.id().bold(),
            format!("({})", page.title()).dimmed()
        ),
        None => log!("error"; "{} mounted nothing", requested),
    }

    if view.chrome.cookie_banner {
        log!("consent"; "cookie banner shown");
    }
    debug!(
        "shell";
        "title={:?} header={} footer={} banner={}",
        view.chrome.title,
        view.chrome.header,
        view.chrome.footer,
        view.chrome.cookie_banner
    );
}
