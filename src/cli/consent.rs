//! `portico consent` - inspect or acknowledge the consent cookie.

use anyhow::{Context, Result};
use portico::config::SiteConfig;
use portico::consent::{ConsentState, ConsentStore};
use portico::log;
use portico::window::WindowHandle;

pub fn run_consent(config: &SiteConfig, window: WindowHandle, accept: bool) -> Result<()> {
    config.validate()?;
    let store = ConsentStore::new(window, &config.consent);

    if accept {
        store.acknowledge().with_context(|| {
            format!(
                "Failed to store consent in {}",
                config.cookie_store().display()
            )
        })?;
    }

    let state = match store.read() {
        ConsentState::Acknowledged => "acknowledged",
        ConsentState::Pending => "pending, banner is shown",
    };
    log!("consent"; "{}: {}", store.cookie_name(), state);
    Ok(())
}
