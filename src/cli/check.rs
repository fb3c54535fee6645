//! `portico check` - validate the configuration.

use anyhow::Result;
use portico::config::SiteConfig;
use portico::log;

pub fn check_config(config: &SiteConfig) -> Result<()> {
    let site = config.assemble()?;

    let source = if config.config_path.as_os_str().is_empty() {
        "built-in site".to_string()
    } else {
        config.config_path.display().to_string()
    };
    log!(
        "check";
        "{}: {} pages, {} routes, fallback: {}",
        source,
        site.pages.len(),
        site.table.len(),
        site.table.redirect()
    );
    Ok(())
}
