//! `portico routes` - print the effective route table.

use anyhow::Result;
use owo_colors::OwoColorize;
use portico::config::SiteConfig;
use portico::route::{RouteTable, TrailingSlash};

pub fn print_routes(config: &SiteConfig) -> Result<()> {
    let site = config.assemble()?;
    for line in render_routes(config, &site.table) {
        println!("{line}");
    }
    Ok(())
}

/// One line per binding in resolution order, then disabled entries and the fallback.
fn render_routes(config: &SiteConfig, table: &RouteTable) -> Vec<String> {
    let policy = table.policy();
    let slash = match policy.trailing_slash {
        TrailingSlash::Ignore => "ignore",
        TrailingSlash::Strict => "strict",
    };

    let mut lines = vec![format!(
        "{} trailing_slash={}, case_sensitive={}",
        "matching:".bold(),
        slash,
        policy.case_sensitive
    )];

    lines.extend(table.bindings().map(|binding| format!("  {binding}")));

    lines.extend(
        config
            .routes
            .bindings
            .iter()
            .filter(|binding| !binding.enabled)
            .map(|binding| {
                let target = binding.page.as_deref().unwrap_or("(redirect)");
                let line = format!(
                    "/{} -> {} (disabled)",
                    binding.path.trim_start_matches('/'),
                    target
                );
                format!("  {}", line.dimmed())
            }),
    );

    for path in table.shadowed() {
        lines.push(format!("  {} duplicate `{}` ignored", "!".yellow(), path));
    }

    lines.push(format!("{} {}", "fallback:".bold(), table.redirect()));
    lines
}
