//! Portico - route table, redirect policy and window capability for a
//! small marketing site.
//!
//! The composition root builds everything once:
//!
//! ```ignore
//! let config = SiteConfig::load(Path::new("portico.toml"))?;
//! let site = config.assemble()?;
//! let window = WindowFactory::create(WindowKind::Browser)?;
//! let consent = ConsentStore::new(window.clone(), &config.consent);
//! let shell = ApplicationShell::start(site.table, window, consent, config.shell)
//!     .with_title(&config.site.title);
//! let view = shell.handle_navigation();
//! ```

pub mod logger;

pub mod config;
pub mod consent;
pub mod page;
pub mod route;
pub mod shell;
pub mod window;
