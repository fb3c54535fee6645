//! Configuration section definitions.
//!
//! Each module corresponds to a section in `portico.toml`:
//!
//! | Module    | TOML Section   | Purpose                                 |
//! |-----------|----------------|-----------------------------------------|
//! | `site`    | `[site]`       | Title, page registry, cookie jar path   |
//! | `routes`  | `[routes]`     | Bindings, matching policy, redirect     |
//! | `consent` | `[consent]`    | Consent cookie name and max-age         |
//! | `shell`   | `[shell]`      | Persistent chrome toggles               |

mod consent;
mod routes;
mod shell;
mod site;

pub use consent::ConsentConfig;
pub use routes::{BindingConfig, RedirectConfig, RoutesConfig};
pub use shell::ShellConfig;
pub use site::{PageConfig, SiteSectionConfig};
