//! Route resolution.
//!
//! # Module Structure
//!
//! ```text
//! route/
//! ├── path       # RoutePath + MatchPolicy (normalization)
//! ├── pattern    # literal / `**` patterns
//! ├── table      # RouteTable, builder, Resolution
//! ├── redirect   # RedirectHandler (fallback policy)
//! └── error      # RouteError
//! ```
//!
//! # Example
//!
//! ```ignore
//! let table = RouteTable::builder(MatchPolicy::default())
//!     .page("o-nas", about_us)
//!     .page("office", office)
//!     .redirect("**")
//!     .build(RedirectPolicy::Default { target: "o-nas".into() })?;
//!
//! match table.resolve("/office") {
//!     Resolution::Page { page, .. } => mount(page),
//!     Resolution::Fallback { path, handler, .. } => handler.handle(&*window, &path),
//! }
//! ```

mod error;
mod path;
mod pattern;
mod redirect;
mod table;

pub use error::RouteError;
pub use path::{MatchPolicy, RoutePath, TrailingSlash};
pub use pattern::{RoutePattern, WILDCARD};
pub use redirect::{RedirectHandler, RedirectOutcome, RedirectPolicy};
pub use table::{Resolution, RouteBinding, RouteTable, RouteTableBuilder, RouteTarget};
