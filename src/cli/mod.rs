//! Command-line interface module.

mod args;
pub mod check;
pub mod consent;
pub mod routes;
pub mod visit;

pub use args::{Cli, Commands};
