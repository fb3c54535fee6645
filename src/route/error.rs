//! Route table construction errors.

use thiserror::Error;

/// Invalid route table declarations. All of these are startup errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("route table has no wildcard (`**`) binding")]
    MissingWildcard,

    #[error("route table has {0} wildcard (`**`) bindings, expected exactly one")]
    DuplicateWildcard(usize),

    #[error("wildcard binding must target the redirect handler, not page `{0}`")]
    WildcardBoundToPage(String),

    #[error("literal route `{0}` must bind a page, not the redirect handler")]
    LiteralBoundToRedirect(String),

    #[error("redirect target `{0}` is not a registered route")]
    UnregisteredTarget(String),

    #[error("redirect target must be a literal path, not `**`")]
    WildcardTarget,
}
