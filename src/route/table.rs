//! Ordered route table and path resolution.

use std::fmt;
use std::sync::Arc;

use crate::debug;
use crate::page::Page;

use super::error::RouteError;
use super::path::{MatchPolicy, RoutePath};
use super::pattern::RoutePattern;
use super::redirect::{RedirectHandler, RedirectPolicy};

/// What a binding mounts.
#[derive(Debug, Clone)]
pub enum RouteTarget {
    Page(Arc<dyn Page>),
    Redirect,
}

/// A pattern paired with its target.
#[derive(Debug, Clone)]
pub struct RouteBinding {
    pattern: RoutePattern,
    target: RouteTarget,
}

impl RouteBinding {
    #[inline]
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    #[inline]
    pub fn target(&self) -> &RouteTarget {
        &self.target
    }

    pub fn page(&self) -> Option<&Arc<dyn Page>> {
        match &self.target {
            RouteTarget::Page(page) => Some(page),
            RouteTarget::Redirect => None,
        }
    }
}

impl fmt::Display for RouteBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            RouteTarget::Page(page) => write!(f, "{} -> {}", self.pattern, page.id()),
            RouteTarget::Redirect => write!(f, "{} -> (redirect)", self.pattern),
        }
    }
}

/// Result of resolving one path.
#[derive(Debug)]
pub enum Resolution<'a> {
    /// A literal binding matched.
    Page {
        path: RoutePath,
        binding: &'a RouteBinding,
        page: &'a Arc<dyn Page>,
    },
    /// Nothing matched; the wildcard binding applies.
    Fallback {
        path: RoutePath,
        binding: &'a RouteBinding,
        handler: &'a RedirectHandler,
    },
}

impl Resolution<'_> {
    pub fn path(&self) -> &RoutePath {
        match self {
            Self::Page { path, .. } | Self::Fallback { path, .. } => path,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Immutable, ordered route table.
///
/// Literal bindings are tried in declaration order, first match wins. The
/// single wildcard binding is kept apart and only consulted after every
/// literal failed, wherever it was declared.
#[derive(Debug, Clone)]
pub struct RouteTable {
    literals: Vec<RouteBinding>,
    wildcard: RouteBinding,
    policy: MatchPolicy,
    redirect: RedirectHandler,
    /// Literal paths declared more than once (later entries are shadowed)
    shadowed: Vec<RoutePath>,
}

impl RouteTable {
    pub fn builder(policy: MatchPolicy) -> RouteTableBuilder {
        RouteTableBuilder {
            policy,
            declared: Vec::new(),
        }
    }

    /// Resolve a location to exactly one binding. Pure.
    pub fn resolve(&self, location: &str) -> Resolution<'_> {
        let path = RoutePath::from_browser(location, &self.policy);

        for binding in &self.literals {
            if binding.pattern.matches(&path)
                && let RouteTarget::Page(page) = &binding.target
            {
                debug!("route"; "{} -> {}", path, page.id());
                return Resolution::Page {
                    path,
                    binding,
                    page,
                };
            }
        }

        debug!("route"; "{} -> {}", path, self.wildcard.pattern);
        Resolution::Fallback {
            path,
            binding: &self.wildcard,
            handler: &self.redirect,
        }
    }

    /// All bindings, literals in declaration order then the wildcard.
    pub fn bindings(&self) -> impl Iterator<Item = &RouteBinding> {
        self.literals.iter().chain(std::iter::once(&self.wildcard))
    }

    #[inline]
    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    #[inline]
    pub fn redirect(&self) -> &RedirectHandler {
        &self.redirect
    }

    /// Literal paths declared more than once.
    pub fn shadowed(&self) -> &[RoutePath] {
        &self.shadowed
    }

    /// Whether `path` (normalized under this table's policy) is a literal.
    pub fn is_registered(&self, path: &RoutePath) -> bool {
        self.literals.iter().any(|b| b.pattern.matches(path))
    }

    /// Number of bindings including the wildcard.
    pub fn len(&self) -> usize {
        self.literals.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Collects declarations and validates them into a [`RouteTable`].
#[derive(Debug)]
pub struct RouteTableBuilder {
    policy: MatchPolicy,
    declared: Vec<(String, RouteTarget)>,
}

impl RouteTableBuilder {
    /// Bind `pattern` to a page.
    pub fn page(mut self, pattern: &str, page: Arc<dyn Page>) -> Self {
        self.declared.push((pattern.to_string(), RouteTarget::Page(page)));
        self
    }

    /// Bind `pattern` to the redirect handler.
    pub fn redirect(mut self, pattern: &str) -> Self {
        self.declared.push((pattern.to_string(), RouteTarget::Redirect));
        self
    }

    /// Every problem with the declarations, in the order they are found.
    ///
    /// Binding shapes come first, then the wildcard count, then the
    /// redirect target. Pass `None` when the redirect policy itself could
    /// not be built; the other checks still run.
    pub fn errors(&self, redirect: Option<&RedirectPolicy>) -> Vec<RouteError> {
        let policy = &self.policy;
        let mut errors = Vec::new();
        let mut wildcards = 0;

        for (raw, target) in &self.declared {
            match (RoutePattern::parse(raw, policy), target) {
                (RoutePattern::Wildcard, RouteTarget::Redirect) => wildcards += 1,
                (RoutePattern::Wildcard, RouteTarget::Page(page)) => {
                    wildcards += 1;
                    errors.push(RouteError::WildcardBoundToPage(page.id().to_string()));
                }
                (RoutePattern::Literal(path), RouteTarget::Redirect) => {
                    errors.push(RouteError::LiteralBoundToRedirect(path.to_string()));
                }
                (RoutePattern::Literal(_), RouteTarget::Page(_)) => {}
            }
        }

        match wildcards {
            0 => errors.push(RouteError::MissingWildcard),
            1 => {}
            n => errors.push(RouteError::DuplicateWildcard(n)),
        }

        if let Some(RedirectPolicy::Default { target }) = redirect {
            match RoutePattern::parse(target, policy) {
                RoutePattern::Wildcard => errors.push(RouteError::WildcardTarget),
                RoutePattern::Literal(path) if !self.binds_page(&path) => {
                    errors.push(RouteError::UnregisteredTarget(path.to_string()));
                }
                RoutePattern::Literal(_) => {}
            }
        }

        errors
    }

    /// Validate and freeze the table.
    ///
    /// Fails with the first of [`errors`](Self::errors): not exactly one
    /// wildcard, targets that do not fit their pattern kind, or a
    /// `Default` redirect target that is not a registered literal.
    pub fn build(self, redirect: RedirectPolicy) -> Result<RouteTable, RouteError> {
        if let Some(err) = self.errors(Some(&redirect)).into_iter().next() {
            return Err(err);
        }

        let policy = self.policy;
        let (mut wildcards, literals): (Vec<_>, Vec<_>) = self
            .declared
            .into_iter()
            .map(|(raw, target)| RouteBinding {
                pattern: RoutePattern::parse(&raw, &policy),
                target,
            })
            .partition(|binding| binding.pattern.is_wildcard());

        let Some(wildcard) = wildcards.pop() else {
            return Err(RouteError::MissingWildcard);
        };
        let shadowed = find_shadowed(&literals);

        let redirect = match redirect {
            RedirectPolicy::Default { target } => {
                RedirectHandler::navigate(RoutePath::from_browser(&target, &policy))
            }
            RedirectPolicy::NotFound { page } => RedirectHandler::not_found(page),
        };

        Ok(RouteTable {
            literals,
            wildcard,
            policy,
            redirect,
            shadowed,
        })
    }

    /// Whether a literal declaration binds `path` to a page.
    fn binds_page(&self, path: &RoutePath) -> bool {
        self.declared.iter().any(|(raw, target)| {
            matches!(target, RouteTarget::Page(_))
                && RoutePattern::parse(raw, &self.policy).literal() == Some(path)
        })
    }
}

/// Literal paths that appear more than once, in first-seen order.
fn find_shadowed(literals: &[RouteBinding]) -> Vec<RoutePath> {
    let mut seen = rustc_hash::FxHashSet::default();
    let mut shadowed = Vec::new();
    for path in literals.iter().filter_map(|b| b.pattern.literal()) {
        if !seen.insert(path) && !shadowed.contains(path) {
            shadowed.push(path.clone());
        }
    }
    shadowed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::StaticPage;
    use crate::route::{RedirectOutcome, TrailingSlash};
    use crate::window::{MemoryWindow, Window};

    fn page(id: &str) -> Arc<dyn Page> {
        Arc::new(StaticPage::new(id, id))
    }

    fn default_redirect() -> RedirectPolicy {
        RedirectPolicy::Default {
            target: "o-nas".into(),
        }
    }

    /// The site's table: home disabled, two static pages, wildcard last.
    fn site_table(policy: MatchPolicy) -> RouteTable {
        RouteTable::builder(policy)
            .page("o-nas", page("about-us"))
            .page("office", page("office"))
            .redirect("**")
            .build(default_redirect())
            .unwrap()
    }

    fn page_id<'a>(resolution: &'a Resolution<'_>) -> Option<&'a str> {
        match resolution {
            Resolution::Page { page, .. } => Some(page.id()),
            Resolution::Fallback { .. } => None,
        }
    }

    #[test]
    fn test_registered_literals_never_fall_back() {
        let table = site_table(MatchPolicy::default());
        for binding in table.bindings().filter(|b| !b.pattern().is_wildcard()) {
            let path = binding.pattern().to_string();
            let resolution = table.resolve(&path);
            assert!(!resolution.is_fallback(), "{path} fell back");
            assert_eq!(page_id(&resolution), binding.page().map(|p| p.id()));
        }
    }

    #[test]
    fn test_about_us_scenario() {
        let table = site_table(MatchPolicy::default());
        let window = MemoryWindow::new("/o-nas");
        let resolution = table.resolve(&window.current_location());
        assert_eq!(page_id(&resolution), Some("about-us"));
        assert_eq!(window.navigations(), 0);
    }

    #[test]
    fn test_office_scenario() {
        let table = site_table(MatchPolicy::default());
        assert_eq!(page_id(&table.resolve("/office")), Some("office"));
    }

    #[test]
    fn test_unknown_path_falls_back_and_redirects_once() {
        let table = site_table(MatchPolicy::default());
        let window = MemoryWindow::new("/unknown-path");

        let resolution = table.resolve(&window.current_location());
        let Resolution::Fallback { path, handler, .. } = resolution else {
            panic!("expected fallback");
        };
        let outcome = handler.handle(&window, &path);

        assert_eq!(window.navigations(), 1);
        assert_eq!(window.current_location(), "/o-nas");
        assert!(matches!(outcome, RedirectOutcome::Navigated { ref to, .. } if to == "/o-nas"));
    }

    #[test]
    fn test_root_falls_back_while_home_disabled() {
        let table = site_table(MatchPolicy::default());
        assert!(table.resolve("/").is_fallback());
        assert!(table.resolve("").is_fallback());
    }

    #[test]
    fn test_root_binding_when_enabled() {
        let table = RouteTable::builder(MatchPolicy::default())
            .page("", page("home"))
            .page("o-nas", page("about-us"))
            .redirect("**")
            .build(default_redirect())
            .unwrap();
        assert_eq!(page_id(&table.resolve("/")), Some("home"));
        assert_eq!(page_id(&table.resolve("")), Some("home"));
    }

    #[test]
    fn test_wildcard_evaluated_last_regardless_of_order() {
        let table = RouteTable::builder(MatchPolicy::default())
            .redirect("**")
            .page("o-nas", page("about-us"))
            .page("office", page("office"))
            .build(default_redirect())
            .unwrap();
        assert_eq!(page_id(&table.resolve("/office")), Some("office"));
        assert!(table.bindings().last().unwrap().pattern().is_wildcard());
    }

    #[test]
    fn test_duplicate_literal_first_wins() {
        let table = RouteTable::builder(MatchPolicy::default())
            .page("office", page("office"))
            .page("/office/", page("office-v2"))
            .page("o-nas", page("about-us"))
            .redirect("**")
            .build(default_redirect())
            .unwrap();
        assert_eq!(page_id(&table.resolve("/office")), Some("office"));
        assert_eq!(table.shadowed().len(), 1);
        assert_eq!(table.shadowed()[0], "/office");
    }

    #[test]
    fn test_trailing_slash_policy() {
        let ignore = site_table(MatchPolicy::default());
        assert_eq!(page_id(&ignore.resolve("/office/")), Some("office"));

        let strict = site_table(MatchPolicy {
            trailing_slash: TrailingSlash::Strict,
            case_sensitive: true,
        });
        assert_eq!(page_id(&strict.resolve("/office")), Some("office"));
        assert!(strict.resolve("/office/").is_fallback());
    }

    #[test]
    fn test_case_policy() {
        let sensitive = site_table(MatchPolicy::default());
        assert!(sensitive.resolve("/Office").is_fallback());

        let insensitive = site_table(MatchPolicy {
            trailing_slash: TrailingSlash::Ignore,
            case_sensitive: false,
        });
        assert_eq!(page_id(&insensitive.resolve("/OFFICE")), Some("office"));
    }

    #[test]
    fn test_query_string_ignored() {
        let table = site_table(MatchPolicy::default());
        assert_eq!(page_id(&table.resolve("/o-nas?utm_source=x")), Some("about-us"));
    }

    #[test]
    fn test_resolution_is_pure() {
        let table = site_table(MatchPolicy::default());
        let before: Vec<String> = table.bindings().map(ToString::to_string).collect();
        for _ in 0..3 {
            assert!(table.resolve("/missing").is_fallback());
            assert_eq!(page_id(&table.resolve("/o-nas")), Some("about-us"));
        }
        let after: Vec<String> = table.bindings().map(ToString::to_string).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_missing_wildcard_rejected() {
        let err = RouteTable::builder(MatchPolicy::default())
            .page("o-nas", page("about-us"))
            .build(default_redirect())
            .unwrap_err();
        assert_eq!(err, RouteError::MissingWildcard);
    }

    #[test]
    fn test_two_wildcards_rejected() {
        let err = RouteTable::builder(MatchPolicy::default())
            .page("o-nas", page("about-us"))
            .redirect("**")
            .redirect("**")
            .build(default_redirect())
            .unwrap_err();
        assert_eq!(err, RouteError::DuplicateWildcard(2));
    }

    #[test]
    fn test_wildcard_bound_to_page_rejected() {
        let err = RouteTable::builder(MatchPolicy::default())
            .page("o-nas", page("about-us"))
            .page("**", page("office"))
            .build(default_redirect())
            .unwrap_err();
        assert_eq!(err, RouteError::WildcardBoundToPage("office".into()));
    }

    #[test]
    fn test_literal_bound_to_redirect_rejected() {
        let err = RouteTable::builder(MatchPolicy::default())
            .redirect("legacy")
            .redirect("**")
            .build(default_redirect())
            .unwrap_err();
        assert_eq!(err, RouteError::LiteralBoundToRedirect("/legacy".into()));
    }

    #[test]
    fn test_unregistered_redirect_target_rejected() {
        let err = RouteTable::builder(MatchPolicy::default())
            .page("office", page("office"))
            .redirect("**")
            .build(RedirectPolicy::Default { target: "".into() })
            .unwrap_err();
        assert_eq!(err, RouteError::UnregisteredTarget("/".into()));

        let err = RouteTable::builder(MatchPolicy::default())
            .page("office", page("office"))
            .redirect("**")
            .build(RedirectPolicy::Default {
                target: "**".into(),
            })
            .unwrap_err();
        assert_eq!(err, RouteError::WildcardTarget);
    }

    #[test]
    fn test_errors_reports_every_problem() {
        let builder = RouteTable::builder(MatchPolicy::default())
            .redirect("legacy")
            .page("**", page("office"))
            .page("**", page("about-us"));
        let errors = builder.errors(Some(&RedirectPolicy::Default {
            target: "kontakt".into(),
        }));
        assert_eq!(
            errors,
            [
                RouteError::LiteralBoundToRedirect("/legacy".into()),
                RouteError::WildcardBoundToPage("office".into()),
                RouteError::WildcardBoundToPage("about-us".into()),
                RouteError::DuplicateWildcard(2),
                RouteError::UnregisteredTarget("/kontakt".into()),
            ]
        );
    }

    #[test]
    fn test_errors_without_redirect_policy() {
        let builder = RouteTable::builder(MatchPolicy::default()).page("o-nas", page("about-us"));
        assert_eq!(builder.errors(None), [RouteError::MissingWildcard]);
    }

    #[test]
    fn test_redirect_target_must_bind_page() {
        // a literal bound to the redirect handler is not a registered target
        let errors = RouteTable::builder(MatchPolicy::default())
            .redirect("legacy")
            .redirect("**")
            .errors(Some(&RedirectPolicy::Default {
                target: "legacy".into(),
            }));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[1], RouteError::UnregisteredTarget("/legacy".into()));
    }

    #[test]
    fn test_redirect_target_normalized_with_policy() {
        let table = RouteTable::builder(MatchPolicy::default())
            .page("o-nas", page("about-us"))
            .redirect("**")
            .build(RedirectPolicy::Default {
                target: "/o-nas/".into(),
            })
            .unwrap();
        assert_eq!(table.redirect().target().unwrap(), "/o-nas");
        assert!(table.is_registered(table.redirect().target().unwrap()));
    }

    #[test]
    fn test_not_found_policy_table() {
        let table = RouteTable::builder(MatchPolicy::default())
            .page("office", page("office"))
            .redirect("**")
            .build(RedirectPolicy::NotFound {
                page: page("not-found"),
            })
            .unwrap();
        assert!(table.redirect().target().is_none());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_bindings_share_pages() {
        let office = page("office");
        let table = RouteTable::builder(MatchPolicy::default())
            .page("office", Arc::clone(&office))
            .page("biuro", Arc::clone(&office))
            .redirect("**")
            .build(RedirectPolicy::Default {
                target: "office".into(),
            })
            .unwrap();
        for binding in table.bindings().filter_map(RouteBinding::page) {
            assert!(Arc::ptr_eq(binding, &office));
        }
    }
}
