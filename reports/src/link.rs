//! Version-aware link targets.
//!
//! A card's href is stored unversioned. When a documentation version is
//! active, a [`VersionStrategy`] merges it into the href; when none is
//! active the href is used unchanged. The encoding belongs to whoever owns
//! routing, so the strategy is pluggable:
//!
//! - [`QueryParam`] - `/foo` becomes `/foo?version=v1` (default)
//! - [`PathPrefix`] - `/foo` becomes `/v1/foo`
//!
//! Absolute external URLs (`https://...`, `mailto:...`) are never rewritten
//! by the built-in strategies.
//!
//! # Example
//!
//! ```rust
//! use reports_page::link::LinkStrategy;
//!
//! let query = LinkStrategy::default();
//! assert_eq!(query.resolve("/foo", Some("v1")), "/foo?version=v1");
//! assert_eq!(query.resolve("/foo", None), "/foo");
//!
//! let path = LinkStrategy::path_prefix();
//! assert_eq!(path.resolve("/foo", Some("v1")), "/v1/foo");
//! ```

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{ReportsError, Result};

/// Default query parameter carrying the version.
pub const DEFAULT_VERSION_PARAM: &str = "version";

/// Rule for merging an active version into a base href.
///
/// Implementations only see hrefs with a version present; the "no version,
/// no change" half of the contract is enforced by [`LinkStrategy`].
pub trait VersionStrategy: fmt::Debug + Send + Sync {
    /// Return `href` augmented with `version`.
    fn apply(&self, href: &str, version: &str) -> String;
}

/// Carries the version as a query parameter.
///
/// An existing parameter with the same name is replaced, other parameters
/// keep their order, and a trailing `#fragment` stays last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryParam {
    /// Parameter name, `version` by default
    pub name: String,
}

impl Default for QueryParam {
    fn default() -> Self {
        Self {
            name: DEFAULT_VERSION_PARAM.to_string(),
        }
    }
}

impl VersionStrategy for QueryParam {
    fn apply(&self, href: &str, version: &str) -> String {
        if is_external(href) {
            return href.to_string();
        }

        let (rest, fragment) = split_fragment(href);
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, query),
            None => (rest, ""),
        };

        let versioned = format!("{}={}", self.name, urlencoding::encode(version));
        let mut pairs: Vec<&str> = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter(|pair| pair.split('=').next() != Some(self.name.as_str()))
            .collect();
        pairs.push(&versioned);

        format!("{}?{}{}", path, pairs.join("&"), fragment)
    }
}

/// Carries the version as the first path segment.
///
/// The segment is inserted in front of whatever the href starts with, so:
///
/// - `/foo` becomes `/v1/foo` and relative `foo` becomes `v1/foo`
/// - a query- or fragment-only href (`?tab=2`, `#top`) becomes `v1/?tab=2`,
///   `v1/#top`, resolved against the current directory
/// - an href already starting with the version (`/v1/foo`) gains a second
///   segment; catalog hrefs are expected to be unversioned
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathPrefix;

impl VersionStrategy for PathPrefix {
    fn apply(&self, href: &str, version: &str) -> String {
        if is_external(href) {
            return href.to_string();
        }

        let segment = urlencoding::encode(version);
        match href.strip_prefix('/') {
            Some(rest) => format!("/{}/{}", segment, rest),
            None => format!("{}/{}", segment, href),
        }
    }
}

/// Shared handle to the strategy in use for a render pass.
#[derive(Clone, Debug)]
pub struct LinkStrategy(Arc<dyn VersionStrategy>);

impl LinkStrategy {
    /// Wrap a custom strategy.
    pub fn new(strategy: impl VersionStrategy + 'static) -> Self {
        Self(Arc::new(strategy))
    }

    /// Query parameter strategy with a custom parameter name.
    ///
    /// A blank name would produce `?=v1`, so it falls back to
    /// [`DEFAULT_VERSION_PARAM`].
    pub fn query(name: impl Into<String>) -> Self {
        let name = name.into();
        let name = match name.trim() {
            "" => DEFAULT_VERSION_PARAM.to_string(),
            trimmed => trimmed.to_string(),
        };
        Self::new(QueryParam { name })
    }

    /// Path prefix strategy.
    pub fn path_prefix() -> Self {
        Self::new(PathPrefix)
    }

    /// Resolve the target shown to the user.
    ///
    /// A missing, empty or whitespace-only version leaves `href` untouched.
    pub fn resolve(&self, href: &str, version: Option<&str>) -> String {
        match active_version(version) {
            Some(version) => self.0.apply(href, version),
            None => href.to_string(),
        }
    }
}

impl Default for LinkStrategy {
    fn default() -> Self {
        Self::new(QueryParam::default())
    }
}

/// A non-empty, unversioned link target.
///
/// This is the only href type [`crate::components::VersionedLink`] accepts,
/// so a link can never render as `<a href="">`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VersionedHref {
    base: String,
}

impl VersionedHref {
    /// Reject empty hrefs up front so resolution cannot produce a dead link.
    pub fn new(href: impl Into<String>) -> Result<Self> {
        let base = href.into();
        if base.trim().is_empty() {
            return Err(ReportsError::EmptyLink);
        }
        Ok(Self { base })
    }

    /// Wrap an href already checked by [`crate::types::Catalog::new`].
    pub(crate) fn validated(base: String) -> Self {
        debug_assert!(!base.trim().is_empty());
        Self { base }
    }

    /// The unversioned href.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Resolve against the active version.
    pub fn resolve(&self, version: Option<&str>, strategy: &LinkStrategy) -> String {
        strategy.resolve(&self.base, version)
    }
}

/// Normalize a version context: blank counts as absent.
pub fn active_version(version: Option<&str>) -> Option<&str> {
    version.map(str::trim).filter(|v| !v.is_empty())
}

fn split_fragment(href: &str) -> (&str, &str) {
    match href.find('#') {
        Some(idx) => href.split_at(idx),
        None => (href, ""),
    }
}

/// `scheme:` before any path, query or fragment delimiter, or `//host`.
fn is_external(href: &str) -> bool {
    if href.starts_with("//") {
        return true;
    }
    let Some(colon) = href.find(':') else {
        return false;
    };
    let scheme = &href[..colon];
    !scheme.is_empty()
        && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
