//! Link wrapper carrying the active documentation version

use crate::link::{LinkStrategy, VersionedHref};
use leptos::prelude::*;

/// Anchor around `children` pointing at `href` merged with `version`.
///
/// With no active version the anchor points at `href` exactly. `href` is a
/// [`VersionedHref`], so an empty target is rejected before rendering.
#[component]
pub fn VersionedLink(
    /// Unversioned, non-empty target
    href: VersionedHref,
    /// Active version, if any
    version: Option<String>,
    /// Merge rule for `version`
    links: LinkStrategy,
    /// CSS class of the anchor
    #[prop(default = "report-card")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let target = href.resolve(version.as_deref(), &links);

    view! {
        <a class=class href=target>
            {children()}
        </a>
    }
}
