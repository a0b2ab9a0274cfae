//! Single report card

use super::{ThemedImage, VersionedLink};
use crate::context::RenderedCard;
use crate::link::LinkStrategy;
use leptos::prelude::*;

/// Card showing a projected [`RenderedCard`]: illustration, label and
/// description, all wrapped in one versioned link.
#[component]
pub fn ReportCard(
    /// Values derived by [`crate::RenderContext::cards`]
    card: RenderedCard,
    /// Active version, if any
    version: Option<String>,
    /// Merge rule for `version`
    links: LinkStrategy,
) -> impl IntoView {
    let RenderedCard {
        label,
        link,
        light_src,
        dark_src,
        description,
        ..
    } = card;
    let alt = description.clone();

    view! {
        <VersionedLink href=link version=version links=links>
            <div class="report-card-media">
                <ThemedImage light=light_src dark=dark_src alt=alt />
            </div>
            <div class="report-card-body">
                <h2 class="report-card-label">{label}</h2>
                <p class="report-card-description">{description}</p>
            </div>
        </VersionedLink>
    }
}
