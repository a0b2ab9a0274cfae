//! Reports grid - one card per catalog entry, in catalog order

use super::ReportCard;
use crate::context::RenderContext;
use crate::types::Catalog;
use leptos::prelude::*;

/// Responsive grid of report cards.
///
/// An empty catalog renders an empty grid.
#[component]
pub fn ReportsPage(
    /// Descriptors in display order
    catalog: Catalog,
    /// Version, link strategy and asset root
    context: RenderContext,
) -> impl IntoView {
    let count = catalog.len().to_string();
    let version = context.active_version().map(str::to_string);

    view! {
        <section class="reports-grid" data-count=count>
            {context.cards(&catalog).into_iter().map(|card| {
                view! {
                    <ReportCard
                        card=card
                        version=version.clone()
                        links=context.links.clone()
                    />
                }
            }).collect::<Vec<_>>()}
        </section>
    }
}
