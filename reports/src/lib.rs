//! # reports-page
//!
//! Leptos SSR renderer for a benchmark reports index.
//!
//! Given an ordered list of report descriptors, renders one card per report:
//! a link to the report (carrying the active documentation version when
//! there is one) and a light/dark illustration pair located by the card's
//! position.
//!
//! ## Quick Start
//!
//! ```rust
//! use reports_page::{render_reports_page, RenderContext};
//! use reports_page::types::{Catalog, ReportDescriptor};
//!
//! let catalog = Catalog::new(vec![ReportDescriptor {
//!     label: "Startup".into(),
//!     href: "/reports/startup".into(),
//!     description: "Cold start timings".into(),
//! }])
//! .unwrap();
//!
//! let context = RenderContext::default().with_version("v6");
//! let html = render_reports_page(&catalog, &context);
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains(r#"href="/reports/startup?version=v6""#));
//! assert!(html.contains(r#"src="/graph-0.svg""#));
//! assert!(html.contains(r#"src="/graph-0-dark.svg""#));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - descriptors, themes and the validated [`types::Catalog`]
//! - [`link`] - pluggable version encodings for card links
//! - [`assets`] - illustration naming (`graph-{i}.svg`, `graph-{i}-dark.svg`)
//! - [`context`] - explicit render inputs (version, theme, strategy, root)
//! - [`config`] - optional `reports.toml`
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! Rendering is a pure projection of its inputs: the same catalog and
//! context always produce the same markup.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod assets;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod link;
pub mod styles;
pub mod types;

pub use context::{RenderContext, RenderedCard};
pub use error::{ReportsError, Result};

use components::{ReportsDocument, ReportsPage};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::Catalog;

/// Render the complete reports page.
///
/// Returns a full HTML document including `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use reports_page::{render_reports_page, RenderContext};
/// use reports_page::types::Catalog;
///
/// let html = render_reports_page(&Catalog::default(), &RenderContext::default());
/// assert!(html.contains("reports-grid"));
/// ```
pub fn render_reports_page(catalog: &Catalog, context: &RenderContext) -> String {
    tracing::debug!(
        reports = catalog.len(),
        version = context.active_version().unwrap_or("-"),
        theme = %context.theme,
        "rendering reports page"
    );

    let doc = view! {
        <ReportsDocument catalog=catalog.clone() context=context.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the reports grid, for embedding into an existing page.
///
/// The host page must include [`styles::PAGE_CSS`] (or equivalent rules)
/// for the themed illustrations to toggle.
pub fn render_reports_grid(catalog: &Catalog, context: &RenderContext) -> String {
    tracing::debug!(
        reports = catalog.len(),
        version = context.active_version().unwrap_or("-"),
        "rendering reports grid"
    );

    let grid = view! {
        <ReportsPage catalog=catalog.clone() context=context.clone() />
    };

    grid.to_html()
}
