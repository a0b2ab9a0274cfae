//! Leptos UI components for rendering the reports page.
//!
//! Each component is a Leptos `#[component]` function rendered once on the
//! server. None of them read ambient state: version, theme, link strategy
//! and asset root all arrive through props.
//!
//! # Component Hierarchy
//!
//! ```text
//! ReportsDocument
//! ├── ThemeToggle
//! └── ReportsPage
//!     └── ReportCard (per descriptor)
//!         └── VersionedLink
//!             └── ThemedImage
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_reports_page`], but
//! can be embedded in a custom layout:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use reports_page::components::ReportsPage;
//!
//! view! {
//!     <main class="docs-content">
//!         <ReportsPage catalog=catalog context=context />
//!     </main>
//! }
//! ```

mod card;
mod document;
mod grid;
mod icons;
mod themed_image;
mod versioned_link;

pub use card::ReportCard;
pub use document::{ReportsDocument, ThemeToggle};
pub use grid::ReportsPage;
pub use icons::*;
pub use themed_image::ThemedImage;
pub use versioned_link::VersionedLink;
