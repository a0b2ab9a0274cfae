//! Light/dark illustration pair

use leptos::prelude::*;

/// Both theme variants of an illustration.
///
/// Always emits two `<img>` elements; the stylesheet hides whichever does
/// not match the document theme, so a theme switch never needs a re-render.
#[component]
pub fn ThemedImage(
    /// Light theme source
    light: String,
    /// Dark theme source
    dark: String,
    /// Alt text shared by both variants
    alt: String,
) -> impl IntoView {
    view! {
        <img class="graph-light" src=light alt=alt.clone() loading="lazy" />
        <img class="graph-dark" src=dark alt=alt loading="lazy" />
    }
}
