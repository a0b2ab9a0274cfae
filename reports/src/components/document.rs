//! Root document component - the complete HTML page
//!
//! A single-column shell: header with title, version badge and theme toggle,
//! then the reports grid.

use super::{ICON_MOON, ICON_SUN, Icon, ReportsPage};
use crate::context::RenderContext;
use crate::styles::{PAGE_CSS, content_security_policy};
use crate::types::Catalog;
use leptos::prelude::*;

/// The complete HTML document for the reports index
#[component]
pub fn ReportsDocument(
    /// Descriptors in display order
    catalog: Catalog,
    /// Title, version, theme and link/asset settings
    context: RenderContext,
) -> impl IntoView {
    let root_class = context.theme.root_class().unwrap_or_default();
    let title = context.title.clone();
    let version = context.active_version().map(str::to_string);
    let is_empty = catalog.is_empty();
    let csp = content_security_policy(&context.assets);

    view! {
        <html lang="en" class=root_class>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=csp />
                <title>{title.clone()}</title>
                <style>{PAGE_CSS}</style>
                // Runs before first paint so a stored preference never flashes
                <script>{THEME_BOOTSTRAP}</script>
            </head>
            <body>
                <div class="container">
                    <header class="page-header">
                        <h1 class="page-title">
                            {title}
                            {version.map(|v| view! { <span class="version-badge">{v}</span> })}
                        </h1>
                        <ThemeToggle />
                    </header>

                    {is_empty.then(|| view! {
                        <p class="reports-empty">"No reports published yet."</p>
                    })}

                    <ReportsPage catalog=catalog context=context />
                </div>
                <script>{THEME_TOGGLE}</script>
            </body>
        </html>
    }
}

/// Button flipping between light and dark
#[component]
pub fn ThemeToggle() -> impl IntoView {
    view! {
        <button class="theme-toggle" data-role="theme-toggle" title="Toggle light/dark mode">
            <Icon path=ICON_SUN class="theme-icon-light" />
            <Icon path=ICON_MOON class="theme-icon-dark" />
        </button>
    }
}

/// Applies a stored theme preference to `<html>` before the body paints.
const THEME_BOOTSTRAP: &str = r#"
(() => {
  const stored = localStorage.getItem('reports-theme');
  const root = document.documentElement;
  if (stored === 'dark' || stored === 'light') {
    root.classList.remove('dark', 'light');
    root.classList.add(stored);
  }
})();
"#;

/// Theme toggle wiring.
const THEME_TOGGLE: &str = r#"
(() => {
  const root = document.documentElement;
  const isDark = () => root.classList.contains('dark') ||
      (!root.classList.contains('light') &&
       window.matchMedia('(prefers-color-scheme: dark)').matches);

  const toggle = document.querySelector('[data-role="theme-toggle"]');
  if (!toggle) return;

  toggle.addEventListener('click', () => {
    const next = isDark() ? 'light' : 'dark';
    root.classList.remove('dark', 'light');
    root.classList.add(next);
    localStorage.setItem('reports-theme', next);
  });
})();
"#;
