//! CSS styles for the reports page.
//!
//! Light theme by default, `.dark` on `<html>` switches palettes. When no
//! class is set the page follows `prefers-color-scheme`.
//!
//! # Themed illustrations
//!
//! Every card carries both of its illustrations. Visibility is decided here
//! and nowhere else: `.graph-dark` is hidden unless the document is dark,
//! `.graph-light` is hidden when it is.
//!
//! # Customization
//!
//! ```rust
//! use reports_page::styles::PAGE_CSS;
//!
//! let my_css = ".report-card { border-radius: 0; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```

use crate::assets::AssetLocator;

/// Complete CSS for the reports page.
pub const PAGE_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --bg-card: #f7f8fa;
    --bg-card-hover: #eef1f6;
    --text-bright: #11151c;
    --text-dim: #5b6472;
    --border-visible: rgba(17, 21, 28, 0.12);
    --accent: #4f81e1;
    --font-sans: system-ui, -apple-system, 'Segoe UI', sans-serif;
    --container-max: 1200px;
}

.dark {
    --bg: #0f1115;
    --bg-card: #161a22;
    --bg-card-hover: #1c2029;
    --text-bright: #e9ecf5;
    --text-dim: #9ca3af;
    --border-visible: rgba(233, 236, 245, 0.12);
}

@media (prefers-color-scheme: dark) {
    :root:not(.light) {
        --bg: #0f1115;
        --bg-card: #161a22;
        --bg-card-hover: #1c2029;
        --text-bright: #e9ecf5;
        --text-dim: #9ca3af;
        --border-visible: rgba(233, 236, 245, 0.12);
    }
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    font-family: var(--font-sans);
    background: var(--bg);
    color: var(--text-bright);
    line-height: 1.5;
    margin: 0;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 32px 24px 80px;
}

/* Header */
.page-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 12px;
    margin-bottom: 32px;
}

.page-title {
    font-size: 28px;
    margin: 0;
}

.version-badge {
    font-size: 12px;
    padding: 2px 8px;
    border-radius: 999px;
    border: 1px solid var(--border-visible);
    color: var(--text-dim);
    margin-left: 12px;
    vertical-align: middle;
}

.theme-toggle {
    background: transparent;
    border: 1px solid var(--border-visible);
    border-radius: 6px;
    color: var(--text-dim);
    padding: 6px;
    cursor: pointer;
    line-height: 0;
}

.theme-toggle:hover {
    color: var(--text-bright);
}

.theme-icon-dark { display: none; }
.dark .theme-icon-light { display: none; }
.dark .theme-icon-dark { display: inline; }

/* Grid */
.reports-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
    gap: 20px;
}

.report-card {
    display: flex;
    flex-direction: column;
    background: var(--bg-card);
    border: 1px solid var(--border-visible);
    border-radius: 12px;
    overflow: hidden;
    color: inherit;
    text-decoration: none;
    transition: background 0.15s, border-color 0.15s;
}

.report-card:hover {
    background: var(--bg-card-hover);
    border-color: var(--accent);
}

.report-card-media {
    aspect-ratio: 16 / 9;
    border-bottom: 1px solid var(--border-visible);
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 12px;
}

.report-card-media img {
    max-width: 100%;
    max-height: 100%;
}

.report-card-body {
    padding: 16px;
}

.report-card-label {
    font-size: 16px;
    font-weight: 600;
    margin: 0 0 6px;
}

.report-card-description {
    font-size: 13px;
    color: var(--text-dim);
    margin: 0;
}

/* Themed illustrations: both rendered, one visible */
.graph-dark { display: none; }
.dark .graph-light { display: none; }
.dark .graph-dark { display: block; }

@media (prefers-color-scheme: dark) {
    :root:not(.light) .graph-light { display: none; }
    :root:not(.light) .graph-dark { display: block; }
    :root:not(.light) .theme-icon-light { display: none; }
    :root:not(.light) .theme-icon-dark { display: inline; }
}

.reports-empty {
    color: var(--text-dim);
    font-size: 14px;
}

@media (max-width: 640px) {
    .container { padding: 20px 16px 48px; }
    .reports-grid { grid-template-columns: 1fr; }
}
"#;

/// Content-Security-Policy for the standalone page.
///
/// Images may come from any https origin so the illustrations can live on a
/// CDN; scripts are limited to the inline theme bootstrap. Plain `http:`
/// image roots need [`content_security_policy`].
pub const CSP: &str = "default-src 'self'; img-src 'self' https: data:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none'; font-src 'self' data:;";

/// [`CSP`] widened to allow `http:` images when the asset root uses it.
pub fn content_security_policy(assets: &AssetLocator) -> String {
    if assets.is_plain_http() {
        CSP.replacen("img-src 'self' https:", "img-src 'self' http: https:", 1)
    } else {
        CSP.to_string()
    }
}
