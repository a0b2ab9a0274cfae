//! `render` - write the reports page to disk or stdout.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use reports_page::config::PageConfig;
use reports_page::types::Catalog;
use reports_page::{RenderContext, render_reports_grid, render_reports_page};
use tracing::{debug, info};

use super::load_catalog;
use crate::cli::RenderArgs;

const DEFAULT_PAGE: &str = "index.html";
const DEFAULT_SITE_DIR: &str = "site";

pub fn run(args: RenderArgs, mut config: PageConfig) -> Result<ExitCode> {
    let catalog = load_catalog(&args.catalog)?;
    apply_overrides(&mut config, &args);

    let context = RenderContext::from_config(&config);
    let render = |context: &RenderContext| {
        if args.fragment {
            render_reports_grid(&catalog, context)
        } else {
            render_reports_page(&catalog, context)
        }
    };

    match (&args.doc_version, config.versions.is_empty()) {
        (Some(version), _) => {
            let out = args.out.unwrap_or_else(|| PathBuf::from(DEFAULT_PAGE));
            write_output(&out, &render(&context.with_version(version.clone())))?;
        }
        (None, true) => {
            let out = args.out.unwrap_or_else(|| PathBuf::from(DEFAULT_PAGE));
            write_output(&out, &render(&context))?;
        }
        (None, false) => {
            let dir = args.out.unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_DIR));
            render_versions(&dir, &config.versions, &context, &catalog, render)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn apply_overrides(config: &mut PageConfig, args: &RenderArgs) {
    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    if let Some(base) = &args.asset_base {
        config.asset_base = base.clone();
    }
    if let Some(strategy) = args.strategy {
        config.link.strategy = strategy;
    }
    if let Some(param) = &args.param {
        config.link.param = param.clone();
    }
    if let Some(title) = &args.title {
        config.title = title.clone();
    }
}

/// One unversioned page at `<dir>/index.html`, one per version below it.
fn render_versions(
    dir: &Path,
    versions: &[String],
    context: &RenderContext,
    catalog: &Catalog,
    render: impl Fn(&RenderContext) -> String,
) -> Result<()> {
    if dir == Path::new("-") {
        bail!("several versions are configured; --out must be a directory");
    }
    let versions = versions
        .iter()
        .map(|version| validate_version_dir(version))
        .collect::<Result<Vec<_>>>()?;

    write_output(&dir.join(DEFAULT_PAGE), &render(context))?;
    for version in &versions {
        let page = dir.join(version).join(DEFAULT_PAGE);
        write_output(&page, &render(&context.clone().with_version(*version)))?;
    }

    info!(
        versions = versions.len(),
        reports = catalog.len(),
        dir = %dir.display(),
        "rendered versioned site"
    );
    Ok(())
}

/// Versions become directory names, so they must be a single plain segment.
///
/// Returns the trimmed version, used for both the directory and the links.
fn validate_version_dir(version: &str) -> Result<&str> {
    let trimmed = version.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains(['/', '\\'])
    {
        bail!("version '{}' cannot be used as a directory name", version);
    }
    Ok(trimmed)
}

fn write_output(out: &Path, html: &str) -> Result<()> {
    if out == Path::new("-") {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(html.as_bytes())
            .and_then(|_| stdout.write_all(b"\n"))
            .context("writing to stdout")?;
        return Ok(());
    }

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(out, html).with_context(|| format!("writing {}", out.display()))?;

    debug!(bytes = html.len(), "page size");
    info!("Wrote {}", out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_dir_validation() {
        assert_eq!(validate_version_dir("v1.2").ok(), Some("v1.2"));
        assert!(validate_version_dir("").is_err());
        assert!(validate_version_dir("..").is_err());
        assert!(validate_version_dir("a/b").is_err());
        assert!(validate_version_dir("a\\b").is_err());
    }

    #[test]
    fn version_dir_is_trimmed() {
        assert_eq!(validate_version_dir(" v5").ok(), Some("v5"));
        assert_eq!(validate_version_dir("v6\t").ok(), Some("v6"));
        assert!(validate_version_dir(" .. ").is_err());
    }

    #[test]
    fn overrides_replace_config_fields() {
        let mut config = PageConfig::default();
        let args = RenderArgs {
            catalog: PathBuf::from("r.json"),
            out: None,
            doc_version: None,
            theme: Some(reports_page::types::Theme::Dark),
            asset_base: Some("/img".into()),
            strategy: Some(reports_page::config::LinkEncoding::Path),
            param: Some("v".into()),
            title: Some("Nightly".into()),
            fragment: false,
        };

        apply_overrides(&mut config, &args);

        assert_eq!(config.theme, reports_page::types::Theme::Dark);
        assert_eq!(config.asset_base, "/img");
        assert_eq!(config.link.strategy, reports_page::config::LinkEncoding::Path);
        assert_eq!(config.link.param, "v");
        assert_eq!(config.title, "Nightly");
    }
}
