//! Subcommand handlers.

mod check;
mod list;
mod render;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use reports_page::config::PageConfig;
use reports_page::types::Catalog;

use crate::cli::{Cli, Command};

/// Dispatch the parsed command line.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Render(args) => render::run(args, config),
        Command::Check(args) => check::run(args),
        Command::List(args) => list::run(args, config),
    }
}

/// An explicit `--config` must exist; the implicit `./reports.toml` may not.
fn load_config(path: Option<&Path>) -> Result<PageConfig> {
    match path {
        Some(path) => {
            if !path.is_file() {
                bail!("config file not found: {}", path.display());
            }
            Ok(PageConfig::load_from_path(path))
        }
        None => {
            let cwd = std::env::current_dir().context("cannot determine working directory")?;
            Ok(PageConfig::load(&cwd))
        }
    }
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    Catalog::load(path).with_context(|| format!("loading catalog {}", path.display()))
}
