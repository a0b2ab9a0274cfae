//! `check` - confirm the illustration pair exists for every card.

use std::process::ExitCode;

use anyhow::{Result, bail};
use reports_page::assets::missing_assets;
use tracing::info;

use super::load_catalog;
use crate::cli::CheckArgs;

pub fn run(args: CheckArgs) -> Result<ExitCode> {
    let catalog = load_catalog(&args.catalog)?;
    if !args.assets.is_dir() {
        bail!("asset directory not found: {}", args.assets.display());
    }

    let missing = missing_assets(&args.assets, catalog.len());
    if missing.is_empty() {
        info!(
            reports = catalog.len(),
            dir = %args.assets.display(),
            "all illustrations present"
        );
        println!("ok: {} reports, {} illustrations", catalog.len(), catalog.len() * 2);
        return Ok(ExitCode::SUCCESS);
    }

    for path in &missing {
        println!("missing: {}", path.display());
    }
    eprintln!(
        "[reports-gen] {} of {} illustrations missing",
        missing.len(),
        catalog.len() * 2
    );
    Ok(ExitCode::FAILURE)
}
