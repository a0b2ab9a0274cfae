//! `list` - print what each card resolves to.

use std::process::ExitCode;

use anyhow::{Context, Result};
use reports_page::RenderContext;
use reports_page::config::PageConfig;

use super::load_catalog;
use crate::cli::ListArgs;

pub fn run(args: ListArgs, config: PageConfig) -> Result<ExitCode> {
    let catalog = load_catalog(&args.catalog)?;

    let mut context = RenderContext::from_config(&config);
    if let Some(version) = args.doc_version {
        context = context.with_version(version);
    }
    let cards = context.cards(&catalog);

    if args.json {
        let json = serde_json::to_string_pretty(&cards).context("serializing cards")?;
        println!("{}", json);
    } else {
        for card in &cards {
            println!(
                "{}\t{}\t{}\t{}\t{}",
                card.index, card.label, card.href, card.light_src, card.dark_src
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}
