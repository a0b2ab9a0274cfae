//! # reports-gen
//!
//! Renders the benchmark reports index to static HTML.
//!
//! ```bash
//! # One page, links carry ?version=v6
//! reports-gen render --catalog reports.json --doc-version v6 --out public/index.html
//!
//! # One page per version listed in reports.toml
//! reports-gen render --catalog reports.json --out site/
//!
//! # Verify graph-{i}.svg / graph-{i}-dark.svg exist for every card
//! reports-gen check --catalog reports.json --assets public/
//! ```

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;

fn init_tracing(level: &str) {
    // Logs go to stderr, stdout carries rendered HTML with `--out -`
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    tracing::debug!("Starting reports-gen v{}", env!("CARGO_PKG_VERSION"));

    match commands::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[reports-gen] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
