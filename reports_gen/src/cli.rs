//! Command line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use reports_page::config::LinkEncoding;
use reports_page::types::Theme;

#[derive(Parser, Debug)]
#[command(name = "reports-gen")]
#[command(about = "Render the versioned benchmark reports index to static HTML")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Config file (default: ./reports.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the reports page
    Render(RenderArgs),
    /// Verify every card has its light and dark illustration
    Check(CheckArgs),
    /// Print the resolved cards without rendering HTML
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Report catalog (JSON)
    #[arg(long)]
    pub catalog: PathBuf,

    /// Output file, directory when rendering several versions, `-` for stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Active documentation version
    #[arg(long)]
    pub doc_version: Option<String>,

    /// Initial theme: light, dark or system
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Static root of the card illustrations
    #[arg(long)]
    pub asset_base: Option<String>,

    /// Version encoding in links: query or path
    #[arg(long)]
    pub strategy: Option<LinkEncoding>,

    /// Query parameter name for the query strategy
    #[arg(long)]
    pub param: Option<String>,

    /// Page title
    #[arg(long)]
    pub title: Option<String>,

    /// Emit only the grid fragment instead of a full document
    #[arg(long)]
    pub fragment: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Report catalog (JSON)
    #[arg(long)]
    pub catalog: PathBuf,

    /// Directory holding graph-{i}.svg and graph-{i}-dark.svg
    #[arg(long)]
    pub assets: PathBuf,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Report catalog (JSON)
    #[arg(long)]
    pub catalog: PathBuf,

    /// Active documentation version
    #[arg(long)]
    pub doc_version: Option<String>,

    /// Print JSON instead of one line per card
    #[arg(long)]
    pub json: bool,
}
