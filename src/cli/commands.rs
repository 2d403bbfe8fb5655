//! CLI arguments
//!
//! Every flag is optional: a bare invocation runs the full
//! fetch → filter → write sequence against the defaults.

use crate::config;
use clap::Parser;
use std::path::PathBuf;

/// Export user accounts to CSV, excluding internal-domain addresses
#[derive(Parser, Debug)]
#[command(name = "okta-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Listing endpoint; the page size is appended as the limit query value
    #[arg(long, default_value = config::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Users requested per page
    #[arg(long, default_value_t = config::DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// Output CSV file, rewritten on every run
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Email domain suffix to exclude from the export
    #[arg(long, default_value = config::DEFAULT_EXCLUDE_DOMAIN)]
    pub exclude_domain: String,

    /// API token; falls back to the OKTA_API_TOKEN environment variable
    #[arg(long)]
    pub token: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
