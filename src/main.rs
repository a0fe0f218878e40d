//! codewords - Word frequency tables for JavaScript code bases
//!
//! codewords provides:
//! - Source tree scanning with folder/file exclusions
//! - JavaScript tokenization
//! - Configurable word normalization (decamelize, splitting, drop lists)
//! - Order-independent corpus aggregation
//! - data.js / JSON artifacts and an optional CSV report

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
