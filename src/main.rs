//! repojump - Jump to a local git repository
//!
//! repojump provides:
//! - Repository discovery under a root directory, pruning noise directories
//! - A JSON cache of the discovered repositories
//! - A fuzzy prompt that prints the selected repository's path

use anyhow::Result;
use clap::Parser;

mod backends;
mod cache;
mod cli;
mod core;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
