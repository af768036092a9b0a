//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

use crate::backends::select::{run_pick, FuzzySelector};
use crate::cache::reader::{load_repos, rebuild};
use crate::cache::store::clear_cache;
use crate::core::config::Config;
use crate::core::paths::{default_cache_file, default_root};
use crate::core::render::{OutputFormat, Renderer};

/// repojump - jump to a local git repository.
#[derive(Parser, Debug)]
#[command(name = "repojump")]
#[command(
    author,
    version,
    about,
    long_about = r#"repojump scans a directory tree for git repositories, caches the list and
lets you pick one with a fuzzy prompt. The selected repository's full path is
printed on stdout, so it composes with cd:

    cd "$(repojump)"

The cache is reused as-is until it is rebuilt or removed; it is never checked
against the filesystem.

Examples:
    repojump
    repojump list --format json
    repojump rebuild
    repojump --root ~/src clear
"#
)]
pub struct Cli {
    /// Directory tree to scan for repositories.
    #[arg(
        long,
        global = true,
        env = "REPOJUMP_ROOT",
        value_name = "DIR",
        long_help = "Directory tree to scan for repositories (defaults to ~/git).\n\n\
Every directory below it that contains a .git directory is listed."
    )]
    pub root: Option<PathBuf>,

    /// Cache file holding the last scan result.
    #[arg(
        long,
        global = true,
        env = "REPOJUMP_CACHE",
        value_name = "FILE",
        long_help = "Cache file holding the last scan result (defaults to .repos in the\n\
system temp directory).\n\n\
The file is a JSON array of {short_name, full_path} objects. A file that cannot\n\
be read or parsed is replaced by a fresh scan."
    )]
    pub cache: Option<PathBuf>,

    /// Extra directory-name suffix to prune (repeatable).
    #[arg(
        long = "skip-suffix",
        global = true,
        value_name = "SUFFIX",
        value_parser = clap::builder::NonEmptyStringValueParser::new(),
        long_help = "Prune directories whose name ends with SUFFIX, in addition to .terraform.\n\n\
Pruned directories are neither descended into nor checked for .git."
    )]
    pub skip_suffixes: Vec<String>,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (scan and cache decisions on stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the repository list without prompting.
    #[command(
        long_about = "Print the repository list (from the cache, or from a fresh scan when\n\
there is no usable cache) without prompting.\n\n\
Examples:\n\
  repojump list\n\
  repojump list --format jsonl\n"
    )]
    List {
        /// Output format (plain/json/jsonl).
        #[arg(long, default_value = "plain", value_name = "FORMAT")]
        format: OutputFormat,
    },

    /// Rescan the root and rewrite the cache.
    Rebuild,

    /// Remove the cache file.
    Clear,
}

impl Cli {
    /// Resolve paths and pruning rules into a runtime configuration
    pub fn config(&self) -> Config {
        let root = self.root.clone().unwrap_or_else(default_root);
        let cache = self.cache.clone().unwrap_or_else(default_cache_file);
        Config::new(root, cache).with_skip_suffixes(self.skip_suffixes.iter().cloned())
    }
}

/// Run the CLI command
pub fn run(cli: Cli) -> Result<()> {
    crate::core::logging::init(cli.verbose, cli.quiet);

    let config = cli.config();

    match cli.command {
        None => run_pick(&config, &FuzzySelector::default(), io::stdout().lock()),
        Some(Commands::List { format }) => {
            let repos = load_repos(&config)?;
            Renderer::new(format)
                .render_to(&repos, io::stdout().lock())
                .context("Failed to write repository list")
        }
        Some(Commands::Rebuild) => {
            let repos = rebuild(&config)?;
            println!(
                "{} repositories cached in {}",
                repos.len(),
                config.cache_file.display()
            );
            Ok(())
        }
        Some(Commands::Clear) => {
            if clear_cache(&config.cache_file)? {
                println!("Removed {}", config.cache_file.display());
            } else {
                println!("No cache at {}", config.cache_file.display());
            }
            Ok(())
        }
    }
}
