//! Cache reader - Cache access with fallback to a live scan
//!
//! The cache is trusted as-is when it parses. Any read or parse failure
//! falls back to scanning the root and rewriting the cache.

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::backends::scan::scan_repos;
use crate::cache::store::{read_cache, write_cache};
use crate::core::config::Config;
use crate::core::model::Repo;

/// Get the repository list, preferring the cache file
pub fn load_repos(config: &Config) -> Result<Vec<Repo>> {
    if config.cache_file.exists() {
        match read_cache(&config.cache_file) {
            Ok(repos) => {
                debug!(count = repos.len(), "using cached repositories");
                return Ok(repos);
            }
            Err(e) => warn!("{e}; rescanning"),
        }
    }

    rebuild(config)
}

/// Scan the root and overwrite the cache. A failed write is logged and the
/// scan result is still returned.
pub fn rebuild(config: &Config) -> Result<Vec<Repo>> {
    let repos = scan_repos(&config.root, &config.scan)
        .with_context(|| format!("Failed to scan {}", config.root.display()))?;

    if let Err(e) = write_cache(&config.cache_file, &repos) {
        warn!("{e}");
    }

    Ok(repos)
}
