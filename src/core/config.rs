//! Resolved runtime configuration
//!
//! Every path the scanner and the cache touch comes from here; nothing below
//! the CLI layer reads the environment.

use std::path::PathBuf;

use crate::backends::scan::ScanOptions;

/// Where to scan, where to cache, and how to prune
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory tree to scan for repositories
    pub root: PathBuf,

    /// JSON file holding the last scan result
    pub cache_file: PathBuf,

    /// Pruning rules for the walk
    pub scan: ScanOptions,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>, cache_file: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache_file: cache_file.into(),
            scan: ScanOptions::default(),
        }
    }

    /// Add extra directory-name suffixes to prune during the walk
    pub fn with_skip_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scan
            .skip_suffixes
            .extend(suffixes.into_iter().map(Into::into));
        self
    }
}
