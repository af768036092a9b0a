//! Repository scanning backend
//!
//! Walks a directory tree with walkdir and records every directory that holds
//! a `.git` directory. Pruning is decided per directory node by [`classify`],
//! which only looks at the directory name.

use std::ffi::OsStr;
use std::io;
use std::path::{self, Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

use crate::core::model::Repo;

/// Directory-name suffix pruned by default (Terraform state directories)
pub const DEFAULT_SKIP_SUFFIX: &str = ".terraform";

/// Directory that marks its parent as a repository root
pub const GIT_DIR: &str = ".git";

/// Pruning rules for the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Directories whose name ends with any of these are skipped entirely
    pub skip_suffixes: Vec<String>,

    /// Name of the directory marking a repository root
    pub marker: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            skip_suffixes: vec![DEFAULT_SKIP_SUFFIX.to_string()],
            marker: GIT_DIR.to_string(),
        }
    }
}

/// What the walk does at a directory node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Neither descend nor record
    Skip,
    /// Record the parent as a repository root, do not descend
    Repository,
    /// Keep walking
    Descend,
}

/// Decide how to treat a directory, from its name alone
pub fn classify(dir_name: &OsStr, options: &ScanOptions) -> Visit {
    let name = dir_name.to_string_lossy();

    if options
        .skip_suffixes
        .iter()
        .any(|suffix| name.ends_with(suffix.as_str()))
    {
        return Visit::Skip;
    }

    if name == options.marker.as_str() {
        return Visit::Repository;
    }

    Visit::Descend
}

/// Scan failure; aborts the whole walk
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to resolve scan root {}: {source}", path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl ScanError {
    fn walk(root: &Path, source: walkdir::Error) -> Self {
        let path = source.path().unwrap_or(root).to_path_buf();
        ScanError::Walk { path, source }
    }
}

/// Find every repository root under `root`, depth-first, in file-name order.
///
/// A relative root is resolved against the current directory first, so every
/// `full_path` is absolute.
pub fn scan_repos(root: &Path, options: &ScanOptions) -> Result<Vec<Repo>, ScanError> {
    let root = path::absolute(root).map_err(|source| ScanError::Root {
        path: root.to_path_buf(),
        source,
    })?;
    let root = root.as_path();
    debug!(root = %root.display(), "scanning for repositories");

    let mut walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();
    let mut repos = Vec::new();

    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|source| ScanError::walk(root, source))?;

        if !entry.file_type().is_dir() {
            continue;
        }

        match classify(entry.file_name(), options) {
            Visit::Descend => {}
            Visit::Skip => {
                debug!(path = %entry.path().display(), "skipping directory");
                walker.skip_current_dir();
            }
            Visit::Repository => {
                if let Some(repo_root) = entry
                    .path()
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                {
                    debug!(path = %repo_root.display(), "found repository");
                    repos.push(Repo::from_root(repo_root));
                }
                walker.skip_current_dir();
            }
        }
    }

    debug!(count = repos.len(), "scan finished");
    Ok(repos)
}
