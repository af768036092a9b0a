//! Path utilities
//!
//! Label derivation for repository roots and the default locations used when
//! no root or cache file is configured.

use std::path::{Component, Path, PathBuf};

/// Directory scanned when no root is given, relative to the home directory
pub const DEFAULT_ROOT_DIR: &str = "git";

/// Cache file name, placed in the system temp directory by default
pub const DEFAULT_CACHE_FILE: &str = ".repos";

/// Lossy string form of a path, as stored in descriptors
pub fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Display label for a repository root: its two final path segments joined
/// with the platform separator. Paths with fewer than two segments are
/// returned unchanged.
pub fn short_name(path: &Path) -> String {
    let segments: Vec<_> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name),
            _ => None,
        })
        .collect();

    match segments.as_slice() {
        [.., parent, name] => path_to_string(&Path::new(parent).join(name)),
        _ => path_to_string(path),
    }
}

/// Default scan root: `$HOME/git`, or `./git` when no home directory is known
pub fn default_root() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_ROOT_DIR)
}

/// Default cache file: `<tmp>/.repos`
pub fn default_cache_file() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_CACHE_FILE)
}
