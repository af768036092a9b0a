//! Cache store - Read/write the repository cache file
//!
//! The cache is a single JSON array of descriptors, written and read
//! wholesale. There is no version field: a file that does not parse is
//! simply rebuilt.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::model::Repo;

/// Cache file failure
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to read cache file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse cache file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize repositories: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write cache file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove cache file {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read descriptors from a cache file
pub fn read_cache(path: &Path) -> Result<Vec<Repo>, CacheError> {
    let content = fs::read_to_string(path).map_err(|source| CacheError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| CacheError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write descriptors to a cache file as indented JSON, replacing any
/// previous content
pub fn write_cache(path: &Path, repos: &[Repo]) -> Result<(), CacheError> {
    let json = serde_json::to_string_pretty(repos)?;

    let write_err = |source| CacheError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }
    fs::write(path, json).map_err(write_err)?;

    debug!(path = %path.display(), count = repos.len(), "wrote cache");
    Ok(())
}

/// Remove the cache file. Returns false when there was nothing to remove.
pub fn clear_cache(path: &Path) -> Result<bool, CacheError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(CacheError::Remove {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample(n: usize) -> Vec<Repo> {
        (0..n)
            .map(|i| Repo {
                short_name: format!("org/repo-{i}"),
                full_path: format!("/home/dev/git/org/repo-{i}"),
            })
            .collect()
    }

    #[test]
    fn test_write_read_preserves_order() {
        let temp = tempdir().unwrap();
        let cache = temp.path().join(".repos");

        let repos = sample(5);
        write_cache(&cache, &repos).unwrap();

        let read = read_cache(&cache).unwrap();
        assert_eq!(read, repos);
    }

    #[test]
    fn test_write_is_indented_json_array() {
        let temp = tempdir().unwrap();
        let cache = temp.path().join(".repos");

        write_cache(&cache, &sample(1)).unwrap();

        let content = fs::read_to_string(&cache).unwrap();
        assert!(content.starts_with("[\n  {\n    \"short_name\""));
    }

    #[test]
    fn test_write_overwrites_previous_content() {
        let temp = tempdir().unwrap();
        let cache = temp.path().join(".repos");

        write_cache(&cache, &sample(3)).unwrap();
        write_cache(&cache, &sample(1)).unwrap();

        assert_eq!(read_cache(&cache).unwrap().len(), 1);
    }

    #[test]
    fn test_write_creates_parent_dir() {
        let temp = tempdir().unwrap();
        let cache = temp.path().join("nested/dir/.repos");

        write_cache(&cache, &sample(2)).unwrap();
        assert!(cache.exists());
    }

    #[test]
    fn test_write_empty_list() {
        let temp = tempdir().unwrap();
        let cache = temp.path().join(".repos");

        write_cache(&cache, &[]).unwrap();
        assert_eq!(fs::read_to_string(&cache).unwrap(), "[]");
        assert!(read_cache(&cache).unwrap().is_empty());
    }

    #[test]
    fn test_write_into_directory_path_fails() {
        let temp = tempdir().unwrap();
        let err = write_cache(temp.path(), &sample(1)).unwrap_err();
        assert!(matches!(err, CacheError::Write { .. }));
    }

    #[test]
    fn test_read_missing_file() {
        let temp = tempdir().unwrap();
        let err = read_cache(&temp.path().join("absent")).unwrap_err();
        assert!(matches!(err, CacheError::Read { .. }));
    }

    #[test]
    fn test_read_malformed_file() {
        let temp = tempdir().unwrap();
        let cache = temp.path().join(".repos");
        fs::write(&cache, "{not json").unwrap();

        let err = read_cache(&cache).unwrap_err();
        assert!(matches!(err, CacheError::Parse { .. }));
        assert!(err.to_string().contains(".repos"));
    }

    #[test]
    fn test_read_accepts_omitted_fields() {
        let temp = tempdir().unwrap();
        let cache = temp.path().join(".repos");
        fs::write(&cache, r#"[{"full_path": "/srv/a"}, {}]"#).unwrap();

        let repos = read_cache(&cache).unwrap();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].full_path, "/srv/a");
        assert!(repos[0].short_name.is_empty());
    }

    #[test]
    fn test_clear_cache() {
        let temp = tempdir().unwrap();
        let cache = temp.path().join(".repos");
        write_cache(&cache, &sample(1)).unwrap();

        assert!(clear_cache(&cache).unwrap());
        assert!(!cache.exists());
        assert!(!clear_cache(&cache).unwrap());
    }
}
