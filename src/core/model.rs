//! Repository descriptor model
//!
//! A `Repo` is what the scanner produces, what the cache persists and what
//! the selector displays.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::paths::{path_to_string, short_name};

/// One discovered repository
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Repo {
    /// Display label: parent-dir/repo-dir
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub short_name: String,

    /// Path of the repository root (the parent of its `.git` directory)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub full_path: String,
}

impl Repo {
    /// Build a descriptor for a repository root, deriving its label
    pub fn from_root(root: &Path) -> Self {
        Self {
            short_name: short_name(root),
            full_path: path_to_string(root),
        }
    }

    /// Label shown in the selector
    pub fn label(&self) -> &str {
        &self.short_name
    }
}
