//! Backends module - Filesystem scanning and the interactive prompt
//!
//! Provides:
//! - scan: Repository discovery with walkdir
//! - select: Fuzzy selection with dialoguer

pub mod scan;
pub mod select;
