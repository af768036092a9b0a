//! Cache module - Persists the last scan result
//!
//! Provides:
//! - Cache storage (a single JSON array file)
//! - Cache-or-scan loading and forced rebuilds

pub mod reader;
pub mod store;
