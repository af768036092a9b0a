//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Repository descriptor model
//! - Resolved runtime configuration
//! - Path and label utilities
//! - Rendering for the list output
//! - Logging setup

pub mod config;
pub mod logging;
pub mod model;
pub mod paths;
pub mod render;
