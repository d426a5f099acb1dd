//! Shared utilities for the pakt package manager.
//!
//! This crate provides cross-cutting concerns used by all other pakt crates:
//! error types, filesystem helpers, and terminal progress output.

pub mod errors;
pub mod fs;
pub mod progress;

use std::path::PathBuf;

/// Environment variable overriding the pakt data directory.
pub const PAKT_HOME: &str = "PAKT_HOME";

/// Returns the path to the pakt data directory.
///
/// `$PAKT_HOME` wins when set; otherwise `~/.pakt`.
pub fn dirs_path() -> PathBuf {
    if let Ok(home) = std::env::var(PAKT_HOME) {
        if !home.is_empty() {
            return PathBuf::from(home);
        }
    }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".pakt")
}
