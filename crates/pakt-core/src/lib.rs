//! Core data types for the pakt package manager.
//!
//! This crate defines the fundamental types the rest of the tool is built on:
//! package versions and constraints, dependency specifications, the package
//! manifest, the global configuration, and packset directory layout.
//!
//! This crate performs no I/O beyond reading and writing manifest and
//! configuration files.

/// File name of the package manifest.
pub const MANIFEST_FILE: &str = "Pakt.toml";

pub mod config;
pub mod dependency;
pub mod manifest;
pub mod packset;
pub mod version;
