//! depot CLI library — command implementations, manifest mutation, and
//! install orchestration.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

/// CLI subcommand implementations.
pub mod commands;
/// Global credentials file — read/write `~/.depot/credentials.toml`.
pub mod config;
pub mod installer;
pub mod mutator;
pub mod prompt;
