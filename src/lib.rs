//! Remext: Batch Remote Extension Normalization
//!
//! Resolves numeric file identifiers to full paths using a local snapshot of
//! a remote filesystem's metadata, then renames the corresponding remote
//! files so their extensions are normalized to `.mkv`, with bounded retries
//! and randomized pacing between calls.

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod extension;
pub mod input;
pub mod logging;
pub mod remote;
pub mod resolver;
pub mod store;
pub mod types;
