//! CLI Tooling
//!
//! Command-line surface and the run sequence: read ids, resolve paths
//! against the snapshot, write the listing, then drive the remote renames.

use crate::config::{ConfigLoader, RemextConfig};
use crate::driver::{self, TokioPacer};
use crate::error::SetupError;
use crate::extension::TARGET_EXTENSION;
use crate::input;
use crate::remote::{read_cookies, CloudClient};
use crate::resolver;
use crate::store::sqlite::SqliteNodeStore;
use crate::types::RenameOutcome;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Remext CLI - normalize remote file extensions from a local id list
#[derive(Parser)]
#[command(name = "remext")]
#[command(about = "Batch-rename remote file extensions to .mkv from a local metadata snapshot")]
pub struct Cli {
    /// File with one numeric file id per line
    pub ids_file: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// SQLite metadata snapshot (overrides config)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Session cookie file (overrides config)
    #[arg(long)]
    pub cookies: Option<PathBuf>,

    /// Output path listing file (overrides config)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Execution context: merged configuration for one run.
pub struct CliContext {
    config: RemextConfig,
    ids_file: PathBuf,
}

impl CliContext {
    pub fn new(cli: &Cli) -> Result<Self, SetupError> {
        let mut config = ConfigLoader::load(cli.config.as_deref())?;
        if let Some(store) = &cli.store {
            config.store_file = store.clone();
        }
        if let Some(cookies) = &cli.cookies {
            config.cookies_file = cookies.clone();
        }
        if let Some(output) = &cli.output {
            config.output_file = output.clone();
        }
        if let Some(level) = &cli.log_level {
            config.log_level = level.clone();
        }
        Ok(Self {
            config,
            ids_file: cli.ids_file.clone(),
        })
    }

    pub fn config(&self) -> &RemextConfig {
        &self.config
    }

    /// Run the full pipeline: resolve, write the listing, rename.
    pub async fn execute(&self) -> Result<(), SetupError> {
        let ids = input::read_file_ids(&self.ids_file)?;
        info!(count = ids.len(), "read file ids");

        let store = SqliteNodeStore::open(&self.config.store_file)?;
        let entries = resolver::resolve_all(&store, &ids)?;

        input::write_paths(&self.config.output_file, &entries)?;
        println!(
            "Path listing written to: {}",
            self.config.output_file.display()
        );
        println!("Renaming remote extensions to {TARGET_EXTENSION}, one file at a time...");

        let cookie = read_cookies(&self.config.cookies_file)?;
        let client = CloudClient::new(self.config.endpoint.clone(), cookie)?;

        let reports = driver::run(&client, &mut TokioPacer, &entries).await;

        let renamed = reports
            .iter()
            .filter(|r| r.outcome == RenameOutcome::Renamed)
            .count();
        let abandoned = reports
            .iter()
            .filter(|r| r.outcome == RenameOutcome::Abandoned)
            .count();
        println!(
            "All files processed: {renamed} renamed, {abandoned} abandoned, {} total",
            reports.len()
        );
        Ok(())
    }
}
