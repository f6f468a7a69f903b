//! Rename Driver
//!
//! Walks resolved entries in order and renames each remote file whose
//! extension is not yet normalized, with bounded retries and randomized
//! pacing between calls.

use crate::extension::normalize_extension;
use crate::remote::RemoteFs;
use crate::types::{RenameOutcome, RenameReport, ResolvedEntry};
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use tracing::warn;

/// Attempt ceiling per item; exhaustion abandons the item, not the batch.
const MAX_ATTEMPTS: u32 = 3;

/// Seconds waited after a failed attempt (uniform range)
const BACKOFF_SECS: (f64, f64) = (5.0, 10.0);
/// Seconds waited between successfully processed items (uniform range)
const PACING_SECS: (f64, f64) = (1.5, 3.0);

/// Waits between rename calls. A trait so tests can record the waits
/// instead of sleeping through them.
#[async_trait]
pub trait Pacer {
    /// Wait after a failed attempt before retrying
    async fn backoff(&mut self);
    /// Wait after a successful item before starting the next
    async fn pace(&mut self);
}

/// Production pacer: uniformly random sleeps on the tokio timer.
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn backoff(&mut self) {
        let secs = rand::rng().random_range(BACKOFF_SECS.0..BACKOFF_SECS.1);
        println!("Waiting {secs:.1}s before retrying...");
        tokio::time::sleep(Duration::from_secs_f64(secs)).await;
    }

    async fn pace(&mut self) {
        let secs = rand::rng().random_range(PACING_SECS.0..PACING_SECS.1);
        println!("Waiting {secs:.1}s before the next file");
        tokio::time::sleep(Duration::from_secs_f64(secs)).await;
    }
}

/// Process every resolved entry in insertion order. Failures are per-item;
/// the batch always runs to completion.
pub async fn run<R: RemoteFs, P: Pacer>(
    remote: &R,
    pacer: &mut P,
    entries: &[ResolvedEntry],
) -> Vec<RenameReport> {
    let mut reports = Vec::with_capacity(entries.len());
    for entry in entries {
        reports.push(process_entry(remote, pacer, entry).await);
    }
    reports
}

async fn process_entry<R: RemoteFs, P: Pacer>(
    remote: &R,
    pacer: &mut P,
    entry: &ResolvedEntry,
) -> RenameReport {
    let Some(original) = entry.path.as_deref() else {
        println!("Skipping id {}: no resolved path", entry.id);
        return RenameReport {
            id: entry.id,
            original: None,
            target: None,
            outcome: RenameOutcome::Skipped,
            attempts: 0,
        };
    };

    let target = normalize_extension(original);
    if target == original {
        println!("Already .mkv, nothing to do: {original}");
        return RenameReport {
            id: entry.id,
            original: Some(original.to_string()),
            target: Some(target),
            outcome: RenameOutcome::AlreadyNormalized,
            attempts: 0,
        };
    }

    println!("Renaming: {original} -> {target}");
    let mut attempts = 0;
    while attempts < MAX_ATTEMPTS {
        match remote.rename(original, &target).await {
            Ok(()) => {
                println!("Renamed: {original} -> {target}");
                pacer.pace().await;
                return RenameReport {
                    id: entry.id,
                    original: Some(original.to_string()),
                    target: Some(target),
                    outcome: RenameOutcome::Renamed,
                    attempts: attempts + 1,
                };
            }
            Err(e) => {
                attempts += 1;
                warn!(id = entry.id, attempt = attempts, error = %e, "rename attempt failed");
                println!("Attempt {attempts} failed: {e}");
                pacer.backoff().await;
            }
        }
    }

    println!("Giving up on {original} -> {target} after {MAX_ATTEMPTS} attempts");
    RenameReport {
        id: entry.id,
        original: Some(original.to_string()),
        target: Some(target),
        outcome: RenameOutcome::Abandoned,
        attempts: MAX_ATTEMPTS,
    }
}
