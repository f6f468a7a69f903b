//! Core types for the remext pipeline.

use serde::{Deserialize, Serialize};

/// FileId: integer key naming a node in the hierarchical store snapshot
pub type FileId = i64;

/// Parent id marking the root of the hierarchy
pub const ROOT_PARENT_ID: FileId = 0;

/// One row of the snapshot: a node and its parent link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: FileId,
    pub parent_id: FileId,
    pub name: String,
}

/// Result of resolving one identifier. `path` is `None` when the id or any
/// of its ancestors is missing from the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub id: FileId,
    pub path: Option<String>,
}

/// Outcome of the rename stage for a single entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Remote rename succeeded
    Renamed,
    /// Path already carried the target extension; no remote call made
    AlreadyNormalized,
    /// Entry had no resolved path; nothing to rename
    Skipped,
    /// All attempts failed and the item was given up on
    Abandoned,
}

/// Per-item report accumulated by the rename driver
#[derive(Debug, Clone)]
pub struct RenameReport {
    pub id: FileId,
    pub original: Option<String>,
    pub target: Option<String>,
    pub outcome: RenameOutcome,
    /// Remote calls made for this item (0 when none was needed)
    pub attempts: u32,
}
