//! Hierarchical Store Access
//!
//! Read-only lookup into the metadata snapshot. The snapshot is populated by
//! an external indexer; this crate never writes to it.

pub mod sqlite;

use crate::error::StoreError;
use crate::types::{FileId, NodeRecord};

/// Node lookup interface over the snapshot
pub trait NodeStore {
    /// Fetch the record for `id`; `None` when the snapshot has no such row.
    fn get(&self, id: FileId) -> Result<Option<NodeRecord>, StoreError>;
}
