//! Parent-Chain Path Resolver
//!
//! Reconstructs full paths by walking parent links from a node up to the
//! hierarchy root.

use crate::error::StoreError;
use crate::store::NodeStore;
use crate::types::{FileId, ResolvedEntry, ROOT_PARENT_ID};
use tracing::debug;

/// Ancestor chains longer than this are treated as unresolvable. The
/// snapshot is supposed to be acyclic; the bound keeps a corrupt snapshot
/// with a parent cycle from recursing without end.
const MAX_DEPTH: usize = 64;

/// Resolve `id` to its root-relative path, `/`-prefixed.
///
/// Returns `Ok(None)` when `id` or any ancestor is missing from the store;
/// callers report such entries as unresolved rather than failing the batch.
pub fn resolve<S: NodeStore>(store: &S, id: FileId) -> Result<Option<String>, StoreError> {
    Ok(build_path(store, id, 0)?.map(|p| format!("/{p}")))
}

fn build_path<S: NodeStore>(
    store: &S,
    id: FileId,
    depth: usize,
) -> Result<Option<String>, StoreError> {
    if depth >= MAX_DEPTH {
        debug!(id, "ancestor chain exceeds depth bound, treating as unresolved");
        return Ok(None);
    }
    let Some(record) = store.get(id)? else {
        return Ok(None);
    };
    if record.parent_id == ROOT_PARENT_ID {
        return Ok(Some(record.name));
    }
    match build_path(store, record.parent_id, depth + 1)? {
        Some(parent_path) => Ok(Some(format!("{parent_path}/{}", record.name))),
        None => Ok(None),
    }
}

/// Resolve a batch of ids independently, preserving input order.
pub fn resolve_all<S: NodeStore>(
    store: &S,
    ids: &[FileId],
) -> Result<Vec<ResolvedEntry>, StoreError> {
    let mut entries = Vec::with_capacity(ids.len());
    for &id in ids {
        let path = resolve(store, id)?;
        if path.is_none() {
            debug!(id, "id did not resolve to a path");
        }
        entries.push(ResolvedEntry { id, path });
    }
    Ok(entries)
}
