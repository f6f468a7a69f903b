//! SQLite-backed snapshot store.

use crate::error::StoreError;
use crate::store::NodeStore;
use crate::types::{FileId, NodeRecord};
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::path::Path;

/// Read-only view over the SQLite metadata snapshot. One connection per
/// batch; no transactions, no contention.
pub struct SqliteNodeStore {
    conn: Connection,
}

impl SqliteNodeStore {
    /// Open the snapshot read-only. The file must already exist and be
    /// populated.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| StoreError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self { conn })
    }
}

impl NodeStore for SqliteNodeStore {
    fn get(&self, id: FileId) -> Result<Option<NodeRecord>, StoreError> {
        let record = self
            .conn
            .query_row(
                "SELECT id, parent_id, name FROM data WHERE id = ?1",
                params![id],
                |row| {
                    Ok(NodeRecord {
                        id: row.get(0)?,
                        parent_id: row.get(1)?,
                        name: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }
}

#[cfg(test)]
impl SqliteNodeStore {
    /// In-memory store with the snapshot schema, writable for seeding.
    pub(crate) fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(StoreError::Query)?;
        conn.execute_batch(
            "CREATE TABLE data (
                id INTEGER PRIMARY KEY,
                parent_id INTEGER NOT NULL,
                name TEXT NOT NULL
            );",
        )
        .map_err(StoreError::Query)?;
        Ok(Self { conn })
    }

    pub(crate) fn insert(
        &self,
        id: FileId,
        parent_id: FileId,
        name: &str,
    ) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO data (id, parent_id, name) VALUES (?1, ?2, ?3)",
            params![id, parent_id, name],
        )?;
        Ok(())
    }
}
