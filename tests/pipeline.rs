//! End-to-end pipeline contracts: resolve ids from an on-disk snapshot and
//! check the written path listing.

use remext::extension::normalize_extension;
use remext::input;
use remext::resolver;
use remext::store::sqlite::SqliteNodeStore;
use rusqlite::{params, Connection};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn seed_snapshot(path: &Path, rows: &[(i64, i64, &str)]) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        "CREATE TABLE data (
            id INTEGER PRIMARY KEY,
            parent_id INTEGER NOT NULL,
            name TEXT NOT NULL
        );",
    )
    .unwrap();
    for &(id, parent_id, name) in rows {
        conn.execute(
            "INSERT INTO data (id, parent_id, name) VALUES (?1, ?2, ?3)",
            params![id, parent_id, name],
        )
        .unwrap();
    }
}

#[test]
fn resolves_ids_and_writes_listing_contract() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("snapshot.db");
    seed_snapshot(
        &db,
        &[(1, 0, "root"), (2, 1, "movies"), (3, 2, "film.avi")],
    );

    let ids_file = temp.path().join("ids.txt");
    fs::write(&ids_file, "3\nfoo\n\n5").unwrap();
    let ids = input::read_file_ids(&ids_file).unwrap();
    assert_eq!(ids, vec![3, 5]);

    let store = SqliteNodeStore::open(&db).unwrap();
    let entries = resolver::resolve_all(&store, &ids).unwrap();
    assert_eq!(entries[0].path.as_deref(), Some("/root/movies/film.avi"));
    assert!(entries[1].path.is_none());

    let output = temp.path().join("paths.txt");
    input::write_paths(&output, &entries).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "File ID: 3, Path: /root/movies/film.avi\nFile ID: 5, Path: None\n"
    );
}

#[test]
fn resolved_path_normalizes_to_target_extension() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("snapshot.db");
    seed_snapshot(
        &db,
        &[(1, 0, "root"), (2, 1, "movies"), (3, 2, "film.avi")],
    );

    let store = SqliteNodeStore::open(&db).unwrap();
    let path = resolver::resolve(&store, 3).unwrap().unwrap();
    assert_eq!(normalize_extension(&path), "/root/movies/film.mkv");
}

#[test]
fn snapshot_opened_by_pipeline_is_read_only() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("snapshot.db");
    seed_snapshot(&db, &[(1, 0, "root")]);
    let before = fs::read(&db).unwrap();

    let store = SqliteNodeStore::open(&db).unwrap();
    let _ = resolver::resolve_all(&store, &[1, 2, 3]).unwrap();
    drop(store);

    assert_eq!(fs::read(&db).unwrap(), before);
}
