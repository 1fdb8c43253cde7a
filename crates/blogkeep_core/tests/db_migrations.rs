use blogkeep_core::db::migrations::{latest_version, schema_version};
use blogkeep_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn).unwrap(), latest_version());
    assert_table_exists(&conn, "authors");
    assert_table_exists(&conn, "posts");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blogkeep.db");

    let conn_first = open_db(&path).unwrap();
    conn_first
        .execute("INSERT INTO authors (name) VALUES ('Ursula');", [])
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second).unwrap(), latest_version());
    let count: i64 = conn_second
        .query_row("SELECT COUNT(*) FROM authors;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn storage_check_constraints_reject_invalid_rows() {
    let conn = open_db_in_memory().unwrap();

    let bad_phone = conn.execute(
        "INSERT INTO authors (name, phone_number) VALUES ('Octavia', '12345');",
        [],
    );
    assert!(bad_phone.is_err());

    let empty_name = conn.execute("INSERT INTO authors (name) VALUES ('');", []);
    assert!(empty_name.is_err());

    let bad_category = conn.execute(
        "INSERT INTO posts (title, category) VALUES ('Dune', 'Sci-Fi');",
        [],
    );
    assert!(bad_category.is_err());

    let missing_category = conn.execute("INSERT INTO posts (title) VALUES ('Dune');", []);
    assert!(missing_category.is_err());

    let short_content = conn.execute(
        "INSERT INTO posts (title, content, category) VALUES ('Dune', 'too short', 'Fiction');",
        [],
    );
    assert!(short_content.is_err());
}

#[test]
fn storage_enforces_unique_author_names() {
    let conn = open_db_in_memory().unwrap();
    conn.execute("INSERT INTO authors (name) VALUES ('Iain');", [])
        .unwrap();
    let duplicate = conn.execute("INSERT INTO authors (name) VALUES ('Iain');", []);
    assert!(duplicate.is_err());
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
