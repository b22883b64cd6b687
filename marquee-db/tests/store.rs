use marquee_core::KeyValueStore;
use marquee_db::*;

#[tokio::test]
async fn missing_key_reads_as_none() {
    let store = SqliteKeyValueStore::open_memory().unwrap();
    assert_eq!(store.get("favorites").await.unwrap(), None);
}

#[tokio::test]
async fn set_replaces_whole_value() {
    let store = SqliteKeyValueStore::open_memory().unwrap();
    store.set("favorites", "[1]").await.unwrap();
    store.set("favorites", "[1,2]").await.unwrap();
    assert_eq!(store.get("favorites").await.unwrap().as_deref(), Some("[1,2]"));
    assert_eq!(store.keys().unwrap(), vec!["favorites".to_string()]);
}

#[tokio::test]
async fn remove_deletes_key_and_tolerates_absent() {
    let store = SqliteKeyValueStore::open_memory().unwrap();
    store.set("a", "1").await.unwrap();
    store.remove("a").await.unwrap();
    store.remove("a").await.unwrap();
    assert_eq!(store.get("a").await.unwrap(), None);
}

#[tokio::test]
async fn values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.db");

    {
        let store = SqliteKeyValueStore::open(&path).unwrap();
        store.set("favorites", r#"[{"id":1}]"#).await.unwrap();
    }

    let store = SqliteKeyValueStore::open(&path).unwrap();
    assert_eq!(
        store.get("favorites").await.unwrap().as_deref(),
        Some(r#"[{"id":1}]"#)
    );
}

#[test]
fn schema_version_is_recorded() {
    let conn = open_memory().unwrap();
    let version: i32 = conn
        .query_row("SELECT version FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, schema::CURRENT_VERSION);
}

#[test]
fn newer_schema_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    {
        let conn = open_database(&path).unwrap();
        conn.execute("UPDATE schema_version SET version = 99", []).unwrap();
    }
    assert!(matches!(
        open_database(&path),
        Err(SchemaError::VersionMismatch { found: 99, .. })
    ));
}
