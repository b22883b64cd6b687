//! SQLite-backed durable key-value storage.
//!
//! Provides schema creation and a [`KeyValueStore`](marquee_core::KeyValueStore)
//! implementation backed by SQLite (via rusqlite with bundled feature).

pub mod schema;
pub mod store;

pub use schema::{SchemaError, open_database, open_memory};
pub use store::SqliteKeyValueStore;
