//! Shared on-disk locations.
//!
//! Durable favorites live under `~/.local/share/marquee/` (or the platform
//! equivalent from [`dirs::data_dir`]).

use std::path::PathBuf;

/// Root data directory: `<data_dir>/marquee`.
pub fn data_dir() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("marquee")
}

/// Directory used by [`JsonFileStore::open_default`](crate::JsonFileStore::open_default).
pub fn store_dir() -> PathBuf {
    data_dir().join("store")
}

/// Default path for a SQLite-backed store.
pub fn database_path() -> PathBuf {
    data_dir().join("marquee.db")
}
