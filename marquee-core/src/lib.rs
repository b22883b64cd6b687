//! Shared data model and collaborator traits for the Marquee catalog browser.
//!
//! The types here are plain values: movies as the remote catalog returns them,
//! and the two seams the rest of the workspace plugs into (a catalog client and
//! a durable key-value store).

pub mod catalog;
pub mod error;
pub mod movie;
pub mod storage;

pub use catalog::MovieCatalogClient;
pub use error::{CatalogError, StorageError};
pub use movie::{CatalogPage, MovieDetail, MovieSummary};
pub use storage::KeyValueStore;
