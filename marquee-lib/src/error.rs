use marquee_core::{CatalogError, StorageError};

/// Errors from screen-level operations that touch both the catalog and storage.
#[derive(Debug, thiserror::Error)]
pub enum BrowseError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
