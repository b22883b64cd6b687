//! Favorites persistence and catalog paging for the Marquee browser.
//!
//! Screens talk to three pieces:
//!
//! - [`PaginationController`] appends catalog pages for infinite scroll and
//!   never has more than one page request outstanding.
//! - [`FavoritesStore`] keeps the user's favorites as one JSON blob in a
//!   [`KeyValueStore`](marquee_core::KeyValueStore).
//! - [`FavoritesViewModel`] gives screens a snapshot of the favorites and a
//!   toggle that always decides against stored state.
//!
//! [`BrowseSession`] and [`DetailsViewModel`] compose these for the list and
//! details screens.

pub mod browse;
pub mod details;
pub mod error;
pub mod favorites;
pub mod pagination;
pub mod settings;
pub mod storage;
pub mod view_model;

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;

pub use browse::{BrowseMode, BrowseSession};
pub use details::DetailsViewModel;
pub use error::BrowseError;
pub use favorites::{FAVORITES_KEY, FavoritesStore};
pub use pagination::{FetchOutcome, PaginationController, PaginationCursor, PaginationState};
pub use storage::{JsonFileStore, MemoryStore};
pub use view_model::FavoritesViewModel;

pub use marquee_core::{
    CatalogError, CatalogPage, KeyValueStore, MovieCatalogClient, MovieDetail, MovieSummary,
    StorageError,
};
