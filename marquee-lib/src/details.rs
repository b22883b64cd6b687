//! Details-screen state for a single movie.

use std::sync::Arc;

use marquee_core::{KeyValueStore, MovieCatalogClient, MovieDetail, MovieSummary, StorageError};

use crate::error::BrowseError;
use crate::view_model::FavoritesViewModel;

/// State behind a details screen opened from a list row.
///
/// The fetched [`MovieDetail`] lives only as long as this value.
pub struct DetailsViewModel<C, B> {
    movie: MovieSummary,
    client: C,
    favorites: Arc<FavoritesViewModel<B>>,
    detail: Option<MovieDetail>,
    is_favorite: bool,
}

impl<C: MovieCatalogClient, B: KeyValueStore> DetailsViewModel<C, B> {
    pub fn new(movie: MovieSummary, client: C, favorites: Arc<FavoritesViewModel<B>>) -> Self {
        Self {
            movie,
            client,
            favorites,
            detail: None,
            is_favorite: false,
        }
    }

    pub fn movie(&self) -> &MovieSummary {
        &self.movie
    }

    pub fn detail(&self) -> Option<&MovieDetail> {
        self.detail.as_ref()
    }

    /// Favorite flag as of the last `load` or `toggle_favorite`.
    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    /// Fetch the detail record and the stored favorite flag.
    pub async fn load(&mut self) -> Result<&MovieDetail, BrowseError> {
        let (detail, favorite) = tokio::join!(
            self.client.fetch_detail(self.movie.id),
            self.favorites.is_favorite(self.movie.id)
        );
        self.is_favorite = favorite?;
        Ok(self.detail.insert(detail?))
    }

    /// Flip the favorite flag in storage and return the new value.
    pub async fn toggle_favorite(&mut self) -> Result<bool, StorageError> {
        self.is_favorite = self.favorites.toggle(&self.movie).await?;
        Ok(self.is_favorite)
    }

    pub fn backdrop_url(&self) -> Option<String> {
        let path = self
            .detail
            .as_ref()
            .map_or(self.movie.backdrop_path.as_deref(), |d| d.backdrop_path.as_deref());
        self.client.image_url(path)
    }

    pub fn poster_url(&self) -> Option<String> {
        let path = self
            .detail
            .as_ref()
            .map_or(self.movie.poster_path.as_deref(), |d| d.poster_path.as_deref());
        self.client.image_url(path)
    }
}

#[cfg(test)]
#[path = "tests/details_tests.rs"]
mod tests;
