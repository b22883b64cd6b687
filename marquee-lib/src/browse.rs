//! List-screen session: all movies or favorites only.

use std::sync::Arc;

use marquee_core::{KeyValueStore, MovieCatalogClient, MovieSummary};

use crate::error::BrowseError;
use crate::pagination::{FetchOutcome, PaginationController};
use crate::view_model::FavoritesViewModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowseMode {
    /// The paged remote catalog.
    #[default]
    All,
    /// Only the stored favorites.
    Favorites,
}

impl std::fmt::Display for BrowseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrowseMode::All => write!(f, "Movies"),
            BrowseMode::Favorites => write!(f, "Favorites"),
        }
    }
}

/// One mounted list screen.
///
/// Switching modes resets the catalog cursor, so rows accumulated in one view
/// never show up in the other.
pub struct BrowseSession<C, B> {
    catalog: PaginationController<C>,
    favorites: Arc<FavoritesViewModel<B>>,
    mode: BrowseMode,
}

impl<C: MovieCatalogClient, B: KeyValueStore> BrowseSession<C, B> {
    pub fn new(catalog: PaginationController<C>, favorites: Arc<FavoritesViewModel<B>>) -> Self {
        Self {
            catalog,
            favorites,
            mode: BrowseMode::default(),
        }
    }

    pub fn mode(&self) -> BrowseMode {
        self.mode
    }

    pub fn catalog(&self) -> &PaginationController<C> {
        &self.catalog
    }

    pub fn favorites(&self) -> &Arc<FavoritesViewModel<B>> {
        &self.favorites
    }

    /// Switch views. Returns `false` if `mode` was already active.
    pub fn set_mode(&mut self, mode: BrowseMode) -> bool {
        if self.mode == mode {
            return false;
        }
        log::debug!("Switching list from {} to {}", self.mode, mode);
        self.catalog.reset();
        self.mode = mode;
        true
    }

    /// Flip between the catalog and favorites views.
    pub fn toggle_mode(&mut self) -> BrowseMode {
        let next = match self.mode {
            BrowseMode::All => BrowseMode::Favorites,
            BrowseMode::Favorites => BrowseMode::All,
        };
        self.set_mode(next);
        next
    }

    /// Load more rows for the current view.
    ///
    /// In `All` mode this asks for the next catalog page (dropped if one is
    /// already loading). In `Favorites` mode it re-reads stored favorites.
    pub async fn load_more(&self) -> Result<Option<FetchOutcome>, BrowseError> {
        match self.mode {
            BrowseMode::All => Ok(Some(self.catalog.request_next().await?)),
            BrowseMode::Favorites => {
                self.favorites.refresh().await?;
                Ok(None)
            }
        }
    }

    /// Call when the screen regains focus, e.g. after a details screen
    /// toggled a favorite.
    pub async fn on_focus(&self) -> Result<(), BrowseError> {
        self.favorites.refresh().await?;
        Ok(())
    }

    /// Rows to render for the current view.
    pub fn visible(&self) -> Vec<MovieSummary> {
        match self.mode {
            BrowseMode::All => self.catalog.accumulated(),
            BrowseMode::Favorites => self.favorites.snapshot(),
        }
    }

    /// Whether `id` was a favorite as of the last refresh, for row badges.
    pub fn is_marked(&self, id: i64) -> bool {
        self.favorites.snapshot().iter().any(|m| m.id == id)
    }
}

#[cfg(test)]
#[path = "tests/browse_tests.rs"]
mod tests;
