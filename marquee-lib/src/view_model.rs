use std::sync::{Mutex, MutexGuard, PoisonError};

use marquee_core::{KeyValueStore, MovieSummary, StorageError};
use tokio::sync::watch;

use crate::favorites::FavoritesStore;

/// Screen-facing view of the favorites list.
///
/// Holds the list as of the last [`refresh`](Self::refresh) for rendering,
/// but every decision that changes storage is made against the store itself.
/// Share one instance between screens (e.g. behind an `Arc`); a screen that
/// regains focus calls `refresh` to pick up changes made elsewhere.
pub struct FavoritesViewModel<B> {
    store: FavoritesStore<B>,
    snapshot: Mutex<Vec<MovieSummary>>,
    revision: watch::Sender<u64>,
}

impl<B: KeyValueStore> FavoritesViewModel<B> {
    /// Create a view model with an empty snapshot. Nothing is read until the
    /// first `refresh`.
    pub fn new(store: FavoritesStore<B>) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            store,
            snapshot: Mutex::new(Vec::new()),
            revision,
        }
    }

    pub fn store(&self) -> &FavoritesStore<B> {
        &self.store
    }

    /// Favorites as of the last refresh.
    pub fn snapshot(&self) -> Vec<MovieSummary> {
        self.lock().clone()
    }

    /// Re-read stored favorites and replace the snapshot.
    pub async fn refresh(&self) -> Result<Vec<MovieSummary>, StorageError> {
        let favorites = self.store.list().await?;
        *self.lock() = favorites.clone();
        Ok(favorites)
    }

    /// Live membership check against storage.
    pub async fn is_favorite(&self, id: i64) -> Result<bool, StorageError> {
        self.store.contains(id).await
    }

    /// Flip `movie`'s favorite status and return whether it is now a favorite.
    ///
    /// Membership is checked in storage, not in the snapshot, so a stale
    /// snapshot can never turn a removal into a duplicate add.
    pub async fn toggle(&self, movie: &MovieSummary) -> Result<bool, StorageError> {
        let now_favorite = if self.store.contains(movie.id).await? {
            self.store.remove(movie.id).await?;
            false
        } else {
            self.store.add(movie.clone()).await?;
            true
        };
        log::debug!(
            "Movie {} is {} a favorite",
            movie.id,
            if now_favorite { "now" } else { "no longer" }
        );

        // The write has landed, so a failed re-read only leaves the snapshot stale.
        if let Err(e) = self.refresh().await {
            log::warn!("Could not refresh favorites after toggling movie {}: {e}", movie.id);
        }
        self.revision.send_modify(|rev| *rev = rev.wrapping_add(1));
        Ok(now_favorite)
    }

    /// Bumped after every toggle through this view model that changed storage.
    ///
    /// Screens can watch this to know a refresh is due. It carries no data;
    /// `refresh` stays the way to read favorites.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<MovieSummary>> {
        self.snapshot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "tests/view_model_tests.rs"]
mod tests;
