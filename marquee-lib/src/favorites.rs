use std::sync::Arc;

use marquee_core::{KeyValueStore, MovieSummary, StorageError};

/// Storage key holding the serialized favorites list.
pub const FAVORITES_KEY: &str = "favorites";

/// The user's favorite movies, persisted as one JSON array under one key.
///
/// Entries are unique by `id` and kept in insertion order. Every operation
/// reads the stored blob fresh; nothing is cached in the store handle.
///
/// There is no locking around `add` and `remove`. Each performs its own
/// read-modify-write of the whole blob, so two overlapping mutations can
/// race and the later write wins, dropping the earlier change. Callers that
/// need both mutations must await the first before starting the second.
pub struct FavoritesStore<B> {
    backend: Arc<B>,
    key: String,
}

impl<B> Clone for FavoritesStore<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            key: self.key.clone(),
        }
    }
}

impl<B: KeyValueStore> FavoritesStore<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            key: FAVORITES_KEY.to_string(),
        }
    }

    /// Use a different storage key (e.g. one list per profile).
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    /// Add `movie` unless an entry with the same id is already stored.
    pub async fn add(&self, movie: MovieSummary) -> Result<(), StorageError> {
        let mut favorites = self.read().await?;
        if favorites.iter().any(|m| m.id == movie.id) {
            log::debug!("Movie {} already in favorites", movie.id);
            return Ok(());
        }
        log::debug!("Adding movie {} ({}) to favorites", movie.id, movie.title);
        favorites.push(movie);
        self.write(&favorites).await
    }

    /// Remove the entry with `id`. Does nothing if it isn't stored.
    pub async fn remove(&self, id: i64) -> Result<(), StorageError> {
        let mut favorites = self.read().await?;
        let before = favorites.len();
        favorites.retain(|m| m.id != id);
        if favorites.len() == before {
            log::debug!("Movie {id} not in favorites, nothing to remove");
            return Ok(());
        }
        log::debug!("Removing movie {id} from favorites");
        self.write(&favorites).await
    }

    pub async fn contains(&self, id: i64) -> Result<bool, StorageError> {
        Ok(self.read().await?.iter().any(|m| m.id == id))
    }

    /// All favorites in the order they were added.
    pub async fn list(&self) -> Result<Vec<MovieSummary>, StorageError> {
        self.read().await
    }

    async fn read(&self) -> Result<Vec<MovieSummary>, StorageError> {
        let Some(blob) = self.backend.get(&self.key).await? else {
            return Ok(Vec::new());
        };
        if blob.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&blob).map_err(|source| StorageError::Corrupt {
            key: self.key.clone(),
            source,
        })
    }

    async fn write(&self, favorites: &[MovieSummary]) -> Result<(), StorageError> {
        let blob = serde_json::to_string(favorites).map_err(|source| StorageError::Serialize {
            key: self.key.clone(),
            source,
        })?;
        self.backend.set(&self.key, &blob).await
    }
}

#[cfg(test)]
#[path = "tests/favorites_tests.rs"]
mod tests;
