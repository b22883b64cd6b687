use super::*;
use crate::favorites::FavoritesStore;
use crate::storage::MemoryStore;
use crate::test_support::FakeCatalog;

fn favorites() -> Arc<FavoritesViewModel<MemoryStore>> {
    Arc::new(FavoritesViewModel::new(FavoritesStore::new(Arc::new(
        MemoryStore::new(),
    ))))
}

#[tokio::test]
async fn load_fetches_detail_and_favorite_flag() {
    let catalog = Arc::new(FakeCatalog::new(1, 1));
    let favorites = favorites();
    favorites.store().add(FakeCatalog::movie(12)).await.unwrap();

    let mut details = DetailsViewModel::new(FakeCatalog::movie(12), Arc::clone(&catalog), favorites);
    assert!(details.detail().is_none());

    let detail = details.load().await.unwrap();
    assert_eq!(detail.overview, "Overview of movie 12");
    assert!(details.is_favorite());
    assert_eq!(catalog.detail_calls(), 1);
}

#[tokio::test]
async fn toggle_updates_flag_and_shared_list() {
    let catalog = Arc::new(FakeCatalog::new(1, 1));
    let favorites = favorites();
    let mut details =
        DetailsViewModel::new(FakeCatalog::movie(4), Arc::clone(&catalog), Arc::clone(&favorites));
    details.load().await.unwrap();
    assert!(!details.is_favorite());

    assert!(details.toggle_favorite().await.unwrap());
    assert_eq!(favorites.snapshot(), vec![FakeCatalog::movie(4)]);

    assert!(!details.toggle_favorite().await.unwrap());
    assert!(favorites.snapshot().is_empty());
}

#[tokio::test]
async fn unknown_movie_is_not_found() {
    let catalog = Arc::new(FakeCatalog::new(1, 1));
    let mut details = DetailsViewModel::new(MovieSummary::new(-1, "Ghost"), catalog, favorites());

    let err = details.load().await.unwrap_err();
    assert!(matches!(
        err,
        BrowseError::Catalog(marquee_core::CatalogError::NotFound { id: -1 })
    ));
    assert!(details.detail().is_none());
}

#[tokio::test]
async fn image_urls_prefer_detail_paths() {
    let catalog = Arc::new(FakeCatalog::new(1, 1));
    let summary = MovieSummary::new(3, "Listing Only").with_poster("/listing.jpg");
    let mut details = DetailsViewModel::new(summary, catalog, favorites());

    assert_eq!(
        details.poster_url().as_deref(),
        Some("https://img.test/w500/listing.jpg")
    );
    assert_eq!(details.backdrop_url(), None);

    details.load().await.unwrap();
    assert_eq!(
        details.poster_url().as_deref(),
        Some("https://img.test/w500/p3.jpg")
    );
    assert_eq!(
        details.backdrop_url().as_deref(),
        Some("https://img.test/w500/b3.jpg")
    );
}
