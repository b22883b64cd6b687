use super::*;
use marquee_core::CatalogError;
use crate::favorites::FavoritesStore;
use crate::storage::MemoryStore;
use crate::test_support::FakeCatalog;

fn session(catalog: &Arc<FakeCatalog>) -> BrowseSession<Arc<FakeCatalog>, MemoryStore> {
    let favorites = FavoritesViewModel::new(FavoritesStore::new(Arc::new(MemoryStore::new())));
    BrowseSession::new(
        PaginationController::new(Arc::clone(catalog)),
        Arc::new(favorites),
    )
}

#[tokio::test]
async fn all_mode_pages_the_catalog() {
    let catalog = Arc::new(FakeCatalog::new(3, 2));
    let session = session(&catalog);
    assert_eq!(session.mode(), BrowseMode::All);

    let outcome = session.load_more().await.unwrap();
    assert_eq!(outcome, Some(FetchOutcome::Appended { page: 1, added: 2 }));
    session.load_more().await.unwrap();
    assert_eq!(session.visible().len(), 4);
}

#[tokio::test]
async fn favorites_mode_shows_stored_favorites_only() {
    let catalog = Arc::new(FakeCatalog::new(3, 2));
    let mut session = session(&catalog);
    session.load_more().await.unwrap();

    let pick = session.visible()[1].clone();
    session.favorites().toggle(&pick).await.unwrap();

    assert!(session.set_mode(BrowseMode::Favorites));
    assert_eq!(session.load_more().await.unwrap(), None);
    assert_eq!(session.visible(), vec![pick.clone()]);
    assert!(session.is_marked(pick.id));
    assert_eq!(catalog.calls(), 1);
}

#[tokio::test]
async fn switching_views_does_not_leak_accumulation() {
    let catalog = Arc::new(FakeCatalog::new(5, 2));
    let mut session = session(&catalog);
    session.load_more().await.unwrap();
    session.load_more().await.unwrap();

    assert_eq!(session.toggle_mode(), BrowseMode::Favorites);
    assert!(session.visible().is_empty());
    assert_eq!(session.toggle_mode(), BrowseMode::All);

    assert!(session.visible().is_empty());
    assert_eq!(session.catalog().current_page(), 0);
    session.load_more().await.unwrap();
    assert_eq!(catalog.requested(), vec![1, 2, 1]);
    assert_eq!(session.visible().len(), 2);
}

#[tokio::test]
async fn setting_same_mode_keeps_cursor() {
    let catalog = Arc::new(FakeCatalog::new(5, 2));
    let mut session = session(&catalog);
    session.load_more().await.unwrap();

    assert!(!session.set_mode(BrowseMode::All));
    assert_eq!(session.catalog().current_page(), 1);
}

#[tokio::test]
async fn focus_picks_up_changes_from_other_screens() {
    let catalog = Arc::new(FakeCatalog::new(2, 2));
    let mut session = session(&catalog);
    session.set_mode(BrowseMode::Favorites);

    // A details screen toggles through its own handle on the same storage.
    let other = FavoritesStore::new(Arc::clone(session.favorites().store().backend()));
    other.add(FakeCatalog::movie(77)).await.unwrap();
    assert!(session.visible().is_empty());

    session.on_focus().await.unwrap();
    assert_eq!(session.visible(), vec![FakeCatalog::movie(77)]);
}

#[tokio::test]
async fn catalog_errors_surface_through_load_more() {
    let catalog = Arc::new(FakeCatalog::new(2, 2));
    let session = session(&catalog);
    catalog.fail_next(CatalogError::network("offline"));

    let err = session.load_more().await.unwrap_err();
    assert!(matches!(err, BrowseError::Catalog(CatalogError::Network(_))));
    assert!(session.visible().is_empty());
}

#[test]
fn mode_titles() {
    assert_eq!(BrowseMode::All.to_string(), "Movies");
    assert_eq!(BrowseMode::Favorites.to_string(), "Favorites");
}
