use std::sync::Arc;

use crate::error::CatalogError;
use crate::movie::{CatalogPage, MovieDetail};

/// A remote movie catalog: paginated listings and per-movie details.
///
/// Implementations hold no browsing state. Pagination bookkeeping belongs to
/// the caller.
#[allow(async_fn_in_trait)]
pub trait MovieCatalogClient {
    /// Fetch one listing page. Pages are numbered from 1.
    async fn fetch_page(&self, page: u32) -> Result<CatalogPage, CatalogError>;

    /// Fetch the full record for a single movie.
    async fn fetch_detail(&self, id: i64) -> Result<MovieDetail, CatalogError>;

    /// Build a fully-qualified image URL for a relative image path.
    ///
    /// Returns `None` when there is no path, so callers never request a
    /// broken image.
    fn image_url(&self, path: Option<&str>) -> Option<String>;
}

impl<T: MovieCatalogClient> MovieCatalogClient for Arc<T> {
    async fn fetch_page(&self, page: u32) -> Result<CatalogPage, CatalogError> {
        (**self).fetch_page(page).await
    }

    async fn fetch_detail(&self, id: i64) -> Result<MovieDetail, CatalogError> {
        (**self).fetch_detail(id).await
    }

    fn image_url(&self, path: Option<&str>) -> Option<String> {
        (**self).image_url(path)
    }
}
