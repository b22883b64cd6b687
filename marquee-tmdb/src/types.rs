use marquee_core::{CatalogPage, MovieSummary};
use serde::Deserialize;

/// Listing response from `/movie/{listing}`.
#[derive(Debug, Deserialize)]
pub struct MovieListResponse {
    pub page: u32,
    #[serde(default)]
    pub results: Vec<MovieSummary>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: Option<u64>,
}

impl MovieListResponse {
    /// Convert to a [`CatalogPage`].
    ///
    /// TMDB reports `total_pages: 0` for an empty listing; that is clamped to
    /// 1 so the page itself counts as the last one.
    pub fn into_page(self) -> CatalogPage {
        CatalogPage::new(self.page, self.total_pages.max(1), self.results)
    }
}

/// Error body returned with non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ApiStatus {
    #[serde(default)]
    pub status_code: Option<i64>,
    #[serde(default)]
    pub status_message: Option<String>,
}
