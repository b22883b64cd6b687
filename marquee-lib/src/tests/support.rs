//! Scripted catalog client shared by the unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use marquee_core::{CatalogError, CatalogPage, MovieCatalogClient, MovieDetail, MovieSummary};
use tokio::sync::Notify;

pub struct FakeCatalog {
    pub total_pages: u32,
    pub per_page: usize,
    /// Pages that come back with no items.
    pub empty_pages: Vec<u32>,
    /// When set, every fetch waits for one `notify_one` before answering.
    pub gate: Option<Notify>,
    /// Page number to report instead of the requested one.
    pub page_override: Option<u32>,
    fail_next: Mutex<Option<CatalogError>>,
    calls: AtomicUsize,
    detail_calls: AtomicUsize,
    requested: Mutex<Vec<u32>>,
}

impl FakeCatalog {
    pub fn new(total_pages: u32, per_page: usize) -> Self {
        Self {
            total_pages,
            per_page,
            empty_pages: Vec::new(),
            gate: None,
            page_override: None,
            fail_next: Mutex::new(None),
            calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn gated(mut self) -> Self {
        self.gate = Some(Notify::new());
        self
    }

    pub fn with_empty_page(mut self, page: u32) -> Self {
        self.empty_pages.push(page);
        self
    }

    pub fn fail_next(&self, err: CatalogError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<u32> {
        self.requested.lock().unwrap().clone()
    }

    pub fn movie(id: i64) -> MovieSummary {
        MovieSummary::new(id, format!("Movie {id}"))
            .with_poster(format!("/p{id}.jpg"))
            .with_backdrop(format!("/b{id}.jpg"))
            .with_release_date("2020-01-01")
    }
}

impl MovieCatalogClient for FakeCatalog {
    async fn fetch_page(&self, page: u32) -> Result<CatalogPage, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(page);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if let Some(err) = self.fail_next.lock().unwrap().take() {
            return Err(err);
        }
        let items = if self.empty_pages.contains(&page) {
            Vec::new()
        } else {
            (0..self.per_page)
                .map(|i| Self::movie(page as i64 * 100 + i as i64))
                .collect()
        };
        let number = self.page_override.unwrap_or(page);
        Ok(CatalogPage::new(number, self.total_pages, items))
    }

    async fn fetch_detail(&self, id: i64) -> Result<MovieDetail, CatalogError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.fail_next.lock().unwrap().take() {
            return Err(err);
        }
        if id < 0 {
            return Err(CatalogError::NotFound { id });
        }
        let summary = Self::movie(id);
        Ok(MovieDetail {
            id,
            title: summary.title,
            poster_path: summary.poster_path,
            backdrop_path: summary.backdrop_path,
            release_date: summary.release_date,
            vote_average: summary.vote_average,
            overview: format!("Overview of movie {id}"),
        })
    }

    fn image_url(&self, path: Option<&str>) -> Option<String> {
        path.map(|p| format!("https://img.test/w500{p}"))
    }
}
