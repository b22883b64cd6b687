//! Incremental catalog loading for infinite-scroll lists.
//!
//! A [`PaginationController`] owns one browsing session's cursor. Scroll
//! handlers call [`request_next`](PaginationController::request_next) as
//! often as they like; while a page request is outstanding further calls are
//! dropped, so the catalog never sees two page fetches at once from the same
//! controller.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use marquee_core::{CatalogError, CatalogPage, MovieCatalogClient, MovieSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationState {
    /// Ready to fetch the next page.
    Idle,
    /// A page request is outstanding.
    Fetching,
    /// The last page has been loaded.
    Exhausted,
}

/// Snapshot of a controller's cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationCursor {
    /// Last page successfully loaded; 0 before the first fetch.
    pub current_page: u32,
    pub total_pages: u32,
    pub accumulated: Vec<MovieSummary>,
    pub in_flight: bool,
}

/// What a call to [`PaginationController::request_next`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A page was fetched and its items appended.
    Appended { page: u32, added: usize },
    /// Another request was already in flight; this one was dropped.
    AlreadyInFlight,
    /// Every page has been loaded; nothing was fetched.
    Exhausted,
    /// The controller was reset while the fetch was in flight and the
    /// response was thrown away.
    Discarded,
}

struct Inner {
    state: PaginationState,
    current_page: u32,
    total_pages: u32,
    accumulated: Vec<MovieSummary>,
    /// Bumped by `reset` so responses from an earlier session are ignored.
    generation: u64,
}

impl Inner {
    fn fresh(generation: u64) -> Self {
        Self {
            state: PaginationState::Idle,
            current_page: 0,
            total_pages: 1,
            accumulated: Vec::new(),
            generation,
        }
    }
}

pub struct PaginationController<C> {
    client: C,
    timeout: Option<Duration>,
    inner: Mutex<Inner>,
}

impl<C: MovieCatalogClient> PaginationController<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            timeout: None,
            inner: Mutex::new(Inner::fresh(0)),
        }
    }

    /// Give up on a page request after `limit`.
    ///
    /// A timed-out request returns [`CatalogError::Timeout`] and the
    /// controller goes back to `Idle`.
    pub fn with_timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fetch and append the next page.
    ///
    /// Returns without fetching when a request is already in flight or the
    /// listing is exhausted. On error the cursor is left exactly as it was
    /// (apart from returning to `Idle`) and the error is returned; retrying is
    /// up to the caller.
    pub async fn request_next(&self) -> Result<FetchOutcome, CatalogError> {
        let (page, generation) = {
            let mut inner = self.lock();
            match inner.state {
                PaginationState::Fetching => {
                    log::debug!("Page request dropped: page {} in flight", inner.current_page + 1);
                    return Ok(FetchOutcome::AlreadyInFlight);
                }
                PaginationState::Exhausted => return Ok(FetchOutcome::Exhausted),
                PaginationState::Idle => {}
            }
            inner.state = PaginationState::Fetching;
            (inner.current_page + 1, inner.generation)
        };

        log::debug!("Fetching catalog page {page}");
        let mut guard = InFlight {
            inner: &self.inner,
            generation,
            armed: true,
        };
        let result = self.fetch(page).await;
        guard.armed = false;

        let mut inner = self.lock();
        if inner.generation != generation {
            log::debug!("Discarding page {page}: controller was reset");
            return Ok(FetchOutcome::Discarded);
        }

        let catalog_page = match result {
            Ok(p) if p.page_number <= inner.current_page => {
                inner.state = PaginationState::Idle;
                return Err(CatalogError::invalid_response(format!(
                    "requested page {page} but got page {}",
                    p.page_number
                )));
            }
            Ok(p) => p,
            Err(e) => {
                log::warn!("Failed to fetch catalog page {page}: {e}");
                inner.state = PaginationState::Idle;
                return Err(e);
            }
        };

        let added = catalog_page.items.len();
        inner.accumulated.extend(catalog_page.items);
        inner.current_page = catalog_page.page_number;
        inner.total_pages = catalog_page.total_pages.max(1);
        inner.state = if inner.current_page < inner.total_pages {
            PaginationState::Idle
        } else {
            PaginationState::Exhausted
        };
        log::debug!(
            "Loaded page {}/{} ({} items, {} total)",
            inner.current_page,
            inner.total_pages,
            added,
            inner.accumulated.len()
        );

        Ok(FetchOutcome::Appended {
            page: inner.current_page,
            added,
        })
    }

    /// Start a new session: drop accumulated items and go back to page 0.
    ///
    /// A fetch still in flight is abandoned; its response will be discarded.
    pub fn reset(&self) {
        let mut inner = self.lock();
        let generation = inner.generation.wrapping_add(1);
        *inner = Inner::fresh(generation);
        log::debug!("Pagination reset");
    }

    pub fn state(&self) -> PaginationState {
        self.lock().state
    }

    pub fn current_page(&self) -> u32 {
        self.lock().current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.lock().total_pages
    }

    pub fn is_exhausted(&self) -> bool {
        self.state() == PaginationState::Exhausted
    }

    /// Items loaded so far, in page order.
    pub fn accumulated(&self) -> Vec<MovieSummary> {
        self.lock().accumulated.clone()
    }

    pub fn cursor(&self) -> PaginationCursor {
        let inner = self.lock();
        PaginationCursor {
            current_page: inner.current_page,
            total_pages: inner.total_pages,
            accumulated: inner.accumulated.clone(),
            in_flight: inner.state == PaginationState::Fetching,
        }
    }

    async fn fetch(&self, page: u32) -> Result<CatalogPage, CatalogError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.client.fetch_page(page))
                .await
                .unwrap_or(Err(CatalogError::Timeout(limit))),
            None => self.client.fetch_page(page).await,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        lock_inner(&self.inner)
    }
}

fn lock_inner(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns the controller to `Idle` if a `request_next` future is dropped
/// before its fetch resolves.
struct InFlight<'a> {
    inner: &'a Mutex<Inner>,
    generation: u64,
    armed: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut inner = lock_inner(self.inner);
        if inner.generation == self.generation && inner.state == PaginationState::Fetching {
            log::debug!("Page request cancelled");
            inner.state = PaginationState::Idle;
        }
    }
}

#[cfg(test)]
#[path = "tests/pagination_tests.rs"]
mod tests;
