use serde::{Deserialize, Deserializer, Serialize};

/// A movie as it appears in catalog listings and in the favorites set.
///
/// Field names follow the remote wire format so the same value serializes
/// identically into the persisted favorites blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// ISO date (`YYYY-MM-DD`). Empty when the catalog has no date.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
}

impl MovieSummary {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            backdrop_path: None,
            release_date: String::new(),
            vote_average: 0.0,
        }
    }

    pub fn with_poster(mut self, path: impl Into<String>) -> Self {
        self.poster_path = Some(path.into());
        self
    }

    pub fn with_backdrop(mut self, path: impl Into<String>) -> Self {
        self.backdrop_path = Some(path.into());
        self
    }

    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = date.into();
        self
    }

    pub fn with_vote_average(mut self, vote: f64) -> Self {
        self.vote_average = vote;
        self
    }

    /// The four-digit year of `release_date`, if the date has one.
    pub fn release_year(&self) -> Option<&str> {
        let year = self.release_date.get(..4)?;
        year.chars().all(|c| c.is_ascii_digit()).then_some(year)
    }
}

/// Full record for a single movie, fetched on demand for a details screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub overview: String,
}

impl MovieDetail {
    /// Project the detail record down to the listing shape.
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            poster_path: self.poster_path.clone(),
            backdrop_path: self.backdrop_path.clone(),
            release_date: self.release_date.clone(),
            vote_average: self.vote_average,
        }
    }
}

/// One page of the remote listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    /// 1-based page number of this page.
    pub page_number: u32,
    /// Total number of pages the service reports for the listing.
    pub total_pages: u32,
    pub items: Vec<MovieSummary>,
}

impl CatalogPage {
    pub fn new(page_number: u32, total_pages: u32, items: Vec<MovieSummary>) -> Self {
        Self {
            page_number,
            total_pages,
            items,
        }
    }

    /// True when this is the last page the service has.
    pub fn is_last(&self) -> bool {
        self.page_number >= self.total_pages
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "tests/movie_tests.rs"]
mod tests;
