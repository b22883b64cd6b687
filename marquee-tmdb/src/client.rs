use std::time::Duration;

use marquee_core::{CatalogError, CatalogPage, MovieCatalogClient, MovieDetail};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::config::TmdbConfig;
use crate::images::ImageUrlBuilder;
use crate::types::{ApiStatus, MovieListResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the TMDB movie endpoints.
pub struct TmdbClient {
    http: reqwest::Client,
    config: TmdbConfig,
    images: ImageUrlBuilder,
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(transport_error)?;
        let images = ImageUrlBuilder::new(&config.image_base_url, &config.image_size);
        Ok(Self {
            http,
            config,
            images,
        })
    }

    pub fn config(&self) -> &TmdbConfig {
        &self.config
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        extra: &[(&str, String)],
        not_found_id: Option<i64>,
    ) -> Result<T, CatalogError> {
        let mut params = self.base_params();
        params.extend(extra.iter().map(|(k, v)| (*k, v.clone())));

        let url = format!("{}{}", self.config.base_url, path);
        log::debug!("GET {url}");

        let resp = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        let text = resp.text().await.map_err(transport_error)?;

        check_status(status, &text, not_found_id)?;
        parse_body(&text)
    }

    fn base_params(&self) -> Vec<(&str, String)> {
        let mut params = vec![("api_key", self.config.api_key.clone())];
        if let Some(ref lang) = self.config.language {
            params.push(("language", lang.clone()));
        }
        params
    }
}

impl MovieCatalogClient for TmdbClient {
    async fn fetch_page(&self, page: u32) -> Result<CatalogPage, CatalogError> {
        if page == 0 {
            return Err(CatalogError::invalid_request("pages are numbered from 1"));
        }
        let path = format!("/movie/{}", self.config.listing);
        let listing: MovieListResponse = self
            .get(&path, &[("page", page.to_string())], None)
            .await?;
        if listing.page == 0 {
            return Err(CatalogError::invalid_response("listing reported page 0"));
        }
        Ok(listing.into_page())
    }

    async fn fetch_detail(&self, id: i64) -> Result<MovieDetail, CatalogError> {
        self.get(&format!("/movie/{id}"), &[], Some(id)).await
    }

    fn image_url(&self, path: Option<&str>) -> Option<String> {
        self.images.url(path)
    }
}

fn transport_error(e: reqwest::Error) -> CatalogError {
    if e.is_timeout() {
        CatalogError::Timeout(REQUEST_TIMEOUT)
    } else {
        CatalogError::network(e.to_string())
    }
}

/// Map a non-success HTTP status to a catalog error.
fn check_status(
    status: StatusCode,
    body: &str,
    not_found_id: Option<i64>,
) -> Result<(), CatalogError> {
    if status.is_success() {
        return Ok(());
    }

    let message = serde_json::from_str::<ApiStatus>(body)
        .ok()
        .and_then(|s| s.status_message)
        .unwrap_or_else(|| snippet(body).to_string());

    if status == StatusCode::NOT_FOUND {
        if let Some(id) = not_found_id {
            return Err(CatalogError::NotFound { id });
        }
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(CatalogError::Unauthorized(message));
    }
    Err(CatalogError::Server {
        status: status.as_u16(),
        message,
    })
}

fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, CatalogError> {
    serde_json::from_str(text).map_err(|e| {
        CatalogError::invalid_response(format!("{e}. Response: {}", snippet(text)))
    })
}

fn snippet(text: &str) -> &str {
    match text.char_indices().nth(200) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
