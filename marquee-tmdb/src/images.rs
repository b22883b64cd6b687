pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/";
pub const DEFAULT_IMAGE_SIZE: &str = "w500";

/// Builds poster and backdrop URLs from the relative paths the catalog returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlBuilder {
    base_url: String,
    size: String,
}

impl Default for ImageUrlBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE_URL, DEFAULT_IMAGE_SIZE)
    }
}

impl ImageUrlBuilder {
    pub fn new(base_url: impl Into<String>, size: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            size: size.into().trim_matches('/').to_string(),
        }
    }

    /// Full URL for `path`, or `None` if there is no path to fetch.
    pub fn url(&self, path: Option<&str>) -> Option<String> {
        let path = path?.trim();
        if path.is_empty() {
            return None;
        }
        let sep = if path.starts_with('/') { "" } else { "/" };
        Some(format!("{}{}{}{}", self.base_url, self.size, sep, path))
    }
}
