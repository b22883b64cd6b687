use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::images::{DEFAULT_IMAGE_BASE_URL, DEFAULT_IMAGE_SIZE};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LISTING: &str = "popular";

const ENV_API_KEY: &str = "MARQUEE_TMDB_API_KEY";
const ENV_BASE_URL: &str = "MARQUEE_TMDB_BASE_URL";
const ENV_LANGUAGE: &str = "MARQUEE_TMDB_LANGUAGE";
const ENV_IMAGE_SIZE: &str = "MARQUEE_TMDB_IMAGE_SIZE";

/// Settings for talking to the TMDB REST API.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub api_key: String,
    pub base_url: String,
    /// Listing endpoint under `/movie/` used for paging (e.g. "popular").
    pub listing: String,
    pub language: Option<String>,
    pub image_base_url: String,
    pub image_size: String,
}

/// Where a config field's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct ConfigFile {
    tmdb: Option<TmdbSection>,
}

#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct TmdbSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    listing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_size: Option<String>,
}

impl TmdbConfig {
    /// Config with an explicit API key and defaults for everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            listing: DEFAULT_LISTING.to_string(),
            language: None,
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            image_size: DEFAULT_IMAGE_SIZE.to_string(),
        }
    }

    /// Load config from environment variables, the config file, or defaults.
    ///
    /// Priority: env vars > config file > defaults. The API key is required.
    pub fn load() -> Result<Self, ConfigError> {
        let file = match config_path() {
            Some(path) => read_section(&path)?,
            None => None,
        };
        Self::resolve(|name| std::env::var(name).ok(), file)
    }

    /// Load config from a specific file, still honoring env var overrides.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let file = read_section(path)?;
        Self::resolve(|name| std::env::var(name).ok(), file)
    }

    fn resolve(
        env: impl Fn(&str) -> Option<String>,
        file: Option<TmdbSection>,
    ) -> Result<Self, ConfigError> {
        let file = file.unwrap_or_default();

        let api_key = non_blank(env(ENV_API_KEY))
            .or_else(|| non_blank(file.api_key))
            .ok_or_else(|| {
                ConfigError::Missing(format!(
                    "TMDB api_key. Set {ENV_API_KEY} env var or add it to the [tmdb] config table"
                ))
            })?;

        let mut config = Self::new(api_key);
        if let Some(url) = env(ENV_BASE_URL).or(file.base_url) {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(listing) = file.listing {
            config.listing = listing;
        }
        config.language = env(ENV_LANGUAGE).or(file.language);
        if let Some(base) = file.image_base_url {
            config.image_base_url = base;
        }
        if let Some(size) = env(ENV_IMAGE_SIZE).or(file.image_size) {
            config.image_size = size;
        }
        Ok(config)
    }

    /// Override fields with explicit values (e.g., from a host application).
    pub fn with_overrides(mut self, api_key: Option<String>, language: Option<String>) -> Self {
        if let Some(key) = api_key {
            self.api_key = key;
        }
        if let Some(lang) = language {
            self.language = Some(lang);
        }
        self
    }

    /// Report where the API key would be loaded from.
    pub fn api_key_source() -> ConfigSource {
        let file = config_path().and_then(|p| read_section(&p).ok().flatten());
        Self::key_source(|name| std::env::var(name).ok(), file)
    }

    fn key_source(env: impl Fn(&str) -> Option<String>, file: Option<TmdbSection>) -> ConfigSource {
        if non_blank(env(ENV_API_KEY)).is_some() {
            ConfigSource::EnvVar(ENV_API_KEY)
        } else if file.and_then(|s| non_blank(s.api_key)).is_some() {
            ConfigSource::ConfigFile
        } else {
            ConfigSource::Missing
        }
    }
}

/// Empty or whitespace-only values count as unset.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Return the path to the config file: `~/.config/marquee/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("marquee").join("config.toml"))
}

/// Save config to the default config file and return its path.
pub fn save(config: &TmdbConfig) -> Result<PathBuf, ConfigError> {
    save_at(config, config_path())
}

fn save_at(config: &TmdbConfig, path: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    let path = path.ok_or(ConfigError::NoConfigDir)?;
    save_to_file(config, &path)?;
    log::info!("Saved TMDB config to {}", path.display());
    Ok(path)
}

/// Save config to `path`, creating parent directories as needed.
///
/// Fields still at their defaults are left out of the file.
pub fn save_to_file(config: &TmdbConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let non_default = |value: &str, default: &str| (value != default).then(|| value.to_string());
    let file = ConfigFile {
        tmdb: Some(TmdbSection {
            api_key: Some(config.api_key.clone()),
            base_url: non_default(&config.base_url, DEFAULT_BASE_URL),
            listing: non_default(&config.listing, DEFAULT_LISTING),
            language: config.language.clone(),
            image_base_url: non_default(&config.image_base_url, DEFAULT_IMAGE_BASE_URL),
            image_size: non_default(&config.image_size, DEFAULT_IMAGE_SIZE),
        }),
    };

    let toml_str = toml::to_string_pretty(&file)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

fn read_section(path: &Path) -> Result<Option<TmdbSection>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let file: ConfigFile = toml::from_str(&content)?;
    Ok(file.tmdb)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
