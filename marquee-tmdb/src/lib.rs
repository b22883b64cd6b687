pub mod client;
pub mod config;
pub mod error;
pub mod images;
pub mod types;

pub use client::TmdbClient;
pub use config::{ConfigSource, TmdbConfig, config_path, save, save_to_file};
pub use error::ConfigError;
pub use images::ImageUrlBuilder;
