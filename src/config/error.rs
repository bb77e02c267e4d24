//! Configuration error types.
//!
//! Everything that can go wrong between opening `site.toml` and handing a
//! validated [`SiteConfig`](super::SiteConfig) to a command.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse config")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Validation(String),
}
