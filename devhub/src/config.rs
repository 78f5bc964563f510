//! Configuration file support for devhub.
//!
//! Loads an optional `devhub.toml` holding page copy overrides and the event
//! catalog:
//!
//! ```toml
//! [page]
//! show_featured_events = true
//! featured_heading = "Upcoming"
//!
//! [[events]]
//! title = "DevFest"
//! slug = "devfest-2025"
//! ```

use std::path::{Path, PathBuf};

use devhub_page::PageError;
use devhub_page::types::{Event, EventCatalog, PageOptions};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading a config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid event catalog: {0}")]
    Catalog(#[from] PageError),
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Page copy and the featured-events toggle
    pub page: PageOptions,
    /// Fall back to the built-in catalog when `events` is empty
    pub use_builtin_events: bool,
    /// Events in display order; validated by [`SiteConfig::catalog`]
    pub events: Vec<Event>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            page: PageOptions::default(),
            use_builtin_events: true,
            events: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Load config from `path`, or the defaults when no path is given.
    ///
    /// An explicit path that cannot be read is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => {
                tracing::debug!("no config file given, using built-in catalog");
                Ok(Self::default())
            }
        }
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            events = config.events.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Build the validated catalog this config describes.
    pub fn catalog(&self) -> Result<EventCatalog, ConfigError> {
        if self.events.is_empty() {
            return Ok(if self.use_builtin_events {
                EventCatalog::builtin()
            } else {
                EventCatalog::empty()
            });
        }
        Ok(EventCatalog::new(self.events.clone())?)
    }
}
