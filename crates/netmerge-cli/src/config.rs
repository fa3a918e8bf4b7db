//! Configuration for the netmerge CLI.
//!
//! Configuration is optional and only read from a file named with
//! `--config`. All keys have defaults that reproduce the standard report.
//!
//! ```toml
//! [report]
//! header = true
//! statistics = false
//! ```

use std::path::Path;

use netmerge_core::ReportOptions;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetmergeConfig {
    /// Report section toggles.
    #[serde(default)]
    pub report: ReportOptions,
}

impl NetmergeConfig {
    /// Loads configuration from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)
            .map_err(|e| netmerge_core::Error::io_with_path(e, path))?;
        let config = Self::from_toml(&content).map_err(|e| Error::config(path, e.to_string()))?;
        tracing::debug!(path = %path.display(), ?config, "Loaded configuration");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
