//! Client configuration
//!
//! Values come from, in order of precedence: command line / environment,
//! an optional TOML file, then built-in defaults.
//!
//! ```toml
//! [api]
//! base_url = "https://api.todoist.com/api/v1"
//! timeout_secs = 10
//! ```

use crate::todoist::DEFAULT_BASE_URL;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Per-request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings the HTTP transport is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Upper bound for each individual HTTP call.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// On-disk configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub api: ApiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiSection {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

impl ClientConfig {
    /// Merge explicit overrides over an optional file over the defaults.
    pub fn resolve(
        file: Option<&FileConfig>,
        base_url: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Self {
        let defaults = ClientConfig::default();
        let api = file.map(|f| f.api.clone()).unwrap_or_default();

        let timeout = timeout_secs
            .or(api.timeout_secs)
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        Self {
            base_url: base_url
                .or(api.base_url)
                .filter(|u| !u.trim().is_empty())
                .unwrap_or(defaults.base_url),
            timeout,
        }
    }
}
