//! Client configuration: service address, default credential and timeout.

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ResultExt, RouteError};

/// Base address of the hosted routing service.
pub const DEFAULT_BASE_URL: &str = "https://app.elasticroute.com/api/v1";

/// Settings shared by every plan submitted through one solver.
///
/// `api_key` is the process-wide default credential; a plan's own key takes
/// precedence over it (see [`crate::Plan::resolve_api_key`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Advisory request timeout handed to the transport
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Reads a JSON configuration file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| RouteError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = serde_json::from_str(&raw)
            .with_context(format!("Invalid configuration file {}", path.display()))?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Location of an existing configuration file following the XDG Base
    /// Directory specification: `$XDG_CONFIG_HOME/elasticroute/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("elasticroute").find_config_file("config.json")
    }

    /// Loads the file at [`Config::default_path`], or the defaults when no
    /// such file exists.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Overrides the default credential when `api_key` is given.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if api_key.is_some() {
            self.api_key = api_key;
        }
        self
    }

    /// Overrides the base address when `base_url` is given.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        self
    }
}
