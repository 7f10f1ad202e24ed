//! Server configuration.
//!
//! Defaults, then an optional YAML file named by `SMART_GOALS_CONFIG`, then
//! individual `SMART_GOALS_*` environment overrides.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::date_selection::DEFAULT_PLACEHOLDER;

pub const CONFIG_PATH_VAR: &str = "SMART_GOALS_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origin allowed by CORS, the frontend dev server by default
    pub allowed_origin: String,
    /// `EnvFilter` directive string
    pub log_filter: String,
    /// Built frontend served as the router fallback
    pub static_dir: Option<PathBuf>,
    pub celebration_buffer: usize,
    /// Text shown in the empty date field
    pub date_placeholder: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            allowed_origin: "http://localhost:8080".to_string(),
            log_filter: "info".to_string(),
            static_dir: None,
            celebration_buffer: 16,
            date_placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load from the process environment
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` in place of the process environment
    pub fn load_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_yaml_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_overrides(lookup)?;
        Ok(config)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SMART_GOALS_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("SMART_GOALS_PORT") {
            self.port = port
                .trim()
                .parse()
                .with_context(|| format!("SMART_GOALS_PORT is not a valid port: {}", port))?;
        }
        if let Some(origin) = lookup("SMART_GOALS_ALLOWED_ORIGIN") {
            self.allowed_origin = origin;
        }
        if let Some(filter) = lookup("SMART_GOALS_LOG") {
            self.log_filter = filter;
        }
        if let Some(dir) = lookup("SMART_GOALS_STATIC_DIR") {
            self.static_dir = (!dir.is_empty()).then(|| PathBuf::from(dir));
        }
        Ok(())
    }

    /// Host and port to bind; the host may be a name such as `localhost`
    pub fn bind_target(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
