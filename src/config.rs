//! Server configuration.
//!
//! Read from a YAML file, then overridden from the environment:
//!
//! ```yaml
//! server:
//!   listen_addr: "127.0.0.1:8080"
//! site:
//!   document_root: "./www"
//!   redirect_base: "http://localhost:8080"
//!   strict_containment: false
//! ```
//!
//! `WWWD_CONFIG` names the file (default `wwwd.yaml`, silently skipped when
//! absent). `LISTEN` and `DOC_ROOT` override the listen address and the
//! document root.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

pub const CONFIG_ENV: &str = "WWWD_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "wwwd.yaml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub document_root: String,
    pub redirect_base: Option<String>,
    pub strict_containment: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            document_root: "./www".to_string(),
            redirect_base: None,
            strict_containment: false,
        }
    }
}

impl Config {
    /// Loads from the file named by `WWWD_CONFIG` (or `wwwd.yaml`) and applies
    /// environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let cfg = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE)?,
            Err(_) => Self::default(),
        };

        Ok(cfg.with_overrides(|key| std::env::var(key).ok()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        // An empty document deserializes to unit, not a map.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Applies `LISTEN` and `DOC_ROOT` from `lookup`.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(addr) = lookup("LISTEN") {
            self.server.listen_addr = addr;
        }
        if let Some(root) = lookup("DOC_ROOT") {
            self.site.document_root = root;
        }
        self
    }
}
