// src/config.rs

use crate::profile::Profile;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_ENV: &str = "PORTFOLIO_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "portfolio.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub bind_addr: String,
    pub max_workers: usize,
    pub static_dir: PathBuf,
    /// Default filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub listing: ListingConfig,
    pub profile: Profile,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListingConfig {
    pub endpoint: String,
    pub owner: String,
    pub user_agent: String,
    pub timeout_secs: Option<u64>,
    /// Where "View all projects" and fallback cards link to.
    /// Defaults to `https://github.com/<owner>`.
    pub profile_url: Option<String>,
    /// Live URL of this site, shown on the fallback portfolio card.
    pub site_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            max_workers: 8,
            static_dir: PathBuf::from("static"),
            log_level: "info".to_string(),
            listing: ListingConfig::default(),
            profile: Profile::default(),
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.github.com/users".to_string(),
            owner: "octocat".to_string(),
            user_agent: concat!("portfolio-site/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: Some(10),
            profile_url: None,
            site_url: None,
        }
    }
}

impl ListingConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn profile_url(&self) -> String {
        self.profile_url
            .clone()
            .unwrap_or_else(|| format!("https://github.com/{}", self.owner.trim()))
    }
}

impl SiteConfig {
    /// `$PORTFOLIO_CONFIG` if set (the file must exist), else
    /// `./portfolio.toml` if present, else defaults.
    pub fn discover() -> Result<Self, ConfigError> {
        match env::var(CONFIG_ENV) {
            Ok(path) => Self::load(Path::new(&path)),
            Err(_) => Self::load_or_default(Path::new(DEFAULT_CONFIG_FILE)),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let cfg = Self::default();
            cfg.validate()?;
            return Ok(cfg);
        }
        Self::load(path)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let cfg: SiteConfig = toml::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;

        if self.max_workers == 0 {
            return Err(ConfigError::Invalid("max_workers must be at least 1".into()));
        }
        if self.listing.owner.trim().is_empty() {
            return Err(ConfigError::Invalid("listing.owner must not be empty".into()));
        }
        url::Url::parse(&self.listing.endpoint).map_err(|e| {
            ConfigError::Invalid(format!("listing.endpoint {:?}: {e}", self.listing.endpoint))
        })?;

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("bind_addr {:?}: {e}", self.bind_addr)))
    }
}
