//! Service configuration.
//!
//! Settings are read from a TOML file and then overridden from the
//! environment. Every section is optional; a missing file yields defaults.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//!
//! [github]
//! years = 5
//! timeout_secs = 20
//!
//! [cache]
//! ttl_secs = 3600
//!
//! [layout]
//! day_spread = 60.0
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetcher::source::MAX_YEARS;
use crate::layout::LayoutConfig;

/// Configuration file name searched for by [`AppConfig::from_default_location`].
pub const CONFIG_FILE_NAME: &str = "commit-sky.toml";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Environment variable {var} has invalid value '{value}'")]
    InvalidEnv { var: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Upstream GitHub settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubSettings {
    pub graphql_url: String,
    /// Calendar years fetched per user, current year included.
    pub years: u32,
    pub timeout_secs: u64,
    /// Only ever taken from `GITHUB_TOKEN`; never read from or written to disk.
    #[serde(skip)]
    pub token: Option<String>,
    /// JSON fixture served instead of calling GitHub.
    pub fixture: Option<PathBuf>,
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            graphql_url: "https://api.github.com/graphql".to_string(),
            years: crate::fetcher::source::DEFAULT_YEARS,
            timeout_secs: 20,
            token: None,
            fixture: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self { ttl_secs: 3600 }
    }
}

impl CacheSettings {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

/// Complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub github: GitHubSettings,
    pub cache: CacheSettings,
    pub layout: LayoutConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from the first standard location that exists.
    ///
    /// Searches for `commit-sky.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Returns `Ok(None)` when no file is found.
    pub fn from_default_location() -> Result<Option<Self>, ConfigError> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            Path::new("backend").join(CONFIG_FILE_NAME),
            Path::new("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// Resolve the effective configuration.
    ///
    /// Reads `COMMIT_SKY_CONFIG` if set, otherwise the default locations,
    /// otherwise defaults; then applies environment overrides and validates.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var("COMMIT_SKY_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::from_default_location()?.unwrap_or_default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Override settings from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST`, `PORT`: bind address
    /// - `GITHUB_TOKEN`: GraphQL API token
    /// - `GITHUB_GRAPHQL_URL`: API endpoint
    /// - `CONTRIB_YEARS`: number of years to fetch
    /// - `CONTRIB_FIXTURE`: serve records from a JSON fixture instead of GitHub
    /// - `CACHE_TTL_SECS`: cache lifetime
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = parse_env("PORT")? {
            self.server.port = port;
        }
        if let Ok(token) = env::var("GITHUB_TOKEN") {
            self.github.token = Some(token).filter(|t| !t.trim().is_empty());
        }
        if let Ok(url) = env::var("GITHUB_GRAPHQL_URL") {
            self.github.graphql_url = url;
        }
        if let Some(years) = parse_env("CONTRIB_YEARS")? {
            self.github.years = years;
        }
        if let Ok(path) = env::var("CONTRIB_FIXTURE") {
            self.github.fixture = Some(PathBuf::from(path));
        }
        if let Some(ttl) = parse_env("CACHE_TTL_SECS")? {
            self.cache.ttl_secs = ttl;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_YEARS).contains(&self.github.years) {
            return Err(ConfigError::Invalid(format!(
                "github.years must be between 1 and {}, got {}",
                MAX_YEARS, self.github.years
            )));
        }
        if self.github.timeout_secs == 0 {
            return Err(ConfigError::Invalid("github.timeout_secs must be at least 1".to_string()));
        }
        self.layout.validate().map_err(ConfigError::Invalid)
    }
}

fn parse_env<T: std::str::FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { var, value }),
        Err(_) => Ok(None),
    }
}
