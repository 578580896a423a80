use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::from_slice;
use url::Url;

use crate::error::ConfigError;

const CONFIG_PATH: &str = "config.json";
const API_URL_VAR: &str = "BULLETIN_API_URL";
const LOG_VAR: &str = "BULLETIN_LOG";

const DEFAULT_API_URL: &str = "http://localhost:3000/fakeApi/";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the REST backend; endpoints are resolved relative to it
    pub api_url: String,
    /// `env_logger` filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Defaults, overlaid by `config.json` in the user's config directory,
    /// overlaid by the `BULLETIN_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_directory().map(|dir| dir.join(CONFIG_PATH));
        Self::load_from(path.as_deref(), |key| std::env::var(key).ok())
    }

    pub fn load_from(
        path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config: Config = match path {
            Some(path) => read(path)?.unwrap_or_default(),
            None => Config::default(),
        };
        if let Some(url) = env(API_URL_VAR) {
            config.api_url = url;
        }
        if let Some(filter) = env(LOG_VAR) {
            config.log_filter = filter;
        }
        Ok(config)
    }

    /// The API URL with a trailing slash, so `join("posts")` keeps any
    /// path prefix such as `/fakeApi/`
    pub fn api_base(&self) -> Result<Url, ConfigError> {
        let mut raw = self.api_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(self.api_url.clone(), e))
    }
}

fn read<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    log::debug!("reading config {}", path.display());
    let data = std::fs::read(path)?;
    Ok(Some(from_slice(&data)?))
}

fn config_directory() -> Option<PathBuf> {
    use directories_next::ProjectDirs;
    let Some(proj_dirs) = ProjectDirs::from("com", "bulletin", "bulletin") else {
        log::warn!("No config directory available, using defaults");
        return None;
    };
    Some(proj_dirs.config_dir().to_path_buf())
}
