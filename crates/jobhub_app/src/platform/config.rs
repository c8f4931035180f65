use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use jobhub_engine::FetchSettings;
use log::LevelFilter;
use serde::Deserialize;

pub(crate) const CONFIG_FILENAME: &str = "jobhub.ron";
const DEFAULT_AUDIO_ASSET: &str = "assets/jobhub-click.mp3";

/// Optional overrides read from `jobhub.ron`; every field may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub endpoint: String,
    pub audio_asset: PathBuf,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            endpoint: fetch.endpoint,
            audio_asset: PathBuf::from(DEFAULT_AUDIO_ASSET),
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub(crate) fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            endpoint: self.endpoint.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..FetchSettings::default()
        }
    }

    pub(crate) fn log_level(&self) -> LevelFilter {
        jobhub_logging::level_from_name(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Load the config file; a missing file is not an error and yields defaults.
pub(crate) fn load(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}
