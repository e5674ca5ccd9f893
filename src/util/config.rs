//! User configuration read once at startup from `config.json`.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ModelSettings;

pub const APP_QUALIFIER: &str = "in";
pub const APP_ORG: &str = "JaipurUrbanPlanning";
pub const APP_DIR_NAME: &str = "PlanningDashboard";

/// Overrides `data_dir` when set.
pub const DATA_DIR_ENV: &str = "PLANNING_DATA_DIR";

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid configuration in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory searched for the CSV tables before the embedded copies.
    pub data_dir: Option<PathBuf>,
    /// Initial map centre as (latitude, longitude).
    pub map_center: (f64, f64),
    pub split_seed: u64,
    pub test_fraction: f64,
    pub forest_trees: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        let models = ModelSettings::default();
        Self {
            data_dir: dirs::data_local_dir().map(|dir| dir.join("urban-planning-dashboard")),
            map_center: (26.9124, 75.7873),
            split_seed: models.split_seed,
            test_fraction: models.test_fraction,
            forest_trees: models.forest_trees,
        }
    }
}

impl AppConfig {
    pub fn model_settings(&self) -> ModelSettings {
        ModelSettings {
            split_seed: self.split_seed,
            test_fraction: self.test_fraction,
            forest_trees: self.forest_trees,
        }
    }

    /// Reads the config file if there is one and applies the environment
    /// override.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match config_dir() {
            Some(dir) => Self::from_file(&dir.join(CONFIG_FILE))?,
            None => Self::default(),
        };
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            config.data_dir = Some(PathBuf::from(dir));
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_DIR_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
}
