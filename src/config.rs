// ⚙️ Configuration - Optional JSON file with sane defaults
//
// Every key is optional. A missing file path means "use defaults"; a path
// that cannot be read or parsed is an error.

use crate::routes::Route;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown start route: {0}")]
    UnknownRoute(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the first screen shown
    pub start_route: String,

    /// Prefix shown in front of money amounts in cost inputs
    pub currency_symbol: String,

    /// One-click values offered next to the delivery fee field
    pub delivery_fee_presets: Vec<u64>,

    /// One-click values offered next to the amount paid field
    pub amount_paid_presets: Vec<u64>,

    /// Shown in the account menu
    pub operator_name: String,
    pub operator_email: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            start_route: Route::Login.path().to_string(),
            currency_symbol: "₦".to_string(),
            delivery_fee_presets: vec![1000, 1500, 2000, 2500],
            amount_paid_presets: Vec::new(),
            operator_name: "Admin User".to_string(),
            operator_email: "admin@parcel.local".to_string(),
        }
    }
}

impl Config {
    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.start()?;
        Ok(config)
    }

    /// Load from a file if one was given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Config::default()),
        }
    }

    /// Replace the start route, validating it first
    pub fn with_start_route(mut self, path: &str) -> Result<Self, ConfigError> {
        self.start_route = path.to_string();
        self.start()?;
        Ok(self)
    }

    pub fn start(&self) -> Result<Route, ConfigError> {
        Route::from_path(&self.start_route)
            .ok_or_else(|| ConfigError::UnknownRoute(self.start_route.clone()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
