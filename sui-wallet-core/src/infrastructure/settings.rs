//! Process settings
//!
//! Layered from lowest to highest precedence: built-in defaults, an optional
//! TOML file (`wallet-core.toml` or the path in `WALLET_CORE_CONFIG`), then
//! `WALLET_CORE_*` environment variables. `.env` is loaded first when present.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use dotenv::dotenv;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::domain::FeatureFlagDocument;
use crate::shared::constants::{CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE, DEFAULT_NETWORK_ID, ENV_PREFIX, LOG_LEVEL};
use crate::shared::error::WalletError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Network selected when the caller does not name one
    pub default_network: String,
    /// Local copy of the remote feature-flag document
    pub feature_flags_path: Option<PathBuf>,
    /// `env_logger` filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_network: DEFAULT_NETWORK_ID.to_string(),
            feature_flags_path: None,
            log_level: LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    /// Load `.env`, the config file and the process environment
    pub fn load() -> Result<Self, WalletError> {
        dotenv().ok();
        let path = env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        let settings = Self::load_with(Some(path.as_path()), None)?;
        info!("Loaded settings, default network {}", settings.default_network);
        Ok(settings)
    }

    /// Load from `path` (optional on disk) and `env_vars`, or the process
    /// environment when `env_vars` is `None`
    pub fn load_with(
        path: Option<&Path>,
        env_vars: Option<config::Map<String, String>>,
    ) -> Result<Self, WalletError> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("default_network", defaults.default_network)?
            .set_default("log_level", defaults.log_level)?;

        if let Some(path) = path {
            debug!("Reading settings file {}", path.display());
            builder = builder.add_source(File::from(path).required(false));
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).source(env_vars))
            .build()?
            .try_deserialize::<Self>()?;

        if settings.default_network.is_empty() {
            return Err(WalletError::config("default_network must not be empty"));
        }
        Ok(settings)
    }

    /// Read the configured feature-flag document, if a path is set
    pub fn feature_flags(&self) -> Result<Option<FeatureFlagDocument>, WalletError> {
        let Some(path) = &self.feature_flags_path else {
            return Ok(None);
        };
        let text = fs::read_to_string(path)?;
        let flags = FeatureFlagDocument::from_json_str(&text)?;
        debug!("Loaded feature flags for {} networks from {}", flags.networks.len(), path.display());
        Ok(Some(flags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn no_env() -> Option<config::Map<String, String>> {
        Some(config::Map::new())
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::load_with(None, no_env()).expect("Failed to load settings");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.default_network, "mainnet");
        assert_eq!(settings.feature_flags_path, None);
    }

    #[test]
    fn test_missing_file_is_ignored() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("absent.toml");
        let settings = Settings::load_with(Some(path.as_path()), no_env()).expect("Failed to load settings");
        assert_eq!(settings.default_network, "mainnet");
    }

    #[test]
    fn test_file_and_env_layering() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("Failed to create temp file");
        writeln!(file, "default_network = \"testnet\"\nlog_level = \"warn\"")
            .expect("Failed to write settings file");

        let from_file = Settings::load_with(Some(file.path()), no_env()).expect("Failed to load settings");
        assert_eq!(from_file.default_network, "testnet");
        assert_eq!(from_file.log_level, "warn");

        let mut env_vars = config::Map::new();
        env_vars.insert("WALLET_CORE_DEFAULT_NETWORK".to_string(), "devnet".to_string());
        let from_env = Settings::load_with(Some(file.path()), Some(env_vars)).expect("Failed to load settings");
        assert_eq!(from_env.default_network, "devnet");
        assert_eq!(from_env.log_level, "warn");
    }

    #[test]
    fn test_empty_default_network_rejected() {
        let mut env_vars = config::Map::new();
        env_vars.insert("WALLET_CORE_DEFAULT_NETWORK".to_string(), String::new());
        assert!(matches!(
            Settings::load_with(None, Some(env_vars)),
            Err(WalletError::Config(_))
        ));
    }

    #[test]
    fn test_feature_flags_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        write!(file, r#"{{"networks":{{"devnet":{{"full_node_url":"https://d"}}}}}}"#)
            .expect("Failed to write flags file");

        let settings = Settings {
            feature_flags_path: Some(file.path().to_path_buf()),
            ..Settings::default()
        };
        let flags = settings
            .feature_flags()
            .expect("Failed to read flags")
            .expect("flags missing");
        assert_eq!(flags.network("devnet").and_then(|n| n.node_url()), Some("https://d"));

        assert_eq!(Settings::default().feature_flags().expect("Failed to read flags"), None);
    }

    #[test]
    fn test_feature_flags_file_missing() {
        let settings = Settings {
            feature_flags_path: Some(PathBuf::from("/nonexistent/flags.json")),
            ..Settings::default()
        };
        assert!(matches!(settings.feature_flags(), Err(WalletError::Io(_))));
    }
}
