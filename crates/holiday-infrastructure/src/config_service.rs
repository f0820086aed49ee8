//! Resolves the gateway configuration from disk and the environment.
//!
//! Credential priority: ~/.config/holiday/secret.json > `OPENAI_API_KEY`.
//! Request overrides come from the `[openai]` table of config.toml.

use crate::paths::HolidayPaths;
use crate::storage::{ConfigStorage, ConfigStorageError, SecretStorage, SecretStorageError};
use holiday_core::error::Result;
use holiday_core::{GatewayConfig, HolidayError};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable holding the OpenAI credential.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Builds a [`GatewayConfig`] once at startup so the gateway never has to
/// look at ambient process state.
pub struct ConfigService {
    secrets: SecretStorage,
    config: ConfigStorage,
}

impl ConfigService {
    /// Uses the default locations under ~/.config/holiday.
    pub fn new() -> Result<Self> {
        let secret_path =
            HolidayPaths::secret_file().map_err(|e| HolidayError::config(e.to_string()))?;
        let config_path =
            HolidayPaths::config_file().map_err(|e| HolidayError::config(e.to_string()))?;
        Ok(Self::with_paths(secret_path, config_path))
    }

    pub fn with_paths(secret_path: PathBuf, config_path: PathBuf) -> Self {
        Self {
            secrets: SecretStorage::with_path(secret_path),
            config: ConfigStorage::new(config_path),
        }
    }

    /// Loads `.env` from the working directory into the process
    /// environment. Returns the file used, if any.
    ///
    /// Call after the tracing subscriber is installed, or the outcome is
    /// not logged.
    pub fn load_dotenv() -> Option<PathBuf> {
        let dir = env::current_dir()
            .map_err(|e| tracing::warn!("Cannot read working directory: {}", e))
            .ok()?;
        Self::load_dotenv_from(&dir.join(".env"))
    }

    /// Loads a specific env file. Variables already set are kept.
    pub fn load_dotenv_from(path: &Path) -> Option<PathBuf> {
        match dotenv::from_path(path) {
            Ok(()) => {
                tracing::info!("Loaded environment from {}", path.display());
                Some(path.to_path_buf())
            }
            Err(e) => {
                tracing::debug!("No env file loaded from {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Resolves the configuration using `OPENAI_API_KEY` from the process
    /// environment as the credential fallback.
    pub fn resolve(&self) -> Result<GatewayConfig> {
        self.resolve_with_env_key(env::var(OPENAI_API_KEY_VAR).ok())
    }

    /// Resolves the configuration with an explicit fallback credential.
    ///
    /// An unreadable secret file is logged and skipped; an unreadable
    /// config.toml is an error, since silently ignoring overrides would send
    /// requests somewhere the user did not ask for.
    pub fn resolve_with_env_key(&self, env_key: Option<String>) -> Result<GatewayConfig> {
        let mut gateway = GatewayConfig::default();

        match self.secrets.load() {
            Ok(secret) => {
                if let Some(openai) = secret.openai.filter(|o| !o.api_key.trim().is_empty()) {
                    tracing::info!("Using OpenAI credential from {}", self.secrets.path().display());
                    gateway.api_key = Some(openai.api_key);
                    if let Some(model) = openai.model_name {
                        gateway.model = model;
                    }
                }
            }
            Err(SecretStorageError::NotFound(_)) => {}
            Err(e) => {
                tracing::warn!("Ignoring secret file {}: {}", self.secrets.path().display(), e);
            }
        }

        if gateway.api_key.is_none() {
            gateway.api_key = env_key.filter(|key| !key.trim().is_empty());
            if gateway.api_key.is_some() {
                tracing::info!("Using OpenAI credential from {}", OPENAI_API_KEY_VAR);
            }
        }

        match self.config.load() {
            Ok(Some(app_config)) => {
                gateway = gateway.apply(&app_config.openai);
            }
            Ok(None) => {}
            Err(ConfigStorageError::TomlParseError(e)) => {
                return Err(HolidayError::Serialization {
                    format: "TOML".to_string(),
                    message: format!("{}: {}", self.config.path().display(), e),
                });
            }
            Err(ConfigStorageError::IoError(e)) => return Err(e.into()),
        }

        tracing::info!(
            "API key loaded: {}",
            if gateway.has_credential() { "yes" } else { "no" }
        );
        tracing::debug!("Gateway configuration: {:?}", gateway);

        Ok(gateway)
    }
}
