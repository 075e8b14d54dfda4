//! # Client Configuration
//!
//! Where the backend lives, how to display money, and where the credential
//! token is kept.
//!
//! ## Load Order (later overrides earlier)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Defaults          backend http://localhost:4000, currency "$"       │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  2. basket.toml       explicit path, or the platform config dir        │
//! │          │            (~/.config/basket/basket.toml on Linux)           │
//! │          ▼                                                              │
//! │  3. Environment       BASKET_BACKEND_URL, BASKET_CURRENCY,              │
//! │          │            BASKET_TOKEN_PATH, BASKET_TIMEOUT_SECS            │
//! │          ▼                                                              │
//! │  4. validate()        http(s) URL, timeout > 0                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ClientError, ClientResult};

// =============================================================================
// Backend Settings
// =============================================================================

/// Storefront backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSettings {
    /// Base URL; endpoint paths are joined onto it.
    #[serde(default = "default_backend_url")]
    pub url: String,

    /// Per-request timeout (seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_backend_url() -> String {
    "http://localhost:4000".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for BackendSettings {
    fn default() -> Self {
        BackendSettings {
            url: default_backend_url(),
            timeout_secs: default_timeout(),
        }
    }
}

// =============================================================================
// Display Settings
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Currency symbol prefixed to amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency: default_currency(),
        }
    }
}

// =============================================================================
// Storage Settings
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Credential token file. Defaults to `token` in the platform data dir.
    #[serde(default)]
    pub token_path: Option<PathBuf>,
}

// =============================================================================
// Main Client Configuration
// =============================================================================

/// Complete client configuration.
///
/// ## Example Config File
/// ```toml
/// [backend]
/// url = "https://api.greengrocer.example"
/// timeout_secs = 15
///
/// [display]
/// currency = "₹"
///
/// [storage]
/// token_path = "/var/lib/basket/token"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub storage: StorageSettings,
}

impl ClientConfig {
    /// Loads configuration from file, environment, and defaults.
    pub fn load(config_path: Option<PathBuf>) -> ClientResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_path) {
            if path.exists() {
                info!(?path, "Loading client config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Writes these settings to `path` as TOML, creating parent dirs.
    ///
    /// Settings that would fail [`ClientConfig::validate`] on the next load
    /// are rejected and nothing is written.
    pub fn save(&self, path: &Path) -> ClientResult<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;

        info!(?path, "Client config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ClientResult<()> {
        let url = Url::parse(&self.backend.url)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ClientError::InvalidUrl(format!(
                "Backend URL must start with http:// or https://, got: {}",
                self.backend.url
            )));
        }

        if self.backend.timeout_secs == 0 {
            return Err(ClientError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies overrides from a key lookup (the process environment in
    /// [`ClientConfig::load`]).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("BASKET_BACKEND_URL") {
            debug!(url = %url, "Overriding backend URL from environment");
            self.backend.url = url;
        }

        if let Some(currency) = lookup("BASKET_CURRENCY") {
            self.display.currency = currency;
        }

        if let Some(path) = lookup("BASKET_TOKEN_PATH") {
            self.storage.token_path = Some(PathBuf::from(path));
        }

        if let Some(timeout) = lookup("BASKET_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.backend.timeout_secs = secs,
                Err(_) => warn!(value = %timeout, "Ignoring non-numeric BASKET_TIMEOUT_SECS"),
            }
        }
    }

    /// Returns the credential token file path.
    pub fn token_path(&self) -> Option<PathBuf> {
        self.storage.token_path.clone().or_else(|| {
            directories::ProjectDirs::from("com", "basket", "basket")
                .map(|dirs| dirs.data_dir().join("token"))
        })
    }

    /// Returns the platform config file path (`basket.toml` in the config dir).
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "basket", "basket")
            .map(|dirs| dirs.config_dir().join("basket.toml"))
    }

    pub fn currency(&self) -> &str {
        &self.display.currency
    }
}
