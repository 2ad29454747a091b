use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use phonedir_core::MatchPolicy;
use phonedir_core::auth::hex_digest;

/// Digest of the shared secret the directory shipped with.
pub const LEGACY_PASSWORD_SHA256: &str =
    "03ac674216f3e15c761ee1a5e255f067953623c8b388b4459e13f978d7c846f4";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StoreConfig {
    /// Backing file. Defaults to `~/phonedir/contacts.csv`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthConfig {
    #[serde(default = "AuthConfig::default_password_sha256")]
    pub password_sha256: String,
    /// Environment variable consulted for the password before prompting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_env: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_sha256: Self::default_password_sha256(),
            password_env: None,
        }
    }
}

impl AuthConfig {
    fn default_password_sha256() -> String {
        LEGACY_PASSWORD_SHA256.to_string()
    }

    /// Whether the shipped default secret is still in use.
    #[must_use]
    pub fn uses_legacy_password(&self) -> bool {
        self.password_sha256
            .trim()
            .eq_ignore_ascii_case(LEGACY_PASSWORD_SHA256)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SearchConfig {
    #[serde(default)]
    pub policy: MatchPolicy,
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("phonedir"))
    }

    pub fn default_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load the config at `path`, or the default location when `None`.
    ///
    /// A missing file yields the defaults; a file that exists but does not
    /// parse is an error.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if !config_path.exists() {
            debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(config_path).map_err(|e| {
            anyhow::anyhow!("Cannot read config {}: {e}", config_path.display())
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Invalid config {}: {e}", config_path.display())
        })?;

        info!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Backing file location after applying defaults.
    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        match &self.store.path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("contacts.csv")),
        }
    }

    /// Write the config template to `path` (default location when `None`).
    ///
    /// Refuses to overwrite an existing file.
    pub fn create_config(path: Option<&Path>) -> anyhow::Result<PathBuf> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template = Self::default();
        std::fs::write(&config_path, serde_json::to_string_pretty(&template)?)?;

        info!("Created config file at {}", config_path.display());
        Ok(config_path)
    }

    /// Store the digest of `secret` as the new shared password.
    pub fn set_password(&mut self, secret: &str) {
        self.auth.password_sha256 = hex_digest(secret);
    }

    pub fn save_to(&self, config_path: &Path) -> anyhow::Result<()> {
        std::fs::write(config_path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
