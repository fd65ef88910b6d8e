//! Shared configuration and durable session storage for Forecourt.
//!
//! TOML config + `FORECOURT_`-prefixed environment overrides, path
//! resolution via platform conventions, and [`FileSessionStore`] — the
//! production [`forecourt_core::SessionStore`] keeping the bearer
//! token in the system keyring and the profile as JSON on disk.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use forecourt_api::{ApiClient, TlsMode, TransportConfig};

pub mod session_store;

pub use session_store::FileSessionStore;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error(transparent)]
    Api(#[from] forecourt_api::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config ─────────────────────────────────────────────────────

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Backend base URL.
    #[serde(default = "default_server")]
    pub server: String,

    /// Accept invalid TLS certificates (staging backends).
    #[serde(default)]
    pub insecure: bool,

    /// Path to a custom CA certificate (PEM).
    pub ca_cert: Option<PathBuf>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: default_server(),
            insecure: false,
            ca_cert: None,
            timeout: default_timeout(),
        }
    }
}

fn default_server() -> String {
    "http://127.0.0.1:3000".into()
}
fn default_timeout() -> u64 {
    10
}

impl Config {
    /// Translate to the transport settings the API client consumes.
    #[must_use]
    pub fn transport(&self) -> TransportConfig {
        let tls = if self.insecure {
            TlsMode::DangerAcceptInvalid
        } else if let Some(ref ca_path) = self.ca_cert {
            TlsMode::CustomCa(ca_path.clone())
        } else {
            TlsMode::System
        };
        TransportConfig {
            tls,
            timeout: Duration::from_secs(self.timeout),
        }
    }

    /// Build an API client, authenticated when a token is given.
    pub fn client(&self, token: Option<&SecretString>) -> Result<Arc<ApiClient>, ConfigError> {
        Ok(Arc::new(ApiClient::new(
            &self.server,
            token,
            &self.transport(),
        )?))
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
#[must_use]
pub fn config_path() -> PathBuf {
    project_dir().join("config.toml")
}

/// Directory holding config and the persisted session profile.
#[must_use]
pub fn project_dir() -> PathBuf {
    ProjectDirs::from("com", "forecourt", "forecourt")
        .map_or_else(dirs_fallback, |dirs| dirs.config_dir().to_path_buf())
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("forecourt");
    p
}

// ── Loading / saving ────────────────────────────────────────────────

/// Load the config from file + environment (`FORECOURT_*` overrides).
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit path, still honoring environment overrides.
pub fn load_config_from(path: &std::path::Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("FORECOURT_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning defaults when the file doesn't exist.
#[must_use]
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

/// Serialize config to TOML and write it to the canonical path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = Config::default();
        assert_eq!(cfg.timeout, 10);
        assert!(!cfg.insecure);
        assert!(cfg.server.starts_with("http"));
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "server = \"https://cmms.example.com\"\ninsecure = true\ntimeout = 25\n",
        )
        .unwrap();

        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.server, "https://cmms.example.com");
        assert!(cfg.insecure);
        assert_eq!(cfg.timeout, 25);
    }

    #[test]
    fn transport_reflects_tls_choice() {
        let cfg = Config {
            insecure: true,
            ..Config::default()
        };
        assert!(matches!(cfg.transport().tls, TlsMode::DangerAcceptInvalid));

        let cfg = Config {
            ca_cert: Some(PathBuf::from("/etc/ssl/corp-ca.pem")),
            ..Config::default()
        };
        assert!(matches!(cfg.transport().tls, TlsMode::CustomCa(_)));
    }
}
