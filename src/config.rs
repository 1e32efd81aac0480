//! Client configuration
//!
//! Loads the SteamGridDB API key and base URL from the environment or a
//! `secrets.json` file. The result is an explicit value handed to the
//! HTTP client at construction; nothing here is global.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://www.steamgriddb.com/api/v2";

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "STEAMGRIDDB_API_KEY";

/// Environment variable overriding the API base URL
pub const BASE_URL_VAR: &str = "STEAMGRIDDB_BASE_URL";

/// Settings required to talk to the API
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the `Authorization` header
    pub api_key: String,
    /// API root, without a trailing slash
    pub base_url: String,
}

/// On-disk shape of secrets.json
#[derive(Debug, Deserialize, Default)]
struct SecretsFile {
    #[serde(default)]
    api_key: String,
    #[serde(default)]
    base_url: Option<String>,
}

impl Config {
    /// Create a config from explicit values (used by tests and callers
    /// that manage credentials themselves).
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Load configuration from the environment, falling back to a
    /// `secrets.json` in the working directory or next to the executable.
    ///
    /// Environment variables win over the file. A missing API key is a
    /// usage error; the remote would only answer 401 anyway.
    pub fn load() -> Result<Self> {
        let secrets = Self::load_secrets_file().unwrap_or_default();

        let api_key = match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.is_empty() => key,
            _ => secrets.api_key,
        };

        if api_key.is_empty() {
            return Err(Error::Usage(format!(
                "No API key configured. Set {API_KEY_VAR} or put an \"api_key\" in secrets.json.\n\
                 Keys are generated at https://www.steamgriddb.com/profile/preferences"
            )));
        }

        let base_url = std::env::var(BASE_URL_VAR)
            .ok()
            .filter(|url| !url.is_empty())
            .or(secrets.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self::new(api_key, base_url))
    }

    /// Find and parse secrets.json, trying the working directory first
    /// and the executable's directory second.
    fn load_secrets_file() -> Option<SecretsFile> {
        if let Some(secrets) = Self::read_secrets(Path::new("secrets.json")) {
            log::debug!("Loaded secrets from ./secrets.json");
            return Some(secrets);
        }

        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let path: PathBuf = exe_dir.join("secrets.json");
                if let Some(secrets) = Self::read_secrets(&path) {
                    log::debug!("Loaded secrets from {}", path.display());
                    return Some(secrets);
                }
            }
        }

        log::debug!("No secrets.json found");
        None
    }

    fn read_secrets(path: &Path) -> Option<SecretsFile> {
        let content = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&content) {
            Ok(secrets) => Some(secrets),
            Err(e) => {
                log::warn!("Ignoring malformed {}: {}", path.display(), e);
                None
            }
        }
    }
}
