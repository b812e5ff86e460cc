// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Settings that drive the sync core.
//!
//! Settings are stored in `config.toml` inside the data directory and include:
//! - `base_url`: address of the backend the front end talks to
//! - `timeout_seconds`: per-request timeout for remote calls (5..=60)
//! - `sync_platform`: which remote store backs uploads (`none`, `gist`, `gitlab`)
//! - `credentials`: per-platform tokens and document locations
//!
//! Settings are loaded once at startup and passed by reference to whatever
//! needs them; nothing here is global.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::store::write_atomic;

const CONFIG_FILE_NAME: &str = "config.toml";
const DATA_DIR_NAME: &str = "artisync";

/// Smallest accepted request timeout.
pub const MIN_TIMEOUT_SECS: u64 = 5;
/// Largest accepted request timeout.
pub const MAX_TIMEOUT_SECS: u64 = 60;

/// Remote store selected for uploads and downloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncPlatform {
    /// Local only.
    #[default]
    None,
    /// GitHub Gist.
    Gist,
    /// GitLab Snippet.
    Gitlab,
}

impl SyncPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncPlatform::None => "none",
            SyncPlatform::Gist => "gist",
            SyncPlatform::Gitlab => "gitlab",
        }
    }
}

impl fmt::Display for SyncPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SyncPlatform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(SyncPlatform::None),
            "gist" | "github" => Ok(SyncPlatform::Gist),
            "gitlab" | "snippet" => Ok(SyncPlatform::Gitlab),
            _ => Err(Error::Config(format!(
                "unknown sync platform '{}'\n  hint: valid platforms are: none, gist, gitlab",
                s
            ))),
        }
    }
}

/// GitHub Gist credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GistCredentials {
    /// Personal access token with the `gist` scope.
    pub token: String,
    /// Existing gist to sync into. Created on first upload when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gist_id: Option<String>,
    #[serde(default = "default_github_api")]
    pub api_url: String,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

/// GitLab Snippet credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitLabCredentials {
    /// Personal access token with the `api` scope.
    pub token: String,
    /// Existing snippet to sync into. Created on first upload when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet_id: Option<String>,
    #[serde(default = "default_gitlab_host")]
    pub host: String,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

/// Opaque per-platform credentials.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gist: Option<GistCredentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gitlab: Option<GitLabCredentials>,
}

/// Settings stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub sync_platform: SyncPlatform,
    #[serde(default)]
    pub credentials: Credentials,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_timeout_seconds() -> u64 {
    15
}

fn default_github_api() -> String {
    "https://api.github.com".to_string()
}

fn default_gitlab_host() -> String {
    "https://gitlab.com".to_string()
}

fn default_file_name() -> String {
    "artisync.json".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            sync_platform: SyncPlatform::None,
            credentials: Credentials::default(),
        }
    }
}

impl Settings {
    /// Loads settings from `config.toml` in `data_dir`.
    ///
    /// A missing file yields defaults; an unreadable or invalid one is an error.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join(CONFIG_FILE_NAME);
        let content = match fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Settings::default());
            }
            Err(e) => return Err(Error::Config(format!("failed to read config: {}", e))),
        };
        let settings: Settings = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Saves settings to `config.toml` in `data_dir`, creating the directory if needed.
    ///
    /// The file is replaced atomically, so a crash never leaves it truncated.
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        self.validate()?;
        fs::create_dir_all(data_dir)?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        write_atomic(&data_dir.join(CONFIG_FILE_NAME), content.as_bytes())?;
        Ok(())
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.timeout_seconds) {
            return Err(Error::Config(format!(
                "timeout_seconds must be between {} and {}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_seconds
            )));
        }
        if self.base_url.trim().is_empty() {
            return Err(Error::Config("base_url cannot be empty".into()));
        }
        Ok(())
    }

    /// The request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Returns true if the selected platform has credentials.
    pub fn has_credentials(&self) -> bool {
        match self.sync_platform {
            SyncPlatform::None => false,
            SyncPlatform::Gist => self
                .credentials
                .gist
                .as_ref()
                .is_some_and(|c| !c.token.is_empty()),
            SyncPlatform::Gitlab => self
                .credentials
                .gitlab
                .as_ref()
                .is_some_and(|c| !c.token.is_empty()),
        }
    }

    /// Records the location of a document created by the first upload.
    pub fn remember_location(&mut self, location: &str) {
        match self.sync_platform {
            SyncPlatform::None => {}
            SyncPlatform::Gist => {
                if let Some(ref mut gist) = self.credentials.gist {
                    gist.gist_id = Some(location.to_string());
                }
            }
            SyncPlatform::Gitlab => {
                if let Some(ref mut gitlab) = self.credentials.gitlab {
                    gitlab.snippet_id = Some(location.to_string());
                }
            }
        }
    }

    /// Sets a single setting by dotted key, as used by `config set`.
    ///
    /// Recognized keys: `base_url`, `timeout_seconds`, `sync_platform`,
    /// `gist.token`, `gist.id`, `gist.api_url`, `gitlab.token`, `gitlab.id`,
    /// `gitlab.host`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.clone();
        match key {
            "base_url" => next.base_url = value.to_string(),
            "timeout_seconds" => {
                next.timeout_seconds = value.parse().map_err(|_| {
                    Error::Config(format!("timeout_seconds must be a number, got '{}'", value))
                })?;
            }
            "sync_platform" => next.sync_platform = value.parse()?,
            "gist.token" => next.gist_mut().token = value.to_string(),
            "gist.id" => next.gist_mut().gist_id = non_empty(value),
            "gist.api_url" => next.gist_mut().api_url = value.to_string(),
            "gitlab.token" => next.gitlab_mut().token = value.to_string(),
            "gitlab.id" => next.gitlab_mut().snippet_id = non_empty(value),
            "gitlab.host" => next.gitlab_mut().host = value.to_string(),
            _ => return Err(Error::Config(format!("unknown setting '{}'", key))),
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    fn gist_mut(&mut self) -> &mut GistCredentials {
        self.credentials.gist.get_or_insert_with(|| GistCredentials {
            token: String::new(),
            gist_id: None,
            api_url: default_github_api(),
            file_name: default_file_name(),
        })
    }

    fn gitlab_mut(&mut self) -> &mut GitLabCredentials {
        self.credentials
            .gitlab
            .get_or_insert_with(|| GitLabCredentials {
                token: String::new(),
                snippet_id: None,
                host: default_gitlab_host(),
                file_name: default_file_name(),
            })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Default data directory (`$XDG_DATA_HOME/artisync` or platform equivalent).
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join(DATA_DIR_NAME))
        .ok_or_else(|| Error::Config("could not determine a data directory".into()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
