// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for banana-git.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, UserConfig, RepositoryConfig, WatchConfig
//! Repositories: name --> RepositoryOverride
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::git::auth::{Credentials, Token};
use crate::git::backend::Identity;
use crate::logging::LogLevel;

/// Default remote name.
pub const DEFAULT_REMOTE: &str = "origin";

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Git user: commit identity and HTTPS credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Personal access token.
    #[serde(skip_serializing)]
    pub token: Option<Token>,
}

impl UserConfig {
    /// Author override for commits and merges.
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity::new(self.username.as_deref(), self.email.as_deref())
    }

    /// HTTPS credentials, when both username and token are set.
    #[must_use]
    pub fn credentials(&self) -> Option<Credentials> {
        Credentials::from_parts(self.username.as_deref(), self.token.as_ref())
    }
}

/// A saved repository: local work tree, remote URL and remote name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepositoryConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub remote: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            path: None,
            url: None,
            remote: DEFAULT_REMOTE.to_string(),
        }
    }
}

impl RepositoryConfig {
    /// Both path and url are set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.path.as_ref().is_some_and(|p| !p.as_os_str().is_empty())
            && self.url.as_ref().is_some_and(|u| !u.trim().is_empty())
    }

    /// Display name: last component of the path.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
    }

    /// Make a relative path absolute against the current directory.
    pub(super) fn resolve(&mut self) -> std::io::Result<()> {
        if let Some(path) = &self.path
            && !path.as_os_str().is_empty()
            && path.is_relative()
        {
            self.path = Some(std::path::absolute(path)?);
        }
        Ok(())
    }
}

/// Polling options of the `watch` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WatchConfig {
    /// Poll interval in milliseconds.
    pub interval_ms: u64,
    /// Commits shown per snapshot.
    pub history_limit: usize,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            history_limit: 30,
        }
    }
}

/// The user and one selected repository, everything a `GitService` needs.
#[derive(Debug, Clone, Default)]
pub struct GitInfo {
    /// Saved repository name when selected with `--repo`.
    pub name: Option<String>,
    pub user: UserConfig,
    pub repository: RepositoryConfig,
}

impl GitInfo {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.repository.path.as_deref()
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.repository.url.as_deref()
    }

    #[must_use]
    pub fn remote(&self) -> &str {
        &self.repository.remote
    }

    /// The saved repository has both a path and a URL.
    #[must_use]
    pub fn is_saved_repository_valid(&self) -> bool {
        self.repository.is_complete()
    }
}
