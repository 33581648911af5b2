// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for banana-git.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. banana.toml (cwd)
//! 3. --config
//! 4. BANANA_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! BANANA_USER__TOKEN=ghp_...        → user.token = "ghp_..."
//! BANANA_REPOSITORY__PATH=/src/app  → repository.path = "/src/app"
//! BANANA_WATCH__INTERVAL_MS=500     → watch.interval_ms = 500
//! ```
//!
//! # Saved Repositories
//!
//! ```toml
//! [repository]
//! url = "https://github.com/octocat/app.git"
//! path = "/src/app"
//!
//! [repositories.docs]
//! path = "/src/docs" # remote and url inherited unless set
//! ```

pub mod loader;
pub mod merge;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use merge::RepositoryOverride;
use types::{GitInfo, GlobalConfig, RepositoryConfig, UserConfig, WatchConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Git user and credentials.
    pub user: UserConfig,
    /// Default saved repository.
    pub repository: RepositoryConfig,
    /// Named saved repositories (field-level merging over `repository`).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub repositories: BTreeMap<String, RepositoryOverride>,
    /// Status polling.
    pub watch: WatchConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use banana_git::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("banana.toml")
    ///     .add_toml_file_optional("local.toml")
    ///     .with_env_prefix("BANANA")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Get the repository configuration for a saved repository.
    ///
    /// `None` selects `[repository]`; a name selects `[repositories.<name>]`
    /// merged over `[repository]`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for an unknown name.
    pub fn repository_config(
        &self,
        name: Option<&str>,
    ) -> std::result::Result<RepositoryConfig, ConfigError> {
        let Some(name) = name else {
            return Ok(self.repository.clone());
        };
        self.repositories
            .get(name)
            .map(|config| merge::merge_repository_config(&self.repository, config))
            .ok_or_else(|| ConfigError::NotFound(format!("saved repository '{name}'")))
    }

    /// User plus the selected saved repository.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for an unknown repository name.
    pub fn git_info(&self, name: Option<&str>) -> std::result::Result<GitInfo, ConfigError> {
        Ok(GitInfo {
            name: name.map(str::to_string),
            user: self.user.clone(),
            repository: self.repository_config(name)?,
        })
    }

    /// Resolve all paths and validate configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a repository path cannot be made absolute or a
    /// watch option is zero.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        self.repository.resolve()?;
        for repo in self.repositories.values_mut() {
            if let Some(path) = &repo.path
                && !path.as_os_str().is_empty()
                && path.is_relative()
            {
                repo.path = Some(std::path::absolute(path)?);
            }
        }

        if self.watch.interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                section: "watch".to_string(),
                key: "interval_ms".to_string(),
                message: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.watch.history_limit == 0 {
            return Err(ConfigError::InvalidValue {
                section: "watch".to_string(),
                key: "history_limit".to_string(),
                message: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Returns a vector of formatted strings representing all configuration options.
    /// The token is hidden with a `[hidden]` marker.
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_user_options(&mut options);
        self.format_repository_options(&mut options);
        self.format_watch_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert("global.log_file".into(), fmt_path(self.global.log_file.as_ref()));
    }

    fn format_user_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "user.username".into(),
            self.user.username.clone().unwrap_or_default(),
        );
        options.insert(
            "user.email".into(),
            self.user.email.clone().unwrap_or_default(),
        );
        if self.user.token.as_ref().is_some_and(|t| !t.is_empty()) {
            options.insert("user.token".into(), "[hidden]".into());
        }
    }

    fn format_repository_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "repository.path".into(),
            fmt_path(self.repository.path.as_ref()),
        );
        options.insert(
            "repository.url".into(),
            self.repository.url.clone().unwrap_or_default(),
        );
        options.insert("repository.remote".into(), self.repository.remote.clone());

        for (name, repo) in &self.repositories {
            if let Some(path) = &repo.path {
                options.insert(
                    format!("repositories.{name}.path"),
                    path.display().to_string(),
                );
            }
            if let Some(url) = &repo.url {
                options.insert(format!("repositories.{name}.url"), url.clone());
            }
            if let Some(remote) = &repo.remote {
                options.insert(format!("repositories.{name}.remote"), remote.clone());
            }
        }
    }

    fn format_watch_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "watch.interval_ms".into(),
            self.watch.interval_ms.to_string(),
        );
        options.insert(
            "watch.history_limit".into(),
            self.watch.history_limit.to_string(),
        );
    }
}

fn fmt_path(path: Option<&PathBuf>) -> String {
    path.map_or_else(String::new, |p| p.display().to_string())
}
