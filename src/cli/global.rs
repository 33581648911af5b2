// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --path DIR        ← Repository work tree, wins over --repo NAME's path
//! --repo NAME       ← Saved repository to operate on
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (overrides --log-level)
//! --set KEY=VAL     ← Direct config override
//!
//! Precedence: CLI flags > --set > env > --config > banana.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append, global = true)]
    pub configs: Vec<PathBuf>,

    /// Disables loading `banana.toml` from the current directory.
    #[arg(long = "no-default-config", global = true)]
    pub no_default_config: bool,

    /// Repository work tree, overrides `repository.path` and the saved
    /// repository's path.
    #[arg(short = 'C', long = "path", value_name = "DIR", global = true)]
    pub path: Option<PathBuf>,

    /// Saved repository from `[repositories.<NAME>]` to operate on.
    #[arg(short = 'r', long = "repo", value_name = "NAME", global = true)]
    pub repo: Option<String>,

    /// Sets an option, such as 'watch.interval_ms=500' or 'user.email=me@example.com'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append, global = true)]
    pub options: Vec<String>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6), global = true
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6), global = true
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Converts command-line options to `key=value` configuration overrides.
    ///
    /// `--set` values come first so the dedicated flags win.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if let Some(level) = self.log_level {
            overrides.push(format!("global.output_log_level={level}"));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(format!("global.file_log_level={level}"));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(format!("global.log_file={}", path.display()));
        }

        overrides
    }
}

/// Split one `key=value` override.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` without `=` or with an empty key.
pub fn split_override(option: &str) -> Result<(&str, &str), ConfigError> {
    match option.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(ConfigError::InvalidValue {
            section: "cli".to_string(),
            key: "--set".to_string(),
            message: format!("expected KEY=VALUE, got '{option}'"),
        }),
    }
}
