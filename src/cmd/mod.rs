// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> GitService --> render
//!   config: options, inis
//!   repo:   info, clone, status, stage, unstage, discard, commit, log, watch
//!   branch: branches, checkout, push, pull, drop-commits, default-branch
//! ```

pub mod branch;
pub mod config;
pub mod render;
pub mod repo;

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::service::GitService;

/// Service for the default repository or the saved repository `name`.
///
/// `path` (`-C/--path`) replaces the repository path after the saved
/// repository has been merged.
///
/// # Errors
///
/// Returns an error if `name` is not a saved repository or `path` cannot be
/// made absolute.
pub fn service_for(
    config: &Config,
    name: Option<&str>,
    path: Option<&Path>,
) -> Result<GitService> {
    let mut info = config.git_info(name)?;
    if let Some(path) = path {
        info.repository.path = Some(std::path::absolute(path)?);
    }
    Ok(GitService::new(info))
}
