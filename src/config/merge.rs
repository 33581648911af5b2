// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Saved repository merging.
//!
//! ```text
//! RepositoryConfig + RepositoryOverride --> field-by-field merge
//! ```
//!
//! Only explicitly set fields (`Some`) in override replace base values.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::types::RepositoryConfig;

/// Repository configuration with optional fields for field-level merging.
///
/// `[repositories.<name>]` entries only name what differs from `[repository]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepositoryOverride {
    /// Local work tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Remote URL used for clone and push.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Remote name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
}

/// Merge a saved repository over the default repository.
pub(super) fn merge_repository_config(
    base: &RepositoryConfig,
    override_config: &RepositoryOverride,
) -> RepositoryConfig {
    RepositoryConfig {
        path: override_config.path.clone().or_else(|| base.path.clone()),
        url: override_config.url.clone().or_else(|| base.url.clone()),
        remote: override_config
            .remote
            .clone()
            .unwrap_or_else(|| base.remote.clone()),
    }
}
