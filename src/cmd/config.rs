// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `options` and `inis`.

use crate::config::Config;
use crate::error::Result;

/// Print every option, then the effective values of the selected saved repository.
///
/// # Errors
///
/// Returns an error if `repo` is not a saved repository.
pub fn run_options_command(config: &Config, repo: Option<&str>) -> Result<()> {
    for line in config.format_options() {
        println!("{line}");
    }

    if let Some(name) = repo {
        let selected = config.repository_config(Some(name))?;
        println!();
        println!("effective [repositories.{name}]:");
        println!(
            "  path   = {}",
            selected
                .path
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        );
        println!("  url    = {}", selected.url.unwrap_or_default());
        println!("  remote = {}", selected.remote);
    }
    Ok(())
}

/// Print the config files in load order.
pub fn run_inis_command(config_files: &[String]) {
    if config_files.is_empty() {
        println!("No configuration files loaded, using defaults and BANANA_* variables");
        return;
    }
    for line in config_files {
        println!("{line}");
    }
}
