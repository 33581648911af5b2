// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML files on disk.

use banana_git::config::Config;
use banana_git::logging::LogLevel;
use std::fs;
use std::path::PathBuf;

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("banana.toml");
    fs::write(
        &path,
        r#"
[user]
username = "octocat"
email = "octocat@example.com"

[repository]
path = "/src/app"
url = "https://github.com/octocat/app.git"
"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.user.username.as_deref(), Some("octocat"));
    assert!(config.git_info(None).unwrap().is_saved_repository_valid());
}

#[test]
fn config_missing_required_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::from_file(dir.path().join("absent.toml")).is_err());
}

#[test]
fn config_later_files_override_earlier() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.toml");
    let local = dir.path().join("local.toml");
    fs::write(
        &base,
        "[repository]\npath = \"/src/app\"\nurl = \"https://example.com/app.git\"\n\n[watch]\ninterval_ms = 2000\n",
    )
    .unwrap();
    fs::write(&local, "[repository]\nremote = \"upstream\"\n").unwrap();

    let loader = Config::builder()
        .add_toml_file(&base)
        .add_toml_file_optional(&local)
        .add_toml_file_optional(dir.path().join("missing.toml"));
    assert_eq!(loader.format_loaded_files().len(), 2);

    let config = loader.build().unwrap();
    assert_eq!(config.repository.path, Some(PathBuf::from("/src/app")));
    assert_eq!(config.repository.remote, "upstream");
    assert_eq!(config.watch.interval_ms, 2000);
}

#[test]
fn config_overrides_beat_files() {
    let config = Config::builder()
        .add_toml_str("[global]\noutput_log_level = 2\n")
        .set("global.output_log_level", "5")
        .unwrap()
        .set("user.token", "ghp_override")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::TRACE);
    assert!(config.user.token.is_some());
    assert!(!format!("{:?}", config.user).contains("ghp_override"));
}

// =============================================================================
// Saved repositories
// =============================================================================

#[test]
fn config_saved_repositories() {
    let config = Config::parse(
        r#"
[user]
username = "octocat"

[repository]
url = "https://github.com/octocat/app.git"
path = "/src/app"

[repositories.docs]
url = "https://github.com/octocat/docs.git"
path = "/src/docs"

[repositories.fork]
remote = "fork"
"#,
    )
    .unwrap();

    let docs = config.git_info(Some("docs")).unwrap();
    assert_eq!(docs.url(), Some("https://github.com/octocat/docs.git"));
    assert_eq!(docs.name.as_deref(), Some("docs"));
    assert_eq!(docs.user.username.as_deref(), Some("octocat"));

    let fork = config.git_info(Some("fork")).unwrap();
    assert_eq!(fork.url(), Some("https://github.com/octocat/app.git"));
    assert_eq!(fork.remote(), "fork");

    assert!(config.git_info(Some("missing")).is_err());
}

#[test]
fn config_invalid_values_rejected() {
    assert!(Config::parse("[watch]\ninterval_ms = \"soon\"\n").is_err());
    assert!(Config::parse("[global]\nfile_log_level = 9\n").is_err());
    assert!(Config::parse("[repository]\nbranch = \"main\"\n").is_err());
}
