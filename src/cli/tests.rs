// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::global::split_override;
use crate::cli::{Cli, Command};
use crate::git::model::CommitKind;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["banana", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
    assert!(!cli.command.as_ref().is_some_and(Command::needs_config));
}

#[test]
fn test_parse_no_command() {
    let cli = Cli::try_parse_from(["banana"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn test_parse_global_options_after_command() {
    let cli = Cli::try_parse_from([
        "banana", "status", "-l", "5", "-C", "/src/app", "-r", "docs", "--json",
    ])
    .unwrap();
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.path, Some(PathBuf::from("/src/app")));
    assert_eq!(cli.global.repo.as_deref(), Some("docs"));
    assert!(matches!(cli.command, Some(Command::Status(ref args)) if args.json));
}

#[test]
fn test_log_level_out_of_range_rejected() {
    assert!(Cli::try_parse_from(["banana", "-l", "7", "status"]).is_err());
}

#[test]
fn test_parse_commit() {
    let cli =
        Cli::try_parse_from(["banana", "commit", "-m", "add clone dialog", "-k", "feat"]).unwrap();
    let Some(Command::Commit(args)) = cli.command else {
        panic!("expected commit");
    };
    assert_eq!(args.message, "add clone dialog");
    assert_eq!(args.kind, Some(CommitKind::Feat));
}

#[test]
fn test_commit_requires_message_and_known_kind() {
    assert!(Cli::try_parse_from(["banana", "commit"]).is_err());
    assert!(Cli::try_parse_from(["banana", "commit", "-m", "x", "-k", "wip"]).is_err());
}

#[test]
fn test_parse_stage_paths() {
    let cli = Cli::try_parse_from(["banana", "stage", "src/a.rs", "README.md"]).unwrap();
    let Some(Command::Stage(args)) = cli.command else {
        panic!("expected stage");
    };
    assert_eq!(args.paths, ["src/a.rs", "README.md"]);

    let cli = Cli::try_parse_from(["banana", "unstage"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Unstage(ref args)) if args.paths.is_empty()));
}

#[test]
fn test_parse_branches_flags() {
    let cli = Cli::try_parse_from(["banana", "branches", "-a", "-f"]).unwrap();
    let Some(Command::Branches(args)) = cli.command else {
        panic!("expected branches");
    };
    assert!(args.all && args.fetch && !args.remote);

    assert!(Cli::try_parse_from(["banana", "branches", "--remote", "--all"]).is_err());
}

#[test]
fn test_parse_kebab_commands() {
    let cli = Cli::try_parse_from(["banana", "drop-commits"]).unwrap();
    assert!(matches!(cli.command, Some(Command::DropCommits)));

    let cli =
        Cli::try_parse_from(["banana", "default-branch", "https://example.com/a.git"]).unwrap();
    let Some(Command::DefaultBranch(args)) = cli.command else {
        panic!("expected default-branch");
    };
    assert_eq!(args.url.as_deref(), Some("https://example.com/a.git"));
}

#[test]
fn test_parse_watch() {
    let cli = Cli::try_parse_from([
        "banana",
        "watch",
        "--interval",
        "250",
        "-n",
        "5",
        "--updates",
        "2",
    ])
    .unwrap();
    let Some(Command::Watch(args)) = cli.command else {
        panic!("expected watch");
    };
    assert_eq!(args.interval, Some(250));
    assert_eq!(args.limit, Some(5));
    assert_eq!(args.updates, Some(2));

    assert!(Cli::try_parse_from(["banana", "watch", "--interval", "0"]).is_err());
}

#[test]
fn test_zero_counts_rejected() {
    assert!(Cli::try_parse_from(["banana", "watch", "--updates", "0"]).is_err());
    assert!(Cli::try_parse_from(["banana", "watch", "-n", "0"]).is_err());
    assert!(Cli::try_parse_from(["banana", "log", "-n", "0"]).is_err());
    assert!(Cli::try_parse_from(["banana", "log", "-n", "1"]).is_ok());
}

#[test]
fn test_config_overrides() {
    let cli = Cli::try_parse_from([
        "banana",
        "-s",
        "user.email=me@example.com",
        "-l",
        "4",
        "-C",
        "/src/app",
        "info",
    ])
    .unwrap();
    insta::assert_snapshot!(cli.global.to_config_overrides().join("\n"), @r"
    user.email=me@example.com
    global.output_log_level=4
    global.file_log_level=4
    ");
}

#[test]
fn test_split_override() {
    assert_eq!(
        split_override("watch.interval_ms = 500").unwrap(),
        ("watch.interval_ms", "500")
    );
    assert_eq!(
        split_override("repository.url=https://a/b?x=1").unwrap(),
        ("repository.url", "https://a/b?x=1")
    );
    assert!(split_override("no-equals").is_err());
    assert!(split_override("=value").is_err());
}
