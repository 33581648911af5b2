// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use chrono::Utc;
use std::path::Path;

use super::render::*;
use super::service_for;
use crate::config::Config;
use crate::git::model::{
    ChangedFile, Changes, FileStatus, GitBranch, GitCommitInfo, RepoSnapshot,
};

fn commit(hash: &str, message: &str, is_merge: bool) -> GitCommitInfo {
    GitCommitInfo {
        hash: hash.to_string(),
        author: "Octo Cat".to_string(),
        email: "octocat@example.com".to_string(),
        timestamp: 1_767_225_600, // 2026-01-01 00:00 UTC
        message: message.to_string(),
        is_merge,
    }
}

fn sample_changes() -> Changes {
    Changes::split(vec![
        ChangedFile::new("src/lib.rs", FileStatus::INDEX_MODIFIED | FileStatus::WT_MODIFIED),
        ChangedFile::new("new.txt", FileStatus::WT_NEW),
        ChangedFile::new("docs/guide.md", FileStatus::INDEX_RENAMED).renamed_from("guide.md"),
    ])
}

#[test]
fn test_render_changes() {
    insta::assert_snapshot!(render_changes(&sample_changes()).join("\n"), @r"
    Staged (2):
      modified   src/lib.rs
      renamed    guide.md -> docs/guide.md
    Unstaged (2):
      modified   src/lib.rs
      new        new.txt
    ");
}

#[test]
fn test_render_clean_tree() {
    assert_eq!(
        render_changes(&Changes::default()),
        ["nothing to commit, working tree clean"]
    );
}

#[test]
fn test_render_history() {
    let commits = [
        commit("0123456789abcdef", "Merge branch 'topic'", true),
        commit("fedcba9876543210", "add clone dialog", false),
    ];
    insta::assert_snapshot!(render_history_in(&commits, &Utc).join("\n"), @r"
    0123456 00:00 2026-01-01 Octo Cat         Merge branch 'topic' (merge)
    fedcba9 00:00 2026-01-01 Octo Cat         add clone dialog
    ");
    assert_eq!(render_history_in(&[], &Utc), ["no commits yet"]);
}

#[test]
fn test_render_branches_filters() {
    let mut main = GitBranch::local("main");
    main.is_head = true;
    main.upstream = Some("origin/main".to_string());
    let topic = GitBranch::local("topic");
    let remote = GitBranch {
        name: "origin/main".to_string(),
        canonical_name: "refs/remotes/origin/main".to_string(),
        is_remote: true,
        upstream: None,
        is_head: false,
    };
    let branches = [main, topic, remote];

    insta::assert_snapshot!(render_branches(&branches, BranchFilter::Local).join("\n"), @r"
    * main [origin/main]
      topic
    ");
    assert_eq!(
        render_branches(&branches, BranchFilter::Remote),
        ["  origin/main"]
    );
    assert_eq!(render_branches(&branches, BranchFilter::All).len(), 3);
}

#[test]
fn test_branch_filter_flags() {
    assert_eq!(BranchFilter::from_flags(false, false), BranchFilter::Local);
    assert_eq!(BranchFilter::from_flags(true, false), BranchFilter::Remote);
    assert_eq!(BranchFilter::from_flags(false, true), BranchFilter::All);
}

#[test]
fn test_render_snapshot() {
    let snapshot = RepoSnapshot {
        name: "app".to_string(),
        branch: Some("main".to_string()),
        has_local_commits: true,
        changes: Changes::default(),
        history: vec![commit("0123456789abcdef", "init", false)],
    };
    insta::assert_snapshot!(render_snapshot_in(&snapshot, &Utc).join("\n"), @r"
    app: On branch main
    Local commits not pushed yet

    nothing to commit, working tree clean

    History:
      0123456 00:00 2026-01-01 Octo Cat         init
    ");

    let detached = RepoSnapshot {
        branch: None,
        has_local_commits: false,
        ..snapshot
    };
    assert_eq!(render_snapshot_in(&detached, &Utc)[0], "app: HEAD detached");
}

#[test]
fn test_snapshot_json_shape() {
    let snapshot = RepoSnapshot {
        name: "app".to_string(),
        branch: None,
        has_local_commits: false,
        changes: sample_changes(),
        history: Vec::new(),
    };
    let value: serde_json::Value = serde_json::from_str(&to_json(&snapshot).unwrap()).unwrap();
    assert!(value["branch"].is_null());
    assert_eq!(value["staged"][1]["status"], "renamed");
    assert_eq!(value["staged"][1]["original_path"], "guide.md");
    assert!(value["unstaged"][1].get("original_path").is_none());

    let line = to_json_line(&snapshot).unwrap();
    assert!(!line.contains('\n'));
}

#[test]
fn test_service_for_unknown_saved_repository() {
    let config = Config::default();
    assert!(service_for(&config, Some("nope"), None).is_err());
    let service = service_for(&config, None, None).unwrap();
    assert_eq!(service.repo_name(), "repository");
}

#[test]
fn test_path_flag_wins_over_saved_repository() {
    let config = Config::builder()
        .add_toml_str(
            "[repository]\npath = \"/src/app\"\n\n[repositories.docs]\npath = \"/src/docs\"\n",
        )
        .build()
        .unwrap();

    let saved = service_for(&config, Some("docs"), None).unwrap();
    assert_eq!(saved.info().path(), Some(Path::new("/src/docs")));

    let flagged = service_for(&config, Some("docs"), Some(Path::new("/work/site"))).unwrap();
    assert_eq!(flagged.info().path(), Some(Path::new("/work/site")));
    assert_eq!(flagged.info().name.as_deref(), Some("docs"));

    let relative = service_for(&config, None, Some(Path::new("site"))).unwrap();
    let expected = std::env::current_dir().unwrap().join("site");
    assert_eq!(relative.info().path(), Some(expected.as_path()));
}
