// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::git::backend::{Identity, ShellBackend};
use crate::git::model::{Changes, FileStatus};
use crate::git::{cmd, query};
use std::path::Path;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Initialize a repository on `main` with one commit containing `a.txt`.
fn init_test_repo_with_commit(path: &Path) {
    cmd::init_repo(path).expect("init");
    cmd::set_config(path, "user.name", "Test").expect("user.name");
    cmd::set_config(path, "user.email", "test@example.com").expect("user.email");
    cmd::set_config(path, "commit.gpgsign", "false").expect("gpgsign");
    ShellBackend::git_command(&["symbolic-ref", "HEAD", "refs/heads/main"], path)
        .expect("initial branch");
    std::fs::write(path.join("a.txt"), "a\n").expect("write");
    cmd::stage_all(path).expect("stage");
    cmd::commit(path, "Initial commit", &Identity::default()).expect("commit");
}

#[test]
fn test_is_git_repo_from_subdirectory() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());
    let nested = temp.path().join("src").join("deep");
    std::fs::create_dir_all(&nested).unwrap();

    assert!(query::is_git_repo(&nested));
    assert_eq!(query::current_branch(&nested).unwrap().as_deref(), Some("main"));
}

#[test]
fn test_changed_files_split_into_staged_and_unstaged() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());

    std::fs::write(temp.path().join("a.txt"), "a\nb\n").unwrap();
    cmd::stage_file(temp.path(), "a.txt").unwrap();
    std::fs::write(temp.path().join("a.txt"), "a\nb\nc\n").unwrap();
    std::fs::write(temp.path().join("new.txt"), "n").unwrap();

    let changes = Changes::split(query::changed_files(temp.path()).unwrap());
    assert_eq!(changes.staged.len(), 1);
    assert_eq!(changes.staged[0].path, "a.txt");
    assert_eq!(changes.unstaged.len(), 2);
    assert!(
        changes
            .unstaged
            .iter()
            .any(|f| f.path == "new.txt" && f.status == FileStatus::WT_NEW)
    );
}

#[test]
fn test_staged_rename_reports_original_path() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());

    std::fs::rename(temp.path().join("a.txt"), temp.path().join("b.txt")).unwrap();
    cmd::stage_all(temp.path()).unwrap();

    let files = query::changed_files(temp.path()).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, "b.txt");
    assert_eq!(files[0].original_path.as_deref(), Some("a.txt"));
    assert_eq!(files[0].status, FileStatus::INDEX_RENAMED);
}

#[test]
fn test_cloned_branches_hide_remote_head_and_checkout_tracks() {
    let temp = temp_dir();
    let origin = temp.path().join("origin");
    std::fs::create_dir_all(&origin).unwrap();
    init_test_repo_with_commit(&origin);
    cmd::create_branch(&origin, "topic").unwrap();

    let clone = temp.path().join("clone");
    cmd::clone(origin.to_str().unwrap(), &clone, None).unwrap();

    let branches = query::branches(&clone).unwrap();
    assert!(branches.iter().all(|b| !b.canonical_name.ends_with("/HEAD")));
    let remote: Vec<_> = branches
        .iter()
        .filter(|b| b.is_remote)
        .map(|b| b.name.as_str())
        .collect();
    assert_eq!(remote, ["origin/main", "origin/topic"]);

    let topic = cmd::checkout(&clone, "origin/topic").unwrap();
    assert_eq!(topic.name, "topic");
    assert!(topic.is_head);
    assert_eq!(topic.upstream.as_deref(), Some("origin/topic"));
    assert_eq!(query::current_branch(&clone).unwrap().as_deref(), Some("topic"));
}

#[test]
fn test_fetch_prune_drops_deleted_remote_branch() {
    let temp = temp_dir();
    let origin = temp.path().join("origin");
    std::fs::create_dir_all(&origin).unwrap();
    init_test_repo_with_commit(&origin);
    cmd::create_branch(&origin, "gone").unwrap();

    let clone = temp.path().join("clone");
    cmd::clone(origin.to_str().unwrap(), &clone, None).unwrap();
    assert!(query::branches(&clone).unwrap().iter().any(|b| b.name == "origin/gone"));

    ShellBackend::git_command(&["branch", "-D", "gone"], &origin).unwrap();
    cmd::fetch(&clone, "origin", true, None).unwrap();
    assert!(!query::branches(&clone).unwrap().iter().any(|b| b.name == "origin/gone"));
}
