// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for `GitService` driven from a parsed configuration.

use banana_git::config::Config;
use banana_git::error::GitError;
use banana_git::git::model::{CommitKind, MergeStatus};
use banana_git::service::GitService;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn run_git(args: &[&str], cwd: &Path) -> bool {
    Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .is_ok_and(|o| o.status.success())
}

/// An empty bare remote whose HEAD points at `main`.
fn bare_remote(temp: &TempDir) -> String {
    let remote = temp.path().join("remote.git");
    fs::create_dir_all(&remote).unwrap();
    assert!(run_git(&["init", "--bare", "--quiet"], &remote));
    assert!(run_git(&["symbolic-ref", "HEAD", "refs/heads/main"], &remote));
    remote.to_str().unwrap().to_string()
}

fn service(path: &Path, url: &str) -> GitService {
    let toml = format!(
        r#"
[user]
username = "Banana Tester"
email = "tester@example.com"

[repository]
path = "{}"
url = "{}"
"#,
        path.display(),
        url
    );
    let config = Config::parse(&toml).expect("config");
    GitService::new(config.git_info(None).expect("git info"))
}

fn disable_signing(path: &Path) {
    assert!(run_git(&["config", "commit.gpgsign", "false"], path));
}

#[tokio::test]
async fn clone_stage_commit_push_round_trip() {
    let temp = temp_dir();
    let url = bare_remote(&temp);

    // Seed the remote through a first service.
    let seed = temp.path().join("seed");
    fs::create_dir_all(&seed).unwrap();
    assert!(run_git(&["init", "--quiet"], &seed));
    assert!(run_git(&["symbolic-ref", "HEAD", "refs/heads/main"], &seed));
    disable_signing(&seed);
    let seed_service = service(&seed, &url);
    fs::write(seed.join("README.md"), "# app\n").unwrap();
    seed_service.stage(Vec::new()).await.unwrap();
    seed_service
        .commit("initial import", Some(CommitKind::Chore))
        .await
        .unwrap();
    assert_eq!(seed_service.push(None).await.unwrap(), "main");

    // Clone into the configured path.
    let work = temp.path().join("work");
    let work_service = service(&work, &url);
    work_service.clone_repository(&url, &work).await.unwrap();
    disable_signing(&work);
    assert!(work_service.info().is_saved_repository_valid());
    assert_eq!(
        work_service.current_branch().await.unwrap().as_deref(),
        Some("main")
    );

    let history = work_service.history(10).await.unwrap();
    assert_eq!(history[0].message, "chore: initial import");
    assert_eq!(history[0].author, "Banana Tester");

    fs::write(work.join("notes.txt"), "hello\n").unwrap();
    work_service.stage(vec!["notes.txt".to_string()]).await.unwrap();
    work_service.commit("add notes", None).await.unwrap();
    assert!(work_service.has_local_commits().await.unwrap());

    work_service.push(None).await.unwrap();
    assert!(!work_service.has_local_commits().await.unwrap());

    assert_eq!(seed_service.pull(None).await.unwrap(), MergeStatus::FastForward);
    assert!(seed.join("notes.txt").exists());
    assert_eq!(
        work_service.default_branch(None).await.unwrap().as_deref(),
        Some("main")
    );
}

#[tokio::test]
async fn clone_into_non_empty_directory_fails() {
    let temp = temp_dir();
    let url = bare_remote(&temp);
    let dest = temp.path().join("occupied");
    fs::create_dir_all(&dest).unwrap();
    fs::write(dest.join("keep.txt"), "x").unwrap();

    let err = service(&dest, &url)
        .clone_repository(&url, &dest)
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_git(),
        Some(GitError::DestinationNotEmpty { .. })
    ));
    assert!(dest.join("keep.txt").exists());
}

#[tokio::test]
async fn drop_local_commits_restores_upstream() {
    let temp = temp_dir();
    let url = bare_remote(&temp);

    let work = temp.path().join("work");
    fs::create_dir_all(&work).unwrap();
    assert!(run_git(&["init", "--quiet"], &work));
    assert!(run_git(&["symbolic-ref", "HEAD", "refs/heads/main"], &work));
    disable_signing(&work);
    let work_service = service(&work, &url);

    fs::write(work.join("a.txt"), "a").unwrap();
    work_service.stage(Vec::new()).await.unwrap();
    work_service.commit("first", None).await.unwrap();
    work_service.push(None).await.unwrap();

    fs::write(work.join("b.txt"), "b").unwrap();
    work_service.stage(Vec::new()).await.unwrap();
    work_service.commit("second", None).await.unwrap();
    assert!(work_service.has_local_commits().await.unwrap());

    work_service.drop_local_commits().await.unwrap();
    assert!(!work_service.has_local_commits().await.unwrap());
    assert!(!work.join("b.txt").exists());

    let snapshot = work_service.snapshot(5).await.unwrap();
    assert_eq!(snapshot.name, "work");
    assert_eq!(snapshot.history.len(), 1);
    assert!(snapshot.changes.is_empty());
}
