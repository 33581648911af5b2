// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only repository queries.
//!
//! ```text
//! query.rs --> GixBackend   --> .git/ (no subprocess)
//!          \-> ShellBackend --> git status/for-each-ref/log/ls-remote
//! ```
//!
//! Uses gix where it suffices, the git CLI for porcelain it does not cover.

use crate::error::BananaResult;
use std::path::Path;

use super::auth::Credentials;
use super::backend::{GitInspect, GitQuery, GixBackend, ShellBackend};
use super::model::{ChangedFile, GitBranch, GitCommitInfo};

#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    GixBackend::is_git_repo(path)
}

/// Get current branch name (None if HEAD is detached).
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or head resolution fails.
pub fn current_branch(path: &Path) -> BananaResult<Option<String>> {
    GixBackend::current_branch(path)
}

/// Check for uncommitted changes (staged, unstaged, or untracked files).
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or status check fails.
pub fn has_uncommitted_changes(path: &Path) -> BananaResult<bool> {
    GixBackend::has_uncommitted_changes(path)
}

/// Every path with pending changes.
///
/// # Errors
///
/// Returns a `GitError` if `git status` fails.
pub fn changed_files(repo_path: &Path) -> BananaResult<Vec<ChangedFile>> {
    ShellBackend::changed_files(repo_path)
}

/// Local and remote-tracking branches.
///
/// # Errors
///
/// Returns a `GitError` if the refs cannot be listed.
pub fn branches(repo_path: &Path) -> BananaResult<Vec<GitBranch>> {
    ShellBackend::branches(repo_path)
}

/// Newest-first commit history, at most `limit` entries.
///
/// # Errors
///
/// Returns a `GitError` if `git log` fails.
pub fn commit_history(repo_path: &Path, limit: usize) -> BananaResult<Vec<GitCommitInfo>> {
    ShellBackend::commit_history(repo_path, limit)
}

/// Upstream of the current branch.
///
/// # Errors
///
/// Returns a `ProcessError` if git cannot be started.
pub fn upstream(repo_path: &Path) -> BananaResult<Option<String>> {
    ShellBackend::upstream(repo_path)
}

/// Whether HEAD is ahead of its upstream.
///
/// # Errors
///
/// Returns a `GitError` if the commit count cannot be read.
pub fn has_local_commits(repo_path: &Path) -> BananaResult<bool> {
    ShellBackend::has_local_commits(repo_path)
}

/// Fetch URL of `remote`.
///
/// # Errors
///
/// Returns a `ProcessError` if git cannot be started.
pub fn remote_url(repo_path: &Path, remote: &str) -> BananaResult<Option<String>> {
    ShellBackend::remote_url(repo_path, remote)
}

/// Default branch of the remote at `url`.
///
/// # Errors
///
/// Returns a `GitError` if `git ls-remote` fails.
pub fn default_branch(url: &str, auth: Option<&Credentials>) -> BananaResult<Option<String>> {
    ShellBackend::default_branch(url, auth)
}
