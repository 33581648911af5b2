// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command operations using shell backend.
//!
//! ```text
//! cmd.rs --> ShellBackend --> git (writes, HTTPS auth)
//! ```

use crate::error::BananaResult;
use std::path::Path;

use super::auth::Credentials;
use super::backend::{GitMutation, Identity, ShellBackend};
use super::model::{GitBranch, MergeStatus};

/// Clone a repository into a missing or empty directory.
///
/// # Errors
///
/// Returns a `GitError` if the destination is not empty or the clone fails.
pub fn clone(url: &str, dest: &Path, auth: Option<&Credentials>) -> BananaResult<()> {
    ShellBackend::clone(url, dest, auth)
}

/// Stage every change.
///
/// # Errors
///
/// Returns a `GitError` if `git add` fails.
pub fn stage_all(repo_path: &Path) -> BananaResult<()> {
    ShellBackend::stage_all(repo_path)
}

/// Stage one path.
///
/// # Errors
///
/// Returns a `GitError` if `git add` fails.
pub fn stage_file(repo_path: &Path, file: &str) -> BananaResult<()> {
    ShellBackend::stage_file(repo_path, file)
}

/// Unstage everything.
///
/// # Errors
///
/// Returns a `GitError` if the index cannot be reset.
pub fn unstage_all(repo_path: &Path) -> BananaResult<()> {
    ShellBackend::unstage_all(repo_path)
}

/// Unstage one path.
///
/// # Errors
///
/// Returns a `GitError` if the index cannot be reset.
pub fn unstage_file(repo_path: &Path, file: &str) -> BananaResult<()> {
    ShellBackend::unstage_file(repo_path, file)
}

/// Commit the index, returning the new commit id.
///
/// # Errors
///
/// Returns a `GitError` for an empty message, an empty index, or a failed commit.
pub fn commit(repo_path: &Path, message: &str, identity: &Identity) -> BananaResult<String> {
    ShellBackend::commit(repo_path, message, identity)
}

/// Add or re-point a remote.
///
/// # Errors
///
/// Returns a `GitError` if `git remote` fails.
pub fn ensure_remote(repo_path: &Path, remote: &str, url: &str) -> BananaResult<()> {
    ShellBackend::ensure_remote(repo_path, remote, url)
}

/// Fetch from remote.
///
/// # Errors
///
/// Returns a `GitError` if the fetch operation fails.
pub fn fetch(
    repo_path: &Path,
    remote: &str,
    prune: bool,
    auth: Option<&Credentials>,
) -> BananaResult<()> {
    ShellBackend::fetch(repo_path, remote, prune, auth)
}

/// Push a branch and set its upstream.
///
/// # Errors
///
/// Returns a `GitError` if the push fails.
pub fn push(
    repo_path: &Path,
    remote: &str,
    branch: &str,
    auth: Option<&Credentials>,
) -> BananaResult<()> {
    ShellBackend::push(repo_path, remote, branch, auth)
}

/// Merge `remote/branch` into the current branch.
///
/// # Errors
///
/// Returns a `GitError` if the pull fails for a reason other than conflicts.
pub fn pull(
    repo_path: &Path,
    remote: &str,
    branch: &str,
    identity: &Identity,
    auth: Option<&Credentials>,
) -> BananaResult<MergeStatus> {
    ShellBackend::pull(repo_path, remote, branch, identity, auth)
}

/// Hard reset to the upstream tip.
///
/// # Errors
///
/// Returns `GitError::NoUpstream` when the branch tracks nothing.
pub fn reset_to_upstream(repo_path: &Path) -> BananaResult<()> {
    ShellBackend::reset_to_upstream(repo_path)
}

/// Drop uncommitted changes to tracked files.
///
/// # Errors
///
/// Returns a `GitError` if the reset fails.
pub fn discard_all(repo_path: &Path) -> BananaResult<()> {
    ShellBackend::discard_all(repo_path)
}

/// Restore one path from the index.
///
/// # Errors
///
/// Returns a `GitError` if the checkout fails.
pub fn discard_file(repo_path: &Path, file: &str) -> BananaResult<()> {
    ShellBackend::discard_file(repo_path, file)
}

/// Checkout a local, remote or new branch.
///
/// # Errors
///
/// Returns a `GitError` if the checkout operation fails.
pub fn checkout(repo_path: &Path, name: &str) -> BananaResult<GitBranch> {
    ShellBackend::checkout(repo_path, name)
}

/// Create a branch at HEAD.
///
/// # Errors
///
/// Returns a `GitError` if the branch cannot be created.
pub fn create_branch(repo_path: &Path, name: &str) -> BananaResult<()> {
    ShellBackend::create_branch(repo_path, name)
}

/// Initialize a new repository.
///
/// # Errors
///
/// Returns a `GitError` if repository initialization fails.
pub fn init_repo(path: &Path) -> BananaResult<()> {
    ShellBackend::init_repo(path)
}

/// Set git config value.
///
/// # Errors
///
/// Returns a `GitError` if the config value cannot be set.
pub fn set_config(repo_path: &Path, key: &str, value: &str) -> BananaResult<()> {
    ShellBackend::set_config(repo_path, key, value)
}
