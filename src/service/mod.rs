// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository service: one async method per user action.
//!
//! ```text
//! cmd/*  --> GitService::op().await
//!                 |
//!                 v
//!        spawn_blocking(git::query / git::cmd)
//!                 |
//!          Err -> error!("[repo/op] ...") -> caller
//! ```
//!
//! Every call re-validates the repository path and opens the repository
//! afresh; nothing is cached between calls.

pub mod watch;


use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::config::types::GitInfo;
use crate::error::{BananaError, BananaResult, ConfigError, GitError, bail_out};
use crate::git::auth::Credentials;
use crate::git::backend::Identity;
use crate::git::model::{
    ChangedFile, Changes, CommitKind, FileStatus, GitBranch, GitCommitInfo, MergeStatus,
    RepoSnapshot,
};
use crate::git::{cmd, query};
use crate::logging::LogContext;

/// Validate a configured repository path.
///
/// # Errors
///
/// Returns `RepoPathEmpty`, `RepoPathMissing` or `NotARepository`.
pub fn verify_repo_path(path: Option<&Path>) -> Result<PathBuf, GitError> {
    let path = path
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(GitError::RepoPathEmpty)?;
    if !path.exists() {
        return Err(GitError::RepoPathMissing {
            path: path.display().to_string(),
        });
    }
    if !query::is_git_repo(path) {
        return Err(GitError::NotARepository {
            path: path.display().to_string(),
        });
    }
    Ok(path.to_path_buf())
}

/// Git operations on the configured repository.
#[derive(Debug, Clone)]
pub struct GitService {
    info: Arc<GitInfo>,
}

impl GitService {
    #[must_use]
    pub fn new(info: GitInfo) -> Self {
        Self {
            info: Arc::new(info),
        }
    }

    #[must_use]
    pub fn info(&self) -> &GitInfo {
        &self.info
    }

    /// Saved repository name, else the last path component.
    #[must_use]
    pub fn repo_name(&self) -> String {
        self.info
            .name
            .clone()
            .or_else(|| self.info.repository.name())
            .unwrap_or_else(|| "repository".to_string())
    }

    /// The validated work tree path.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` when no valid repository is configured.
    pub fn repo_path(&self) -> BananaResult<PathBuf> {
        Ok(verify_repo_path(self.info.path())?)
    }

    fn context(&self, operation: &str) -> LogContext {
        LogContext::for_repo(self.repo_name()).with_operation(operation)
    }

    fn identity(&self) -> Identity {
        self.info.user.identity()
    }

    fn credentials(&self) -> Option<Credentials> {
        self.info.user.credentials()
    }

    /// Run `f` on the blocking pool, logging a failure before returning it.
    async fn blocking<T, F>(&self, operation: &str, f: F) -> BananaResult<T>
    where
        T: Send + 'static,
        F: FnOnce() -> BananaResult<T> + Send + 'static,
    {
        let ctx = self.context(operation);
        debug!("{}started", ctx.prefix());
        let result = match tokio::task::spawn_blocking(f).await {
            Ok(result) => result,
            Err(e) if e.is_panic() => Err(bail_out(format!("{operation} task panicked"))),
            Err(e) => Err(BananaError::Other(
                format!("{operation} task failed: {e}").into_boxed_str(),
            )),
        };
        if let Err(e) = &result {
            error!("{}{e}", ctx.prefix());
        }
        result
    }

    /// Run `f` with the validated repository path.
    async fn with_repo<T, F>(&self, operation: &str, f: F) -> BananaResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Path) -> BananaResult<T> + Send + 'static,
    {
        let path = self.info.path().map(Path::to_path_buf);
        self.blocking(operation, move || {
            let path = verify_repo_path(path.as_deref())?;
            f(&path)
        })
        .await
    }

    /// Clone `url` into `dest`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::DestinationNotEmpty` or `GitError::CloneFailed`.
    pub async fn clone_repository(&self, url: &str, dest: &Path) -> BananaResult<()> {
        let url = url.to_string();
        let dest = dest.to_path_buf();
        let auth = self.credentials();
        self.blocking("clone", move || {
            cmd::clone(&url, &dest, auth.as_ref())?;
            info!("cloned {url} into {}", dest.display());
            Ok(())
        })
        .await
    }

    /// Current branch, `None` when HEAD is detached.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` when the repository cannot be read.
    pub async fn current_branch(&self) -> BananaResult<Option<String>> {
        self.with_repo("branch", query::current_branch).await
    }

    /// Whether the work tree has staged, unstaged or untracked changes.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` when the status walk fails.
    pub async fn is_dirty(&self) -> BananaResult<bool> {
        self.with_repo("status", query::has_uncommitted_changes).await
    }

    /// Changed files split into staged and unstaged.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` when `git status` fails.
    pub async fn changes(&self) -> BananaResult<Changes> {
        self.with_repo("status", |path| {
            query::changed_files(path).map(Changes::split)
        })
        .await
    }

    /// Branch, changes, local-commit flag and the last `limit` commits.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` when any part cannot be read.
    pub async fn snapshot(&self, limit: usize) -> BananaResult<RepoSnapshot> {
        let name = self.repo_name();
        self.with_repo("status", move |path| {
            Ok(RepoSnapshot {
                name,
                branch: query::current_branch(path)?,
                has_local_commits: query::has_local_commits(path)?,
                changes: Changes::split(query::changed_files(path)?),
                history: query::commit_history(path, limit)?,
            })
        })
        .await
    }

    /// Stage `paths`, or everything when empty.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` when `git add` fails.
    pub async fn stage(&self, paths: Vec<String>) -> BananaResult<()> {
        self.with_repo("stage", move |path| {
            if paths.is_empty() {
                return cmd::stage_all(path);
            }
            paths.iter().try_for_each(|file| cmd::stage_file(path, file))
        })
        .await
    }

    /// Unstage `paths`, or everything when empty.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` when the index cannot be reset.
    pub async fn unstage(&self, paths: Vec<String>) -> BananaResult<()> {
        self.with_repo("unstage", move |path| {
            if paths.is_empty() {
                return cmd::unstage_all(path);
            }
            paths
                .iter()
                .try_for_each(|file| cmd::unstage_file(path, file))
        })
        .await
    }

    /// Commit the staged changes; `kind` prefixes a conventional header.
    ///
    /// # Errors
    ///
    /// Returns `GitError::EmptyCommitMessage` or `GitError::NothingToCommit`.
    pub async fn commit(&self, message: &str, kind: Option<CommitKind>) -> BananaResult<String> {
        let message = match kind {
            Some(kind) if !message.trim().is_empty() => kind.apply(message),
            _ => message.to_string(),
        };
        let identity = self.identity();
        self.with_repo("commit", move |path| {
            let hash = cmd::commit(path, &message, &identity)?;
            info!("committed {}", hash.get(..7).unwrap_or(&hash));
            Ok(hash)
        })
        .await
    }

    /// Push `branch` (default: current) and set its upstream.
    ///
    /// # Errors
    ///
    /// Returns `GitError::DetachedHead` without a branch, or a push failure.
    pub async fn push(&self, branch: Option<String>) -> BananaResult<String> {
        let git_info = Arc::clone(&self.info);
        let auth = self.credentials();
        self.with_repo("push", move |path| {
            prepare_remote(path, &git_info)?;
            let branch = resolve_branch(path, branch)?;
            if !query::branches(path)?
                .iter()
                .any(|b| !b.is_remote && b.name == branch)
            {
                return Err(GitError::BranchNotFound { branch }.into());
            }
            cmd::push(path, git_info.remote(), &branch, auth.as_ref())?;
            info!("pushed {branch} to {}", git_info.remote());
            Ok(branch)
        })
        .await
    }

    /// Pull `branch` (default: current) from the configured remote.
    ///
    /// # Errors
    ///
    /// Returns `GitError::DetachedHead` without a branch, or a pull failure.
    pub async fn pull(&self, branch: Option<String>) -> BananaResult<MergeStatus> {
        let git_info = Arc::clone(&self.info);
        let identity = self.identity();
        let auth = self.credentials();
        self.with_repo("pull", move |path| {
            prepare_remote(path, &git_info)?;
            let branch = resolve_branch(path, branch)?;
            cmd::pull(path, git_info.remote(), &branch, &identity, auth.as_ref())
        })
        .await
    }

    /// Fetch the configured remote, pruning deleted branches.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` when the fetch fails.
    pub async fn fetch(&self) -> BananaResult<()> {
        let git_info = Arc::clone(&self.info);
        let auth = self.credentials();
        self.with_repo("fetch", move |path| {
            prepare_remote(path, &git_info)?;
            cmd::fetch(path, git_info.remote(), true, auth.as_ref())
        })
        .await
    }

    /// Drop commits not yet pushed.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NoUpstream` when the branch tracks nothing.
    pub async fn drop_local_commits(&self) -> BananaResult<()> {
        self.with_repo("drop-commits", cmd::reset_to_upstream)
            .await
    }

    /// Discard changes to `paths`, or to every tracked file when empty.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` when the reset or checkout fails.
    pub async fn discard(&self, paths: Vec<String>) -> BananaResult<()> {
        self.with_repo("discard", move |path| {
            if paths.is_empty() {
                return cmd::discard_all(path);
            }
            paths
                .iter()
                .try_for_each(|file| cmd::discard_file(path, file))
        })
        .await
    }

    /// Local and remote branches, optionally fetching first.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` when fetching or listing fails.
    pub async fn branches(&self, fetch: bool) -> BananaResult<Vec<GitBranch>> {
        if fetch {
            self.fetch().await?;
        }
        self.with_repo("branches", query::branches).await
    }

    /// Check out `name`, creating a local branch when needed.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` when the checkout fails.
    pub async fn checkout(&self, name: &str) -> BananaResult<GitBranch> {
        let name = name.to_string();
        self.with_repo("checkout", move |path| cmd::checkout(path, &name))
            .await
    }

    /// The last `limit` commits of HEAD.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` when `git log` fails.
    pub async fn history(&self, limit: usize) -> BananaResult<Vec<GitCommitInfo>> {
        self.with_repo("log", move |path| query::commit_history(path, limit))
            .await
    }

    /// Whether HEAD has unpushed commits.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` when the commit count cannot be read.
    pub async fn has_local_commits(&self) -> BananaResult<bool> {
        self.with_repo("status", query::has_local_commits)
            .await
    }

    /// Conflicted paths after a pull.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` when `git status` fails.
    pub async fn conflicts(&self) -> BananaResult<Vec<ChangedFile>> {
        self.with_repo("status", |path| {
            Ok(query::changed_files(path)?
                .into_iter()
                .filter(|f| f.status.contains(FileStatus::CONFLICTED))
                .collect())
        })
        .await
    }

    /// Default branch of `url`, or of the saved repository URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` without any URL, or an `ls-remote` failure.
    pub async fn default_branch(&self, url: Option<String>) -> BananaResult<Option<String>> {
        let url = url
            .or_else(|| self.info.url().map(str::to_string))
            .ok_or_else(|| ConfigError::MissingKey {
                section: "repository".to_string(),
                key: "url".to_string(),
            })?;
        let auth = self.credentials();
        self.blocking("default-branch", move || {
            query::default_branch(&url, auth.as_ref())
        })
        .await
    }
}

/// Point the configured remote at the saved URL, if one is set.
fn prepare_remote(path: &Path, info: &GitInfo) -> BananaResult<()> {
    match info.url().filter(|u| !u.trim().is_empty()) {
        Some(url) => cmd::ensure_remote(path, info.remote(), url),
        None if query::remote_url(path, info.remote())?.is_some() => Ok(()),
        None => Err(GitError::RemoteNotFound {
            remote: info.remote().to_string(),
        }
        .into()),
    }
}

fn resolve_branch(path: &Path, branch: Option<String>) -> BananaResult<String> {
    match branch.filter(|b| !b.trim().is_empty()) {
        Some(branch) => Ok(branch),
        None => query::current_branch(path)?.ok_or_else(|| GitError::DetachedHead.into()),
    }
}
