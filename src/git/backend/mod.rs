// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery    (read)       --> GixBackend   (pure Rust gix)
//! GitInspect  (porcelain)  --> ShellBackend (git CLI, parsed output)
//! GitMutation (write)      --> ShellBackend (git CLI)
//! ```

use crate::error::{BananaResult, GitError, GixError, ProcessError};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::OnceLock;
use tracing::{debug, warn};

use super::auth::{Credentials, HEADER_KEY};
use super::model::{ChangedFile, FileStatus, GitBranch, GitCommitInfo, MergeStatus};
use super::parse;

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
///
/// Implementors provide methods to inspect repository state without modification.
pub trait GitQuery {
    /// Check if path is inside a git work tree.
    fn is_git_repo(path: &Path) -> bool;

    /// Get current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    fn current_branch(path: &Path) -> BananaResult<Option<String>>;

    /// Check for uncommitted changes (staged, unstaged, or untracked files).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or status check fails.
    fn has_uncommitted_changes(path: &Path) -> BananaResult<bool>;
}

// --- Inspect Trait (Porcelain reads) ---

/// Repository reads that need the parsed output of the git CLI.
pub trait GitInspect {
    /// Every path with pending changes, untracked files included.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git status` fails.
    fn changed_files(repo_path: &Path) -> BananaResult<Vec<ChangedFile>>;

    /// Local and remote-tracking branches, without `refs/remotes/*/HEAD`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git for-each-ref` fails or prints unexpected rows.
    fn branches(repo_path: &Path) -> BananaResult<Vec<GitBranch>>;

    /// Newest-first history of HEAD, at most `limit` entries.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git log` fails or prints unexpected records.
    fn commit_history(repo_path: &Path, limit: usize) -> BananaResult<Vec<GitCommitInfo>>;

    /// Upstream of the current branch, e.g. `origin/main`.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if git cannot be started.
    fn upstream(repo_path: &Path) -> BananaResult<Option<String>>;

    /// Whether HEAD has commits its upstream does not.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the commit count cannot be read.
    fn has_local_commits(repo_path: &Path) -> BananaResult<bool>;

    /// Fetch URL of `remote`, if configured.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if git cannot be started.
    fn remote_url(repo_path: &Path, remote: &str) -> BananaResult<Option<String>>;

    /// Default branch advertised by the remote at `url`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git ls-remote` fails.
    fn default_branch(url: &str, auth: Option<&Credentials>) -> BananaResult<Option<String>>;
}

// --- Mutation Trait (Write operations) ---

/// Author and committer override for commits and merge commits.
///
/// Unset fields fall back to git's own configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Identity {
    #[must_use]
    pub fn new(name: Option<&str>, email: Option<&str>) -> Self {
        let keep = |s: Option<&str>| s.map(str::trim).filter(|s| !s.is_empty()).map(String::from);
        Self {
            name: keep(name),
            email: keep(email),
        }
    }

    fn config_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(name) = &self.name {
            args.extend(["-c".to_string(), format!("user.name={name}")]);
        }
        if let Some(email) = &self.email {
            args.extend(["-c".to_string(), format!("user.email={email}")]);
        }
        args
    }
}

/// Git mutation operations that modify repository state.
pub trait GitMutation {
    /// Clone `url` into `dest`, which must be missing or empty.
    ///
    /// # Errors
    ///
    /// Returns `GitError::DestinationNotEmpty` or `GitError::CloneFailed`.
    fn clone(url: &str, dest: &Path, auth: Option<&Credentials>) -> BananaResult<()>;

    /// Stage every change. No-op on a clean work tree.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git add` fails.
    fn stage_all(repo_path: &Path) -> BananaResult<()>;

    /// Stage one repository-relative path.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git add` fails.
    fn stage_file(repo_path: &Path, file: &str) -> BananaResult<()>;

    /// Unstage everything. No-op when nothing is staged.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the index cannot be reset.
    fn unstage_all(repo_path: &Path) -> BananaResult<()>;

    /// Unstage one path, also on a branch without commits.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the index cannot be reset.
    fn unstage_file(repo_path: &Path, file: &str) -> BananaResult<()>;

    /// Commit the index and return the new commit id.
    ///
    /// # Errors
    ///
    /// Returns `GitError::EmptyCommitMessage`, `GitError::NothingToCommit`,
    /// or `GitError::CommandFailed`.
    fn commit(repo_path: &Path, message: &str, identity: &Identity) -> BananaResult<String>;

    /// Add `remote` pointing at `url`, or re-point it.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git remote` fails.
    fn ensure_remote(repo_path: &Path, remote: &str, url: &str) -> BananaResult<()>;

    /// Fetch from `remote`, optionally pruning deleted remote branches.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the fetch fails.
    fn fetch(
        repo_path: &Path,
        remote: &str,
        prune: bool,
        auth: Option<&Credentials>,
    ) -> BananaResult<()>;

    /// Push `branch` to `remote` and record it as upstream.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the push fails.
    fn push(
        repo_path: &Path,
        remote: &str,
        branch: &str,
        auth: Option<&Credentials>,
    ) -> BananaResult<()>;

    /// Merge `remote/branch` into the current branch.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the pull fails for a reason other than conflicts.
    fn pull(
        repo_path: &Path,
        remote: &str,
        branch: &str,
        identity: &Identity,
        auth: Option<&Credentials>,
    ) -> BananaResult<MergeStatus>;

    /// Hard reset the current branch to its upstream.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NoUpstream` without an upstream.
    fn reset_to_upstream(repo_path: &Path) -> BananaResult<()>;

    /// Drop all uncommitted changes to tracked files.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the reset fails.
    fn discard_all(repo_path: &Path) -> BananaResult<()>;

    /// Restore one path from the index.
    ///
    /// # Errors
    ///
    /// Returns `GitError::PathNotTracked` for a path git does not know, or a
    /// `GitError` if the checkout fails.
    fn discard_file(repo_path: &Path, file: &str) -> BananaResult<()>;

    /// Check out a local branch, a remote branch, or a new branch at HEAD.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the checkout fails.
    fn checkout(repo_path: &Path, name: &str) -> BananaResult<GitBranch>;

    /// Create a branch at HEAD without checking it out.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the branch cannot be created.
    fn create_branch(repo_path: &Path, name: &str) -> BananaResult<()>;

    /// Initialize a new repository.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository initialization fails.
    fn init_repo(path: &Path) -> BananaResult<()>;

    /// Set git config value.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the config value cannot be set.
    fn set_config(repo_path: &Path, key: &str, value: &str) -> BananaResult<()>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
///
/// Read-only; repositories are discovered per call and dropped on return.
pub struct GixBackend;

fn discover(path: &Path) -> Result<gix::Repository, GitError> {
    gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))
}

impl GitQuery for GixBackend {
    fn is_git_repo(path: &Path) -> bool {
        gix::discover(path).is_ok_and(|repo| repo.workdir().is_some())
    }

    fn current_branch(path: &Path) -> BananaResult<Option<String>> {
        let repo = discover(path)?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }

    fn has_uncommitted_changes(path: &Path) -> BananaResult<bool> {
        use gix::status::UntrackedFiles;

        let repo = discover(path)?;

        let has_changes = repo
            .status(gix::progress::Discard)
            .map_err(|_| GitError::CommandFailed {
                command: "status".to_string(),
                message: "failed to prepare status check".to_string(),
            })?
            .untracked_files(UntrackedFiles::Files)
            .into_iter(None)
            .map_err(|_| GitError::CommandFailed {
                command: "status".to_string(),
                message: "failed to check repository status".to_string(),
            })?
            .next()
            .is_some();

        Ok(has_changes)
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Resolved path of the `git` executable.
static GIT_EXECUTABLE: OnceLock<PathBuf> = OnceLock::new();

fn git_executable() -> Result<PathBuf, ProcessError> {
    if let Some(path) = GIT_EXECUTABLE.get() {
        return Ok(path.clone());
    }
    let path = which::which("git").map_err(|_| ProcessError::ExecutableNotFound {
        name: "git".to_string(),
    })?;
    Ok(GIT_EXECUTABLE.get_or_init(|| path).clone())
}

/// Raw result of one git invocation.
#[derive(Debug)]
pub(crate) struct GitOutput {
    /// Command line as shown in logs and errors.
    pub(crate) command: String,
    pub(crate) success: bool,
    pub(crate) stdout: Vec<u8>,
    pub(crate) stderr: String,
}

impl GitOutput {
    pub(crate) fn stdout_str(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    /// Turn a non-zero exit into `GitError::CommandFailed`.
    pub(crate) fn checked(self) -> Result<Self, GitError> {
        if self.success {
            Ok(self)
        } else {
            Err(self.into_error())
        }
    }

    pub(crate) fn into_error(self) -> GitError {
        let message = if self.stderr.trim().is_empty() {
            self.stdout_str().trim().to_string()
        } else {
            self.stderr.trim().to_string()
        };
        GitError::CommandFailed {
            command: self.command,
            message,
        }
    }
}

/// Shell-based git backend using git CLI.
///
/// Required for:
/// - HTTPS authentication through a one-shot `http.extraHeader`
/// - Writes (staging, commits, merges, remotes)
/// - Porcelain reads gix does not cover (branch tracking, log, ls-remote)
pub struct ShellBackend;

impl ShellBackend {
    /// Run git and capture its output regardless of the exit status.
    ///
    /// Sets `GCM_INTERACTIVE=never`, `GIT_TERMINAL_PROMPT=0` and `LC_ALL=C`.
    /// Credentials travel in `GIT_CONFIG_*` variables, never in the argument list.
    pub(crate) fn run<S: AsRef<str>>(
        args: &[S],
        cwd: &Path,
        auth: Option<&Credentials>,
    ) -> BananaResult<GitOutput> {
        let git = git_executable()?;
        let mut shown = vec!["git".to_string()];
        let mut cmd = Command::new(git);
        if let Some(creds) = auth {
            cmd.env("GIT_CONFIG_COUNT", "1")
                .env("GIT_CONFIG_KEY_0", HEADER_KEY)
                .env("GIT_CONFIG_VALUE_0", creds.header_value());
        }
        for arg in args {
            cmd.arg(arg.as_ref());
            shown.push(arg.as_ref().to_string());
        }
        let command = shown.join(" ");

        debug!(
            command = %command,
            cwd = %cwd.display(),
            auth = auth.is_some(),
            "running git"
        );

        let output = cmd
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .env("LC_ALL", "C")
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ProcessError::SpawnFailed {
                command: command.clone(),
                source,
            })?;

        Ok(GitOutput {
            command,
            success: output.status.success(),
            stdout: output.stdout,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// Execute a git command and return its trimmed stdout.
    pub(crate) fn git_command<S: AsRef<str>>(args: &[S], cwd: &Path) -> BananaResult<String> {
        let output = Self::run(args, cwd, None)?.checked()?;
        Ok(output.stdout_str().trim().to_string())
    }

    /// Commit id of `rev`, `None` when it does not resolve.
    fn rev_parse(repo_path: &Path, rev: &str) -> BananaResult<Option<String>> {
        let output = Self::run(&["rev-parse", "--verify", "-q", rev], repo_path, None)?;
        Ok(output
            .success
            .then(|| output.stdout_str().trim().to_string()))
    }

    /// Whether HEAD points at a commit (false on an unborn branch).
    fn has_head(repo_path: &Path) -> BananaResult<bool> {
        Ok(Self::rev_parse(repo_path, "HEAD")?.is_some())
    }

    /// Whether `file` has an index entry.
    fn is_tracked(repo_path: &Path, file: &str) -> BananaResult<bool> {
        let output = Self::run(&["ls-files", "--error-unmatch", "--", file], repo_path, None)?;
        Ok(output.success)
    }

    fn has_staged_changes(repo_path: &Path) -> BananaResult<bool> {
        Ok(Self::changed_files(repo_path)?
            .iter()
            .any(|f| f.status.is_staged()))
    }
}

impl GitInspect for ShellBackend {
    fn changed_files(repo_path: &Path) -> BananaResult<Vec<ChangedFile>> {
        let output = Self::run(
            &["status", "--porcelain=v1", "-z", "--untracked-files=all"],
            repo_path,
            None,
        )?
        .checked()?;
        Ok(parse::parse_status_z(&output.stdout))
    }

    fn branches(repo_path: &Path) -> BananaResult<Vec<GitBranch>> {
        let output = Self::git_command(
            &["for-each-ref", parse::BRANCH_FORMAT, "refs/heads", "refs/remotes"],
            repo_path,
        )?;
        parse::parse_branches(&output)
    }

    fn commit_history(repo_path: &Path, limit: usize) -> BananaResult<Vec<GitCommitInfo>> {
        if limit == 0 || !Self::has_head(repo_path)? {
            return Ok(Vec::new());
        }
        let count = format!("-n{limit}");
        let output = Self::run(&["log", count.as_str(), parse::LOG_FORMAT], repo_path, None)?
            .checked()?;
        parse::parse_log(&output.stdout_str())
    }

    fn upstream(repo_path: &Path) -> BananaResult<Option<String>> {
        let output = Self::run(
            &["rev-parse", "--abbrev-ref", "--symbolic-full-name", "@{u}"],
            repo_path,
            None,
        )?;
        let name = output.stdout_str().trim().to_string();
        Ok((output.success && !name.is_empty()).then_some(name))
    }

    fn has_local_commits(repo_path: &Path) -> BananaResult<bool> {
        if Self::upstream(repo_path)?.is_none() {
            return Ok(false);
        }
        let count = Self::git_command(&["rev-list", "--count", "@{u}..HEAD"], repo_path)?;
        let count = count
            .parse::<u64>()
            .map_err(|_| GitError::UnexpectedOutput {
                command: "git rev-list --count".to_string(),
                line: count.clone(),
            })?;
        Ok(count > 0)
    }

    fn remote_url(repo_path: &Path, remote: &str) -> BananaResult<Option<String>> {
        let output = Self::run(&["remote", "get-url", remote], repo_path, None)?;
        let url = output.stdout_str().trim().to_string();
        Ok((output.success && !url.is_empty()).then_some(url))
    }

    fn default_branch(url: &str, auth: Option<&Credentials>) -> BananaResult<Option<String>> {
        let output =
            Self::run(&["ls-remote", "--symref", url, "HEAD"], Path::new("."), auth)?.checked()?;
        Ok(parse::parse_symref_head(&output.stdout_str()))
    }
}

impl GitMutation for ShellBackend {
    fn clone(url: &str, dest: &Path, auth: Option<&Credentials>) -> BananaResult<()> {
        let dest = std::path::absolute(dest)?;
        if dest.exists() {
            let mut entries = std::fs::read_dir(&dest)?;
            if entries.next().is_some() {
                return Err(GitError::DestinationNotEmpty {
                    path: dest.display().to_string(),
                }
                .into());
            }
        }

        let dest_str = dest.to_str().ok_or_else(|| GitError::CloneFailed {
            url: url.to_string(),
            message: "invalid destination path".to_string(),
        })?;
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Relative local URLs resolve against the caller's directory
        Self::run(&["clone", "--quiet", url, dest_str], Path::new("."), auth)?
            .checked()
            .map_err(|e| match e {
                GitError::CommandFailed { message, .. } => GitError::CloneFailed {
                    url: url.to_string(),
                    message,
                },
                other => other,
            })?;
        Ok(())
    }

    fn stage_all(repo_path: &Path) -> BananaResult<()> {
        if !Self::has_uncommitted_changes(repo_path)? {
            debug!("work tree clean, nothing to stage");
            return Ok(());
        }
        Self::git_command(&["add", "--all"], repo_path)?;
        Ok(())
    }

    fn stage_file(repo_path: &Path, file: &str) -> BananaResult<()> {
        Self::git_command(&["add", "--all", "--", file], repo_path)?;
        Ok(())
    }

    fn unstage_all(repo_path: &Path) -> BananaResult<()> {
        if !Self::has_staged_changes(repo_path)? {
            return Ok(());
        }
        if Self::has_head(repo_path)? {
            Self::git_command(&["reset", "-q", "HEAD", "--"], repo_path)?;
        } else {
            Self::git_command(&["rm", "--cached", "-r", "-q", "--", "."], repo_path)?;
        }
        Ok(())
    }

    fn unstage_file(repo_path: &Path, file: &str) -> BananaResult<()> {
        if Self::has_head(repo_path)? {
            Self::git_command(&["reset", "-q", "HEAD", "--", file], repo_path)?;
        } else {
            Self::git_command(&["rm", "--cached", "-q", "--", file], repo_path)?;
        }
        Ok(())
    }

    fn commit(repo_path: &Path, message: &str, identity: &Identity) -> BananaResult<String> {
        let message = message.trim();
        if message.is_empty() {
            return Err(GitError::EmptyCommitMessage.into());
        }
        if !Self::has_staged_changes(repo_path)? {
            return Err(GitError::NothingToCommit.into());
        }

        let mut args = identity.config_args();
        args.extend(["commit".into(), "-q".into(), "-m".into(), message.to_string()]);
        Self::git_command(&args, repo_path)?;
        Self::git_command(&["rev-parse", "HEAD"], repo_path)
    }

    fn ensure_remote(repo_path: &Path, remote: &str, url: &str) -> BananaResult<()> {
        match Self::remote_url(repo_path, remote)? {
            Some(current) if current == url => {}
            Some(_) => {
                Self::git_command(&["remote", "set-url", remote, url], repo_path)?;
            }
            None => {
                Self::git_command(&["remote", "add", remote, url], repo_path)?;
            }
        }
        Ok(())
    }

    fn fetch(
        repo_path: &Path,
        remote: &str,
        prune: bool,
        auth: Option<&Credentials>,
    ) -> BananaResult<()> {
        let mut args = vec!["fetch", "--quiet"];
        if prune {
            args.push("--prune");
        }
        args.push(remote);
        Self::run(&args, repo_path, auth)?.checked()?;
        Ok(())
    }

    fn push(
        repo_path: &Path,
        remote: &str,
        branch: &str,
        auth: Option<&Credentials>,
    ) -> BananaResult<()> {
        Self::run(
            &["push", "--quiet", "--set-upstream", remote, branch],
            repo_path,
            auth,
        )?
        .checked()?;
        Ok(())
    }

    fn pull(
        repo_path: &Path,
        remote: &str,
        branch: &str,
        identity: &Identity,
        auth: Option<&Credentials>,
    ) -> BananaResult<MergeStatus> {
        let mut args = identity.config_args();
        args.extend(
            ["pull", "--no-rebase", "--no-edit", remote, branch].map(String::from),
        );
        let before = Self::rev_parse(repo_path, "HEAD")?;
        let output = Self::run(&args, repo_path, auth)?;

        if !output.success {
            let conflicted: Vec<_> = Self::changed_files(repo_path)?
                .into_iter()
                .filter(|f| f.status.contains(FileStatus::CONFLICTED))
                .collect();
            if conflicted.is_empty() {
                return Err(output.into_error().into());
            }
            for file in &conflicted {
                warn!("conflict found in file {}", file.path);
            }
            return Ok(MergeStatus::Conflicts);
        }

        let after = Self::rev_parse(repo_path, "HEAD")?;
        let fetched = Self::rev_parse(repo_path, "FETCH_HEAD")?;
        Ok(parse::classify_pull(
            before.as_deref(),
            after.as_deref(),
            fetched.as_deref(),
        ))
    }

    fn reset_to_upstream(repo_path: &Path) -> BananaResult<()> {
        if Self::upstream(repo_path)?.is_none() {
            let branch = Self::current_branch(repo_path)?.unwrap_or_else(|| "HEAD".to_string());
            return Err(GitError::NoUpstream { branch }.into());
        }
        Self::git_command(&["reset", "-q", "--hard", "@{u}"], repo_path)?;
        Ok(())
    }

    fn discard_all(repo_path: &Path) -> BananaResult<()> {
        Self::git_command(&["reset", "-q", "--hard", "HEAD"], repo_path)?;
        Ok(())
    }

    fn discard_file(repo_path: &Path, file: &str) -> BananaResult<()> {
        if !Self::is_tracked(repo_path, file)? {
            return Err(GitError::PathNotTracked {
                path: file.to_string(),
            }
            .into());
        }
        Self::git_command(&["checkout", "-q", "--", file], repo_path)?;
        Ok(())
    }

    fn checkout(repo_path: &Path, name: &str) -> BananaResult<GitBranch> {
        let branches = Self::branches(repo_path)?;
        let local_exists = |n: &str| branches.iter().any(|b| !b.is_remote && b.name == n);

        let target = if local_exists(name) {
            Self::git_command(&["checkout", "-q", name], repo_path)?;
            name.to_string()
        } else if let Some(remote) = branches.iter().find(|b| b.is_remote && b.name == name) {
            let local = remote.local_name().to_string();
            if local_exists(&local) {
                Self::git_command(&["checkout", "-q", local.as_str()], repo_path)?;
            } else {
                Self::git_command(
                    &["checkout", "-q", "--track", "-b", local.as_str(), name],
                    repo_path,
                )?;
            }
            local
        } else {
            debug!(branch = name, "branch not found, creating it at HEAD");
            Self::git_command(&["checkout", "-q", "-b", name], repo_path)?;
            name.to_string()
        };

        // Unborn branches have no ref yet
        Ok(Self::branches(repo_path)?
            .into_iter()
            .find(|b| !b.is_remote && b.name == target)
            .unwrap_or_else(|| GitBranch {
                is_head: true,
                ..GitBranch::local(target)
            }))
    }

    fn create_branch(repo_path: &Path, name: &str) -> BananaResult<()> {
        Self::git_command(&["branch", name], repo_path)?;
        Ok(())
    }

    fn init_repo(path: &Path) -> BananaResult<()> {
        Self::git_command(&["init", "--quiet"], path)?;
        Ok(())
    }

    fn set_config(repo_path: &Path, key: &str, value: &str) -> BananaResult<()> {
        Self::git_command(&["config", key, value], repo_path)?;
        Ok(())
    }
}

impl GitQuery for ShellBackend {
    fn is_git_repo(path: &Path) -> bool {
        Self::git_command(&["rev-parse", "--is-inside-work-tree"], path)
            .is_ok_and(|out| out == "true")
    }

    fn current_branch(path: &Path) -> BananaResult<Option<String>> {
        Self::git_command(&["symbolic-ref", "--short", "-q", "HEAD"], path)
            .map_or_else(|_| Ok(None), |branch| Ok(Some(branch)))
    }

    fn has_uncommitted_changes(path: &Path) -> BananaResult<bool> {
        Ok(!Self::changed_files(path)?.is_empty())
    }
}

#[cfg(test)]
mod tests;
