// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          BananaError (~24 bytes)
//!                 |
//!   +------+------+------+------+------+
//!   |      |      |      |      |      |
//!   v      v      v      v      v      v
//! Bail    Git   Config Process  Io   Other
//!         Box    Box    Box    Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Git     RepoPath*, CommandFailed, Gix, NoUpstream, NothingToCommit
//!   Config  ParseError, MissingKey, InvalidValue, NotFound
//!   Process ExecutableNotFound, SpawnFailed
//!
//! All variants boxed => BananaError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`BananaError`].
pub type BananaResult<T> = std::result::Result<T, BananaError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum BananaError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`BananaError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> BananaError {
    BananaError::Bailed(message.into().into_boxed_str())
}

impl BananaError {
    /// Returns the inner [`GitError`] if this is a git failure.
    #[must_use]
    pub fn as_git(&self) -> Option<&GitError> {
        match self {
            Self::Git(err) => Some(err),
            _ => None,
        }
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for BananaError {
                fn from(err: $error) -> Self {
                    BananaError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ConfigError => Config,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// No local repository path is configured.
    #[error("local repository file path is empty")]
    RepoPathEmpty,

    /// The configured repository path does not exist on disk.
    #[error("local repository file path is missing: {path}")]
    RepoPathMissing { path: String },

    /// Path exists but is not inside a git work tree.
    #[error("not a git repository: {path}")]
    NotARepository { path: String },

    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),

    /// Branch not found.
    #[error("branch not found: {branch}")]
    BranchNotFound { branch: String },

    /// Current branch has no remote tracking branch.
    #[error("branch '{branch}' has no upstream branch")]
    NoUpstream { branch: String },

    /// HEAD does not point at a branch.
    #[error("HEAD is detached, no current branch")]
    DetachedHead,

    /// Remote not found.
    #[error("remote not found: {remote}")]
    RemoteNotFound { remote: String },

    /// Clone operation failed.
    #[error("failed to clone {url}: {message}")]
    CloneFailed { url: String, message: String },

    /// Clone destination already holds files.
    #[error("clone destination is not empty: {path}")]
    DestinationNotEmpty { path: String },

    /// Path has no index entry, so there is nothing to restore.
    #[error("path is not tracked: {path}")]
    PathNotTracked { path: String },

    /// Commit requested with an empty index.
    #[error("nothing staged to commit")]
    NothingToCommit,

    /// Commit requested without a message.
    #[error("commit message is empty")]
    EmptyCommitMessage,

    /// Git printed something the parser did not understand.
    #[error("unexpected output from {command}: {line}")]
    UnexpectedOutput { command: String, line: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Named configuration entry not found.
    #[error("config entry not found: {0}")]
    NotFound(String),
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
