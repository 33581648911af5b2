// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Plain data types mirroring what git reports.
//!
//! ```text
//! ChangedFile  name, path, original_path, FileStatus
//! GitBranch    name, canonical_name, is_remote, upstream, is_head
//! GitCommitInfo hash, author, email, timestamp, message, is_merge
//! MergeStatus  UpToDate | FastForward | NonFastForward | Conflicts
//! RepoSnapshot everything `status`/`watch` render
//! ```

use bitflags::bitflags;
use chrono::{DateTime, TimeZone};
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::Path;

bitflags! {
    /// Status of a single path, split into index and work tree halves.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FileStatus: u16 {
        const INDEX_NEW        = 1 << 0;
        const INDEX_MODIFIED   = 1 << 1;
        const INDEX_DELETED    = 1 << 2;
        const INDEX_RENAMED    = 1 << 3;
        const INDEX_TYPECHANGE = 1 << 4;

        const WT_NEW        = 1 << 7;
        const WT_MODIFIED   = 1 << 8;
        const WT_DELETED    = 1 << 9;
        const WT_TYPECHANGE = 1 << 10;
        const WT_RENAMED    = 1 << 11;

        const IGNORED    = 1 << 14;
        const CONFLICTED = 1 << 15;

        const INDEX = Self::INDEX_NEW.bits()
            | Self::INDEX_MODIFIED.bits()
            | Self::INDEX_DELETED.bits()
            | Self::INDEX_RENAMED.bits()
            | Self::INDEX_TYPECHANGE.bits();

        const WORKTREE = Self::WT_NEW.bits()
            | Self::WT_MODIFIED.bits()
            | Self::WT_DELETED.bits()
            | Self::WT_TYPECHANGE.bits()
            | Self::WT_RENAMED.bits();
    }
}

impl FileStatus {
    /// Map one porcelain v1 `XY` pair to status flags.
    #[must_use]
    pub fn from_porcelain(x: u8, y: u8) -> Self {
        match (x, y) {
            (b'?', b'?') => return Self::WT_NEW,
            (b'!', b'!') => return Self::IGNORED,
            (b'D', b'D' | b'U')
            | (b'A', b'A' | b'U')
            | (b'U', b'A' | b'D' | b'U') => return Self::CONFLICTED,
            _ => {}
        }

        let index = match x {
            b'M' => Self::INDEX_MODIFIED,
            b'A' | b'C' => Self::INDEX_NEW,
            b'D' => Self::INDEX_DELETED,
            b'R' => Self::INDEX_RENAMED,
            b'T' => Self::INDEX_TYPECHANGE,
            _ => Self::empty(),
        };
        let worktree = match y {
            b'M' => Self::WT_MODIFIED,
            b'A' => Self::WT_NEW,
            b'D' => Self::WT_DELETED,
            b'R' => Self::WT_RENAMED,
            b'T' => Self::WT_TYPECHANGE,
            _ => Self::empty(),
        };
        index | worktree
    }

    /// Whether any change is recorded in the index.
    #[must_use]
    pub const fn is_staged(self) -> bool {
        self.intersects(Self::INDEX)
    }

    /// Whether the work tree differs from the index (or the path is conflicted).
    #[must_use]
    pub const fn is_unstaged(self) -> bool {
        self.intersects(Self::WORKTREE) || self.contains(Self::CONFLICTED)
    }

    /// One-word label for the dominant change, index side first.
    #[must_use]
    pub const fn label(self) -> &'static str {
        if self.contains(Self::CONFLICTED) {
            "conflicted"
        } else if self.intersects(Self::INDEX_NEW.union(Self::WT_NEW)) {
            "new"
        } else if self.intersects(Self::INDEX_DELETED.union(Self::WT_DELETED)) {
            "deleted"
        } else if self.intersects(Self::INDEX_RENAMED.union(Self::WT_RENAMED)) {
            "renamed"
        } else if self.intersects(Self::INDEX_TYPECHANGE.union(Self::WT_TYPECHANGE)) {
            "typechange"
        } else if self.contains(Self::IGNORED) {
            "ignored"
        } else {
            "modified"
        }
    }
}

impl Serialize for FileStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A path with pending changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangedFile {
    /// File name without directories.
    pub name: String,
    /// Path relative to the work tree root.
    pub path: String,
    /// Source path of a rename or copy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_path: Option<String>,
    pub status: FileStatus,
}

impl ChangedFile {
    #[must_use]
    pub fn new(path: impl Into<String>, status: FileStatus) -> Self {
        let path = path.into();
        let name = Path::new(&path)
            .file_name()
            .map_or_else(|| path.clone(), |n| n.to_string_lossy().into_owned());
        Self {
            name,
            path,
            original_path: None,
            status,
        }
    }

    #[must_use]
    pub fn renamed_from(mut self, original: impl Into<String>) -> Self {
        self.original_path = Some(original.into());
        self
    }
}

/// Changed files split the way the changes view shows them.
///
/// A path modified both in the index and the work tree appears in both lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Changes {
    pub staged: Vec<ChangedFile>,
    pub unstaged: Vec<ChangedFile>,
}

impl Changes {
    #[must_use]
    pub fn split(files: Vec<ChangedFile>) -> Self {
        let mut changes = Self::default();
        for file in files {
            if file.status.is_staged() {
                changes.staged.push(file.clone());
            }
            if file.status.is_unstaged() {
                changes.unstaged.push(file);
            }
        }
        changes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.staged.is_empty() && self.unstaged.is_empty()
    }
}

/// A local or remote-tracking branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitBranch {
    /// Short name, e.g. `main` or `origin/main`.
    pub name: String,
    /// Full reference name, e.g. `refs/heads/main`.
    pub canonical_name: String,
    pub is_remote: bool,
    /// Tracking branch of a local branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream: Option<String>,
    /// Checked out in the work tree.
    pub is_head: bool,
}

impl GitBranch {
    #[must_use]
    pub fn local(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            canonical_name: format!("refs/heads/{name}"),
            name,
            is_remote: false,
            upstream: None,
            is_head: false,
        }
    }

    /// Remote name of a remote-tracking branch (`origin` for `origin/main`).
    #[must_use]
    pub fn remote_name(&self) -> Option<&str> {
        if !self.is_remote {
            return None;
        }
        self.name.split_once('/').map(|(remote, _)| remote)
    }

    /// Branch name without the remote prefix (`main` for `origin/main`).
    #[must_use]
    pub fn local_name(&self) -> &str {
        if self.is_remote {
            self.name.split_once('/').map_or(&self.name, |(_, rest)| rest)
        } else {
            &self.name
        }
    }
}

/// One entry of the commit history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitCommitInfo {
    pub hash: String,
    pub author: String,
    pub email: String,
    /// Author time, seconds since the epoch.
    pub timestamp: i64,
    /// Summary line.
    pub message: String,
    /// More than one parent.
    pub is_merge: bool,
}

impl GitCommitInfo {
    #[must_use]
    pub fn short_hash(&self) -> &str {
        self.hash.get(..7).unwrap_or(&self.hash)
    }

    /// Author time as `HH:MM YYYY-MM-DD` in the given time zone.
    #[must_use]
    pub fn date_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        DateTime::from_timestamp(self.timestamp, 0).map_or_else(
            || self.timestamp.to_string(),
            |utc| utc.with_timezone(tz).format("%H:%M %Y-%m-%d").to_string(),
        )
    }
}

/// Outcome of a pull.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStatus {
    /// Nothing new upstream.
    UpToDate,
    /// Local branch moved forward to the upstream tip.
    FastForward,
    /// A merge commit was created.
    NonFastForward,
    /// Merge stopped with conflicts in the work tree.
    Conflicts,
}

impl fmt::Display for MergeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpToDate => write!(f, "Up to date"),
            Self::FastForward => write!(f, "Fast-forwarded"),
            Self::NonFastForward => write!(f, "Merged"),
            Self::Conflicts => write!(f, "Conflict detected"),
        }
    }
}

/// Everything the status view shows, compared by value between polls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoSnapshot {
    pub name: String,
    /// `None` when HEAD is detached.
    pub branch: Option<String>,
    pub has_local_commits: bool,
    #[serde(flatten)]
    pub changes: Changes,
    pub history: Vec<GitCommitInfo>,
}

/// Conventional commit header prefixed to a commit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitKind {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
    Chore,
    Revert,
}

impl CommitKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Refactor => "refactor",
            Self::Perf => "perf",
            Self::Test => "test",
            Self::Build => "build",
            Self::Ci => "ci",
            Self::Chore => "chore",
            Self::Revert => "revert",
        }
    }

    /// Prefix `message` with this header, e.g. `feat: add clone dialog`.
    #[must_use]
    pub fn apply(self, message: &str) -> String {
        format!("{}: {}", self.as_str(), message.trim())
    }
}

impl fmt::Display for CommitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CommitKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "feat" => Self::Feat,
            "fix" => Self::Fix,
            "docs" => Self::Docs,
            "style" => Self::Style,
            "refactor" => Self::Refactor,
            "perf" => Self::Perf,
            "test" => Self::Test,
            "build" => Self::Build,
            "ci" => Self::Ci,
            "chore" => Self::Chore,
            "revert" => Self::Revert,
            other => return Err(format!("unknown commit kind '{other}'")),
        };
        Ok(kind)
    }
}
