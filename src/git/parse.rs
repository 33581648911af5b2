// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parsers for git porcelain output.
//!
//! ```text
//! status --porcelain=v1 -z      --> Vec<ChangedFile>
//! for-each-ref BRANCH_FORMAT    --> Vec<GitBranch>
//! log LOG_FORMAT                --> Vec<GitCommitInfo>
//! ls-remote --symref URL HEAD   --> default branch
//! HEAD before/after pull        --> MergeStatus
//! ```
//!
//! Output is expected in the C locale (`LC_ALL=C` is set for every git call).

use regex::Regex;

use super::model::{ChangedFile, FileStatus, GitBranch, GitCommitInfo, MergeStatus};
use crate::error::{BananaResult, GitError};

/// Unit separator between log fields.
const FIELD_SEP: char = '\u{1f}';
/// Record separator between log entries.
const RECORD_SEP: char = '\u{1e}';

/// `git log --format` producing `FIELD_SEP`/`RECORD_SEP` delimited records.
pub const LOG_FORMAT: &str = "--format=%H%x1f%an%x1f%ae%x1f%at%x1f%P%x1f%s%x1e";

/// `git for-each-ref --format` producing tab separated branch rows.
pub const BRANCH_FORMAT: &str =
    "--format=%(refname)%09%(refname:short)%09%(upstream:short)%09%(HEAD)";

/// Parse `git status --porcelain=v1 -z` output.
///
/// Entries are `XY PATH\0`; renames and copies carry a second `ORIG\0` field.
#[must_use]
pub fn parse_status_z(output: &[u8]) -> Vec<ChangedFile> {
    let mut files = Vec::new();
    let mut parts = output.split(|b| *b == 0);

    while let Some(part) = parts.next() {
        if part.len() < 4 {
            continue;
        }
        let (x, y) = (part[0], part[1]);
        let path = String::from_utf8_lossy(&part[3..]).into_owned();
        let status = FileStatus::from_porcelain(x, y);

        let mut file = ChangedFile::new(path, status);
        if matches!(x, b'R' | b'C') || matches!(y, b'R' | b'C') {
            if let Some(orig) = parts.next()
                && !orig.is_empty()
            {
                file = file.renamed_from(String::from_utf8_lossy(orig));
            }
        }
        files.push(file);
    }

    files
}

/// Parse `git for-each-ref` rows produced with [`BRANCH_FORMAT`].
///
/// Symbolic `refs/remotes/<remote>/HEAD` entries are dropped.
///
/// # Errors
///
/// Returns `GitError::UnexpectedOutput` for a row without the expected fields.
pub fn parse_branches(output: &str) -> BananaResult<Vec<GitBranch>> {
    let mut branches = Vec::new();

    for line in output.lines().filter(|l| !l.trim().is_empty()) {
        let mut fields = line.splitn(4, '\t');
        let (Some(canonical), Some(short)) = (fields.next(), fields.next()) else {
            return Err(unexpected("for-each-ref", line));
        };
        let upstream = fields.next().unwrap_or_default();
        let head = fields.next().unwrap_or_default();

        let is_remote = canonical.starts_with("refs/remotes/");
        if is_remote && canonical.ends_with("/HEAD") {
            continue;
        }
        if !is_remote && !canonical.starts_with("refs/heads/") {
            return Err(unexpected("for-each-ref", line));
        }

        branches.push(GitBranch {
            name: short.to_string(),
            canonical_name: canonical.to_string(),
            is_remote,
            upstream: (!upstream.is_empty()).then(|| upstream.to_string()),
            is_head: head.trim() == "*",
        });
    }

    Ok(branches)
}

/// Parse `git log` records produced with [`LOG_FORMAT`].
///
/// # Errors
///
/// Returns `GitError::UnexpectedOutput` for a record with missing fields or a
/// non-numeric timestamp.
pub fn parse_log(output: &str) -> BananaResult<Vec<GitCommitInfo>> {
    let mut commits = Vec::new();

    for record in output.split(RECORD_SEP) {
        let record = record.trim_start_matches(['\n', '\r']);
        if record.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = record.splitn(6, FIELD_SEP).collect();
        let [hash, author, email, timestamp, parents, message] = fields[..] else {
            return Err(unexpected("log", record));
        };
        let timestamp = timestamp
            .parse::<i64>()
            .map_err(|_| unexpected("log", record))?;

        commits.push(GitCommitInfo {
            hash: hash.to_string(),
            author: author.to_string(),
            email: email.to_string(),
            timestamp,
            message: message.trim_end().to_string(),
            is_merge: parents.split_whitespace().count() > 1,
        });
    }

    Ok(commits)
}

/// Extract the default branch from `git ls-remote --symref <url> HEAD` output.
#[must_use]
pub fn parse_symref_head(output: &str) -> Option<String> {
    if let Some(rest) = output.trim().strip_prefix("refs/remotes/origin/") {
        return rest.split_whitespace().next().map(str::to_string);
    }

    let regex = Regex::new(r"ref:\s*refs/heads/(\S+)\s+HEAD").ok()?;
    regex
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Classify a successful `git pull` from commit ids.
///
/// `before` and `after` are HEAD around the pull, `fetched` is `FETCH_HEAD`.
/// HEAD unchanged is up to date; HEAD at the fetched tip is a fast-forward;
/// anything else is a new merge commit.
#[must_use]
pub fn classify_pull(
    before: Option<&str>,
    after: Option<&str>,
    fetched: Option<&str>,
) -> MergeStatus {
    if after.is_some() && after == before {
        MergeStatus::UpToDate
    } else if after.is_some() && after == fetched {
        MergeStatus::FastForward
    } else {
        MergeStatus::NonFastForward
    }
}

fn unexpected(command: &str, line: &str) -> crate::error::BananaError {
    GitError::UnexpectedOutput {
        command: format!("git {command}"),
        line: line.to_string(),
    }
    .into()
}
