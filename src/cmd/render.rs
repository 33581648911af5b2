// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Text and JSON output for command results.

use chrono::{Local, TimeZone};
use serde::Serialize;
use std::fmt;

use crate::error::Result;
use crate::git::model::{ChangedFile, Changes, GitBranch, GitCommitInfo, RepoSnapshot};

/// Which branches `branches` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchFilter {
    Local,
    Remote,
    All,
}

impl BranchFilter {
    #[must_use]
    pub const fn from_flags(remote: bool, all: bool) -> Self {
        match (remote, all) {
            (_, true) => Self::All,
            (true, false) => Self::Remote,
            (false, false) => Self::Local,
        }
    }

    #[must_use]
    pub const fn matches(self, branch: &GitBranch) -> bool {
        match self {
            Self::Local => !branch.is_remote,
            Self::Remote => branch.is_remote,
            Self::All => true,
        }
    }
}

/// Pretty JSON for `--json` output.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Single-line JSON, one value per line for `watch --json`.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn to_json_line<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

fn file_line(file: &ChangedFile) -> String {
    match &file.original_path {
        Some(original) => format!("  {:<10} {original} -> {}", file.status.label(), file.path),
        None => format!("  {:<10} {}", file.status.label(), file.path),
    }
}

/// Staged and unstaged sections.
#[must_use]
pub fn render_changes(changes: &Changes) -> Vec<String> {
    if changes.is_empty() {
        return vec!["nothing to commit, working tree clean".to_string()];
    }

    let mut lines = Vec::new();
    for (title, files) in [("Staged", &changes.staged), ("Unstaged", &changes.unstaged)] {
        if files.is_empty() {
            continue;
        }
        lines.push(format!("{title} ({}):", files.len()));
        lines.extend(files.iter().map(file_line));
    }
    lines
}

/// `abc1234 HH:MM YYYY-MM-DD author  message`, with `(merge)` on merges.
pub fn render_commit<Tz: TimeZone>(commit: &GitCommitInfo, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    let merge = if commit.is_merge { " (merge)" } else { "" };
    format!(
        "{} {} {:<16} {}{merge}",
        commit.short_hash(),
        commit.date_in(tz),
        commit.author,
        commit.message
    )
}

/// History lines in the given time zone.
pub fn render_history_in<Tz: TimeZone>(commits: &[GitCommitInfo], tz: &Tz) -> Vec<String>
where
    Tz::Offset: fmt::Display,
{
    if commits.is_empty() {
        return vec!["no commits yet".to_string()];
    }
    commits.iter().map(|c| render_commit(c, tz)).collect()
}

/// History lines in local time.
#[must_use]
pub fn render_history(commits: &[GitCommitInfo]) -> Vec<String> {
    render_history_in(commits, &Local)
}

/// Branch list with `*` marking HEAD and the upstream in brackets.
#[must_use]
pub fn render_branches(branches: &[GitBranch], filter: BranchFilter) -> Vec<String> {
    branches
        .iter()
        .filter(|b| filter.matches(b))
        .map(|b| {
            let marker = if b.is_head { '*' } else { ' ' };
            match &b.upstream {
                Some(upstream) => format!("{marker} {} [{upstream}]", b.name),
                None => format!("{marker} {}", b.name),
            }
        })
        .collect()
}

/// Full status view.
pub fn render_snapshot_in<Tz: TimeZone>(snapshot: &RepoSnapshot, tz: &Tz) -> Vec<String>
where
    Tz::Offset: fmt::Display,
{
    let branch = snapshot
        .branch
        .as_deref()
        .map_or_else(|| "HEAD detached".to_string(), |b| format!("On branch {b}"));
    let mut lines = vec![format!("{}: {branch}", snapshot.name)];
    if snapshot.has_local_commits {
        lines.push("Local commits not pushed yet".to_string());
    }
    lines.push(String::new());
    lines.extend(render_changes(&snapshot.changes));
    lines.push(String::new());
    lines.push("History:".to_string());
    lines.extend(
        render_history_in(&snapshot.history, tz)
            .into_iter()
            .map(|line| format!("  {line}")),
    );
    lines
}

#[must_use]
pub fn render_snapshot(snapshot: &RepoSnapshot) -> Vec<String> {
    render_snapshot_in(snapshot, &Local)
}

/// Print lines to stdout.
pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
