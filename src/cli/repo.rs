// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Work tree and history command arguments.
//!
//! ```text
//! clone URL [DEST]        status [--json]
//! stage [PATH...]         unstage [PATH...]
//! discard [PATH...]       commit -m MSG [-k KIND]
//! log [-n N] [--json]     watch [--interval MS] [-n N] [--updates N]
//! ```

use clap::Args;
use clap::builder::RangedU64ValueParser;
use std::path::PathBuf;

use crate::git::model::CommitKind;

/// Arguments for the `clone` command.
#[derive(Debug, Clone, Args)]
pub struct CloneArgs {
    /// Remote URL; defaults to `repository.url`.
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Destination directory; defaults to `repository.path`.
    #[arg(value_name = "DEST")]
    pub dest: Option<PathBuf>,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, Args)]
pub struct StatusArgs {
    /// Prints the snapshot as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Paths for `stage`, `unstage` and `discard`; none means every change.
#[derive(Debug, Clone, Default, Args)]
pub struct PathsArgs {
    /// Repository-relative paths.
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

/// Arguments for the `commit` command.
#[derive(Debug, Clone, Args)]
pub struct CommitArgs {
    /// Commit message.
    #[arg(short = 'm', long = "message", required = true)]
    pub message: String,

    /// Conventional commit header (feat, fix, docs, style, refactor, perf, test,
    /// build, ci, chore, revert).
    #[arg(short = 'k', long = "kind", value_name = "KIND")]
    pub kind: Option<CommitKind>,
}

/// Arguments for the `log` command.
#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
    /// Number of commits; defaults to `watch.history_limit`.
    #[arg(short = 'n', long = "limit", value_name = "N", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub limit: Option<usize>,

    /// Prints the commits as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `watch` command.
#[derive(Debug, Clone, Default, Args)]
pub struct WatchArgs {
    /// Poll interval in milliseconds; defaults to `watch.interval_ms`.
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,

    /// Commits per snapshot; defaults to `watch.history_limit`.
    #[arg(short = 'n', long = "limit", value_name = "N", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub limit: Option<usize>,

    /// Stops after reporting N changes.
    #[arg(long, value_name = "N", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub updates: Option<usize>,

    /// Prints one JSON snapshot per line.
    #[arg(long)]
    pub json: bool,
}
