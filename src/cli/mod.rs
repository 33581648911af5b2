// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for banana-git using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! banana [global options] <command>
//! version | options | inis | info
//! clone [URL] [DEST]
//! status | stage | unstage | discard | commit | log | watch
//! branches | checkout | push | pull | drop-commits | default-branch
//! ```

pub mod branch;
pub mod global;
pub mod repo;

#[cfg(test)]
mod tests;

use crate::cli::branch::{BranchesArgs, CheckoutArgs, DefaultBranchArgs, SyncArgs};
use crate::cli::global::GlobalOptions;
use crate::cli::repo::{CloneArgs, CommitArgs, LogArgs, PathsArgs, StatusArgs, WatchArgs};
use clap::{Parser, Subcommand};

/// BananaGit - a simplified Git front-end
///
/// Clone, stage, commit, push, pull and switch branches on a saved repository.
#[derive(Debug, Parser)]
#[command(
    name = "banana",
    author,
    version,
    about = "A simplified Git front-end",
    long_about = "banana-git Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  A simplified Git front-end for one saved repository at a time.\n\n\
                  Configure `[user]` and `[repository]` in banana.toml, then\n\
                  `banana clone`, `banana stage`, `banana commit -m ...` and\n\
                  `banana push`. See `banana <command> --help` for more\n\
                  information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, banana loads `banana.toml` from the current directory.\n\
                  Additional files can be given with --config; they are loaded in\n\
                  order after it. BANANA_* environment variables override files\n\
                  (BANANA_USER__TOKEN sets user.token), and --set KEY=VALUE\n\
                  overrides everything. Use --no-default-config to skip banana.toml."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by banana.
    Inis,

    /// Shows the user, the selected repository and its current branch.
    Info,

    /// Clones the repository into an empty directory.
    Clone(CloneArgs),

    /// Shows the branch, staged and unstaged changes, and recent commits.
    Status(StatusArgs),

    /// Stages paths, or every change.
    Stage(PathsArgs),

    /// Unstages paths, or everything.
    Unstage(PathsArgs),

    /// Discards uncommitted changes to paths, or to every tracked file.
    Discard(PathsArgs),

    /// Commits the staged changes.
    Commit(CommitArgs),

    /// Pushes a branch and sets its upstream.
    Push(SyncArgs),

    /// Pulls a branch from the remote and merges it.
    Pull(SyncArgs),

    /// Drops local commits that were not pushed.
    #[command(name = "drop-commits")]
    DropCommits,

    /// Lists branches.
    Branches(BranchesArgs),

    /// Checks out a local or remote branch, creating it when missing.
    Checkout(CheckoutArgs),

    /// Shows the commit history.
    Log(LogArgs),

    /// Polls the repository and prints every change.
    Watch(WatchArgs),

    /// Prints the default branch advertised by a remote.
    #[command(name = "default-branch")]
    DefaultBranch(DefaultBranchArgs),
}

impl Command {
    /// Whether the command operates on a loaded configuration.
    #[must_use]
    pub const fn needs_config(&self) -> bool {
        !matches!(self, Self::Version | Self::Inis)
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
