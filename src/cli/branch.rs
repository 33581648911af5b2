// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch and remote command arguments.

use clap::Args;

/// Arguments for the `branches` command.
#[derive(Debug, Clone, Default, Args)]
pub struct BranchesArgs {
    /// Shows only remote-tracking branches.
    #[arg(long, conflicts_with = "all")]
    pub remote: bool,

    /// Shows local and remote-tracking branches.
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Fetches (with prune) before listing.
    #[arg(short = 'f', long)]
    pub fetch: bool,

    /// Prints the branches as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `checkout` command.
#[derive(Debug, Clone, Args)]
pub struct CheckoutArgs {
    /// Local branch, remote branch (`origin/x`) or a new branch name.
    #[arg(value_name = "BRANCH")]
    pub name: String,
}

/// Arguments for `push` and `pull`.
#[derive(Debug, Clone, Default, Args)]
pub struct SyncArgs {
    /// Branch name; defaults to the current branch.
    #[arg(value_name = "BRANCH")]
    pub branch: Option<String>,
}

/// Arguments for the `default-branch` command.
#[derive(Debug, Clone, Default, Args)]
pub struct DefaultBranchArgs {
    /// Remote URL; defaults to `repository.url`.
    #[arg(value_name = "URL")]
    pub url: Option<String>,
}
