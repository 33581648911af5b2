// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch and remote commands.

use tracing::warn;

use crate::cli::branch::{BranchesArgs, CheckoutArgs, DefaultBranchArgs, SyncArgs};
use crate::cmd::render::{BranchFilter, print_lines, render_branches, to_json};
use crate::error::Result;
use crate::git::model::MergeStatus;
use crate::service::GitService;

/// List branches.
///
/// # Errors
///
/// Returns an error if fetching or listing fails.
pub async fn run_branches_command(args: &BranchesArgs, service: &GitService) -> Result<()> {
    let filter = BranchFilter::from_flags(args.remote, args.all);
    let branches: Vec<_> = service
        .branches(args.fetch)
        .await?
        .into_iter()
        .filter(|b| filter.matches(b))
        .collect();

    if args.json {
        println!("{}", to_json(&branches)?);
    } else if branches.is_empty() {
        println!("No branches found");
    } else {
        print_lines(&render_branches(&branches, BranchFilter::All));
    }
    Ok(())
}

/// Switch to a branch.
///
/// # Errors
///
/// Returns an error if the checkout fails.
pub async fn run_checkout_command(args: &CheckoutArgs, service: &GitService) -> Result<()> {
    let branch = service.checkout(&args.name).await?;
    match &branch.upstream {
        Some(upstream) => println!("Switched to branch '{}' tracking '{upstream}'", branch.name),
        None => println!("Switched to branch '{}'", branch.name),
    }
    Ok(())
}

/// Push a branch to the configured remote.
///
/// # Errors
///
/// Returns an error if HEAD is detached, the remote is missing or the push fails.
pub async fn run_push_command(args: &SyncArgs, service: &GitService) -> Result<()> {
    let branch = service.push(args.branch.clone()).await?;
    println!("Pushed {branch} to {}", service.info().remote());
    Ok(())
}

/// Pull a branch and report the merge result and any conflicts.
///
/// # Errors
///
/// Returns an error if HEAD is detached, the remote is missing or the pull fails.
pub async fn run_pull_command(args: &SyncArgs, service: &GitService) -> Result<()> {
    let status = service.pull(args.branch.clone()).await?;
    println!("{status}");

    if status == MergeStatus::Conflicts {
        let conflicts = service.conflicts().await?;
        for file in &conflicts {
            println!("  conflict  {}", file.path);
        }
        warn!(
            "resolve {} conflicted file(s), then stage and commit",
            conflicts.len()
        );
    }
    Ok(())
}

/// Drop commits that were not pushed.
///
/// # Errors
///
/// Returns an error if the branch has no upstream or the reset fails.
pub async fn run_drop_commits_command(service: &GitService) -> Result<()> {
    if !service.has_local_commits().await? {
        println!("No local commits to drop");
        return Ok(());
    }
    service.drop_local_commits().await?;
    println!("Dropped local commits");
    Ok(())
}

/// Print the default branch a remote advertises.
///
/// # Errors
///
/// Returns an error if no URL is known or `ls-remote` fails.
pub async fn run_default_branch_command(
    args: &DefaultBranchArgs,
    service: &GitService,
) -> Result<()> {
    match service.default_branch(args.url.clone()).await? {
        Some(branch) => println!("{branch}"),
        None => println!("Remote does not advertise a default branch"),
    }
    Ok(())
}
