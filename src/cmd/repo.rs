// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Work tree and history commands.

use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::cli::repo::{CloneArgs, CommitArgs, LogArgs, PathsArgs, StatusArgs, WatchArgs};
use crate::cmd::render::{
    print_lines, render_changes, render_history, render_snapshot, to_json, to_json_line,
};
use crate::config::types::WatchConfig;
use crate::error::{ConfigError, Result};
use crate::service::GitService;
use crate::service::watch::Watcher;

/// Print the user, the selected repository and its branch.
///
/// # Errors
///
/// Returns an error if the repository exists but its branch cannot be read.
pub async fn run_info_command(service: &GitService) -> Result<()> {
    let git_info = service.info();
    println!("name     {}", service.repo_name());
    println!(
        "user     {} <{}>",
        git_info.user.username.as_deref().unwrap_or("-"),
        git_info.user.email.as_deref().unwrap_or("-")
    );
    println!(
        "path     {}",
        git_info
            .path()
            .map_or_else(|| "-".to_string(), |p| p.display().to_string())
    );
    println!("url      {}", git_info.url().unwrap_or("-"));
    println!("remote   {}", git_info.remote());

    if !git_info.is_saved_repository_valid() {
        println!("repository is not configured (set repository.path and repository.url)");
        return Ok(());
    }

    match service.repo_path() {
        Ok(_) => {
            let branch = service.current_branch().await?;
            println!("branch   {}", branch.as_deref().unwrap_or("(detached)"));
            let state = if service.is_dirty().await? { "dirty" } else { "clean" };
            println!("tree     {state}");
        }
        Err(e) => println!("status   {e}"),
    }
    Ok(())
}

/// Clone the repository URL into the destination directory.
///
/// # Errors
///
/// Returns an error if no URL or destination is known, or the clone fails.
pub async fn run_clone_command(args: &CloneArgs, service: &GitService) -> Result<()> {
    let url = args
        .url
        .clone()
        .or_else(|| service.info().url().map(str::to_string))
        .ok_or_else(|| missing("repository", "url"))?;
    let dest: PathBuf = args
        .dest
        .clone()
        .or_else(|| service.info().path().map(std::path::Path::to_path_buf))
        .ok_or_else(|| missing("repository", "path"))?;

    service.clone_repository(&url, &dest).await?;
    println!("Cloned {url} into {}", dest.display());
    Ok(())
}

/// Print branch, changes and history.
///
/// # Errors
///
/// Returns an error if the repository cannot be read.
pub async fn run_status_command(
    args: &StatusArgs,
    service: &GitService,
    history_limit: usize,
) -> Result<()> {
    let snapshot = service.snapshot(history_limit).await?;
    if args.json {
        println!("{}", to_json(&snapshot)?);
    } else {
        print_lines(&render_snapshot(&snapshot));
    }
    Ok(())
}

/// Stage paths, or every change.
///
/// # Errors
///
/// Returns an error if staging fails.
pub async fn run_stage_command(args: &PathsArgs, service: &GitService) -> Result<()> {
    service.stage(args.paths.clone()).await?;
    print_lines(&render_changes(&service.changes().await?));
    Ok(())
}

/// Unstage paths, or everything.
///
/// # Errors
///
/// Returns an error if unstaging fails.
pub async fn run_unstage_command(args: &PathsArgs, service: &GitService) -> Result<()> {
    service.unstage(args.paths.clone()).await?;
    print_lines(&render_changes(&service.changes().await?));
    Ok(())
}

/// Discard work tree changes to paths, or to every tracked file.
///
/// # Errors
///
/// Returns an error if the discard fails.
pub async fn run_discard_command(args: &PathsArgs, service: &GitService) -> Result<()> {
    if args.paths.is_empty() {
        warn!("discarding every uncommitted change to tracked files");
    }
    service.discard(args.paths.clone()).await?;
    print_lines(&render_changes(&service.changes().await?));
    Ok(())
}

/// Commit the staged changes.
///
/// # Errors
///
/// Returns an error for an empty message, nothing staged, or a failed commit.
pub async fn run_commit_command(args: &CommitArgs, service: &GitService) -> Result<()> {
    let hash = service.commit(&args.message, args.kind).await?;
    let branch = service
        .current_branch()
        .await?
        .unwrap_or_else(|| "HEAD".to_string());
    println!("[{branch} {}] committed", hash.get(..7).unwrap_or(&hash));
    Ok(())
}

/// Print the commit history.
///
/// # Errors
///
/// Returns an error if the history cannot be read.
pub async fn run_log_command(
    args: &LogArgs,
    service: &GitService,
    default_limit: usize,
) -> Result<()> {
    let commits = service.history(args.limit.unwrap_or(default_limit)).await?;
    if args.json {
        println!("{}", to_json(&commits)?);
    } else {
        print_lines(&render_history(&commits));
    }
    Ok(())
}

/// Poll the repository and print every change until Ctrl+C.
///
/// # Errors
///
/// Returns an error if the repository is not valid when watching starts,
/// or a snapshot cannot be serialized.
pub async fn run_watch_command(
    args: &WatchArgs,
    service: &GitService,
    defaults: &WatchConfig,
) -> Result<()> {
    service.repo_path()?;

    let config = WatchConfig {
        interval_ms: args.interval.unwrap_or(defaults.interval_ms),
        history_limit: args.limit.unwrap_or(defaults.history_limit),
    };

    let cancel_token = CancellationToken::new();
    let signal_token = cancel_token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Received Ctrl+C, stopping watch...");
            signal_token.cancel();
        }
    });

    let mut watcher = Watcher::new(service.clone(), &config, cancel_token);
    if let Some(updates) = args.updates {
        watcher = watcher.with_max_updates(updates);
    }

    info!(
        "watching {} every {}ms",
        service.repo_name(),
        config.interval_ms
    );

    let mut render_error = None;
    let json = args.json;
    let reported = watcher
        .run(|snapshot| {
            if json {
                match to_json_line(snapshot) {
                    Ok(line) => println!("{line}"),
                    Err(e) => {
                        render_error.get_or_insert(e);
                    }
                }
            } else {
                print_lines(&render_snapshot(snapshot));
                println!();
            }
        })
        .await;

    if let Some(e) = render_error {
        return Err(e);
    }
    info!("watch reported {reported} changes");
    Ok(())
}

fn missing(section: &str, key: &str) -> ConfigError {
    ConfigError::MissingKey {
        section: section.to_string(),
        key: key.to_string(),
    }
}
