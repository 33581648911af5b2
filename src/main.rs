// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> load config --> Logging --> Command Dispatch
//!   version | options | inis | info | clone | status | stage | unstage
//!   discard | commit | push | pull | drop-commits | branches | checkout
//!   log | watch | default-branch
//! ```

use std::process::ExitCode;

use banana_git::cli::global::{GlobalOptions, split_override};
use banana_git::cli::{self, Command};
use banana_git::cmd::branch::{
    run_branches_command, run_checkout_command, run_default_branch_command,
    run_drop_commits_command, run_pull_command, run_push_command,
};
use banana_git::cmd::config::{run_inis_command, run_options_command};
use banana_git::cmd::repo::{
    run_clone_command, run_commit_command, run_discard_command, run_info_command,
    run_log_command, run_stage_command, run_status_command, run_unstage_command,
    run_watch_command,
};
use banana_git::cmd::service_for;
use banana_git::config::Config;
use banana_git::config::loader::ConfigLoader;
use banana_git::logging::init_logging;
use banana_git::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const DEFAULT_CONFIG_FILE: &str = "banana.toml";
const ENV_PREFIX: &str = "BANANA";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match &cli.command {
        Some(command) if command.needs_config() => match load_config(&cli.global) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("Failed to load config: {e:#}");
                return ExitCode::FAILURE;
            }
        },
        _ => None,
    };

    let log_config = build_log_config(&cli.global, config.as_ref());
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match dispatch_command(&cli, config.as_ref()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_log_config(global: &GlobalOptions, config: Option<&Config>) -> LogConfig {
    let console_level = config.map_or_else(
        || {
            global
                .log_level
                .and_then(LogLevel::from_u8)
                .unwrap_or(LogLevel::INFO)
        },
        |c| c.global.output_log_level,
    );

    let file_level = config.map_or(console_level, |c| c.global.file_log_level);

    let log_file = config
        .and_then(|c| c.global.log_file.as_ref())
        .or(global.log_file.as_ref())
        .map(|p| p.display().to_string());

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(log_file)
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: Option<&Config>) -> anyhow::Result<()> {
    let Some(command) = &cli.command else {
        eprintln!("No command specified. Use --help for usage information.");
        anyhow::bail!("No command specified");
    };

    match command {
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Command::Inis => {
            run_inis_command(&build_config_loader(&cli.global).format_loaded_files());
            return Ok(());
        }
        _ => {}
    }

    let config = config.ok_or_else(|| anyhow::anyhow!("configuration was not loaded"))?;
    let repo = cli.global.repo.as_deref();
    if let Command::Options = command {
        return run_options_command(config, repo);
    }

    let service = service_for(config, repo, cli.global.path.as_deref())?;
    match command {
        Command::Info => run_info_command(&service).await,
        Command::Clone(args) => run_clone_command(args, &service).await,
        Command::Status(args) => {
            run_status_command(args, &service, config.watch.history_limit).await
        }
        Command::Stage(args) => run_stage_command(args, &service).await,
        Command::Unstage(args) => run_unstage_command(args, &service).await,
        Command::Discard(args) => run_discard_command(args, &service).await,
        Command::Commit(args) => run_commit_command(args, &service).await,
        Command::Push(args) => run_push_command(args, &service).await,
        Command::Pull(args) => run_pull_command(args, &service).await,
        Command::DropCommits => run_drop_commits_command(&service).await,
        Command::Branches(args) => run_branches_command(args, &service).await,
        Command::Checkout(args) => run_checkout_command(args, &service).await,
        Command::Log(args) => run_log_command(args, &service, config.watch.history_limit).await,
        Command::Watch(args) => run_watch_command(args, &service, &config.watch).await,
        Command::DefaultBranch(args) => run_default_branch_command(args, &service).await,
        Command::Version | Command::Inis | Command::Options => Ok(()),
    }
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> banana_git::error::Result<Config> {
    let mut loader = build_config_loader(global);
    for option in global.to_config_overrides() {
        let (key, value) = split_override(&option)?;
        loader = loader.set(key, value)?;
    }
    loader.build()
}
