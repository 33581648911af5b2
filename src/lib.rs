// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |             render / --json
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  banana.toml, BANANA_*    |
//!              '-------------+-------------'
//!                            v
//!              ,---------------------------,
//!              |   service (GitService)    |
//!              |  spawn_blocking, watch    |
//!              '-------------+-------------'
//!                            v
//!                           git
//!                 +----------+----------+
//!                 v                     v
//!            query (gix)           cmd (git CLI)
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod service;
