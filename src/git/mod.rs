// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!          Public API
//!     query.rs      cmd.rs
//!         \           /
//!          v         v
//!   ,----------------------,
//!   |   backend (traits)   |
//!   '--+--------+-------+--'
//!      |        |       |
//!      v        v       v
//!  GitQuery GitInspect GitMutation
//!  (gix)    (CLI read) (CLI write)
//!      |        \       /
//!      v         v     v
//!  GixBackend  ShellBackend --> parse.rs (porcelain)
//!                   |
//!                   +--> auth.rs (extraHeader via GIT_CONFIG_*)
//! ```
//!
//! **`GixBackend`**: pure Rust, no subprocess, read-only.
//! **`ShellBackend`**: git CLI for HTTPS auth, porcelain reads and writes.

pub mod auth;
pub mod backend;
pub mod cmd;
pub mod model;
pub mod parse;
pub mod query;

#[cfg(test)]
mod tests;
