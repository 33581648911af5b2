// banana-git: simplified Git front-end
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository polling.
//!
//! ```text
//! interval tick --> snapshot() --> differs from last? --> on_change
//!       ^                                                    |
//!       '----------------------------------------------------'
//!                 stops on cancel or after max_updates
//! ```

use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::GitService;
use crate::config::types::WatchConfig;
use crate::git::model::RepoSnapshot;

/// Re-reads the repository on a fixed interval and reports changes.
pub struct Watcher {
    service: GitService,
    interval: Duration,
    history_limit: usize,
    max_updates: Option<usize>,
    cancel_token: CancellationToken,
}

impl Watcher {
    #[must_use]
    pub fn new(service: GitService, config: &WatchConfig, cancel_token: CancellationToken) -> Self {
        Self {
            service,
            interval: Duration::from_millis(config.interval_ms.max(1)),
            history_limit: config.history_limit,
            max_updates: None,
            cancel_token,
        }
    }

    /// Stop after reporting `count` snapshots.
    #[must_use]
    pub const fn with_max_updates(mut self, count: usize) -> Self {
        self.max_updates = Some(count);
        self
    }

    /// Poll until cancelled, calling `on_change` for every new snapshot.
    ///
    /// The first successful poll is always reported. Failed polls are logged
    /// by the service and skipped. Returns the number of reported snapshots.
    pub async fn run<F>(self, mut on_change: F) -> usize
    where
        F: FnMut(&RepoSnapshot),
    {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut last: Option<RepoSnapshot> = None;
        let mut reported = 0;

        loop {
            tokio::select! {
                biased;
                () = self.cancel_token.cancelled() => {
                    debug!("watch cancelled after {reported} updates");
                    break;
                }
                _ = ticker.tick() => {}
            }

            let Ok(snapshot) = self.service.snapshot(self.history_limit).await else {
                continue;
            };
            if last.as_ref() == Some(&snapshot) {
                continue;
            }

            on_change(&snapshot);
            last = Some(snapshot);
            reported += 1;

            if self.max_updates.is_some_and(|max| reported >= max) {
                break;
            }
        }

        reported
    }
}
