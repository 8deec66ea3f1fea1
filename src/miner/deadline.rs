// Commit Miner - Free and Open Source Software Statement
//
// This project, commit-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/deadline.rs
// Version: 1.0.0
//
// This file implements the wall-clock limit of a search run, located in the
// miner subdirectory. The deadline runs on its own thread and raises the
// stop flag when the budget is spent or as soon as the search ends.

use crate::core::types::DEADLINE_GRANULARITY;
use crate::miner::registry::SolutionRegistry;
use log::debug;
use std::time::{Duration, Instant};

const LOG_TARGET: &str = "commit_miner::deadline";

/// Why the deadline returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineExit {
    /// The time budget ran out
    Elapsed,
    /// Someone else requested the stop first
    Cancelled,
}

#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    duration: Duration,
    granularity: Duration,
}

impl Deadline {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            granularity: DEADLINE_GRANULARITY,
        }
    }

    pub fn with_granularity(mut self, granularity: Duration) -> Self {
        self.granularity = granularity.max(Duration::from_millis(1));
        self
    }

    /// Effective budget; always at least one increment
    pub fn budget(&self) -> Duration {
        self.duration.max(self.granularity)
    }

    pub fn granularity(&self) -> Duration {
        self.granularity
    }

    /// Wait in increments until the budget is spent or a stop is requested,
    /// then request the stop unconditionally.
    pub fn run(&self, registry: &SolutionRegistry) -> DeadlineExit {
        let started = Instant::now();
        // None: budget too large to represent, wait for a stop request only
        let expires_at = started.checked_add(self.budget());

        let exit = loop {
            if registry.is_stopped() {
                break DeadlineExit::Cancelled;
            }
            let remaining = match expires_at {
                Some(at) => at.saturating_duration_since(Instant::now()),
                None => self.granularity,
            };
            if remaining.is_zero() {
                break DeadlineExit::Elapsed;
            }
            let _ = registry
                .stop_signal()
                .recv_timeout(remaining.min(self.granularity));
        };

        registry.request_stop();
        debug!(target: LOG_TARGET,
            "Deadline exited ({:?}) after {:.3}s",
            exit,
            started.elapsed().as_secs_f64()
        );
        exit
    }
}

// Changelog:
// - v1.0.0 (2026-10-17): Initial release.
//   - Bounded waits on the registry wake-up channel instead of polling sleeps.
