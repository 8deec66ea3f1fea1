// Commit Miner - Free and Open Source Software Statement
//
// This project, commit-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/cpu/miner.rs
// Version: 1.0.0
//
// This file implements the coordinator of a search run: it precomputes the
// commit prefix, spawns the workers and the deadline, joins every thread
// and turns the shared state into a report.

use crate::core::error::MinerError;
use crate::core::types::{DEADLINE_GRANULARITY, FIRST_WORKER_TAG, MAX_THREADS};
use crate::core::{PartialHashContext, TargetDigest};
use crate::miner::deadline::Deadline;
use crate::miner::registry::{Solution, SolutionRegistry};
use crate::miner::stats::MinerStats;
use crate::utils::format::FormatUtils;
use log::{debug, info, warn};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::thread::{WorkerExit, start_mining_thread};

const LOG_TARGET: &str = "commit_miner::miner";

/// Parameters of one search run
#[derive(Debug, Clone)]
pub struct MinerConfig {
    pub target: TargetDigest,
    pub threads: usize,
    pub timeout: Duration,
    pub deadline_granularity: Duration,
}

impl MinerConfig {
    /// `threads` is clamped to 1..=MAX_THREADS
    pub fn new(target: TargetDigest, threads: usize, timeout: Duration) -> Self {
        Self {
            target,
            threads: threads.clamp(1, MAX_THREADS),
            timeout,
            deadline_granularity: DEADLINE_GRANULARITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved(Solution),
    /// Every worker stopped without a qualifying digest
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub elapsed: Duration,
    pub total_hashes: u64,
    pub threads: usize,
    /// Workers that reached a qualifying digest, including the winner
    pub workers_with_digest: usize,
}

impl SearchReport {
    pub fn solution(&self) -> Option<&Solution> {
        match &self.outcome {
            SearchOutcome::Solved(solution) => Some(solution),
            SearchOutcome::Exhausted => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.solution().is_some()
    }
}

pub struct CpuMiner {
    config: MinerConfig,
}

impl CpuMiner {
    pub fn new(config: MinerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    /// Run one search over `payload` and wait for every thread to finish
    pub fn run(&self, payload: &[u8]) -> crate::Result<SearchReport> {
        let threads = self.config.threads;
        let target = self.config.target;

        info!(target: LOG_TARGET, "🧵 Using {} threads", threads);
        if threads > num_cpus::get() {
            warn!(target: LOG_TARGET, "{} threads exceed the {} available CPUs", threads, num_cpus::get());
        }
        info!(target: LOG_TARGET, "🎯 Target {}", target);
        match target.expected_attempts() {
            Some(attempts) => info!(target: LOG_TARGET,
                "📊 Expected work: ~{} digests",
                FormatUtils::format_number(attempts)
            ),
            None => warn!(target: LOG_TARGET, "Target is zero; no digest can qualify"),
        }

        let context = PartialHashContext::new(payload);
        let registry = Arc::new(SolutionRegistry::new());
        let stats = MinerStats::new(threads);

        let mut workers = Vec::with_capacity(threads);
        for (i, thread_stats) in stats.thread_stats.iter().enumerate() {
            let tag = FIRST_WORKER_TAG + i as u8;
            match start_mining_thread(
                tag,
                context.clone(),
                target,
                Arc::clone(&registry),
                Arc::clone(thread_stats),
            ) {
                Ok(handle) => workers.push(handle),
                Err(e) => {
                    registry.request_stop();
                    join_workers(workers);
                    return Err(e);
                }
            }
        }

        let deadline = Deadline::new(self.config.timeout)
            .with_granularity(self.config.deadline_granularity);
        let deadline_registry = Arc::clone(&registry);
        let deadline_handle = match thread::Builder::new()
            .name("deadline".to_string())
            .spawn(move || deadline.run(&deadline_registry))
        {
            Ok(handle) => handle,
            Err(source) => {
                registry.request_stop();
                join_workers(workers);
                return Err(MinerError::ThreadSpawn {
                    name: "deadline".to_string(),
                    source,
                });
            }
        };
        debug!(target: LOG_TARGET, "Spawned {} workers and the deadline", workers.len());

        let mut failure = join_workers(workers);
        match deadline_handle.join() {
            Ok(exit) => debug!(target: LOG_TARGET, "Deadline joined: {:?}", exit),
            Err(_) => {
                failure.get_or_insert(MinerError::ThreadPanicked {
                    name: "deadline".to_string(),
                });
            }
        }
        if let Some(e) = failure {
            return Err(e);
        }

        stats.log_summary();

        let outcome = match registry.solution() {
            Some(solution) => SearchOutcome::Solved(solution),
            None => {
                info!(target: LOG_TARGET, "❌ No solution found");
                SearchOutcome::Exhausted
            }
        };

        Ok(SearchReport {
            outcome,
            elapsed: stats.elapsed(),
            total_hashes: stats.total_hashes(),
            threads,
            workers_with_digest: stats.workers_with_digest(),
        })
    }
}

/// Join every worker, returning the first panic as an error
fn join_workers(workers: Vec<JoinHandle<WorkerExit>>) -> Option<MinerError> {
    let mut failure = None;
    for handle in workers {
        let name = handle.thread().name().unwrap_or("worker").to_string();
        match handle.join() {
            Ok(exit) => debug!(target: LOG_TARGET, "{} joined: {:?}", name, exit),
            Err(_) => {
                failure.get_or_insert(MinerError::ThreadPanicked { name });
            }
        }
    }
    failure
}

// Changelog:
// - v1.0.0 (2026-10-17): Initial release.
//   - Purpose: Coordinates workers and the deadline for one search.
//   - Note: Spawn failures stop and join whatever already started before
//     the error is returned.
