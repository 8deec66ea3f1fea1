// Commit Miner - Free and Open Source Software Statement
//
// This project, commit-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/miner_stats.rs
// Version: 1.0.0
//
// This file implements run-wide statistics for the commit miner, located in
// the stats subdirectory of the miner module. It aggregates the per-worker
// counters and prints the summary once a run has joined.
//
// Tree Location:
// - src/miner/stats/miner_stats.rs (run-wide statistics logic)
// - Depends on: std, thread_stats, utils::format

use super::thread_stats::ThreadStats;
use crate::core::types::FIRST_WORKER_TAG;
use crate::utils::format::FormatUtils;
use log::{debug, info};
use std::sync::Arc;
use std::time::{Duration, Instant};

const LOG_TARGET: &str = "commit_miner::stats";

pub struct MinerStats {
    start_time: Instant,
    pub thread_stats: Vec<Arc<ThreadStats>>,
}

impl MinerStats {
    pub fn new(num_threads: usize) -> Self {
        let thread_stats = (0..num_threads)
            .map(|i| Arc::new(ThreadStats::new(FIRST_WORKER_TAG + i as u8)))
            .collect();

        Self {
            start_time: Instant::now(),
            thread_stats,
        }
    }

    pub fn total_hashes(&self) -> u64 {
        self.thread_stats.iter().map(|t| t.hashes()).sum()
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn total_hashrate(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.total_hashes() as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Workers that reached a qualifying digest, winners and losers alike
    pub fn workers_with_digest(&self) -> usize {
        self.thread_stats.iter().filter(|t| t.found_digest()).count()
    }

    pub fn log_summary(&self) {
        info!(target: LOG_TARGET,
            "⏱️ Elapsed time: {:.3} s, {} hashes at {}",
            self.elapsed().as_secs_f64(),
            FormatUtils::format_number(self.total_hashes()),
            FormatUtils::format_hashrate(self.total_hashrate())
        );
        for thread in &self.thread_stats {
            debug!(target: LOG_TARGET,
                "Worker {}: {} hashes, {}{}",
                thread.tag(),
                FormatUtils::format_number(thread.hashes()),
                FormatUtils::format_hashrate(thread.hashrate()),
                if thread.won_race() { " (winner)" } else { "" }
            );
        }
    }
}

// Changelog:
// - v1.0.0 (2026-10-17): Initial release.
//   - Aggregates worker hash counts into totals and a final summary.
