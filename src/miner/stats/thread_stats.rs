// Commit Miner - Free and Open Source Software Statement
//
// This project, commit-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/thread_stats.rs
// Version: 1.0.0
//
// This file implements per-worker statistics for the commit miner, located in
// the stats subdirectory of the miner module. It counts digests computed and
// whether the worker reached a qualifying digest.
//
// Tree Location:
// - src/miner/stats/thread_stats.rs (per-worker statistics logic)
// - Depends on: std

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

pub struct ThreadStats {
    tag: u8,
    pub hashes_computed: AtomicU64,
    found_digest: AtomicBool,
    won_race: AtomicBool,
    start_time: Instant,
}

impl ThreadStats {
    /// Create a new ThreadStats instance for the worker with identity `tag`
    pub fn new(tag: u8) -> Self {
        Self {
            tag,
            hashes_computed: AtomicU64::new(0),
            found_digest: AtomicBool::new(false),
            won_race: AtomicBool::new(false),
            start_time: Instant::now(),
        }
    }

    pub fn tag(&self) -> char {
        char::from(self.tag)
    }

    /// Add a batch of locally counted digests
    pub fn add_hashes(&self, hashes: u64) {
        self.hashes_computed.fetch_add(hashes, Ordering::Relaxed);
    }

    pub fn hashes(&self) -> u64 {
        self.hashes_computed.load(Ordering::Relaxed)
    }

    /// Record a qualifying digest and whether it became the solution
    pub fn record_found(&self, won: bool) {
        self.found_digest.store(true, Ordering::Relaxed);
        if won {
            self.won_race.store(true, Ordering::Relaxed);
        }
    }

    pub fn found_digest(&self) -> bool {
        self.found_digest.load(Ordering::Relaxed)
    }

    pub fn won_race(&self) -> bool {
        self.won_race.load(Ordering::Relaxed)
    }

    /// Average digests per second since the worker was created
    pub fn hashrate(&self) -> f64 {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.hashes() as f64 / elapsed
        } else {
            0.0
        }
    }
}

// Changelog:
// - v1.0.0 (2026-10-17): Initial release.
//   - Hash counter, found/won flags and average hashrate per worker.
