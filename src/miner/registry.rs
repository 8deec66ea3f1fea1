// Commit Miner - Free and Open Source Software Statement
//
// This project, commit-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/registry.rs
// Version: 1.0.0
//
// This file implements the shared state of a search run, located in the
// miner subdirectory. It holds the stop flag observed by every thread and
// the single winning solution.
//
// Tree Location:
// - src/miner/registry.rs (stop flag and first-writer-wins solution slot)
// - Depends on: crossbeam

use crate::core::{Digest, Nonce};
use crossbeam::channel::{self, Receiver, Sender};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// The accepted nonce and the digest it produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    pub nonce: Nonce,
    pub digest: Digest,
}

impl Solution {
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }
}

/// Stop flag plus a write-once solution slot.
///
/// `claimed` is the race: the single thread whose compare-and-swap succeeds
/// is the only one that ever writes `solution`, so nobody waits and readers
/// never see a half-written value.
pub struct SolutionRegistry {
    stop_requested: AtomicBool,
    claimed: AtomicBool,
    solution: OnceLock<Solution>,
    wake_tx: Sender<()>,
    wake_rx: Receiver<()>,
}

impl SolutionRegistry {
    pub fn new() -> Self {
        let (wake_tx, wake_rx) = channel::bounded(1);
        Self {
            stop_requested: AtomicBool::new(false),
            claimed: AtomicBool::new(false),
            solution: OnceLock::new(),
            wake_tx,
            wake_rx,
        }
    }

    /// Record `solution` if no other thread got there first. Never blocks.
    pub fn try_commit(&self, solution: Solution) -> bool {
        if self
            .claimed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        // Only the claim holder reaches this point, so the cell is empty.
        let stored = self.solution.set(solution).is_ok();
        self.request_stop();
        stored
    }

    /// Ask every thread to wind down. Idempotent.
    pub fn request_stop(&self) {
        self.stop_requested.store(true, Ordering::Release);
        // A full channel already carries a pending wake-up.
        let _ = self.wake_tx.try_send(());
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stop_requested.load(Ordering::Relaxed)
    }

    pub fn is_solved(&self) -> bool {
        self.solution.get().is_some()
    }

    pub fn solution(&self) -> Option<Solution> {
        self.solution.get().copied()
    }

    /// Receiver pulsed on every stop request, used to cut sleeps short
    pub fn stop_signal(&self) -> &Receiver<()> {
        &self.wake_rx
    }
}

impl Default for SolutionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Changelog:
// - v1.0.0 (2026-10-17): Initial release.
//   - Compare-and-swap claim flag instead of a try-locked mutex.
//   - crossbeam wake-up channel for the deadline thread.
