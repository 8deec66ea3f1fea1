// Commit Miner - Free and Open Source Software Statement
//
// This project, commit-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/cpu/thread.rs
// Version: 1.0.0
//
// This file contains the implementation of individual mining threads for the
// commit miner, located in the cpu subdirectory of the miner module. It
// handles nonce iteration, digest computation and the race for the solution.

use crate::core::{NonceSequence, PartialHashContext, TargetDigest};
use crate::core::error::MinerError;
use crate::miner::registry::{Solution, SolutionRegistry};
use crate::miner::stats::ThreadStats;
use log::{debug, info};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

const LOG_TARGET: &str = "commit_miner::thread";

/// Digests counted locally before being published to ThreadStats
const HASH_REPORT_INTERVAL: u64 = 1 << 16;

/// How a worker left its loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerExit {
    /// Observed the stop flag without finding anything
    Stopped,
    /// Found a qualifying digest and stored it as the solution
    Won,
    /// Found a qualifying digest but another worker had already won
    Lost,
}

/// Spawn a named worker thread. The worker owns its copy of the context.
pub fn start_mining_thread(
    tag: u8,
    context: PartialHashContext,
    target: TargetDigest,
    registry: Arc<SolutionRegistry>,
    thread_stats: Arc<ThreadStats>,
) -> Result<JoinHandle<WorkerExit>, MinerError> {
    let name = format!("worker-{}", char::from(tag));
    thread::Builder::new()
        .name(name.clone())
        .spawn(move || {
            let sequence = NonceSequence::seeded(tag, &mut rand::thread_rng());
            debug!(target: LOG_TARGET, "Worker {} starting at {}", char::from(tag), sequence.current());
            mining_loop(sequence, &context, &target, &registry, &thread_stats)
        })
        .map_err(|source| MinerError::ThreadSpawn { name, source })
}

/// Search until a qualifying digest is found or a stop is requested.
/// The stop flag is checked once per candidate.
pub fn mining_loop(
    mut sequence: NonceSequence,
    context: &PartialHashContext,
    target: &TargetDigest,
    registry: &SolutionRegistry,
    thread_stats: &ThreadStats,
) -> WorkerExit {
    let mut hash_count = 0u64;
    let mut exit = WorkerExit::Stopped;

    while !registry.is_stopped() {
        let nonce = sequence.advance();
        let digest = context.digest_with(&nonce);
        hash_count += 1;

        if target.is_met_by(&digest) {
            let solution = Solution { nonce, digest };
            info!(target: LOG_TARGET,
                "💎 ({}) found {} with nonce {:?}",
                char::from(nonce.tag()),
                solution.digest_hex(),
                nonce.to_string()
            );
            let won = registry.try_commit(solution);
            if won {
                info!(target: LOG_TARGET, "🏆 ({}) solution {}", char::from(nonce.tag()), solution.digest_hex());
            }
            thread_stats.record_found(won);
            exit = if won { WorkerExit::Won } else { WorkerExit::Lost };
            break;
        }

        if hash_count == HASH_REPORT_INTERVAL {
            thread_stats.add_hashes(hash_count);
            hash_count = 0;
        }
    }

    thread_stats.add_hashes(hash_count);
    exit
}

// Changelog:
// - v1.0.0 (2026-10-17): Initial release.
//   - Purpose: Worker loop of the commit nonce search.
//   - Note: A worker stops after its first qualifying digest, win or lose.
