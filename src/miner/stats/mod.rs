// Commit Miner - Free and Open Source Software Statement
//
// This project, commit-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for statistics tracking in the commit
// miner, located in the stats subdirectory of the miner module.
//
// Tree Location:
// - src/miner/stats/mod.rs (stats module entry point)
// - Submodules: miner_stats, thread_stats

pub mod miner_stats;
pub mod thread_stats;

// Re-export key types for convenience
pub use miner_stats::MinerStats;
pub use thread_stats::ThreadStats;

// Changelog:
// - v1.0.0 (2026-10-17): Initial release.
