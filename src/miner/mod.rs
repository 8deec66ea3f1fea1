// Commit Miner - Free and Open Source Software Statement
//
// This project, commit-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for the miner functionality of the
// commit miner, located in the miner subdirectory. It declares submodules and
// re-exports key types for use throughout the project.
//
// Tree Location:
// - src/miner/mod.rs (miner module entry point)
// - Submodules: cpu, deadline, registry, stats

pub mod cpu;
pub mod deadline;
pub mod registry;
pub mod stats;

// Re-export key types for convenience
pub use cpu::{CpuMiner, MinerConfig, SearchOutcome, SearchReport};
pub use deadline::{Deadline, DeadlineExit};
pub use registry::{Solution, SolutionRegistry};
pub use stats::{MinerStats, ThreadStats};

// Changelog:
// - v1.0.0 (2026-10-17): Initial release.
//   - Declares cpu, deadline, registry and stats submodules.
