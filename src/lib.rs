// Commit Miner - Free and Open Source Software Statement
//
// This project, commit-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.0.0
//
// This file serves as the main library entry point for the commit miner,
// located at the root of the source tree. It exports all public modules and
// types that the binary and the integration tests use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: core, miner, utils

pub mod core;
pub mod miner;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::core::{MinerError, Nonce, NonceSequence, PartialHashContext, TargetDigest};
pub use crate::miner::{CpuMiner, MinerConfig, SearchOutcome, SearchReport, Solution, SolutionRegistry};

pub type Result<T> = std::result::Result<T, MinerError>;

// Changelog:
// - v1.0.0 (2026-10-17): Initial release.
//   - Purpose: Establishes the library root, organizing the project into
//     core, miner and utils modules.
