// Commit Miner - Free and Open Source Software Statement
//
// This project, commit-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for the core functionality of the
// commit miner, located in the core subdirectory. It declares submodules and
// re-exports key types for use throughout the project.

pub mod commit;
pub mod error;
pub mod nonce;
pub mod target;
pub mod types;

// Re-export the most commonly used items
pub use commit::{PartialHashContext, commit_digest, commit_header};
pub use error::MinerError;
pub use nonce::{Nonce, NonceSequence};
pub use target::TargetDigest;
pub use types::{Args, Digest};

// Changelog:
// - v1.0.0 (2026-10-17): Initial release.
//   - Declares commit, error, nonce, target and types submodules.
