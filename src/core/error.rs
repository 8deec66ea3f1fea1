// Commit Miner - Free and Open Source Software Statement
//
// This project, commit-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/error.rs
// Version: 1.0.0

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MinerError {
    #[error("Target {input:?} is not valid hex")]
    InvalidTarget {
        input: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("Payload exceeds the {limit} byte limit")]
    PayloadTooLarge { limit: usize },

    #[error("Failed to read payload from {origin}")]
    PayloadRead {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to spawn thread {name}")]
    ThreadSpawn {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Thread {name} panicked")]
    ThreadPanicked { name: String },

    #[error("Failed to load log configuration {path:?}: {message}")]
    LogConfig { path: PathBuf, message: String },

    #[error("Failed to initialise logging: {message}")]
    LogInit { message: String },
}

impl MinerError {
    /// Errors raised before any search work starts
    pub fn is_invocation_error(&self) -> bool {
        !matches!(self, MinerError::ThreadSpawn { .. } | MinerError::ThreadPanicked { .. })
    }
}

// Changelog:
// - v1.0.0 (2026-10-17): Initial release.
