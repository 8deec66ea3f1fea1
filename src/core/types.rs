// Commit Miner - Free and Open Source Software Statement
//
// This project, commit-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.0.0
//
// This file defines shared constants and the command-line arguments for the
// commit miner, located in the core subdirectory.
//
// Tree Location:
// - src/core/types.rs (constants and CLI arguments)
// - Depends on: clap

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Upper bound on worker threads (one identity tag per worker, 'A'..='P')
pub const MAX_THREADS: usize = 16;

/// Length of a SHA-1 digest in bytes
pub const DIGEST_LEN: usize = 20;

/// Length of the target once normalised to hex characters
pub const TARGET_HEX_LEN: usize = DIGEST_LEN * 2;

/// Bytes appended to the payload: tag + 8 counter digits + terminator
pub const NONCE_LEN: usize = 10;

/// Largest payload accepted on input
pub const MAX_PAYLOAD: usize = 4096;

/// Sleep increment of the deadline thread
pub const DEADLINE_GRANULARITY: Duration = Duration::from_millis(100);

/// Identity tag of the first worker; following workers count up from here
pub const FIRST_WORKER_TAG: u8 = b'A';

/// Process exit status when the run ends without a solution
pub const EXIT_NO_SOLUTION: i32 = 1;

/// Process exit status for invocation errors (matches clap usage errors)
pub const EXIT_INVOCATION: i32 = 2;

/// Process exit status for runtime faults such as a failed thread spawn
pub const EXIT_FAULT: i32 = 3;

/// A 20-byte SHA-1 digest
pub type Digest = [u8; DIGEST_LEN];

/// Command-line arguments for the commit miner
#[derive(Parser, Debug)]
#[command(
    name = "miner",
    version,
    about = "Multi-threaded SHA-1 nonce search for git commit payloads",
    long_about = "Reads a commit payload from stdin (or --input), searches for a 10-byte\n\
                  nonce that makes the git commit id numerically smaller than TARGET and\n\
                  writes payload + nonce to stdout.\n\n\
                  Examples:\n\
                    git cat-file commit HEAD | miner 000001 8 60 > mined\n\
                    miner --input commit.txt 0000ffff 4 2.5\n\n\
                  Exit status: 0 solved, 1 no solution before the timeout, 2 bad invocation,\n\
                  3 runtime fault."
)]
pub struct Args {
    /// Target digest in hex. Shorter values are right-padded with '0',
    /// longer values are truncated to 40 characters
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Number of worker threads, clamped to 1..=16
    #[arg(value_name = "THREADS", allow_negative_numbers = true)]
    pub threads: i64,

    /// Search timeout in seconds (fractional allowed, ~100 ms granularity)
    #[arg(value_name = "TIMEOUT", allow_negative_numbers = true)]
    pub timeout: f64,

    /// Read the payload from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Log level for diagnostics written to stderr
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: log::LevelFilter,

    /// log4rs YAML configuration replacing the built-in stderr logger
    #[arg(long, value_name = "FILE")]
    pub log_config: Option<PathBuf>,
}

impl Args {
    /// Validate arguments and return helpful errors
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout.is_nan() {
            return Err("Timeout must be a number of seconds".to_string());
        }
        if let Some(ref path) = self.log_config {
            if !path.is_file() {
                return Err(format!("Log configuration {} is not a file", path.display()));
            }
        }
        Ok(())
    }

    /// Requested thread count clamped to 1..=MAX_THREADS
    pub fn thread_count(&self) -> usize {
        clamp_threads(self.threads)
    }

    /// Timeout as a duration; non-positive values become zero
    pub fn timeout_duration(&self) -> Duration {
        seconds_to_duration(self.timeout)
    }
}

/// Clamp a requested thread count to 1..=MAX_THREADS
pub fn clamp_threads(requested: i64) -> usize {
    requested.clamp(1, MAX_THREADS as i64) as usize
}

/// Convert fractional seconds to a duration, saturating instead of failing
pub fn seconds_to_duration(secs: f64) -> Duration {
    if secs.is_nan() || secs <= 0.0 {
        Duration::ZERO
    } else {
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }
}

// Changelog:
// - v1.0.0 (2026-10-17): Initial release.
//   - Positional TARGET THREADS TIMEOUT arguments with --input, --log-level
//     and --log-config options.
//   - Search constants shared by the core and miner modules.
