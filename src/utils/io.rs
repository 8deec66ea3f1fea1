// Commit Miner - Free and Open Source Software Statement
//
// This project, commit-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/io.rs
// Version: 1.0.0
//
// This file reads the commit payload and writes the mined commit, located in
// the utils subdirectory.

use crate::core::error::MinerError;
use crate::core::nonce::Nonce;
use crate::core::types::MAX_PAYLOAD;
use log::debug;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

const LOG_TARGET: &str = "commit_miner::io";

/// Read the whole stream, rejecting anything longer than `limit` bytes
pub fn read_payload<R: Read>(reader: R, limit: usize, origin: &str) -> Result<Vec<u8>, MinerError> {
    let mut payload = Vec::new();
    reader
        .take(limit as u64 + 1)
        .read_to_end(&mut payload)
        .map_err(|source| MinerError::PayloadRead {
            origin: origin.to_string(),
            source,
        })?;
    if payload.len() > limit {
        return Err(MinerError::PayloadTooLarge { limit });
    }
    debug!(target: LOG_TARGET, "Read {} payload bytes from {}", payload.len(), origin);
    Ok(payload)
}

/// Payload from `path`, or stdin when no path is given
pub fn load_payload(path: Option<&Path>) -> Result<Vec<u8>, MinerError> {
    match path {
        Some(path) => {
            let origin = path.display().to_string();
            let file = File::open(path).map_err(|source| MinerError::PayloadRead {
                origin: origin.clone(),
                source,
            })?;
            read_payload(file, MAX_PAYLOAD, &origin)
        }
        None => read_payload(io::stdin().lock(), MAX_PAYLOAD, "stdin"),
    }
}

/// Payload immediately followed by the nonce bytes
pub fn write_commit<W: Write>(mut out: W, payload: &[u8], nonce: &Nonce) -> io::Result<()> {
    out.write_all(payload)?;
    out.write_all(nonce.as_bytes())?;
    out.flush()
}

// Changelog:
// - v1.0.0 (2026-10-17): Initial release.
//   - Oversized payloads are rejected instead of silently truncated.
