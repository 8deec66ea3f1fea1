// Commit Miner - Free and Open Source Software Statement
//
// This project, commit-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/commit.rs
// Version: 1.0.0
//
// This file implements the precomputed SHA-1 state of a git commit object,
// located in the core subdirectory of the commit miner source tree. The
// header and payload are absorbed once; workers clone the state and only
// hash the nonce.
//
// Tree Location:
// - src/core/commit.rs (partial commit hash)
// - Depends on: sha1 crate

use crate::core::nonce::Nonce;
use crate::core::types::{Digest, NONCE_LEN};
use sha1::{Digest as _, Sha1};

/// SHA-1 state after absorbing `commit <len>\0` and the payload
#[derive(Clone)]
pub struct PartialHashContext {
    hasher: Sha1,
}

impl PartialHashContext {
    pub fn new(payload: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(commit_header(payload.len()));
        hasher.update(payload);
        Self { hasher }
    }

    /// Finish the digest for one candidate nonce, leaving `self` untouched
    #[inline]
    pub fn digest_with(&self, nonce: &Nonce) -> Digest {
        let mut hasher = self.hasher.clone();
        hasher.update(nonce.as_bytes());
        hasher.finalize().into()
    }
}

/// Git object header for a commit whose final size includes the nonce
pub fn commit_header(payload_len: usize) -> Vec<u8> {
    let mut header = format!("commit {}", payload_len + NONCE_LEN).into_bytes();
    header.push(0);
    header
}

/// Digest of a complete commit object (header, payload and nonce)
pub fn commit_digest(payload: &[u8], nonce: &[u8]) -> Digest {
    let mut hasher = Sha1::new();
    hasher.update(commit_header(payload.len()));
    hasher.update(payload);
    hasher.update(nonce);
    hasher.finalize().into()
}

// Changelog:
// - v1.0.0 (2026-10-17): Initial release.
//   - Purpose: Precomputes the commit prefix once per run.
//   - Note: commit_digest hashes from scratch and is used to verify results.
