// Commit Miner - Free and Open Source Software Statement
//
// This project, commit-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/target.rs
// Version: 1.0.0
//
// This file contains the target digest used as the proof-of-work threshold,
// located in the core subdirectory. It parses the hex target supplied on the
// command line and decides whether a digest qualifies.

use crate::core::error::MinerError;
use crate::core::types::{DIGEST_LEN, Digest, TARGET_HEX_LEN};
use log::debug;
use std::fmt;
use uint::construct_uint;

const LOG_TARGET: &str = "commit_miner::target";

construct_uint! {
    /// Wide enough to hold 2^160 for work estimates
    pub struct U192(3);
}

/// Immutable 160-bit threshold; a digest qualifies when it is strictly smaller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDigest([u8; DIGEST_LEN]);

impl TargetDigest {
    pub const fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a hex target. Input shorter than 40 characters is right-padded
    /// with '0', longer input is truncated to its first 40 characters.
    pub fn from_hex(input: &str) -> Result<Self, MinerError> {
        let normalised = normalise_hex(input);
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(&normalised, &mut bytes).map_err(|source| {
            MinerError::InvalidTarget {
                input: input.to_string(),
                source,
            }
        })?;
        debug!(target: LOG_TARGET, "Target {:?} normalised to {}", input, normalised);
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Big-endian comparison: the first differing byte decides
    #[inline]
    pub fn is_met_by(&self, digest: &Digest) -> bool {
        digest < &self.0
    }

    /// Average number of digests needed to hit the target, saturated to u64.
    /// `None` when no digest can qualify.
    pub fn expected_attempts(&self) -> Option<u64> {
        let target = U192::from_big_endian(&self.0);
        if target.is_zero() {
            return None;
        }
        let space = U192::one() << (DIGEST_LEN * 8);
        let attempts = space / target;
        if attempts > U192::from(u64::MAX) {
            Some(u64::MAX)
        } else {
            Some(attempts.low_u64())
        }
    }
}

impl fmt::Display for TargetDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Pad or truncate to exactly 40 hex characters
pub fn normalise_hex(input: &str) -> String {
    let mut normalised: String = input.chars().take(TARGET_HEX_LEN).collect();
    while normalised.chars().count() < TARGET_HEX_LEN {
        normalised.push('0');
    }
    normalised
}

// Changelog:
// - v1.0.0 (2026-10-17): Initial release.
//   - Hex parsing with right zero-padding and truncation to 40 characters.
//   - Strict byte-wise comparison and expected-attempts estimate.
