// Commit Miner - Free and Open Source Software Statement
//
// This project, commit-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/nonce.rs
// Version: 1.0.0
//
// This file implements the printable nonce appended to the commit payload and
// the per-worker odometer that enumerates it, located in the core
// subdirectory of the commit miner source tree.
//
// Layout of the 10 nonce bytes:
//   [0]     worker identity tag ('A', 'B', ...)
//   [1..=8] radix-95 counter over ' '..='~', most significant digit first
//   [9]     terminator '\n'

use crate::core::types::NONCE_LEN;
use rand::Rng;
use std::fmt;

/// Smallest counter symbol
pub const ALPHABET_MIN: u8 = b' ';

/// Largest counter symbol
pub const ALPHABET_MAX: u8 = b'~';

/// Number of symbols per counter digit
pub const RADIX: u64 = (ALPHABET_MAX - ALPHABET_MIN) as u64 + 1;

/// Last byte of every nonce
pub const TERMINATOR: u8 = b'\n';

/// Number of counter digits
pub const COUNTER_DIGITS: usize = 8;

const TAG_POS: usize = 0;
const COUNTER_START: usize = 1;
const COUNTER_END: usize = COUNTER_START + COUNTER_DIGITS - 1;

/// A fixed-width candidate suffix
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nonce([u8; NONCE_LEN]);

impl Nonce {
    pub fn as_bytes(&self) -> &[u8; NONCE_LEN] {
        &self.0
    }

    pub fn tag(&self) -> u8 {
        self.0[TAG_POS]
    }

    pub fn counter(&self) -> &[u8] {
        &self.0[COUNTER_START..=COUNTER_END]
    }

    /// Printable counter digits and the expected terminator
    pub fn is_well_formed(&self) -> bool {
        self.counter()
            .iter()
            .all(|d| (ALPHABET_MIN..=ALPHABET_MAX).contains(d))
            && self.0[NONCE_LEN - 1] == TERMINATOR
    }

    /// Integer value of the counter digits
    pub fn counter_value(&self) -> u64 {
        self.counter()
            .iter()
            .fold(0u64, |acc, d| acc * RADIX + u64::from(d - ALPHABET_MIN))
    }
}

impl TryFrom<&[u8]> for Nonce {
    type Error = std::array::TryFromSliceError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Ok(Self(bytes.try_into()?))
    }
}

impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce({:?})", String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Terminator left out so the nonce fits on one log line
        f.write_str(&String::from_utf8_lossy(&self.0[..NONCE_LEN - 1]))
    }
}

/// Per-worker odometer over the counter digits of a nonce
#[derive(Debug, Clone)]
pub struct NonceSequence {
    current: [u8; NONCE_LEN],
}

impl NonceSequence {
    /// Start at an explicit counter state
    pub fn from_counter(tag: u8, digits: [u8; COUNTER_DIGITS]) -> Self {
        let mut current = [0u8; NONCE_LEN];
        current[TAG_POS] = tag;
        current[COUNTER_START..=COUNTER_END].copy_from_slice(&digits);
        current[NONCE_LEN - 1] = TERMINATOR;
        Self { current }
    }

    /// Start at a random counter state, two random 16-bit values rendered as
    /// eight hex digits
    pub fn seeded<R: Rng + ?Sized>(tag: u8, rng: &mut R) -> Self {
        let seed = format!("{:04x}{:04x}", rng.r#gen::<u16>(), rng.r#gen::<u16>());
        let mut digits = [ALPHABET_MIN; COUNTER_DIGITS];
        digits.copy_from_slice(seed.as_bytes());
        Self::from_counter(tag, digits)
    }

    /// The most recently produced nonce (the seed before the first advance)
    pub fn current(&self) -> Nonce {
        Nonce(self.current)
    }

    /// Step the counter by one, carrying leftwards. Overflowing the leftmost
    /// digit wraps the whole counter to zero; the tag is never touched.
    #[inline]
    pub fn advance(&mut self) -> Nonce {
        let mut pos = COUNTER_END;
        loop {
            if self.current[pos] < ALPHABET_MAX {
                self.current[pos] += 1;
                break;
            }
            self.current[pos] = ALPHABET_MIN;
            if pos == COUNTER_START {
                break;
            }
            pos -= 1;
        }
        Nonce(self.current)
    }
}

// Changelog:
// - v1.0.0 (2026-10-17): Initial release.
//   - Radix-95 odometer with wrap-around at exhaustion instead of carrying
//     into the identity tag.
