// Commit Miner - Free and Open Source Software Statement
//
// This project, commit-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/nonce_test.rs
// Version: 1.0.0
//
// This file contains tests for the nonce layout and the radix-95 odometer.
//
// Tree Location:
// - tests/nonce_test.rs (nonce sequence tests)
// - Depends on: commit-miner, rand

#[cfg(test)]
mod tests {
    use commit_miner::core::nonce::{ALPHABET_MAX, ALPHABET_MIN, RADIX, TERMINATOR};
    use commit_miner::{Nonce, NonceSequence};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_advance_increments_rightmost_digit() {
        let mut sequence = NonceSequence::from_counter(b'A', *b"0000000 ");
        let nonce = sequence.advance();
        assert_eq!(nonce.as_bytes(), b"A0000000!\n", "Rightmost digit should step by one symbol");
    }

    #[test]
    fn test_advance_carries_leftwards() {
        let mut sequence = NonceSequence::from_counter(b'B', *b"     !~~");
        let nonce = sequence.advance();
        assert_eq!(nonce.as_bytes(), b"B     \"  \n", "Maxed digits should reset and carry");
    }

    #[test]
    fn test_successive_advances_match_radix_95_successor() {
        let start = NonceSequence::from_counter(b'C', *b"a1b2c3dz").current();
        let mut sequence = NonceSequence::from_counter(b'C', *b"a1b2c3dz");

        // More than two full wraps of the rightmost digit
        for n in 1..=(RADIX * 2 + 7) {
            let nonce = sequence.advance();
            assert_eq!(nonce.counter_value(), start.counter_value() + n, "Counter should be the {}th successor", n);
            assert_eq!(nonce.tag(), b'C', "Identity tag must never change");
            assert!(nonce.is_well_formed(), "Nonce {:?} should stay printable", nonce);
        }
    }

    #[test]
    fn test_exhausted_counter_wraps_without_touching_tag() {
        let mut sequence = NonceSequence::from_counter(b'D', [ALPHABET_MAX; 8]);
        let nonce = sequence.advance();
        assert_eq!(nonce.tag(), b'D', "Overflow must not spill into the tag");
        assert_eq!(nonce.counter(), &[ALPHABET_MIN; 8], "Counter should wrap to zero");
        assert_eq!(nonce.counter_value(), 0);

        let next = sequence.advance();
        assert_eq!(next.counter_value(), 1, "Counting should resume after the wrap");
    }

    #[test]
    fn test_seeded_sequence_uses_hex_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        let sequence = NonceSequence::seeded(b'E', &mut rng);
        let seed = sequence.current();

        assert_eq!(seed.tag(), b'E');
        assert_eq!(seed.as_bytes()[9], TERMINATOR, "Nonce should end with the terminator");
        assert!(
            seed.counter().iter().all(|d| d.is_ascii_hexdigit() && !d.is_ascii_uppercase()),
            "Seed digits should be lowercase hex: {:?}",
            seed
        );
    }

    #[test]
    fn test_seeded_sequence_is_reproducible_for_a_fixed_rng() {
        let a = NonceSequence::seeded(b'F', &mut StdRng::seed_from_u64(7)).current();
        let b = NonceSequence::seeded(b'F', &mut StdRng::seed_from_u64(7)).current();
        let c = NonceSequence::seeded(b'F', &mut StdRng::seed_from_u64(8)).current();
        assert_eq!(a, b, "Same RNG state should give the same seed");
        assert_ne!(a.counter(), c.counter(), "Different RNG state should give a different seed");
    }

    #[test]
    fn test_nonce_from_slice_and_display() {
        let nonce = Nonce::try_from(&b"Gabcdefgh\n"[..]).unwrap();
        assert!(nonce.is_well_formed());
        assert_eq!(nonce.to_string(), "Gabcdefgh", "Display should drop the terminator");
        assert!(Nonce::try_from(&b"short"[..]).is_err(), "Wrong length should be rejected");

        let no_terminator = Nonce::try_from(&b"Gabcdefghi"[..]).unwrap();
        assert!(!no_terminator.is_well_formed());
    }
}

// Changelog:
// - v1.0.0 (2026-10-17): Initial nonce test implementation.
