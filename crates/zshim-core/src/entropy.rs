//! Entropy fill behind the `getentropy` entry point.
//!
//! # Security
//!
//! The bytes come from the host's [`PseudoRandom`] generator in its default
//! seed state. They are predictable, repeat across boots, and must never
//! be used for keys, nonces, or anything else that has to stay secret. The
//! fill exists so that runtimes which seed hash tables or similar at start
//! can link and run.

use crate::config::ShimConfig;
use crate::error::ShimError;
use crate::platform::PseudoRandom;

/// Check a request of `len` bytes against the configured ceiling.
pub fn validate_request(len: usize, config: &ShimConfig) -> Result<(), ShimError> {
    if len > config.entropy_max_len {
        return Err(ShimError::EntropyTooLong {
            requested: len,
            limit: config.entropy_max_len,
        });
    }
    Ok(())
}

/// Fill `buf` with pseudo-random bytes, one generator draw per byte.
///
/// The buffer is not touched unless the request passes
/// [`validate_request`]. Not cryptographically secure; see the
/// [module docs](self).
pub fn fill<R>(rng: &R, config: &ShimConfig, buf: &mut [u8]) -> Result<(), ShimError>
where
    R: PseudoRandom + ?Sized,
{
    validate_request(buf.len(), config)?;
    for byte in buf.iter_mut() {
        *byte = rng.rand().rem_euclid(256) as u8;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use core::ffi::c_int;
    use proptest::prelude::*;

    /// Counts upward from a start value; lets tests see which draw hit which byte.
    struct Counter(Cell<c_int>);

    impl PseudoRandom for Counter {
        fn rand(&self) -> c_int {
            let v = self.0.get();
            self.0.set(v.wrapping_add(1));
            v
        }
    }

    #[test]
    fn one_draw_per_byte_in_order() {
        let rng = Counter(Cell::new(254));
        let mut buf = [0u8; 4];
        fill(&rng, &ShimConfig::DEFAULT, &mut buf).unwrap();
        assert_eq!(buf, [254, 255, 0, 1]);
        assert_eq!(rng.0.get(), 258);
    }

    #[test]
    fn takes_low_byte_of_large_values() {
        let rng = Counter(Cell::new(0x7fff_ff10));
        let mut buf = [0u8; 1];
        fill(&rng, &ShimConfig::DEFAULT, &mut buf).unwrap();
        assert_eq!(buf, [0x10]);
    }

    #[test]
    fn negative_draw_still_yields_a_byte() {
        let rng = Counter(Cell::new(-1));
        let mut buf = [0u8; 2];
        fill(&rng, &ShimConfig::DEFAULT, &mut buf).unwrap();
        assert_eq!(buf, [255, 0]);
    }

    #[test]
    fn exactly_256_bytes_allowed() {
        let rng = Counter(Cell::new(0));
        let mut buf = [0u8; 256];
        fill(&rng, &ShimConfig::DEFAULT, &mut buf).unwrap();
        for (i, b) in buf.iter().enumerate() {
            assert_eq!(*b as usize, i);
        }
    }

    #[test]
    fn over_ceiling_leaves_buffer_untouched() {
        let rng = Counter(Cell::new(1));
        let mut buf = [0xAAu8; 257];
        let err = fill(&rng, &ShimConfig::DEFAULT, &mut buf).unwrap_err();
        assert_eq!(
            err,
            ShimError::EntropyTooLong {
                requested: 257,
                limit: 256
            }
        );
        assert!(buf.iter().all(|&b| b == 0xAA));
        assert_eq!(rng.0.get(), 1, "generator must not be drawn on rejection");
    }

    #[test]
    fn empty_request_succeeds_without_draws() {
        let rng = Counter(Cell::new(7));
        fill(&rng, &ShimConfig::DEFAULT, &mut []).unwrap();
        assert_eq!(rng.0.get(), 7);
    }

    #[test]
    fn lowered_ceiling_is_honoured() {
        let cfg = ShimConfig {
            entropy_max_len: 16,
            ..ShimConfig::DEFAULT
        };
        assert!(validate_request(16, &cfg).is_ok());
        assert!(validate_request(17, &cfg).is_err());
    }

    proptest! {
        #[test]
        fn lengths_up_to_256_accepted(len in 0usize..=256) {
            prop_assert!(validate_request(len, &ShimConfig::DEFAULT).is_ok());
        }

        #[test]
        fn lengths_above_256_rejected(len in 257usize..1 << 20) {
            let err = validate_request(len, &ShimConfig::DEFAULT).unwrap_err();
            prop_assert!(err.is_invalid_argument());
        }
    }
}
