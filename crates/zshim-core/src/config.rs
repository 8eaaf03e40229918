//! Shim configuration and validation.
//!
//! [`ShimConfig`] is fixed at build time; the exported C symbols use
//! [`ShimConfig::DEFAULT`]. Other hosts may pick a stricter config, but
//! [`validate()`](ShimConfig::validate) never lets the entropy ceiling rise
//! above [`GETENTROPY_MAX`].

use core::error::Error;
use core::fmt;

/// Per-call ceiling of `getentropy`, in bytes.
pub const GETENTROPY_MAX: usize = 256;

/// Behaviour knobs for the shim operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShimConfig {
    /// Largest entropy request accepted per call. Default: 256.
    pub entropy_max_len: usize,
    /// Reject alignments that are not a power-of-two multiple of the
    /// pointer size before reaching the host allocator. Default: true.
    pub check_alignment: bool,
}

impl ShimConfig {
    /// The configuration the exported symbols run with.
    pub const DEFAULT: ShimConfig = ShimConfig {
        entropy_max_len: GETENTROPY_MAX,
        check_alignment: true,
    };

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entropy_max_len == 0 {
            return Err(ConfigError::EntropyLimitZero);
        }
        if self.entropy_max_len > GETENTROPY_MAX {
            return Err(ConfigError::EntropyLimitTooLarge {
                configured: self.entropy_max_len,
            });
        }
        Ok(())
    }
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Errors detected by [`ShimConfig::validate()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The entropy ceiling is zero, so every non-empty request would fail.
    EntropyLimitZero,
    /// The entropy ceiling exceeds [`GETENTROPY_MAX`].
    EntropyLimitTooLarge {
        /// The configured ceiling.
        configured: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntropyLimitZero => write!(f, "entropy_max_len must be at least 1"),
            Self::EntropyLimitTooLarge { configured } => write!(
                f,
                "entropy_max_len {configured} exceeds the getentropy ceiling of {GETENTROPY_MAX}"
            ),
        }
    }
}

impl Error for ConfigError {}
