//! Error types for the shim operations.
//!
//! Two kinds of failure exist: the host allocator refused a request, or a
//! caller broke a precondition. [`ShimError::errno`] maps each onto the
//! value the C surface reports.

use core::error::Error;
use core::fmt;

use crate::errno::Errno;

/// Failure of a shim operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShimError {
    /// The host allocator returned null.
    AllocationFailed {
        /// Host errno observed right after the failed call. May be
        /// [`Errno::NONE`] if the host did not set one.
        errno: Errno,
    },
    /// The output slot for an allocation was null.
    NullOutput,
    /// The entropy buffer was null.
    NullBuffer,
    /// Alignment is not a power of two or not a multiple of the pointer size.
    InvalidAlignment {
        /// The rejected alignment.
        alignment: usize,
    },
    /// Entropy request exceeds the per-call ceiling.
    EntropyTooLong {
        /// Requested length in bytes.
        requested: usize,
        /// Configured ceiling in bytes.
        limit: usize,
    },
}

impl ShimError {
    /// The errno a C caller sees for this failure.
    ///
    /// An allocation failure with no recorded errno reports `ENOMEM`:
    /// `posix_memalign` returning 0 would read as success.
    pub fn errno(&self) -> Errno {
        match self {
            Self::AllocationFailed { errno } if errno.is_none() => Errno::ENOMEM,
            Self::AllocationFailed { errno } => *errno,
            Self::NullOutput
            | Self::NullBuffer
            | Self::InvalidAlignment { .. }
            | Self::EntropyTooLong { .. } => Errno::EINVAL,
        }
    }

    /// Whether this is a caller precondition violation.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::AllocationFailed { .. })
    }
}

impl fmt::Display for ShimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { errno } => write!(f, "aligned allocation failed: {errno}"),
            Self::NullOutput => write!(f, "allocation output slot is null"),
            Self::NullBuffer => write!(f, "entropy buffer is null"),
            Self::InvalidAlignment { alignment } => write!(
                f,
                "alignment {alignment} is not a power-of-two multiple of the pointer size"
            ),
            Self::EntropyTooLong { requested, limit } => {
                write!(f, "entropy request of {requested} bytes exceeds {limit}")
            }
        }
    }
}

impl Error for ShimError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_failure_forwards_host_errno() {
        let e = ShimError::AllocationFailed {
            errno: Errno::ENOMEM,
        };
        assert_eq!(e.errno(), Errno::ENOMEM);
        let e = ShimError::AllocationFailed { errno: Errno(5) };
        assert_eq!(e.errno(), Errno(5));
    }

    #[test]
    fn allocation_failure_without_errno_reports_enomem() {
        let e = ShimError::AllocationFailed { errno: Errno::NONE };
        assert_eq!(e.errno(), Errno::ENOMEM);
    }

    #[test]
    fn precondition_violations_map_to_einval() {
        let cases = [
            ShimError::NullOutput,
            ShimError::NullBuffer,
            ShimError::InvalidAlignment { alignment: 3 },
            ShimError::EntropyTooLong {
                requested: 257,
                limit: 256,
            },
        ];
        for e in cases {
            assert_eq!(e.errno(), Errno::EINVAL, "{e}");
            assert!(e.is_invalid_argument());
        }
        let oom = ShimError::AllocationFailed {
            errno: Errno::ENOMEM,
        };
        assert!(!oom.is_invalid_argument());
    }

    #[test]
    fn display_mentions_the_numbers() {
        let msg = ShimError::EntropyTooLong {
            requested: 300,
            limit: 256,
        }
        .to_string();
        assert!(msg.contains("300") && msg.contains("256"));
        let msg = ShimError::InvalidAlignment { alignment: 12 }.to_string();
        assert!(msg.contains("12"));
    }
}
