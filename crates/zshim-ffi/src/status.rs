//! C-compatible status codes.
//!
//! `posix_memalign` reports failures as a positive errno value; only
//! `getentropy` uses [`ShimStatus::Failed`] and leaves the cause in errno.

/// Status returned by the shim entry points.
///
/// Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShimStatus {
    /// Success.
    Ok = 0,
    /// Failure; errno holds the cause.
    Failed = -1,
}

impl ShimStatus {
    /// Whether a raw return value signals success.
    pub fn is_ok(code: i32) -> bool {
        code == ShimStatus::Ok as i32
    }
}
