//! Aligned allocation behind the `posix_memalign` entry point.
//!
//! The host only offers `aligned_alloc`. [`memalign`] forwards to it and
//! turns a null result into a [`ShimError::AllocationFailed`] carrying the
//! host's errno, read immediately after the failed call.

use core::ffi::c_void;
use core::mem::size_of;
use core::ptr::NonNull;

use crate::config::ShimConfig;
use crate::error::ShimError;
use crate::platform::{AlignedAlloc, ErrnoAccess};

/// Whether `alignment` is acceptable to `posix_memalign`: a power of two
/// and a multiple of `size_of::<*const ()>()`.
pub const fn is_valid_alignment(alignment: usize) -> bool {
    alignment.is_power_of_two() && alignment % size_of::<*const ()>() == 0
}

/// Allocate `size` bytes aligned to `alignment` from the host.
///
/// With `config.check_alignment` set, a bad alignment is rejected before
/// the host is called. Otherwise the request is forwarded verbatim and the
/// host decides.
///
/// The returned block belongs to the caller. Nothing is allocated on error.
pub fn memalign<P>(
    platform: &P,
    config: &ShimConfig,
    alignment: usize,
    size: usize,
) -> Result<NonNull<c_void>, ShimError>
where
    P: AlignedAlloc + ErrnoAccess + ?Sized,
{
    if config.check_alignment && !is_valid_alignment(alignment) {
        return Err(ShimError::InvalidAlignment { alignment });
    }
    platform
        .aligned_alloc(alignment, size)
        .ok_or_else(|| ShimError::AllocationFailed {
            errno: platform.errno(),
        })
}
