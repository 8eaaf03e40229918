//! Pointer-level shim entry points, generic over the host.
//!
//! Each function has the exact C contract of the symbol it backs and
//! differs only in taking the host and config explicitly. The `zephyr`
//! module instantiates them with the Zephyr host; tests instantiate them
//! with mocks.

use core::ffi::{c_int, c_void};
use core::slice;

use zshim_core::{entropy, memalign, sleep};
use zshim_core::{AlignedAlloc, ErrnoAccess, KernelSleep, PseudoRandom, ShimConfig, ShimError};

use crate::status::ShimStatus;

/// `posix_memalign`: allocate `size` bytes aligned to `alignment`.
///
/// Returns 0 and writes the block to `*memptr`, or returns an errno value
/// and leaves `*memptr` untouched. errno itself is not modified beyond
/// what the host allocator does.
///
/// # Safety
///
/// `memptr` must be null or valid for writing one pointer.
#[allow(unsafe_code)]
pub unsafe fn posix_memalign<P>(
    platform: &P,
    config: &ShimConfig,
    memptr: *mut *mut c_void,
    alignment: usize,
    size: usize,
) -> c_int
where
    P: AlignedAlloc + ErrnoAccess + ?Sized,
{
    if memptr.is_null() {
        return ShimError::NullOutput.errno().get();
    }
    match memalign::memalign(platform, config, alignment, size) {
        Ok(block) => {
            // SAFETY: memptr is non-null and writable per caller contract.
            unsafe { *memptr = block.as_ptr() };
            ShimStatus::Ok as c_int
        }
        Err(e) => e.errno().get(),
    }
}

/// `getentropy`: fill `length` bytes at `buffer` with pseudo-random bytes.
///
/// Returns 0, or -1 with errno set to `EINVAL` when `buffer` is null or
/// `length` exceeds `config.entropy_max_len`. Nothing is written on failure.
///
/// The bytes are NOT cryptographically secure.
///
/// # Safety
///
/// `buffer` must be null or valid for writing `length` bytes.
#[allow(unsafe_code)]
pub unsafe fn getentropy<P>(
    platform: &P,
    config: &ShimConfig,
    buffer: *mut c_void,
    length: usize,
) -> c_int
where
    P: PseudoRandom + ErrnoAccess + ?Sized,
{
    let result = if buffer.is_null() {
        Err(ShimError::NullBuffer)
    } else {
        entropy::validate_request(length, config).and_then(|()| {
            // SAFETY: buffer is non-null and valid for `length` bytes per
            // caller contract.
            let buf = unsafe { slice::from_raw_parts_mut(buffer.cast::<u8>(), length) };
            entropy::fill(platform, config, buf)
        })
    };
    match result {
        Ok(()) => ShimStatus::Ok as c_int,
        Err(e) => {
            platform.set_errno(e.errno());
            ShimStatus::Failed as c_int
        }
    }
}

/// `msleep`: sleep for at least `ms` milliseconds, returning the kernel's
/// status unchanged.
pub fn msleep<K: KernelSleep + ?Sized>(kernel: &K, ms: i32) -> i32 {
    sleep::msleep(kernel, ms)
}
