//! Host capabilities the shims are written against.
//!
//! The RTOS image supplies these at link time. `zshim-ffi` binds them to
//! Zephyr symbols; tests bind them to std-backed mocks. A host exposing the
//! same primitives under other names only needs its own impls.
//!
//! Methods take `&self`: real hosts are zero-sized handles onto global
//! kernel state, mocks use interior mutability.

use core::ffi::{c_int, c_void};
use core::ptr::NonNull;

use crate::errno::Errno;

/// The host's aligned allocator (`aligned_alloc`).
pub trait AlignedAlloc {
    /// Allocate `size` bytes aligned to `alignment`.
    ///
    /// Returns `None` on failure; the host may record the cause in errno.
    /// Ownership of a returned block passes to the caller, who releases it
    /// with the host's `free`.
    fn aligned_alloc(&self, alignment: usize, size: usize) -> Option<NonNull<c_void>>;
}

/// The host's pseudo-random generator (`rand`).
///
/// Not cryptographically secure. The sequence is reproducible from the
/// default seed state.
pub trait PseudoRandom {
    /// Next value in `[0, RAND_MAX]`.
    fn rand(&self) -> c_int;
}

/// The kernel's millisecond sleep (`k_msleep`).
pub trait KernelSleep {
    /// Block the calling thread for at least `ms` milliseconds.
    ///
    /// Returns 0 when the full duration elapsed, or the milliseconds left
    /// if the thread was woken early.
    fn msleep(&self, ms: i32) -> i32;
}

/// Access to the calling thread's errno.
pub trait ErrnoAccess {
    /// Current errno.
    fn errno(&self) -> Errno;
    /// Overwrite errno.
    fn set_errno(&self, errno: Errno);
}
