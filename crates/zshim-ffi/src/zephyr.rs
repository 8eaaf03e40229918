//! Zephyr host binding and the exported C symbols.
//!
//! [`ZephyrHost`] implements the `zshim-core` capabilities with symbols
//! the Zephyr image provides at link time:
//!
//! | Capability | Symbol | Kconfig |
//! |------------|--------|---------|
//! | aligned allocation | `aligned_alloc` | `CONFIG_COMMON_LIBC_MALLOC` |
//! | pseudo-random | `rand` | any libc |
//! | sleep | `z_impl_k_sleep` | supervisor-mode callers |
//! | errno | `z_impl_z_errno` (or `__errno` with `newlib-errno`) | `CONFIG_ERRNO_IN_TLS=n` |
//!
//! `k_msleep` itself is a `static inline` in `kernel.h` and has no symbol,
//! so the tick conversion it performs is redone here with
//! `SYS_CLOCK_TICKS_PER_SEC` from the build (`ZSHIM_SYS_CLOCK_TICKS_PER_SEC`).

use core::ffi::{c_int, c_uint, c_void};
use core::ptr::NonNull;

use zshim_core::sleep::timeout_ticks_for_ms;
use zshim_core::{AlignedAlloc, Errno, ErrnoAccess, KernelSleep, PseudoRandom, ShimConfig};

use crate::raw;

include!(concat!(env!("OUT_DIR"), "/clock.rs"));

#[cfg(not(feature = "timeout-32bit"))]
type KTicks = i64;
#[cfg(feature = "timeout-32bit")]
type KTicks = u32;

/// `k_timeout_t`.
#[repr(C)]
#[derive(Clone, Copy)]
struct KTimeout {
    ticks: KTicks,
}

/// `K_ERR_KERNEL_PANIC` from `enum k_fatal_error_reason`.
#[cfg(not(test))]
const K_ERR_KERNEL_PANIC: c_uint = 4;

extern "C" {
    fn aligned_alloc(alignment: usize, size: usize) -> *mut c_void;
    fn rand() -> c_int;
    fn z_impl_k_sleep(timeout: KTimeout) -> i32;
    #[cfg(not(feature = "newlib-errno"))]
    fn z_impl_z_errno() -> *mut c_int;
    #[cfg(feature = "newlib-errno")]
    fn __errno() -> *mut c_int;
    #[cfg(not(test))]
    fn k_fatal_halt(reason: c_uint) -> !;
}

#[cfg(not(feature = "newlib-errno"))]
#[allow(unsafe_code)]
fn errno_location() -> *mut c_int {
    // SAFETY: returns the calling thread's errno slot; never fails.
    unsafe { z_impl_z_errno() }
}

#[cfg(feature = "newlib-errno")]
#[allow(unsafe_code)]
fn errno_location() -> *mut c_int {
    // SAFETY: as above.
    unsafe { __errno() }
}

/// The running Zephyr kernel and its C library.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZephyrHost;

impl AlignedAlloc for ZephyrHost {
    #[allow(unsafe_code)]
    fn aligned_alloc(&self, alignment: usize, size: usize) -> Option<NonNull<c_void>> {
        // SAFETY: aligned_alloc accepts any arguments and reports failure as null.
        NonNull::new(unsafe { aligned_alloc(alignment, size) })
    }
}

impl PseudoRandom for ZephyrHost {
    #[allow(unsafe_code)]
    fn rand(&self) -> c_int {
        // SAFETY: no preconditions.
        unsafe { rand() }
    }
}

impl KernelSleep for ZephyrHost {
    #[allow(unsafe_code)]
    fn msleep(&self, ms: i32) -> i32 {
        let timeout = KTimeout {
            ticks: timeout_ticks_for_ms(ms, SYS_CLOCK_TICKS_PER_SEC) as KTicks,
        };
        // SAFETY: called from thread context, as k_msleep requires.
        unsafe { z_impl_k_sleep(timeout) }
    }
}

impl ErrnoAccess for ZephyrHost {
    #[allow(unsafe_code)]
    fn errno(&self) -> Errno {
        // SAFETY: errno_location is valid for the current thread.
        Errno(unsafe { *errno_location() })
    }

    #[allow(unsafe_code)]
    fn set_errno(&self, errno: Errno) {
        // SAFETY: as above.
        unsafe { *errno_location() = errno.get() };
    }
}

/// Allocate `size` bytes aligned to `alignment`; see [`raw::posix_memalign`].
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn posix_memalign(memptr: *mut *mut c_void, alignment: usize, size: usize) -> c_int {
    // SAFETY: memptr is null or writable per caller contract.
    unsafe { raw::posix_memalign(&ZephyrHost, &ShimConfig::DEFAULT, memptr, alignment, size) }
}

/// Fill `buffer` with `length` pseudo-random bytes; see [`raw::getentropy`].
///
/// NOT cryptographically secure.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn getentropy(buffer: *mut c_void, length: usize) -> c_int {
    // SAFETY: buffer is null or writable for `length` bytes per caller contract.
    unsafe { raw::getentropy(&ZephyrHost, &ShimConfig::DEFAULT, buffer, length) }
}

/// Sleep for at least `ms` milliseconds.
///
/// Linkable stand-in for the inline `k_msleep`. Returns 0 once the full
/// duration elapsed, or the milliseconds left if the thread was woken early.
#[no_mangle]
pub extern "C" fn msleep(ms: i32) -> i32 {
    raw::msleep(&ZephyrHost, ms)
}

/// Initialise runtime support. The shims hold no state, so this does nothing.
#[no_mangle]
pub extern "C" fn zephyr_sys_init() {}

#[cfg(not(test))]
#[panic_handler]
#[allow(unsafe_code)]
fn panic(info: &core::panic::PanicInfo<'_>) -> ! {
    crate::printk::printkln!("zshim: {info}");
    // SAFETY: k_fatal_halt does not return.
    unsafe { k_fatal_halt(K_ERR_KERNEL_PANIC) }
}
