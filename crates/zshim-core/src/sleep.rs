//! Millisecond sleep behind the `msleep` entry point.
//!
//! The kernel's `k_msleep` is a header-only inline, so it has no address a
//! foreign call site can bind to. [`msleep`] forwards to whatever
//! [`KernelSleep`] the host provides; [`timeout_ticks_for_ms`] is the
//! conversion the inline performs, for hosts that reach the tick-based
//! sleep directly.

use crate::platform::KernelSleep;

/// Sleep for at least `ms` milliseconds.
///
/// Argument and return value pass through unchanged: 0 when the full
/// duration elapsed, milliseconds remaining when woken early.
pub fn msleep<K: KernelSleep + ?Sized>(kernel: &K, ms: i32) -> i32 {
    kernel.msleep(ms)
}

/// Kernel ticks covering `ms` milliseconds at `ticks_per_sec`.
///
/// Matches `Z_TIMEOUT_MS`: negative durations clamp to zero and partial
/// ticks round up, so the sleep is never shorter than requested.
pub const fn timeout_ticks_for_ms(ms: i32, ticks_per_sec: u32) -> u64 {
    let ms = if ms < 0 { 0 } else { ms as u64 };
    (ms * ticks_per_sec as u64).div_ceil(1000)
}
