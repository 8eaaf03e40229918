//! C runtime shims for running an embedded managed runtime on Zephyr.
//!
//! The runtime links against `posix_memalign`, `getentropy`, and a
//! millisecond sleep. Zephyr's minimal libc lacks the first two and only
//! offers `k_msleep` as a header inline. This crate fills the gaps:
//!
//! ```text
//! runtime call site -> exported symbol (zephyr) -> raw (pointer checks) -> zshim-core -> host
//! ```
//!
//! - [`raw`]: pointer-level entry points, generic over any host that
//!   implements the `zshim-core` capability traits.
//! - [`status`]: C status codes.
//! - `zephyr` (feature): binds the capabilities to Zephyr symbols and
//!   exports `posix_memalign`, `getentropy`, `msleep`, and
//!   `zephyr_sys_init`. The build also emits `include/zshim.h`.
//!
//! `getentropy` is not cryptographically secure.
//!
//! This crate is the only one in the workspace that may contain `unsafe`
//! code outside of tests.

#![cfg_attr(all(feature = "zephyr", not(test)), no_std)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod raw;
pub mod status;

#[cfg(feature = "zephyr")]
mod printk;
#[cfg(feature = "zephyr")]
pub mod zephyr;

pub use status::ShimStatus;
