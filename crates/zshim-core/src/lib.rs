//! Host capability traits and typed shim operations for zshim.
//!
//! An embedded managed runtime expects a few C library entry points that
//! an RTOS minimal libc does not provide. This crate holds the logic of
//! those entry points, written against injected host capabilities rather
//! than concrete symbols:
//!
//! | Module | Operation | Backed by |
//! |--------|-----------|-----------|
//! | [`memalign`] | aligned allocation (`posix_memalign`) | [`AlignedAlloc`] |
//! | [`entropy`] | entropy fill (`getentropy`) | [`PseudoRandom`] |
//! | [`sleep`] | millisecond sleep (`msleep`) | [`KernelSleep`] |
//!
//! The C-ABI surface and the Zephyr binding of these traits live in
//! `zshim-ffi`. Nothing here retains state between calls.
//!
//! # Entropy is not cryptographic
//!
//! [`entropy::fill`] draws bytes from the host's ordinary pseudo-random
//! generator. The output is predictable and must not be used for secrets.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod entropy;
pub mod errno;
pub mod error;
pub mod memalign;
pub mod platform;
pub mod sleep;

pub use config::{ConfigError, ShimConfig, GETENTROPY_MAX};
pub use errno::Errno;
pub use error::ShimError;
pub use platform::{AlignedAlloc, ErrnoAccess, KernelSleep, PseudoRandom};
