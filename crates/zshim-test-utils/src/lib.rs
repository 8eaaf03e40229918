//! Mock host platforms for zshim development.
//!
//! Provides std-backed implementations of the `zshim-core` capability
//! traits ([`AlignedAlloc`], [`PseudoRandom`], [`KernelSleep`],
//! [`ErrnoAccess`]) and a [`TestPlatform`] bundling them, so the shims
//! can run on a development host without an RTOS.

#![deny(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod heap;
pub mod rng;
pub mod sleeper;

use std::cell::Cell;
use std::ffi::{c_int, c_void};
use std::ptr::NonNull;

use zshim_core::{AlignedAlloc, Errno, ErrnoAccess, KernelSleep, PseudoRandom};

pub use heap::{Failure, HeapAllocator};
pub use rng::{ChaChaRandom, MinimalLibcRand};
pub use sleeper::{RecordingSleeper, ThreadSleeper};

/// A complete mock host: heap, generator, sleeper, and a per-platform errno.
///
/// Defaults mirror an untouched RTOS image: the generator sits in the
/// minimal libc's default seed state and sleeps return immediately.
pub struct TestPlatform<R = MinimalLibcRand, S = RecordingSleeper> {
    pub heap: HeapAllocator,
    pub rng: R,
    pub sleeper: S,
    errno: Cell<Errno>,
}

impl TestPlatform {
    pub fn new() -> Self {
        Self::with_parts(MinimalLibcRand::new(), RecordingSleeper::new())
    }
}

impl Default for TestPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, S> TestPlatform<R, S> {
    pub fn with_parts(rng: R, sleeper: S) -> Self {
        Self {
            heap: HeapAllocator::new(),
            rng,
            sleeper,
            errno: Cell::new(Errno::NONE),
        }
    }
}

impl<R, S> AlignedAlloc for TestPlatform<R, S> {
    fn aligned_alloc(&self, alignment: usize, size: usize) -> Option<NonNull<c_void>> {
        match self.heap.allocate(alignment, size) {
            Ok(block) => Some(block),
            Err(e) => {
                // Hosts that fail without recording a cause leave errno alone.
                if !e.is_none() {
                    self.errno.set(e);
                }
                None
            }
        }
    }
}

impl<R: PseudoRandom, S> PseudoRandom for TestPlatform<R, S> {
    fn rand(&self) -> c_int {
        self.rng.rand()
    }
}

impl<R, S: KernelSleep> KernelSleep for TestPlatform<R, S> {
    fn msleep(&self, ms: i32) -> i32 {
        self.sleeper.msleep(ms)
    }
}

impl<R, S> ErrnoAccess for TestPlatform<R, S> {
    fn errno(&self) -> Errno {
        self.errno.get()
    }

    fn set_errno(&self, errno: Errno) {
        self.errno.set(errno);
    }
}
