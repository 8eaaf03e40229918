//! Benchmark profiles for the zshim shims.
//!
//! - [`ENTROPY_LENGTHS`]: request sizes a runtime typically asks for, up to the ceiling
//! - [`ALLOC_PROFILE`]: (alignment, size) pairs seen from an embedded runtime allocator
//! - [`libc_platform`] / [`chacha_platform`]: mock hosts with each generator

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use zshim_core::GETENTROPY_MAX;
use zshim_test_utils::{ChaChaRandom, MinimalLibcRand, RecordingSleeper, TestPlatform};

/// Hash-seed sized, key sized, and ceiling sized requests.
pub const ENTROPY_LENGTHS: [usize; 3] = [16, 32, GETENTROPY_MAX];

/// Small object, cache line, and page aligned requests.
pub const ALLOC_PROFILE: [(usize, usize); 3] = [(16, 48), (64, 256), (4096, 4096)];

/// Host whose generator is the minimal libc LCG in its default state.
pub fn libc_platform() -> TestPlatform<MinimalLibcRand, RecordingSleeper> {
    TestPlatform::new()
}

/// Host whose generator is a seeded ChaCha8.
pub fn chacha_platform(seed: u64) -> TestPlatform<ChaChaRandom, RecordingSleeper> {
    TestPlatform::with_parts(ChaChaRandom::seeded(seed), RecordingSleeper::new())
}
