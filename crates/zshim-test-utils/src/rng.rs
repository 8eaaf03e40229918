//! Pseudo-random generators standing in for the host's `rand()`.

use std::cell::{Cell, RefCell};
use std::ffi::c_int;

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use zshim_core::PseudoRandom;

/// The RTOS minimal libc generator: `seed = (1103515245 * seed + 12345) mod 2^31`.
///
/// [`new`](Self::new) starts from seed 1, the state `rand()` is in when no
/// one has called `srand()`.
pub struct MinimalLibcRand {
    seed: Cell<u32>,
}

impl MinimalLibcRand {
    pub const RAND_MAX: c_int = c_int::MAX;

    const MULTIPLIER: u64 = 1_103_515_245;
    const INCREMENT: u64 = 12_345;
    const MODULUS: u64 = Self::RAND_MAX as u64 + 1;

    pub fn new() -> Self {
        Self::with_seed(1)
    }

    /// Equivalent to calling `srand(seed)` first.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed: Cell::new(seed),
        }
    }
}

impl Default for MinimalLibcRand {
    fn default() -> Self {
        Self::new()
    }
}

impl PseudoRandom for MinimalLibcRand {
    fn rand(&self) -> c_int {
        let next = (Self::MULTIPLIER * self.seed.get() as u64 + Self::INCREMENT) % Self::MODULUS;
        self.seed.set(next as u32);
        next as c_int
    }
}

/// A `ChaCha8Rng`-backed generator for tests that want well-mixed bytes
/// from a fixed seed.
pub struct ChaChaRandom {
    rng: RefCell<ChaCha8Rng>,
}

impl ChaChaRandom {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RefCell::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl PseudoRandom for ChaChaRandom {
    fn rand(&self) -> c_int {
        (self.rng.borrow_mut().next_u32() >> 1) as c_int
    }
}
