//! std-backed aligned allocator with failure injection.
//!
//! Every block handed out is tracked and released when the
//! [`HeapAllocator`] drops, so tests never have to call a `free`.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::cell::{Cell, RefCell};
use std::ffi::c_void;
use std::ptr::NonNull;

use zshim_core::Errno;

/// When the next allocations should fail, and with which errno.
///
/// A failure carrying [`Errno::NONE`] models a host that returns null
/// without recording a cause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Failure {
    Never,
    Next(Errno),
    Always(Errno),
}

pub struct HeapAllocator {
    live: RefCell<Vec<(NonNull<u8>, Layout)>>,
    failure: Cell<Failure>,
    calls: Cell<usize>,
}

impl HeapAllocator {
    pub fn new() -> Self {
        Self {
            live: RefCell::new(Vec::new()),
            failure: Cell::new(Failure::Never),
            calls: Cell::new(0),
        }
    }

    /// Fail only the next allocation.
    pub fn fail_next(&self, errno: Errno) {
        self.failure.set(Failure::Next(errno));
    }

    /// Fail every allocation until [`recover`](Self::recover).
    pub fn fail_always(&self, errno: Errno) {
        self.failure.set(Failure::Always(errno));
    }

    pub fn recover(&self) {
        self.failure.set(Failure::Never);
    }

    /// Number of allocation attempts, failed ones included.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Number of blocks currently handed out.
    pub fn live_blocks(&self) -> usize {
        self.live.borrow().len()
    }

    /// Usable size of a live block, or `None` if `ptr` is not one.
    pub fn block_len(&self, ptr: *const c_void) -> Option<usize> {
        self.live
            .borrow()
            .iter()
            .find(|(p, _)| p.as_ptr() as *const c_void == ptr)
            .map(|(_, layout)| layout.size())
    }

    /// Allocate like C `aligned_alloc`.
    ///
    /// A non-power-of-two alignment fails with `EINVAL`; exhaustion or an
    /// unrepresentable size fails with `ENOMEM`. Zero-size requests get a
    /// distinct one-byte block.
    pub fn allocate(&self, alignment: usize, size: usize) -> Result<NonNull<c_void>, Errno> {
        self.calls.set(self.calls.get() + 1);
        match self.failure.get() {
            Failure::Never => {}
            Failure::Next(e) => {
                self.failure.set(Failure::Never);
                return Err(e);
            }
            Failure::Always(e) => return Err(e),
        }
        if !alignment.is_power_of_two() {
            return Err(Errno::EINVAL);
        }
        let layout = Layout::from_size_align(size.max(1), alignment).map_err(|_| Errno::ENOMEM)?;
        // SAFETY: layout has a non-zero size.
        let raw = unsafe { alloc::alloc(layout) };
        let block = NonNull::new(raw).ok_or(Errno::ENOMEM)?;
        self.live.borrow_mut().push((block, layout));
        Ok(block.cast())
    }

    /// Release a block early. Returns false if `ptr` is not live.
    pub fn release(&self, ptr: *mut c_void) -> bool {
        let mut live = self.live.borrow_mut();
        let Some(pos) = live.iter().position(|(p, _)| p.as_ptr() as *mut c_void == ptr) else {
            return false;
        };
        let (block, layout) = live.swap_remove(pos);
        // SAFETY: block was allocated by us with exactly this layout and is
        // removed from the live list, so it is freed once.
        unsafe { alloc::dealloc(block.as_ptr(), layout) };
        true
    }
}

impl Default for HeapAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for HeapAllocator {
    fn drop(&mut self) {
        for (block, layout) in self.live.get_mut().drain(..) {
            // SAFETY: each entry is a live block allocated with its layout.
            unsafe { alloc::dealloc(block.as_ptr(), layout) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_are_aligned_and_tracked() {
        let heap = HeapAllocator::new();
        let p = heap.allocate(64, 100).unwrap();
        assert_eq!(p.as_ptr() as usize % 64, 0);
        assert_eq!(heap.block_len(p.as_ptr()), Some(100));
        assert_eq!(heap.live_blocks(), 1);
        assert!(heap.release(p.as_ptr()));
        assert!(!heap.release(p.as_ptr()));
        assert_eq!(heap.live_blocks(), 0);
    }

    #[test]
    fn fail_next_is_one_shot() {
        let heap = HeapAllocator::new();
        heap.fail_next(Errno::ENOMEM);
        assert_eq!(heap.allocate(16, 8), Err(Errno::ENOMEM));
        assert!(heap.allocate(16, 8).is_ok());
        assert_eq!(heap.calls(), 2);
    }

    #[test]
    fn fail_always_until_recover() {
        let heap = HeapAllocator::new();
        heap.fail_always(Errno(5));
        assert_eq!(heap.allocate(16, 8), Err(Errno(5)));
        assert_eq!(heap.allocate(16, 8), Err(Errno(5)));
        heap.recover();
        assert!(heap.allocate(16, 8).is_ok());
    }

    #[test]
    fn bad_alignment_and_huge_size() {
        let heap = HeapAllocator::new();
        assert_eq!(heap.allocate(24, 8), Err(Errno::EINVAL));
        assert_eq!(heap.allocate(16, usize::MAX), Err(Errno::ENOMEM));
        assert_eq!(heap.live_blocks(), 0);
    }

    #[test]
    fn zero_size_gets_distinct_blocks() {
        let heap = HeapAllocator::new();
        let a = heap.allocate(8, 0).unwrap();
        let b = heap.allocate(8, 0).unwrap();
        assert_ne!(a, b);
    }
}
