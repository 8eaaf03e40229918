//! Console output through the kernel's `printk` backend.
//!
//! The shims never log. This exists for the panic handler, which has no
//! other way to say what went wrong before the kernel halts.

use core::ffi::c_char;
use core::fmt;

extern "C" {
    /// Implementation behind `k_str_out`; needs `CONFIG_PRINTK`.
    fn z_impl_k_str_out(c: *mut c_char, n: usize);
}

/// `core::fmt::Write` adaptor over the kernel console.
pub(crate) struct Printk;

impl fmt::Write for Printk {
    #[allow(unsafe_code)]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        // SAFETY: the kernel only reads `n` bytes from `c`.
        unsafe { z_impl_k_str_out(s.as_ptr() as *mut c_char, s.len()) };
        Ok(())
    }
}

/// `println!` to the kernel console. Output errors are dropped.
macro_rules! printkln {
    ($($arg:tt)*) => {{
        use core::fmt::Write as _;
        let _ = writeln!($crate::printk::Printk, $($arg)*);
    }};
}

pub(crate) use printkln;
