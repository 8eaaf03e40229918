//! POSIX error numbers as reported through the C surface.
//!
//! Values match the Zephyr libc headers (`lib/libc/minimal/include/errno.h`,
//! identical to newlib and picolibc for the codes used here).

use core::ffi::c_int;
use core::fmt;

/// An `errno` value.
///
/// `Errno(0)` means "no error recorded"; the host leaves errno untouched
/// on success, so a zero read after a failure says nothing about the cause.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Errno(pub c_int);

impl Errno {
    /// No error recorded.
    pub const NONE: Errno = Errno(0);
    /// Out of memory.
    pub const ENOMEM: Errno = Errno(12);
    /// Invalid argument.
    pub const EINVAL: Errno = Errno(22);

    /// Raw value as handed to C callers.
    pub const fn get(self) -> c_int {
        self.0
    }

    /// Whether this is [`Errno::NONE`].
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    fn name(self) -> Option<&'static str> {
        match self {
            Self::NONE => Some("OK"),
            Self::ENOMEM => Some("ENOMEM"),
            Self::EINVAL => Some("EINVAL"),
            _ => None,
        }
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} ({})", self.0),
            None => write!(f, "errno {}", self.0),
        }
    }
}

impl From<Errno> for c_int {
    fn from(e: Errno) -> Self {
        e.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errno_values_are_stable() {
        assert_eq!(Errno::NONE.get(), 0);
        assert_eq!(Errno::ENOMEM.get(), 12);
        assert_eq!(Errno::EINVAL.get(), 22);
    }

    #[test]
    fn display_names_known_codes() {
        assert_eq!(Errno::EINVAL.to_string(), "EINVAL (22)");
        assert_eq!(Errno::ENOMEM.to_string(), "ENOMEM (12)");
        assert_eq!(Errno(5).to_string(), "errno 5");
    }

    #[test]
    fn none_is_only_zero() {
        assert!(Errno::NONE.is_none());
        assert!(!Errno::EINVAL.is_none());
    }
}
