use core::alloc::Layout;
use core::fmt;

/// The error type for fallible [`Deque`](crate::Deque) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A logical position at or past the end of the deque was requested.
    OutOfBounds {
        /// The requested position.
        index: usize,
        /// The length of the deque at the time of the request.
        len: usize,
    },
    /// The grown capacity would exceed `isize::MAX` bytes.
    CapacityOverflow,
    /// The allocator refused to provide (or resize to) the given layout.
    ///
    /// The buffer that was being grown is left as it was.
    AllocFailed {
        /// The layout that was requested.
        layout: Layout,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::OutOfBounds { index, len } => {
                write!(f, "index (is {}) should be < len (is {})", index, len)
            }
            Error::CapacityOverflow => f.write_str("capacity overflow"),
            Error::AllocFailed { layout } => write!(
                f,
                "memory allocation of {} bytes failed",
                layout.size()
            ),
        }
    }
}

impl core::error::Error for Error {}

/// Turns an allocation error into the panic or abort that `Vec` would produce.
#[cold]
#[inline(never)]
pub(crate) fn handle_error(e: Error) -> ! {
    match e {
        Error::AllocFailed { layout } => alloc::alloc::handle_alloc_error(layout),
        e => panic!("{}", e),
    }
}
