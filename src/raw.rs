//! Growth-managed storage for the two halves of a [`Deque`](crate::Deque).

use core::alloc::Layout;
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};
use core::slice;

use alloc::alloc::{alloc, dealloc, realloc};

use crate::error::Error;
use crate::{CHUNK, LOAD_FACTOR};

/// A contiguous, reallocatable block of (possibly uninitialized) `T` slots.
///
/// `RawBuf` only owns the memory. Which slots hold live values is tracked by [`Side`], which is
/// also responsible for dropping them.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    marker: PhantomData<T>,
}

unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    pub(crate) fn try_with_capacity(cap: usize) -> Result<Self, Error> {
        if Self::IS_ZST {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap: usize::MAX,
                marker: PhantomData,
            });
        }

        let mut buf = Self {
            ptr: NonNull::dangling(),
            cap: 0,
            marker: PhantomData,
        };
        buf.try_grow(cap)?;
        Ok(buf)
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    /// Extends the buffer by `additional` slots, preserving the contents of the existing ones.
    ///
    /// On error, the buffer is unchanged.
    #[inline(never)]
    pub(crate) fn try_grow(&mut self, additional: usize) -> Result<(), Error> {
        if Self::IS_ZST || additional == 0 {
            return Ok(());
        }

        let new_cap = self
            .cap
            .checked_add(additional)
            .ok_or(Error::CapacityOverflow)?;
        let new_layout = Layout::array::<T>(new_cap).map_err(|_| Error::CapacityOverflow)?;

        let raw = if self.cap == 0 {
            unsafe { alloc(new_layout) }
        } else {
            // the current layout was valid when we allocated it, and the new size is non-zero
            unsafe {
                realloc(
                    self.ptr.as_ptr().cast::<u8>(),
                    self.layout(),
                    new_layout.size(),
                )
            }
        };

        // realloc leaves the old block alone when it fails, so we can just bail.
        self.ptr = NonNull::new(raw.cast::<T>()).ok_or(Error::AllocFailed {
            layout: new_layout,
        })?;
        self.cap = new_cap;
        Ok(())
    }

    #[inline]
    fn layout(&self) -> Layout {
        // cannot fail: we successfully allocated exactly this layout earlier
        Layout::array::<T>(self.cap)
            .unwrap_or_else(|_| unsafe { core::hint::unreachable_unchecked() })
    }

    #[inline]
    unsafe fn slot(&self, i: usize) -> *mut T {
        debug_assert!(i < self.cap);
        self.ptr.as_ptr().add(i)
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if !Self::IS_ZST && self.cap != 0 {
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), self.layout()) }
        }
    }
}

/// Slots `inner..=outer` of a buffer that currently hold live values.
///
/// `outer` is the end that faces the corresponding end of the deque, and is where the buffer
/// grows. `inner` faces the other buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) inner: usize,
    pub(crate) outer: usize,
}

/// One half of a deque: a buffer plus the span of it that is in use.
///
/// For the front half, logical positions run from `outer` down to `inner`. For the back half,
/// they run from `inner` up to `outer`.
pub(crate) struct Side<T> {
    buf: RawBuf<T>,
    live: Option<Span>,
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    name: &'static str,
}

impl<T> Side<T> {
    pub(crate) fn try_new(name: &'static str) -> Result<Self, Error> {
        Ok(Self {
            buf: RawBuf::try_with_capacity(CHUNK)?,
            live: None,
            name,
        })
    }

    #[inline]
    pub(crate) fn is_unset(&self) -> bool {
        self.live.is_none()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.live.map_or(0, |s| s.outer - s.inner + 1)
    }

    /// The number of slots used up from the start of the buffer.
    ///
    /// This, not `len`, decides when the buffer must grow: slots below `inner` are only reused
    /// from the other end.
    #[inline]
    pub(crate) fn load(&self) -> usize {
        self.live.map_or(0, |s| s.outer + 1)
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[cfg(test)]
    pub(crate) fn span(&self) -> Option<Span> {
        self.live
    }

    #[inline]
    fn must_grow(&self) -> bool {
        let threshold = (self.capacity() as u128 * LOAD_FACTOR as u128 / 100) as usize;
        self.load() + 1 >= threshold
    }

    /// Writes `value` just past `outer`, growing the buffer first if it is loaded enough.
    ///
    /// On error, nothing has changed.
    pub(crate) fn try_push_outer(&mut self, value: T) -> Result<(), Error> {
        if self.must_grow() {
            self.buf.try_grow(CHUNK)?;
            trace!(
                side = self.name,
                load = self.load(),
                capacity = self.capacity(),
                "grew buffer"
            );
        }

        let at = self.load();
        unsafe { ptr::write(self.buf.slot(at), value) };
        self.live = Some(match self.live {
            None => Span { inner: 0, outer: 0 },
            Some(s) => Span {
                inner: s.inner,
                outer: at,
            },
        });
        Ok(())
    }

    /// Writes `value` just before `inner` if there is a free slot there.
    ///
    /// Hands the value back if the buffer is unset or `inner` is already at slot 0.
    pub(crate) fn push_inner(&mut self, value: T) -> Result<(), T> {
        match self.live {
            Some(ref mut s) if s.inner > 0 => {
                s.inner -= 1;
                unsafe { ptr::write(self.buf.slot(s.inner), value) };
                trace!(side = self.name, slot = s.inner, "reused spare slot");
                Ok(())
            }
            _ => Err(value),
        }
    }

    pub(crate) fn pop_outer(&mut self) -> Option<T> {
        let s = self.live?;
        let value = unsafe { ptr::read(self.buf.slot(s.outer)) };
        self.live = if s.inner == s.outer {
            None
        } else {
            Some(Span {
                inner: s.inner,
                outer: s.outer - 1,
            })
        };
        Some(value)
    }

    pub(crate) fn pop_inner(&mut self) -> Option<T> {
        let s = self.live?;
        let value = unsafe { ptr::read(self.buf.slot(s.inner)) };
        self.live = if s.inner == s.outer {
            None
        } else {
            Some(Span {
                inner: s.inner + 1,
                outer: s.outer,
            })
        };
        Some(value)
    }

    /// The physical slot `offset` positions in from `outer`.
    #[inline]
    pub(crate) fn from_outer(&self, offset: usize) -> Option<usize> {
        let s = self.live?;
        (offset < self.len()).then(|| s.outer - offset)
    }

    /// The physical slot `offset` positions in from `inner`.
    #[inline]
    pub(crate) fn from_inner(&self, offset: usize) -> Option<usize> {
        let s = self.live?;
        (offset < self.len()).then(|| s.inner + offset)
    }

    /// # Safety
    ///
    /// `slot` must lie within the live span.
    #[inline]
    pub(crate) unsafe fn get_unchecked(&self, slot: usize) -> &T {
        &*self.buf.slot(slot)
    }

    /// # Safety
    ///
    /// `slot` must lie within the live span.
    #[inline]
    pub(crate) unsafe fn get_unchecked_mut(&mut self, slot: usize) -> &mut T {
        &mut *self.buf.slot(slot)
    }

    /// A raw pointer to `slot`, without going through a reference to the value.
    ///
    /// # Safety
    ///
    /// `slot` must lie within the live span.
    #[inline]
    pub(crate) unsafe fn slot_ptr(&mut self, slot: usize) -> *mut T {
        self.buf.slot(slot)
    }

    /// The live values in physical (not logical) order.
    pub(crate) fn as_slice(&self) -> &[T] {
        match self.live {
            None => &[],
            Some(s) => unsafe { slice::from_raw_parts(self.buf.slot(s.inner), self.len()) },
        }
    }

    /// The live values in physical (not logical) order.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        match self.live {
            None => &mut [],
            Some(s) => unsafe { slice::from_raw_parts_mut(self.buf.slot(s.inner), self.len()) },
        }
    }

    /// Drops every live value but keeps the allocation.
    pub(crate) fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        // unset first so that a panicking destructor cannot lead to a double drop
        self.live = None;
        unsafe { ptr::drop_in_place(live) };
    }
}

impl<T> Drop for Side<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{RawBuf, Side, Span};
    use crate::error::Error;
    use crate::CHUNK;

    #[test]
    fn test_grow_overflow_leaves_buffer() {
        let mut buf = RawBuf::<u64>::try_with_capacity(CHUNK).unwrap();
        assert_eq!(buf.try_grow(usize::MAX), Err(Error::CapacityOverflow));
        assert_eq!(buf.capacity(), CHUNK);
        // fits in usize, but not in an isize worth of bytes
        assert_eq!(
            buf.try_grow(isize::MAX as usize / 4),
            Err(Error::CapacityOverflow)
        );
        assert_eq!(buf.capacity(), CHUNK);
        assert_eq!(buf.try_grow(CHUNK), Ok(()));
        assert_eq!(buf.capacity(), 2 * CHUNK);
    }

    #[test]
    fn test_grow_keeps_contents() {
        let mut side = Side::try_new("back").unwrap();
        for i in 0..10 * CHUNK {
            side.try_push_outer(i).unwrap();
        }
        assert!(side.capacity() > 10 * CHUNK);
        assert_eq!(side.span(), Some(Span { inner: 0, outer: 10 * CHUNK - 1 }));
        assert!(side.as_slice().iter().copied().eq(0..10 * CHUNK));
    }

    #[test]
    fn test_zst_never_allocates() {
        let mut buf = RawBuf::<()>::try_with_capacity(CHUNK).unwrap();
        assert_eq!(buf.capacity(), usize::MAX);
        assert_eq!(buf.try_grow(usize::MAX), Ok(()));
    }
}
