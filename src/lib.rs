//! A double-ended queue built from two independently growing buffers.
//!
//! [`Deque`] supports amortized constant-time pushes and pops at both ends, constant-time random
//! access, and bidirectional iteration. It does not sit on top of `Vec` or `VecDeque`. Instead,
//! it owns two raw buffers:
//!
//!  - the _front buffer_ holds the elements that were pushed at the front, stored back-to-front,
//!    so that pushing at the front is an append to this buffer;
//!  - the _back buffer_ holds the remaining elements, stored front-to-back, so that pushing at the
//!    back is an append to that buffer.
//!
//! Logically, the front buffer (read in reverse) precedes the back buffer. Any logical position
//! is translated into a buffer and a slot by looking at how many elements currently live in the
//! front buffer; that translation is the only way elements are located, by [`Deque::get`],
//! [`Deque::at`], and by [`Cursor`](deque::Cursor) alike.
//!
//! Each buffer starts out with room for a fixed number of elements, and grows by that same
//! number of elements (through `realloc`) once its load crosses a load-factor threshold.
//! Capacity never shrinks; popping only moves the boundaries of the live region.
//!
//! Before growing, a push will also try to reuse a spare slot on the _inner_ edge of the
//! opposite buffer. For instance, after pushing at the front and then popping at the back, the
//! front buffer has a free slot where the popped element used to be, and as long as the back
//! buffer is empty, the next `push_back` goes there instead of into the back buffer.
//!
//! The deque is constructed with a strict ordering predicate `less(a, b)`. It is never used to
//! order the deque; it is what the deque uses to decide whether two elements are equivalent
//! (`!less(a, b) && !less(b, a)`), for [`Deque::equals`] and for comparing cursors.
//!
//! ```
//! use duodeque::Deque;
//!
//! let mut d = Deque::new();
//! d.push_back(2);
//! d.push_back(3);
//! d.push_front(1);
//! assert_eq!(d, vec![1, 2, 3]);
//! assert_eq!(d.at(1), Ok(&2));
//! assert_eq!(d.pop_back(), Some(3));
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rustdoc::all)]

/// Initial capacity of each buffer, and the number of elements a buffer grows by.
#[cfg(any(test, miri))]
pub(crate) const CHUNK: usize = 4;
#[cfg(not(any(test, miri)))]
const CHUNK: usize = 64;

/// How full (in percent) a buffer may get before it grows.
const LOAD_FACTOR: usize = 100;

const _: () = assert!(LOAD_FACTOR > 0 && LOAD_FACTOR <= 100);
const _: () = assert!(CHUNK > 0);

#[cfg(test)]
#[macro_use]
extern crate std;

#[cfg_attr(test, macro_use)]
extern crate alloc;

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "duodeque", $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

use core::fmt;
use core::iter::FromIterator;
use core::ops::{Index, IndexMut};
use core::ptr;

use alloc::vec::Vec;

mod error;
mod external_trait_impls;
mod iter;
mod raw;

pub use error::Error;
use raw::Side;

/// Iterator and cursor types for [`Deque`].
pub mod deque {
    pub use super::iter::*;
}

/// Parallel iterator types for [`Deque`].
#[cfg(feature = "rayon")]
pub mod rayon {
    pub use super::external_trait_impls::rayon::*;
}

/// A double-ended queue built from two independently growing buffers.
///
/// `F` is the strict ordering predicate the deque was created with. Deques made with
/// [`Deque::new`] use [`PartialOrd::lt`].
///
/// Dropping a `Deque` drops its elements and releases both buffers.
///
/// See the [crate-level documentation] for details.
///
/// [crate-level documentation]: index.html
pub struct Deque<T, F = fn(&T, &T) -> bool> {
    front: Side<T>,
    back: Side<T>,
    len: usize,
    less: F,
}

/// Where a logical position lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Front(usize),
    Back(usize),
}

impl<T: PartialOrd> Deque<T> {
    /// Creates an empty `Deque` that compares elements with [`PartialOrd::lt`].
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let deque: Deque<u32> = Deque::new();
    /// assert!(deque.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_ordering(<T as PartialOrd>::lt)
    }
}

impl<T: PartialOrd> Default for Deque<T> {
    /// Creates an empty `Deque<T>`.
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> Deque<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty `Deque` that uses `less` as its strict ordering.
    ///
    /// Both buffers are allocated up front.
    ///
    /// # Panics
    ///
    /// Aborts if the allocator fails, like `Vec` does. Use
    /// [`try_with_ordering`](Deque::try_with_ordering) to handle that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// // compare by length only
    /// let mut d = Deque::with_ordering(|a: &&str, b: &&str| a.len() < b.len());
    /// d.push_back("one");
    /// assert_eq!(d.front(), Some(&"one"));
    /// ```
    pub fn with_ordering(less: F) -> Self {
        Self::try_from_ordering(less).unwrap_or_else(|e| error::handle_error(e))
    }

    /// Creates an empty `Deque` that uses `less` as its strict ordering, reporting allocation
    /// failure instead of aborting.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let d = Deque::try_with_ordering(|a: &u8, b: &u8| a < b).unwrap();
    /// assert_eq!(d.len(), 0);
    /// ```
    pub fn try_with_ordering(less: F) -> Result<Self, Error> {
        Self::try_from_ordering(less)
    }

    /// Returns `true` if `self` and `other` hold the same number of elements, and the elements
    /// at every position are equivalent under `self`'s ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let by_key = |a: &(u8, char), b: &(u8, char)| a.0 < b.0;
    /// let mut a = Deque::with_ordering(by_key);
    /// let mut b = Deque::with_ordering(by_key);
    /// a.push_back((1, 'x'));
    /// b.push_back((1, 'y'));
    /// assert!(a.equals(&b));
    /// b.push_front((0, 'z'));
    /// assert!(!a.equals(&b));
    /// ```
    pub fn equals<G>(&self, other: &Deque<T, G>) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| self.equivalent(a, b))
    }

    #[inline]
    pub(crate) fn equivalent(&self, a: &T, b: &T) -> bool {
        !(self.less)(a, b) && !(self.less)(b, a)
    }
}

impl<T, F> Deque<T, F> {
    fn try_from_ordering(less: F) -> Result<Self, Error> {
        Ok(Self {
            front: Side::try_new("front")?,
            back: Side::try_new("back")?,
            len: 0,
            less,
        })
    }

    /// Translates a logical position into the buffer and slot that hold it.
    ///
    /// Positions below the number of elements in the front buffer count inwards from its outer
    /// edge. Everything else counts from the back buffer's inner edge.
    #[inline]
    fn locate(&self, index: usize) -> Option<Slot> {
        if index >= self.len {
            return None;
        }

        let in_front = self.front.len();
        if index < in_front {
            self.front.from_outer(index).map(Slot::Front)
        } else {
            self.back.from_inner(index - in_front).map(Slot::Back)
        }
    }

    /// Provides a reference to the element at the given index.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut buf = Deque::new();
    /// buf.push_back(3);
    /// buf.push_back(4);
    /// buf.push_front(5);
    /// assert_eq!(buf.get(1), Some(&3));
    /// assert_eq!(buf.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        // locate only hands out slots inside the live spans
        match self.locate(index)? {
            Slot::Front(i) => Some(unsafe { self.front.get_unchecked(i) }),
            Slot::Back(i) => Some(unsafe { self.back.get_unchecked(i) }),
        }
    }

    /// Provides a mutable reference to the element at the given index.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut buf = Deque::new();
    /// buf.push_back(3);
    /// buf.push_back(4);
    /// buf.push_back(5);
    /// if let Some(elem) = buf.get_mut(1) {
    ///     *elem = 7;
    /// }
    ///
    /// assert_eq!(buf[1], 7);
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match self.locate(index)? {
            Slot::Front(i) => Some(unsafe { self.front.get_unchecked_mut(i) }),
            Slot::Back(i) => Some(unsafe { self.back.get_unchecked_mut(i) }),
        }
    }

    /// Provides a reference to the element at the given index, or an
    /// [`Error::OutOfBounds`] if there is no such element.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::{Deque, Error};
    ///
    /// let mut buf = Deque::new();
    /// buf.push_back('a');
    /// assert_eq!(buf.at(0), Ok(&'a'));
    /// assert_eq!(buf.at(1), Err(Error::OutOfBounds { index: 1, len: 1 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let len = self.len;
        self.get(index).ok_or(Error::OutOfBounds { index, len })
    }

    /// Provides a mutable reference to the element at the given index, or an
    /// [`Error::OutOfBounds`] if there is no such element.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut buf = Deque::new();
    /// buf.push_back(1);
    /// *buf.at_mut(0).unwrap() += 1;
    /// assert_eq!(buf[0], 2);
    /// assert!(buf.at_mut(1).is_err());
    /// ```
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.get_mut(index).ok_or(Error::OutOfBounds { index, len })
    }

    /// Returns the number of elements in the `Deque`.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut v = Deque::new();
    /// assert_eq!(v.len(), 0);
    /// v.push_back(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.len, self.front.len() + self.back.len());
        self.len
    }

    /// Returns `true` if the `Deque` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut v = Deque::new();
    /// assert!(v.is_empty());
    /// v.push_front(1);
    /// assert!(!v.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front.is_unset() && self.back.is_unset()
    }

    /// Returns the capacities of the front and back buffers, in elements.
    ///
    /// Capacities only ever grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut d = Deque::new();
    /// let (front, back) = d.capacity();
    /// d.extend(0..1000);
    /// assert_eq!(d.capacity().0, front);
    /// assert!(d.capacity().1 > back);
    /// ```
    #[inline]
    pub fn capacity(&self) -> (usize, usize) {
        (self.front.capacity(), self.back.capacity())
    }

    /// Provides a reference to the front element, or `None` if the `Deque` is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut d = Deque::new();
    /// assert_eq!(d.front(), None);
    ///
    /// d.push_back(1);
    /// d.push_back(2);
    /// assert_eq!(d.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// `Deque` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut d = Deque::new();
    /// assert_eq!(d.front_mut(), None);
    ///
    /// d.push_back(1);
    /// d.push_back(2);
    /// match d.front_mut() {
    ///     Some(x) => *x = 9,
    ///     None => (),
    /// }
    /// assert_eq!(d.front(), Some(&9));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Provides a reference to the back element, or `None` if the `Deque` is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut d = Deque::new();
    /// assert_eq!(d.back(), None);
    ///
    /// d.push_back(1);
    /// d.push_back(2);
    /// assert_eq!(d.back(), Some(&2));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.get(self.len.checked_sub(1)?)
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// `Deque` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.push_back(1);
    /// d.push_back(2);
    /// if let Some(x) = d.back_mut() {
    ///     *x = 9;
    /// }
    /// assert_eq!(d.back(), Some(&9));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.len.checked_sub(1)?)
    }

    /// Appends an element to the back of the `Deque`.
    ///
    /// # Panics
    ///
    /// Panics if the back buffer's capacity overflows, and aborts if the allocator fails. Use
    /// [`try_push_back`](Deque::try_push_back) to handle either case.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut buf = Deque::new();
    /// buf.push_back(1);
    /// buf.push_back(3);
    /// assert_eq!(3, *buf.back().unwrap());
    /// ```
    pub fn push_back(&mut self, value: T) {
        if let Err(e) = self.try_push_back(value) {
            error::handle_error(e);
        }
    }

    /// Appends an element to the back of the `Deque`, reporting a failure to grow the back
    /// buffer instead of panicking.
    ///
    /// On error, `value` is dropped and the deque is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut buf = Deque::new();
    /// buf.try_push_back(1).unwrap();
    /// assert_eq!(buf, vec![1]);
    /// ```
    pub fn try_push_back(&mut self, value: T) -> Result<(), Error> {
        let value = if self.back.is_unset() {
            // the back buffer is empty, so the front buffer's inner edge is the back of the deque
            match self.front.push_inner(value) {
                Ok(()) => {
                    self.len += 1;
                    return Ok(());
                }
                Err(value) => value,
            }
        } else {
            value
        };

        self.back.try_push_outer(value)?;
        self.len += 1;
        Ok(())
    }

    /// Prepends an element to the front of the `Deque`.
    ///
    /// # Panics
    ///
    /// Panics if the front buffer's capacity overflows, and aborts if the allocator fails. Use
    /// [`try_push_front`](Deque::try_push_front) to handle either case.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.push_front(1);
    /// d.push_front(2);
    /// assert_eq!(d.front(), Some(&2));
    /// ```
    pub fn push_front(&mut self, value: T) {
        if let Err(e) = self.try_push_front(value) {
            error::handle_error(e);
        }
    }

    /// Prepends an element to the front of the `Deque`, reporting a failure to grow the front
    /// buffer instead of panicking.
    ///
    /// On error, `value` is dropped and the deque is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut buf = Deque::new();
    /// buf.try_push_front(1).unwrap();
    /// buf.try_push_front(0).unwrap();
    /// assert_eq!(buf, vec![0, 1]);
    /// ```
    pub fn try_push_front(&mut self, value: T) -> Result<(), Error> {
        let value = if self.front.is_unset() {
            match self.back.push_inner(value) {
                Ok(()) => {
                    self.len += 1;
                    return Ok(());
                }
                Err(value) => value,
            }
        } else {
            value
        };

        self.front.try_push_outer(value)?;
        self.len += 1;
        Ok(())
    }

    /// Removes the first element and returns it, or `None` if the `Deque` is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.push_back(1);
    /// d.push_back(2);
    ///
    /// assert_eq!(d.pop_front(), Some(1));
    /// assert_eq!(d.pop_front(), Some(2));
    /// assert_eq!(d.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let value = if self.front.is_unset() {
            self.back.pop_inner()
        } else {
            self.front.pop_outer()
        }?;
        self.len -= 1;
        Some(value)
    }

    /// Removes the last element from the `Deque` and returns it, or `None` if
    /// it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut buf = Deque::new();
    /// assert_eq!(buf.pop_back(), None);
    /// buf.push_back(1);
    /// buf.push_back(3);
    /// assert_eq!(buf.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let value = if self.back.is_unset() {
            self.front.pop_inner()
        } else {
            self.back.pop_outer()
        }?;
        self.len -= 1;
        Some(value)
    }

    /// Clears the `Deque`, removing all values.
    ///
    /// Both buffers keep their current capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut v = Deque::new();
    /// v.push_back(1);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
        self.front.clear();
        self.back.clear();
    }

    /// Shortens the `Deque`, keeping the first `len` elements and dropping
    /// the rest.
    ///
    /// If `len` is greater than the `Deque`'s current length, this has no
    /// effect.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut buf = Deque::new();
    /// buf.push_back(5);
    /// buf.push_back(10);
    /// buf.push_front(15);
    /// assert_eq!(buf, vec![15, 5, 10]);
    /// buf.truncate(1);
    /// assert_eq!(buf, vec![15]);
    /// ```
    pub fn truncate(&mut self, len: usize) {
        while self.len > len {
            let _ = self.pop_back();
        }
    }

    /// Swaps elements at indices `i` and `j`.
    ///
    /// `i` and `j` may be equal.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut buf = Deque::new();
    /// buf.push_back(3);
    /// buf.push_back(4);
    /// buf.push_front(5);
    /// assert_eq!(buf, vec![5, 3, 4]);
    /// buf.swap(0, 2);
    /// assert_eq!(buf, vec![4, 3, 5]);
    /// ```
    pub fn swap(&mut self, i: usize, j: usize) {
        let a = self.slot_ptr(i);
        let b = self.slot_ptr(j);
        match (a, b) {
            // both point at live values, possibly the same one
            (Some(a), Some(b)) => unsafe { ptr::swap(a, b) },
            _ => panic!("Out of bounds access"),
        }
    }

    #[inline]
    fn slot_ptr(&mut self, index: usize) -> Option<*mut T> {
        Some(match self.locate(index)? {
            Slot::Front(i) => unsafe { self.front.slot_ptr(i) },
            Slot::Back(i) => unsafe { self.back.slot_ptr(i) },
        })
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all elements `e` such that `f(&e)` returns false.
    /// This method operates in place, visiting each element exactly once in the
    /// original order, and preserves the order of the retained elements. Neither
    /// buffer grows.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut buf = Deque::new();
    /// buf.extend(1..5);
    /// buf.push_front(0);
    /// buf.retain(|&x| x % 2 == 0);
    /// assert_eq!(buf, vec![0, 2, 4]);
    /// ```
    pub fn retain<G>(&mut self, mut f: G)
    where
        G: FnMut(&T) -> bool,
    {
        let len = self.len;
        let mut kept = 0;
        for i in 0..len {
            if f(&self[i]) {
                if kept != i {
                    self.swap(kept, i);
                }
                kept += 1;
            }
        }
        self.truncate(kept);
    }

    /// Returns `true` if the `Deque` contains an element equal to the
    /// given value.
    ///
    /// This uses `PartialEq`, not the deque's ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut deque: Deque<u32> = Deque::new();
    ///
    /// deque.push_back(0);
    /// deque.push_front(1);
    ///
    /// assert_eq!(deque.contains(&1), true);
    /// assert_eq!(deque.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.front.as_slice().contains(x) || self.back.as_slice().contains(x)
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut buf = Deque::new();
    /// buf.push_back(5);
    /// buf.push_back(3);
    /// buf.push_front(4);
    /// let b: &[_] = &[&4, &5, &3];
    /// let c: Vec<&i32> = buf.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    pub fn iter(&self) -> iter::Iter<'_, T> {
        iter::Iter {
            head: self.front.as_slice().iter().rev(),
            tail: self.back.as_slice().iter(),
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut buf = Deque::new();
    /// buf.push_back(5);
    /// buf.push_back(3);
    /// buf.push_front(4);
    /// for num in buf.iter_mut() {
    ///     *num = *num - 2;
    /// }
    /// let b: &[_] = &[&mut 2, &mut 3, &mut 1];
    /// assert_eq!(&buf.iter_mut().collect::<Vec<&mut i32>>()[..], b);
    /// ```
    pub fn iter_mut(&mut self) -> iter::IterMut<'_, T> {
        iter::IterMut {
            head: self.front.as_mut_slice().iter_mut().rev(),
            tail: self.back.as_mut_slice().iter_mut(),
        }
    }

    /// Returns a cursor at the first element, or at the end sentinel if the `Deque` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let d: Deque<_> = (0..3).collect();
    /// let mut c = d.begin();
    /// for _ in 0..d.len() {
    ///     c.move_next();
    /// }
    /// assert!(c == d.end());
    /// ```
    pub fn begin(&self) -> iter::Cursor<'_, T, F> {
        iter::Cursor {
            deque: self,
            index: if self.len == 0 { None } else { Some(0) },
        }
    }

    /// Returns a cursor at the end sentinel, one past the last element.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let d: Deque<_> = (0..3).collect();
    /// let mut c = d.end();
    /// assert_eq!(c.get(), None);
    /// c.move_prev();
    /// assert_eq!(c.get(), Some(&2));
    /// ```
    pub fn end(&self) -> iter::Cursor<'_, T, F> {
        iter::Cursor {
            deque: self,
            index: None,
        }
    }
}

impl<T: Clone, F: Clone> Clone for Deque<T, F> {
    fn clone(&self) -> Self {
        let mut d = Self::try_from_ordering(self.less.clone())
            .unwrap_or_else(|e| error::handle_error(e));
        d.extend(self.iter().cloned());
        d
    }

    fn clone_from(&mut self, other: &Self) {
        self.clear();
        self.less = other.less.clone();
        self.extend(other.iter().cloned());
    }
}

impl<T, F, G> PartialEq<Deque<T, G>> for Deque<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn eq(&self, other: &Deque<T, G>) -> bool {
        self.equals(other)
    }
}

macro_rules! __impl_slice_eq1 {
    ($lhs:ty, $rhs:ty, $($constraints:tt)*) => {
        impl<A, B, F> PartialEq<$rhs> for $lhs
        where
            A: PartialEq<B>,
            $($constraints)*
        {
            fn eq(&self, other: &$rhs) -> bool {
                self.len() == other.len() && self.iter().eq(other.iter())
            }
        }
    }
}

__impl_slice_eq1! { Deque<A, F>, Vec<B>, }
__impl_slice_eq1! { Deque<A, F>, &[B], }
__impl_slice_eq1! { Deque<A, F>, &mut [B], }

// For symmetry:

macro_rules! __impl_slice_eq2 {
    ($lhs:ty, $rhs:ty, $($constraints:tt)*) => {
        impl<A, B, F> PartialEq<$lhs> for $rhs
        where
            B: PartialEq<A>,
            $($constraints)*
        {
            fn eq(&self, other: &$lhs) -> bool {
                self.len() == other.len() && self.iter().eq(other.iter())
            }
        }
    }
}

__impl_slice_eq2! { Deque<A, F>, Vec<B>, }
__impl_slice_eq2! { Deque<A, F>, &[B], }
__impl_slice_eq2! { Deque<A, F>, &mut [B], }

impl<A, F> Index<usize> for Deque<A, F> {
    type Output = A;

    #[inline]
    fn index(&self, index: usize) -> &A {
        self.get(index).expect("Out of bounds access")
    }
}

impl<A, F> IndexMut<usize> for Deque<A, F> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut A {
        self.get_mut(index).expect("Out of bounds access")
    }
}

impl<A: PartialOrd> FromIterator<A> for Deque<A> {
    fn from_iter<T: IntoIterator<Item = A>>(iter: T) -> Self {
        let mut deq = Self::new();
        deq.extend(iter);
        deq
    }
}

impl<T, F> IntoIterator for Deque<T, F> {
    type Item = T;
    type IntoIter = iter::IntoIter<T, F>;

    fn into_iter(self) -> iter::IntoIter<T, F> {
        iter::IntoIter { inner: self }
    }
}

impl<'a, T, F> IntoIterator for &'a Deque<T, F> {
    type Item = &'a T;
    type IntoIter = iter::Iter<'a, T>;

    fn into_iter(self) -> iter::Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, F> IntoIterator for &'a mut Deque<T, F> {
    type Item = &'a mut T;
    type IntoIter = iter::IterMut<'a, T>;

    fn into_iter(self) -> iter::IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<A, F> Extend<A> for Deque<A, F> {
    fn extend<T: IntoIterator<Item = A>>(&mut self, iter: T) {
        iter.into_iter().for_each(move |v| self.push_back(v));
    }
}

impl<'a, T: 'a + Copy, F> Extend<&'a T> for Deque<T, F> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Deque<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: PartialOrd> From<Vec<T>> for Deque<T> {
    fn from(other: Vec<T>) -> Self {
        other.into_iter().collect()
    }
}

impl<T, F> From<Deque<T, F>> for Vec<T> {
    fn from(other: Deque<T, F>) -> Self {
        let mut v = Vec::with_capacity(other.len());
        v.extend(other);
        v
    }
}
