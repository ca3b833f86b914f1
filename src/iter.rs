use core::fmt;
use core::iter::{FusedIterator, Rev};
use core::slice;

use crate::Deque;

/// An iterator over the elements of a `Deque`.
///
/// This `struct` is created by the [`iter`] method on [`Deque`]. See its
/// documentation for more.
///
/// [`iter`]: struct.Deque.html#method.iter
/// [`Deque`]: struct.Deque.html
#[derive(Debug)]
pub struct Iter<'a, T> {
    // the front buffer is stored back-to-front, so we walk it in reverse
    pub(super) head: Rev<slice::Iter<'a, T>>,
    pub(super) tail: slice::Iter<'a, T>,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            tail: self.tail.clone(),
        }
    }
}

macro_rules! _impl {
    (fw) => {
        #[inline]
        fn next(&mut self) -> Option<Self::Item> {
            self.head.next().or_else(|| self.tail.next())
        }

        #[inline]
        fn size_hint(&self) -> (usize, Option<usize>) {
            let n = self.head.len() + self.tail.len();
            (n, Some(n))
        }

        fn fold<Acc, G>(self, accum: Acc, mut f: G) -> Acc
        where
            G: FnMut(Acc, Self::Item) -> Acc,
        {
            self.tail.fold(self.head.fold(accum, &mut f), f)
        }

        fn nth(&mut self, n: usize) -> Option<Self::Item> {
            let head_ln = self.head.len();
            if n < head_ln {
                self.head.nth(n)
            } else {
                // exhausts the head
                let _ = self.head.nth(head_ln);
                self.tail.nth(n - head_ln)
            }
        }

        #[inline]
        fn last(mut self) -> Option<Self::Item> {
            self.next_back()
        }
    };

    (bw) => {
        #[inline]
        fn next_back(&mut self) -> Option<Self::Item> {
            self.tail.next_back().or_else(|| self.head.next_back())
        }

        fn rfold<Acc, G>(self, accum: Acc, mut f: G) -> Acc
        where
            G: FnMut(Acc, Self::Item) -> Acc,
        {
            self.head.rfold(self.tail.rfold(accum, &mut f), f)
        }
    };
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    _impl!(fw);
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    _impl!(bw);
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the elements of a `Deque`.
///
/// This `struct` is created by the [`iter_mut`] method on [`Deque`]. See its
/// documentation for more.
///
/// [`iter_mut`]: struct.Deque.html#method.iter_mut
/// [`Deque`]: struct.Deque.html
#[derive(Debug)]
pub struct IterMut<'a, T> {
    pub(super) head: Rev<slice::IterMut<'a, T>>,
    pub(super) tail: slice::IterMut<'a, T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    _impl!(fw);
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    _impl!(bw);
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over the elements of a `Deque`.
///
/// This `struct` is created by the [`into_iter`] method on [`Deque`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: struct.Deque.html#method.into_iter
/// [`Deque`]: struct.Deque.html
pub struct IntoIter<T, F> {
    pub(super) inner: Deque<T, F>,
}

impl<T: Clone, F: Clone> Clone for IntoIter<T, F> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for IntoIter<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner).finish()
    }
}

impl<T, F> Iterator for IntoIter<T, F> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T, F> DoubleEndedIterator for IntoIter<T, F> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.pop_back()
    }
}

impl<T, F> ExactSizeIterator for IntoIter<T, F> {}

impl<T, F> FusedIterator for IntoIter<T, F> {}

/// A cursor over a `Deque`.
///
/// A `Cursor` is positioned either on an element, or on the "end" sentinel that sits one past
/// the last element (and, equivalently, one before the first). It only stores the logical
/// position; the element is looked up again on every [`get`](Cursor::get), so a cursor never
/// points into storage that has since been reallocated.
///
/// This `struct` is created by the [`begin`] and [`end`] methods on [`Deque`].
///
/// [`begin`]: struct.Deque.html#method.begin
/// [`end`]: struct.Deque.html#method.end
/// [`Deque`]: struct.Deque.html
pub struct Cursor<'a, T, F> {
    pub(super) deque: &'a Deque<T, F>,
    pub(super) index: Option<usize>,
}

impl<T, F> Clone for Cursor<'_, T, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, F> Copy for Cursor<'_, T, F> {}

impl<T: fmt::Debug, F> fmt::Debug for Cursor<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor")
            .field(&self.index)
            .field(&self.get())
            .finish()
    }
}

impl<'a, T, F> Cursor<'a, T, F> {
    /// Returns the logical position of the cursor, or `None` at the end sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.push_back(1);
    /// assert_eq!(d.begin().index(), Some(0));
    /// assert_eq!(d.end().index(), None);
    /// ```
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Returns `true` if the cursor is at the end sentinel.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.index.is_none()
    }

    /// Returns a reference to the element under the cursor, or `None` at the end sentinel.
    ///
    /// A cursor borrows the deque shared, so it cannot write. To modify the element under it,
    /// take its [`index`](Cursor::index) and go through [`Deque::at_mut`], or walk the deque
    /// with [`Deque::iter_mut`].
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.push_back(2);
    /// d.push_front(1);
    /// assert_eq!(d.begin().get(), Some(&1));
    /// assert_eq!(d.end().get(), None);
    ///
    /// let mut c = d.begin();
    /// c.move_next();
    /// let i = c.index().unwrap();
    /// *d.at_mut(i).unwrap() = 20;
    /// assert_eq!(d, vec![1, 20]);
    /// ```
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.deque.get(self.index?)
    }

    /// Moves the cursor to the next element.
    ///
    /// Moving past the last element lands on the end sentinel. Moving from the end sentinel
    /// lands on the first element, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let d: Deque<_> = (1..=2).collect();
    /// let mut c = d.begin();
    /// c.move_next();
    /// assert_eq!(c.get(), Some(&2));
    /// c.move_next();
    /// assert!(c.is_end());
    /// ```
    pub fn move_next(&mut self) {
        let len = self.deque.len();
        self.index = match self.index {
            None if len == 0 => None,
            None => Some(0),
            Some(i) if i + 1 < len => Some(i + 1),
            Some(_) => None,
        };
    }

    /// Moves the cursor to the previous element.
    ///
    /// Moving before the first element lands on the end sentinel. Moving from the end sentinel
    /// lands on the last element, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodeque::Deque;
    ///
    /// let d: Deque<_> = (1..=3).collect();
    /// let mut c = d.end();
    /// c.move_prev();
    /// assert_eq!(c.get(), Some(&3));
    /// ```
    pub fn move_prev(&mut self) {
        let len = self.deque.len();
        self.index = match self.index {
            None => len.checked_sub(1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }
}

/// Two cursors are equal if both are at the end sentinel, or if both are at the same position
/// and their elements are equivalent under the deque's ordering.
impl<T, F> PartialEq for Cursor<'_, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn eq(&self, other: &Self) -> bool {
        match (self.index, other.index) {
            (None, None) => true,
            (Some(i), Some(j)) if i == j => match (self.get(), other.get()) {
                (Some(a), Some(b)) => self.deque.equivalent(a, b),
                _ => false,
            },
            _ => false,
        }
    }
}
