use core::iter::{Flatten, FusedIterator};
use core::slice;

use crate::SqrtDeque;
use crate::chunk::Chunk;

/// An iterator over the elements of a SqrtDeque.
///
/// This struct is created by SqrtDeque::iter().
pub struct Iter<'a, T> {
    delegate: Flatten<slice::Iter<'a, Chunk<T>>>,
    len: usize,
}

impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        Self {
            delegate: <&[Chunk<T>]>::default().iter().flatten(),
            len: 0,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn from_deque(deque: &'a SqrtDeque<T>) -> Self {
        Self {
            delegate: deque.directory.as_slice().iter().flatten(),
            len: deque.len(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            delegate: self.delegate.clone(),
            len: self.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.delegate.next()?;
        self.len -= 1;
        Some(out)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        self.delegate.fold(init, f)
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let out = self.delegate.next_back()?;
        self.len -= 1;
        Some(out)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> core::fmt::Debug for Iter<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.clone().collect::<Vec<_>>())
            .field(&self.len)
            .finish()
    }
}
