use core::iter::{Flatten, FusedIterator};
use core::slice;

use crate::SqrtDeque;
use crate::chunk::Chunk;

/// A mutable iterator over the elements of a SqrtDeque.
///
/// This struct is created by SqrtDeque::iter_mut().
pub struct IterMut<'a, T> {
    delegate: Flatten<slice::IterMut<'a, Chunk<T>>>,
    len: usize,
}

impl<T> Default for IterMut<'_, T> {
    fn default() -> Self {
        Self {
            delegate: <&mut [Chunk<T>]>::default().iter_mut().flatten(),
            len: 0,
        }
    }
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn from_deque(deque: &'a mut SqrtDeque<T>) -> Self {
        let len = deque.len();
        Self {
            delegate: deque.directory.as_mut_slice().iter_mut().flatten(),
            len,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

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

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let out = self.delegate.next_back()?;
        self.len -= 1;
        Some(out)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> core::fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IterMut").field(&self.len).finish()
    }
}
