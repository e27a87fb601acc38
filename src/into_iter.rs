use core::iter::{Flatten, FusedIterator};
use std::vec;

use crate::SqrtDeque;
use crate::chunk::Chunk;

/// An owning iterator over the elements of a SqrtDeque.
///
/// This struct is created by SqrtDeque::into_iter().
pub struct IntoIter<T> {
    delegate: Flatten<vec::IntoIter<Chunk<T>>>,
    len: usize,
}

impl<T> Default for IntoIter<T> {
    fn default() -> Self {
        Self {
            delegate: Vec::new().into_iter().flatten(),
            len: 0,
        }
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn from_deque(deque: SqrtDeque<T>) -> Self {
        let len = deque.len();
        Self {
            delegate: deque.directory.into_chunks().into_iter().flatten(),
            len,
        }
    }
}

impl<T: Clone> Clone for IntoIter<T> {
    fn clone(&self) -> Self {
        Self {
            delegate: self.delegate.clone(),
            len: self.len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

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

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let out = self.delegate.next_back()?;
        self.len -= 1;
        Some(out)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> core::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.len).finish()
    }
}
