use core::sync::atomic::{AtomicU64, Ordering};

use crate::SqrtDeque;
use crate::error::{Error, Result};

/// Identity of a deque instance, used to tell whether a cursor or a
/// position belongs to the deque it is used against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct DequeId(u64);

impl DequeId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A logical position within a specific deque, detached from any borrow.
///
/// A `Position` only records the index: after the deque is mutated it stays
/// well-formed but may name a different element, or no element at all.
/// It is obtained from [`Cursor::position`] and consumed by
/// [`SqrtDeque::insert_at`], [`SqrtDeque::erase`] and [`SqrtDeque::cursor_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    owner: DequeId,
    index: usize,
}

impl Position {
    pub(crate) const fn new(owner: DequeId, index: usize) -> Self {
        Self { owner, index }
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn owned_by<T>(&self, deque: &SqrtDeque<T>) -> Result<usize> {
        if self.owner != deque.id {
            return Err(Error::InvalidCursor);
        }

        Ok(self.index)
    }
}

/// A random-access cursor over a SqrtDeque.
///
/// A cursor holds a logical index in `0..=len`, where `len` is the end
/// sentinel. It never caches element addresses: every [`get`](Cursor::get)
/// resolves the index through the chunk directory again.
pub struct Cursor<'a, T> {
    deque: &'a SqrtDeque<T>,
    index: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn from_front(deque: &'a SqrtDeque<T>) -> Self {
        Self { deque, index: 0 }
    }

    pub(crate) fn from_end(deque: &'a SqrtDeque<T>) -> Self {
        Self {
            deque,
            index: deque.len(),
        }
    }

    /// Builds a cursor from an index already known to lie in `0..=len`.
    pub(crate) fn with_index(deque: &'a SqrtDeque<T>, index: usize) -> Self {
        debug_assert!(index <= deque.len());
        Self { deque, index }
    }

    pub(crate) fn new(deque: &'a SqrtDeque<T>, index: usize) -> Result<Self> {
        if index > deque.len() {
            return Err(Error::OutOfBounds);
        }

        Ok(Self { deque, index })
    }

    pub fn as_deque(&self) -> &'a SqrtDeque<T> {
        self.deque
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.index == self.deque.len()
    }

    /// The element under the cursor, or `OutOfBounds` at the end sentinel.
    pub fn get(&self) -> Result<&'a T> {
        self.deque.at(self.index)
    }

    /// Returns a cursor moved `n` elements forward.
    pub fn checked_add(&self, n: usize) -> Result<Self> {
        let index = self.index.checked_add(n).ok_or(Error::OutOfBounds)?;
        Self::new(self.deque, index)
    }

    /// Returns a cursor moved `n` elements backward.
    pub fn checked_sub(&self, n: usize) -> Result<Self> {
        let index = self.index.checked_sub(n).ok_or(Error::OutOfBounds)?;
        Self::new(self.deque, index)
    }

    /// Returns a cursor moved by a signed offset.
    pub fn offset(&self, n: isize) -> Result<Self> {
        let index = self.index.checked_add_signed(n).ok_or(Error::OutOfBounds)?;
        Self::new(self.deque, index)
    }

    pub fn move_next(&mut self) -> Result<()> {
        *self = self.checked_add(1)?;
        Ok(())
    }

    pub fn move_prev(&mut self) -> Result<()> {
        *self = self.checked_sub(1)?;
        Ok(())
    }

    /// Signed distance from `other` to `self`, both of which must belong to
    /// the same deque.
    pub fn distance(&self, other: &Self) -> Result<isize> {
        if self.deque.id != other.deque.id {
            return Err(Error::InvalidCursor);
        }

        signed_distance(other.index, self.index)
    }

    /// Detaches the cursor from its borrow, keeping the deque identity.
    pub fn position(&self) -> Position {
        Position::new(self.deque.id, self.index)
    }
}

/// `to - from` as a signed offset, failing instead of wrapping when the gap
/// does not fit in an `isize`.
pub(crate) fn signed_distance(from: usize, to: usize) -> Result<isize> {
    if to >= from {
        isize::try_from(to - from).map_err(|_| Error::OutOfBounds)
    } else {
        isize::try_from(from - to)
            .map(|distance| -distance)
            .map_err(|_| Error::OutOfBounds)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.deque.id == other.deque.id && self.index == other.index
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> core::fmt::Debug for Cursor<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Cursor")
            .field(self.deque)
            .field(&self.index)
            .finish()
    }
}
