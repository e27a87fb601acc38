use crate::SqrtDeque;
use crate::cursor::{Cursor, Position};
use crate::error::{Error, Result};

/// A random-access cursor over a SqrtDeque with editing operations.
///
/// Like [`Cursor`], it holds a logical index in `0..=len`, `len` being the
/// end sentinel, and resolves it through the chunk directory on every access.
/// Inserting and erasing through the cursor keep that index: after an insert
/// the cursor rests on the new element, after an erase on the element that
/// followed the erased one, or on the end sentinel.
pub struct CursorMut<'a, T> {
    deque: &'a mut SqrtDeque<T>,
    index: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn from_front(deque: &'a mut SqrtDeque<T>) -> Self {
        Self { deque, index: 0 }
    }

    pub(crate) fn from_end(deque: &'a mut SqrtDeque<T>) -> Self {
        let index = deque.len();
        Self { deque, index }
    }

    pub(crate) fn new(deque: &'a mut SqrtDeque<T>, index: usize) -> Result<Self> {
        if index > deque.len() {
            return Err(Error::OutOfBounds);
        }

        Ok(Self { deque, index })
    }

    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::with_index(self.deque, self.index)
    }

    pub fn as_deque(&self) -> &SqrtDeque<T> {
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

    pub fn get(&self) -> Result<&T> {
        self.deque.at(self.index)
    }

    /// The element under the cursor, or `OutOfBounds` at the end sentinel.
    pub fn get_mut(&mut self) -> Result<&mut T> {
        self.deque.at_mut(self.index)
    }

    /// Moves the cursor by a signed offset. The cursor stays put when the
    /// target falls outside `0..=len`.
    pub fn offset(&mut self, n: isize) -> Result<()> {
        let index = self
            .index
            .checked_add_signed(n)
            .filter(|&index| index <= self.deque.len())
            .ok_or(Error::OutOfBounds)?;

        self.index = index;
        Ok(())
    }

    pub fn move_next(&mut self) -> Result<()> {
        self.offset(1)
    }

    pub fn move_prev(&mut self) -> Result<()> {
        self.offset(-1)
    }

    /// Inserts `value` before the element under the cursor, which then
    /// rests on the inserted element.
    pub fn insert(&mut self, value: T) -> Result<()> {
        self.deque.insert(self.index, value)
    }

    /// Removes and returns the element under the cursor.
    ///
    /// # Errors
    /// - [`Error::EmptyContainer`] if the deque is empty.
    /// - [`Error::OutOfBounds`] at the end sentinel.
    pub fn erase(&mut self) -> Result<T> {
        self.deque.remove(self.index)
    }

    /// Detaches the cursor from its borrow, keeping the deque identity.
    pub fn position(&self) -> Position {
        self.as_cursor().position()
    }
}

impl<T> core::fmt::Debug for CursorMut<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("CursorMut")
            .field(&self.deque)
            .field(&self.index)
            .finish()
    }
}
