//! # sqrt_deque
//!
//! `sqrt_deque` implements a double-ended indexed sequence backed by a
//! **sqrt-decomposition** of its elements: a directory of contiguous chunks
//! whose lengths are kept close to `√n`.
//!
//! ## Features
//! - Random access, insertion and removal at any position in `O(√n)`
//!   amortized time.
//! - Self-balancing storage: chunks that grow too large are split, and
//!   neighbours that shrink too much are merged.
//! - Index based `Cursor`s and `CursorMut`s that survive structural mutation,
//!   together with detached `Position`s for inserting and erasing.
//! - Deep `Clone`, standard iteration, comparison and hashing.
//!
//! ## Balancing
//! A chunk of length `L` is split once `L ≥ 16` and `L² > 8n`, and two
//! neighbours of combined length `M` are merged once `64 M² ≤ n`. Besides the
//! local check done by every insert and removal, a full compaction pass runs
//! with probability `1 / COMPACTION_ODDS` to correct drift accumulated over
//! many operations. [`SqrtDeque::compact`] runs that pass on demand.
//!
//! ## Example
//! ```rust
//! use sqrt_deque::SqrtDeque;
//!
//! let mut deque: SqrtDeque<i64> = SqrtDeque::new();
//! deque.push_back(2);
//! deque.push_front(0);
//! deque.insert(1, 1).unwrap();
//!
//! assert_eq!(deque.front(), Ok(&0));
//! assert_eq!(deque.at(1), Ok(&1));
//! assert_eq!(deque.back(), Ok(&2));
//!
//! assert_eq!(deque.remove(1), Ok(1));
//! assert_eq!(deque.pop_back(), Ok(2));
//! assert_eq!(deque.pop_front(), Ok(0));
//! assert!(deque.pop_front().is_err());
//! ```

mod chunk;
mod cursor;
mod cursor_mut;
mod directory;
mod error;
mod into_iter;
mod iter;
mod iter_mut;
mod rebalance;
mod resolver;

pub use chunk::MIN_CHUNK_CAPACITY;
pub use cursor::{Cursor, Position};
pub use cursor_mut::CursorMut;
pub use error::{Error, Result};
pub use into_iter::IntoIter;
pub use iter::Iter;
pub use iter_mut::IterMut;
pub use rebalance::{COMPACTION_ODDS, MERGE_FACTOR, SPLIT_FACTOR, SPLIT_MIN_LEN};

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use crate::cursor::DequeId;
use crate::directory::Directory;
use crate::rebalance::{should_compact, should_merge, should_split};
use crate::resolver::SearchTarget;

/// A double-ended sequence with `O(√n)` random access, insertion and removal.
///
/// # Features
/// - **Chunked Storage**: elements live in contiguous chunks whose lengths
///   track `√n`, so shifting inside a chunk and locating a chunk both stay cheap.
/// - **Flexible Operations**: index based lookups and insertions, deletions
///   and access at arbitrary positions, plus cursor based ones.
///
/// # Example
/// ```rust
/// use sqrt_deque::SqrtDeque;
///
/// let mut deque: SqrtDeque<i64> = SqrtDeque::new();
/// deque.push_back(3);
/// deque.push_front(1);
/// deque.insert(1, 2).unwrap();
///
/// assert!(!deque.is_empty());
/// assert_eq!(deque.len(), 3);
///
/// assert_eq!(deque.pop_front(), Ok(1));
/// assert_eq!(deque.pop_front(), Ok(2));
/// assert_eq!(deque.pop_front(), Ok(3));
/// ```
pub struct SqrtDeque<T> {
    directory: Directory<T>,
    len: usize,
    id: DequeId,
}

impl<T, const M: usize> From<[T; M]> for SqrtDeque<T> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for SqrtDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for SqrtDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push_back(value));
    }
}

impl<'a, T> Extend<&'a T> for SqrtDeque<T>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> Default for SqrtDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SqrtDeque<T> {
    /// Creates a new, empty `SqrtDeque` holding a single empty chunk.
    ///
    /// # Example
    /// ```rust
    /// use sqrt_deque::SqrtDeque;
    ///
    /// let deque: SqrtDeque<i64> = SqrtDeque::new();
    ///
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.chunk_count(), 1);
    /// ```
    pub fn new() -> Self {
        Self {
            directory: Directory::new(),
            len: 0,
            id: DequeId::next(),
        }
    }

    /// Adds an element to the front of the `SqrtDeque`.
    ///
    /// # Example
    /// ```rust
    /// use sqrt_deque::SqrtDeque;
    ///
    /// let mut deque: SqrtDeque<i64> = SqrtDeque::new();
    /// deque.push_front(10);
    /// deque.push_front(20);
    ///
    /// assert_eq!(deque.len(), 2);
    ///
    /// assert_eq!(deque.pop_front(), Ok(20));
    /// assert_eq!(deque.pop_front(), Ok(10));
    /// ```
    pub fn push_front(&mut self, value: T) {
        self.directory.first_mut().push_front(value);
        self.len += 1;
        self.rebalance_after_insert(0);
    }

    /// Adds an element to the back of the `SqrtDeque`.
    ///
    /// # Example
    /// ```rust
    /// use sqrt_deque::SqrtDeque;
    ///
    /// let mut deque: SqrtDeque<i64> = SqrtDeque::new();
    /// deque.push_back(10);
    /// deque.push_back(20);
    ///
    /// assert_eq!(deque.len(), 2);
    ///
    /// assert_eq!(deque.pop_back(), Ok(20));
    /// assert_eq!(deque.pop_back(), Ok(10));
    /// ```
    pub fn push_back(&mut self, value: T) {
        let chunk_index = self.directory.len() - 1;
        self.directory.last_mut().push_back(value);
        self.len += 1;
        self.rebalance_after_insert(chunk_index);
    }

    /// Inserts an element at `index`, shifting subsequent elements to the right.
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] if `index > len`; the deque is left untouched.
    ///
    /// # Examples
    /// ```
    /// use sqrt_deque::{Error, SqrtDeque};
    ///
    /// let mut deque = SqrtDeque::from([10, 30]);
    /// deque.insert(1, 20).unwrap();
    ///
    /// assert_eq!(deque, [10, 20, 30]);
    /// assert_eq!(deque.insert(4, 40), Err(Error::OutOfBounds));
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let SearchTarget {
            chunk_index,
            target_index,
        } = self.directory.find_at_allow_end(self.len, index)?;

        self.directory
            .chunk_mut(chunk_index)
            .ok_or(Error::OutOfBounds)?
            .insert(target_index, value)?;

        self.len += 1;
        self.rebalance_after_insert(chunk_index);
        Ok(())
    }

    /// Inserts an element before `position` and returns the position of
    /// the inserted element, which is `position` itself.
    ///
    /// # Errors
    /// - [`Error::InvalidCursor`] if `position` belongs to another deque.
    /// - [`Error::OutOfBounds`] if `position` lies past the end.
    ///
    /// # Example
    /// ```rust
    /// use sqrt_deque::SqrtDeque;
    ///
    /// let mut deque = SqrtDeque::from([1, 3]);
    /// let position = deque.begin().checked_add(1).unwrap().position();
    ///
    /// let inserted = deque.insert_at(position, 2).unwrap();
    /// assert_eq!(deque.cursor_at(inserted).unwrap().get(), Ok(&2));
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    pub fn insert_at(&mut self, position: Position, value: T) -> Result<Position> {
        let index = position.owned_by(self)?;
        self.insert(index, value)?;
        Ok(Position::new(self.id, index))
    }

    /// Removes and returns the first element of the `SqrtDeque`.
    ///
    /// # Errors
    /// Returns [`Error::EmptyContainer`] if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// use sqrt_deque::{Error, SqrtDeque};
    ///
    /// let mut deque = SqrtDeque::from([20, 10]);
    ///
    /// assert_eq!(deque.pop_front(), Ok(20));
    /// assert_eq!(deque.pop_front(), Ok(10));
    /// assert_eq!(deque.pop_front(), Err(Error::EmptyContainer));
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        let value = self
            .directory
            .first_mut()
            .pop_front()
            .ok_or(Error::EmptyContainer)?;

        self.len -= 1;
        self.rebalance_after_remove(0);
        Ok(value)
    }

    /// Removes and returns the last element of the `SqrtDeque`.
    ///
    /// # Errors
    /// Returns [`Error::EmptyContainer`] if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// use sqrt_deque::{Error, SqrtDeque};
    ///
    /// let mut deque = SqrtDeque::from([10, 20]);
    ///
    /// assert_eq!(deque.pop_back(), Ok(20));
    /// assert_eq!(deque.pop_back(), Ok(10));
    /// assert_eq!(deque.pop_back(), Err(Error::EmptyContainer));
    /// ```
    pub fn pop_back(&mut self) -> Result<T> {
        let chunk_index = self.directory.len() - 1;
        let value = self
            .directory
            .last_mut()
            .pop_back()
            .ok_or(Error::EmptyContainer)?;

        self.len -= 1;
        self.rebalance_after_remove(chunk_index);
        Ok(value)
    }

    /// Removes and returns the element at `index`, shifting subsequent elements left.
    ///
    /// # Errors
    /// - [`Error::EmptyContainer`] if the deque is empty.
    /// - [`Error::OutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// use sqrt_deque::{Error, SqrtDeque};
    ///
    /// let mut deque = SqrtDeque::from([10, 20, 30, 40, 50]);
    ///
    /// assert_eq!(deque.remove(1), Ok(20));
    /// assert_eq!(deque.at(1), Ok(&30));
    /// assert_eq!(deque.len(), 4);
    ///
    /// assert_eq!(deque.remove(10), Err(Error::OutOfBounds));
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }

        let SearchTarget {
            chunk_index,
            target_index,
        } = self.directory.find_at(self.len, index)?;

        let value = self
            .directory
            .chunk_mut(chunk_index)
            .ok_or(Error::OutOfBounds)?
            .remove(target_index)?;

        self.len -= 1;
        self.rebalance_after_remove(chunk_index);
        Ok(value)
    }

    /// Removes the element at `position` and returns the position of the
    /// element that followed it, which is `position` itself, or the end
    /// position when the last element was removed.
    ///
    /// # Errors
    /// - [`Error::InvalidCursor`] if `position` belongs to another deque.
    /// - [`Error::EmptyContainer`] if the deque is empty.
    /// - [`Error::OutOfBounds`] if `position` does not name an element.
    ///
    /// # Example
    /// ```rust
    /// use sqrt_deque::SqrtDeque;
    ///
    /// let mut deque = SqrtDeque::from([1, 2, 3]);
    /// let last = deque.end().checked_sub(1).unwrap().position();
    ///
    /// let next = deque.erase(last).unwrap();
    /// assert_eq!(next, deque.end().position());
    /// assert_eq!(deque, [1, 2]);
    /// ```
    pub fn erase(&mut self, position: Position) -> Result<Position> {
        let index = position.owned_by(self)?;
        self.remove(index)?;
        Ok(Position::new(self.id, index))
    }

    /// Moves all elements from the `other` deque to the end of this one.
    ///
    /// The chunks of `other` are reused and the directory is rebalanced with
    /// a compaction pass. After this operation, `other` becomes empty.
    ///
    /// # Example
    /// ```rust
    /// use sqrt_deque::SqrtDeque;
    ///
    /// let mut deque1 = SqrtDeque::from([1, 2]);
    /// let mut deque2 = SqrtDeque::from([3, 4]);
    ///
    /// deque1.append(&mut deque2);
    ///
    /// assert_eq!(deque1, [1, 2, 3, 4]);
    /// assert!(deque2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        let directory = core::mem::take(&mut other.directory);
        directory
            .into_chunks()
            .into_iter()
            .filter(|chunk| !chunk.is_empty())
            .for_each(|chunk| self.directory.push_chunk(chunk));

        self.len += other.len;
        other.len = 0;
        self.compact();
    }

    /// Removes all elements from the `SqrtDeque`, leaving a single empty chunk.
    ///
    /// # Example
    /// ```rust
    /// use sqrt_deque::SqrtDeque;
    ///
    /// let mut deque: SqrtDeque<i32> = (0..5000).collect();
    /// deque.clear();
    ///
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.chunk_count(), 1);
    /// ```
    pub fn clear(&mut self) {
        self.directory.reset();
        self.len = 0;
    }

    /// Runs a full compaction pass: drops empty chunks, then splits every
    /// oversized chunk and merges every undersized pair of neighbours.
    ///
    /// Insertions and removals already run this pass now and then; calling
    /// it explicitly never changes the contents of the deque.
    pub fn compact(&mut self) {
        self.directory.compact(self.len);
    }

    /// Returns the number of chunks the elements are currently spread over.
    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.directory.len()
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    /// Returns [`Error::EmptyContainer`] if the deque is empty.
    ///
    /// # Example
    /// ```rust
    /// use sqrt_deque::{Error, SqrtDeque};
    ///
    /// let mut deque = SqrtDeque::new();
    /// assert_eq!(deque.front(), Err(Error::EmptyContainer));
    ///
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.front(), Ok(&1));
    /// ```
    pub fn front(&self) -> Result<&T> {
        self.directory
            .first()
            .as_slice()
            .first()
            .ok_or(Error::EmptyContainer)
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Errors
    /// Returns [`Error::EmptyContainer`] if the deque is empty.
    ///
    /// # Example
    /// ```rust
    /// use sqrt_deque::{Error, SqrtDeque};
    ///
    /// let mut deque = SqrtDeque::new();
    /// assert_eq!(deque.front_mut(), Err(Error::EmptyContainer));
    ///
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// *deque.front_mut().unwrap() = 10;
    /// assert_eq!(deque, [10, 2]);
    /// ```
    pub fn front_mut(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }

        self.at_mut(0)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    /// Returns [`Error::EmptyContainer`] if the deque is empty.
    ///
    /// # Example
    /// ```rust
    /// use sqrt_deque::{Error, SqrtDeque};
    ///
    /// let mut deque = SqrtDeque::new();
    /// assert_eq!(deque.back(), Err(Error::EmptyContainer));
    ///
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.back(), Ok(&2));
    /// ```
    pub fn back(&self) -> Result<&T> {
        self.directory
            .last()
            .as_slice()
            .last()
            .ok_or(Error::EmptyContainer)
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Errors
    /// Returns [`Error::EmptyContainer`] if the deque is empty.
    ///
    /// # Example
    /// ```rust
    /// use sqrt_deque::{Error, SqrtDeque};
    ///
    /// let mut deque = SqrtDeque::new();
    /// assert_eq!(deque.back_mut(), Err(Error::EmptyContainer));
    ///
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// *deque.back_mut().unwrap() = 20;
    /// assert_eq!(deque, [1, 20]);
    /// ```
    pub fn back_mut(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }

        self.at_mut(self.len - 1)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] if `index >= len`.
    ///
    /// # Example
    /// ```rust
    /// use sqrt_deque::{Error, SqrtDeque};
    ///
    /// let deque = SqrtDeque::from([10, 20, 30]);
    ///
    /// assert_eq!(deque.at(1), Ok(&20));
    /// assert_eq!(deque.at(3), Err(Error::OutOfBounds));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        let SearchTarget {
            chunk_index,
            target_index,
        } = self.directory.find_at(self.len, index)?;

        self.directory
            .chunk(chunk_index)
            .and_then(|chunk| chunk.get(target_index))
            .ok_or(Error::OutOfBounds)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] if `index >= len`.
    ///
    /// # Example
    /// ```rust
    /// use sqrt_deque::{Error, SqrtDeque};
    ///
    /// let mut deque = SqrtDeque::from([10, 20, 30]);
    ///
    /// *deque.at_mut(1).unwrap() = 21;
    /// assert_eq!(deque, [10, 21, 30]);
    /// assert_eq!(deque.at_mut(3), Err(Error::OutOfBounds));
    /// ```
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let SearchTarget {
            chunk_index,
            target_index,
        } = self.directory.find_at(self.len, index)?;

        self.directory
            .chunk_mut(chunk_index)
            .and_then(|chunk| chunk.get_mut(target_index))
            .ok_or(Error::OutOfBounds)
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    ///
    /// # Example
    /// ```rust
    /// use sqrt_deque::SqrtDeque;
    ///
    /// let deque = SqrtDeque::from([10, 20, 30]);
    ///
    /// assert_eq!(deque.get(0), Some(&10));
    /// assert_eq!(deque.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.at(index).ok()
    }

    /// Returns a mutable reference to the element at `index`, or `None` if out of bounds.
    ///
    /// # Example
    /// ```rust
    /// use sqrt_deque::SqrtDeque;
    ///
    /// let mut deque = SqrtDeque::from([10, 20, 30]);
    ///
    /// if let Some(value) = deque.get_mut(2) {
    ///     *value = 31;
    /// }
    /// assert_eq!(deque, [10, 20, 31]);
    /// assert_eq!(deque.get_mut(3), None);
    /// ```
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.at_mut(index).ok()
    }

    /// Returns the number of elements in the `SqrtDeque`.
    ///
    /// # Example
    /// ```rust
    /// use sqrt_deque::SqrtDeque;
    ///
    /// let mut deque = SqrtDeque::new();
    /// assert_eq!(deque.len(), 0);
    ///
    /// deque.push_back(1);
    /// deque.push_front(0);
    /// assert_eq!(deque.len(), 2);
    /// ```
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the `SqrtDeque` holds no elements.
    ///
    /// # Example
    /// ```rust
    /// use sqrt_deque::SqrtDeque;
    ///
    /// let mut deque = SqrtDeque::new();
    /// assert!(deque.is_empty());
    ///
    /// deque.push_back(1);
    /// assert!(!deque.is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a front-to-back iterator over the elements.
    ///
    /// # Example
    /// ```rust
    /// use sqrt_deque::SqrtDeque;
    ///
    /// let deque = SqrtDeque::from([1, 2, 3]);
    /// let mut iter = deque.iter();
    ///
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next_back(), Some(&3));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_deque(self)
    }

    /// Returns a front-to-back iterator yielding mutable references.
    ///
    /// # Example
    /// ```rust
    /// use sqrt_deque::SqrtDeque;
    ///
    /// let mut deque = SqrtDeque::from([1, 2, 3]);
    /// deque.iter_mut().for_each(|value| *value *= 10);
    ///
    /// assert_eq!(deque, [10, 20, 30]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::from_deque(self)
    }

    /// Returns a cursor on the first element, or on the end sentinel if the
    /// deque is empty.
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::from_front(self)
    }

    /// Returns a cursor on the end sentinel, one past the last element.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::from_end(self)
    }

    /// Returns a cursor at `index`, which may be the end sentinel `len`.
    pub fn cursor(&self, index: usize) -> Result<Cursor<'_, T>> {
        Cursor::new(self, index)
    }

    /// Attaches a detached `position` back to this deque.
    ///
    /// # Errors
    /// - [`Error::InvalidCursor`] if `position` belongs to another deque.
    /// - [`Error::OutOfBounds`] if the deque shrank below `position`.
    pub fn cursor_at(&self, position: Position) -> Result<Cursor<'_, T>> {
        let index = position.owned_by(self)?;
        Cursor::new(self, index)
    }

    /// Returns an editing cursor on the first element, or on the end
    /// sentinel if the deque is empty.
    ///
    /// # Example
    /// ```rust
    /// use sqrt_deque::SqrtDeque;
    ///
    /// let mut deque = SqrtDeque::from([1, 2, 3]);
    ///
    /// let mut cursor = deque.begin_mut();
    /// *cursor.get_mut().unwrap() = 10;
    /// cursor.move_next().unwrap();
    /// assert_eq!(cursor.erase(), Ok(2));
    ///
    /// assert_eq!(deque, [10, 3]);
    /// ```
    #[inline]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::from_front(self)
    }

    /// Returns an editing cursor on the end sentinel, where
    /// [`CursorMut::insert`] appends.
    ///
    /// # Example
    /// ```rust
    /// use sqrt_deque::SqrtDeque;
    ///
    /// let mut deque = SqrtDeque::from([1, 2]);
    /// deque.end_mut().insert(3).unwrap();
    ///
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::from_end(self)
    }

    /// Returns an editing cursor at `index`, which may be the end sentinel `len`.
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] if `index > len`.
    pub fn cursor_mut(&mut self, index: usize) -> Result<CursorMut<'_, T>> {
        CursorMut::new(self, index)
    }

    /// Attaches a detached `position` back to this deque as an editing cursor.
    ///
    /// # Errors
    /// - [`Error::InvalidCursor`] if `position` belongs to another deque.
    /// - [`Error::OutOfBounds`] if the deque shrank below `position`.
    pub fn cursor_mut_at(&mut self, position: Position) -> Result<CursorMut<'_, T>> {
        let index = position.owned_by(self)?;
        CursorMut::new(self, index)
    }

    fn rebalance_after_insert(&mut self, chunk_index: usize) {
        if should_split(self.directory.chunk_len(chunk_index), self.len) {
            self.directory.split_chunk(chunk_index);
        }

        if should_compact() {
            self.compact();
        }
    }

    fn rebalance_after_remove(&mut self, chunk_index: usize) {
        let chunk_len = self.directory.chunk_len(chunk_index);

        if chunk_len == 0 {
            if self.directory.len() > 1 {
                self.directory.remove_chunk_at(chunk_index);
            }
        } else if chunk_index + 1 < self.directory.len()
            && should_merge(chunk_len + self.directory.chunk_len(chunk_index + 1), self.len)
        {
            self.directory.merge_chunks(chunk_index);
        }

        if should_compact() {
            self.compact();
        }
    }
}

impl<T: Clone> Clone for SqrtDeque<T> {
    fn clone(&self) -> Self {
        Self {
            directory: self.directory.clone(),
            len: self.len,
            id: DequeId::next(),
        }
    }
}

impl<T> Index<usize> for SqrtDeque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.at(index) {
            Ok(value) => value,
            Err(_) => panic!(
                "index out of bounds: the len is {} but the index is {index}",
                self.len
            ),
        }
    }
}

impl<T> IndexMut<usize> for SqrtDeque<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len;
        match self.at_mut(index) {
            Ok(value) => value,
            Err(_) => panic!("index out of bounds: the len is {len} but the index is {index}"),
        }
    }
}

impl<T, const M: usize> PartialEq<[T; M]> for SqrtDeque<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq<&[T]> for SqrtDeque<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> PartialEq<[T]> for SqrtDeque<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq for SqrtDeque<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> Eq for SqrtDeque<T> where T: Eq {}

impl<T> PartialOrd for SqrtDeque<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T> Ord for SqrtDeque<T>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T> Hash for SqrtDeque<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T> std::fmt::Debug for SqrtDeque<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.directory.as_slice().iter())
            .finish()
    }
}

impl<T> IntoIterator for SqrtDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_deque(self)
    }
}

impl<'a, T> IntoIterator for &'a SqrtDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::from_deque(self)
    }
}

impl<'a, T> IntoIterator for &'a mut SqrtDeque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut::from_deque(self)
    }
}

#[cfg(test)]
impl<T> SqrtDeque<T> {
    /// Checks the structural invariants of the chunk directory.
    pub(crate) fn assert_invariants(&self) {
        let chunks = self.directory.as_slice();
        assert!(!chunks.is_empty(), "the directory lost its last chunk");

        let total: usize = chunks.iter().map(|chunk| chunk.len()).sum();
        assert_eq!(total, self.len, "chunk lengths do not add up");

        for chunk in chunks {
            assert!(chunk.len() <= chunk.capacity());
            assert!(chunk.capacity() >= MIN_CHUNK_CAPACITY);
            assert!(chunk.capacity().is_power_of_two());
        }

        if chunks.len() > 1 {
            assert!(chunks.iter().all(|chunk| !chunk.is_empty()));
        }
    }

    pub(crate) fn chunk_lens(&self) -> Vec<usize> {
        self.directory.as_slice().iter().map(|c| c.len()).collect()
    }

    pub(crate) fn is_balanced(&self) -> bool {
        self.directory.is_balanced(self.len)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;
    use std::collections::VecDeque;
    use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher};

    use quickcheck_macros::quickcheck;

    use crate::{Error, SqrtDeque};

    #[test]
    fn test_new_creates_empty_deque() {
        let sut: SqrtDeque<i64> = SqrtDeque::new();
        assert!(sut.is_empty());
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.chunk_count(), 1);
        sut.assert_invariants();
    }

    #[test]
    fn test_default_creates_empty_deque() {
        let sut: SqrtDeque<i64> = SqrtDeque::default();
        assert!(sut.is_empty());
        assert_eq!(sut.len(), 0);
    }

    #[test]
    fn test_push_front_adds_element_to_front() {
        let mut sut: SqrtDeque<i64> = SqrtDeque::new();

        sut.push_front(10);
        assert_eq!(sut.len(), 1);
        assert!(!sut.is_empty());

        assert_eq!(sut.pop_front(), Ok(10));
        assert!(sut.is_empty());

        sut.push_front(40);
        sut.push_front(30);
        sut.push_front(20);
        sut.push_front(10);
        assert_eq!(sut, [10, 20, 30, 40]);

        assert_eq!(sut.pop_front(), Ok(10));
        assert_eq!(sut.pop_front(), Ok(20));
        assert_eq!(sut.pop_front(), Ok(30));
        assert_eq!(sut.pop_front(), Ok(40));
        assert!(sut.is_empty());
        sut.assert_invariants();
    }

    #[test]
    fn test_push_back_adds_element_to_back() {
        let mut sut: SqrtDeque<i64> = SqrtDeque::new();

        sut.push_back(10);
        sut.push_back(20);
        sut.push_back(30);
        sut.push_back(40);
        assert_eq!(sut, [10, 20, 30, 40]);

        assert_eq!(sut.pop_back(), Ok(40));
        assert_eq!(sut.pop_back(), Ok(30));
        assert_eq!(sut.pop_back(), Ok(20));
        assert_eq!(sut.pop_back(), Ok(10));
        assert!(sut.is_empty());
        sut.assert_invariants();
    }

    #[test]
    fn test_pop_on_empty_deque_fails() {
        let mut sut: SqrtDeque<i64> = SqrtDeque::new();
        assert_eq!(sut.pop_front(), Err(Error::EmptyContainer));
        assert_eq!(sut.pop_back(), Err(Error::EmptyContainer));
        assert_eq!(sut.remove(0), Err(Error::EmptyContainer));
        assert_eq!(sut.front(), Err(Error::EmptyContainer));
        assert_eq!(sut.back(), Err(Error::EmptyContainer));
        assert_eq!(sut.front_mut(), Err(Error::EmptyContainer));
        assert_eq!(sut.back_mut(), Err(Error::EmptyContainer));
        sut.assert_invariants();
    }

    #[test]
    fn test_insert_inserts_element_at_correct_index() {
        let mut sut: SqrtDeque<i64> = SqrtDeque::new();

        // Insert into an empty deque
        sut.insert(0, 10).unwrap();
        assert_eq!(sut, [10]);

        // Insert at the beginning
        sut.insert(0, 5).unwrap();
        assert_eq!(sut, [5, 10]);

        // Insert at the end
        sut.insert(2, 20).unwrap();
        assert_eq!(sut, [5, 10, 20]);

        // Insert in the middle
        sut.insert(1, 7).unwrap();
        assert_eq!(sut, [5, 7, 10, 20]);

        // Insert out-of-bounds leaves the deque untouched
        assert_eq!(sut.insert(10, 100), Err(Error::OutOfBounds));
        assert_eq!(sut, [5, 7, 10, 20]);
        sut.assert_invariants();
    }

    #[test]
    fn test_remove_removes_element_at_index() {
        let mut sut: SqrtDeque<i64> = SqrtDeque::from([10, 20, 30, 40, 50, 60]);

        assert_eq!(sut.remove(0), Ok(10));
        assert_eq!(sut, [20, 30, 40, 50, 60]);

        assert_eq!(sut.remove(2), Ok(40));
        assert_eq!(sut, [20, 30, 50, 60]);

        assert_eq!(sut.remove(3), Ok(60));
        assert_eq!(sut.get(3), None);

        assert_eq!(sut.remove(3), Err(Error::OutOfBounds));
        assert_eq!(sut, [20, 30, 50]);

        assert_eq!(sut.remove(1), Ok(30));
        assert_eq!(sut.remove(1), Ok(50));
        assert_eq!(sut.remove(0), Ok(20));
        assert_eq!(sut.remove(0), Err(Error::EmptyContainer));
        sut.assert_invariants();
    }

    #[test]
    fn test_at_and_index() {
        let mut sut: SqrtDeque<i64> = SqrtDeque::from([10, 20, 30]);

        assert_eq!(sut.at(0), Ok(&10));
        assert_eq!(sut.at(2), Ok(&30));
        assert_eq!(sut.at(3), Err(Error::OutOfBounds));
        assert_eq!(sut.at(usize::MAX), Err(Error::OutOfBounds));

        *sut.at_mut(1).unwrap() = 21;
        sut[2] = 31;
        assert_eq!(sut[1], 21);
        assert_eq!(sut[2], 31);
        assert_eq!(sut.at_mut(3), Err(Error::OutOfBounds));

        let result = std::panic::catch_unwind(move || sut[3]);
        assert!(result.is_err());
    }

    #[test]
    fn test_get_retrieves_correct_element() {
        let mut sut: SqrtDeque<i64> = SqrtDeque::new();
        assert_eq!(sut.get(0), None);
        assert_eq!(sut.get_mut(5), None);

        sut.extend([10, 20, 30]);
        assert_eq!(sut.get(0), Some(&10));
        assert_eq!(sut.get_mut(1), Some(&mut 20));
        assert_eq!(sut.get(2), Some(&30));
        assert_eq!(sut.get(3), None);
    }

    #[test]
    fn test_front_and_back() {
        let mut sut: SqrtDeque<i64> = SqrtDeque::new();
        sut.push_back(10);
        assert_eq!(sut.front(), Ok(&10));
        assert_eq!(sut.back(), Ok(&10));

        sut.push_back(20);
        *sut.front_mut().unwrap() = 11;
        *sut.back_mut().unwrap() = 21;
        assert_eq!(sut.front(), Ok(&11));
        assert_eq!(sut.back(), Ok(&21));
    }

    #[test]
    fn test_clear_resets_the_deque() {
        let mut sut: SqrtDeque<i32> = (0..10_000).collect();
        assert!(sut.chunk_count() > 1);

        sut.clear();
        assert!(sut.is_empty());
        assert_eq!(sut.chunk_count(), 1);
        assert_eq!(sut.front(), Err(Error::EmptyContainer));
        sut.assert_invariants();

        // Verify the deque is still functional after clearing
        sut.push_back(40);
        assert_eq!(sut.front(), Ok(&40));
        assert_eq!(sut.back(), Ok(&40));
    }

    #[test]
    fn test_insert_then_at_returns_the_inserted_value() {
        for len in [0, 1, 2, 17, 100, 1000, 3000] {
            let base: Vec<usize> = (0..len).collect();
            let mut indexes = vec![0, len / 2, len];
            indexes.extend([1, len.saturating_sub(1)].into_iter().filter(|&i| i <= len));

            for index in indexes {
                let mut sut: SqrtDeque<usize> = base.iter().copied().collect();
                let mut expected = base.clone();

                let position = sut.cursor(index).unwrap().position();
                let inserted = sut.insert_at(position, usize::MAX).unwrap();
                expected.insert(index, usize::MAX);

                assert_eq!(inserted, position);
                assert_eq!(sut.at(index), Ok(&usize::MAX));
                assert_eq!(sut, expected.as_slice(), "insert at {index} of {len}");
                sut.assert_invariants();
            }
        }
    }

    #[test]
    fn test_erase_at_the_resolver_boundaries() {
        for len in [1, 2, 3, 16, 101, 1000, 4097] {
            let base: Vec<usize> = (0..len).collect();

            for index in [0, len / 2, len - 1] {
                let mut sut: SqrtDeque<usize> = base.iter().copied().collect();
                let mut expected = base.clone();

                let position = sut.cursor(index).unwrap().position();
                let next = sut.erase(position).unwrap();
                expected.remove(index);

                assert_eq!(next.index(), index);
                assert_eq!(sut.get(index), expected.get(index));
                assert_eq!(sut, expected.as_slice(), "erase at {index} of {len}");
                sut.assert_invariants();
            }
        }
    }

    #[test]
    fn test_erase_the_last_element_returns_end() {
        let mut sut = SqrtDeque::from([1, 2, 3]);
        let last = sut.cursor(2).unwrap().position();

        let next = sut.erase(last).unwrap();
        assert_eq!(next, sut.end().position());
        assert_eq!(sut.cursor_at(next).unwrap(), sut.end());
    }

    #[test]
    fn test_erase_validates_the_position() {
        let mut sut = SqrtDeque::from([1, 2, 3]);
        let mut other = sut.clone();
        let foreign = other.begin().position();

        assert_eq!(sut.erase(foreign), Err(Error::InvalidCursor));
        assert_eq!(sut.insert_at(foreign, 0), Err(Error::InvalidCursor));
        assert_eq!(sut, [1, 2, 3]);

        let end = sut.end().position();
        assert_eq!(sut.erase(end), Err(Error::OutOfBounds));

        while !other.is_empty() {
            other.pop_back().unwrap();
        }
        assert_eq!(other.erase(foreign), Err(Error::EmptyContainer));
    }

    #[test]
    fn test_push_back_then_read_in_order() {
        let mut sut = SqrtDeque::new();
        for value in 1..=1000 {
            sut.push_back(value);
        }

        assert_eq!(sut.len(), 1000);
        for i in 0..1000 {
            assert_eq!(sut.at(i), Ok(&(i + 1)));
        }
        sut.assert_invariants();
    }

    #[test]
    fn test_alternate_push_front_and_push_back() {
        let mut sut = SqrtDeque::new();
        for value in 0..500 {
            sut.push_front(value);
            sut.push_back(value);
        }

        let expected: Vec<i32> = (0..500).rev().chain(0..500).collect();
        assert_eq!(sut.len(), 1000);
        assert_eq!(sut, expected.as_slice());
        sut.assert_invariants();
    }

    #[test]
    fn test_fill_from_the_front_then_drain_from_the_front() {
        let mut sut = SqrtDeque::new();
        for value in 0..2000 {
            let begin = sut.begin().position();
            sut.insert_at(begin, value).unwrap();
        }
        assert_eq!(sut.front(), Ok(&1999));
        assert_eq!(sut.back(), Ok(&0));
        sut.assert_invariants();

        while !sut.is_empty() {
            let begin = sut.begin().position();
            sut.erase(begin).unwrap();
        }

        assert!(sut.is_empty());
        assert_eq!(sut.len(), 0);
        sut.assert_invariants();

        sut.push_back(7);
        assert_eq!(sut.front(), sut.back());
        assert_eq!(sut.front(), Ok(&7));
    }

    #[test]
    fn test_erase_every_other_element() {
        let mut sut: SqrtDeque<usize> = (0..10_000).collect();
        for i in 0..5000 {
            sut.remove(i).unwrap();
        }

        assert_eq!(sut.len(), 5000);
        assert!(sut.iter().copied().eq((1..10_000).step_by(2)));
        sut.assert_invariants();
    }

    #[test]
    fn test_clone_is_isolated_from_the_original() {
        let mut original: SqrtDeque<String> = (0..3000).map(|v| v.to_string()).collect();
        let snapshot: Vec<String> = original.iter().cloned().collect();

        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.push_front("front".to_owned());
        copy.remove(1500).unwrap();
        copy[10].push('!');
        copy.clear();

        assert_eq!(original, snapshot.as_slice());

        original.pop_back().unwrap();
        assert!(copy.is_empty());
    }

    #[test]
    fn test_compact_is_idempotent_and_restores_balance() {
        let mut sut: SqrtDeque<usize> = (0..20_000).collect();
        for i in (0..10_000).rev() {
            sut.remove(i * 2).unwrap();
        }
        for i in 0..3000 {
            sut.insert(i * 3, i).unwrap();
        }

        sut.compact();
        assert!(sut.is_balanced());
        sut.assert_invariants();

        let layout = sut.chunk_lens();
        sut.compact();
        assert_eq!(sut.chunk_lens(), layout);
    }

    #[test]
    fn test_compact_keeps_a_single_chunk_for_an_empty_deque() {
        let mut sut: SqrtDeque<usize> = (0..5000).collect();
        while sut.pop_front().is_ok() {}

        sut.compact();
        assert_eq!(sut.chunk_count(), 1);
        sut.assert_invariants();
    }

    #[test]
    fn test_large_deques_keep_chunks_near_sqrt_len() {
        let sut: SqrtDeque<usize> = (0..100_000).collect();
        sut.assert_invariants();

        // √(8n) ≈ 894: no chunk may grow past it
        assert!(sut.chunk_lens().iter().all(|&len| len * len <= 8 * 100_000));
        assert!(sut.chunk_count() >= 100_000 / 895);
    }

    #[test]
    fn test_append_combines_two_deques() {
        let mut sut: SqrtDeque<i32> = (0..3000).collect();
        let mut other: SqrtDeque<i32> = (3000..5000).collect();

        sut.append(&mut other);
        assert_eq!(sut.len(), 5000);
        assert!(sut.iter().copied().eq(0..5000));
        assert!(sut.is_balanced());
        sut.assert_invariants();

        assert!(other.is_empty());
        assert_eq!(other.chunk_count(), 1);
        other.assert_invariants();

        other.push_back(1);
        assert_eq!(other, [1]);
    }

    #[test]
    fn test_append_an_empty_deque_does_nothing() {
        let mut sut = SqrtDeque::from([1, 2, 3]);
        let mut other = SqrtDeque::new();

        sut.append(&mut other);
        assert_eq!(sut, [1, 2, 3]);

        other.append(&mut sut);
        assert_eq!(other, [1, 2, 3]);
        assert!(sut.is_empty());
        sut.assert_invariants();
        other.assert_invariants();
    }

    #[test]
    fn test_from_iter_and_extend_work_correctly() {
        let sut: SqrtDeque<i32> = SqrtDeque::from_iter(0..5);
        assert_eq!(sut, [0, 1, 2, 3, 4]);

        let mut sut: SqrtDeque<i32> = SqrtDeque::new();
        sut.extend(0..3);
        sut.extend([3, 4].iter());
        assert_eq!(sut, [0, 1, 2, 3, 4]);
        assert_eq!(sut.front(), Ok(&0));
        assert_eq!(sut.back(), Ok(&4));
    }

    #[test]
    fn test_eq_works_correctly() {
        let l = SqrtDeque::<usize>::from([0, 1, 2, 3, 4]);
        let mut r = SqrtDeque::<usize>::from([0, 2, 3, 4, 1]);

        assert_eq!(l, l);
        assert_eq!(r, r);
        assert_ne!(l, r);

        r.pop_back().unwrap();
        assert_ne!(l, r);

        r.insert(1, 1).unwrap();
        assert_eq!(l, r);
        assert_eq!(l, [0, 1, 2, 3, 4][..]);
        assert_eq!(l, &[0, 1, 2, 3, 4][..]);
    }

    #[test]
    fn test_debug_works_correctly() {
        let sut = SqrtDeque::<usize>::from([0, 1, 2, 3, 4]);
        assert_eq!(format!("{sut:?}"), "[[0, 1, 2, 3, 4]]");

        let sut: SqrtDeque<usize> = SqrtDeque::new();
        assert_eq!(format!("{sut:?}"), "[[]]");
    }

    #[test]
    fn test_cmp_works_correctly() {
        let a = SqrtDeque::<usize>::from([0, 1, 2]);
        let b = SqrtDeque::<usize>::from([4, 5, 6]);
        assert_eq!(a.cmp(&a), Ordering::Equal);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(b.cmp(&a), Ordering::Greater);
    }

    #[test]
    fn test_partial_cmp_works_correctly() {
        let a = SqrtDeque::<f64>::from([0.0, 1.0, 2.0]);
        let b = SqrtDeque::<f64>::from([4.0, 5.0, 6.0]);
        assert_eq!(a.partial_cmp(&a), Some(Ordering::Equal));
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Less));
        assert_eq!(b.partial_cmp(&a), Some(Ordering::Greater));
    }

    #[test]
    fn test_hash_works_correctly() {
        let bh = BuildHasherDefault::<DefaultHasher>::default();
        let a = SqrtDeque::<usize>::from([0, 1, 2]);
        let b = SqrtDeque::<usize>::from([4, 5, 6]);
        assert_ne!(bh.hash_one(&a), bh.hash_one(&b));
        assert_eq!(bh.hash_one(&a), bh.hash_one(&a));
        assert_eq!(bh.hash_one(&a), bh.hash_one(&(a.clone())));
    }

    #[quickcheck]
    fn test_deque_behavioural(seed: VecDeque<i32>) {
        let mut expected = seed;
        let mut actual = SqrtDeque::from_iter(expected.iter().copied());

        for _ in 0..64 {
            let len = expected.len();

            assert_eq!(expected.is_empty(), actual.is_empty());
            assert_eq!(expected.len(), actual.len());

            assert_eq!(expected.front(), actual.front().ok());
            assert_eq!(expected.back(), actual.back().ok());

            assert_eq!(expected.get(0), actual.get(0));
            assert_eq!(expected.get(len / 2), actual.get(len / 2));
            assert_eq!(
                expected.get(len.saturating_sub(1)),
                actual.get(len.saturating_sub(1))
            );
            assert_eq!(expected.get(len), actual.get(len));

            assert_eq!(actual, expected.make_contiguous() as &[_]);
            actual.assert_invariants();

            let choice = rand::random_range(0..=7);
            match choice {
                0 => {
                    let value = rand::random();
                    expected.push_front(value);
                    actual.push_front(value);
                }
                1 => {
                    let index = rand::random_range(0..=len);
                    let value = rand::random();
                    expected.insert(index, value);
                    actual.insert(index, value).unwrap();
                }
                2 => {
                    let value = rand::random();
                    expected.push_back(value);
                    actual.push_back(value);
                }
                3 => assert_eq!(expected.pop_front(), actual.pop_front().ok()),
                4 => {
                    let index = rand::random_range(0..=len);
                    assert_eq!(expected.remove(index), actual.remove(index).ok())
                }
                5 => assert_eq!(expected.pop_back(), actual.pop_back().ok()),
                6 => {
                    actual.compact();
                    assert!(actual.is_balanced());
                }
                7 => {
                    let index = rand::random_range(0..=len);
                    let position = actual.cursor(index).unwrap().position();
                    match actual.erase(position) {
                        Ok(next) => {
                            expected.remove(index);
                            assert_eq!(next.index(), index);
                        }
                        Err(error) => {
                            assert!(index == len);
                            assert!(matches!(error, Error::OutOfBounds | Error::EmptyContainer));
                        }
                    }
                }
                _ => unreachable!(),
            }
        }

        expected.clear();
        actual.clear();

        assert_eq!(expected.is_empty(), actual.is_empty());
        assert_eq!(expected.len(), actual.len());
        assert_eq!(expected.front(), actual.front().ok());
        assert_eq!(expected.back(), actual.back().ok());
    }
}
