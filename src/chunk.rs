use crate::error::{Error, Result};

/// Smallest capacity a chunk is ever allocated with.
pub const MIN_CHUNK_CAPACITY: usize = 512;

/// Returns the smallest power of two that is at least `min_capacity`,
/// never going below [`MIN_CHUNK_CAPACITY`].
pub fn fitted_capacity(min_capacity: usize) -> usize {
    min_capacity.max(MIN_CHUNK_CAPACITY).next_power_of_two()
}

/// A contiguous, capacity-doubling buffer holding one slice of a deque.
///
/// The logical `capacity` is tracked explicitly: the buffer relocates every
/// element into a fresh allocation when it fills up (doubling) or when it
/// falls below a quarter of its capacity (halving, never below the floor).
pub struct Chunk<T> {
    buffer: Vec<T>,
    capacity: usize,
}

impl<T> Chunk<T> {
    pub fn new() -> Self {
        Self::with_capacity(MIN_CHUNK_CAPACITY)
    }

    pub fn with_capacity(min_capacity: usize) -> Self {
        let capacity = fitted_capacity(min_capacity);
        Self {
            buffer: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn push_front(&mut self, value: T) {
        self.grow_if_full();
        self.buffer.insert(0, value);
    }

    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.grow_if_full();
        self.buffer.push(value);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = self.buffer.remove(0);
        self.shrink_if_sparse();
        Some(value)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let value = self.buffer.pop()?;
        self.shrink_if_sparse();
        Some(value)
    }

    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len() {
            return Err(Error::OutOfBounds);
        }

        self.grow_if_full();

        // Shift elements starting from the index to the right
        self.buffer.insert(index, value);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.len() {
            return Err(Error::OutOfBounds);
        }

        let value = self.buffer.remove(index);
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Moves the first `at` elements into a freshly allocated chunk and
    /// compacts the remainder to the head of this one.
    pub fn split_front(&mut self, at: usize) -> Self {
        assert!(at <= self.len(), "cannot split a chunk of {} at {at}", self.len());

        let mut front = Self::with_capacity(at);
        front.buffer.extend(self.buffer.drain(..at));
        self.shrink_if_sparse();
        front
    }

    /// Moves every element of `other` after the elements of `self`,
    /// refitting the capacity to the combined length.
    pub fn append(&mut self, other: &mut Self) {
        let fitted = fitted_capacity(self.len() + other.len());
        if fitted != self.capacity {
            self.relocate(fitted);
        }

        self.buffer.append(&mut other.buffer);
        other.shrink_if_sparse();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        if self.capacity > MIN_CHUNK_CAPACITY {
            self.relocate(MIN_CHUNK_CAPACITY);
        }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buffer.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buffer.get_mut(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }

    fn relocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len());

        let mut buffer = Vec::with_capacity(new_capacity);
        buffer.append(&mut self.buffer);
        self.buffer = buffer;
        self.capacity = new_capacity;
    }

    fn grow_if_full(&mut self) {
        if self.is_full() {
            self.relocate(self.capacity << 1);
        }
    }

    fn shrink_if_sparse(&mut self) {
        if self.capacity > MIN_CHUNK_CAPACITY && (self.len() << 2) < self.capacity {
            self.relocate(self.capacity >> 1);
        }
    }
}

impl<T> Default for Chunk<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Chunk<T> {
    fn clone(&self) -> Self {
        let mut buffer = Vec::with_capacity(self.capacity);
        buffer.extend_from_slice(&self.buffer);
        Self {
            buffer,
            capacity: self.capacity,
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Chunk<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.buffer.iter()).finish()
    }
}

impl<T> IntoIterator for Chunk<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffer.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Chunk<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffer.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Chunk<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffer.iter_mut()
    }
}
