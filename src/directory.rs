use crate::chunk::Chunk;

/// The ordered sequence of chunks backing a deque.
///
/// Concatenating the chunks in directory order reproduces the deque, and the
/// directory always holds at least one chunk, even when every chunk is empty.
/// Balance is not enforced here, see the `rebalance` module.
pub struct Directory<T> {
    chunks: Vec<Chunk<T>>,
}

impl<T> Directory<T> {
    pub fn new() -> Self {
        Self {
            chunks: vec![Chunk::new()],
        }
    }

    /// Drops every chunk but the first one, which is emptied.
    pub fn reset(&mut self) {
        self.chunks.truncate(1);
        match self.chunks.first_mut() {
            Some(chunk) => chunk.clear(),
            None => self.chunks.push(Chunk::new()),
        }
    }

    pub fn insert_chunk_at(&mut self, index: usize, chunk: Chunk<T>) {
        if index > self.chunks.len() {
            panic!("Index out of bounds: cannot insert a chunk at index {index}");
        }

        self.chunks.insert(index, chunk);
    }

    pub fn push_chunk(&mut self, chunk: Chunk<T>) {
        self.chunks.push(chunk);
    }

    /// Removes the chunk at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds or if it names the only chunk left.
    pub fn remove_chunk_at(&mut self, index: usize) -> Chunk<T> {
        if index >= self.chunks.len() {
            panic!("Index out of bounds: cannot remove the chunk at index {index}");
        }

        if self.chunks.len() == 1 {
            panic!("Index out of bounds: cannot remove the only chunk at index {index}");
        }

        self.chunks.remove(index)
    }

    #[inline]
    pub fn chunk(&self, index: usize) -> Option<&Chunk<T>> {
        self.chunks.get(index)
    }

    #[inline]
    pub fn chunk_mut(&mut self, index: usize) -> Option<&mut Chunk<T>> {
        self.chunks.get_mut(index)
    }

    pub fn chunk_len(&self, index: usize) -> usize {
        self.chunks.get(index).map_or(0, Chunk::len)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Chunk<T>] {
        &self.chunks
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Chunk<T>] {
        &mut self.chunks
    }

    pub fn first(&self) -> &Chunk<T> {
        &self.chunks[0]
    }

    pub fn first_mut(&mut self) -> &mut Chunk<T> {
        &mut self.chunks[0]
    }

    pub fn last(&self) -> &Chunk<T> {
        &self.chunks[self.chunks.len() - 1]
    }

    pub fn last_mut(&mut self) -> &mut Chunk<T> {
        let index = self.chunks.len() - 1;
        &mut self.chunks[index]
    }

    pub fn into_chunks(self) -> Vec<Chunk<T>> {
        self.chunks
    }
}

impl<T> Default for Directory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Directory<T> {
    fn clone(&self) -> Self {
        Self {
            chunks: self.chunks.clone(),
        }
    }
}
