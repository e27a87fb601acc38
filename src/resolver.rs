//! Mapping between logical indexes and `(chunk, offset)` pairs.
//!
//! Both lookups scan the directory from whichever end is nearer to the
//! requested index, so with `O(√n)` chunks a lookup costs `O(√n)`.

use crate::directory::Directory;
use crate::error::{Error, Result};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchTarget {
    pub chunk_index: usize,
    pub target_index: usize,
}

impl<T> Directory<T> {
    /// Locates the element at `index`, which must name an existing element
    /// of a deque holding `len` elements.
    pub fn find_at(&self, len: usize, index: usize) -> Result<SearchTarget> {
        if index >= len {
            return Err(Error::OutOfBounds);
        }

        let chunks = self.as_slice();

        if index <= len / 2 {
            let mut remaining = index;
            for (chunk_index, chunk) in chunks.iter().enumerate() {
                if remaining < chunk.len() {
                    return Ok(SearchTarget {
                        chunk_index,
                        target_index: remaining,
                    });
                }

                remaining -= chunk.len();
            }

            return Err(Error::OutOfBounds);
        }

        // Distance from the end, counted so that the last element is 1.
        let mut remaining = len - index;
        for (chunk_index, chunk) in chunks.iter().enumerate().rev() {
            if remaining <= chunk.len() {
                return Ok(SearchTarget {
                    chunk_index,
                    target_index: chunk.len() - remaining,
                });
            }

            remaining -= chunk.len();
        }

        Err(Error::OutOfBounds)
    }

    /// Locates the insertion point for `index`, accepting `index == len`.
    ///
    /// A position on the boundary of two chunks resolves to the end of the
    /// earlier chunk, except at index 0 which always resolves to the first one.
    pub fn find_at_allow_end(&self, len: usize, index: usize) -> Result<SearchTarget> {
        if index > len {
            return Err(Error::OutOfBounds);
        }

        let chunks = self.as_slice();

        if index <= len / 2 {
            let mut remaining = index;
            for (chunk_index, chunk) in chunks.iter().enumerate() {
                if remaining <= chunk.len() {
                    return Ok(SearchTarget {
                        chunk_index,
                        target_index: remaining,
                    });
                }

                remaining -= chunk.len();
            }

            return Err(Error::OutOfBounds);
        }

        let mut remaining = len - index;
        for (chunk_index, chunk) in chunks.iter().enumerate().rev() {
            if chunk_index == 0 || remaining < chunk.len() {
                let target_index = chunk
                    .len()
                    .checked_sub(remaining)
                    .ok_or(Error::OutOfBounds)?;

                return Ok(SearchTarget {
                    chunk_index,
                    target_index,
                });
            }

            remaining -= chunk.len();
        }

        Err(Error::OutOfBounds)
    }

    /// Inverse of the lookups: the logical index of `target`.
    #[cfg(test)]
    pub fn logical_index(&self, target: SearchTarget) -> usize {
        self.as_slice()[..target.chunk_index]
            .iter()
            .map(|chunk| chunk.len())
            .sum::<usize>()
            + target.target_index
    }
}

#[cfg(test)]
mod tests {
    use crate::chunk::Chunk;
    use crate::directory::Directory;
    use crate::error::Error;
    use crate::resolver::SearchTarget;

    /// Builds a directory with the given chunk lengths, numbering elements
    /// in logical order.
    fn directory_of(lens: &[usize]) -> (Directory<usize>, usize) {
        let mut directory = Directory::new();
        let mut next = 0;
        for &len in lens {
            let mut chunk = Chunk::new();
            for _ in 0..len {
                chunk.push_back(next);
                next += 1;
            }
            directory.push_chunk(chunk);
        }

        directory.remove_chunk_at(0);
        (directory, next)
    }

    fn element_at(directory: &Directory<usize>, target: SearchTarget) -> usize {
        *directory
            .chunk(target.chunk_index)
            .and_then(|chunk| chunk.get(target.target_index))
            .unwrap()
    }

    #[test]
    fn find_at_resolves_every_element_from_both_ends() {
        for lens in [
            &[5][..],
            &[3, 4, 5],
            &[1, 1, 1, 1],
            &[0, 3, 0, 4, 0],
            &[7, 0, 0, 2],
            &[2, 9],
        ] {
            let (sut, len) = directory_of(lens);
            for index in 0..len {
                let target = sut.find_at(len, index).unwrap();
                assert_eq!(element_at(&sut, target), index, "{lens:?} at {index}");
                assert_eq!(sut.logical_index(target), index);
            }

            assert_eq!(sut.find_at(len, len), Err(Error::OutOfBounds));
        }
    }

    #[test]
    fn find_at_rejects_any_index_on_an_empty_directory() {
        let sut: Directory<usize> = Directory::new();
        assert_eq!(sut.find_at(0, 0), Err(Error::OutOfBounds));
    }

    #[test]
    fn find_at_allow_end_resolves_insertion_points() {
        for lens in [
            &[5][..],
            &[3, 4, 5],
            &[1, 1, 1, 1],
            &[0, 3, 0, 4, 0],
            &[4, 0, 0],
            &[2, 9],
        ] {
            let (sut, len) = directory_of(lens);
            for index in 0..=len {
                let target = sut.find_at_allow_end(len, index).unwrap();
                let chunk = sut.chunk(target.chunk_index).unwrap();
                assert!(target.target_index <= chunk.len(), "{lens:?} at {index}");
                assert_eq!(sut.logical_index(target), index, "{lens:?} at {index}");
            }

            assert_eq!(sut.find_at_allow_end(len, len + 1), Err(Error::OutOfBounds));
        }
    }

    #[test]
    fn find_at_allow_end_boundaries() {
        let (sut, len) = directory_of(&[3, 4, 5]);
        assert_eq!(len, 12);

        assert_eq!(
            sut.find_at_allow_end(len, 0),
            Ok(SearchTarget {
                chunk_index: 0,
                target_index: 0
            })
        );
        assert_eq!(
            sut.find_at_allow_end(len, 3),
            Ok(SearchTarget {
                chunk_index: 0,
                target_index: 3
            })
        );
        assert_eq!(
            sut.find_at_allow_end(len, 6),
            Ok(SearchTarget {
                chunk_index: 1,
                target_index: 3
            })
        );
        assert_eq!(
            sut.find_at_allow_end(len, 7),
            Ok(SearchTarget {
                chunk_index: 1,
                target_index: 4
            })
        );
        assert_eq!(
            sut.find_at_allow_end(len, 12),
            Ok(SearchTarget {
                chunk_index: 2,
                target_index: 5
            })
        );
    }

    #[test]
    fn find_at_allow_end_on_an_empty_directory_targets_the_first_chunk() {
        let sut: Directory<usize> = Directory::new();
        assert_eq!(sut.find_at_allow_end(0, 0), Ok(SearchTarget::default()));
    }
}
