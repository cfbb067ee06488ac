//! The indexable sequence contracts.
//!
//! [`IndexedSequence`] is everything [`SequenceSorter`](crate::SequenceSorter)
//! needs: a length plus positional read, write and swap. [`MutableSequence`] adds
//! the structural operations (push, insert, remove, clear) so that code can grow
//! and shrink a sequence without knowing whether it is an
//! [`InlineSeq`](crate::InlineSeq) or a plain `Vec`.

use core::mem;

use crate::error::{Result, SequenceError};

/// A fixed-length view over positionally addressable elements.
pub trait IndexedSequence {
    type Item;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a shared reference to the element at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Returns an exclusive reference to the element at `index`, or `None` if out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Exchanges the elements at `a` and `b`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    fn swap(&mut self, a: usize, b: usize);

    /// Overwrites the element at `index`, returning the previous value.
    ///
    /// # Errors
    /// [`SequenceError::IndexOutOfRange`] if `index >= len`; the sequence is not sparse.
    fn set(&mut self, index: usize, value: Self::Item) -> Result<Self::Item> {
        let len = self.len();
        match self.get_mut(index) {
            Some(slot) => Ok(mem::replace(slot, value)),
            None => Err(SequenceError::IndexOutOfRange { index, len }),
        }
    }
}

/// A growable ordered sequence.
pub trait MutableSequence: IndexedSequence {
    /// Appends an element at the end.
    fn push(&mut self, item: Self::Item);

    /// Inserts `item` at `index`, shifting every later element one position right.
    ///
    /// # Errors
    /// [`SequenceError::InsertOutOfRange`] if `index > len`.
    fn insert(&mut self, index: usize, item: Self::Item) -> Result<()>;

    /// Removes and returns the element at `index`, shifting every later element left.
    ///
    /// # Errors
    /// [`SequenceError::IndexOutOfRange`] if `index >= len`.
    fn remove_at(&mut self, index: usize) -> Result<Self::Item>;

    /// Removes every element.
    fn clear(&mut self);
}

impl<T> IndexedSequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

impl<T, const N: usize> IndexedSequence for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T> IndexedSequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T> MutableSequence for Vec<T> {
    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        let len = Vec::len(self);
        if index > len {
            return Err(SequenceError::InsertOutOfRange { index, len });
        }
        Vec::insert(self, index, item);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = Vec::len(self);
        if index >= len {
            return Err(SequenceError::IndexOutOfRange { index, len });
        }
        Ok(Vec::remove(self, index))
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}
