//! Ordered sequence that keeps its first `N` elements inline and spills the rest
//! into a heap overflow store.
//!
//! Provides [`InlineSeq`]. Unlike a spill-everything small vector, the inline
//! region is never abandoned: logical positions `0..N` always live in a
//! `heapless::Vec<T, N>` and positions `N..len` live in a lazily allocated
//! `std::vec::Vec<T>`. Structural operations shift elements across the boundary
//! so both parts stay consistent.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::{Chain, FusedIterator};
use core::mem;
use core::ops::{Index, IndexMut};
use core::slice;

use heapless::Vec as HVec;
use tracing::trace;

use crate::comparer::{DefaultEquality, EqualityComparer};
use crate::error::{Result, SequenceError};
use crate::sequence::{IndexedSequence, MutableSequence};

/// Borrowing iterator over an [`InlineSeq`] in logical order.
pub type Iter<'a, T> = Chain<slice::Iter<'a, T>, slice::Iter<'a, T>>;

/// Mutable borrowing iterator over an [`InlineSeq`] in logical order.
pub type IterMut<'a, T> = Chain<slice::IterMut<'a, T>, slice::IterMut<'a, T>>;

/// A sequence that stores up to `N` elements inline and the remainder on the heap.
///
/// # Layout
/// * `inline` holds logical positions `0..min(len, N)`.
/// * `overflow` holds logical positions `N..len`; `overflow[i]` is element `i + N`.
///   It is allocated the first time the sequence grows past `N` and is then kept
///   (emptied, not freed) when the sequence shrinks, so later growth reuses it.
///   [`shrink_to_fit`](Self::shrink_to_fit) releases it explicitly.
/// * The overflow store is non-empty only while the inline region is full.
///
/// # Generic parameters
/// | Parameter | Meaning |
/// |-----------|--------|
/// | `T` | Element type |
/// | `N` | Inline capacity |
/// | `E` | Equality used by `contains`, `index_of` and `remove` |
///
/// # Example
/// ```rust
/// use inline_sequences::InlineSeq;
///
/// let mut seq: InlineSeq<i32, 3> = InlineSeq::new();
/// seq.extend([10, 20, 30, 40]);
/// assert!(!seq.is_inline());
///
/// seq.insert(1, 15).unwrap();
/// seq.remove_at(0).unwrap();
/// assert_eq!(seq.to_vec(), vec![15, 20, 30, 40]);
/// ```
#[derive(Clone)]
pub struct InlineSeq<T, const N: usize, E = DefaultEquality> {
    inline: HVec<T, N>,
    overflow: Option<Vec<T>>,
    comparer: E,
}

impl<T, const N: usize> InlineSeq<T, N> {
    /// Creates an empty sequence using `T: PartialEq` for element equality.
    pub fn new() -> Self {
        Self::with_comparer(DefaultEquality)
    }

    /// Creates a sequence holding clones of `items`, in order.
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        let mut seq = Self::new();
        seq.extend(items.iter().cloned());
        seq
    }
}

impl<T, const N: usize, E> InlineSeq<T, N, E> {
    pub const MAX_STACK_SIZE: usize = 16 * 1024;

    /// Creates an empty sequence that compares elements with `comparer`.
    pub fn with_comparer(comparer: E) -> Self {
        const {
            assert!(
                mem::size_of::<HVec<T, N>>() <= InlineSeq::<T, N, E>::MAX_STACK_SIZE,
                "InlineSeq is too large! Reduce N."
            );
        }
        Self {
            inline: HVec::new(),
            overflow: None,
            comparer,
        }
    }

    /// The equality comparer used for searching.
    pub fn comparer(&self) -> &E {
        &self.comparer
    }

    /// Number of elements the inline region holds before spilling.
    #[inline(always)]
    pub const fn inline_capacity(&self) -> usize {
        N
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.inline.len() + self.overflow_slice().len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if every element currently lives in the inline region.
    #[inline]
    pub fn is_inline(&self) -> bool {
        self.overflow_slice().is_empty()
    }

    /// Returns `true` once the overflow store has been allocated, even if it is empty.
    #[inline]
    pub fn has_overflow(&self) -> bool {
        self.overflow.is_some()
    }

    /// Returns a shared reference to the element at `index`.
    ///
    /// # Errors
    /// [`SequenceError::IndexOutOfRange`] if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        match self.slot(index) {
            Some(item) => Ok(item),
            None => Err(SequenceError::IndexOutOfRange {
                index,
                len: self.len(),
            }),
        }
    }

    /// Returns a mutable alias to the storage cell at `index`, inline or overflow.
    ///
    /// The borrow ends before any structural change (`insert`, `remove_at`,
    /// `clear`) can move the element to another cell.
    ///
    /// # Errors
    /// [`SequenceError::IndexOutOfRange`] if `index >= len`.
    #[inline]
    pub fn get_ref(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len();
        self.slot_mut(index)
            .ok_or(SequenceError::IndexOutOfRange { index, len })
    }

    /// Overwrites the element at `index`, returning the previous value.
    ///
    /// # Errors
    /// [`SequenceError::IndexOutOfRange`] if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.get_ref(index).map(|slot| mem::replace(slot, value))
    }

    pub fn first(&self) -> Option<&T> {
        self.iter().next()
    }

    pub fn last(&self) -> Option<&T> {
        self.overflow_slice().last().or_else(|| self.inline.last())
    }

    /// Appends `item` at logical position `len`.
    #[inline]
    pub fn push(&mut self, item: T) {
        if let Err(item) = self.inline.push(item) {
            self.overflow_mut().push(item);
        }
    }

    /// Inserts `item` at `index`, shifting every element at or after `index` one
    /// position to the right. `index == len` appends.
    ///
    /// When the inline region is full its last slot is first moved to the front of
    /// the overflow store, which frees a slot for the inline shift.
    ///
    /// # Errors
    /// [`SequenceError::InsertOutOfRange`] if `index > len`.
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(SequenceError::InsertOutOfRange { index, len });
        }
        if index >= N {
            self.overflow_mut().insert(index - N, item);
            return Ok(());
        }
        if self.inline.is_full() {
            if let Some(last) = self.inline.pop() {
                self.overflow_mut().insert(0, last);
            }
        }
        if self.inline.insert(index, item).is_err() {
            unreachable!("Logic Error: inline region must have a free slot after relocation");
        }
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting every later element one
    /// position to the left. The front of the overflow store is promoted into the
    /// last inline slot when the removal happens inside the inline region.
    ///
    /// # Errors
    /// [`SequenceError::IndexOutOfRange`] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = self.len();
        let out_of_range = SequenceError::IndexOutOfRange { index, len };
        if index >= len {
            return Err(out_of_range);
        }
        if index >= N {
            let overflow = self.overflow.as_mut().ok_or(out_of_range)?;
            return Ok(overflow.remove(index - N));
        }

        let removed = self.inline.remove(index);
        let promoted = match self.overflow.as_mut() {
            Some(overflow) if !overflow.is_empty() => Some(overflow.remove(0)),
            _ => None,
        };
        if let Some(front) = promoted {
            if self.inline.push(front).is_err() {
                unreachable!("Logic Error: removal must leave an inline slot for promotion");
            }
        }
        Ok(removed)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    /// [`SequenceError::Empty`] if the sequence has no elements.
    pub fn dequeue(&mut self) -> Result<T> {
        if let Some(item) = self.overflow.as_mut().and_then(Vec::pop) {
            return Ok(item);
        }
        self.inline.pop().ok_or(SequenceError::Empty)
    }

    /// Exchanges the elements at `a` and `b`.
    ///
    /// # Errors
    /// [`SequenceError::IndexOutOfRange`] if either index is `>= len`.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let len = self.len();
        if let Some(&index) = [a, b].iter().find(|&&i| i >= len) {
            return Err(SequenceError::IndexOutOfRange { index, len });
        }
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if hi < N {
            self.inline.swap(lo, hi);
        } else if let Some(overflow) = self.overflow.as_mut() {
            if lo < N {
                mem::swap(&mut self.inline[lo], &mut overflow[hi - N]);
            } else {
                overflow.swap(lo - N, hi - N);
            }
        }
        Ok(())
    }

    /// Removes every element. An allocated overflow store is emptied but kept.
    pub fn clear(&mut self) {
        self.inline.clear();
        if let Some(overflow) = self.overflow.as_mut() {
            overflow.clear();
        }
    }

    /// Releases the overflow store if it is empty, otherwise trims its spare capacity.
    pub fn shrink_to_fit(&mut self) {
        let Some(overflow) = self.overflow.as_mut() else {
            return;
        };
        if overflow.is_empty() {
            trace!(inline_capacity = N, "releasing empty overflow store");
            self.overflow = None;
        } else {
            overflow.shrink_to_fit();
        }
    }

    /// Iterates the elements in logical order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inline.iter().chain(self.overflow_slice())
    }

    /// Iterates the elements mutably in logical order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let overflow: &mut [T] = self.overflow.as_deref_mut().unwrap_or_default();
        self.inline.iter_mut().chain(overflow)
    }

    #[inline(always)]
    fn overflow_slice(&self) -> &[T] {
        self.overflow.as_deref().unwrap_or_default()
    }

    fn overflow_mut(&mut self) -> &mut Vec<T> {
        self.overflow.get_or_insert_with(|| {
            trace!(inline_capacity = N, "allocating overflow store");
            Vec::new()
        })
    }

    #[inline(always)]
    fn slot(&self, index: usize) -> Option<&T> {
        if index < N {
            self.inline.get(index)
        } else {
            self.overflow_slice().get(index - N)
        }
    }

    #[inline(always)]
    fn slot_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < N {
            self.inline.get_mut(index)
        } else {
            self.overflow.as_mut()?.get_mut(index - N)
        }
    }
}

impl<T, const N: usize, E: EqualityComparer<T>> InlineSeq<T, N, E> {
    /// Position of the first element equal to `item`, scanning inline slots first.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|x| self.comparer.equals(x, item))
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Removes the first element equal to `item`. Returns whether one was removed.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.index_of(item) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Appends `item` unless an equal element is already present.
    /// Returns whether it was added.
    pub fn push_if_absent(&mut self, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.push(item);
        true
    }
}

impl<T: Clone, const N: usize, E> InlineSeq<T, N, E> {
    /// Clones every element into `buffer[offset..offset + len]`.
    ///
    /// # Errors
    /// [`SequenceError::BufferTooSmall`] if `buffer` cannot hold `offset + len` elements.
    pub fn copy_to(&self, buffer: &mut [T], offset: usize) -> Result<()> {
        let required = offset.saturating_add(self.len());
        if required > buffer.len() {
            return Err(SequenceError::BufferTooSmall {
                required,
                available: buffer.len(),
            });
        }
        let (head, tail) = buffer[offset..required].split_at_mut(self.inline.len());
        head.clone_from_slice(&self.inline);
        tail.clone_from_slice(self.overflow_slice());
        Ok(())
    }

    /// Materializes the elements in logical order.
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(&self.inline);
        out.extend_from_slice(self.overflow_slice());
        out
    }

    /// Materializes the elements in reverse logical order.
    pub fn to_reverse_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        out.extend(self.iter().rev().cloned());
        out
    }
}

impl<T, const N: usize, E> IndexedSequence for InlineSeq<T, N, E> {
    type Item = T;

    fn len(&self) -> usize {
        InlineSeq::len(self)
    }
    fn get(&self, index: usize) -> Option<&T> {
        self.slot(index)
    }
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slot_mut(index)
    }
    fn swap(&mut self, a: usize, b: usize) {
        if let Err(err) = InlineSeq::swap(self, a, b) {
            panic!("{err}");
        }
    }
}

impl<T, const N: usize, E> MutableSequence for InlineSeq<T, N, E> {
    fn push(&mut self, item: T) {
        InlineSeq::push(self, item);
    }
    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        InlineSeq::insert(self, index, item)
    }
    fn remove_at(&mut self, index: usize) -> Result<T> {
        InlineSeq::remove_at(self, index)
    }
    fn clear(&mut self) {
        InlineSeq::clear(self);
    }
}

impl<T: fmt::Debug, const N: usize, E> fmt::Debug for InlineSeq<T, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, const N: usize, E: Default> Default for InlineSeq<T, N, E> {
    fn default() -> Self {
        Self::with_comparer(E::default())
    }
}

// Equality is element-wise; the capacity and the comparer do not take part.
impl<T: PartialEq, const N: usize, const M: usize, E, F> PartialEq<InlineSeq<T, M, F>>
    for InlineSeq<T, N, E>
{
    fn eq(&self, other: &InlineSeq<T, M, F>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const N: usize, E> Eq for InlineSeq<T, N, E> {}

impl<T: PartialEq, const N: usize, E> PartialEq<Vec<T>> for InlineSeq<T, N, E> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq, const N: usize, const M: usize, E> PartialEq<[T; M]> for InlineSeq<T, N, E> {
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == M && self.iter().eq(other.iter())
    }
}

impl<T: Hash, const N: usize, E> Hash for InlineSeq<T, N, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T, const N: usize, E> Index<usize> for InlineSeq<T, N, E> {
    type Output = T;
    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, const N: usize, E> IndexMut<usize> for InlineSeq<T, N, E> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_ref(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, const N: usize, E> Extend<T> for InlineSeq<T, N, E> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, const N: usize, E: Default> FromIterator<T> for InlineSeq<T, N, E> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::default();
        seq.extend(iter);
        seq
    }
}

impl<T, const N: usize> From<Vec<T>> for InlineSeq<T, N> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T, const N: usize, const M: usize> From<[T; M]> for InlineSeq<T, N> {
    fn from(items: [T; M]) -> Self {
        items.into_iter().collect()
    }
}

/// Owning iterator over an [`InlineSeq`] in logical order.
pub struct IntoIter<T, const N: usize> {
    iter: Chain<heapless::vec::IntoIter<T, N, usize>, std::vec::IntoIter<T>>,
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize, E> IntoIterator for InlineSeq<T, N, E> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            iter: self
                .inline
                .into_iter()
                .chain(self.overflow.unwrap_or_default()),
        }
    }
}

impl<'a, T, const N: usize, E> IntoIterator for &'a InlineSeq<T, N, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize, E> IntoIterator for &'a mut InlineSeq<T, N, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparer::FnEquality;

    fn filled<const N: usize>(items: &[i32]) -> InlineSeq<i32, N> {
        InlineSeq::from_slice(items)
    }

    #[test]
    fn test_inline_seq_push_spills_past_capacity() {
        let mut seq: InlineSeq<i32, 3> = InlineSeq::new();
        seq.push(10);
        seq.push(20);
        seq.push(30);
        assert!(seq.is_inline());
        assert!(!seq.has_overflow());

        seq.push(40);
        assert!(!seq.is_inline());
        assert!(seq.has_overflow());
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.to_vec(), vec![10, 20, 30, 40]);
        assert_eq!(seq[3], 40);
    }

    #[test]
    fn test_inline_seq_documented_scenario() {
        let mut seq: InlineSeq<i32, 3> = InlineSeq::new();
        seq.extend([10, 20, 30, 40]);
        assert_eq!(seq.len(), 4);

        seq.insert(1, 15).unwrap();
        assert_eq!(seq, [10, 15, 20, 30, 40]);

        seq.remove_at(0).unwrap();
        assert_eq!(seq, [15, 20, 30, 40]);
    }

    #[test]
    fn test_inline_seq_insert_relocates_last_inline_slot() {
        let mut seq = filled::<3>(&[1, 2, 3, 4, 5]);
        seq.insert(0, 0).unwrap();
        assert_eq!(seq, [0, 1, 2, 3, 4, 5]);
        assert_eq!(seq.overflow_slice(), &[3, 4, 5]);

        seq.insert(3, 99).unwrap();
        assert_eq!(seq, [0, 1, 2, 99, 3, 4, 5]);
        assert_eq!(seq.overflow_slice(), &[99, 3, 4, 5]);
    }

    #[test]
    fn test_inline_seq_insert_at_end_and_into_overflow() {
        let mut seq = filled::<2>(&[1, 2, 3]);
        seq.insert(3, 4).unwrap();
        seq.insert(2, 9).unwrap();
        assert_eq!(seq, [1, 2, 9, 3, 4]);

        let mut empty: InlineSeq<i32, 2> = InlineSeq::new();
        empty.insert(0, 7).unwrap();
        assert_eq!(empty, [7]);
    }

    #[test]
    fn test_inline_seq_insert_out_of_range() {
        let mut seq = filled::<2>(&[1, 2, 3]);
        assert_eq!(
            seq.insert(5, 0),
            Err(SequenceError::InsertOutOfRange { index: 5, len: 3 })
        );
        assert_eq!(seq, [1, 2, 3]);
    }

    #[test]
    fn test_inline_seq_remove_at_promotes_overflow_front() {
        let mut seq = filled::<3>(&[1, 2, 3, 4, 5]);
        assert_eq!(seq.remove_at(1), Ok(2));
        assert_eq!(seq, [1, 3, 4, 5]);
        assert_eq!(seq.inline.as_slice(), &[1, 3, 4]);
        assert_eq!(seq.overflow_slice(), &[5]);

        assert_eq!(seq.remove_at(3), Ok(5));
        assert!(seq.is_inline());
        assert!(seq.has_overflow());
        assert_eq!(
            seq.remove_at(3),
            Err(SequenceError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_inline_seq_get_set_and_get_ref() {
        let mut seq = filled::<2>(&[1, 2, 3, 4]);
        assert_eq!(seq.get(3), Ok(&4));
        assert_eq!(
            seq.get(4),
            Err(SequenceError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(seq.set(0, 10), Ok(1));
        assert_eq!(seq.set(3, 40), Ok(4));
        assert_eq!(
            seq.set(4, 0),
            Err(SequenceError::IndexOutOfRange { index: 4, len: 4 })
        );

        *seq.get_ref(2).unwrap() += 100;
        *seq.get_ref(1).unwrap() += 100;
        assert_eq!(seq, [10, 102, 103, 40]);
        assert!(seq.get_ref(9).is_err());
    }

    #[test]
    fn test_inline_seq_search_and_remove() {
        let mut seq = filled::<2>(&[5, 6, 7, 6]);
        assert!(seq.contains(&7));
        assert!(!seq.contains(&8));
        assert_eq!(seq.index_of(&6), Some(1));
        assert_eq!(seq.index_of(&7), Some(2));
        assert_eq!(seq.index_of(&8), None);

        assert!(seq.remove(&6));
        assert_eq!(seq, [5, 7, 6]);
        assert!(seq.remove(&6));
        assert!(!seq.remove(&6));
        assert_eq!(seq, [5, 7]);
    }

    #[test]
    fn test_inline_seq_push_if_absent() {
        let mut seq: InlineSeq<i32, 2> = InlineSeq::new();
        assert!(seq.push_if_absent(1));
        assert!(seq.push_if_absent(2));
        assert!(!seq.push_if_absent(1));
        assert!(seq.push_if_absent(3));
        assert!(!seq.push_if_absent(3));
        assert_eq!(seq, [1, 2, 3]);
    }

    #[test]
    fn test_inline_seq_custom_comparer() {
        let mod10 = FnEquality(|a: &i32, b: &i32| a % 10 == b % 10);
        let mut seq: InlineSeq<i32, 2, _> = InlineSeq::with_comparer(mod10);
        seq.extend([11, 22, 33]);
        assert!(seq.contains(&43));
        assert_eq!(seq.index_of(&2), Some(1));
        assert!(seq.remove(&3));
        assert_eq!(seq, [11, 22]);
    }

    #[test]
    fn test_inline_seq_dequeue() {
        let mut seq = filled::<2>(&[1, 2, 3]);
        assert_eq!(seq.dequeue(), Ok(3));
        assert_eq!(seq.dequeue(), Ok(2));
        assert_eq!(seq.dequeue(), Ok(1));
        assert_eq!(seq.dequeue(), Err(SequenceError::Empty));
    }

    #[test]
    fn test_inline_seq_clear_keeps_overflow_store() {
        let mut seq = filled::<2>(&[1, 2, 3, 4]);
        seq.clear();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert!(seq.has_overflow());

        seq.extend([5, 6, 7]);
        assert_eq!(seq, [5, 6, 7]);

        seq.clear();
        seq.shrink_to_fit();
        assert!(!seq.has_overflow());
    }

    #[test]
    fn test_inline_seq_copy_to() {
        let seq = filled::<2>(&[1, 2, 3]);
        let mut buffer = [0; 5];
        seq.copy_to(&mut buffer, 1).unwrap();
        assert_eq!(buffer, [0, 1, 2, 3, 0]);
        assert_eq!(
            seq.copy_to(&mut buffer, 3),
            Err(SequenceError::BufferTooSmall {
                required: 6,
                available: 5
            })
        );
    }

    #[test]
    fn test_inline_seq_to_vec_variants() {
        let seq = filled::<2>(&[1, 2, 3, 4]);
        assert_eq!(seq.to_reverse_vec(), vec![4, 3, 2, 1]);

        let empty: InlineSeq<i32, 2> = InlineSeq::new();
        let out = empty.to_vec();
        assert!(out.is_empty());
        assert_eq!(out.capacity(), 0);
    }

    #[test]
    fn test_inline_seq_swap_across_boundary() {
        let mut seq = filled::<2>(&[1, 2, 3, 4]);
        seq.swap(0, 3).unwrap();
        seq.swap(2, 1).unwrap();
        assert_eq!(seq, [4, 3, 2, 1]);
        assert_eq!(
            seq.swap(0, 4),
            Err(SequenceError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_inline_seq_clone_is_deep() {
        let original = filled::<2>(&[1, 2, 3, 4]);
        let mut copy = original.clone();
        copy[3] = 40;
        copy.push(5);
        assert_eq!(original, [1, 2, 3, 4]);
        assert_eq!(copy, [1, 2, 3, 40, 5]);
    }

    #[test]
    fn test_inline_seq_iterators() {
        let mut seq = filled::<2>(&[1, 2, 3]);
        for item in &mut seq {
            *item *= 10;
        }
        let collected: Vec<i32> = (&seq).into_iter().copied().collect();
        assert_eq!(collected, vec![10, 20, 30]);
        let owned: Vec<i32> = seq.into_iter().collect();
        assert_eq!(owned, vec![10, 20, 30]);
    }

    #[test]
    fn test_inline_seq_first_last() {
        let mut seq: InlineSeq<i32, 2> = InlineSeq::new();
        assert_eq!(seq.first(), None);
        assert_eq!(seq.last(), None);
        seq.extend([1, 2]);
        assert_eq!(seq.last(), Some(&2));
        seq.push(3);
        assert_eq!(seq.first(), Some(&1));
        assert_eq!(seq.last(), Some(&3));
    }

    #[test]
    fn test_inline_seq_equality_across_capacities() {
        let small = filled::<1>(&[1, 2, 3]);
        let large = filled::<8>(&[1, 2, 3]);
        assert_eq!(small, large);
        assert_eq!(small, vec![1, 2, 3]);
        assert_ne!(small, filled::<8>(&[1, 2]));
        assert_eq!(format!("{small:?}"), "[1, 2, 3]");
    }

    #[test]
    #[should_panic(expected = "index (is 3) should be < len (is 3)")]
    fn test_inline_seq_index_panic() {
        let seq = filled::<2>(&[1, 2, 3]);
        let _value = seq[3];
    }

    #[test]
    fn test_inline_seq_drop_behavior() {
        use std::cell::RefCell;
        use std::rc::Rc;
        let counter = Rc::new(RefCell::new(0));
        struct Dropper(Rc<RefCell<i32>>);
        impl Drop for Dropper {
            fn drop(&mut self) {
                *self.0.borrow_mut() += 1;
            }
        }
        {
            let mut seq: InlineSeq<Dropper, 2> = InlineSeq::new();
            for _ in 0..5 {
                seq.push(Dropper(counter.clone()));
            }
            drop(seq.remove_at(0));
            assert_eq!(*counter.borrow(), 1);
        }
        assert_eq!(*counter.borrow(), 5);
    }
}
