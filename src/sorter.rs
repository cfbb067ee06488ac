//! In-place quicksort, reverse and binary search over any [`IndexedSequence`].
//!
//! [`SequenceSorter`] never copies elements out of the sequence: partitioning
//! compares through shared references and moves elements with `swap` only, so it
//! works the same on an [`InlineSeq`](crate::InlineSeq), a `Vec`, an array or a
//! slice.

use core::cmp::Ordering;

use tracing::trace;

use crate::comparer::{Comparer, DefaultComparer};
use crate::error::{Result, SequenceError};
use crate::sequence::IndexedSequence;

/// Sorting and searching driven by a [`Comparer`].
///
/// The sorter holds no state besides its comparer; the sequence is always
/// borrowed mutably for the duration of a call and sorted in place.
///
/// ```rust
/// use inline_sequences::{InlineSeq, SequenceSorter};
///
/// let mut seq: InlineSeq<i32, 3> = InlineSeq::from([40, 15, 30, 20]);
/// let sorter = SequenceSorter::new();
///
/// sorter.sort(&mut seq);
/// assert_eq!(seq, [15, 20, 30, 40]);
/// assert_eq!(sorter.binary_search(&seq, &20), Ok(1));
/// assert_eq!(sorter.binary_search(&seq, &25), Err(2));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SequenceSorter<C = DefaultComparer> {
    comparer: C,
}

/// Which side of the pivot an element must fall on to move left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    #[inline(always)]
    fn moves_left(self, ord: Ordering) -> bool {
        match self {
            Direction::Ascending => ord == Ordering::Less,
            Direction::Descending => ord == Ordering::Greater,
        }
    }
}

impl SequenceSorter {
    /// A sorter using the element's own `Ord`.
    pub fn new() -> Self {
        Self {
            comparer: DefaultComparer,
        }
    }
}

impl<C> SequenceSorter<C> {
    pub fn with_comparer(comparer: C) -> Self {
        Self { comparer }
    }

    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    /// Reverses the sequence in place by swapping `i` with `len - 1 - i`.
    pub fn reverse<S>(&self, seq: &mut S)
    where
        S: IndexedSequence + ?Sized,
    {
        let len = seq.len();
        for i in 0..len / 2 {
            seq.swap(i, len - 1 - i);
        }
    }

    /// Sorts the whole sequence in ascending order. Not stable.
    pub fn sort<S>(&self, seq: &mut S)
    where
        S: IndexedSequence + ?Sized,
        C: Comparer<S::Item>,
    {
        let len = seq.len();
        trace!(len, "quicksort ascending");
        if len > 1 {
            self.quick_sort_range(seq, 0, len - 1, Direction::Ascending);
        }
    }

    /// Sorts the whole sequence in descending order. Not stable.
    pub fn sort_descending<S>(&self, seq: &mut S)
    where
        S: IndexedSequence + ?Sized,
        C: Comparer<S::Item>,
    {
        let len = seq.len();
        trace!(len, "quicksort descending");
        if len > 1 {
            self.quick_sort_range(seq, 0, len - 1, Direction::Descending);
        }
    }

    /// Sorts the inclusive range `left..=right` in ascending order.
    ///
    /// # Errors
    /// [`SequenceError::InvalidRange`] if `right >= len`; an empty range
    /// (`left >= right`) is a no-op.
    pub fn quick_sort<S>(&self, seq: &mut S, left: usize, right: usize) -> Result<()>
    where
        S: IndexedSequence + ?Sized,
        C: Comparer<S::Item>,
    {
        self.checked_range(seq, left, right)?;
        trace!(left, right, "quicksort ascending");
        self.quick_sort_range(seq, left, right, Direction::Ascending);
        Ok(())
    }

    /// Sorts the inclusive range `left..=right` in descending order.
    ///
    /// # Errors
    /// [`SequenceError::InvalidRange`] if `right >= len`; an empty range
    /// (`left >= right`) is a no-op.
    pub fn quick_sort_inverse<S>(&self, seq: &mut S, left: usize, right: usize) -> Result<()>
    where
        S: IndexedSequence + ?Sized,
        C: Comparer<S::Item>,
    {
        self.checked_range(seq, left, right)?;
        trace!(left, right, "quicksort descending");
        self.quick_sort_range(seq, left, right, Direction::Descending);
        Ok(())
    }

    /// Binary search over a sequence sorted ascending by this sorter's comparer.
    ///
    /// Returns `Ok(index)` of a matching element, or `Err(insertion_point)` where
    /// `value` could be inserted while keeping the order. On unsorted input the
    /// result is unspecified but deterministic.
    pub fn binary_search<S>(&self, seq: &S, value: &S::Item) -> core::result::Result<usize, usize>
    where
        S: IndexedSequence + ?Sized,
        C: Comparer<S::Item>,
    {
        let mut start = 0usize;
        let mut end = seq.len();
        while start < end {
            let mid = start + ((end - start) >> 1);
            let Some(probe) = seq.get(mid) else {
                unreachable!("Logic Error: probe index escaped the sequence bounds");
            };
            match self.comparer.compare(probe, value) {
                Ordering::Equal => return Ok(mid),
                Ordering::Less => start = mid + 1,
                Ordering::Greater => end = mid,
            }
        }
        Err(start)
    }

    /// [`binary_search`](Self::binary_search) with the signed encoding: a
    /// non-negative index on a match, otherwise the bitwise complement of the
    /// insertion point.
    pub fn binary_search_complement<S>(&self, seq: &S, value: &S::Item) -> isize
    where
        S: IndexedSequence + ?Sized,
        C: Comparer<S::Item>,
    {
        match self.binary_search(seq, value) {
            Ok(index) => index as isize,
            Err(insertion) => !(insertion as isize),
        }
    }

    fn checked_range<S>(&self, seq: &S, left: usize, right: usize) -> Result<()>
    where
        S: IndexedSequence + ?Sized,
    {
        let len = seq.len();
        if left >= right {
            return Ok(());
        }
        if right >= len {
            return Err(SequenceError::InvalidRange { left, right, len });
        }
        Ok(())
    }

    // Recurses into the smaller partition and loops on the larger one, so stack
    // depth stays logarithmic even on already-sorted input.
    fn quick_sort_range<S>(&self, seq: &mut S, mut left: usize, mut right: usize, dir: Direction)
    where
        S: IndexedSequence + ?Sized,
        C: Comparer<S::Item>,
    {
        while left < right {
            let pivot = self.partition(seq, left, right, dir);
            if pivot - left < right - pivot {
                if pivot > left {
                    self.quick_sort_range(seq, left, pivot - 1, dir);
                }
                left = pivot + 1;
            } else {
                self.quick_sort_range(seq, pivot + 1, right, dir);
                if pivot == left {
                    break;
                }
                right = pivot - 1;
            }
        }
    }

    /// Lomuto partition with `seq[right]` as pivot. Returns the pivot's final index.
    fn partition<S>(&self, seq: &mut S, left: usize, right: usize, dir: Direction) -> usize
    where
        S: IndexedSequence + ?Sized,
        C: Comparer<S::Item>,
    {
        let mut store = left;
        for j in left..right {
            if dir.moves_left(self.compare_at(seq, j, right)) {
                if store != j {
                    seq.swap(store, j);
                }
                store += 1;
            }
        }
        if store != right {
            seq.swap(store, right);
        }
        store
    }

    #[inline(always)]
    fn compare_at<S>(&self, seq: &S, i: usize, j: usize) -> Ordering
    where
        S: IndexedSequence + ?Sized,
        C: Comparer<S::Item>,
    {
        match (seq.get(i), seq.get(j)) {
            (Some(a), Some(b)) => self.comparer.compare(a, b),
            _ => unreachable!("Logic Error: partition index escaped the validated range"),
        }
    }
}
