//! Equality and ordering strategies.
//!
//! [`InlineSeq`](crate::InlineSeq) searches with an [`EqualityComparer`] and
//! [`SequenceSorter`](crate::SequenceSorter) orders with a [`Comparer`]. Both
//! default to the element's own `PartialEq` / `Ord`, and both can be swapped for
//! a closure through [`FnEquality`] / [`FnComparer`].

use core::cmp::Ordering;

/// Decides whether two elements are the same for `contains`, `index_of` and `remove`.
pub trait EqualityComparer<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> bool;
}

/// Total order used by the sorter and by binary search.
pub trait Comparer<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Equality through `T: PartialEq`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DefaultEquality;

impl<T: PartialEq + ?Sized> EqualityComparer<T> for DefaultEquality {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Ordering through `T: Ord`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DefaultComparer;

impl<T: Ord + ?Sized> Comparer<T> for DefaultComparer {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Equality defined by a closure.
///
/// ```rust
/// use inline_sequences::{FnEquality, InlineSeq};
///
/// let ci = FnEquality(|a: &&str, b: &&str| a.eq_ignore_ascii_case(b));
/// let mut names: InlineSeq<&str, 4, _> = InlineSeq::with_comparer(ci);
/// names.push("Alice");
/// assert!(names.contains(&"ALICE"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnEquality<F>(pub F);

impl<T: ?Sized, F> EqualityComparer<T> for FnEquality<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

/// Ordering defined by a closure.
#[derive(Clone, Copy, Debug)]
pub struct FnComparer<F>(pub F);

impl<T: ?Sized, F> Comparer<T> for FnComparer<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}
