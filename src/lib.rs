//! # Inline Sequences
//!
//! Ordered sequences that keep their first `N` elements inline and spill the rest
//! into a heap overflow store, plus a sorter that quicksorts and binary searches
//! any indexable sequence in place.
//!
//! ## Key Features
//!
//! * **Inline First:** [`InlineSeq`] stores positions `0..N` in a fixed inline region
//!   and allocates its overflow store only when the sequence grows past `N`.
//! * **Stable Boundary:** insertions and removals shift elements across the
//!   inline/overflow boundary, so the first `N` elements never leave the inline region.
//! * **Pluggable Equality and Ordering:** searching uses an [`EqualityComparer`],
//!   sorting uses a [`Comparer`]; both default to the element's own traits.
//! * **Storage-Agnostic Sorting:** [`SequenceSorter`] works through
//!   [`IndexedSequence`], implemented for `InlineSeq`, `Vec`, arrays and slices.
//! * **Compile-Time Safety:** constructors reject inline regions larger than 16 KiB.
//!
//! ## Examples
//!
//! ### InlineSeq
//!
//! ```rust
//! use inline_sequences::InlineSeq;
//!
//! // Capacity 3. No allocation yet.
//! let mut seq: InlineSeq<i32, 3> = InlineSeq::new();
//! seq.push(10);
//! seq.push(20);
//! seq.push(30);
//! assert!(seq.is_inline());
//!
//! // The 4th element goes to the overflow store.
//! seq.push(40);
//! assert!(!seq.is_inline());
//!
//! seq.insert(1, 15).unwrap();
//! assert_eq!(seq, [10, 15, 20, 30, 40]);
//! ```
//!
//! ### SequenceSorter
//!
//! ```rust
//! use inline_sequences::{InlineSeq, SequenceSorter};
//!
//! let mut seq: InlineSeq<i32, 3> = InlineSeq::from([15, 20, 30, 40]);
//! let sorter = SequenceSorter::new();
//!
//! sorter.sort_descending(&mut seq);
//! assert_eq!(seq, [40, 30, 20, 15]);
//!
//! sorter.sort(&mut seq);
//! assert_eq!(sorter.binary_search(&seq, &20), Ok(1));
//! assert_eq!(sorter.binary_search_complement(&seq, &25), !2);
//! ```

// --- Module Declarations ---

pub mod comparer;
pub mod error;
pub mod inline_seq;
pub mod sequence;
pub mod sorter;

// --- Re-exports ---

pub use comparer::{
    Comparer, DefaultComparer, DefaultEquality, EqualityComparer, FnComparer, FnEquality,
};
pub use error::{Result, SequenceError};
pub use inline_seq::InlineSeq;
pub use sequence::{IndexedSequence, MutableSequence};
pub use sorter::SequenceSorter;
