//! Error type shared by [`InlineSeq`](crate::InlineSeq) and
//! [`SequenceSorter`](crate::SequenceSorter).

use thiserror::Error;

/// Precondition violations reported by the sequence and sorter operations.
///
/// Every check happens before the sequence is touched, so an `Err` always
/// leaves the sequence exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// Read, write or removal at a position that holds no element.
    #[error("index (is {index}) should be < len (is {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Insertion past the end of the sequence.
    #[error("insertion index (is {index}) should be <= len (is {len})")]
    InsertOutOfRange { index: usize, len: usize },

    /// Inclusive sort range that does not lie inside the sequence.
    #[error("range {left}..={right} is out of bounds for sequence of len {len}")]
    InvalidRange {
        left: usize,
        right: usize,
        len: usize,
    },

    /// Removal from an empty sequence.
    #[error("sequence is empty")]
    Empty,

    /// Destination buffer cannot hold the copied elements.
    #[error("destination buffer too small: need {required} slots, have {available}")]
    BufferTooSmall { required: usize, available: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, SequenceError>;
