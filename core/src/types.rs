//! Unified error type for layout, encode and decode.
//!
//! Every check of the decoder fails fast with a variant carrying the offending
//! offsets/values. `BfastError::kind()` groups variants into the five error kinds
//! callers usually branch on.

use thiserror::Error;

use crate::utils::fmt_magic;

/// Coarse classification of a [`BfastError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Not a BFAST stream (magic mismatch) or undecodable content.
    Format,
    /// Input shorter than what the header/ranges/declared data require.
    Size,
    /// A range violates ordering, overlap or containment in `[data_start, data_end]`.
    Range,
    /// Recovered name count does not match the buffer count.
    NameCount,
    /// An offset that must be a multiple of the alignment is not.
    Alignment,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BfastError {
    #[error("buffer too short: {have} < {need}")]
    BufferTooShort { have: usize, need: usize },

    #[error("invalid magic: {}, not a BFAST stream", fmt_magic(*have))]
    InvalidMagic { have: u64 },

    #[error("num_arrays is zero: the name buffer is missing")]
    MissingNameBuffer,

    #[error("range table for {num_arrays} arrays does not fit before data_start {data_start}")]
    RangeTableOverflow { num_arrays: u64, data_start: u64 },

    #[error("data_start {data_start} is not a multiple of {alignment}")]
    UnalignedDataStart { data_start: u64, alignment: u64 },

    #[error("data_start {data_start} exceeds stream length {len}")]
    DataStartOutOfBounds { data_start: u64, len: usize },

    #[error("data_end {data_end} is before data_start {data_start}")]
    DataEndBeforeStart { data_start: u64, data_end: u64 },

    #[error("data_end {data_end} exceeds stream length {len}")]
    DataEndOutOfBounds { data_end: u64, len: usize },

    #[error("range {index} [{begin}, {end}) is outside data section [{data_start}, {data_end})")]
    RangeOutOfBounds {
        index: usize,
        begin: u64,
        end: u64,
        data_start: u64,
        data_end: u64,
    },

    #[error("range {index} ends before it begins: [{begin}, {end})")]
    InvertedRange { index: usize, begin: u64, end: u64 },

    #[error("range {index} begins at {begin}, before the previous range ends at {prev_end}")]
    OverlappingRange { index: usize, begin: u64, prev_end: u64 },

    #[error("range {index} is not anchored to the data section: {offset} != {expected}")]
    RangeNotAnchored { index: usize, offset: u64, expected: u64 },

    #[error("buffer {index} begins at {begin}, not a multiple of {alignment}")]
    UnalignedBuffer { index: usize, begin: u64, alignment: u64 },

    #[error("name count mismatch: {names} names for {buffers} data buffers")]
    NameCountMismatch { names: usize, buffers: usize },

    #[error("name {index} is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidName { index: usize, valid_up_to: usize },

    #[error("destination too small: {have} < {need}")]
    DestinationTooSmall { have: usize, need: usize },

    #[error("buffer {index} of {size} bytes pushes the layout past u64::MAX")]
    LayoutOverflow { index: usize, size: u64 },
}

impl BfastError {
    pub fn kind(&self) -> ErrorKind {
        use BfastError::*;
        match self {
            InvalidMagic { .. } | InvalidName { .. } => ErrorKind::Format,

            BufferTooShort { .. }
            | RangeTableOverflow { .. }
            | DataStartOutOfBounds { .. }
            | DataEndOutOfBounds { .. }
            | DestinationTooSmall { .. }
            | LayoutOverflow { .. } => ErrorKind::Size,

            DataEndBeforeStart { .. }
            | RangeOutOfBounds { .. }
            | InvertedRange { .. }
            | OverlappingRange { .. }
            | RangeNotAnchored { .. } => ErrorKind::Range,

            MissingNameBuffer | NameCountMismatch { .. } => ErrorKind::NameCount,

            UnalignedDataStart { .. } | UnalignedBuffer { .. } => ErrorKind::Alignment,
        }
    }
}
