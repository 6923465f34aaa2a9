//! layout/types.rs
//! Byte ranges and the frozen layout plan.

use std::ops::Range;

use crate::constants::RANGE_LEN;
use crate::headers::{Endianness, Header};
use crate::layout::plan::{compute_data_start, compute_offsets};
use crate::telemetry::LayoutStats;
use crate::types::BfastError;

/// Location of one buffer within the stream: `[begin, end)` in bytes from offset 0.
///
/// Serialized as two `u64` words (16 bytes) in the range table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByteRange {
    pub begin: u64,
    pub end: u64,
}

impl ByteRange {
    pub const LEN: usize = RANGE_LEN;

    #[inline(always)]
    pub const fn new(begin: u64, end: u64) -> Self {
        Self { begin, end }
    }

    /// Length in bytes; zero for an inverted range.
    #[inline(always)]
    pub const fn len(&self) -> u64 {
        self.end.saturating_sub(self.begin)
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.begin
    }

    /// Index range for slicing. Callers must have validated the range against
    /// the slice length.
    #[inline(always)]
    pub fn as_index_range(&self) -> Range<usize> {
        self.begin as usize..self.end as usize
    }
}

/// Offsets for an ordered list of buffer sizes, computed once and never mutated.
///
/// Building a plan is the sequential step of encoding; every offset depends on
/// all preceding sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    data_start: u64,
    ranges: Vec<ByteRange>,
    needed_size: u64,
}

impl LayoutPlan {
    pub fn new(sizes: &[u64]) -> Result<Self, BfastError> {
        let data_start = compute_data_start(sizes.len());
        let ranges = compute_offsets(sizes)?;
        let needed_size = ranges.last().map_or(data_start, |r| r.end);
        Ok(Self { data_start, ranges, needed_size })
    }

    /// Aligned position of the first buffer (also the end of the preamble).
    #[inline]
    pub fn data_start(&self) -> u64 {
        self.data_start
    }

    #[inline]
    pub fn ranges(&self) -> &[ByteRange] {
        &self.ranges
    }

    /// Total bytes the encoded stream occupies.
    #[inline]
    pub fn needed_size(&self) -> u64 {
        self.needed_size
    }

    pub fn header(&self, endianness: Endianness) -> Header {
        Header::for_ranges(&self.ranges, endianness)
    }

    pub fn stats(&self) -> LayoutStats {
        LayoutStats::from_ranges(&self.ranges, self.data_start, self.needed_size)
    }
}
