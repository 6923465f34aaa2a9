//! layout/plan.rs
//!
//! Offset computation.
//!
//! Design notes:
//! - The range table starts right after the 32-byte header; the data section
//!   starts at the next multiple of `ALIGNMENT` after the table.
//! - Each buffer begins where the previous one ended, rounded up to alignment.
//! - Empty buffers occupy no space: `begin == end`, and the next buffer starts
//!   at the same (already aligned) position.

use tracing::trace;

use crate::constants::{ALIGNMENT, HEADER_LEN, RANGE_LEN};
use crate::layout::types::ByteRange;
use crate::types::BfastError;
use crate::utils::{align_up, checked_align_up, is_aligned};

/// Where the first buffer starts for a stream holding `num_arrays` buffers.
#[inline]
pub fn compute_data_start(num_arrays: usize) -> u64 {
    align_up(HEADER_LEN as u64 + RANGE_LEN as u64 * num_arrays as u64)
}

/// One range per size, in order.
///
/// Fails with `LayoutOverflow` when a size pushes an offset past `u64::MAX`.
pub fn compute_offsets(sizes: &[u64]) -> Result<Vec<ByteRange>, BfastError> {
    let mut pos = compute_data_start(sizes.len());
    let mut ranges = Vec::with_capacity(sizes.len());

    for (index, &size) in sizes.iter().enumerate() {
        debug_assert!(is_aligned(pos));
        let overflow = || BfastError::LayoutOverflow { index, size };
        let end = pos.checked_add(size).ok_or_else(overflow)?;
        let range = ByteRange::new(pos, end);
        trace!(index, begin = range.begin, end = range.end, "planned buffer range");
        ranges.push(range);
        pos = checked_align_up(end).ok_or_else(overflow)?;
    }

    Ok(ranges)
}

/// Bytes needed to hold the encoded stream: end of the last buffer, or the
/// aligned preamble when there are no buffers.
pub fn compute_needed_size(sizes: &[u64]) -> Result<u64, BfastError> {
    Ok(match compute_offsets(sizes)?.last() {
        Some(last) => last.end,
        None => compute_data_start(0),
    })
}

/// Check that every occupied buffer begins on an aligned offset.
///
/// Empty ranges are exempt.
pub fn verify_alignment(ranges: &[ByteRange]) -> Result<(), BfastError> {
    for (index, r) in ranges.iter().enumerate() {
        if !r.is_empty() && !is_aligned(r.begin) {
            return Err(BfastError::UnalignedBuffer {
                index,
                begin: r.begin,
                alignment: ALIGNMENT,
            });
        }
    }
    Ok(())
}
