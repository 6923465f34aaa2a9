//! container/encode.rs
//!
//! Container encoding.
//!
//! Design notes:
//! - Buffer list is `[name buffer] ++ data buffers`, in input order.
//! - Layout is planned first (sequential), then the preamble is written, then
//!   the buffer copies run as independent jobs over disjoint windows.
//! - Every byte not covered by a buffer is zero.
//!
//! Layout:
//!
//! ```text
//! [ magic (8) ][ data_start (8) ][ data_end (8) ][ num_arrays (8) ]
//! [ begin (8) end (8) ] * num_arrays
//! [ zero padding to 64 ]
//! [ names ][ pad ][ buffer 1 ][ pad ] ... [ buffer N ]
//! ```

use std::iter;

use tracing::debug;

use crate::container::types::{NamedBytes, PackConfig};
use crate::headers::write_preamble;
use crate::layout::LayoutPlan;
use crate::names::encode_names;
use crate::parallelism::copy_buffers;
use crate::types::BfastError;

/// Plan the layout for `buffers` plus their name buffer, without building it.
pub fn plan_layout<T: NamedBytes>(buffers: &[T]) -> Result<LayoutPlan, BfastError> {
    let names_len = buffers
        .iter()
        .fold(0u64, |acc, b| acc.saturating_add(b.name().len() as u64 + 1));
    let sizes: Vec<u64> = iter::once(names_len)
        .chain(buffers.iter().map(|b| b.bytes().len() as u64))
        .collect();
    LayoutPlan::new(&sizes)
}

/// Encode named buffers into a new BFAST stream with default settings.
pub fn pack<T: NamedBytes>(buffers: &[T]) -> Vec<u8> {
    pack_with(buffers, &PackConfig::default())
}

/// Encode named buffers into a new BFAST stream.
///
/// # Panics
/// With a capacity overflow when the stream would not fit in `u64::MAX` bytes,
/// as any allocation of that size does. `pack_into` returns that case as
/// `LayoutOverflow` instead.
pub fn pack_with<T: NamedBytes>(buffers: &[T], config: &PackConfig) -> Vec<u8> {
    let plan = match plan_layout(buffers) {
        Ok(plan) => plan,
        Err(e) => panic!("capacity overflow: {e}"),
    };
    let mut out = vec![0u8; plan.needed_size() as usize];
    write_container(buffers, &plan, config, &mut out);
    out
}

/// Encode named buffers into caller-provided storage, e.g. a memory map sized
/// with `compute_needed_size`.
///
/// Returns the number of bytes written. Bytes of `dst` past that are untouched.
pub fn pack_into<T: NamedBytes>(
    buffers: &[T],
    dst: &mut [u8],
    config: &PackConfig,
) -> Result<usize, BfastError> {
    let plan = plan_layout(buffers)?;
    let need = usize::try_from(plan.needed_size()).unwrap_or(usize::MAX);
    if dst.len() < need {
        return Err(BfastError::DestinationTooSmall { have: dst.len(), need });
    }
    write_container(buffers, &plan, config, &mut dst[..need]);
    Ok(need)
}

/// Precondition: `out.len() == plan.needed_size()` and `plan` was built from `buffers`.
fn write_container<T: NamedBytes>(
    buffers: &[T],
    plan: &LayoutPlan,
    config: &PackConfig,
    out: &mut [u8],
) {
    debug!(
        buffers = buffers.len(),
        bytes = out.len(),
        endianness = ?config.endianness,
        "packing bfast container"
    );

    let names = encode_names(buffers.iter().map(NamedBytes::name));
    let sources: Vec<&[u8]> = iter::once(names.as_slice())
        .chain(buffers.iter().map(NamedBytes::bytes))
        .collect();
    let ranges = plan.ranges();
    debug_assert_eq!(ranges.len(), sources.len());

    let header = plan.header(config.endianness);
    let mut pos = write_preamble(&header, config.endianness, ranges, out);

    // Zero the gaps between buffers; `out` may be reused storage
    for r in ranges {
        let begin = r.begin as usize;
        out[pos..begin].fill(0);
        pos = r.end as usize;
    }

    copy_buffers(out, ranges, &sources, &config.parallelism);
}
