//! telemetry/stats.rs
//! Where the bytes of a container go.

use serde::{Deserialize, Serialize};

use crate::constants::NAME_BUFFER_INDEX;
use crate::layout::ByteRange;

/// Immutable breakdown of a container's bytes.
///
/// `bytes_preamble + bytes_names + bytes_payload + bytes_padding == bytes_total`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Range records, name buffer included.
    pub num_arrays: u64,
    /// Header + range table + alignment padding before the data section.
    pub bytes_preamble: u64,
    /// Length of the name buffer.
    pub bytes_names: u64,
    /// Sum of all data buffer lengths.
    pub bytes_payload: u64,
    /// Zero bytes between buffers.
    pub bytes_padding: u64,
    pub bytes_total: u64,
}

impl LayoutStats {
    /// Account for `ranges` laid out after a preamble of `data_start` bytes in a
    /// stream of `total` bytes. Range 0 counts as the name buffer.
    pub fn from_ranges(ranges: &[ByteRange], data_start: u64, total: u64) -> Self {
        let bytes_names = ranges.get(NAME_BUFFER_INDEX).map_or(0, ByteRange::len);
        let bytes_payload: u64 = ranges.iter().skip(NAME_BUFFER_INDEX + 1).map(ByteRange::len).sum();
        let bytes_padding = total
            .saturating_sub(data_start)
            .saturating_sub(bytes_names + bytes_payload);

        Self {
            num_arrays: ranges.len() as u64,
            bytes_preamble: data_start,
            bytes_names,
            bytes_payload,
            bytes_padding,
            bytes_total: total,
        }
    }

    /// Fraction of the stream that is not payload (0.0 for an empty stream).
    pub fn overhead_ratio(&self) -> f64 {
        if self.bytes_total == 0 {
            return 0.0;
        }
        self.bytes_total.saturating_sub(self.bytes_payload) as f64 / self.bytes_total as f64
    }

    /// Produce a concise debug summary of the stats
    pub fn summary(&self) -> String {
        format!(
            "LayoutStats {{ arrays: {}, preamble: {}, names: {}, payload: {}, padding: {}, total: {} }}",
            self.num_arrays,
            self.bytes_preamble,
            self.bytes_names,
            self.bytes_payload,
            self.bytes_padding,
            self.bytes_total,
        )
    }
}
