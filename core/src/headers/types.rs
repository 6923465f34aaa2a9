//! headers/types.rs
//! Header struct and byte-order detection.

use crate::constants::{ALIGNMENT, HEADER_LEN, MAGIC, RANGE_LEN, SWAPPED_MAGIC};
use crate::layout::ByteRange;
use crate::types::BfastError;
use crate::utils::is_aligned;

/// Byte order of a stream relative to a little-endian reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endianness {
    /// Multi-byte fields are little-endian; magic reads as `MAGIC`.
    #[default]
    Same,
    /// Multi-byte fields are byte-swapped (big-endian); magic reads as `SWAPPED_MAGIC`.
    Swapped,
}

impl Endianness {
    /// Resolve the byte order from the first word of a stream (read little-endian).
    pub fn from_magic(raw: u64) -> Result<Self, BfastError> {
        match raw {
            MAGIC => Ok(Endianness::Same),
            SWAPPED_MAGIC => Ok(Endianness::Swapped),
            _ => Err(BfastError::InvalidMagic { have: raw }),
        }
    }

    /// The magic word as a little-endian reader sees it for this byte order.
    pub const fn magic(self) -> u64 {
        match self {
            Endianness::Same => MAGIC,
            Endianness::Swapped => SWAPPED_MAGIC,
        }
    }
}

/// BFAST stream header. Fixed 32 bytes at offset 0.
///
/// `magic` holds the first word exactly as read little-endian from the wire, so
/// it also records the byte order of the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub magic: u64,       // MAGIC or SWAPPED_MAGIC
    pub data_start: u64,  // >= 32 + 16 * num_arrays, aligned, <= stream length
    pub data_end: u64,    // >= data_start, <= stream length
    pub num_arrays: u64,  // number of range records, name buffer included
}

impl Header {
    pub const LEN: usize = HEADER_LEN;

    /// Header describing `ranges`. An empty range list gets
    /// `data_start = data_end = 0`.
    pub fn for_ranges(ranges: &[ByteRange], endianness: Endianness) -> Self {
        let (data_start, data_end) = match (ranges.first(), ranges.last()) {
            (Some(first), Some(last)) => (first.begin, last.end),
            _ => (0, 0),
        };
        Self {
            magic: endianness.magic(),
            data_start,
            data_end,
            num_arrays: ranges.len() as u64,
        }
    }

    pub fn endianness(&self) -> Result<Endianness, BfastError> {
        Endianness::from_magic(self.magic)
    }

    /// End of the range table (`32 + 16 * num_arrays`), `None` on overflow.
    pub fn range_table_end(&self) -> Option<u64> {
        self.num_arrays
            .checked_mul(RANGE_LEN as u64)?
            .checked_add(HEADER_LEN as u64)
    }

    /// Validate header fields against a stream of `stream_len` bytes.
    ///
    /// Checks run in a fixed order and the first violation is returned:
    /// magic, name buffer presence, range table fit, data_start alignment and
    /// bound, data_end bounds.
    pub fn validate(&self, stream_len: usize) -> Result<(), BfastError> {
        // Magic
        self.endianness()?;

        // Buffer 0 is always the name buffer
        if self.num_arrays == 0 {
            return Err(BfastError::MissingNameBuffer);
        }

        // data_start
        match self.range_table_end() {
            Some(table_end) if table_end <= self.data_start => {}
            _ => {
                return Err(BfastError::RangeTableOverflow {
                    num_arrays: self.num_arrays,
                    data_start: self.data_start,
                })
            }
        }
        if !is_aligned(self.data_start) {
            return Err(BfastError::UnalignedDataStart {
                data_start: self.data_start,
                alignment: ALIGNMENT,
            });
        }
        if self.data_start > stream_len as u64 {
            return Err(BfastError::DataStartOutOfBounds {
                data_start: self.data_start,
                len: stream_len,
            });
        }

        // data_end
        if self.data_end < self.data_start {
            return Err(BfastError::DataEndBeforeStart {
                data_start: self.data_start,
                data_end: self.data_end,
            });
        }
        if self.data_end > stream_len as u64 {
            return Err(BfastError::DataEndOutOfBounds {
                data_end: self.data_end,
                len: stream_len,
            });
        }

        Ok(())
    }

    /// Produce a concise debug summary of the header
    pub fn summary(&self) -> String {
        format!(
            "Header {{ magic: 0x{:x}, data_start: {}, data_end: {}, num_arrays: {} }}",
            self.magic, self.data_start, self.data_end, self.num_arrays,
        )
    }
}
