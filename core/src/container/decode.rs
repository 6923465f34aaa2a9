//! container/decode.rs
//!
//! Container decoding and validation.
//!
//! Design notes:
//! - Fail fast: the first violated check is returned, nothing is decoded
//!   leniently and nothing is truncated silently.
//! - Check order: size, magic, header fields, range bounds, range order,
//!   range anchoring, names.
//! - Buffers are slices of the input. `unpack_owned` keeps that property for
//!   owned input by slicing a `Bytes`.

use bytes::Bytes;
use tracing::{debug, warn};

use crate::container::types::{BfastContainer, NamedBuffer, NamedBufferView, UnpackConfig};
use crate::headers::{decode_header, decode_ranges, Header};
use crate::layout::{verify_alignment, ByteRange};
use crate::types::BfastError;

impl<'a> BfastContainer<'a> {
    /// Parse and validate `bytes` with default settings.
    pub fn parse(bytes: &'a [u8]) -> Result<Self, BfastError> {
        Self::parse_with(bytes, &UnpackConfig::default())
    }

    /// Parse and validate header and ranges, then slice out every buffer.
    ///
    /// Names are not decoded here; see `names()` / `named_buffers()`.
    pub fn parse_with(bytes: &'a [u8], config: &UnpackConfig) -> Result<Self, BfastError> {
        Self::parse_inner(bytes, config).inspect_err(|e| {
            warn!(error = %e, len = bytes.len(), "rejected bfast stream");
        })
    }

    fn parse_inner(bytes: &'a [u8], config: &UnpackConfig) -> Result<Self, BfastError> {
        let header = decode_header(bytes)?;
        header.validate(bytes.len())?;
        let endianness = header.endianness()?;

        let ranges = decode_ranges(bytes, &header)?;
        validate_ranges(&ranges, &header)?;
        if config.strict_alignment {
            verify_alignment(&ranges)?;
        }

        debug!(
            num_arrays = header.num_arrays,
            data_start = header.data_start,
            data_end = header.data_end,
            endianness = ?endianness,
            "parsed bfast header"
        );

        // Every range is inside [data_start, data_end] <= bytes.len()
        let buffers = ranges.iter().map(|r| &bytes[r.as_index_range()]).collect();

        Ok(Self { header, endianness, ranges, buffers })
    }
}

/// Check every range against the data section and its predecessor.
///
/// Per range, in order: containment in `[data_start, data_end]`,
/// `begin <= end`, no overlap with the previous range. Then the first range
/// must begin at `data_start` and the last must end at `data_end`.
pub fn validate_ranges(ranges: &[ByteRange], header: &Header) -> Result<(), BfastError> {
    let (data_start, data_end) = (header.data_start, header.data_end);
    let mut prev_end: Option<u64> = None;

    for (index, r) in ranges.iter().enumerate() {
        if r.begin < data_start || r.begin > data_end || r.end < data_start || r.end > data_end {
            return Err(BfastError::RangeOutOfBounds {
                index,
                begin: r.begin,
                end: r.end,
                data_start,
                data_end,
            });
        }
        if r.begin > r.end {
            return Err(BfastError::InvertedRange { index, begin: r.begin, end: r.end });
        }
        if let Some(prev_end) = prev_end {
            if r.begin < prev_end {
                return Err(BfastError::OverlappingRange { index, begin: r.begin, prev_end });
            }
        }
        prev_end = Some(r.end);
    }

    if let (Some(first), Some(last)) = (ranges.first(), ranges.last()) {
        if first.begin != data_start {
            return Err(BfastError::RangeNotAnchored { index: 0, offset: first.begin, expected: data_start });
        }
        if last.end != data_end {
            return Err(BfastError::RangeNotAnchored {
                index: ranges.len() - 1,
                offset: last.end,
                expected: data_end,
            });
        }
    }

    Ok(())
}

/// Decode a BFAST stream into named buffer views (zero-copy).
pub fn unpack(bytes: &[u8]) -> Result<Vec<NamedBufferView<'_>>, BfastError> {
    unpack_with(bytes, &UnpackConfig::default())
}

pub fn unpack_with<'a>(
    bytes: &'a [u8],
    config: &UnpackConfig,
) -> Result<Vec<NamedBufferView<'a>>, BfastError> {
    BfastContainer::parse_with(bytes, config)?.named_buffers()
}

/// Decode a BFAST stream the caller hands over. Each buffer shares the input
/// allocation through `Bytes::slice`; only the names are copied.
pub fn unpack_owned(bytes: Bytes) -> Result<Vec<NamedBuffer>, BfastError> {
    let container = BfastContainer::parse(&bytes)?;
    let names = container.names()?;

    Ok(names
        .into_iter()
        .zip(container.ranges().iter().skip(1))
        .map(|(name, r)| NamedBuffer {
            name: name.to_owned(),
            data: bytes.slice(r.as_index_range()),
        })
        .collect())
}
