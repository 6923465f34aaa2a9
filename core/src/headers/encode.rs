//! headers/encode.rs
//!
//! Header and range table encoding.
//!
//! Design notes:
//! - The magic word is always written little-endian as stored in `Header::magic`;
//!   the remaining words follow the byte order that magic announces.
//! - The preamble is header + range table + zero padding up to the aligned
//!   data section.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::constants::{HEADER_LEN, RANGE_TABLE_OFFSET};
use crate::headers::types::{Endianness, Header};
use crate::layout::{compute_data_start, ByteRange};
use crate::types::BfastError;

/// Serialize a header into its fixed 32-byte wire form.
///
/// # Returns
/// - `Ok([u8; HEADER_LEN])` containing the encoded header bytes.
/// - `Err(BfastError::InvalidMagic)` if `h.magic` is neither recognised value.
pub fn encode_header(h: &Header) -> Result<[u8; HEADER_LEN], BfastError> {
    let mut out = [0u8; HEADER_LEN];
    match h.endianness()? {
        Endianness::Same => put_header::<LittleEndian>(h, &mut out),
        Endianness::Swapped => put_header::<BigEndian>(h, &mut out),
    }
    Ok(out)
}

fn put_header<B: ByteOrder>(h: &Header, out: &mut [u8]) {
    LittleEndian::write_u64(&mut out[0..8], h.magic); // 0..8   magic (as read)
    B::write_u64(&mut out[8..16], h.data_start);      // 8..16  data_start
    B::write_u64(&mut out[16..24], h.data_end);       // 16..24 data_end
    B::write_u64(&mut out[24..32], h.num_arrays);     // 24..32 num_arrays
}

/// Write `ranges` as consecutive (begin, end) records into `out`.
///
/// `out` must hold at least `16 * ranges.len()` bytes.
pub fn encode_ranges(
    ranges: &[ByteRange],
    endianness: Endianness,
    out: &mut [u8],
) -> Result<(), BfastError> {
    let need = ByteRange::LEN * ranges.len();
    if out.len() < need {
        return Err(BfastError::DestinationTooSmall { have: out.len(), need });
    }
    match endianness {
        Endianness::Same => put_ranges::<LittleEndian>(ranges, out),
        Endianness::Swapped => put_ranges::<BigEndian>(ranges, out),
    }
    Ok(())
}

fn put_ranges<B: ByteOrder>(ranges: &[ByteRange], out: &mut [u8]) {
    for (record, r) in out.chunks_exact_mut(ByteRange::LEN).zip(ranges) {
        B::write_u64(&mut record[0..8], r.begin);
        B::write_u64(&mut record[8..16], r.end);
    }
}

/// Write header, range table and zero padding into the front of `out`.
///
/// Returns the number of preamble bytes written, which is the aligned position
/// where the first buffer begins.
pub fn encode_preamble(
    header: &Header,
    ranges: &[ByteRange],
    out: &mut [u8],
) -> Result<usize, BfastError> {
    let endianness = header.endianness()?;
    let preamble_len = compute_data_start(ranges.len()) as usize;
    if out.len() < preamble_len {
        return Err(BfastError::DestinationTooSmall { have: out.len(), need: preamble_len });
    }
    Ok(write_preamble(header, endianness, ranges, out))
}

/// Preamble writer behind `encode_preamble` and the container encoder.
///
/// Precondition: `out` holds at least `compute_data_start(ranges.len())` bytes
/// and `endianness` matches `header.magic`.
pub(crate) fn write_preamble(
    header: &Header,
    endianness: Endianness,
    ranges: &[ByteRange],
    out: &mut [u8],
) -> usize {
    let preamble_len = compute_data_start(ranges.len()) as usize;
    let table_end = RANGE_TABLE_OFFSET + ByteRange::LEN * ranges.len();

    let header_out = &mut out[..HEADER_LEN];
    match endianness {
        Endianness::Same => put_header::<LittleEndian>(header, header_out),
        Endianness::Swapped => put_header::<BigEndian>(header, header_out),
    }

    let table = &mut out[RANGE_TABLE_OFFSET..table_end];
    match endianness {
        Endianness::Same => put_ranges::<LittleEndian>(ranges, table),
        Endianness::Swapped => put_ranges::<BigEndian>(ranges, table),
    }

    // Padding must be zero even when `out` is reused storage
    out[table_end..preamble_len].fill(0);

    preamble_len
}
