//! headers/decode.rs
//!
//! Header and range table decoding.
//!
//! Design notes:
//! - The magic word is resolved first; an unknown magic stops decoding before
//!   any other field is read.
//! - Decoding only parses. Bounds and ordering checks live in
//!   `Header::validate` and the container decoder.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::constants::{HEADER_LEN, RANGE_TABLE_OFFSET};
use crate::headers::types::{Endianness, Header};
use crate::layout::ByteRange;
use crate::types::BfastError;

/// Read the magic word and resolve the stream's byte order.
pub fn detect_endianness(buf: &[u8]) -> Result<Endianness, BfastError> {
    if buf.len() < 8 {
        return Err(BfastError::BufferTooShort { have: buf.len(), need: 8 });
    }
    Endianness::from_magic(LittleEndian::read_u64(&buf[0..8]))
}

/// Parse the 32-byte header at the start of `buf`.
///
/// Fails with `BufferTooShort` or `InvalidMagic`; field values are not validated.
pub fn decode_header(buf: &[u8]) -> Result<Header, BfastError> {
    if buf.len() < HEADER_LEN {
        return Err(BfastError::BufferTooShort { have: buf.len(), need: HEADER_LEN });
    }
    let magic = LittleEndian::read_u64(&buf[0..8]);
    let header = match Endianness::from_magic(magic)? {
        Endianness::Same => get_header::<LittleEndian>(magic, buf),
        Endianness::Swapped => get_header::<BigEndian>(magic, buf),
    };
    Ok(header)
}

fn get_header<B: ByteOrder>(magic: u64, buf: &[u8]) -> Header {
    Header {
        magic,
        data_start: B::read_u64(&buf[8..16]),
        data_end: B::read_u64(&buf[16..24]),
        num_arrays: B::read_u64(&buf[24..32]),
    }
}

/// Parse the `header.num_arrays` range records that follow the header.
pub fn decode_ranges(buf: &[u8], header: &Header) -> Result<Vec<ByteRange>, BfastError> {
    let table_end = header
        .range_table_end()
        .filter(|&end| end <= buf.len() as u64)
        .ok_or(BfastError::RangeTableOverflow {
            num_arrays: header.num_arrays,
            data_start: header.data_start,
        })? as usize;

    let table = &buf[RANGE_TABLE_OFFSET..table_end];
    let ranges = match header.endianness()? {
        Endianness::Same => get_ranges::<LittleEndian>(table),
        Endianness::Swapped => get_ranges::<BigEndian>(table),
    };
    Ok(ranges)
}

fn get_ranges<B: ByteOrder>(table: &[u8]) -> Vec<ByteRange> {
    table
        .chunks_exact(ByteRange::LEN)
        .map(|record| ByteRange::new(B::read_u64(&record[0..8]), B::read_u64(&record[8..16])))
        .collect()
}
