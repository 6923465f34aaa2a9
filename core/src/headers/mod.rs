//! headers/mod.rs
//! Fixed 32-byte header and 16-byte range records.
//!
//! Wire notes:
//! - Four `u64` words: magic, data_start, data_end, num_arrays.
//! - Range table of `num_arrays` records (begin, end) starts at byte 32.
//! - Same-endian streams are little-endian. A stream written in the opposite
//!   order is recognised by its byte-swapped magic; all other words are then
//!   read byte-swapped.
//! - Never cast structs onto the byte stream; every word goes through `byteorder`.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
