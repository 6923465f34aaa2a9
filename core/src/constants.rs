
/// Magic number identifying a BFAST stream written in the reader's byte order.
/// Read as a little-endian `u64` from bytes `0..8`.
pub const MAGIC: u64 = 0xBFA5;

/// The magic number as it reads when the writer used the opposite byte order.
/// Every other multi-byte field must then be byte-swapped before use.
pub const SWAPPED_MAGIC: u64 = MAGIC.swap_bytes(); // 0xA5BF << 48

/// Alignment (in bytes) of the data section and of every occupied buffer.
/// Fits 512-bit SIMD registers. Fixed per format version, never inferred from input.
pub const ALIGNMENT: u64 = 64;

/// Fixed header size: magic, data_start, data_end, num_arrays.
pub const HEADER_LEN: usize = 32;

/// One range record: begin, end.
pub const RANGE_LEN: usize = 16;

/// Byte offset of the range table (directly after the header).
pub const RANGE_TABLE_OFFSET: usize = HEADER_LEN;

/// Index of the reserved name buffer.
pub const NAME_BUFFER_INDEX: usize = 0;

/// Separator (and terminator) between names in the name buffer.
pub const NAME_SEPARATOR: u8 = 0x00;

/// Payload size below which buffer copies always run on the calling thread.
pub const DEFAULT_MIN_PARALLEL_BYTES: usize = 1024 * 1024; // 1 MiB

/// Upper bound on copy workers picked by `ParallelismProfile::dynamic`.
pub const MAX_COPY_WORKERS: usize = 16;
