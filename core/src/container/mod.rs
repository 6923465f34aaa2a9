//! BFAST container: named buffers in, one aligned byte stream out, and back.
//!
//! Responsibilities:
//! - Assemble header + range table + padded buffers (`pack*`)
//! - Parse and validate a stream back into zero-copy buffer views (`unpack*`)
//! - Pair buffers with the names stored in buffer 0
//!
//! Non-responsibilities:
//! - Files, streams, memory maps (callers size storage with `compute_needed_size`)
//! - Compression
//! - Metadata conventions layered on top of the buffers

pub mod types;
pub mod encode;
pub mod decode;
pub mod builder;

pub use types::{
    BfastContainer,
    NamedBuffer,
    NamedBufferView,
    NamedBytes,
    PackConfig,
    UnpackConfig,
};
pub use encode::{
    pack,
    pack_with,
    pack_into,
    plan_layout,
};
pub use decode::{
    unpack,
    unpack_with,
    unpack_owned,
    validate_ranges,
};
pub use builder::BfastBuilder;
