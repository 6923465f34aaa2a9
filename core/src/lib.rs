//! bfast-core
//!
//! BFAST (Binary Format for Array Streaming and Transmission) container engine.
//! Named binary buffers packed into one stream with O(1) access to any buffer,
//! explicit endianness detection and 64-byte aligned buffers.
//! No I/O, no compression.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Wire format
pub mod layout;
pub mod headers;
pub mod names;
pub mod container;

pub mod parallelism;
pub mod telemetry;

pub use container::{pack, pack_into, pack_with, unpack, unpack_owned, unpack_with};
pub use layout::{compute_needed_size, compute_offsets};
pub use types::{BfastError, ErrorKind};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::container::{
        pack, pack_into, pack_with, plan_layout, unpack, unpack_owned, unpack_with,
        BfastBuilder, BfastContainer, NamedBuffer, NamedBufferView, NamedBytes, PackConfig,
        UnpackConfig,
    };
    pub use crate::headers::{Endianness, Header};
    pub use crate::layout::{compute_data_start, compute_needed_size, compute_offsets, ByteRange, LayoutPlan};
    pub use crate::parallelism::ParallelismProfile;
    pub use crate::telemetry::LayoutStats;
    pub use crate::types::{BfastError, ErrorKind};
}
