//! Layout planning: where each buffer lives in a BFAST stream.
//!
//! Responsibilities:
//! - Compute the aligned start of the data section
//! - Compute one `[begin, end)` range per buffer, each occupied start aligned
//! - Compute the total stream size for pre-sizing storage
//!
//! Non-responsibilities:
//! - Writing bytes
//! - Names
//! - Parallelism

pub mod types;
pub mod plan;

pub use types::{ByteRange, LayoutPlan};
pub use plan::{
    compute_data_start,
    compute_offsets,
    compute_needed_size,
    verify_alignment,
};
