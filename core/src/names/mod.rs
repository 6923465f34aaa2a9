//! Name buffer codec.
//!
//! Buffer 0 of every container holds the names of buffers 1..N as UTF-8 strings,
//! each followed by a single NUL byte. Names may be empty and need not be unique.
//! Names must not contain NUL; this is a caller precondition and is not
//! sanitized.

pub mod encode;
pub mod decode;

pub use encode::encode_names;
pub use decode::{decode_names, split_names};
