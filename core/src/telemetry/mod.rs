//! telemetry/mod.rs
//! Byte accounting for planned and decoded containers.
//!
//! Notes:
//! - Snapshots are plain values computed from ranges; nothing is collected at
//!   runtime and nothing is shared between calls.
//! - `Serialize`/`Deserialize` so callers can ship them to their own metrics.

pub mod stats;

pub use stats::*;
