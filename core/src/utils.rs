use crate::constants::ALIGNMENT;

/// Returns true if `n` is a multiple of [`ALIGNMENT`].
#[inline(always)]
pub const fn is_aligned(n: u64) -> bool {
    n % ALIGNMENT == 0
}

/// Rounds `n` up to the next multiple of [`ALIGNMENT`] (identity when already aligned).
#[inline(always)]
pub const fn align_up(n: u64) -> u64 {
    // ALIGNMENT is a power of two
    (n + ALIGNMENT - 1) & !(ALIGNMENT - 1)
}

/// [`align_up`] that returns `None` instead of overflowing.
#[inline(always)]
pub const fn checked_align_up(n: u64) -> Option<u64> {
    match n.checked_add(ALIGNMENT - 1) {
        Some(v) => Some(v & !(ALIGNMENT - 1)),
        None => None,
    }
}

/// Number of zero bytes needed after `n` to reach alignment.
#[inline(always)]
pub const fn padding_for(n: u64) -> u64 {
    align_up(n) - n
}

/// Render a magic word for diagnostics: numeric value plus the wire bytes.
pub fn fmt_magic(raw: u64) -> String {
    format!("0x{:016x} (wire bytes {})", raw, hex::encode(raw.to_le_bytes()))
}
