//! Bit-level helpers.
//!
//! Every component of the core works on fixed-width integers: instruction
//! fields are sliced out of a `u32`, and datapath values live in the low
//! `width` bits of a `u64`. These helpers keep the masking and sign-extension
//! rules in one place.

/// Returns a mask covering the low `width` bits.
///
/// `width` must be in `1..=64`.
///
/// # Examples
///
/// ```
/// use rv32i_core::common::bits::mask;
///
/// assert_eq!(mask(8), 0xFF);
/// assert_eq!(mask(32), 0xFFFF_FFFF);
/// assert_eq!(mask(64), u64::MAX);
/// ```
#[inline(always)]
pub const fn mask(width: u32) -> u64 {
    if width >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Sign-extends the low `bits` bits of `value` to a 64-bit signed integer.
///
/// Bits above `bits` are ignored. `bits` must be in `1..=64`.
///
/// # Examples
///
/// ```
/// use rv32i_core::common::bits::sign_extend;
///
/// assert_eq!(sign_extend(0xFFF, 12), -1);
/// assert_eq!(sign_extend(0x7FF, 12), 2047);
/// assert_eq!(sign_extend(0x1_0000_0080, 8), -128);
/// ```
#[inline(always)]
pub const fn sign_extend(value: u64, bits: u32) -> i64 {
    let shift = u64::BITS - bits;
    ((value << shift) as i64) >> shift
}
