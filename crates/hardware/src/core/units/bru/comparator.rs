//! Integer comparator.
//!
//! Operands are interpreted at the datapath width: the signed comparisons
//! treat bit `width - 1` as the sign, the unsigned ones compare magnitudes.

use crate::common::Result;
use crate::common::bits::{mask, sign_extend};
use crate::config::validate_width;
use crate::core::control::signals::CmpType;

/// Comparator bound to a datapath width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Comparator {
    width: u32,
}

impl Comparator {
    /// The 32-bit RV32I comparator.
    pub const RV32: Self = Self { width: 32 };

    /// Creates a comparator for the given datapath width.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedWidth`](crate::common::Error::UnsupportedWidth)
    /// unless `width` is a power of two in `8..=64`.
    pub fn new(width: u32) -> Result<Self> {
        validate_width(width)?;
        Ok(Self { width })
    }

    /// Datapath width in bits.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Evaluates `cmp` over `a` and `b`.
    ///
    /// Bits above the datapath width are ignored.
    pub const fn compare(&self, cmp: CmpType, a: u64, b: u64) -> bool {
        let m = mask(self.width);
        let (a, b) = (a & m, b & m);
        let (sa, sb) = (sign_extend(a, self.width), sign_extend(b, self.width));

        match cmp {
            CmpType::Equal => a == b,
            CmpType::NotEqual => a != b,
            CmpType::LessThan => sa < sb,
            CmpType::GreaterEqual => sa >= sb,
            CmpType::LessThanU => a < b,
            CmpType::GreaterEqualU => a >= b,
        }
    }
}

/// Evaluates `cmp` on the 32-bit datapath.
///
/// # Examples
///
/// ```
/// use rv32i_core::core::units::bru::compare;
/// use rv32i_core::core::control::signals::CmpType;
///
/// assert!(compare(CmpType::LessThan, 0xFFFF_FFFF, 0));
/// assert!(!compare(CmpType::LessThanU, 0xFFFF_FFFF, 0));
/// ```
pub const fn compare(cmp: CmpType, a: u32, b: u32) -> bool {
    Comparator::RV32.compare(cmp, a as u64, b as u64)
}
