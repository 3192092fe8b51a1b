//! Add and subtract.
//!
//! Addition and subtraction wrap; the caller truncates the result to the
//! datapath width, which yields two's-complement wraparound at any width.

use crate::core::control::signals::AluOp;

/// Evaluates `Add` or `Sub` on the full 64-bit carrier.
///
/// Returns `0` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: u64, b: u64) -> u64 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}
