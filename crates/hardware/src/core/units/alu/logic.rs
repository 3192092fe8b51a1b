//! Bitwise and set-less-than operations.
//!
//! Implements bitwise OR, AND, XOR, and set-less-than (signed and unsigned).
//! The comparisons interpret both operands at the datapath width: `Slt`
//! treats bit `width - 1` as the sign, `Sltu` compares the raw magnitudes.
//! The result of a comparison is always 0 or 1.

use crate::common::bits::sign_extend;
use crate::core::control::signals::AluOp;

/// Evaluates a bitwise or set-less-than operation at `width` bits.
///
/// # Arguments
///
/// * `op`    - The ALU operation to perform (must be a logic/comparison variant).
/// * `a`     - First operand, already truncated to `width`.
/// * `b`     - Second operand, already truncated to `width`.
/// * `width` - Datapath width in bits.
///
/// Returns `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: u64, b: u64, width: u32) -> u64 {
    match op {
        AluOp::Or => a | b,
        AluOp::And => a & b,
        AluOp::Xor => a ^ b,
        AluOp::Slt => (sign_extend(a, width) < sign_extend(b, width)) as u64,
        AluOp::Sltu => (a < b) as u64,
        _ => 0,
    }
}
