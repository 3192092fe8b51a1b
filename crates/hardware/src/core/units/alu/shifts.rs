//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL), and
//! shift-right arithmetic (SRA).
//!
//! The shift amount is the low `log2(width)` bits of the second operand:
//! 5 bits (0-31) on the 32-bit datapath, 6 bits (0-63) on a 64-bit one.

use crate::common::bits::{mask, sign_extend};
use crate::core::control::signals::AluOp;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op`    - The ALU operation to perform (must be a shift variant).
/// * `a`     - The value to be shifted, already truncated to `width`.
/// * `b`     - The shift amount (low `log2(width)` bits used).
/// * `width` - Datapath width in bits; a power of two.
///
/// The result may carry bits above `width`; the caller truncates.
/// Returns `0` for non-shift opcodes.
pub const fn execute(op: AluOp, a: u64, b: u64, width: u32) -> u64 {
    let shamt = (b & (width as u64 - 1)) as u32;
    match op {
        AluOp::Sll => a << shamt,
        AluOp::Srl => a >> shamt,
        AluOp::Sra => (sign_extend(a, width) >> shamt) as u64 & mask(width),
        _ => 0,
    }
}
