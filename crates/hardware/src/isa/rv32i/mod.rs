//! RV32I encoding tables.
//!
//! Plain `u32` constants compared against the fields sliced out by
//! [`InstructionBits`](crate::isa::instruction::InstructionBits).

/// Minor opcodes, grouped by major opcode.
pub mod funct3;

/// `funct7` values for the register and shift-immediate forms.
pub mod funct7;

/// Major opcodes.
pub mod opcodes;
