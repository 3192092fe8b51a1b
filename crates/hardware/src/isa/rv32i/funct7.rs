//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) separates operations that share a `funct3`.
//! Only bit 5 of the field (instruction bit 30) carries meaning in RV32I.

/// Default operation (ADD, SRL, SRLI).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB, SRA, SRAI).
pub const ALT: u32 = 0b0100000;

/// Bit within `funct7` that selects the alternate operation (instruction bit 30).
pub const ALT_BIT: u32 = 0b0100000;
