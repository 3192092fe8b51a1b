//! Major opcodes (instruction bits 6-0) of the RV32I base set.
//!
//! Only the nine opcodes the decode core classifies are listed; `MISC-MEM`
//! and `SYSTEM` fall through to the no-op bundle.

/// `LOAD`: `lb`, `lh`, `lw`, `lbu`, `lhu`.
pub const OP_LOAD: u32 = 0b0000011;

/// `OP-IMM`: register-immediate arithmetic and shifts.
pub const OP_IMM: u32 = 0b0010011;

/// `AUIPC`: PC plus upper immediate.
pub const OP_AUIPC: u32 = 0b0010111;

/// `STORE`: `sb`, `sh`, `sw`.
pub const OP_STORE: u32 = 0b0100011;

/// `OP`: register-register arithmetic and shifts.
pub const OP_REG: u32 = 0b0110011;

/// `LUI`: upper immediate.
pub const OP_LUI: u32 = 0b0110111;

/// `BRANCH`: conditional branches.
pub const OP_BRANCH: u32 = 0b1100011;

/// `JALR`: indirect jump and link.
pub const OP_JALR: u32 = 0b1100111;

/// `JAL`: direct jump and link.
pub const OP_JAL: u32 = 0b1101111;
