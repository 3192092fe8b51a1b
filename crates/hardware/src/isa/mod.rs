//! Instruction set layer.
//!
//! Everything needed to take a raw RV32I word apart: encoding tables, format
//! classes, field accessors, and immediate extraction. Nothing here knows about
//! control signals or execution.

/// Immediate extraction and the combined field decode.
pub mod decode;

/// Opcode to format class mapping.
pub mod format;

/// Field accessors and the `Decoded` record.
pub mod instruction;

/// RV32I encoding tables.
pub mod rv32i;
