//! RV32I instruction decode and execution core.
//!
//! This crate turns a raw 32-bit RV32I instruction word into everything a
//! single-issue datapath needs to execute it:
//! 1. **Immediate Extraction:** The I/S/B/U/J immediate, sign-extended to 32 bits.
//! 2. **Control Decode:** ALU operation, comparison, operand sources, write-back,
//!    branch intent, and load/store width.
//! 3. **Execution:** The integer ALU with its zero flag, plus the branch comparator.
//! 4. **Datapath:** A reference consumer that reads registers, selects operands,
//!    executes, and commits results through an explicit register-file commit step.
//!
//! All decode and execute functions are total and pure; only configuration and
//! register access are fallible.
//!
//! ```
//! use rv32i_core::{decode, execute, extract_immediate};
//!
//! // addi x1, x0, -1
//! let inst = 0xFFF0_0093;
//! let ctrl = decode(inst);
//! let imm = extract_immediate(inst);
//! let (out, zflag) = execute(0, imm as u32, ctrl.alu);
//! assert_eq!(out, 0xFFFF_FFFF);
//! assert!(!zflag);
//! ```

/// Common types (bit helpers, errors).
pub mod common;
/// Core configuration (datapath width, register file shape, tracing).
pub mod config;
/// Decode/execute core (control, execution units, register file, datapath).
pub mod core;
/// Instruction set (opcodes, formats, field extraction, immediates).
pub mod isa;

/// Crate error type and result alias.
pub use crate::common::{Error, Result};
/// Root configuration type; use `CoreConfig::default()` or `CoreConfig::from_json`.
pub use crate::config::CoreConfig;
/// Instruction word to control signals.
pub use crate::core::control::decode;
/// 32-bit ALU evaluation returning `(out, zflag)`.
pub use crate::core::units::alu::execute;
/// Instruction word to sign-extended immediate.
pub use crate::isa::decode::extract_immediate;
