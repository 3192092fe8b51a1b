//! Decode/execute core.
//!
//! This module contains the control decoder, the execution units, the register
//! file the datapath reads from, and the single-instruction datapath that ties
//! them together.

/// Architectural state (register file).
pub mod arch;

/// Control decoder and control signal definitions.
pub mod control;

/// Single-instruction datapath (operand selection, execute, write-back).
pub mod datapath;

/// Execution units (ALU, branch comparator).
pub mod units;

pub use self::datapath::{Datapath, Evaluation};
