//! Control unit.
//!
//! Converts raw instruction words into the control bundle that drives the
//! execution unit, register write-back, memory unit, and branch logic.

/// Instruction-to-control-signal decoder.
pub mod decoder;

/// Control signal bundle and operation selector types.
pub mod signals;

pub use decoder::decode;
pub use signals::ControlSignals;
