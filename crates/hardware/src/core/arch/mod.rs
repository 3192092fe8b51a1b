//! Architectural state.
//!
//! The only architectural state this core models is the integer register
//! file; everything else it evaluates is combinational.

/// General-Purpose Register file implementation.
pub mod gpr;

pub use gpr::Gpr;
