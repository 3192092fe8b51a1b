//! Execution units.
//!
//! The integer ALU and the branch resolution comparator. Both are pure
//! functions of their operands and hold no state between evaluations.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit (comparisons for branches and set-less-than).
pub mod bru;
