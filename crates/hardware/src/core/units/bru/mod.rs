//! Branch Resolution Unit (BRU).
//!
//! Evaluates the comparison selected by the control decoder. Conditional
//! branches use the outcome to decide whether the PC logic takes the target;
//! the set-less-than instructions write it back as a 0/1 result.

/// Six-way integer comparator.
pub mod comparator;

pub use self::comparator::{Comparator, compare};
