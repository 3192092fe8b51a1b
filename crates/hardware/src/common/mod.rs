//! Common utilities and types shared across the core.
//!
//! 1. **Bit Manipulation:** Width masks and sign extension for arbitrary field widths.
//! 2. **Error Handling:** The crate error type for configuration and register access.

/// Width masks and sign extension helpers.
pub mod bits;

/// Error types for the fallible edges of the core.
pub mod error;

pub use error::{Error, Result};
