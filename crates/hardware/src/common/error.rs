//! Error definitions.
//!
//! Decode and execute are total over every instruction word and operand pair,
//! so nothing on that path is fallible. Errors only arise at the edges of the
//! core:
//! 1. **Configuration:** Malformed JSON or out-of-range parameters.
//! 2. **Register Access:** Indices beyond the configured register file depth.

use thiserror::Error;

/// Errors raised while configuring the core or accessing the register file.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested datapath width is not a power of two in `8..=64`.
    #[error("unsupported datapath width: {0} (expected a power of two in 8..=64)")]
    UnsupportedWidth(u32),

    /// The requested register file depth is zero or exceeds the 5-bit index space.
    #[error("invalid register count: {0} (expected 1..=32)")]
    InvalidRegisterCount(usize),

    /// A register index lies outside the register file.
    #[error("register x{index} out of range for a {count}-entry register file")]
    RegisterOutOfRange {
        /// The offending register index.
        index: usize,
        /// Number of registers in the file.
        count: usize,
    },

    /// Configuration JSON could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
