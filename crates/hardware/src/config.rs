//! Configuration for the decode/execute core.
//!
//! This module defines the parameters that shape the core. It provides:
//! 1. **Defaults:** The RV32I baseline (32-bit datapath, 32 registers, `x0` hardwired).
//! 2. **Structure:** A flat [`CoreConfig`] deserializable from JSON.
//! 3. **Validation:** Range checks applied on load so downstream constructors
//!    never see an impossible width or register count.
//!
//! Use `CoreConfig::default()` for a standard RV32I core, or [`CoreConfig::from_json`]
//! to load overrides; every field is optional in the JSON form.

use serde::Deserialize;

use crate::common::{Error, Result};

/// Default configuration constants for the core.
mod defaults {
    /// Datapath width in bits (RV32).
    pub const XLEN: u32 = 32;

    /// Number of architectural integer registers (`x0`-`x31`).
    pub const REG_COUNT: usize = 32;

    /// Largest register file addressable through a 5-bit register field.
    pub const MAX_REG_COUNT: usize = 32;

    /// Narrowest supported datapath width in bits.
    pub const MIN_XLEN: u32 = 8;

    /// Widest supported datapath width in bits.
    pub const MAX_XLEN: u32 = 64;
}

/// Parameters for the execution unit, register file, and datapath.
///
/// # Examples
///
/// ```
/// use rv32i_core::config::CoreConfig;
///
/// let config = CoreConfig::from_json(r#"{ "xlen": 64, "trace_instructions": true }"#).unwrap();
/// assert_eq!(config.xlen, 64);
/// assert_eq!(config.reg_count, 32);
/// assert!(config.hardwire_x0);
/// assert!(config.trace_instructions);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    /// Datapath width in bits; must be a power of two in `8..=64`.
    #[serde(default = "CoreConfig::default_xlen")]
    pub xlen: u32,

    /// Number of registers in the register file (`1..=32`).
    #[serde(default = "CoreConfig::default_reg_count")]
    pub reg_count: usize,

    /// When set, register 0 always reads zero and ignores writes.
    #[serde(default = "CoreConfig::default_hardwire_x0")]
    pub hardwire_x0: bool,

    /// Emit a `trace` event for every evaluated instruction and register commit.
    #[serde(default)]
    pub trace_instructions: bool,
}

impl CoreConfig {
    fn default_xlen() -> u32 {
        defaults::XLEN
    }

    fn default_reg_count() -> usize {
        defaults::REG_COUNT
    }

    fn default_hardwire_x0() -> bool {
        true
    }

    /// Parses a configuration from JSON and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed JSON or unknown fields, and the
    /// errors of [`CoreConfig::validate`] for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every parameter is within its supported range.
    ///
    /// # Errors
    ///
    /// * [`Error::UnsupportedWidth`] if `xlen` is not a power of two in `8..=64`.
    /// * [`Error::InvalidRegisterCount`] if `reg_count` is zero or above 32.
    pub fn validate(&self) -> Result<()> {
        validate_width(self.xlen)?;
        if self.reg_count == 0 || self.reg_count > defaults::MAX_REG_COUNT {
            return Err(Error::InvalidRegisterCount(self.reg_count));
        }
        Ok(())
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            xlen: defaults::XLEN,
            reg_count: defaults::REG_COUNT,
            hardwire_x0: true,
            trace_instructions: false,
        }
    }
}

/// Checks a datapath width against the supported set.
pub(crate) fn validate_width(width: u32) -> Result<()> {
    if !(defaults::MIN_XLEN..=defaults::MAX_XLEN).contains(&width) || !width.is_power_of_two() {
        return Err(Error::UnsupportedWidth(width));
    }
    Ok(())
}
