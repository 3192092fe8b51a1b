//! General-Purpose Register File.
//!
//! This module implements the integer register file consumed by the datapath.
//! It performs the following:
//! 1. **Storage:** Maintains `count` registers of the configured width.
//! 2. **Write Discipline:** Reads are combinational over committed state; a write
//!    is staged and only becomes visible after [`Gpr::commit`], the software
//!    equivalent of the clock edge.
//! 3. **Invariant Enforcement:** Optionally hardwires register `x0` to zero.

use std::fmt;

use tracing::trace;

use crate::common::bits::mask;
use crate::common::{Error, Result};
use crate::config::CoreConfig;

/// Largest register file addressable through a 5-bit register field.
const MAX_REGISTERS: usize = 32;

/// General-Purpose Register file with an explicit commit step.
///
/// # Examples
///
/// ```
/// use rv32i_core::core::arch::gpr::Gpr;
///
/// let mut regs = Gpr::new(32).unwrap();
/// regs.write(5, 42).unwrap();
/// assert_eq!(regs.read(5).unwrap(), 0); // not yet committed
/// regs.commit();
/// assert_eq!(regs.read(5).unwrap(), 42);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gpr {
    regs: Vec<u64>,
    mask: u64,
    hardwire_x0: bool,
    trace: bool,
    staged: Option<(usize, u64)>,
}

impl Gpr {
    /// Creates a 32-bit register file with `count` registers, all zero, and
    /// `x0` hardwired to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegisterCount`] if `count` is zero or above 32.
    pub fn new(count: usize) -> Result<Self> {
        Self::build(count, 32, true, false)
    }

    /// Creates a register file from the configured depth, width, and `x0` policy.
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`CoreConfig::validate`].
    pub fn from_config(config: &CoreConfig) -> Result<Self> {
        config.validate()?;
        Self::build(
            config.reg_count,
            config.xlen,
            config.hardwire_x0,
            config.trace_instructions,
        )
    }

    fn build(count: usize, width: u32, hardwire_x0: bool, trace: bool) -> Result<Self> {
        if count == 0 || count > MAX_REGISTERS {
            return Err(Error::InvalidRegisterCount(count));
        }
        Ok(Self {
            regs: vec![0; count],
            mask: mask(width),
            hardwire_x0,
            trace,
            staged: None,
        })
    }

    /// Number of registers in the file.
    pub fn len(&self) -> usize {
        self.regs.len()
    }

    /// Always false; a register file holds at least one register.
    pub fn is_empty(&self) -> bool {
        self.regs.is_empty()
    }

    /// Reads a register's committed value.
    ///
    /// Register `x0` reads zero when hardwired. A staged write is not visible.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegisterOutOfRange`] if `idx` is beyond the file.
    pub fn read(&self, idx: usize) -> Result<u64> {
        self.check(idx)?;
        if idx == 0 && self.hardwire_x0 {
            return Ok(0);
        }
        Ok(self.regs[idx])
    }

    /// Stages a write; the value is truncated to the register width.
    ///
    /// The write takes effect on the next [`Gpr::commit`]. Staging again before
    /// the commit replaces the earlier staged write.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegisterOutOfRange`] if `idx` is beyond the file.
    pub fn write(&mut self, idx: usize, val: u64) -> Result<()> {
        self.check(idx)?;
        self.staged = Some((idx, val & self.mask));
        Ok(())
    }

    /// Applies the staged write, if any.
    ///
    /// Writes to a hardwired `x0` are discarded.
    pub fn commit(&mut self) {
        let Some((idx, val)) = self.staged.take() else {
            return;
        };
        if idx == 0 && self.hardwire_x0 {
            return;
        }
        if self.trace {
            trace!(reg = idx, value = val, "register commit");
        }
        self.regs[idx] = val;
    }

    /// The staged `(index, value)` awaiting commit.
    pub const fn pending(&self) -> Option<(usize, u64)> {
        self.staged
    }

    /// Zeroes every register and drops any staged write.
    pub fn reset(&mut self) {
        self.regs.fill(0);
        self.staged = None;
    }

    fn check(&self, idx: usize) -> Result<()> {
        if idx >= self.regs.len() {
            return Err(Error::RegisterOutOfRange {
                index: idx,
                count: self.regs.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Gpr {
    /// Formats committed register contents two per line, in hexadecimal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pair) in self.regs.chunks(2).enumerate() {
            let base = i * 2;
            write!(f, "x{:<2}={:#018x}", base, pair[0])?;
            if let Some(next) = pair.get(1) {
                write!(f, " x{:<2}={:#018x}", base + 1, next)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
