//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer execution unit. It evaluates one
//! [`AluOp`] over two operands and reports the result together with a zero
//! flag. The unit is parameterized by datapath width; [`Alu::RV32`] is the
//! 32-bit instance behind the free function [`execute`].
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Or, And, Xor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical and comparison operations (or, and, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::common::Result;
use crate::common::bits::mask;
use crate::config::{CoreConfig, validate_width};
use crate::core::control::signals::AluOp;

/// Result of one ALU evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluOutput {
    /// Result, truncated to the datapath width.
    pub out: u64,
    /// Set when `out` is zero.
    pub zflag: bool,
}

impl AluOutput {
    const fn new(out: u64) -> Self {
        Self {
            out,
            zflag: out == 0,
        }
    }
}

/// Arithmetic Logic Unit for integer operations.
///
/// Operands are truncated to the configured width before evaluation, and every
/// result is taken modulo `2^width`. Signed operations interpret bit
/// `width - 1` as the sign bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alu {
    width: u32,
}

impl Alu {
    /// The 32-bit RV32I execution unit.
    pub const RV32: Self = Self { width: 32 };

    /// Creates an execution unit of the given datapath width.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedWidth`](crate::common::Error::UnsupportedWidth)
    /// unless `width` is a power of two in `8..=64`.
    pub fn new(width: u32) -> Result<Self> {
        validate_width(width)?;
        Ok(Self { width })
    }

    /// Creates an execution unit with the configured `xlen`.
    ///
    /// # Errors
    ///
    /// Same as [`Alu::new`].
    pub fn from_config(config: &CoreConfig) -> Result<Self> {
        Self::new(config.xlen)
    }

    /// Datapath width in bits.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Mask covering the datapath width.
    pub const fn mask(&self) -> u64 {
        mask(self.width)
    }

    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand (`in1`)
    /// * `b`  - Second operand (`in2`, also the shift amount)
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32i_core::core::units::alu::Alu;
    /// use rv32i_core::core::control::signals::AluOp;
    ///
    /// let alu = Alu::new(8).unwrap();
    /// assert_eq!(alu.execute(AluOp::Add, 0xFF, 1).out, 0);
    /// assert!(alu.execute(AluOp::Add, 0xFF, 1).zflag);
    /// assert_eq!(alu.execute(AluOp::Sra, 0x80, 9).out, 0xC0); // shift amount 9 & 7 = 1
    /// ```
    pub fn execute(&self, op: AluOp, a: u64, b: u64) -> AluOutput {
        let m = self.mask();
        let (a, b) = (a & m, b & m);

        let out = match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Slt | AluOp::Sltu => {
                logic::execute(op, a, b, self.width)
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b, self.width),
        };

        AluOutput::new(out & m)
    }

    /// Executes the operation named by a raw selector code.
    ///
    /// Codes with no defined operation produce `out = 0` (and therefore a set
    /// zero flag) rather than an error.
    pub fn execute_code(&self, code: u8, a: u64, b: u64) -> AluOutput {
        AluOp::from_code(code).map_or(AluOutput::new(0), |op| self.execute(op, a, b))
    }
}

/// Executes an operation on the 32-bit datapath.
///
/// Returns `(out, zflag)`.
///
/// # Examples
///
/// ```
/// use rv32i_core::execute;
/// use rv32i_core::core::control::signals::AluOp;
///
/// assert_eq!(execute(5, 7, AluOp::Sub), (0xFFFF_FFFE, false));
/// assert_eq!(execute(0xF0, 0x0F, AluOp::And), (0, true));
/// ```
pub fn execute(in1: u32, in2: u32, op: AluOp) -> (u32, bool) {
    let result = Alu::RV32.execute(op, u64::from(in1), u64::from(in2));
    (result.out as u32, result.zflag)
}
