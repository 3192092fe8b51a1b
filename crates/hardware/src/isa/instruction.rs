//! Instruction word fields.
//!
//! Provides read-only views of the fixed RV32I instruction fields and the
//! structure produced by [`decode`](crate::isa::decode::decode).

use crate::isa::format::Format;

/// `opcode`, bits 6-0.
pub const OPCODE_MASK: u32 = 0x7F;
/// `rd`, bits 11-7 (after shifting).
pub const RD_MASK: u32 = 0x1F;
/// `rs1`, bits 19-15 (after shifting).
pub const RS1_MASK: u32 = 0x1F;
/// `rs2`, bits 24-20 (after shifting).
pub const RS2_MASK: u32 = 0x1F;
/// `funct3`, bits 14-12 (after shifting).
pub const FUNCT3_MASK: u32 = 0x7;
/// `funct7`, bits 31-25 (after shifting).
pub const FUNCT7_MASK: u32 = 0x7F;

const RD_SHIFT: u32 = 7;
const FUNCT3_SHIFT: u32 = 12;
const RS1_SHIFT: u32 = 15;
const RS2_SHIFT: u32 = 20;
const FUNCT7_SHIFT: u32 = 25;

/// Fixed-position fields of an RV32I instruction word.
///
/// Every format places these fields at the same bit offsets; whether a field
/// is meaningful depends on the format class. Register indices come back as
/// `usize` so they can index a register file directly.
///
/// # Examples
///
/// ```
/// use rv32i_core::isa::instruction::InstructionBits;
///
/// // add x20, x8, x17
/// let inst: u32 = 0x0114_0A33;
/// assert_eq!(inst.opcode(), 0b0110011);
/// assert_eq!((inst.rd(), inst.rs1(), inst.rs2()), (20, 8, 17));
/// ```
pub trait InstructionBits {
    /// `opcode` field.
    fn opcode(&self) -> u32;

    /// Destination register index.
    fn rd(&self) -> usize;

    /// First source register index.
    fn rs1(&self) -> usize;

    /// Second source register index.
    fn rs2(&self) -> usize;

    /// `funct3` field.
    fn funct3(&self) -> u32;

    /// `funct7` field. Bit 5 of the result is instruction bit 30.
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & RD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & RS2_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }
}

/// Decoded instruction fields.
///
/// All fields are views of `raw`; the immediate is extracted according to
/// `format` (zero when the opcode is unrecognized or R-type).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// The instruction word as fetched.
    pub raw: u32,
    /// Format class, or `None` for an unrecognized opcode.
    pub format: Option<Format>,
    /// `opcode` field.
    pub opcode: u32,
    /// `rd` field.
    pub rd: usize,
    /// `rs1` field.
    pub rs1: usize,
    /// `rs2` field.
    pub rs2: usize,
    /// `funct3` field.
    pub funct3: u32,
    /// `funct7` field.
    pub funct7: u32,
    /// Immediate for `format`, sign-extended to 32 bits.
    pub imm: i32,
}
