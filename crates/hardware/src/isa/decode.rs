//! Immediate extraction and field decoding.
//!
//! Each RV32I format scatters its immediate across the word differently:
//!
//! | Format | Assembled immediate                                        | Width |
//! |--------|------------------------------------------------------------|-------|
//! | I      | `inst[31:20]`                                              | 12    |
//! | S      | `inst[31:25] ++ inst[11:7]`                                | 12    |
//! | B      | `inst[31] ++ inst[7] ++ inst[30:25] ++ inst[11:8] ++ 0`    | 13    |
//! | U      | `inst[31:12] ++ 0x000`                                     | 32    |
//! | J      | `inst[31] ++ inst[19:12] ++ inst[20] ++ inst[30:21] ++ 0`  | 21    |
//!
//! Every immediate is sign-extended from its top bit to 32 bits. Opcodes with
//! no immediate layout (R-type and anything outside RV32I) yield zero.

use tracing::debug;

use crate::common::bits::sign_extend;
use crate::isa::format::Format;
use crate::isa::instruction::{Decoded, InstructionBits};

/// Returns `inst[hi:lo]`, right-aligned.
#[inline(always)]
const fn field(inst: u32, hi: u32, lo: u32) -> u32 {
    (inst >> lo) & ((1 << (hi - lo + 1)) - 1)
}

/// Sign-extends the low `bits` bits of an assembled immediate.
#[inline(always)]
const fn signed(raw: u32, bits: u32) -> i32 {
    sign_extend(raw as u64, bits) as i32
}

/// Extracts the immediate encoded in an instruction word.
///
/// The extraction rule is chosen by the opcode's format class. R-type
/// instructions and unrecognized opcodes return `0`.
///
/// # Examples
///
/// ```
/// use rv32i_core::extract_immediate;
///
/// // addi x1, x0, -1
/// assert_eq!(extract_immediate(0xFFF0_0093), -1);
/// // lui x1, 0x12345
/// assert_eq!(extract_immediate(0x1234_50B7), 0x1234_5000);
/// ```
pub fn extract_immediate(inst: u32) -> i32 {
    match Format::from_opcode(inst.opcode()) {
        Some(format) => immediate_for(format, inst),
        None => {
            debug!(inst, opcode = inst.opcode(), "no immediate layout for opcode, using 0");
            0
        }
    }
}

/// Splits an instruction word into its fields and immediate.
///
/// Unlike [`extract_immediate`] this does not log unrecognized opcodes; the
/// caller sees `format == None` instead.
pub fn decode(inst: u32) -> Decoded {
    let format = Format::from_opcode(inst.opcode());

    Decoded {
        raw: inst,
        format,
        opcode: inst.opcode(),
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        imm: format.map_or(0, |f| immediate_for(f, inst)),
    }
}

const fn immediate_for(format: Format, inst: u32) -> i32 {
    match format {
        Format::IArith | Format::ILoad | Format::IJump => imm_i(inst),
        Format::S => imm_s(inst),
        Format::B => imm_b(inst),
        Format::UAdd | Format::ULoad => imm_u(inst),
        Format::J => imm_j(inst),
        Format::R => 0,
    }
}

/// Loads, `JALR`, and immediate arithmetic.
const fn imm_i(inst: u32) -> i32 {
    // Arithmetic shift replicates bit 31 over the upper 20 bits.
    (inst as i32) >> 20
}

const fn imm_s(inst: u32) -> i32 {
    let raw = (field(inst, 31, 25) << 5) | field(inst, 11, 7);
    signed(raw, 12)
}

const fn imm_b(inst: u32) -> i32 {
    let raw = (field(inst, 31, 31) << 12)
        | (field(inst, 7, 7) << 11)
        | (field(inst, 30, 25) << 5)
        | (field(inst, 11, 8) << 1);
    signed(raw, 13)
}

/// `LUI` and `AUIPC`; bit 31 is already in place.
const fn imm_u(inst: u32) -> i32 {
    (inst & 0xFFFF_F000) as i32
}

const fn imm_j(inst: u32) -> i32 {
    let raw = (field(inst, 31, 31) << 20)
        | (field(inst, 19, 12) << 12)
        | (field(inst, 20, 20) << 11)
        | (field(inst, 30, 21) << 1);
    signed(raw, 21)
}
