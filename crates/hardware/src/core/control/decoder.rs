//! Control Decoder.
//!
//! Maps an instruction word to its [`ControlSignals`]. It performs the following:
//! 1. **Class Dispatch:** Selects the base bundle from the opcode's format class.
//! 2. **Operation Refinement:** Uses `funct3` (and `funct7` bit 30 for SUB/SRA/SRAI)
//!    to pick the ALU operation, comparison, and memory width.
//! 3. **Fallback:** Unrecognized opcodes produce the all-disabled bundle.
//!
//! Set-less-than instructions (`slt`, `sltu`, `slti`, `sltiu`) keep
//! `AluOp::Add` and carry the comparison in `cmp`; the datapath resolves the
//! final 0/1 result from the comparator.

use tracing::debug;

use crate::core::control::signals::{
    AluOp, CmpType, ControlSignals, LoadCtrl, Mem2Reg, OpASrc, OpBSrc, StoreCtrl,
};
use crate::isa::format::Format;
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::{funct3, funct7};

/// Decodes an instruction word into control signals.
///
/// Total over all 32-bit inputs: unrecognized opcodes yield the all-disabled
/// bundle with `AluOp::Add`, and unrecognized `funct3` values within a known
/// class keep the class signals with default widths and comparison.
///
/// # Examples
///
/// ```
/// use rv32i_core::decode;
/// use rv32i_core::core::control::signals::{AluOp, OpBSrc};
///
/// // sub x2, x7, x27
/// let ctrl = decode(0x41B3_8133);
/// assert_eq!(ctrl.alu, AluOp::Sub);
/// assert_eq!(ctrl.b_src, OpBSrc::Reg2);
/// assert!(ctrl.reg_write);
/// ```
pub fn decode(inst: u32) -> ControlSignals {
    let mut c = ControlSignals::default();

    let Some(format) = Format::from_opcode(inst.opcode()) else {
        debug!(inst, opcode = inst.opcode(), "unrecognized opcode, emitting no-op control");
        return c;
    };

    match format {
        Format::ULoad | Format::J => {
            c.reg_write = true;
            c.a_src = OpASrc::Zero;
            c.b_src = OpBSrc::Imm;
        }
        Format::UAdd => {
            c.reg_write = true;
            c.a_src = OpASrc::Pc;
            c.b_src = OpBSrc::Imm;
        }
        Format::IJump => {
            c.reg_write = true;
            c.b_src = OpBSrc::Imm;
        }
        Format::B => {
            c.branch = true;
            // BEQ and the two reserved encodings compare for equality.
            c.cmp = match inst.funct3() {
                funct3::BNE => CmpType::NotEqual,
                funct3::BLT => CmpType::LessThan,
                funct3::BGE => CmpType::GreaterEqual,
                funct3::BLTU => CmpType::LessThanU,
                funct3::BGEU => CmpType::GreaterEqualU,
                _ => CmpType::Equal,
            };
        }
        Format::ILoad => {
            c.reg_write = true;
            c.mem_read = true;
            c.mem_to_reg = Mem2Reg::FromMem;
            c.b_src = OpBSrc::Imm;
            c.load = match inst.funct3() {
                funct3::LH => LoadCtrl::Lh,
                funct3::LW => LoadCtrl::Lw,
                funct3::LBU => LoadCtrl::Lbu,
                funct3::LHU => LoadCtrl::Lhu,
                _ => LoadCtrl::Lb,
            };
        }
        Format::S => {
            c.mem_write = true;
            c.b_src = OpBSrc::Imm;
            c.store = match inst.funct3() {
                funct3::SH => StoreCtrl::Sh,
                funct3::SW => StoreCtrl::Sw,
                _ => StoreCtrl::Sb,
            };
        }
        Format::IArith => {
            c.reg_write = true;
            c.b_src = OpBSrc::Imm;
            (c.alu, c.cmp) = arith_op(inst);
        }
        Format::R => {
            c.reg_write = true;
            (c.alu, c.cmp) = arith_op(inst);
        }
    }

    c
}

/// Selects the ALU operation and comparison shared by `OP` and `OP-IMM`.
///
/// `funct7` bit 30 only matters for the ADD/SUB and SRL/SRA pairs; for
/// `OP-IMM` ADDI ignores it.
fn arith_op(inst: u32) -> (AluOp, CmpType) {
    let alt = (inst.funct7() & funct7::ALT_BIT) != 0;
    let is_reg = inst.opcode() == Format::R.opcode();

    match inst.funct3() {
        funct3::ADD_SUB if alt && is_reg => (AluOp::Sub, CmpType::Equal),
        funct3::ADD_SUB => (AluOp::Add, CmpType::Equal),
        funct3::SLL => (AluOp::Sll, CmpType::Equal),
        funct3::SLT => (AluOp::Add, CmpType::LessThan),
        funct3::SLTU => (AluOp::Add, CmpType::LessThanU),
        funct3::XOR => (AluOp::Xor, CmpType::Equal),
        funct3::SRL_SRA if alt => (AluOp::Sra, CmpType::Equal),
        funct3::SRL_SRA => (AluOp::Srl, CmpType::Equal),
        funct3::OR => (AluOp::Or, CmpType::Equal),
        _ => (AluOp::And, CmpType::Equal),
    }
}
