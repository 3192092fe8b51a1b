//! Single-Instruction Datapath.
//!
//! This module wires the decode/execute core to its first consumer. It performs the following:
//! 1. **Decode:** Derives control signals and the immediate from the instruction word.
//! 2. **Register Read:** Reads only the source registers the control bundle uses.
//! 3. **Operand Selection:** Multiplexes `rs1`/PC/zero and `rs2`/immediate into the ALU.
//! 4. **Execute:** Runs the ALU and the comparator, and resolves set-less-than results.
//! 5. **Write-back:** Stages and commits ALU results into the register file.
//!
//! Memory accesses and next-PC selection stay with the caller: the evaluation
//! reports the effective address, store data, and branch outcome for them.

use tracing::trace;

use crate::common::Result;
use crate::config::CoreConfig;
use crate::core::arch::Gpr;
use crate::core::control::decode as control_decode;
use crate::core::control::signals::{CmpType, ControlSignals, Mem2Reg, OpASrc, OpBSrc};
use crate::core::units::alu::{Alu, AluOutput};
use crate::core::units::bru::Comparator;
use crate::isa::decode::decode as instruction_decode;
use crate::isa::instruction::Decoded;

/// Selects ALU operand A.
pub const fn select_a(src: OpASrc, rs1: u64, pc: u64) -> u64 {
    match src {
        OpASrc::Reg1 => rs1,
        OpASrc::Pc => pc,
        OpASrc::Zero => 0,
    }
}

/// Selects ALU operand B.
///
/// The immediate is sign-extended to 64 bits; the ALU truncates it to its width.
pub const fn select_b(src: OpBSrc, rs2: u64, imm: i32) -> u64 {
    match src {
        OpBSrc::Reg2 => rs2,
        OpBSrc::Imm => imm as i64 as u64,
    }
}

/// Everything the datapath derived from one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// Program counter the instruction was evaluated at.
    pub pc: u64,
    /// Decoded instruction fields and immediate.
    pub decoded: Decoded,
    /// Control signals.
    pub ctrl: ControlSignals,
    /// ALU operand A after selection.
    pub op_a: u64,
    /// ALU operand B after selection.
    pub op_b: u64,
    /// Raw ALU output and zero flag.
    pub alu: AluOutput,
    /// Comparator outcome; for branches, whether the branch is taken.
    pub cmp_result: bool,
    /// Value destined for `rd` when the write-back source is the ALU.
    ///
    /// For set-less-than instructions this is the comparator outcome as 0/1.
    pub result: u64,
    /// Value of `rs2` for stores.
    pub store_data: Option<u64>,
}

impl Evaluation {
    /// True for a conditional branch whose comparison holds.
    pub const fn branch_taken(&self) -> bool {
        self.ctrl.branch && self.cmp_result
    }

    /// Address presented to the memory unit for loads and stores.
    pub const fn mem_addr(&self) -> Option<u64> {
        if self.ctrl.mem_read || self.ctrl.mem_write {
            Some(self.alu.out)
        } else {
            None
        }
    }

    /// The `(rd, value)` pair to write back from the ALU path.
    ///
    /// `None` for instructions that do not write a register, for loads (the
    /// memory unit supplies the value), and for `JAL`/`JALR`, whose link value
    /// comes from the PC logic.
    pub fn write_back(&self) -> Option<(usize, u64)> {
        let jump = self.decoded.format.is_some_and(|f| f.is_jump());
        if self.ctrl.reg_write && self.ctrl.mem_to_reg == Mem2Reg::FromAlu && !jump {
            Some((self.decoded.rd, self.result))
        } else {
            None
        }
    }
}

/// Decode/execute datapath for one instruction at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Datapath {
    alu: Alu,
    comparator: Comparator,
    trace: bool,
}

impl Default for Datapath {
    fn default() -> Self {
        Self {
            alu: Alu::RV32,
            comparator: Comparator::RV32,
            trace: false,
        }
    }
}

impl Datapath {
    /// Creates a datapath of the configured width.
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`CoreConfig::validate`].
    pub fn from_config(config: &CoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            alu: Alu::from_config(config)?,
            comparator: Comparator::new(config.xlen)?,
            trace: config.trace_instructions,
        })
    }

    /// The execution unit.
    pub const fn alu(&self) -> &Alu {
        &self.alu
    }

    /// Evaluates one instruction against the committed register state.
    ///
    /// # Arguments
    ///
    /// * `inst` - Raw instruction word.
    /// * `pc`   - Program counter, used when operand A selects the PC.
    /// * `regs` - Register file to read source operands from.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegisterOutOfRange`](crate::common::Error::RegisterOutOfRange)
    /// when a source register the instruction uses lies beyond the register file.
    pub fn evaluate(&self, inst: u32, pc: u64, regs: &Gpr) -> Result<Evaluation> {
        let decoded = instruction_decode(inst);
        let ctrl = control_decode(inst);

        let rs1 = match ctrl.a_src {
            OpASrc::Reg1 => regs.read(decoded.rs1)?,
            OpASrc::Pc | OpASrc::Zero => 0,
        };
        let rs2 = if ctrl.b_src == OpBSrc::Reg2 || ctrl.mem_write {
            regs.read(decoded.rs2)?
        } else {
            0
        };

        let op_a = select_a(ctrl.a_src, rs1, pc) & self.alu.mask();
        let op_b = select_b(ctrl.b_src, rs2, decoded.imm) & self.alu.mask();

        let alu = self.alu.execute(ctrl.alu, op_a, op_b);
        let cmp_result = self.comparator.compare(ctrl.cmp, op_a, op_b);

        let result = if !ctrl.branch && ctrl.cmp != CmpType::Equal {
            u64::from(cmp_result)
        } else {
            alu.out
        };

        let eval = Evaluation {
            pc,
            decoded,
            ctrl,
            op_a,
            op_b,
            alu,
            cmp_result,
            result,
            store_data: ctrl.mem_write.then_some(rs2),
        };

        if self.trace {
            trace!(
                pc,
                inst,
                alu = ?ctrl.alu,
                cmp = ?ctrl.cmp,
                op_a,
                op_b,
                result,
                "evaluate"
            );
        }

        Ok(eval)
    }

    /// Stages and commits the ALU write-back of an evaluation.
    ///
    /// Does nothing when [`Evaluation::write_back`] is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegisterOutOfRange`](crate::common::Error::RegisterOutOfRange)
    /// when `rd` lies beyond the register file.
    pub fn retire(&self, eval: &Evaluation, regs: &mut Gpr) -> Result<()> {
        if let Some((rd, value)) = eval.write_back() {
            regs.write(rd, value)?;
            regs.commit();
        }
        Ok(())
    }
}
