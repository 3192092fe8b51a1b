//! Instruction format classes.
//!
//! Every RV32I major opcode belongs to exactly one format class. The class
//! decides which immediate layout applies and which control signals carry
//! meaning. Sub-classes sharing an encoding layout (the three I-type groups,
//! the two U-type instructions) are told apart by opcode value alone.

use crate::isa::rv32i::opcodes;

/// Format class of an RV32I instruction, derived from its opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Register-register arithmetic (`OP`).
    R,
    /// Immediate arithmetic (`OP-IMM`).
    IArith,
    /// Loads.
    ILoad,
    /// `JALR`.
    IJump,
    /// Stores.
    S,
    /// Conditional branches.
    B,
    /// `AUIPC`.
    UAdd,
    /// `LUI`.
    ULoad,
    /// `JAL`.
    J,
}

impl Format {
    /// Classifies a 7-bit major opcode.
    ///
    /// Returns `None` for opcodes outside the RV32I base integer set handled
    /// by this core (including `MISC-MEM` and `SYSTEM`).
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32i_core::isa::format::Format;
    ///
    /// assert_eq!(Format::from_opcode(0b0110111), Some(Format::ULoad));
    /// assert_eq!(Format::from_opcode(0b1110011), None);
    /// ```
    pub const fn from_opcode(opcode: u32) -> Option<Self> {
        match opcode {
            opcodes::OP_REG => Some(Self::R),
            opcodes::OP_IMM => Some(Self::IArith),
            opcodes::OP_LOAD => Some(Self::ILoad),
            opcodes::OP_JALR => Some(Self::IJump),
            opcodes::OP_STORE => Some(Self::S),
            opcodes::OP_BRANCH => Some(Self::B),
            opcodes::OP_AUIPC => Some(Self::UAdd),
            opcodes::OP_LUI => Some(Self::ULoad),
            opcodes::OP_JAL => Some(Self::J),
            _ => None,
        }
    }

    /// Returns the major opcode for this class.
    pub const fn opcode(self) -> u32 {
        match self {
            Self::R => opcodes::OP_REG,
            Self::IArith => opcodes::OP_IMM,
            Self::ILoad => opcodes::OP_LOAD,
            Self::IJump => opcodes::OP_JALR,
            Self::S => opcodes::OP_STORE,
            Self::B => opcodes::OP_BRANCH,
            Self::UAdd => opcodes::OP_AUIPC,
            Self::ULoad => opcodes::OP_LUI,
            Self::J => opcodes::OP_JAL,
        }
    }

    /// True for the I-type layouts (arithmetic, load, `JALR`).
    pub const fn is_i_type(self) -> bool {
        matches!(self, Self::IArith | Self::ILoad | Self::IJump)
    }

    /// True for `AUIPC` and `LUI`.
    pub const fn is_u_type(self) -> bool {
        matches!(self, Self::UAdd | Self::ULoad)
    }

    /// True for `JAL` and `JALR`, whose link value comes from the PC logic.
    pub const fn is_jump(self) -> bool {
        matches!(self, Self::J | Self::IJump)
    }
}
