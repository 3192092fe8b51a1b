//! Control signals and operation types.
//!
//! This module defines the bundle the control decoder emits for every
//! instruction word:
//! 1. **Operation Classification:** ALU operation and comparison type.
//! 2. **Operand Selection:** Sources for ALU inputs (registers, PC, zero, or immediate).
//! 3. **Memory Control:** Load/store width and sign-extension.
//! 4. **Write-back Control:** Register write enable and result source.
//!
//! Every field is a closed enum or a flag, so a bundle can never be in an
//! undefined state. Fields irrelevant to an instruction keep their default.

/// ALU operation selector.
///
/// Discriminants are the stable raw selector codes; see [`AluOp::from_code`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AluOp {
    /// Wrapping addition. Also the no-op default.
    #[default]
    Add = 0,
    /// Wrapping subtraction.
    Sub = 1,
    /// Bitwise AND.
    And = 2,
    /// Bitwise OR.
    Or = 3,
    /// Bitwise XOR.
    Xor = 4,
    /// Set less than (signed).
    Slt = 5,
    /// Set less than unsigned.
    Sltu = 6,
    /// Shift left logical.
    Sll = 7,
    /// Shift right logical.
    Srl = 8,
    /// Shift right arithmetic.
    Sra = 9,
}

impl AluOp {
    /// Every operation, in selector-code order.
    pub const ALL: [Self; 10] = [
        Self::Add,
        Self::Sub,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Slt,
        Self::Sltu,
        Self::Sll,
        Self::Srl,
        Self::Sra,
    ];

    /// Maps a raw selector code to an operation.
    ///
    /// Returns `None` for codes with no defined operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32i_core::core::control::signals::AluOp;
    ///
    /// assert_eq!(AluOp::from_code(1), Some(AluOp::Sub));
    /// assert_eq!(AluOp::from_code(10), None);
    /// ```
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Add),
            1 => Some(Self::Sub),
            2 => Some(Self::And),
            3 => Some(Self::Or),
            4 => Some(Self::Xor),
            5 => Some(Self::Slt),
            6 => Some(Self::Sltu),
            7 => Some(Self::Sll),
            8 => Some(Self::Srl),
            9 => Some(Self::Sra),
            _ => None,
        }
    }

    /// Returns the raw selector code.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Comparison performed by the branch comparator.
///
/// Meaningful for branches and for the set-less-than instructions, which
/// carry their comparison here instead of in [`AluOp`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CmpType {
    /// `a == b`.
    #[default]
    Equal,
    /// `a != b`.
    NotEqual,
    /// Signed `a < b`.
    LessThan,
    /// Unsigned `a < b`.
    LessThanU,
    /// Signed `a >= b`.
    GreaterEqual,
    /// Unsigned `a >= b`.
    GreaterEqualU,
}

/// Source of the value written back to the destination register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mem2Reg {
    /// Write back the execution-unit result.
    #[default]
    FromAlu,
    /// Write back the value returned by the memory unit.
    FromMem,
}

/// Source for ALU operand A.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OpASrc {
    /// Use `rs1` register value.
    #[default]
    Reg1,
    /// Use program counter value.
    Pc,
    /// Use zero.
    Zero,
}

/// Source for ALU operand B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OpBSrc {
    /// Use `rs2` register value.
    #[default]
    Reg2,
    /// Use sign-extended immediate value.
    Imm,
}

/// Load width and signedness for the memory unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LoadCtrl {
    /// Signed byte.
    #[default]
    Lb,
    /// Signed halfword.
    Lh,
    /// Word.
    Lw,
    /// Unsigned byte.
    Lbu,
    /// Unsigned halfword.
    Lhu,
}

impl LoadCtrl {
    /// Access size in bytes.
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Lb | Self::Lbu => 1,
            Self::Lh | Self::Lhu => 2,
            Self::Lw => 4,
        }
    }

    /// True when the loaded value is sign-extended.
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::Lb | Self::Lh | Self::Lw)
    }

    /// Narrows raw memory data to the access width and extends it to 32 bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32i_core::core::control::signals::LoadCtrl;
    ///
    /// assert_eq!(LoadCtrl::Lb.extend(0x0000_0080), 0xFFFF_FF80);
    /// assert_eq!(LoadCtrl::Lbu.extend(0x0000_0080), 0x0000_0080);
    /// assert_eq!(LoadCtrl::Lh.extend(0x1234_8000), 0xFFFF_8000);
    /// ```
    pub const fn extend(self, raw: u32) -> u32 {
        match self {
            Self::Lb => raw as u8 as i8 as i32 as u32,
            Self::Lh => raw as u16 as i16 as i32 as u32,
            Self::Lw => raw,
            Self::Lbu => raw as u8 as u32,
            Self::Lhu => raw as u16 as u32,
        }
    }
}

/// Store width for the memory unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StoreCtrl {
    /// Byte.
    #[default]
    Sb,
    /// Halfword.
    Sh,
    /// Word.
    Sw,
}

impl StoreCtrl {
    /// Access size in bytes.
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Sb => 1,
            Self::Sh => 2,
            Self::Sw => 4,
        }
    }
}

/// Control signals for one instruction.
///
/// The default value is the all-disabled bundle: no register write, no
/// memory access, no branch, `AluOp::Add`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ControlSignals {
    /// ALU operation to perform.
    pub alu: AluOp,
    /// Comparison for branches and set-less-than.
    pub cmp: CmpType,
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Enable memory write operation (store).
    pub mem_write: bool,
    /// Enable memory read operation (load).
    pub mem_read: bool,
    /// Source of the write-back value.
    pub mem_to_reg: Mem2Reg,
    /// Source selection for ALU operand A.
    pub a_src: OpASrc,
    /// Source selection for ALU operand B.
    pub b_src: OpBSrc,
    /// Instruction is a conditional branch.
    pub branch: bool,
    /// Load width and signedness.
    pub load: LoadCtrl,
    /// Store width.
    pub store: StoreCtrl,
}

impl ControlSignals {
    /// True when the bundle performs no write-back, memory access, or branch.
    pub const fn is_nop(&self) -> bool {
        !self.reg_write && !self.mem_write && !self.mem_read && !self.branch
    }
}
