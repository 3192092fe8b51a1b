//! Minor opcodes (`funct3`, instruction bits 14-12).
//!
//! Grouped by the major opcode they refine. Values repeat across groups; a
//! constant only has meaning together with its opcode.

// LOAD: access width and signedness.

/// `lb`: byte, sign-extended.
pub const LB: u32 = 0b000;
/// `lh`: halfword, sign-extended.
pub const LH: u32 = 0b001;
/// `lw`: full word.
pub const LW: u32 = 0b010;
/// `lbu`: byte, zero-extended.
pub const LBU: u32 = 0b100;
/// `lhu`: halfword, zero-extended.
pub const LHU: u32 = 0b101;

// STORE: access width.

/// `sb`: low byte of `rs2`.
pub const SB: u32 = 0b000;
/// `sh`: low halfword of `rs2`.
pub const SH: u32 = 0b001;
/// `sw`: full word of `rs2`.
pub const SW: u32 = 0b010;

// BRANCH: comparison. 0b010 and 0b011 are reserved.

/// `beq`: `rs1 == rs2`.
pub const BEQ: u32 = 0b000;
/// `bne`: `rs1 != rs2`.
pub const BNE: u32 = 0b001;
/// `blt`: signed `rs1 < rs2`.
pub const BLT: u32 = 0b100;
/// `bge`: signed `rs1 >= rs2`.
pub const BGE: u32 = 0b101;
/// `bltu`: unsigned `rs1 < rs2`.
pub const BLTU: u32 = 0b110;
/// `bgeu`: unsigned `rs1 >= rs2`.
pub const BGEU: u32 = 0b111;

// OP and OP-IMM: operation.

/// `add`/`sub`/`addi`; `funct7` bit 30 selects `sub` in the register form.
pub const ADD_SUB: u32 = 0b000;
/// `sll`/`slli`.
pub const SLL: u32 = 0b001;
/// `slt`/`slti`.
pub const SLT: u32 = 0b010;
/// `sltu`/`sltiu`.
pub const SLTU: u32 = 0b011;
/// `xor`/`xori`.
pub const XOR: u32 = 0b100;
/// `srl`/`sra`/`srli`/`srai`; `funct7` bit 30 selects the arithmetic shift.
pub const SRL_SRA: u32 = 0b101;
/// `or`/`ori`.
pub const OR: u32 = 0b110;
/// `and`/`andi`.
pub const AND: u32 = 0b111;
