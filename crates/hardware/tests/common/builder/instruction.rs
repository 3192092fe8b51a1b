use rv32i_core::isa::rv32i::funct3::*;
use rv32i_core::isa::rv32i::funct7;
use rv32i_core::isa::rv32i::opcodes::*;

#[derive(Clone, Copy, Debug, Default)]
pub struct InstructionBuilder {
    opcode: u32,
    rd: u32,
    funct3: u32,
    rs1: u32,
    rs2: u32,
    funct7: u32,
    imm: i32,
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opcode(mut self, op: u32) -> Self {
        self.opcode = op;
        self
    }

    pub fn rd(mut self, rd: u32) -> Self {
        self.rd = rd;
        self
    }

    pub fn rs1(mut self, rs1: u32) -> Self {
        self.rs1 = rs1;
        self
    }

    pub fn rs2(mut self, rs2: u32) -> Self {
        self.rs2 = rs2;
        self
    }

    pub fn funct3(mut self, funct3: u32) -> Self {
        self.funct3 = funct3;
        self
    }

    pub fn funct7(mut self, funct7: u32) -> Self {
        self.funct7 = funct7;
        self
    }

    pub fn imm(mut self, imm: i32) -> Self {
        self.imm = imm;
        self
    }

    fn reg(mut self, funct3: u32, funct7: u32, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.opcode = OP_REG;
        self.funct3 = funct3;
        self.funct7 = funct7;
        self.rd = rd;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self
    }

    fn itype(mut self, opcode: u32, funct3: u32, rd: u32, rs1: u32, imm: i32) -> Self {
        self.opcode = opcode;
        self.funct3 = funct3;
        self.rd = rd;
        self.rs1 = rs1;
        self.imm = imm;
        self
    }

    fn stype(mut self, funct3: u32, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.opcode = OP_STORE;
        self.funct3 = funct3;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self.imm = imm;
        self
    }

    fn btype(mut self, funct3: u32, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.opcode = OP_BRANCH;
        self.funct3 = funct3;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self.imm = imm;
        self
    }

    // --- U / J ---

    /// `imm` is the 20-bit upper immediate, unshifted.
    pub fn lui(mut self, rd: u32, imm: i32) -> Self {
        self.opcode = OP_LUI;
        self.rd = rd;
        self.imm = imm;
        self
    }

    /// `imm` is the 20-bit upper immediate, unshifted.
    pub fn auipc(mut self, rd: u32, imm: i32) -> Self {
        self.opcode = OP_AUIPC;
        self.rd = rd;
        self.imm = imm;
        self
    }

    pub fn jal(mut self, rd: u32, imm: i32) -> Self {
        self.opcode = OP_JAL;
        self.rd = rd;
        self.imm = imm;
        self
    }

    pub fn jalr(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.itype(OP_JALR, 0b000, rd, rs1, imm)
    }

    // --- Branches ---

    pub fn beq(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.btype(BEQ, rs1, rs2, imm)
    }

    pub fn bne(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.btype(BNE, rs1, rs2, imm)
    }

    pub fn blt(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.btype(BLT, rs1, rs2, imm)
    }

    pub fn bge(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.btype(BGE, rs1, rs2, imm)
    }

    pub fn bltu(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.btype(BLTU, rs1, rs2, imm)
    }

    pub fn bgeu(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.btype(BGEU, rs1, rs2, imm)
    }

    // --- Loads / Stores ---

    pub fn lb(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.itype(OP_LOAD, LB, rd, rs1, imm)
    }

    pub fn lh(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.itype(OP_LOAD, LH, rd, rs1, imm)
    }

    pub fn lw(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.itype(OP_LOAD, LW, rd, rs1, imm)
    }

    pub fn lbu(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.itype(OP_LOAD, LBU, rd, rs1, imm)
    }

    pub fn lhu(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.itype(OP_LOAD, LHU, rd, rs1, imm)
    }

    pub fn sb(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.stype(SB, rs1, rs2, imm)
    }

    pub fn sh(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.stype(SH, rs1, rs2, imm)
    }

    pub fn sw(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.stype(SW, rs1, rs2, imm)
    }

    // --- I-type arithmetic ---

    pub fn addi(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.itype(OP_IMM, ADD_SUB, rd, rs1, imm)
    }

    pub fn slti(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.itype(OP_IMM, SLT, rd, rs1, imm)
    }

    pub fn sltiu(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.itype(OP_IMM, SLTU, rd, rs1, imm)
    }

    pub fn xori(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.itype(OP_IMM, XOR, rd, rs1, imm)
    }

    pub fn ori(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.itype(OP_IMM, OR, rd, rs1, imm)
    }

    pub fn andi(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.itype(OP_IMM, AND, rd, rs1, imm)
    }

    pub fn slli(self, rd: u32, rs1: u32, shamt: u32) -> Self {
        self.itype(OP_IMM, SLL, rd, rs1, (shamt & 0x1F) as i32)
    }

    pub fn srli(self, rd: u32, rs1: u32, shamt: u32) -> Self {
        self.itype(OP_IMM, SRL_SRA, rd, rs1, (shamt & 0x1F) as i32)
    }

    /// SRAI carries `funct7 = 0100000` in `imm[11:5]`.
    pub fn srai(self, rd: u32, rs1: u32, shamt: u32) -> Self {
        let imm = ((funct7::ALT << 5) | (shamt & 0x1F)) as i32;
        self.itype(OP_IMM, SRL_SRA, rd, rs1, imm)
    }

    // --- R-type ---

    pub fn add(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(ADD_SUB, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn sub(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(ADD_SUB, funct7::ALT, rd, rs1, rs2)
    }

    pub fn sll(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(SLL, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn slt(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(SLT, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn sltu(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(SLTU, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn xor(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(XOR, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn srl(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(SRL_SRA, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn sra(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(SRL_SRA, funct7::ALT, rd, rs1, rs2)
    }

    pub fn or(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(OR, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn and(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(AND, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn build(self) -> u32 {
        let opcode = self.opcode & 0x7F;
        let rd = (self.rd & 0x1F) << 7;
        let funct3 = (self.funct3 & 0x7) << 12;
        let rs1 = (self.rs1 & 0x1F) << 15;
        let rs2 = (self.rs2 & 0x1F) << 20;
        let funct7 = (self.funct7 & 0x7F) << 25;
        let imm = self.imm as u32;

        match opcode {
            // funct7 | rs2 | rs1 | funct3 | rd | opcode
            OP_REG => funct7 | rs2 | rs1 | funct3 | rd | opcode,
            // imm[11:0] | rs1 | funct3 | rd | opcode
            OP_IMM | OP_LOAD | OP_JALR => ((imm & 0xFFF) << 20) | rs1 | funct3 | rd | opcode,
            // imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode
            OP_STORE => {
                let imm_11_5 = ((imm >> 5) & 0x7F) << 25;
                let imm_4_0 = (imm & 0x1F) << 7;
                imm_11_5 | rs2 | rs1 | funct3 | imm_4_0 | opcode
            }
            // imm[12|10:5] | rs2 | rs1 | funct3 | imm[4:1|11] | opcode
            OP_BRANCH => {
                let bit_12 = ((imm >> 12) & 0x1) << 31;
                let bits_10_5 = ((imm >> 5) & 0x3F) << 25;
                let bits_4_1 = ((imm >> 1) & 0xF) << 8;
                let bit_11 = ((imm >> 11) & 0x1) << 7;
                bit_12 | bits_10_5 | rs2 | rs1 | funct3 | bits_4_1 | bit_11 | opcode
            }
            // imm[31:12] | rd | opcode
            OP_LUI | OP_AUIPC => ((imm & 0xFFFFF) << 12) | rd | opcode,
            // imm[20|10:1|11|19:12] | rd | opcode
            OP_JAL => {
                let bit_20 = ((imm >> 20) & 0x1) << 31;
                let bits_10_1 = ((imm >> 1) & 0x3FF) << 21;
                let bit_11 = ((imm >> 11) & 0x1) << 20;
                let bits_19_12 = ((imm >> 12) & 0xFF) << 12;
                bit_20 | bits_10_1 | bit_11 | bits_19_12 | rd | opcode
            }
            // Raw layout for opcodes outside RV32I.
            _ => funct7 | rs2 | rs1 | funct3 | rd | opcode,
        }
    }
}
