//! # MIPS32 Subset Opcode Definitions
//!
//! Primary opcodes live in bits `[31:26]` of the instruction word. The
//! single `SPECIAL` opcode (0x00) dispatches further on the 6-bit function
//! code in bits `[5:0]`; the `REGIMM` opcode (0x01) dispatches on the `rt`
//! field, which for that family encodes a sub-opcode rather than a register.
//!
//! All values are the standard MIPS-I assignments and must stay bit-exact
//! for binary compatibility with externally assembled programs.

use serde::{Deserialize, Serialize};

/// Primary opcode (6 bits, instruction bits `[31:26]`)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// R-format instructions; real operation is in the funct field
    Special = 0x00,
    /// BLTZ/BGEZ family; sub-opcode is in the rt field
    RegImm = 0x01,
    /// J: unconditional jump within the current 256MiB region
    J = 0x02,
    /// JAL: jump and link ($ra = PC + 4)
    Jal = 0x03,
    /// BEQ: branch if rs == rt
    Beq = 0x04,
    /// BNE: branch if rs != rt
    Bne = 0x05,
    /// BLEZ: branch if rs <= 0 (signed)
    Blez = 0x06,
    /// BGTZ: branch if rs > 0 (signed)
    Bgtz = 0x07,
    /// ADDI: rt = rs + sign_extend(imm)
    Addi = 0x08,
    /// ADDIU: rt = rs + sign_extend(imm), no overflow trap
    Addiu = 0x09,
    /// SLTI: rt = (rs < sign_extend(imm)) ? 1 : 0 (signed)
    Slti = 0x0A,
    /// SLTIU: rt = (rs < sign_extend(imm)) ? 1 : 0 (unsigned)
    Sltiu = 0x0B,
    /// ANDI: rt = rs & zero_extend(imm)
    Andi = 0x0C,
    /// ORI: rt = rs | zero_extend(imm)
    Ori = 0x0D,
    /// XORI: rt = rs ^ zero_extend(imm)
    Xori = 0x0E,
    /// LUI: rt = imm << 16
    Lui = 0x0F,
    /// LB: rt = sign_extend(mem[rs + imm][7:0])
    Lb = 0x20,
    /// LH: rt = sign_extend(mem[rs + imm][15:0])
    Lh = 0x21,
    /// LW: rt = mem[rs + imm]
    Lw = 0x23,
    /// LBU: rt = zero_extend(mem[rs + imm][7:0])
    Lbu = 0x24,
    /// LHU: rt = zero_extend(mem[rs + imm][15:0])
    Lhu = 0x25,
    /// SB: mem[rs + imm][7:0] = rt[7:0]
    Sb = 0x28,
    /// SH: mem[rs + imm][15:0] = rt[15:0]
    Sh = 0x29,
    /// SW: mem[rs + imm] = rt
    Sw = 0x2B,
}

impl Opcode {
    /// Opcode field width in bits
    pub const BITS: u32 = 6;

    /// Opcode field mask
    pub const MASK: u32 = 0x3F;

    /// Try to convert from a raw 6-bit field value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Opcode::Special),
            0x01 => Some(Opcode::RegImm),
            0x02 => Some(Opcode::J),
            0x03 => Some(Opcode::Jal),
            0x04 => Some(Opcode::Beq),
            0x05 => Some(Opcode::Bne),
            0x06 => Some(Opcode::Blez),
            0x07 => Some(Opcode::Bgtz),
            0x08 => Some(Opcode::Addi),
            0x09 => Some(Opcode::Addiu),
            0x0A => Some(Opcode::Slti),
            0x0B => Some(Opcode::Sltiu),
            0x0C => Some(Opcode::Andi),
            0x0D => Some(Opcode::Ori),
            0x0E => Some(Opcode::Xori),
            0x0F => Some(Opcode::Lui),
            0x20 => Some(Opcode::Lb),
            0x21 => Some(Opcode::Lh),
            0x23 => Some(Opcode::Lw),
            0x24 => Some(Opcode::Lbu),
            0x25 => Some(Opcode::Lhu),
            0x28 => Some(Opcode::Sb),
            0x29 => Some(Opcode::Sh),
            0x2B => Some(Opcode::Sw),
            _ => None,
        }
    }

    /// Convert to the raw field value
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Extract the primary opcode from a 32-bit instruction word
    #[inline]
    pub fn from_instruction(word: u32) -> Option<Self> {
        Self::from_u8(((word >> 26) & Self::MASK) as u8)
    }

    /// Check if this is a load opcode
    #[inline]
    pub const fn is_load(self) -> bool {
        matches!(
            self,
            Opcode::Lb | Opcode::Lh | Opcode::Lw | Opcode::Lbu | Opcode::Lhu
        )
    }

    /// Check if this is a store opcode
    #[inline]
    pub const fn is_store(self) -> bool {
        matches!(self, Opcode::Sb | Opcode::Sh | Opcode::Sw)
    }

    /// Check if this is a conditional branch opcode (including REGIMM)
    #[inline]
    pub const fn is_branch(self) -> bool {
        matches!(
            self,
            Opcode::Beq | Opcode::Bne | Opcode::Blez | Opcode::Bgtz | Opcode::RegImm
        )
    }

    /// Check if this is a direct jump opcode
    #[inline]
    pub const fn is_jump(self) -> bool {
        matches!(self, Opcode::J | Opcode::Jal)
    }

    /// Check if this is an ALU-immediate opcode
    #[inline]
    pub const fn is_alu_immediate(self) -> bool {
        matches!(
            self,
            Opcode::Addi
                | Opcode::Addiu
                | Opcode::Slti
                | Opcode::Sltiu
                | Opcode::Andi
                | Opcode::Ori
                | Opcode::Xori
                | Opcode::Lui
        )
    }

    /// Check whether the opcode zero-extends its immediate
    ///
    /// ANDI/ORI/XORI are the only immediate forms with an unsigned
    /// immediate; everything else sign-extends.
    #[inline]
    pub const fn zero_extends_immediate(self) -> bool {
        matches!(self, Opcode::Andi | Opcode::Ori | Opcode::Xori)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Opcode::Special => "special",
            Opcode::RegImm => "regimm",
            Opcode::J => "j",
            Opcode::Jal => "jal",
            Opcode::Beq => "beq",
            Opcode::Bne => "bne",
            Opcode::Blez => "blez",
            Opcode::Bgtz => "bgtz",
            Opcode::Addi => "addi",
            Opcode::Addiu => "addiu",
            Opcode::Slti => "slti",
            Opcode::Sltiu => "sltiu",
            Opcode::Andi => "andi",
            Opcode::Ori => "ori",
            Opcode::Xori => "xori",
            Opcode::Lui => "lui",
            Opcode::Lb => "lb",
            Opcode::Lh => "lh",
            Opcode::Lw => "lw",
            Opcode::Lbu => "lbu",
            Opcode::Lhu => "lhu",
            Opcode::Sb => "sb",
            Opcode::Sh => "sh",
            Opcode::Sw => "sw",
        };
        write!(f, "{}", name)
    }
}

/// Function code for SPECIAL-opcode instructions (6 bits, bits `[5:0]`)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Funct {
    /// SLL: rd = rt << shamt
    Sll = 0x00,
    /// SRL: rd = rt >> shamt (logical)
    Srl = 0x02,
    /// SRA: rd = rt >> shamt (arithmetic)
    Sra = 0x03,
    /// SLLV: rd = rt << rs
    Sllv = 0x04,
    /// SRLV: rd = rt >> rs (logical)
    Srlv = 0x06,
    /// SRAV: rd = rt >> rs (arithmetic)
    Srav = 0x07,
    /// JR: PC = rs
    Jr = 0x08,
    /// JALR: rd = PC + 4; PC = rs
    Jalr = 0x09,
    /// ADD: rd = rs + rt
    Add = 0x20,
    /// ADDU: rd = rs + rt, no overflow trap
    Addu = 0x21,
    /// SUB: rd = rs - rt
    Sub = 0x22,
    /// SUBU: rd = rs - rt, no overflow trap
    Subu = 0x23,
    /// AND: rd = rs & rt
    And = 0x24,
    /// OR: rd = rs | rt
    Or = 0x25,
    /// XOR: rd = rs ^ rt
    Xor = 0x26,
    /// NOR: rd = !(rs | rt)
    Nor = 0x27,
    /// SLT: rd = (rs < rt) ? 1 : 0 (signed)
    Slt = 0x2A,
    /// SLTU: rd = (rs < rt) ? 1 : 0 (unsigned)
    Sltu = 0x2B,
}

impl Funct {
    /// Function field mask
    pub const MASK: u32 = 0x3F;

    /// Try to convert from a raw 6-bit field value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Funct::Sll),
            0x02 => Some(Funct::Srl),
            0x03 => Some(Funct::Sra),
            0x04 => Some(Funct::Sllv),
            0x06 => Some(Funct::Srlv),
            0x07 => Some(Funct::Srav),
            0x08 => Some(Funct::Jr),
            0x09 => Some(Funct::Jalr),
            0x20 => Some(Funct::Add),
            0x21 => Some(Funct::Addu),
            0x22 => Some(Funct::Sub),
            0x23 => Some(Funct::Subu),
            0x24 => Some(Funct::And),
            0x25 => Some(Funct::Or),
            0x26 => Some(Funct::Xor),
            0x27 => Some(Funct::Nor),
            0x2A => Some(Funct::Slt),
            0x2B => Some(Funct::Sltu),
            _ => None,
        }
    }

    /// Convert to the raw field value
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Check if this is a shift-by-shamt operation
    ///
    /// These take their shift amount from the shamt field instead of a
    /// register, which flips the ALU operand-A mux.
    #[inline]
    pub const fn is_shift_immediate(self) -> bool {
        matches!(self, Funct::Sll | Funct::Srl | Funct::Sra)
    }

    /// Check if this is a register-indirect jump
    #[inline]
    pub const fn is_jump_register(self) -> bool {
        matches!(self, Funct::Jr | Funct::Jalr)
    }
}

impl std::fmt::Display for Funct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Funct::Sll => "sll",
            Funct::Srl => "srl",
            Funct::Sra => "sra",
            Funct::Sllv => "sllv",
            Funct::Srlv => "srlv",
            Funct::Srav => "srav",
            Funct::Jr => "jr",
            Funct::Jalr => "jalr",
            Funct::Add => "add",
            Funct::Addu => "addu",
            Funct::Sub => "sub",
            Funct::Subu => "subu",
            Funct::And => "and",
            Funct::Or => "or",
            Funct::Xor => "xor",
            Funct::Nor => "nor",
            Funct::Slt => "slt",
            Funct::Sltu => "sltu",
        };
        write!(f, "{}", name)
    }
}

/// REGIMM sub-opcode, carried in the rt field (bits `[20:16]`)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegImmOp {
    /// BLTZ: branch if rs < 0 (signed)
    Bltz = 0x00,
    /// BGEZ: branch if rs >= 0 (signed)
    Bgez = 0x01,
}

impl RegImmOp {
    /// Try to convert from the raw rt field value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(RegImmOp::Bltz),
            0x01 => Some(RegImmOp::Bgez),
            _ => None,
        }
    }

    /// Convert to the raw rt field value
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for RegImmOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RegImmOp::Bltz => "bltz",
            RegImmOp::Bgez => "bgez",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_values() {
        assert_eq!(Opcode::Special.to_u8(), 0x00);
        assert_eq!(Opcode::RegImm.to_u8(), 0x01);
        assert_eq!(Opcode::J.to_u8(), 0x02);
        assert_eq!(Opcode::Beq.to_u8(), 0x04);
        assert_eq!(Opcode::Addi.to_u8(), 0x08);
        assert_eq!(Opcode::Lui.to_u8(), 0x0F);
        assert_eq!(Opcode::Lb.to_u8(), 0x20);
        assert_eq!(Opcode::Lw.to_u8(), 0x23);
        assert_eq!(Opcode::Sb.to_u8(), 0x28);
        assert_eq!(Opcode::Sw.to_u8(), 0x2B);
    }

    #[test]
    fn test_funct_values() {
        assert_eq!(Funct::Sll.to_u8(), 0x00);
        assert_eq!(Funct::Sra.to_u8(), 0x03);
        assert_eq!(Funct::Jr.to_u8(), 0x08);
        assert_eq!(Funct::Jalr.to_u8(), 0x09);
        assert_eq!(Funct::Add.to_u8(), 0x20);
        assert_eq!(Funct::Nor.to_u8(), 0x27);
        assert_eq!(Funct::Sltu.to_u8(), 0x2B);
    }

    #[test]
    fn test_opcode_from_u8() {
        assert_eq!(Opcode::from_u8(0x00), Some(Opcode::Special));
        assert_eq!(Opcode::from_u8(0x23), Some(Opcode::Lw));
        assert_eq!(Opcode::from_u8(0x2B), Some(Opcode::Sw));
        // Gaps in the assignment are not valid opcodes
        assert_eq!(Opcode::from_u8(0x10), None);
        assert_eq!(Opcode::from_u8(0x22), None);
        assert_eq!(Opcode::from_u8(0x3F), None);
    }

    #[test]
    fn test_funct_from_u8() {
        assert_eq!(Funct::from_u8(0x00), Some(Funct::Sll));
        assert_eq!(Funct::from_u8(0x2A), Some(Funct::Slt));
        assert_eq!(Funct::from_u8(0x01), None);
        assert_eq!(Funct::from_u8(0x3F), None);
    }

    #[test]
    fn test_regimm_from_u8() {
        assert_eq!(RegImmOp::from_u8(0x00), Some(RegImmOp::Bltz));
        assert_eq!(RegImmOp::from_u8(0x01), Some(RegImmOp::Bgez));
        assert_eq!(RegImmOp::from_u8(0x02), None);
    }

    #[test]
    fn test_opcode_from_instruction() {
        // addi $1, $0, 5 has op field 0x08
        let word = 0x08u32 << 26 | 0x0001_0005;
        assert_eq!(Opcode::from_instruction(word), Some(Opcode::Addi));

        let word = 0x2Bu32 << 26;
        assert_eq!(Opcode::from_instruction(word), Some(Opcode::Sw));
    }

    #[test]
    fn test_family_predicates() {
        assert!(Opcode::Lb.is_load());
        assert!(Opcode::Lhu.is_load());
        assert!(!Opcode::Sb.is_load());

        assert!(Opcode::Sw.is_store());
        assert!(!Opcode::Lw.is_store());

        assert!(Opcode::Beq.is_branch());
        assert!(Opcode::RegImm.is_branch());
        assert!(!Opcode::J.is_branch());

        assert!(Opcode::J.is_jump());
        assert!(Opcode::Jal.is_jump());

        assert!(Opcode::Addi.is_alu_immediate());
        assert!(Opcode::Lui.is_alu_immediate());
        assert!(!Opcode::Lw.is_alu_immediate());
    }

    #[test]
    fn test_immediate_extension_rule() {
        assert!(Opcode::Andi.zero_extends_immediate());
        assert!(Opcode::Ori.zero_extends_immediate());
        assert!(Opcode::Xori.zero_extends_immediate());
        assert!(!Opcode::Addi.zero_extends_immediate());
        assert!(!Opcode::Lw.zero_extends_immediate());
    }

    #[test]
    fn test_funct_predicates() {
        assert!(Funct::Sll.is_shift_immediate());
        assert!(Funct::Sra.is_shift_immediate());
        assert!(!Funct::Sllv.is_shift_immediate());

        assert!(Funct::Jr.is_jump_register());
        assert!(Funct::Jalr.is_jump_register());
        assert!(!Funct::Add.is_jump_register());
    }

    #[test]
    fn test_display_mnemonics() {
        assert_eq!(Opcode::Addiu.to_string(), "addiu");
        assert_eq!(Funct::Subu.to_string(), "subu");
        assert_eq!(RegImmOp::Bgez.to_string(), "bgez");
    }
}
