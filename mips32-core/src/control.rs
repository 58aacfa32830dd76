//! Control unit
//!
//! `decode` is a pure, total function from a 32-bit encoding to the
//! control-signal vector steering one cycle of the datapath. Primary
//! dispatch is on the 6-bit opcode; the SPECIAL opcode dispatches again on
//! the function code, and REGIMM picks its sub-operation from the rt
//! field, which for that family encodes a sub-opcode rather than a
//! register.
//!
//! Unrecognized encodings are not errors. They decode to
//! [`ControlVector::NOP`], a single documented all-safe default: no
//! register write, no memory access, no PC redirect. The source design's
//! "don't-care" outputs are deliberately not reproduced — no path here
//! asserts a write enable alongside an undefined destination.

use crate::alu::AluOp;
use crate::extend::ImmExtend;
use crate::load::LoadKind;
use mips32_isa::{Funct, Instruction, Opcode, RegImmOp};
use serde::{Deserialize, Serialize};

/// Which instruction field names the write-back destination
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegDst {
    /// I-format destination (rt field)
    Rt,
    /// R-format destination (rd field)
    Rd,
    /// The fixed link register, $ra
    Link,
}

/// Source of the ALU's second operand
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AluSrc {
    /// The rt register value
    Register,
    /// The extended immediate
    Immediate,
}

/// Source of the value written back to the register bank
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WbSrc {
    /// The ALU result
    Alu,
    /// Memory data (through the load extractor where enabled)
    Mem,
    /// The sequential PC + 4, for link instructions
    LinkPc,
}

/// Memory access granularity
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessWidth {
    Byte,
    Half,
    Word,
}

impl AccessWidth {
    /// Required address alignment in bytes
    #[inline]
    pub const fn alignment(self) -> u32 {
        match self {
            AccessWidth::Byte => 1,
            AccessWidth::Half => 2,
            AccessWidth::Word => 4,
        }
    }
}

/// The full decode product for one cycle
///
/// Ephemeral: produced anew each cycle from the encoding alone and
/// consumed within the same cycle. Identical encodings always produce
/// identical vectors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlVector {
    /// Destination-register selection policy
    pub reg_dst: RegDst,
    /// ALU operand-B mux
    pub alu_src: AluSrc,
    /// Write-back data mux
    pub wb_src: WbSrc,
    /// Register-write enable
    pub reg_write: bool,
    /// Memory-read enable
    pub mem_read: bool,
    /// Memory-write enable
    pub mem_write: bool,
    /// Operation selector forwarded to the ALU
    pub alu_op: AluOp,
    /// Conditional-branch flag
    pub branch: bool,
    /// Direct-jump flag
    pub jump: bool,
    /// Register-indirect-jump flag
    pub jump_register: bool,
    /// Immediate widening mode
    pub imm_ext: ImmExtend,
    /// Shift the immediate into the upper half before extension (LUI)
    pub upper_imm: bool,
    /// Access width for memory operations
    pub width: AccessWidth,
    /// Load lane-select and widening sub-type
    pub load_kind: LoadKind,
    /// Route the load result through the load extractor
    pub extract_load: bool,
    /// ALU operand A is the zero-extended shamt field, not a register
    pub shamt_operand: bool,
}

impl ControlVector {
    /// The all-safe default vector
    ///
    /// Every selector holds a harmless value and every enable is off; an
    /// instruction decoded to this vector spends its cycle advancing PC
    /// by 4 and nothing else.
    pub const NOP: ControlVector = ControlVector {
        reg_dst: RegDst::Rd,
        alu_src: AluSrc::Register,
        wb_src: WbSrc::Alu,
        reg_write: false,
        mem_read: false,
        mem_write: false,
        alu_op: AluOp::Add,
        branch: false,
        jump: false,
        jump_register: false,
        imm_ext: ImmExtend::Sign,
        upper_imm: false,
        width: AccessWidth::Word,
        load_kind: LoadKind::Word,
        extract_load: false,
        shamt_operand: false,
    };
}

impl Default for ControlVector {
    fn default() -> Self {
        Self::NOP
    }
}

/// Decode one instruction encoding into its control vector
///
/// Total over all 2^32 encodings and free of hidden state.
pub fn decode(inst: Instruction) -> ControlVector {
    let Some(op) = inst.op() else {
        return ControlVector::NOP;
    };

    match op {
        Opcode::Special => decode_special(inst),
        Opcode::RegImm => decode_regimm(inst),

        Opcode::J => ControlVector {
            jump: true,
            ..ControlVector::NOP
        },
        Opcode::Jal => ControlVector {
            jump: true,
            reg_write: true,
            reg_dst: RegDst::Link,
            wb_src: WbSrc::LinkPc,
            ..ControlVector::NOP
        },

        Opcode::Beq => branch_vector(AluOp::CmpEq),
        Opcode::Bne => branch_vector(AluOp::CmpNe),
        Opcode::Blez => branch_vector(AluOp::CmpLez),
        Opcode::Bgtz => branch_vector(AluOp::CmpGtz),

        Opcode::Addi | Opcode::Addiu => imm_vector(AluOp::Add, ImmExtend::Sign),
        Opcode::Slti => imm_vector(AluOp::Slt, ImmExtend::Sign),
        Opcode::Sltiu => imm_vector(AluOp::Sltu, ImmExtend::Sign),
        Opcode::Andi => imm_vector(AluOp::And, ImmExtend::Zero),
        Opcode::Ori => imm_vector(AluOp::Or, ImmExtend::Zero),
        Opcode::Xori => imm_vector(AluOp::Xor, ImmExtend::Zero),
        // LUI encodings carry rs = 0, so operand A contributes nothing
        Opcode::Lui => ControlVector {
            upper_imm: true,
            ..imm_vector(AluOp::Add, ImmExtend::Zero)
        },

        Opcode::Lb => load_vector(AccessWidth::Byte, LoadKind::ByteSigned),
        Opcode::Lbu => load_vector(AccessWidth::Byte, LoadKind::ByteUnsigned),
        Opcode::Lh => load_vector(AccessWidth::Half, LoadKind::HalfSigned),
        Opcode::Lhu => load_vector(AccessWidth::Half, LoadKind::HalfUnsigned),
        Opcode::Lw => ControlVector {
            extract_load: false,
            ..load_vector(AccessWidth::Word, LoadKind::Word)
        },

        Opcode::Sb => store_vector(AccessWidth::Byte),
        Opcode::Sh => store_vector(AccessWidth::Half),
        Opcode::Sw => store_vector(AccessWidth::Word),
    }
}

fn decode_special(inst: Instruction) -> ControlVector {
    let Some(funct) = inst.funct() else {
        return ControlVector::NOP;
    };

    match funct {
        Funct::Sll => shift_vector(AluOp::Sll, true),
        Funct::Srl => shift_vector(AluOp::Srl, true),
        Funct::Sra => shift_vector(AluOp::Sra, true),
        Funct::Sllv => shift_vector(AluOp::Sll, false),
        Funct::Srlv => shift_vector(AluOp::Srl, false),
        Funct::Srav => shift_vector(AluOp::Sra, false),

        Funct::Jr => ControlVector {
            jump_register: true,
            ..ControlVector::NOP
        },
        Funct::Jalr => ControlVector {
            jump_register: true,
            reg_write: true,
            reg_dst: RegDst::Rd,
            wb_src: WbSrc::LinkPc,
            ..ControlVector::NOP
        },

        Funct::Add | Funct::Addu => rtype_vector(AluOp::Add),
        Funct::Sub | Funct::Subu => rtype_vector(AluOp::Sub),
        Funct::And => rtype_vector(AluOp::And),
        Funct::Or => rtype_vector(AluOp::Or),
        Funct::Xor => rtype_vector(AluOp::Xor),
        Funct::Nor => rtype_vector(AluOp::Nor),
        Funct::Slt => rtype_vector(AluOp::Slt),
        Funct::Sltu => rtype_vector(AluOp::Sltu),
    }
}

fn decode_regimm(inst: Instruction) -> ControlVector {
    match inst.regimm_op() {
        Some(RegImmOp::Bltz) => branch_vector(AluOp::CmpLtz),
        Some(RegImmOp::Bgez) => branch_vector(AluOp::CmpGez),
        None => ControlVector::NOP,
    }
}

fn rtype_vector(alu_op: AluOp) -> ControlVector {
    ControlVector {
        reg_write: true,
        reg_dst: RegDst::Rd,
        alu_src: AluSrc::Register,
        wb_src: WbSrc::Alu,
        alu_op,
        ..ControlVector::NOP
    }
}

fn shift_vector(alu_op: AluOp, shamt_operand: bool) -> ControlVector {
    ControlVector {
        shamt_operand,
        ..rtype_vector(alu_op)
    }
}

fn imm_vector(alu_op: AluOp, imm_ext: ImmExtend) -> ControlVector {
    ControlVector {
        reg_write: true,
        reg_dst: RegDst::Rt,
        alu_src: AluSrc::Immediate,
        wb_src: WbSrc::Alu,
        alu_op,
        imm_ext,
        ..ControlVector::NOP
    }
}

fn branch_vector(alu_op: AluOp) -> ControlVector {
    ControlVector {
        branch: true,
        alu_op,
        ..ControlVector::NOP
    }
}

fn load_vector(width: AccessWidth, load_kind: LoadKind) -> ControlVector {
    ControlVector {
        reg_write: true,
        reg_dst: RegDst::Rt,
        alu_src: AluSrc::Immediate,
        wb_src: WbSrc::Mem,
        mem_read: true,
        alu_op: AluOp::Add,
        imm_ext: ImmExtend::Sign,
        width,
        load_kind,
        extract_load: true,
        ..ControlVector::NOP
    }
}

fn store_vector(width: AccessWidth) -> ControlVector {
    ControlVector {
        mem_write: true,
        alu_src: AluSrc::Immediate,
        alu_op: AluOp::Add,
        imm_ext: ImmExtend::Sign,
        width,
        ..ControlVector::NOP
    }
}
