//! # Instruction Encoding Constants and Helpers
//!
//! Field layout of the 32-bit instruction word, bit-exact MIPS-I:
//!
//! ```text
//! R-format: [op:6][rs:5][rt:5][rd:5][shamt:5][funct:6]
//! I-format: [op:6][rs:5][rt:5][imm:16]
//! J-format: [op:6][target:26]
//! ```
//!
//! The decomposition is purely positional; extraction never fails. The
//! `encode_*` helpers at the bottom build words for test programs.

use crate::opcode::{Funct, Opcode, RegImmOp};
use crate::register::Register;

// ============================================================================
// Bit Position Constants
// ============================================================================

/// Primary opcode field: bits 26-31 (6 bits)
pub const OP_SHIFT: u32 = 26;

/// First source register field: bits 21-25 (5 bits)
pub const RS_SHIFT: u32 = 21;

/// Second source / destination register field: bits 16-20 (5 bits)
pub const RT_SHIFT: u32 = 16;

/// R-format destination register field: bits 11-15 (5 bits)
pub const RD_SHIFT: u32 = 11;

/// Shift amount field: bits 6-10 (5 bits)
pub const SHAMT_SHIFT: u32 = 6;

// ============================================================================
// Field Masks
// ============================================================================

/// Opcode / funct field mask (6 bits)
pub const OP_MASK: u32 = 0x3F;

/// Register field mask (5 bits)
pub const REGISTER_MASK: u32 = 0x1F;

/// Immediate field mask (16 bits)
pub const IMM_MASK: u32 = 0xFFFF;

/// J-format target field mask (26 bits)
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

// ============================================================================
// Field Extraction Functions
// ============================================================================

/// Extract the primary opcode field (bits 26-31)
#[inline]
pub const fn extract_op(word: u32) -> u32 {
    (word >> OP_SHIFT) & OP_MASK
}

/// Extract the rs field (bits 21-25)
#[inline]
pub const fn extract_rs(word: u32) -> u32 {
    (word >> RS_SHIFT) & REGISTER_MASK
}

/// Extract the rt field (bits 16-20)
#[inline]
pub const fn extract_rt(word: u32) -> u32 {
    (word >> RT_SHIFT) & REGISTER_MASK
}

/// Extract the rd field (bits 11-15)
#[inline]
pub const fn extract_rd(word: u32) -> u32 {
    (word >> RD_SHIFT) & REGISTER_MASK
}

/// Extract the shift amount field (bits 6-10)
#[inline]
pub const fn extract_shamt(word: u32) -> u32 {
    (word >> SHAMT_SHIFT) & REGISTER_MASK
}

/// Extract the function code field (bits 0-5)
#[inline]
pub const fn extract_funct(word: u32) -> u32 {
    word & OP_MASK
}

/// Extract the 16-bit immediate field (bits 0-15)
#[inline]
pub const fn extract_imm16(word: u32) -> u32 {
    word & IMM_MASK
}

/// Extract the 16-bit immediate as a signed value
#[inline]
pub const fn extract_imm16_signed(word: u32) -> i32 {
    (word & IMM_MASK) as u16 as i16 as i32
}

/// Extract the 26-bit jump target field (bits 0-25)
#[inline]
pub const fn extract_target26(word: u32) -> u32 {
    word & TARGET_MASK
}

// ============================================================================
// Encode Helpers
// ============================================================================

/// Encode an R-format word
pub fn encode_r(funct: Funct, rs: Register, rt: Register, rd: Register, shamt: u32) -> u32 {
    (rs.index() as u32) << RS_SHIFT
        | (rt.index() as u32) << RT_SHIFT
        | (rd.index() as u32) << RD_SHIFT
        | (shamt & REGISTER_MASK) << SHAMT_SHIFT
        | funct.to_u8() as u32
}

/// Encode an I-format word
pub fn encode_i(op: Opcode, rs: Register, rt: Register, imm: u16) -> u32 {
    (op.to_u8() as u32) << OP_SHIFT
        | (rs.index() as u32) << RS_SHIFT
        | (rt.index() as u32) << RT_SHIFT
        | imm as u32
}

/// Encode a J-format word
pub fn encode_j(op: Opcode, target: u32) -> u32 {
    (op.to_u8() as u32) << OP_SHIFT | (target & TARGET_MASK)
}

// Mnemonic-level builders for test programs. Immediates are the raw 16-bit
// field value; use `as u16` on a signed offset.

pub fn addi(rt: Register, rs: Register, imm: i16) -> u32 {
    encode_i(Opcode::Addi, rs, rt, imm as u16)
}

pub fn addiu(rt: Register, rs: Register, imm: i16) -> u32 {
    encode_i(Opcode::Addiu, rs, rt, imm as u16)
}

pub fn slti(rt: Register, rs: Register, imm: i16) -> u32 {
    encode_i(Opcode::Slti, rs, rt, imm as u16)
}

pub fn sltiu(rt: Register, rs: Register, imm: i16) -> u32 {
    encode_i(Opcode::Sltiu, rs, rt, imm as u16)
}

pub fn andi(rt: Register, rs: Register, imm: u16) -> u32 {
    encode_i(Opcode::Andi, rs, rt, imm)
}

pub fn ori(rt: Register, rs: Register, imm: u16) -> u32 {
    encode_i(Opcode::Ori, rs, rt, imm)
}

pub fn xori(rt: Register, rs: Register, imm: u16) -> u32 {
    encode_i(Opcode::Xori, rs, rt, imm)
}

pub fn lui(rt: Register, imm: u16) -> u32 {
    encode_i(Opcode::Lui, Register::ZERO, rt, imm)
}

pub fn add(rd: Register, rs: Register, rt: Register) -> u32 {
    encode_r(Funct::Add, rs, rt, rd, 0)
}

pub fn addu(rd: Register, rs: Register, rt: Register) -> u32 {
    encode_r(Funct::Addu, rs, rt, rd, 0)
}

pub fn sub(rd: Register, rs: Register, rt: Register) -> u32 {
    encode_r(Funct::Sub, rs, rt, rd, 0)
}

pub fn and(rd: Register, rs: Register, rt: Register) -> u32 {
    encode_r(Funct::And, rs, rt, rd, 0)
}

pub fn or(rd: Register, rs: Register, rt: Register) -> u32 {
    encode_r(Funct::Or, rs, rt, rd, 0)
}

pub fn xor(rd: Register, rs: Register, rt: Register) -> u32 {
    encode_r(Funct::Xor, rs, rt, rd, 0)
}

pub fn nor(rd: Register, rs: Register, rt: Register) -> u32 {
    encode_r(Funct::Nor, rs, rt, rd, 0)
}

pub fn slt(rd: Register, rs: Register, rt: Register) -> u32 {
    encode_r(Funct::Slt, rs, rt, rd, 0)
}

pub fn sltu(rd: Register, rs: Register, rt: Register) -> u32 {
    encode_r(Funct::Sltu, rs, rt, rd, 0)
}

pub fn sll(rd: Register, rt: Register, shamt: u32) -> u32 {
    encode_r(Funct::Sll, Register::ZERO, rt, rd, shamt)
}

pub fn srl(rd: Register, rt: Register, shamt: u32) -> u32 {
    encode_r(Funct::Srl, Register::ZERO, rt, rd, shamt)
}

pub fn sra(rd: Register, rt: Register, shamt: u32) -> u32 {
    encode_r(Funct::Sra, Register::ZERO, rt, rd, shamt)
}

pub fn sllv(rd: Register, rt: Register, rs: Register) -> u32 {
    encode_r(Funct::Sllv, rs, rt, rd, 0)
}

pub fn srlv(rd: Register, rt: Register, rs: Register) -> u32 {
    encode_r(Funct::Srlv, rs, rt, rd, 0)
}

pub fn srav(rd: Register, rt: Register, rs: Register) -> u32 {
    encode_r(Funct::Srav, rs, rt, rd, 0)
}

pub fn jr(rs: Register) -> u32 {
    encode_r(Funct::Jr, rs, Register::ZERO, Register::ZERO, 0)
}

pub fn jalr(rd: Register, rs: Register) -> u32 {
    encode_r(Funct::Jalr, rs, Register::ZERO, rd, 0)
}

pub fn beq(rs: Register, rt: Register, offset: i16) -> u32 {
    encode_i(Opcode::Beq, rs, rt, offset as u16)
}

pub fn bne(rs: Register, rt: Register, offset: i16) -> u32 {
    encode_i(Opcode::Bne, rs, rt, offset as u16)
}

pub fn blez(rs: Register, offset: i16) -> u32 {
    encode_i(Opcode::Blez, rs, Register::ZERO, offset as u16)
}

pub fn bgtz(rs: Register, offset: i16) -> u32 {
    encode_i(Opcode::Bgtz, rs, Register::ZERO, offset as u16)
}

pub fn bltz(rs: Register, offset: i16) -> u32 {
    encode_i(
        Opcode::RegImm,
        rs,
        Register::from_field(RegImmOp::Bltz.to_u8() as u32),
        offset as u16,
    )
}

pub fn bgez(rs: Register, offset: i16) -> u32 {
    encode_i(
        Opcode::RegImm,
        rs,
        Register::from_field(RegImmOp::Bgez.to_u8() as u32),
        offset as u16,
    )
}

pub fn j(target: u32) -> u32 {
    encode_j(Opcode::J, target)
}

pub fn jal(target: u32) -> u32 {
    encode_j(Opcode::Jal, target)
}

pub fn lb(rt: Register, rs: Register, offset: i16) -> u32 {
    encode_i(Opcode::Lb, rs, rt, offset as u16)
}

pub fn lh(rt: Register, rs: Register, offset: i16) -> u32 {
    encode_i(Opcode::Lh, rs, rt, offset as u16)
}

pub fn lw(rt: Register, rs: Register, offset: i16) -> u32 {
    encode_i(Opcode::Lw, rs, rt, offset as u16)
}

pub fn lbu(rt: Register, rs: Register, offset: i16) -> u32 {
    encode_i(Opcode::Lbu, rs, rt, offset as u16)
}

pub fn lhu(rt: Register, rs: Register, offset: i16) -> u32 {
    encode_i(Opcode::Lhu, rs, rt, offset as u16)
}

pub fn sb(rt: Register, rs: Register, offset: i16) -> u32 {
    encode_i(Opcode::Sb, rs, rt, offset as u16)
}

pub fn sh(rt: Register, rs: Register, offset: i16) -> u32 {
    encode_i(Opcode::Sh, rs, rt, offset as u16)
}

pub fn sw(rt: Register, rs: Register, offset: i16) -> u32 {
    encode_i(Opcode::Sw, rs, rt, offset as u16)
}

/// `sll $zero, $zero, 0` — the canonical no-op
pub fn nop() -> u32 {
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_field_extraction_roundtrip() {
        let word = encode_r(Funct::Add, Register::T0, Register::T1, Register::T2, 0);
        assert_eq!(extract_op(word), 0x00);
        assert_eq!(extract_rs(word), 8);
        assert_eq!(extract_rt(word), 9);
        assert_eq!(extract_rd(word), 10);
        assert_eq!(extract_shamt(word), 0);
        assert_eq!(extract_funct(word), 0x20);
    }

    #[test]
    fn test_i_format_fields() {
        let word = addi(Register::T0, Register::ZERO, -1);
        assert_eq!(extract_op(word), 0x08);
        assert_eq!(extract_rs(word), 0);
        assert_eq!(extract_rt(word), 8);
        assert_eq!(extract_imm16(word), 0xFFFF);
        assert_eq!(extract_imm16_signed(word), -1);
    }

    #[test]
    fn test_j_format_fields() {
        let word = j(0x0100);
        assert_eq!(extract_op(word), 0x02);
        assert_eq!(extract_target26(word), 0x0100);

        // Target field saturates at 26 bits
        let word = jal(0xFFFF_FFFF);
        assert_eq!(extract_op(word), 0x03);
        assert_eq!(extract_target26(word), TARGET_MASK);
    }

    #[test]
    fn test_shift_encoding() {
        let word = sll(Register::T0, Register::T1, 4);
        assert_eq!(extract_op(word), 0x00);
        assert_eq!(extract_rs(word), 0);
        assert_eq!(extract_rt(word), 9);
        assert_eq!(extract_rd(word), 8);
        assert_eq!(extract_shamt(word), 4);
        assert_eq!(extract_funct(word), 0x00);
    }

    #[test]
    fn test_regimm_encoding() {
        let word = bltz(Register::T0, -4);
        assert_eq!(extract_op(word), 0x01);
        assert_eq!(extract_rs(word), 8);
        assert_eq!(extract_rt(word), 0x00);

        let word = bgez(Register::T0, 2);
        assert_eq!(extract_rt(word), 0x01);
        assert_eq!(extract_imm16_signed(word), 2);
    }

    #[test]
    fn test_nop_is_all_zero() {
        assert_eq!(nop(), 0);
        assert_eq!(extract_funct(nop()), Funct::Sll.to_u8() as u32);
    }

    #[test]
    fn test_signed_immediate_extraction() {
        assert_eq!(extract_imm16_signed(0x0000_8000), -32768);
        assert_eq!(extract_imm16_signed(0x0000_7FFF), 32767);
        assert_eq!(extract_imm16_signed(0xFFFF_0000), 0);
    }

    proptest! {
        #[test]
        fn prop_r_format_fields_roundtrip(
            rs in 0usize..32,
            rt in 0usize..32,
            rd in 0usize..32,
            shamt in 0u32..32,
        ) {
            let word = encode_r(
                Funct::Add,
                Register::from_index(rs).unwrap(),
                Register::from_index(rt).unwrap(),
                Register::from_index(rd).unwrap(),
                shamt,
            );
            prop_assert_eq!(extract_rs(word), rs as u32);
            prop_assert_eq!(extract_rt(word), rt as u32);
            prop_assert_eq!(extract_rd(word), rd as u32);
            prop_assert_eq!(extract_shamt(word), shamt);
            prop_assert_eq!(extract_funct(word), Funct::Add.to_u8() as u32);
        }

        #[test]
        fn prop_i_format_immediate_roundtrips(imm: u16) {
            let word = encode_i(Opcode::Addi, Register::T0, Register::T1, imm);
            prop_assert_eq!(extract_imm16(word), imm as u32);
            prop_assert_eq!(extract_imm16_signed(word), imm as i16 as i32);
        }

        #[test]
        fn prop_j_format_target_roundtrips(target in 0u32..=TARGET_MASK) {
            let word = encode_j(Opcode::J, target);
            prop_assert_eq!(extract_target26(word), target);
            prop_assert_eq!(extract_op(word), Opcode::J.to_u8() as u32);
        }

        #[test]
        fn prop_extraction_is_total_and_masked(word: u32) {
            // Every extractor stays within its field width for any word
            prop_assert!(extract_op(word) <= OP_MASK);
            prop_assert!(extract_rs(word) <= REGISTER_MASK);
            prop_assert!(extract_rt(word) <= REGISTER_MASK);
            prop_assert!(extract_rd(word) <= REGISTER_MASK);
            prop_assert!(extract_shamt(word) <= REGISTER_MASK);
            prop_assert!(extract_funct(word) <= OP_MASK);
            prop_assert!(extract_imm16(word) <= IMM_MASK);
            prop_assert!(extract_target26(word) <= TARGET_MASK);
        }
    }
}
