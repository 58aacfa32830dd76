//! Cross-module interaction tests
//!
//! Tests the seams between the ISA crate and the core: encodings built by
//! the helpers must decode to consistent fields, control vectors, and
//! datapath behavior.

use mips32_core::{alu, control, AluSrc, RegDst, WbSrc};
use mips32_isa::{encoding, Funct, Instruction, Opcode, Register};

// ============================================================================
// Encoding -> Field Accessors
// ============================================================================

#[test]
fn test_encoded_rtype_fields_roundtrip() {
    let inst = Instruction(encoding::sub(Register::T2, Register::T0, Register::T1));
    assert_eq!(inst.op(), Some(Opcode::Special));
    assert_eq!(inst.funct(), Some(Funct::Sub));
    assert_eq!(inst.rs(), Register::T0);
    assert_eq!(inst.rt(), Register::T1);
    assert_eq!(inst.rd(), Register::T2);
}

#[test]
fn test_encoded_itype_fields_roundtrip() {
    let inst = Instruction(encoding::lw(Register::T0, Register::SP, -8));
    assert_eq!(inst.op(), Some(Opcode::Lw));
    assert_eq!(inst.rs(), Register::SP);
    assert_eq!(inst.rt(), Register::T0);
    assert_eq!(inst.imm16_signed(), -8);
    assert_eq!(inst.imm16(), 0xFFF8);
}

#[test]
fn test_encoded_jtype_fields_roundtrip() {
    let inst = Instruction(encoding::jal(0x0012_3456));
    assert_eq!(inst.op(), Some(Opcode::Jal));
    assert_eq!(inst.target26(), 0x0012_3456);
}

// ============================================================================
// Encoding -> Control -> ALU Consistency
// ============================================================================

#[test]
fn test_every_alu_immediate_opcode_maps_to_its_operation() {
    let cases: [(u32, alu::AluOp); 6] = [
        (encoding::addi(Register::T0, Register::T1, 1), alu::AluOp::Add),
        (encoding::slti(Register::T0, Register::T1, 1), alu::AluOp::Slt),
        (encoding::sltiu(Register::T0, Register::T1, 1), alu::AluOp::Sltu),
        (encoding::andi(Register::T0, Register::T1, 1), alu::AluOp::And),
        (encoding::ori(Register::T0, Register::T1, 1), alu::AluOp::Or),
        (encoding::xori(Register::T0, Register::T1, 1), alu::AluOp::Xor),
    ];
    for (word, expected) in cases {
        let v = control::decode(Instruction(word));
        assert_eq!(v.alu_op, expected, "word {:#010x}", word);
        assert_eq!(v.alu_src, AluSrc::Immediate);
        assert!(v.reg_write);
        assert_eq!(v.reg_dst, RegDst::Rt);
    }
}

#[test]
fn test_branch_comparators_agree_with_alu() {
    // Decode picks the comparator; the ALU must report the condition the
    // mnemonic promises
    let beq = control::decode(Instruction(encoding::beq(Register::T0, Register::T1, 0)));
    assert!(alu::execute(beq.alu_op, 5, 5).branch);
    assert!(!alu::execute(beq.alu_op, 5, 6).branch);

    let bne = control::decode(Instruction(encoding::bne(Register::T0, Register::T1, 0)));
    assert!(alu::execute(bne.alu_op, 5, 6).branch);

    let blez = control::decode(Instruction(encoding::blez(Register::T0, 0)));
    assert!(alu::execute(blez.alu_op, 0, 0).branch);
    assert!(alu::execute(blez.alu_op, (-1i32) as u32, 0).branch);
    assert!(!alu::execute(blez.alu_op, 1, 0).branch);

    let bgtz = control::decode(Instruction(encoding::bgtz(Register::T0, 0)));
    assert!(alu::execute(bgtz.alu_op, 1, 0).branch);
    assert!(!alu::execute(bgtz.alu_op, 0, 0).branch);

    let bltz = control::decode(Instruction(encoding::bltz(Register::T0, 0)));
    assert!(alu::execute(bltz.alu_op, (-1i32) as u32, 0).branch);
    assert!(!alu::execute(bltz.alu_op, 0, 0).branch);

    let bgez = control::decode(Instruction(encoding::bgez(Register::T0, 0)));
    assert!(alu::execute(bgez.alu_op, 0, 0).branch);
    assert!(!alu::execute(bgez.alu_op, (-1i32) as u32, 0).branch);
}

#[test]
fn test_link_instructions_write_pc_plus_4() {
    let jal = control::decode(Instruction(encoding::jal(0x100)));
    assert_eq!(jal.wb_src, WbSrc::LinkPc);
    assert_eq!(jal.reg_dst, RegDst::Link);

    let jalr = control::decode(Instruction(encoding::jalr(Register::T0, Register::T1)));
    assert_eq!(jalr.wb_src, WbSrc::LinkPc);
    assert_eq!(jalr.reg_dst, RegDst::Rd);
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_instruction_display_uses_mnemonics() {
    let inst = Instruction(encoding::add(Register::T2, Register::T0, Register::T1));
    assert!(inst.to_string().starts_with("add"));

    let inst = Instruction(encoding::lw(Register::T0, Register::SP, 4));
    assert!(inst.to_string().starts_with("lw"));

    // Unrecognized encodings fall back to a raw word
    let inst = Instruction(0xFFFF_FFFF);
    assert!(inst.to_string().contains("0xffffffff"));
}

#[test]
fn test_register_display_names() {
    assert_eq!(Register::T0.to_string(), "$t0");
    assert_eq!(Register::SP.to_string(), "$sp");
    assert_eq!(Register::ZERO.to_string(), "$zero");
}
