//! Fetched instruction word with positional field views
//!
//! An [`Instruction`] is the immutable 32-bit encoding fetched each cycle.
//! Field accessors are pure bit extraction; no validation happens here. The
//! control unit decides what the fields mean, including the encodings it
//! does not recognize.

use crate::encoding;
use crate::opcode::{Funct, Opcode, RegImmOp};
use crate::register::Register;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One fetched 32-bit instruction encoding
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instruction(pub u32);

impl Instruction {
    /// The raw encoding
    #[inline]
    pub const fn word(self) -> u32 {
        self.0
    }

    /// Primary opcode field, decoded where recognized
    #[inline]
    pub fn op(self) -> Option<Opcode> {
        Opcode::from_u8(encoding::extract_op(self.0) as u8)
    }

    /// Function code field, decoded where recognized
    #[inline]
    pub fn funct(self) -> Option<Funct> {
        Funct::from_u8(encoding::extract_funct(self.0) as u8)
    }

    /// REGIMM sub-opcode carried in the rt field
    #[inline]
    pub fn regimm_op(self) -> Option<RegImmOp> {
        RegImmOp::from_u8(encoding::extract_rt(self.0) as u8)
    }

    /// First source register
    #[inline]
    pub fn rs(self) -> Register {
        Register::from_field(encoding::extract_rs(self.0))
    }

    /// Second source register (destination for I-format)
    #[inline]
    pub fn rt(self) -> Register {
        Register::from_field(encoding::extract_rt(self.0))
    }

    /// R-format destination register
    #[inline]
    pub fn rd(self) -> Register {
        Register::from_field(encoding::extract_rd(self.0))
    }

    /// Shift amount field
    #[inline]
    pub fn shamt(self) -> u32 {
        encoding::extract_shamt(self.0)
    }

    /// 16-bit immediate field, raw
    #[inline]
    pub fn imm16(self) -> u32 {
        encoding::extract_imm16(self.0)
    }

    /// 16-bit immediate field, signed view
    #[inline]
    pub fn imm16_signed(self) -> i32 {
        encoding::extract_imm16_signed(self.0)
    }

    /// 26-bit jump target field
    #[inline]
    pub fn target26(self) -> u32 {
        encoding::extract_target26(self.0)
    }

    /// Mnemonic for the encoding, where one exists
    fn mnemonic(self) -> Option<String> {
        match self.op()? {
            Opcode::Special => Some(self.funct()?.to_string()),
            Opcode::RegImm => Some(self.regimm_op()?.to_string()),
            op => Some(op.to_string()),
        }
    }
}

impl From<u32> for Instruction {
    fn from(word: u32) -> Self {
        Instruction(word)
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mnemonic() {
            Some(m) => write!(f, "Instruction({:#010x} {})", self.0, m),
            None => write!(f, "Instruction({:#010x} ?)", self.0),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mnemonic() {
            Some(m) => write!(f, "{}", m),
            None => write!(f, ".word {:#010x}", self.0),
        }
    }
}
