//! Arithmetic/logic/compare unit
//!
//! A pure function of the operation selector and two word operands. Every
//! call computes both a word result and a branch-condition flag; the flag
//! is meaningful only for the compare selectors and it is the next-PC
//! resolver's job to ignore it otherwise.
//!
//! Trapping and non-trapping add/sub are identical here — there is no
//! overflow trap at this abstraction level, so ADD/ADDU and SUB/SUBU both
//! map to the same wrapping selector.

use serde::{Deserialize, Serialize};

/// ALU operation selector
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AluOp {
    /// Wrapping addition (ADD, ADDU, address generation)
    Add,
    /// Wrapping subtraction (SUB, SUBU)
    Sub,
    And,
    Or,
    Xor,
    Nor,
    /// Signed less-than, result 0 or 1
    Slt,
    /// Unsigned less-than, result 0 or 1
    Sltu,
    /// Logical left shift by `a & 0x1F`
    Sll,
    /// Logical right shift by `a & 0x1F`
    Srl,
    /// Arithmetic right shift by `a & 0x1F`
    Sra,
    /// Branch compare: a == b
    CmpEq,
    /// Branch compare: a != b
    CmpNe,
    /// Branch compare: a <= 0 (signed)
    CmpLez,
    /// Branch compare: a > 0 (signed)
    CmpGtz,
    /// Branch compare: a < 0 (signed)
    CmpLtz,
    /// Branch compare: a >= 0 (signed)
    CmpGez,
}

/// Word result plus the branch-condition flag, valid for one cycle
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AluOutput {
    pub result: u32,
    pub branch: bool,
}

/// Execute one operation on two word operands
///
/// For the shift selectors `a` is the shift amount and `b` the value being
/// shifted, matching the datapath's operand-A mux. For the compare
/// selectors the result is the difference, which no write-back path
/// consumes.
pub fn execute(op: AluOp, a: u32, b: u32) -> AluOutput {
    let (result, branch) = match op {
        AluOp::Add => (a.wrapping_add(b), false),
        AluOp::Sub => (a.wrapping_sub(b), false),
        AluOp::And => (a & b, false),
        AluOp::Or => (a | b, false),
        AluOp::Xor => (a ^ b, false),
        AluOp::Nor => (!(a | b), false),
        AluOp::Slt => (((a as i32) < (b as i32)) as u32, false),
        AluOp::Sltu => ((a < b) as u32, false),
        AluOp::Sll => (b.wrapping_shl(a & 0x1F), false),
        AluOp::Srl => (b.wrapping_shr(a & 0x1F), false),
        AluOp::Sra => (((b as i32).wrapping_shr(a & 0x1F)) as u32, false),
        AluOp::CmpEq => (a.wrapping_sub(b), a == b),
        AluOp::CmpNe => (a.wrapping_sub(b), a != b),
        AluOp::CmpLez => (a, (a as i32) <= 0),
        AluOp::CmpGtz => (a, (a as i32) > 0),
        AluOp::CmpLtz => (a, (a as i32) < 0),
        AluOp::CmpGez => (a, (a as i32) >= 0),
    };
    AluOutput { result, branch }
}
