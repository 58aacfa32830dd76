//! Immediate widening
//!
//! Pure functions; no state, no failure paths. The upper-immediate path
//! (LUI) shifts the 16-bit field into the high half before extension, at
//! which point the extension mode is irrelevant — the low half is zero
//! either way.

use serde::{Deserialize, Serialize};

/// How a 16-bit immediate widens to the native word
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImmExtend {
    /// Replicate bit 15 into the upper half
    Sign,
    /// Fill the upper half with zeros
    Zero,
}

/// Widen a 16-bit immediate to 32 bits
#[inline]
pub fn extend(imm16: u32, mode: ImmExtend) -> u32 {
    let imm16 = imm16 & 0xFFFF;
    match mode {
        ImmExtend::Sign => imm16 as u16 as i16 as i32 as u32,
        ImmExtend::Zero => imm16,
    }
}

/// Widen with the optional upper-immediate shift applied first
#[inline]
pub fn extend_with_upper(imm16: u32, mode: ImmExtend, upper: bool) -> u32 {
    if upper {
        (imm16 & 0xFFFF) << 16
    } else {
        extend(imm16, mode)
    }
}
