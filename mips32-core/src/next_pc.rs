//! Next-program-counter resolution
//!
//! Four candidates, fixed priority: register-indirect jump, then direct
//! jump, then taken conditional branch, else sequential. The target
//! formulas are architectural contracts: the sign-extension and
//! left-shift-by-2 give word alignment and a ±128KiB branch range
//! relative to the instruction after the branch.

use crate::extend::{extend, ImmExtend};

/// Branch target: `PC+4 + (sign_extend(imm16) << 2)`
#[inline]
pub fn branch_target(pc_plus4: u32, imm16: u32) -> u32 {
    pc_plus4.wrapping_add(extend(imm16, ImmExtend::Sign) << 2)
}

/// Jump target: high 4 bits of `PC+4` over `target26 << 2`
#[inline]
pub fn jump_target(pc_plus4: u32, target26: u32) -> u32 {
    (pc_plus4 & 0xF000_0000) | ((target26 & 0x03FF_FFFF) << 2)
}

/// Select the next PC from the four candidates
#[inline]
pub fn resolve(
    pc_plus4: u32,
    branch_t: u32,
    jump_t: u32,
    register_t: u32,
    branch: bool,
    jump: bool,
    jump_register: bool,
    branch_condition: bool,
) -> u32 {
    if jump_register {
        register_t
    } else if jump {
        jump_t
    } else if branch && branch_condition {
        branch_t
    } else {
        pc_plus4
    }
}
