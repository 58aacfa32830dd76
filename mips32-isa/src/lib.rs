//! # MIPS32 Subset Instruction Set Definitions
//!
//! Bit-exact definitions for a practical MIPS-I subset: arithmetic,
//! logical, shift, byte/halfword/word loads and stores, signed/unsigned
//! comparisons, conditional branches, and direct/indirect jumps.
//!
//! ## Key Features
//! - 32-bit instruction words in the standard R/I/J field layout
//! - Standard MIPS-I opcode and function-code assignments
//! - 32 general-purpose registers with O32 names, `$zero` hardwired
//! - Positional field extraction (total; never fails)
//! - Encode helpers for building binary test programs
//!
//! The execution semantics live in the `mips32-core` crate; this crate is
//! the shared vocabulary between the core and anything that produces or
//! inspects encodings.

pub mod encoding;
pub mod instruction;
pub mod opcode;
pub mod register;

pub use instruction::Instruction;
pub use opcode::{Funct, Opcode, RegImmOp};
pub use register::{Register, NUM_REGISTERS};

/// Word size in bytes
pub const WORD_BYTES: u32 = 4;

/// Native word type
pub type Word = u32;

/// Byte address type
pub type Address = u32;

/// Signed view of a native word
pub type SWord = i32;
