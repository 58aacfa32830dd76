//! # MIPS32 Execution Core
//!
//! Single-cycle execution core for a 32-bit MIPS-I subset.
//!
//! One architectural instruction completes per clock tick: no pipeline, no
//! hazards, exactly one instruction in flight. The crate mirrors the
//! datapath of the hardware design it models:
//!
//! - **Control unit** ([`control`]): total, pure decode from a 32-bit
//!   encoding to the cycle's control-signal vector
//! - **ALU** ([`alu`]): arithmetic, logic, shifts, and the branch-condition
//!   comparators
//! - **Immediate extension** ([`extend`]): sign / zero / upper-immediate
//!   widening of the 16-bit field
//! - **Address-space router** ([`memory`]): 4 MiB RAM window plus a 16-byte
//!   memory-mapped serial device window
//! - **Load extractor** ([`load`]): byte/half lane selection and widening
//! - **Next-PC logic** ([`next_pc`]): sequential / branch / jump / register
//!   target resolution with a fixed priority
//! - **Cycle orchestrator** ([`processor`]): the architectural state and
//!   the tick engine tying the pieces together
//!
//! ## Example
//!
//! ```rust
//! use mips32_core::{Processor, ProcessorConfig};
//! use mips32_isa::{encoding, Register};
//!
//! let program = vec![
//!     encoding::addi(Register::T0, Register::ZERO, 40),
//!     encoding::addi(Register::T1, Register::T0, 2),
//! ];
//! let mut cpu = Processor::new(program, ProcessorConfig::default());
//! cpu.step().unwrap();
//! cpu.step().unwrap();
//! assert_eq!(cpu.register(Register::T1), 42);
//! ```

pub mod alu;
pub mod control;
pub mod error;
pub mod extend;
pub mod load;
pub mod memory;
pub mod next_pc;
pub mod processor;
pub mod serial;

pub use alu::{AluOp, AluOutput};
pub use control::{AccessWidth, AluSrc, ControlVector, RegDst, WbSrc};
pub use error::{CoreError, Result};
pub use extend::ImmExtend;
pub use load::LoadKind;
pub use memory::{Memory, RAM_BYTES, SERIAL_BASE, SERIAL_WINDOW_BYTES};
pub use next_pc::{branch_target, jump_target};
pub use processor::{
    InstructionRom, Processor, ProcessorConfig, RegisterFile, RunSummary, TickTrace,
    DEFAULT_RESET_PC,
};
pub use serial::SerialPort;
