//! Cycle orchestrator
//!
//! One architectural instruction completes per [`Processor::step`] call:
//! fetch, decode, register read, execute, memory access, write-back, PC
//! update. Every read within a tick observes the state as of the tick's
//! start; the register write, memory write, and PC update are staged in
//! locals and committed together at the end, so a typed failure anywhere
//! in the tick commits nothing.
//!
//! There is no pipelining, no hazard detection, and exactly one
//! instruction in flight.

use crate::alu;
use crate::control::{self, AccessWidth, AluSrc, RegDst, WbSrc};
use crate::error::{CoreError, Result};
use crate::extend::extend_with_upper;
use crate::load;
use crate::memory::Memory;
use crate::next_pc;
use mips32_isa::{Instruction, Register, NUM_REGISTERS};

/// Default reset vector: the last word-aligned address of the 4 MiB window
///
/// An architectural convention of the source system, preserved as data;
/// override it through [`ProcessorConfig::reset_pc`].
pub const DEFAULT_RESET_PC: u32 = 0x003F_FFFC;

/// Processor configuration
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// PC value forced by reset; also the program load address
    pub reset_pc: u32,

    /// Maximum number of ticks [`Processor::run`] will execute
    pub max_cycles: u64,

    /// Record a [`TickTrace`] row per tick
    pub collect_trace: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            reset_pc: DEFAULT_RESET_PC,
            max_cycles: 1_000_000,
            collect_trace: false,
        }
    }
}

/// Outcome of a bounded [`Processor::run`]
///
/// The subset has no halt instruction; a run ends when the cycle budget
/// is spent (or earlier with a typed error from `step`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Ticks executed
    pub cycles: u64,
}

/// Non-architectural per-tick observability row
///
/// Exposed for tracing and tests, never fed back into execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickTrace {
    pub cycle: u64,
    pub pc: u32,
    pub instruction: Instruction,
    pub operand_a: u32,
    pub operand_b: u32,
    pub alu_result: u32,
}

/// Read-only instruction storage, word-indexed from a base address
#[derive(Debug, Clone)]
pub struct InstructionRom {
    base: u32,
    code: Vec<u32>,
}

impl InstructionRom {
    pub fn new(base: u32, code: Vec<u32>) -> Self {
        Self { base, code }
    }

    /// Fetch the instruction at `pc`
    pub fn fetch(&self, pc: u32) -> Result<Instruction> {
        if pc % 4 != 0 {
            return Err(CoreError::MisalignedFetch { pc });
        }
        if pc < self.base {
            return Err(CoreError::FetchFault { pc });
        }
        let index = ((pc - self.base) / 4) as usize;
        match self.code.get(index) {
            Some(&word) => Ok(Instruction(word)),
            None => Err(CoreError::FetchFault { pc }),
        }
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

/// Register bank: 32 word slots, slot 0 hardwired to zero
#[derive(Debug, Clone)]
pub struct RegisterFile {
    slots: [u32; NUM_REGISTERS],
}

impl RegisterFile {
    pub fn new() -> Self {
        Self {
            slots: [0; NUM_REGISTERS],
        }
    }

    #[inline]
    pub fn read(&self, reg: Register) -> u32 {
        if reg.is_zero() {
            0
        } else {
            self.slots[reg.index()]
        }
    }

    #[inline]
    pub fn write(&mut self, reg: Register, value: u32) {
        if !reg.is_zero() {
            self.slots[reg.index()] = value;
        }
    }

    pub fn clear(&mut self) {
        self.slots = [0; NUM_REGISTERS];
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-cycle processor: the architectural state plus the tick engine
#[derive(Debug, Clone)]
pub struct Processor {
    pc: u32,
    regs: RegisterFile,
    memory: Memory,
    rom: InstructionRom,
    config: ProcessorConfig,
    cycles: u64,
    trace: Vec<TickTrace>,
}

impl Processor {
    /// Create a processor with `program` loaded at the reset vector
    pub fn new(program: Vec<u32>, config: ProcessorConfig) -> Self {
        let rom = InstructionRom::new(config.reset_pc, program);
        Self {
            pc: config.reset_pc,
            regs: RegisterFile::new(),
            memory: Memory::new(),
            rom,
            config,
            cycles: 0,
            trace: Vec::new(),
        }
    }

    /// Asynchronous reset: PC to the reset vector, all registers cleared
    ///
    /// Memory and the serial device are external state containers and
    /// keep their contents.
    pub fn reset(&mut self) {
        self.pc = self.config.reset_pc;
        self.regs.clear();
        self.cycles = 0;
        self.trace.clear();
    }

    /// Execute one tick
    pub fn step(&mut self) -> Result<()> {
        // Boundary of the previous tick: pulse lines decay here
        self.memory.serial_mut().tick();

        let pc = self.pc;
        let inst = self.rom.fetch(pc)?;
        let ctrl = control::decode(inst);
        let pc_plus4 = pc.wrapping_add(4);

        // Register read: tick-start state, no same-tick visibility
        let rs_val = self.regs.read(inst.rs());
        let rt_val = self.regs.read(inst.rt());

        let imm = extend_with_upper(inst.imm16(), ctrl.imm_ext, ctrl.upper_imm);
        let operand_a = if ctrl.shamt_operand { inst.shamt() } else { rs_val };
        let operand_b = match ctrl.alu_src {
            AluSrc::Register => rt_val,
            AluSrc::Immediate => imm,
        };

        let alu_out = alu::execute(ctrl.alu_op, operand_a, operand_b);

        // Memory access at the ALU result
        let mem_value = if ctrl.mem_read {
            let address = alu_out.result;
            let alignment = ctrl.width.alignment();
            if address % alignment != 0 {
                return Err(CoreError::MisalignedAccess { address, alignment });
            }
            let word = self.memory.read(address & !3, AccessWidth::Word)?;
            if ctrl.extract_load {
                Some(load::extract(word, address & 3, ctrl.load_kind))
            } else {
                Some(word)
            }
        } else {
            None
        };

        let wb_value = match ctrl.wb_src {
            WbSrc::Alu => alu_out.result,
            WbSrc::Mem => mem_value.unwrap_or(alu_out.result),
            WbSrc::LinkPc => pc_plus4,
        };

        let next = next_pc::resolve(
            pc_plus4,
            next_pc::branch_target(pc_plus4, inst.imm16()),
            next_pc::jump_target(pc_plus4, inst.target26()),
            rs_val,
            ctrl.branch,
            ctrl.jump,
            ctrl.jump_register,
            alu_out.branch,
        );

        tracing::trace!(
            cycle = self.cycles,
            pc = format_args!("{:#010x}", pc),
            inst = %inst,
            a = operand_a,
            b = operand_b,
            result = alu_out.result,
            next = format_args!("{:#010x}", next),
            "tick"
        );

        // Commit: memory write, register write, PC update together
        if ctrl.mem_write {
            self.memory.write(alu_out.result, ctrl.width, rt_val)?;
        }
        if ctrl.reg_write {
            let dst = match ctrl.reg_dst {
                RegDst::Rt => inst.rt(),
                RegDst::Rd => inst.rd(),
                RegDst::Link => Register::RA,
            };
            self.regs.write(dst, wb_value);
        }
        self.pc = next;

        // Only committed ticks leave a trace row
        if self.config.collect_trace {
            self.trace.push(TickTrace {
                cycle: self.cycles,
                pc,
                instruction: inst,
                operand_a,
                operand_b,
                alu_result: alu_out.result,
            });
        }
        self.cycles += 1;
        Ok(())
    }

    /// Step until the configured cycle budget is spent
    pub fn run(&mut self) -> Result<RunSummary> {
        while self.cycles < self.config.max_cycles {
            self.step()?;
        }
        Ok(RunSummary {
            cycles: self.cycles,
        })
    }

    /// Current program counter
    pub fn pc(&self) -> u32 {
        self.pc
    }

    /// Ticks executed since reset
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Read one register (debug/observability)
    pub fn register(&self, reg: Register) -> u32 {
        self.regs.read(reg)
    }

    /// Write one register from outside the datapath (test setup)
    pub fn set_register(&mut self, reg: Register, value: u32) {
        self.regs.write(reg, value);
    }

    /// The data memory and serial device
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Collected per-tick rows (empty unless `collect_trace` is set)
    pub fn trace(&self) -> &[TickTrace] {
        &self.trace
    }
}
