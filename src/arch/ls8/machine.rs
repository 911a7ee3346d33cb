//! The LS-8 machine and its fetch-decode-execute loop

use crate::arch::ls8::{
    AluOutput, Bus, Data, Instruction, PtrVal, Registers, TraceLine, Value, MEMORY_SIZE,
    REGISTER_COUNT, SP, STACK_BASE,
};
use crate::error::{Error, Result, Space};
use std::convert::TryFrom;
use std::io::Write;
use tracing::{debug, info, trace};

/// Execution state of a machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Halted,
}

/// All architectural state of a single LS-8, plus the sink PRN writes to.
///
/// The machine owns its memory and registers outright. Nothing else can
/// touch them while it runs; callers inspect state through the accessors
/// between steps.
///
/// # Stack discipline
///
/// The stack pointer is register 7 and is ordinary register state. PUSH,
/// POP, CALL and RET adjust it with 8-bit wrapping arithmetic and no bounds
/// checks, so a program that pops an empty stack or pushes into its own code
/// will do exactly that. Keeping the stack balanced is the program's job.
pub struct Machine<W> {
    bus: Bus,
    regs: Registers,
    pc: PtrVal,
    equal: bool,
    state: RunState,
    tracing: bool,
    out: W,
}

impl<W> Machine<W>
where
    W: Write,
{
    /// Construct a machine with zeroed memory, PC at 0 and the stack pointer
    /// at its base.
    pub fn new(out: W) -> Self {
        let mut regs = vec![0; REGISTER_COUNT];
        regs[SP as usize] = STACK_BASE;

        Machine {
            bus: Bus::new(MEMORY_SIZE),
            regs: Registers::from(regs),
            pc: 0,
            equal: false,
            state: RunState::Running,
            tracing: false,
            out,
        }
    }

    /// Copy a program image into memory, starting at address 0.
    pub fn load(&mut self, image: &[Data]) -> Result<()> {
        self.bus.load_image(0, image)?;
        info!(bytes = image.len(), "loaded program");

        Ok(())
    }

    /// Enable or disable writing a `TraceLine` to the output before every
    /// instruction.
    pub fn set_tracing(&mut self, tracing: bool) {
        self.tracing = tracing;
    }

    pub fn pc(&self) -> PtrVal {
        self.pc
    }

    pub fn equal_flag(&self) -> bool {
        self.equal
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    pub fn memory(&self) -> &Bus {
        &self.bus
    }

    pub fn memory_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn trace_line(&self) -> TraceLine {
        TraceLine::capture(self.pc, &self.bus, &self.regs)
    }

    /// Fetch, decode and execute a single instruction.
    ///
    /// A halted machine does nothing and reads no memory.
    pub fn step(&mut self) -> Result<RunState> {
        if self.state == RunState::Halted {
            return Ok(RunState::Halted);
        }

        if self.tracing {
            let line = self.trace_line();
            writeln!(self.out, "{}", line)?;
        }

        let (instr, len) = Instruction::decode(self.pc, &self.bus)?;
        debug!(pc = self.pc, %instr, "execute");

        self.execute(instr, len)?;

        Ok(self.state)
    }

    /// Run until the program halts.
    ///
    /// Yields the number of instructions executed. If `step_limit` is given
    /// and the program has not halted after that many instructions, fails with
    /// `StepLimitExceeded`.
    pub fn run(&mut self, step_limit: Option<u64>) -> Result<u64> {
        let mut steps = 0;

        while self.state == RunState::Running {
            if let Some(limit) = step_limit {
                if steps >= limit {
                    return Err(Error::StepLimitExceeded(limit));
                }
            }

            self.step()?;
            steps += 1;
        }

        info!(steps, "halted");

        Ok(steps)
    }

    /// Execute one decoded instruction of length `len`.
    ///
    /// Every arm either advances the PC past the instruction or overwrites it
    /// outright. HLT does neither.
    fn execute(&mut self, instr: Instruction, len: PtrVal) -> Result<()> {
        match instr {
            Instruction::Halt => {
                self.state = RunState::Halted;
            }
            Instruction::LoadImmediate(r, v) => {
                self.regs.set(r, v)?;
                self.pc += len;
            }
            Instruction::Print(r) => {
                let v = self.regs.get(r)?;
                writeln!(self.out, "{}", v)?;
                self.pc += len;
            }
            Instruction::Alu(op, a, b) => {
                let x = self.regs.get(a)?;
                let y = self.regs.get(b)?;

                match op.apply(x, y)? {
                    AluOutput::Value(v) => self.regs.set(a, v)?,
                    AluOutput::Equal(equal) => self.equal = equal,
                }

                self.pc += len;
            }
            Instruction::Control(op, r) => {
                if op.is_taken(self.equal) {
                    self.pc = PtrVal::from(self.regs.get(r)?);
                } else {
                    self.pc += len;
                }
            }
            Instruction::Push(r) => {
                // Reject a bad operand before SP moves; the value itself is
                // read afterwards so that PUSH R7 stores the new SP.
                self.regs.get(r)?;

                let sp = self.decrement_sp()?;
                let v = self.regs.get(r)?;
                self.bus.write(PtrVal::from(sp), v)?;
                trace!(sp, value = v, "push");
                self.pc += len;
            }
            Instruction::Pop(r) => {
                let sp = self.regs.get(SP)?;
                let v = self.bus.read(PtrVal::from(sp))?;
                self.regs.set(r, v)?;
                self.increment_sp()?;
                trace!(sp, value = v, "pop");
                self.pc += len;
            }
            Instruction::Call(r) => {
                let ret = self.pc + len;
                let ret = Value::try_from(ret).map_err(|_| Error::OutOfRange {
                    space: Space::Memory,
                    index: ret as usize,
                    capacity: MEMORY_SIZE,
                })?;
                self.regs.get(r)?;

                let sp = self.decrement_sp()?;
                self.bus.write(PtrVal::from(sp), ret)?;
                trace!(sp, ret, "call");

                self.pc = PtrVal::from(self.regs.get(r)?);
            }
            Instruction::Return => {
                let sp = self.regs.get(SP)?;
                let ret = self.bus.read(PtrVal::from(sp))?;
                self.increment_sp()?;
                trace!(sp, ret, "return");

                self.pc = PtrVal::from(ret);
            }
        }

        Ok(())
    }

    fn decrement_sp(&mut self) -> Result<Value> {
        let sp = self.regs.get(SP)?.wrapping_sub(1);
        self.regs.set(SP, sp)?;

        Ok(sp)
    }

    fn increment_sp(&mut self) -> Result<Value> {
        let sp = self.regs.get(SP)?.wrapping_add(1);
        self.regs.set(SP, sp)?;

        Ok(sp)
    }
}
