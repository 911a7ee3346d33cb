//! The LS-8, a small 8-bit register machine with 256 bytes of memory.

mod alu;
mod instr;
mod machine;
mod trace;
mod types;

pub use alu::{AluOp, AluOutput, ControlOp};
pub use instr::{Instruction, Opcode};
pub use machine::{Machine, RunState};
pub use trace::TraceLine;
pub use types::*;
