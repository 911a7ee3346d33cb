//! Types used in modeling the LS-8

use crate::{memory, reg};

/// The type which represents a value contained in an LS-8 register.
pub type Value = u8;

/// The type which represents an LS-8 memory address.
///
/// This is wider than the machine's address space so that a program counter
/// stepping off the end of memory is caught as an out-of-range access rather
/// than wrapping back to zero.
pub type PtrVal = u16;

/// The type which represents data stored in memory as seen by the processor.
pub type Data = u8;

/// The memory model of the LS-8.
pub type Bus = memory::Memory<PtrVal, Data>;

/// The general-purpose register file of the LS-8.
pub type Registers = reg::RegisterFile<Value>;

pub const MEMORY_SIZE: usize = 256;

pub const REGISTER_COUNT: usize = 8;

/// Index of the register reserved as the stack pointer.
pub const SP: u8 = 7;

/// Initial stack pointer. The stack grows down from here.
pub const STACK_BASE: Value = 0xF4;
