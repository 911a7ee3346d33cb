//! Diagnostic dump of machine state

use crate::arch::ls8::{Bus, Data, PtrVal, Registers};
use std::fmt;

/// A snapshot of the machine taken just before an instruction executes.
///
/// Formats as `TRACE: PC | B0 B1 B2 | R0 .. R7` in two-digit hex, where
/// `B0..B2` are the bytes at the program counter. Bytes past the end of
/// memory are shown as `--`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceLine {
    pc: PtrVal,
    bytes: [Option<Data>; 3],
    regs: Registers,
}

impl TraceLine {
    pub fn capture(pc: PtrVal, bus: &Bus, regs: &Registers) -> Self {
        let mut bytes = [None; 3];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = bus.read(pc + i as PtrVal).ok();
        }

        TraceLine {
            pc,
            bytes,
            regs: regs.clone(),
        }
    }
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TRACE: {:02X} |", self.pc)?;

        for byte in self.bytes.iter() {
            match byte {
                Some(byte) => write!(f, " {:02X}", byte)?,
                None => write!(f, " --")?,
            }
        }

        write!(f, " | {:X}", self.regs)
    }
}
