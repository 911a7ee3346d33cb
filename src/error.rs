//! Error type for loading and running programs

use std::{fmt, io, result};
use thiserror::Error;

/// Which storage an out-of-range index was aimed at.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Space {
    Memory,
    Register,
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Space::Memory => write!(f, "memory address"),
            Space::Register => write!(f, "register"),
        }
    }
}

/// Error type for the emulator.
///
/// Every variant is fatal. The execution loop stops at the first error it
/// encounters and hands it back to the caller untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying cause of error is I/O related
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A line of the program file is not a valid binary byte.
    #[error("malformed program on line {line}: {text:?} is not a binary byte")]
    Format { line: usize, text: String },

    /// A memory address or register index past the end of its storage.
    #[error("{space} {index:#04X} is out of range (capacity {capacity})")]
    OutOfRange {
        space: Space,
        index: usize,
        capacity: usize,
    },

    /// The byte fetched at `pc` is not an opcode of the instruction set.
    #[error("unknown instruction {opcode:#010b} at address {pc:#04X}")]
    UnknownInstruction { opcode: u8, pc: usize },

    /// An ALU or control-transfer operation was requested for an opcode that
    /// does not belong to that category.
    #[error("unsupported operation {0}")]
    UnsupportedOperation(String),

    #[error("division by zero")]
    DivisionByZero,

    /// The program did not execute HLT within the configured step limit.
    #[error("program did not halt within {0} steps")]
    StepLimitExceeded(u64),
}

impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        match err {
            Error::Io(e) => e,
            Error::Format { .. } => io::Error::new(io::ErrorKind::InvalidData, err.to_string()),
            _ => io::Error::new(io::ErrorKind::Other, err.to_string()),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::{Error, Space};
    use std::io;

    #[test]
    fn error_messages() {
        let err = Error::OutOfRange {
            space: Space::Register,
            index: 8,
            capacity: 8,
        };
        assert_eq!(err.to_string(), "register 0x08 is out of range (capacity 8)");

        let err = Error::UnknownInstruction {
            opcode: 0xFF,
            pc: 3,
        };
        assert_eq!(err.to_string(), "unknown instruction 0b11111111 at address 0x03");
    }

    #[test]
    fn error_into_io_error() {
        let err: io::Error = Error::DivisionByZero.into();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert_eq!(err.to_string(), "division by zero");

        let err: io::Error = Error::Format {
            line: 2,
            text: "2".to_string(),
        }
        .into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let err: io::Error = Error::Io(io::Error::new(io::ErrorKind::NotFound, "gone")).into();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
