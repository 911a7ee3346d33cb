//! Arithmetic, logic and control-transfer operations
//!
//! Arithmetic and logic operations are pure: they take two register values
//! and produce either a new value for the destination register or a new
//! equality flag. Control transfers never touch register values at all; they
//! only decide whether a jump is taken, and the machine moves the program
//! counter accordingly.

use crate::arch::ls8::Opcode;
use crate::error::{Error, Result};
use num_traits::{CheckedDiv, WrappingAdd, WrappingMul};
use std::convert::TryFrom;
use std::ops::BitAnd;

/// Operations executed by the ALU.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    Add,
    Mult,
    Div,
    And,
    Cmp,
}

/// What an ALU operation produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AluOutput<V> {
    /// A value to be written back to the first operand's register.
    Value(V),

    /// The new state of the equality flag.
    Equal(bool),
}

impl AluOp {
    /// Apply the operation to two register values.
    ///
    /// Addition and multiplication wrap at the register width. Division
    /// floors, and fails with `DivisionByZero` when `b` is zero.
    pub fn apply<V>(self, a: V, b: V) -> Result<AluOutput<V>>
    where
        V: Copy + PartialEq + WrappingAdd + WrappingMul + CheckedDiv + BitAnd<Output = V>,
    {
        match self {
            AluOp::Add => Ok(AluOutput::Value(a.wrapping_add(&b))),
            AluOp::Mult => Ok(AluOutput::Value(a.wrapping_mul(&b))),
            AluOp::Div => a
                .checked_div(&b)
                .map(AluOutput::Value)
                .ok_or(Error::DivisionByZero),
            AluOp::And => Ok(AluOutput::Value(a & b)),
            AluOp::Cmp => Ok(AluOutput::Equal(a == b)),
        }
    }
}

impl TryFrom<Opcode> for AluOp {
    type Error = Error;

    fn try_from(op: Opcode) -> Result<Self> {
        match op {
            Opcode::Add => Ok(AluOp::Add),
            Opcode::Mult => Ok(AluOp::Mult),
            Opcode::Div => Ok(AluOp::Div),
            Opcode::And => Ok(AluOp::And),
            Opcode::Cmp => Ok(AluOp::Cmp),
            _ => Err(Error::UnsupportedOperation(op.mnemonic().to_string())),
        }
    }
}

impl From<AluOp> for Opcode {
    fn from(op: AluOp) -> Self {
        match op {
            AluOp::Add => Opcode::Add,
            AluOp::Mult => Opcode::Mult,
            AluOp::Div => Opcode::Div,
            AluOp::And => Opcode::And,
            AluOp::Cmp => Opcode::Cmp,
        }
    }
}

/// Register-indirect jumps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ControlOp {
    Jump,
    JumpIfEqual,
    JumpIfNotEqual,
}

impl ControlOp {
    /// Determine if the jump is taken given the current equality flag.
    pub fn is_taken(self, equal: bool) -> bool {
        match self {
            ControlOp::Jump => true,
            ControlOp::JumpIfEqual => equal,
            ControlOp::JumpIfNotEqual => !equal,
        }
    }
}

impl TryFrom<Opcode> for ControlOp {
    type Error = Error;

    fn try_from(op: Opcode) -> Result<Self> {
        match op {
            Opcode::Jmp => Ok(ControlOp::Jump),
            Opcode::Jeq => Ok(ControlOp::JumpIfEqual),
            Opcode::Jne => Ok(ControlOp::JumpIfNotEqual),
            _ => Err(Error::UnsupportedOperation(op.mnemonic().to_string())),
        }
    }
}

impl From<ControlOp> for Opcode {
    fn from(op: ControlOp) -> Self {
        match op {
            ControlOp::Jump => Opcode::Jmp,
            ControlOp::JumpIfEqual => Opcode::Jeq,
            ControlOp::JumpIfNotEqual => Opcode::Jne,
        }
    }
}
