//! Opcode and instruction enumeration

use crate::arch::ls8::{AluOp, Bus, ControlOp, PtrVal, Value};
use crate::error::{Error, Result};
use std::convert::TryFrom;
use std::fmt;

/// Every opcode the LS-8 executes.
///
/// The top two bits of an opcode byte encode how many operand bytes follow
/// it, which is what `operand_count` relies on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    Hlt,
    Ldi,
    Prn,
    Mult,
    Add,
    Div,
    And,
    Cmp,
    Jmp,
    Jeq,
    Jne,
    Push,
    Pop,
    Call,
    Ret,
}

impl Opcode {
    /// Enumerate all opcodes the LS-8 recognizes.
    pub fn enumerate() -> Vec<Self> {
        use Opcode::*;

        vec![
            Hlt, Ldi, Prn, Mult, Add, Div, And, Cmp, Jmp, Jeq, Jne, Push, Pop, Call, Ret,
        ]
    }

    /// The byte this opcode is encoded as.
    pub fn byte(self) -> u8 {
        use Opcode::*;

        match self {
            Hlt => 0b0000_0001,
            Ldi => 0b1000_0010,
            Prn => 0b0100_0111,
            Mult => 0b1010_0010,
            Add => 0b1010_0000,
            Div => 0b1010_0011,
            And => 0b1010_1000,
            Cmp => 0b1010_0111,
            Jmp => 0b0101_0100,
            Jeq => 0b0101_0101,
            Jne => 0b0101_0110,
            Push => 0b0100_0101,
            Pop => 0b0100_0110,
            Call => 0b0101_0000,
            Ret => 0b0001_0001,
        }
    }

    /// Number of operand bytes following the opcode.
    pub fn operand_count(self) -> PtrVal {
        PtrVal::from(self.byte() >> 6)
    }

    /// Total length of the instruction in bytes, opcode included.
    pub fn len(self) -> PtrVal {
        1 + self.operand_count()
    }

    pub fn mnemonic(self) -> &'static str {
        use Opcode::*;

        match self {
            Hlt => "HLT",
            Ldi => "LDI",
            Prn => "PRN",
            Mult => "MULT",
            Add => "ADD",
            Div => "DIV",
            And => "AND",
            Cmp => "CMP",
            Jmp => "JMP",
            Jeq => "JEQ",
            Jne => "JNE",
            Push => "PUSH",
            Pop => "POP",
            Call => "CALL",
            Ret => "RET",
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    /// Decode an opcode byte. Bytes that name no opcode are handed back.
    fn try_from(byte: u8) -> std::result::Result<Self, Self::Error> {
        use Opcode::*;

        match byte {
            0b0000_0001 => Ok(Hlt),
            0b1000_0010 => Ok(Ldi),
            0b0100_0111 => Ok(Prn),
            0b1010_0010 => Ok(Mult),
            0b1010_0000 => Ok(Add),
            0b1010_0011 => Ok(Div),
            0b1010_1000 => Ok(And),
            0b1010_0111 => Ok(Cmp),
            0b0101_0100 => Ok(Jmp),
            0b0101_0101 => Ok(Jeq),
            0b0101_0110 => Ok(Jne),
            0b0100_0101 => Ok(Push),
            0b0100_0110 => Ok(Pop),
            0b0101_0000 => Ok(Call),
            0b0001_0001 => Ok(Ret),
            _ => Err(byte),
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

/// A decoded LS-8 instruction.
///
/// Register operands are kept as the raw bytes read from memory; they are
/// only checked against the register file when the instruction executes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    Halt,
    LoadImmediate(u8, Value),
    Print(u8),
    Alu(AluOp, u8, u8),
    Control(ControlOp, u8),
    Push(u8),
    Pop(u8),
    Call(u8),
    Return,
}

impl Instruction {
    /// Decode the instruction stored at `at`.
    ///
    /// Yields the instruction and its length in bytes. Fails with
    /// `UnknownInstruction` if the opcode byte is not recognized, or
    /// `OutOfRange` if the instruction runs off the end of memory.
    pub fn decode(at: PtrVal, bus: &Bus) -> Result<(Self, PtrVal)> {
        let byte = bus.read(at)?;
        let opcode = Opcode::try_from(byte).map_err(|opcode| Error::UnknownInstruction {
            opcode,
            pc: at as usize,
        })?;

        let mut operands = [0; 2];
        for i in 0..opcode.operand_count() {
            operands[i as usize] = bus.read(at + 1 + i)?;
        }
        let [a, b] = operands;

        let instr = match opcode {
            Opcode::Hlt => Instruction::Halt,
            Opcode::Ldi => Instruction::LoadImmediate(a, b),
            Opcode::Prn => Instruction::Print(a),
            Opcode::Mult | Opcode::Add | Opcode::Div | Opcode::And | Opcode::Cmp => {
                Instruction::Alu(AluOp::try_from(opcode)?, a, b)
            }
            Opcode::Jmp | Opcode::Jeq | Opcode::Jne => {
                Instruction::Control(ControlOp::try_from(opcode)?, a)
            }
            Opcode::Push => Instruction::Push(a),
            Opcode::Pop => Instruction::Pop(a),
            Opcode::Call => Instruction::Call(a),
            Opcode::Ret => Instruction::Return,
        };

        Ok((instr, opcode.len()))
    }

    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Halt => Opcode::Hlt,
            Instruction::LoadImmediate(_, _) => Opcode::Ldi,
            Instruction::Print(_) => Opcode::Prn,
            Instruction::Alu(op, _, _) => Opcode::from(*op),
            Instruction::Control(op, _) => Opcode::from(*op),
            Instruction::Push(_) => Opcode::Push,
            Instruction::Pop(_) => Opcode::Pop,
            Instruction::Call(_) => Opcode::Call,
            Instruction::Return => Opcode::Ret,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.opcode();

        match self {
            Instruction::Halt | Instruction::Return => write!(f, "{}", op),
            Instruction::LoadImmediate(r, v) => write!(f, "{} R{}, {}", op, r, v),
            Instruction::Alu(_, a, b) => write!(f, "{} R{}, R{}", op, a, b),
            Instruction::Print(r)
            | Instruction::Control(_, r)
            | Instruction::Push(r)
            | Instruction::Pop(r)
            | Instruction::Call(r) => write!(f, "{} R{}", op, r),
        }
    }
}
