//! Program file parsing
//!
//! A program file holds one byte per line, written in binary. Anything after
//! a `#` is a comment, and lines that are blank once comments are removed are
//! skipped entirely:
//!
//! ```text
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//!
//! 00000001 # HLT
//! ```

use crate::arch::ls8::Data;
use crate::error::{Error, Result};
use std::fs;
use std::io::BufRead;
use std::path::Path;

/// Parse line `number` (1-based) of a program file.
///
/// Yields `None` for lines with no significant content.
fn parse_line(number: usize, line: &str) -> Result<Option<Data>> {
    let text = line.split('#').next().unwrap_or("").trim();

    if text.is_empty() {
        return Ok(None);
    }

    let malformed = || Error::Format {
        line: number,
        text: line.trim().to_string(),
    };

    if !text.chars().all(|c| c == '0' || c == '1') {
        return Err(malformed());
    }

    let byte = Data::from_str_radix(text, 2).map_err(|_| malformed())?;

    Ok(Some(byte))
}

/// Parse a whole program, yielding the bytes in load order.
pub fn parse_program<R>(reader: R) -> Result<Vec<Data>>
where
    R: BufRead,
{
    let mut program = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        if let Some(byte) = parse_line(index + 1, &line?)? {
            program.push(byte);
        }
    }

    Ok(program)
}

/// Read and parse the program file at `path`.
pub fn read_program(path: &Path) -> Result<Vec<Data>> {
    let file = fs::File::open(path)?;

    parse_program(std::io::BufReader::new(file))
}

#[cfg(test)]
mod tests;
