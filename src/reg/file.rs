//! A model of a fixed set of numbered registers.

use crate::error::{Error, Result, Space};
use num_traits::Zero;
use std::fmt;

/// A fixed-size bank of registers addressed by index.
///
/// Register indices usually come straight out of program memory, so they are
/// validated on every access and reported as `OutOfRange` when they name a
/// register the bank does not have.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile<V> {
    regs: Vec<V>,
}

impl<V> RegisterFile<V>
where
    V: Copy + Zero,
{
    pub fn new(count: usize) -> Self {
        RegisterFile {
            regs: vec![V::zero(); count],
        }
    }

    pub fn count(&self) -> usize {
        self.regs.len()
    }

    fn index(&self, index: u8) -> Result<usize> {
        let index = index as usize;

        if index < self.regs.len() {
            Ok(index)
        } else {
            Err(Error::OutOfRange {
                space: Space::Register,
                index,
                capacity: self.regs.len(),
            })
        }
    }

    pub fn get(&self, index: u8) -> Result<V> {
        let index = self.index(index)?;

        Ok(self.regs[index])
    }

    pub fn set(&mut self, index: u8, value: V) -> Result<()> {
        let index = self.index(index)?;
        self.regs[index] = value;

        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.regs.iter()
    }
}

impl<V> fmt::UpperHex for RegisterFile<V>
where
    V: fmt::UpperHex,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.regs.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }

            write!(f, "{:02X}", v)?;
        }

        Ok(())
    }
}

impl<V> From<Vec<V>> for RegisterFile<V> {
    fn from(regs: Vec<V>) -> Self {
        RegisterFile { regs }
    }
}
