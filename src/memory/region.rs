//! Fixed-size memory region

use crate::error::{Error, Result, Space};
use num_traits::Zero;
use std::marker::PhantomData;

/// A contiguous block of memory cells, addressed from zero.
///
/// `P` is the pointer type used to address the region and `D` the type of a
/// single memory cell. The size is chosen at construction and never changes;
/// every access outside of it is an `OutOfRange` error rather than a wrap or a
/// silent default.
#[derive(Clone, Debug)]
pub struct Memory<P, D> {
    cells: Vec<D>,
    ptr: PhantomData<P>,
}

impl<P, D> Memory<P, D>
where
    P: Copy + Into<usize>,
    D: Copy + Zero,
{
    /// Create a region of `size` cells, all zeroed.
    pub fn new(size: usize) -> Self {
        Memory {
            cells: vec![D::zero(); size],
            ptr: PhantomData,
        }
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    fn index(&self, addr: P) -> Result<usize> {
        let index = addr.into();

        if index < self.cells.len() {
            Ok(index)
        } else {
            Err(Error::OutOfRange {
                space: Space::Memory,
                index,
                capacity: self.cells.len(),
            })
        }
    }

    /// Read the cell at a given address.
    pub fn read(&self, addr: P) -> Result<D> {
        let index = self.index(addr)?;

        Ok(self.cells[index])
    }

    /// Write the cell at a given address.
    pub fn write(&mut self, addr: P, value: D) -> Result<()> {
        let index = self.index(addr)?;
        self.cells[index] = value;

        Ok(())
    }

    /// Copy a program image into memory, starting at `base`.
    ///
    /// Images that would run past the end of memory are rejected as a whole;
    /// nothing is written in that case.
    pub fn load_image(&mut self, base: P, image: &[D]) -> Result<()> {
        let start: usize = base.into();
        let end = start + image.len();

        if end > self.cells.len() {
            return Err(Error::OutOfRange {
                space: Space::Memory,
                index: end - 1,
                capacity: self.cells.len(),
            });
        }

        self.cells[start..end].copy_from_slice(image);

        Ok(())
    }

    /// View the whole region.
    pub fn as_slice(&self) -> &[D] {
        &self.cells
    }
}
