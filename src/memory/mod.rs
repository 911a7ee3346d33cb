//! A flat, fixed-size model of addressable memory.

mod region;

pub use region::Memory;

#[cfg(test)]
mod tests;
