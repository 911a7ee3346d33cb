//! Types which model an architectural register file.

mod file;

pub use file::RegisterFile;

#[cfg(test)]
mod tests;
