//! An emulator for the LS-8, a small 8-bit register machine.

#[macro_use]
extern crate clap;

pub mod arch;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod memory;
pub mod reg;
