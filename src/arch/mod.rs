//! Implementations of processor architectures the emulator can run.
//!
//! Each architecture lives in a child module and provides, at a minimum:
//!
//!  * A set of type aliases naming its register value (`Value`), memory
//!    address (`PtrVal`) and memory cell (`Data`) types, plus the concrete
//!    `Bus` and `Registers` storage built from them.
//!  * An opcode enumeration with an explicit decode from raw bytes, and an
//!    instruction type carrying the decoded operands.
//!  * A machine type that owns all architectural state and runs the
//!    fetch-decode-execute loop.

pub mod ls8;
