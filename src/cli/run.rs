//! Program execution command

use crate::arch::ls8::Machine;
use crate::config::Config;
use crate::loader;
use std::io;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Load the program at `path` and run it until it halts.
///
/// PRN output, and trace lines if enabled, go to `out`. The program path
/// given here is the only one consulted.
pub fn run<W>(path: &Path, config: &Config, out: W) -> io::Result<()>
where
    W: Write,
{
    let program = loader::read_program(path).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Cannot load program {}: {}", path.display(), e),
        )
    })?;
    info!(path = %path.display(), "read program");

    let mut machine = Machine::new(out);
    machine.set_tracing(config.trace());
    machine.load(&program)?;

    let result = machine.run(config.step_limit());
    machine.into_output().flush()?;
    result?;

    Ok(())
}
