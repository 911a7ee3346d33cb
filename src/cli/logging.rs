//! Diagnostic logging setup

use std::io;
use tracing::subscriber::set_global_default;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Install the global tracing subscriber.
///
/// Log output is filtered by `RUST_LOG` and always goes to standard error;
/// standard output belongs to the running program.
pub fn setup_tracing() -> io::Result<()> {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(io::stderr);
    let sub = Registry::default()
        .with(EnvFilter::from_default_env())
        .with(fmt_layer);

    set_global_default(sub).map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
