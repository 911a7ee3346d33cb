//! CLI commands

mod logging;
mod main;
mod run;

pub use logging::setup_tracing;
pub use main::{app, config_from_matches, main, report};
pub use run::run;
