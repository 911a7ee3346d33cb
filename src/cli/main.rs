//! CLI support for non-command bits

use crate::cli;
use crate::config::Config;
use clap::{App, Arg, ArgMatches};
use std::io;
use std::io::Write;
use std::path::Path;

/// Construct the command-line interface.
pub fn app<'a, 'b>() -> App<'a, 'b> {
    let mut app = app_from_crate!();
    app = app.arg(
        Arg::with_name("program")
            .value_name("program.ls8")
            .index(1)
            .required(true)
            .help("The program file to run"),
    );
    app = app.arg(
        Arg::with_name("config")
            .long("config")
            .value_name("ls8.json")
            .takes_value(true)
            .help("The run configuration file to load"),
    );

    Config::configure_app(app)
}

/// Build the effective run configuration.
///
/// Flags given on the command line win over the configuration file.
pub fn config_from_matches(matches: &ArgMatches) -> io::Result<Config> {
    let config = Config::from_arg_matches(matches)?;

    match matches.value_of("config") {
        Some(config_filename) => {
            Ok(Config::read(Path::new(config_filename))?.apply_override(&config))
        }
        None => Ok(config),
    }
}

pub fn main() -> io::Result<()> {
    cli::setup_tracing()?;

    let matches = app().get_matches();
    let config = config_from_matches(&matches)?;

    let program = matches
        .value_of("program")
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Did not specify a program"))?;

    let stdout = io::stdout();
    cli::run(Path::new(program), &config, stdout.lock())
}

/// Report the outcome of `main` and yield the process exit status.
///
/// Failures get a one-line diagnostic on `err` and status 1.
pub fn report<W>(result: io::Result<()>, mut err: W) -> i32
where
    W: Write,
{
    match result {
        Ok(()) => 0,
        Err(e) => {
            // Nothing useful can be done if stderr itself is gone.
            let _ = writeln!(err, "ls8: {}", e);
            1
        }
    }
}
