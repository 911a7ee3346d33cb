//! Run configuration

use clap::{App, Arg, ArgMatches};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::{fs, io};

/// Settings that control how a program is run, as opposed to what is run.
///
/// A configuration may be read from a JSON file, typically named `ls8.json`,
/// and is then overridden by whatever was given on the command line.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    trace: Option<bool>,

    #[serde(default)]
    step_limit: Option<u64>,
}

impl Config {
    /// Read a configuration file.
    ///
    /// Errors name the offending file.
    pub fn read(filename: &Path) -> io::Result<Self> {
        let describe = |e: io::Error| {
            io::Error::new(
                e.kind(),
                format!("Cannot read configuration {}: {}", filename.display(), e),
            )
        };

        let config_file = fs::File::open(filename).map_err(describe)?;
        let config = serde_json::from_reader(io::BufReader::new(config_file))
            .map_err(|e| describe(e.into()))?;

        Ok(config)
    }

    pub fn configure_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        app.arg(
            Arg::with_name("trace")
                .long("trace")
                .help("Print machine state before every instruction."),
        )
        .arg(
            Arg::with_name("step_limit")
                .long("step-limit")
                .value_name("STEPS")
                .help("Give up if the program has not halted after this many instructions.")
                .takes_value(true),
        )
    }

    /// Construct a Config from clap ArgMatches
    pub fn from_arg_matches(args: &ArgMatches) -> io::Result<Config> {
        let step_limit = match args.value_of("step_limit") {
            Some(s) => Some(u64::from_str(s).map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Step limit {} is not a valid number of steps", s),
                )
            })?),
            None => None,
        };

        Ok(Config {
            trace: if args.is_present("trace") {
                Some(true)
            } else {
                None
            },
            step_limit,
        })
    }

    pub fn trace(&self) -> bool {
        self.trace.unwrap_or(false)
    }

    pub fn step_limit(&self) -> Option<u64> {
        self.step_limit
    }

    pub fn apply_override(&self, other: &Config) -> Config {
        Config {
            trace: other.trace.or(self.trace),
            step_limit: other.step_limit.or(self.step_limit),
        }
    }
}
