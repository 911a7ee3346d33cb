use ls8::cli;
use std::{io, process};

fn main() {
    process::exit(cli::report(cli::main(), io::stderr()));
}
