#![forbid(unsafe_code)]
//! Thin CLI front-end: argument parsing and exit-code mapping only. All
//! canonicalization logic lives in `jcs-core`; this binary's job is to call
//! it and translate its classified errors into stdout/stderr/exit-code
//! behavior (§6).

mod cli;

use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    cli::run()
}
