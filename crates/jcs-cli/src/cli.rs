//! Argument parsing and command dispatch (§6 "External interfaces").
//!
//! This module owns the only place `anyhow`-style ad hoc errors are allowed
//! to exist: clap's own parse errors and filesystem I/O failures are folded
//! into [`jcs_core::Error`] right here, so nothing but the stable class/exit
//! mapping ever reaches `main`.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use jcs_core::{canonicalize, verify, Error, ErrorClass, Options};

#[derive(Parser)]
#[command(name = "jcs", version, about = "Canonicalize or verify JSON per RFC 8785 (JCS)")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse input and write its RFC 8785 canonical form to stdout.
    Canonicalize {
        /// Suppress informational output on success (canonicalize has none).
        #[arg(long)]
        quiet: bool,
        /// Input file, or `-`/omitted for standard input.
        file: Option<PathBuf>,
    },
    /// Succeed iff the input bytes already equal their own canonical form.
    Verify {
        /// Suppress the `ok` line written to stderr on success.
        #[arg(long)]
        quiet: bool,
        file: Option<PathBuf>,
    },
}

/// Parses arguments, runs the requested operation, and returns the process
/// exit code. Never panics: every failure path becomes a classified
/// [`Error`] before it reaches here.
#[must_use]
pub fn run() -> ExitCode {
    match Cli::try_parse() {
        Ok(cli) => dispatch(cli),
        Err(e) => handle_clap_error(&e),
    }
}

fn dispatch(cli: Cli) -> ExitCode {
    let outcome = match cli.command {
        Command::Canonicalize { quiet, file } => run_canonicalize(file.as_deref(), quiet),
        Command::Verify { quiet, file } => run_verify(file.as_deref(), quiet),
    };
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn handle_clap_error(e: &clap::Error) -> ExitCode {
    use clap::error::ErrorKind;
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        print!("{e}");
        return ExitCode::SUCCESS;
    }
    report(&Error::non_positional(ErrorClass::CliUsage, e.to_string().trim_end().to_string()))
}

fn report(e: &Error) -> ExitCode {
    eprintln!("{e}");
    ExitCode::from(e.class().exit_code() as u8)
}

fn run_canonicalize(file: Option<&Path>, quiet: bool) -> Result<(), Error> {
    let _ = quiet; // canonicalize's success path writes nothing to stderr to silence
    let bytes = read_input(file)?;
    let out = canonicalize(&bytes, Options::default())?;
    let mut stdout = io::stdout();
    stdout.write_all(&out).map_err(io_to_internal)?;
    stdout.flush().map_err(io_to_internal)
}

fn run_verify(file: Option<&Path>, quiet: bool) -> Result<(), Error> {
    let bytes = read_input(file)?;
    verify(&bytes, Options::default())?;
    if !quiet {
        eprintln!("ok");
    }
    Ok(())
}

/// `None` and an explicit `-` both select standard input (§6).
fn reads_from_stdin(file: Option<&Path>) -> bool {
    match file {
        None => true,
        Some(p) => p == Path::new("-"),
    }
}

fn read_input(file: Option<&Path>) -> Result<Vec<u8>, Error> {
    if reads_from_stdin(file) {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf).map_err(io_to_internal)?;
        Ok(buf)
    } else {
        let path = file.expect("reads_from_stdin(Some(p)) false implies p is Some");
        // A path that can't be opened is the user's argument being wrong, not
        // an internal I/O failure (§6) -- CLI_USAGE, not INTERNAL_IO. `anyhow`
        // carries the ad hoc context string; it's collapsed into the stable
        // class here and never propagates past this function.
        std::fs::read(path)
            .with_context(|| format!("cannot open {}", path.display()))
            .map_err(|e| Error::non_positional(ErrorClass::CliUsage, e.to_string()))
    }
}

fn io_to_internal(e: io::Error) -> Error {
    Error::non_positional(ErrorClass::InternalIo, e.to_string())
}
