//! # fairdeal CLI Library
//!
//! Command-line front end for the `fairdeal-engine` crate: shuffle with an
//! audit trail, verify audit logs, and evaluate showdown hands.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["fairdeal", "shuffle", "--audit-log", "audit/shuffles.jsonl"];
//! let code = fairdeal_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `shuffle`: Shuffle a deck from OS entropy and append the audit event
//! - `verify`: Check checksums and deck integrity of an audit log, optionally replaying a hand
//! - `eval`: Evaluate 7-card hands and report winners and split pots
//! - `rng`: Print random source samples
//! - `bench`: Benchmark hand evaluation
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod logging;
pub mod ui;

use cli::{Commands, FairdealCli};
use commands::{
    handle_bench_command, handle_cfg_command, handle_eval_command, handle_rng_command,
    handle_shuffle_command, handle_verify_command,
};

pub use error::{BatchValidationError, CliError};

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["fairdeal", "eval", "--hand", "AS KS QS JS TS 2H 3D"];
/// let code = fairdeal_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["shuffle", "verify", "eval", "rng", "bench", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match FairdealCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write_usage(err, &e.to_string(), COMMANDS);
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Shuffle {
            table_id,
            hand_id,
            audit_log,
        } => handle_shuffle_command(table_id, hand_id, audit_log, out, err),
        Commands::Verify {
            input,
            seed,
            hand_id,
        } => handle_verify_command(&input, seed.as_deref(), hand_id, out, err),
        Commands::Eval { hands } => handle_eval_command(&hands, out),
        Commands::Rng { seed, count } => handle_rng_command(seed.as_deref(), count, out),
        Commands::Bench { iterations } => handle_bench_command(iterations, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn write_usage(err: &mut dyn Write, clap_msg: &str, commands: &[&str]) -> std::io::Result<()> {
    writeln!(err, "{}", clap_msg)?;
    writeln!(err)?;
    writeln!(err, "fairdeal")?;
    writeln!(err, "Usage: fairdeal <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in commands {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: fairdeal --help")
}
