//! Verify command handler module.
//!
//! Validates a JSONL shuffle audit log. Every record is checked for:
//!
//! - Well-formed JSON (a torn or unparseable line is reported, and the
//!   records after it are still checked)
//! - An intact checksum over all recorded fields
//! - Complete 52-card decks before and after the shuffle
//!
//! With `--seed` and `--hand-id` the matching record is additionally replayed
//! from the disclosed seed material.
//!
//! Errors are collected using the shared `BatchValidationError` pattern for structured reporting.

use crate::error::{BatchValidationError, CliError};
use fairdeal_engine::audit::{ShuffleAuditEvent, read_records, replay};
use fairdeal_engine::rng::{SEED_LEN, Seed};
use std::io::Write;
use std::path::Path;
use tracing::warn;
use uuid::Uuid;

/// Line number (1-based) of a record and what was wrong with it.
type VerifyError = BatchValidationError<usize>;

/// Handle the verify command.
///
/// # Returns
///
/// `Ok(())` if all checks pass, otherwise an `Err` that maps to exit code `2`.
///
/// # Example
///
/// ```ignore
/// # use std::io;
/// # use std::path::Path;
/// # use fairdeal_cli::commands::handle_verify_command;
/// let result = handle_verify_command(
///     Path::new("audit/shuffles.jsonl"),
///     None,
///     None,
///     &mut io::stdout(),
///     &mut io::stderr(),
/// );
/// ```
pub fn handle_verify_command(
    input: &Path,
    seed: Option<&str>,
    hand_id: Option<Uuid>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let records = read_records(input)?;
    let total = records.len();
    let mut errors: Vec<VerifyError> = Vec::new();
    // Parsed events with their line number and whether they passed `verify`
    let mut events: Vec<(usize, ShuffleAuditEvent, bool)> = Vec::with_capacity(total);

    for (line, record) in records {
        let event = match record {
            Ok(event) => event,
            Err(e) => {
                warn!(line, error = %e, "unreadable audit record");
                errors.push(VerifyError {
                    item_context: line,
                    message: e.to_string(),
                });
                continue;
            }
        };
        let valid = match event.verify() {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    line,
                    hand_id = %event.hand_id(),
                    error = %e,
                    "audit record rejected"
                );
                errors.push(VerifyError {
                    item_context: line,
                    message: e.to_string(),
                });
                false
            }
        };
        events.push((line, event, valid));
    }

    if let (Some(seed), Some(hand_id)) = (seed, hand_id) {
        let seed = parse_seed(seed)?;
        match events.iter().find(|(_, e, _)| e.hand_id() == hand_id) {
            // Already reported above; replaying would only repeat the failure.
            Some((_, _, false)) => {}
            Some((line, event, true)) => match replay(event, &seed) {
                Ok(()) => writeln!(out, "Replay: hand {} reproduced", hand_id)?,
                Err(e) => errors.push(VerifyError {
                    item_context: *line,
                    message: e.to_string(),
                }),
            },
            None => {
                return Err(CliError::InvalidInput(format!(
                    "hand {} not found in {}",
                    hand_id,
                    input.display()
                )));
            }
        }
    }

    for e in &errors {
        writeln!(err, "Invalid record {}", e)?;
    }
    writeln!(out, "Records: {}", total)?;
    if errors.is_empty() {
        writeln!(out, "Verify: OK")?;
        Ok(())
    } else {
        writeln!(out, "Verify: FAILED ({} errors)", errors.len())?;
        Err(CliError::InvalidInput(format!(
            "{} of {} audit records failed verification",
            errors.len(),
            total
        )))
    }
}

pub(crate) fn parse_seed(s: &str) -> Result<Seed, CliError> {
    let bytes = hex::decode(s.trim())
        .map_err(|e| CliError::InvalidInput(format!("seed is not hex: {}", e)))?;
    bytes.as_slice().try_into().map_err(|_| {
        CliError::InvalidInput(format!(
            "seed must be {} bytes ({} hex characters), got {} bytes",
            SEED_LEN,
            SEED_LEN * 2,
            bytes.len()
        ))
    })
}
