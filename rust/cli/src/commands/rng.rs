//! Random source inspection command.
//!
//! Prints a handful of `next_u64` values together with the seed hash. With
//! `--seed` the source is rebuilt from disclosed seed material, which is how
//! an auditor checks that a seed reproduces a recorded stream.

use crate::commands::verify::parse_seed;
use crate::error::CliError;
use fairdeal_engine::rng::RandomSource;
use std::io::Write;

/// Handle the rng command.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` for malformed seed hex and
/// `CliError::Engine` if fresh entropy is unavailable.
pub fn handle_rng_command(
    seed: Option<&str>,
    count: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut rng = match seed {
        Some(s) => RandomSource::from_seed(&parse_seed(s)?),
        None => RandomSource::new()?,
    };
    let vals: Vec<u64> = (0..count).map(|_| rng.next_u64()).collect();
    writeln!(out, "Seed hash: {}", hex::encode(rng.seed_hash()))?;
    writeln!(out, "RNG sample: {:?}", vals)?;
    Ok(())
}
