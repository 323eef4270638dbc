//! Command handler modules for the fairdeal CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

mod bench;
mod cfg;
mod eval;
mod rng;
mod shuffle;
mod verify;

pub use bench::handle_bench_command;
pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use rng::handle_rng_command;
pub use shuffle::handle_shuffle_command;
pub use verify::handle_verify_command;
