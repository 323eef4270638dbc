//! Command-line definitions for the `fairdeal` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(
    name = "fairdeal",
    version,
    about = "Auditable card shuffling and poker hand evaluation"
)]
pub struct FairdealCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shuffle a fresh deck from OS entropy and record the audit event
    Shuffle {
        #[arg(long)]
        table_id: Option<Uuid>,
        #[arg(long)]
        hand_id: Option<Uuid>,
        /// JSONL audit log to append to (overrides configuration)
        #[arg(long)]
        audit_log: Option<PathBuf>,
    },
    /// Verify every record of a JSONL audit log
    Verify {
        #[arg(long)]
        input: PathBuf,
        /// Disclosed seed material (hex) to replay one hand against its record
        #[arg(long, requires = "hand_id")]
        seed: Option<String>,
        /// Hand to replay against the disclosed seed
        #[arg(long, requires = "seed")]
        hand_id: Option<Uuid>,
    },
    /// Evaluate 7-card hands and report the winners
    Eval {
        /// Seven cards, e.g. "AS KS QS JS TS 2H 3D"; repeat for each player
        #[arg(long = "hand", required = true)]
        hands: Vec<String>,
    },
    /// Print sample output of the random source
    Rng {
        /// Seed material as hex, for replay; fresh OS entropy when omitted
        #[arg(long)]
        seed: Option<String>,
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
    /// Benchmark hand evaluation
    Bench {
        #[arg(long)]
        iterations: Option<u32>,
    },
    /// Display resolved configuration and where each value came from
    Cfg,
}
