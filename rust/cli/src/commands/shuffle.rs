//! Shuffle command handler.
//!
//! Seeds a fresh [`RandomSource`] from OS entropy, shuffles a new deck for one
//! hand and appends the resulting audit event to the configured JSONL log
//! before the dealing order is printed.

use crate::config;
use crate::error::CliError;
use crate::ui;
use fairdeal_engine::audit::{AuditSink, JsonlAuditSink};
use fairdeal_engine::deck::Deck;
use fairdeal_engine::rng::RandomSource;
use fairdeal_engine::shuffle::{HandContext, shuffle};
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

/// Handle the shuffle command.
///
/// `audit_log` takes precedence over the configured log path. Without any log
/// the event is printed as JSON and a warning is written to `err`.
///
/// # Errors
///
/// Returns `CliError::Engine` if the OS cannot provide entropy; nothing is
/// shuffled in that case.
pub fn handle_shuffle_command(
    table_id: Option<Uuid>,
    hand_id: Option<Uuid>,
    audit_log: Option<PathBuf>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;

    let ctx = HandContext {
        table_id: table_id.or(cfg.table_id).unwrap_or_else(Uuid::new_v4),
        hand_id: hand_id.unwrap_or_else(Uuid::new_v4),
    };
    let mut rng = RandomSource::new()?;
    let mut deck = Deck::new();
    let event = shuffle(&mut deck, &mut rng, ctx);

    match audit_log.or(cfg.audit_log) {
        Some(path) => {
            JsonlAuditSink::open(&path)?.append(&event)?;
            writeln!(out, "Audit: appended to {}", path.display())?;
        }
        None => {
            ui::display_warning(err, "no audit log configured; event not persisted")?;
            let json = serde_json::to_string(&event).map_err(std::io::Error::other)?;
            writeln!(out, "Audit: {}", json)?;
        }
    }

    writeln!(out, "Table: {}", event.table_id())?;
    writeln!(out, "Hand: {}", event.hand_id())?;
    writeln!(out, "Seed hash: {}", hex::encode(event.seed_hash()))?;
    writeln!(out, "Checksum: {}", hex::encode(event.checksum()))?;
    writeln!(out, "Deck: {}", ui::format_cards(deck.cards()))?;
    Ok(())
}
