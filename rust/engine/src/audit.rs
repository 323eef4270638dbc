//! Shuffle audit records and the append-only sinks that persist them.
//!
//! Every call to [`crate::shuffle::shuffle`] yields one
//! [`ShuffleAuditEvent`]. The event binds the hand's identifiers, the SHA-256
//! of the seed material and the deck order before and after the shuffle, and
//! seals all of it with a SHA-256 checksum so a log reader can detect any
//! edited field without access to the engine.

use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;
use uuid::Uuid;

use crate::cards::DECK_SIZE;
use crate::deck::Deck;
use crate::errors::AuditError;
use crate::rng::{RandomSource, Seed};
use crate::shuffle::{fisher_yates, FISHER_YATES};

const CHECKSUM_DOMAIN: &[u8] = b"fairdeal/shuffle-audit/v1";

/// Immutable record of one shuffle.
///
/// Fields are private; an event can only be produced by the shuffle engine or
/// read back from a log, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleAuditEvent {
    /// RFC3339 UTC timestamp taken when the shuffle completed
    timestamp: String,
    table_id: Uuid,
    hand_id: Uuid,
    #[serde(with = "hex::serde")]
    seed_hash: [u8; 32],
    /// Card ids in dealing order before the shuffle
    deck_before: Vec<u8>,
    /// Card ids in dealing order after the shuffle
    deck_after: Vec<u8>,
    algorithm: String,
    #[serde(with = "hex::serde")]
    checksum: [u8; 32],
}

impl ShuffleAuditEvent {
    pub(crate) fn record(
        table_id: Uuid,
        hand_id: Uuid,
        seed_hash: [u8; 32],
        deck_before: [u8; DECK_SIZE],
        deck_after: [u8; DECK_SIZE],
        algorithm: &str,
    ) -> Self {
        let mut event = Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            table_id,
            hand_id,
            seed_hash,
            deck_before: deck_before.to_vec(),
            deck_after: deck_after.to_vec(),
            algorithm: algorithm.to_string(),
            checksum: [0u8; 32],
        };
        event.checksum = event.compute_checksum();
        event
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
    pub fn table_id(&self) -> Uuid {
        self.table_id
    }
    pub fn hand_id(&self) -> Uuid {
        self.hand_id
    }
    pub fn seed_hash(&self) -> &[u8; 32] {
        &self.seed_hash
    }
    pub fn deck_before(&self) -> &[u8] {
        &self.deck_before
    }
    pub fn deck_after(&self) -> &[u8] {
        &self.deck_after
    }
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }
    pub fn checksum(&self) -> &[u8; 32] {
        &self.checksum
    }

    /// SHA-256 over every other field, each variable-length field prefixed
    /// with its little-endian `u32` length.
    pub fn compute_checksum(&self) -> [u8; 32] {
        let mut h = Sha256::new();
        h.update(CHECKSUM_DOMAIN);
        update_prefixed(&mut h, self.timestamp.as_bytes());
        h.update(self.table_id.as_bytes());
        h.update(self.hand_id.as_bytes());
        h.update(self.seed_hash);
        update_prefixed(&mut h, &self.deck_before);
        update_prefixed(&mut h, &self.deck_after);
        update_prefixed(&mut h, self.algorithm.as_bytes());
        h.finalize().into()
    }

    pub fn verify_checksum(&self) -> Result<(), AuditError> {
        if self.compute_checksum() == self.checksum {
            Ok(())
        } else {
            Err(AuditError::ChecksumMismatch {
                hand_id: self.hand_id,
            })
        }
    }

    /// Full structural check: checksum, and both decks are complete 52-card
    /// decks (which makes `deck_after` a permutation of `deck_before`).
    pub fn verify(&self) -> Result<(), AuditError> {
        self.verify_checksum()?;
        Deck::from_ids(&self.deck_before)?;
        Deck::from_ids(&self.deck_after)?;
        Ok(())
    }
}

fn update_prefixed(h: &mut Sha256, bytes: &[u8]) {
    h.update((bytes.len() as u32).to_le_bytes());
    h.update(bytes);
}

/// Re-runs a recorded shuffle from disclosed seed material.
///
/// Assumes the shuffle was the first use of its [`RandomSource`], which is how
/// the engine issues sources: one fresh source per hand.
pub fn replay(event: &ShuffleAuditEvent, seed: &Seed) -> Result<(), AuditError> {
    event.verify()?;
    if event.algorithm != FISHER_YATES {
        return Err(AuditError::UnsupportedAlgorithm(event.algorithm.clone()));
    }
    let seed_hash: [u8; 32] = Sha256::digest(seed).into();
    if seed_hash != event.seed_hash {
        return Err(AuditError::SeedMismatch);
    }
    let mut deck = Deck::from_ids(&event.deck_before)?;
    let mut rng = RandomSource::from_seed(seed);
    fisher_yates(deck.cards_mut(), &mut rng);
    if deck.ids()[..] != event.deck_after[..] {
        return Err(AuditError::ReplayMismatch);
    }
    Ok(())
}

/// Append-only destination for audit events. There is intentionally no way to
/// update or remove a record through this interface.
pub trait AuditSink {
    fn append(&mut self, event: &ShuffleAuditEvent) -> Result<(), AuditError>;
}

/// Writes one JSON object per line to a file opened in append mode.
pub struct JsonlAuditSink {
    writer: BufWriter<File>,
}

impl JsonlAuditSink {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, AuditError> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }
}

impl AuditSink for JsonlAuditSink {
    fn append(&mut self, event: &ShuffleAuditEvent) -> Result<(), AuditError> {
        let line = serde_json::to_string(event)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        info!(
            table_id = %event.table_id,
            hand_id = %event.hand_id,
            "shuffle audit event appended"
        );
        Ok(())
    }
}

/// In-process sink, mainly for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    events: Vec<ShuffleAuditEvent>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ShuffleAuditEvent] {
        &self.events
    }
}

impl AuditSink for MemoryAuditSink {
    fn append(&mut self, event: &ShuffleAuditEvent) -> Result<(), AuditError> {
        self.events.push(event.clone());
        Ok(())
    }
}

/// One line of an audit log: its 1-based line number and the parsed event, or
/// the reason it could not be parsed.
pub type AuditRecord = (usize, Result<ShuffleAuditEvent, AuditError>);

/// Reads every record of a JSON Lines audit log without stopping at a bad
/// one, so a torn or edited line does not hide the records after it. Blank
/// lines are skipped. Only I/O failures abort the read.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<AuditRecord>, AuditError> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|source| AuditError::Malformed {
            line: idx + 1,
            source,
        });
        records.push((idx + 1, record));
    }
    Ok(records)
}

/// Reads a JSON Lines audit log. Blank lines are skipped; the first malformed
/// record fails the read with its 1-based line number.
pub fn read_events<P: AsRef<Path>>(path: P) -> Result<Vec<ShuffleAuditEvent>, AuditError> {
    read_records(path)?
        .into_iter()
        .map(|(_, record)| record)
        .collect()
}
