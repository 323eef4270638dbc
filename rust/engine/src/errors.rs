use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The OS entropy pool could not supply seed material. Fatal: callers must
    /// refuse to deal rather than fall back to a weaker source.
    #[error("Entropy unavailable: requested {requested} bytes from the OS ({reason})")]
    EntropyUnavailable { requested: usize, reason: String },
    #[error("Invalid deck: {0}")]
    InvalidDeck(String),
    #[error("Invalid card: {0}")]
    InvalidCard(String),
}

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Audit I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed audit record at line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("Audit serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Checksum mismatch for hand {hand_id}")]
    ChecksumMismatch { hand_id: uuid::Uuid },
    #[error("Recorded deck is invalid: {0}")]
    InvalidDeck(#[from] EngineError),
    #[error("Disclosed seed does not match the recorded seed hash")]
    SeedMismatch,
    #[error("Replayed shuffle does not reproduce the recorded deck")]
    ReplayMismatch,
    #[error("Unsupported shuffle algorithm '{0}'")]
    UnsupportedAlgorithm(String),
}
