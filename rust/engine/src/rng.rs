//! Cryptographically secure random source for shuffling.
//!
//! A [`RandomSource`] is seeded exactly once from the operating system's
//! entropy pool and then expands that seed with the ChaCha20 keystream: the
//! first 32 bytes of seed material are the cipher key, the last 8 select the
//! stream (nonce), and the cipher's block counter advances with every draw.
//! The same seed material therefore always yields the same sequence, which is
//! what makes audit replay possible; the key itself never leaves this type.

use std::fmt;

use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng, TryRngCore};
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};
use tracing::{debug, error};

use crate::errors::EngineError;

/// Bytes of seed material: a 256-bit key followed by a 64-bit stream nonce.
pub const SEED_LEN: usize = 40;

const KEY_LEN: usize = 32;

/// Seed material for a [`RandomSource`].
pub type Seed = [u8; SEED_LEN];

/// One unbroken keystream owned by a single hand.
///
/// Deliberately neither `Clone` nor `Copy`: a duplicated source would replay
/// the same card order.
pub struct RandomSource {
    rng: ChaCha20Rng,
    seed_hash: [u8; 32],
}

impl RandomSource {
    /// Seeds a new source from the OS CSPRNG.
    ///
    /// Returns [`EngineError::EntropyUnavailable`] if the OS cannot provide
    /// the full seed. There is no fallback source.
    pub fn new() -> Result<Self, EngineError> {
        Self::from_entropy(&mut OsRng)
    }

    /// Seeds a new source from an arbitrary entropy provider.
    pub fn from_entropy<E: TryRngCore>(entropy: &mut E) -> Result<Self, EngineError> {
        let mut seed: Seed = [0u8; SEED_LEN];
        if let Err(e) = entropy.try_fill_bytes(&mut seed) {
            error!(requested = SEED_LEN, reason = %e, "entropy source failed");
            return Err(EngineError::EntropyUnavailable {
                requested: SEED_LEN,
                reason: e.to_string(),
            });
        }
        Ok(Self::from_seed(&seed))
    }

    /// Deterministic construction from known seed material.
    ///
    /// Production code seeds through [`RandomSource::new`]; this exists for
    /// replaying a disclosed seed against its audit record.
    pub fn from_seed(seed: &Seed) -> Self {
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(&seed[..KEY_LEN]);
        let mut nonce = [0u8; SEED_LEN - KEY_LEN];
        nonce.copy_from_slice(&seed[KEY_LEN..]);

        let mut rng = ChaCha20Rng::from_seed(key);
        rng.set_stream(u64::from_le_bytes(nonce));

        let seed_hash: [u8; 32] = Sha256::digest(seed).into();
        debug!(seed_hash = %hex::encode(&seed_hash[..8]), "random source seeded");
        Self { rng, seed_hash }
    }

    /// SHA-256 of the seed material.
    pub fn seed_hash(&self) -> [u8; 32] {
        self.seed_hash
    }

    /// Keystream words consumed so far. Never decreases.
    pub fn counter(&self) -> u128 {
        self.rng.get_word_pos()
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Uniform value in `[0, max)`.
    ///
    /// Draws below `2^64 mod max` are rejected so every residue is backed by
    /// the same number of raw values.
    ///
    /// # Panics
    ///
    /// Panics if `max` is zero.
    pub fn next_bounded(&mut self, max: u32) -> u32 {
        assert!(max > 0, "next_bounded requires a non-empty range");
        let m = u64::from(max);
        let threshold = m.wrapping_neg() % m;
        loop {
            let x = self.next_u64();
            if x >= threshold {
                return (x % m) as u32;
            }
        }
    }

    pub fn fill(&mut self, buf: &mut [u8]) {
        for chunk in buf.chunks_mut(8) {
            let word = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}

impl fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomSource")
            .field("seed_hash", &hex::encode(self.seed_hash))
            .field("counter", &self.counter())
            .finish_non_exhaustive()
    }
}
