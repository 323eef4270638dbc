//! # fairdeal-engine: Game-Integrity Core
//!
//! The two primitives a real-money poker table cannot get wrong: an
//! unpredictable, auditable shuffle and a deterministic 7-card hand ranking.
//! Everything around them (seating, betting, transport, balances) belongs to
//! the caller.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), ids and notation
//! - [`deck`] - The 52-card deck and its permutation invariant
//! - [`rng`] - OS-seeded ChaCha20 random source with unbiased bounded draws
//! - [`shuffle`] - Fisher-Yates shuffle producing an audit record
//! - [`audit`] - Audit events, append-only sinks, verification and replay
//! - [`hand`] - Hand evaluation, comparison and showdown winners
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use fairdeal_engine::audit::{AuditSink, MemoryAuditSink};
//! use fairdeal_engine::deck::Deck;
//! use fairdeal_engine::rng::RandomSource;
//! use fairdeal_engine::shuffle::{shuffle, HandContext};
//! use uuid::Uuid;
//!
//! // One exclusively owned source and deck per hand.
//! let mut rng = RandomSource::new().expect("OS entropy is required to deal");
//! let mut deck = Deck::new();
//! let event = shuffle(&mut deck, &mut rng, HandContext::new(Uuid::new_v4()));
//!
//! // Record before dealing.
//! let mut sink = MemoryAuditSink::new();
//! sink.append(&event).unwrap();
//!
//! let first = deck.deal().unwrap();
//! assert_eq!(first.id(), event.deck_after()[0]);
//! ```
//!
//! ## Showdown
//!
//! ```rust
//! use fairdeal_engine::cards::parse_cards;
//! use fairdeal_engine::hand::{compare, evaluate, HandCategory};
//!
//! let a: [_; 7] = parse_cards("AS KS QS JS TS 2H 3D").unwrap().try_into().unwrap();
//! let b: [_; 7] = parse_cards("2C 2D 2H 2S 5H 6H 7H").unwrap().try_into().unwrap();
//!
//! let (ea, eb) = (evaluate(&a), evaluate(&b));
//! assert_eq!(ea.category, HandCategory::RoyalFlush);
//! assert!(compare(&ea, &eb).is_gt());
//! ```

pub mod audit;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod rng;
pub mod shuffle;

pub use audit::{AuditSink, ShuffleAuditEvent};
pub use cards::Card;
pub use deck::Deck;
pub use errors::{AuditError, EngineError};
pub use hand::{compare, evaluate, EvaluatedHand, HandCategory};
pub use rng::RandomSource;
pub use shuffle::{shuffle, HandContext};
