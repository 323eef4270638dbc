use std::collections::HashSet;

use crate::cards::{full_deck, Card, DECK_SIZE};
use crate::errors::EngineError;

/// A full 52-card deck for a single hand.
///
/// The card array is always a permutation of the canonical deck; the only
/// ways in are [`Deck::new`] and the validating constructors. Dealing moves a
/// cursor and never removes cards, so the invariant holds for the deck's whole
/// life.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    position: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Fresh deck in canonical id order.
    pub fn new() -> Self {
        Self {
            cards: full_deck(),
            position: 0,
        }
    }

    pub fn from_cards(cards: [Card; DECK_SIZE]) -> Result<Self, EngineError> {
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for c in cards.iter() {
            if !seen.insert(*c) {
                return Err(EngineError::InvalidDeck(format!("duplicate card {}", c)));
            }
        }
        Ok(Self { cards, position: 0 })
    }

    /// Rebuilds a deck from persisted card ids.
    pub fn from_ids(ids: &[u8]) -> Result<Self, EngineError> {
        if ids.len() != DECK_SIZE {
            return Err(EngineError::InvalidDeck(format!(
                "expected {} cards, found {}",
                DECK_SIZE,
                ids.len()
            )));
        }
        let mut cards = full_deck();
        for (slot, &id) in cards.iter_mut().zip(ids) {
            *slot = Card::from_id(id).map_err(|e| EngineError::InvalidDeck(e.to_string()))?;
        }
        Self::from_cards(cards)
    }

    pub fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card; DECK_SIZE] {
        &mut self.cards
    }

    pub(crate) fn rewind(&mut self) {
        self.position = 0;
    }

    pub fn ids(&self) -> [u8; DECK_SIZE] {
        self.cards.map(Card::id)
    }

    pub fn deal(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn burn(&mut self) {
        let _ = self.deal();
    }

    pub fn remaining(&self) -> usize {
        DECK_SIZE.saturating_sub(self.position)
    }
}
