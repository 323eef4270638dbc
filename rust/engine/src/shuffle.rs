//! Fisher-Yates shuffle with audit capture.

use tracing::debug;
use uuid::Uuid;

use crate::audit::ShuffleAuditEvent;
use crate::deck::Deck;
use crate::rng::RandomSource;

/// Algorithm label written into every audit record.
pub const FISHER_YATES: &str = "fisher-yates/chacha20";

/// Identifiers of the hand a shuffle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandContext {
    pub table_id: Uuid,
    pub hand_id: Uuid,
}

impl HandContext {
    /// Context for a new hand at `table_id` with a freshly generated hand id.
    pub fn new(table_id: Uuid) -> Self {
        Self {
            table_id,
            hand_id: Uuid::new_v4(),
        }
    }
}

/// Shuffles `deck` in place and returns the audit record for the operation.
///
/// The deck is rewound so dealing starts from the new top card.
///
/// ```
/// use fairdeal_engine::deck::Deck;
/// use fairdeal_engine::rng::RandomSource;
/// use fairdeal_engine::shuffle::{shuffle, HandContext};
/// use uuid::Uuid;
///
/// let mut deck = Deck::new();
/// let mut rng = RandomSource::new().expect("entropy");
/// let event = shuffle(&mut deck, &mut rng, HandContext::new(Uuid::new_v4()));
/// assert!(event.verify().is_ok());
/// assert_eq!(event.deck_after(), &deck.ids()[..]);
/// ```
pub fn shuffle(deck: &mut Deck, rng: &mut RandomSource, ctx: HandContext) -> ShuffleAuditEvent {
    let before = deck.ids();
    fisher_yates(deck.cards_mut(), rng);
    deck.rewind();
    let after = deck.ids();

    let event = ShuffleAuditEvent::record(
        ctx.table_id,
        ctx.hand_id,
        rng.seed_hash(),
        before,
        after,
        FISHER_YATES,
    );
    debug!(
        table_id = %ctx.table_id,
        hand_id = %ctx.hand_id,
        checksum = %hex::encode(&event.checksum()[..8]),
        "deck shuffled"
    );
    event
}

/// Classic Fisher-Yates: for `i` from the last index down to 1, swap item `i`
/// with a uniformly chosen item in `[0, i]`.
pub(crate) fn fisher_yates<T>(items: &mut [T], rng: &mut RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.next_bounded((i + 1) as u32) as usize;
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_item_is_untouched_and_draws_nothing() {
        let mut rng = RandomSource::from_seed(&[1u8; 40]);
        let mut items = [42];
        fisher_yates(&mut items, &mut rng);
        assert_eq!(items, [42]);
        assert_eq!(rng.counter(), 0);
    }

    #[test]
    fn draws_one_index_per_position() {
        let mut rng = RandomSource::from_seed(&[1u8; 40]);
        let mut deck = Deck::new();
        shuffle(&mut deck, &mut rng, HandContext::new(Uuid::nil()));
        // 51 draws of two words each, plus any rejected draws
        assert!(rng.counter() >= 102);
    }

    #[test]
    fn shuffle_rewinds_a_partly_dealt_deck() {
        let mut rng = RandomSource::from_seed(&[2u8; 40]);
        let mut deck = Deck::new();
        deck.deal();
        deck.deal();
        shuffle(&mut deck, &mut rng, HandContext::new(Uuid::nil()));
        assert_eq!(deck.remaining(), 52);
    }
}
