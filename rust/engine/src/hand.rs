use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::cards::{all_ranks, Card, Rank};

/// Hand categories, weakest first. The derived ordering is the poker ranking.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum HandCategory {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

/// Result of evaluating seven cards.
///
/// Field order matters: the derived `Ord` compares `category` first and then
/// `tie_breaker` lexicographically, which is exactly [`compare`].
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct EvaluatedHand {
    pub category: HandCategory,
    /// Ranks that decide between hands of the same category, most significant
    /// first. Always the same length for a given category.
    pub tie_breaker: Vec<Rank>,
}

impl EvaluatedHand {
    fn new(category: HandCategory, tie_breaker: Vec<Rank>) -> Self {
        Self {
            category,
            tie_breaker,
        }
    }
}

/// Evaluates the best five-card hand contained in `cards`.
///
/// Categories are tested strongest first and the first match wins, since a
/// stronger holding (a full house, say) always contains weaker patterns.
///
/// ```
/// use fairdeal_engine::cards::parse_cards;
/// use fairdeal_engine::hand::{evaluate, HandCategory};
///
/// let cards: [_; 7] = parse_cards("AS 2H 3D 4C 5S 9H TD").unwrap().try_into().unwrap();
/// let hand = evaluate(&cards);
/// assert_eq!(hand.category, HandCategory::Straight);
/// assert_eq!(hand.tie_breaker[0].value(), 5);
/// ```
pub fn evaluate(cards: &[Card; 7]) -> EvaluatedHand {
    let mut rank_counts = [0u8; 15]; // indexed by pip value, 2..=14 used
    let mut rank_mask: u16 = 0;
    let mut suit_counts = [0u8; 4];
    let mut suit_masks = [0u16; 4];
    for c in cards.iter() {
        let bit = rank_bit(c.rank);
        rank_counts[c.rank.value() as usize] += 1;
        rank_mask |= bit;
        let s = c.suit.index() as usize;
        suit_counts[s] += 1;
        suit_masks[s] |= bit;
    }

    // At most one suit can hold five of seven cards.
    let flush_mask = (0..4)
        .find(|&s| suit_counts[s] >= 5)
        .map(|s| suit_masks[s]);

    if let Some(mask) = flush_mask {
        if let Some(high) = straight_high(mask) {
            let category = if high == Rank::Ace {
                HandCategory::RoyalFlush
            } else {
                HandCategory::StraightFlush
            };
            return EvaluatedHand::new(category, vec![high]);
        }
    }

    let quads = ranks_with_count(&rank_counts, 4);
    if let Some(&quad) = quads.first() {
        let kicker = ranks_desc(rank_mask & !rank_bit(quad)).take(1);
        return EvaluatedHand::new(
            HandCategory::FourOfAKind,
            std::iter::once(quad).chain(kicker).collect(),
        );
    }

    let trips = ranks_with_count(&rank_counts, 3);
    let pairs = ranks_with_count(&rank_counts, 2);
    if let Some(&trip) = trips.first() {
        // With two trips the lower set fills the pair slot.
        let pair = trips.get(1).copied().into_iter().chain(pairs.first().copied()).max();
        if let Some(pair) = pair {
            return EvaluatedHand::new(HandCategory::FullHouse, vec![trip, pair]);
        }
    }

    if let Some(mask) = flush_mask {
        return EvaluatedHand::new(HandCategory::Flush, ranks_desc(mask).take(5).collect());
    }

    if let Some(high) = straight_high(rank_mask) {
        return EvaluatedHand::new(HandCategory::Straight, vec![high]);
    }

    if let Some(&trip) = trips.first() {
        let kickers = ranks_desc(rank_mask & !rank_bit(trip)).take(2);
        return EvaluatedHand::new(
            HandCategory::ThreeOfAKind,
            std::iter::once(trip).chain(kickers).collect(),
        );
    }

    if let &[high, low, ..] = pairs.as_slice() {
        // A third pair's rank is a legitimate kicker here.
        let kicker = ranks_desc(rank_mask & !rank_bit(high) & !rank_bit(low)).take(1);
        return EvaluatedHand::new(
            HandCategory::TwoPair,
            [high, low].into_iter().chain(kicker).collect(),
        );
    }

    if let Some(&pair) = pairs.first() {
        let kickers = ranks_desc(rank_mask & !rank_bit(pair)).take(3);
        return EvaluatedHand::new(
            HandCategory::Pair,
            std::iter::once(pair).chain(kickers).collect(),
        );
    }

    EvaluatedHand::new(HandCategory::HighCard, ranks_desc(rank_mask).take(5).collect())
}

/// Category first, then tie-breakers. `Equal` is a split pot.
pub fn compare(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.tie_breaker.cmp(&b.tie_breaker),
        ord => ord,
    }
}

/// Indices of every hand tied for best, in input order.
pub fn winners(hands: &[[Card; 7]]) -> Vec<usize> {
    let evaluated = evaluate_batch(hands);
    let Some(best) = evaluated.iter().max() else {
        return Vec::new();
    };
    evaluated
        .iter()
        .enumerate()
        .filter(|(_, h)| compare(h, best) == Ordering::Equal)
        .map(|(i, _)| i)
        .collect()
}

/// Evaluates many hands, in parallel when the `parallel` feature is on.
pub fn evaluate_batch(hands: &[[Card; 7]]) -> Vec<EvaluatedHand> {
    #[cfg(feature = "parallel")]
    {
        hands.par_iter().map(evaluate).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        hands.iter().map(evaluate).collect()
    }
}

fn rank_bit(r: Rank) -> u16 {
    1u16 << r.value()
}

/// Ranks present in `mask`, highest first.
fn ranks_desc(mask: u16) -> impl Iterator<Item = Rank> {
    all_ranks()
        .into_iter()
        .rev()
        .filter(move |&r| mask & rank_bit(r) != 0)
}

fn ranks_with_count(rank_counts: &[u8; 15], count: u8) -> Vec<Rank> {
    all_ranks()
        .into_iter()
        .rev()
        .filter(|r| rank_counts[r.value() as usize] == count)
        .collect()
}

/// High card of the best straight in `mask`, if any.
///
/// The Ace is also set at bit 1 so the wheel (A-2-3-4-5) comes out as a
/// five-high straight.
fn straight_high(mask: u16) -> Option<Rank> {
    let mut m = mask;
    if m & rank_bit(Rank::Ace) != 0 {
        m |= 1 << 1;
    }
    all_ranks()
        .into_iter()
        .rev()
        .take_while(|&r| r >= Rank::Five)
        .find(|&high| {
            let window = 0b1_1111u16 << (high.value() - 4);
            m & window == window
        })
}
