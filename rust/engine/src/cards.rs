use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Represents one of the four suits in a standard 52-card deck.
/// The discriminant is the suit's contribution to a card id.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs = 0,
    /// Diamonds suit (♦)
    Diamonds = 1,
    /// Hearts suit (♥)
    Hearts = 2,
    /// Spades suit (♠)
    Spades = 3,
}

impl Suit {
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(v: u8) -> Option<Suit> {
        match v {
            0 => Some(Suit::Clubs),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Hearts),
            3 => Some(Suit::Spades),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// The discriminant is the pip value, with Ace high at 14.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    /// Pip value, 2 through 14.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Zero-based index used in card ids (Two is 0, Ace is 12).
    pub fn index(self) -> u8 {
        self as u8 - 2
    }

    pub fn from_value(v: u8) -> Option<Rank> {
        match v {
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            14 => Some(Rank::Ace),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            r => char::from(b'0' + r.value()),
        }
    }
}

/// A single playing card.
///
/// Cards are plain values: two cards are the same card exactly when rank and
/// suit match. The canonical wire form is the id `rank_index * 4 + suit_index`,
/// which is also how a card serializes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Canonical id in `[0, 52)`.
    pub fn id(self) -> u8 {
        self.rank.index() * 4 + self.suit.index()
    }

    pub fn from_id(id: u8) -> Result<Card, EngineError> {
        if usize::from(id) >= DECK_SIZE {
            return Err(EngineError::InvalidCard(format!("card id {} out of range", id)));
        }
        let rank = Rank::from_value(id / 4 + 2)
            .ok_or_else(|| EngineError::InvalidCard(format!("card id {}", id)))?;
        let suit = Suit::from_index(id % 4)
            .ok_or_else(|| EngineError::InvalidCard(format!("card id {}", id)))?;
        Ok(Card { rank, suit })
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.id()
    }
}

impl TryFrom<u8> for Card {
    type Error = EngineError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Card::from_id(id)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = EngineError;

    /// Parses notation such as `AS`, `td`, `10h` or `2c`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || EngineError::InvalidCard(format!("unrecognised card '{}'", s));
        let mut chars = s.chars();
        let suit_ch = chars.next_back().ok_or_else(invalid)?;
        let rank_str = chars.as_str();

        let rank = match rank_str.to_ascii_uppercase().as_str() {
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            d if d.len() == 1 => d
                .parse::<u8>()
                .ok()
                .and_then(Rank::from_value)
                .ok_or_else(invalid)?,
            _ => return Err(invalid()),
        };
        let suit = match suit_ch.to_ascii_uppercase() {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(invalid()),
        };
        Ok(Card { rank, suit })
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// All 52 cards in canonical id order (card at index `i` has id `i`).
pub fn full_deck() -> [Card; DECK_SIZE] {
    let ranks = all_ranks();
    let suits = all_suits();
    std::array::from_fn(|i| Card {
        rank: ranks[i / 4],
        suit: suits[i % 4],
    })
}

/// Parses whitespace-separated card notation, e.g. `"AS KS QS JS TS 2H 3D"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, EngineError> {
    s.split_whitespace().map(str::parse).collect()
}
