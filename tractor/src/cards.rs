use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A playing card. Multi-deck games contain several copies of the same card,
/// and such copies are indistinguishable.
///
/// Only jokers have the big and small ranks, and jokers have no other rank.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    pub suit: Suit,
    #[serde(rename = "value")]
    pub rank: Rank,
}

/// The suit of a [card](Card). Both jokers share the [`Suit::Joker`] suit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    #[serde(rename = "c")]
    Club,
    #[serde(rename = "d")]
    Diamond,
    #[serde(rename = "h")]
    Heart,
    #[serde(rename = "s")]
    Spade,
    #[serde(rename = "joker")]
    Joker,
}

/// The rank of a [card](Card).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
    #[serde(rename = "small")]
    Small,
    #[serde(rename = "big")]
    Big,
}

impl Suit {
    /// The suits that can be declared as trump.
    pub const ORDINARY: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    pub const ALL: [Suit; 5] = [
        Suit::Club,
        Suit::Diamond,
        Suit::Heart,
        Suit::Spade,
        Suit::Joker,
    ];

    /// Position of this suit in [`Suit::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Suit::Club => "c",
            Suit::Diamond => "d",
            Suit::Heart => "h",
            Suit::Spade => "s",
            Suit::Joker => "joker",
        }
    }
}

impl Rank {
    pub fn is_joker_rank(self) -> bool {
        matches!(self, Rank::Small | Rank::Big)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Small => "small",
            Rank::Big => "big",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Like [`Card::new`], but rejects cards that do not exist in a deck.
    pub fn try_new(suit: Suit, rank: Rank) -> Result<Self, CardFromStrErr> {
        if (suit == Suit::Joker) != rank.is_joker_rank() {
            return Err(CardFromStrErr::NoSuchCard);
        }
        Ok(Self { suit, rank })
    }
}

// The unchecked wire form of a card.
#[derive(Deserialize)]
struct RawCard {
    suit: Suit,
    value: Rank,
}

impl TryFrom<RawCard> for Card {
    type Error = CardFromStrErr;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::try_new(raw.suit, raw.value)
    }
}

/// The error type for the [`FromStr`] instances of [`Card`], [`Suit`] and [`Rank`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFromStrErr {
    Empty,
    InvalidRank,
    InvalidSuit,
    NoSuchCard,
}

impl std::error::Error for CardFromStrErr {}

impl std::fmt::Display for CardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardFromStrErr::Empty => write!(f, "Card code is empty"),
            CardFromStrErr::InvalidRank => write!(f, "Card code has an invalid rank"),
            CardFromStrErr::InvalidSuit => write!(f, "Card code has an invalid suit"),
            CardFromStrErr::NoSuchCard => {
                write!(f, "Only jokers are big or small, and jokers are nothing else")
            }
        }
    }
}

impl FromStr for Suit {
    type Err = CardFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.as_str() == s)
            .ok_or(CardFromStrErr::InvalidSuit)
    }
}

impl FromStr for Rank {
    type Err = CardFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            "small" => Rank::Small,
            "big" => Rank::Big,
            _ => return Err(CardFromStrErr::InvalidRank),
        };
        Ok(rank)
    }
}

impl FromStr for Card {
    type Err = CardFromStrErr;

    /// Parses the [`Display`](std::fmt::Display) form, rank first:
    /// `2c`, `10h`, `Qs`, `bigjoker`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(CardFromStrErr::Empty);
        }
        if let Some(rank) = s.strip_suffix("joker") {
            return Card::try_new(Suit::Joker, rank.parse()?);
        }
        // Ordinary suits are a single trailing ASCII letter
        if !s.ends_with(|c: char| c.is_ascii()) {
            return Err(CardFromStrErr::InvalidSuit);
        }
        let (rank, suit) = s.split_at(s.len() - 1);
        let suit: Suit = suit.parse()?;
        let rank: Rank = rank.parse()?;
        Card::try_new(suit, rank)
    }
}

/// Shorthand for creating cards from a string code such as `"10h"` or `"smalljoker"`.
///
/// This macro is just calling the [`FromStr`] instance of [`Card`].
/// ```
/// # use tractor::{card, Card, Rank, Suit};
/// assert_eq!(
///     card!("10h"),
///     Card { suit: Suit::Heart, rank: Rank::Ten }
/// );
/// ```
#[macro_export]
macro_rules! card {
    ($rs:literal) => {
        <$crate::Card as std::str::FromStr>::from_str($rs)
            .expect("Invalid card code given to card! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use card;
