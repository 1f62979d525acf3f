use serde::{Deserialize, Serialize};

use crate::{Card, Rank, Suit, SuitsSet};

/// The trump declaration currently standing, as reported by the authority.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Index of the player who made the declaration.
    pub player: usize,
    /// The cards backing the declaration. Only their number matters here.
    pub cards: Vec<Card>,
}

/// How many trump-rank cards of one suit are needed to declare, or to
/// overturn `current` if there is one.
pub fn required_count(current: Option<&Declaration>) -> usize {
    match current {
        None => 1,
        Some(declaration) => declaration.cards.len() + 1,
    }
}

/// Trump-rank cards in `hand`, counted per suit. Jokers are never counted.
fn trump_rank_counts(hand: impl IntoIterator<Item = Card>, trump_rank: Rank) -> [usize; 4] {
    let mut counts = [0; 4];
    for card in hand {
        if card.suit != Suit::Joker && card.rank == trump_rank {
            counts[card.suit.index()] += 1;
        }
    }
    counts
}

/// The suits the holder of `hand` could declare right now.
///
/// A suit qualifies when the hand holds at least [`required_count`] cards
/// of that suit and `trump_rank`. Works in any phase; whether to show the
/// result is up to the caller.
///
/// ```
/// use tractor::{card, declarable_suits, Rank, Suit, SuitsSet};
/// let hand = [card!("2c"), card!("2c"), card!("2d")];
/// assert_eq!(
///     declarable_suits(hand, Rank::Two, None),
///     SuitsSet::from_iter([Suit::Club, Suit::Diamond])
/// );
/// ```
pub fn declarable_suits(
    hand: impl IntoIterator<Item = Card>,
    trump_rank: Rank,
    current: Option<&Declaration>,
) -> SuitsSet {
    let required = required_count(current);
    let counts = trump_rank_counts(hand, trump_rank);
    Suit::ORDINARY
        .into_iter()
        .filter(|suit| counts[suit.index()] >= required)
        .collect()
}

/// The cards of `hand` that would back a declaration of `suit`.
pub fn declaration_cards(
    hand: impl IntoIterator<Item = Card>,
    trump_rank: Rank,
    suit: Suit,
) -> Vec<Card> {
    if suit == Suit::Joker {
        return Vec::new();
    }
    hand.into_iter()
        .filter(|card| card.suit == suit && card.rank == trump_rank)
        .collect()
}
