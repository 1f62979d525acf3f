use quickcheck::{Arbitrary, Gen};

use crate::{reconcile, Card, HandEntry, Rank, Suit};

const ORDINARY_RANKS: [Rank; 13] = [
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
];

impl Arbitrary for Suit {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Suit::ALL).unwrap()
    }
}

impl Arbitrary for Rank {
    fn arbitrary(g: &mut Gen) -> Self {
        if u8::arbitrary(g) % 8 == 0 {
            *g.choose(&[Rank::Small, Rank::Big]).unwrap()
        } else {
            *g.choose(&ORDINARY_RANKS).unwrap()
        }
    }
}

/// Only produces cards that exist in a real deck, i.e. jokers are always
/// big or small and ordinary suits never are.
impl Arbitrary for Card {
    fn arbitrary(g: &mut Gen) -> Self {
        let suit = Suit::arbitrary(g);
        let rank = if suit == Suit::Joker {
            *g.choose(&[Rank::Small, Rank::Big]).unwrap()
        } else {
            *g.choose(&ORDINARY_RANKS).unwrap()
        };
        Card { suit, rank }
    }
}

/// A hand drawn from only a few distinct cards, so that duplicates are common.
#[derive(Clone, Debug)]
pub struct SmallHand(pub Vec<HandEntry>);

const FEW_CARDS: [Card; 6] = [
    Card {
        suit: Suit::Club,
        rank: Rank::Two,
    },
    Card {
        suit: Suit::Diamond,
        rank: Rank::Two,
    },
    Card {
        suit: Suit::Club,
        rank: Rank::Ace,
    },
    Card {
        suit: Suit::Spade,
        rank: Rank::Ten,
    },
    Card {
        suit: Suit::Joker,
        rank: Rank::Big,
    },
    Card {
        suit: Suit::Joker,
        rank: Rank::Small,
    },
];

impl Arbitrary for SmallHand {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 12;
        let cards: Vec<Card> = (0..len).map(|_| *g.choose(&FEW_CARDS).unwrap()).collect();
        let mut hand = reconcile(&[], &cards);
        for entry in hand.iter_mut() {
            entry.selected = bool::arbitrary(g);
        }
        SmallHand(hand)
    }
}

pub fn cards_of(hand: &[HandEntry]) -> Vec<Card> {
    hand.iter().map(|entry| entry.card).collect()
}
