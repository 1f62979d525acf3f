use std::iter::FusedIterator;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Suit;

/// The suits a player may declare, packed into one byte.
///
/// Built with [`FromIterator`] and read back in [`Suit::ALL`] order.
/// On the wire it is a list of suit names.
///
/// ```
/// use tractor::{Suit, SuitsSet};
/// let set = SuitsSet::from_iter([Suit::Spade, Suit::Club, Suit::Spade]);
/// assert!(set.contains(Suit::Club));
/// assert_eq!(Vec::from_iter(set), vec![Suit::Club, Suit::Spade]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SuitsSet {
    // Bit `suit.index()` is set for each member.
    bits: u8,
}

impl SuitsSet {
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    pub fn contains(self, suit: Suit) -> bool {
        self.bits & (1 << suit.index()) != 0
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }
}

impl FromIterator<Suit> for SuitsSet {
    fn from_iter<T: IntoIterator<Item = Suit>>(iter: T) -> Self {
        let bits = iter
            .into_iter()
            .fold(0, |bits, suit| bits | (1 << suit.index()));
        Self { bits }
    }
}

impl IntoIterator for SuitsSet {
    type Item = Suit;

    type IntoIter = SuitsSetIter;

    fn into_iter(self) -> Self::IntoIter {
        SuitsSetIter { bits: self.bits }
    }
}

/// Iterator over a [`SuitsSet`], lowest suit first.
#[derive(Clone, Copy, Debug)]
pub struct SuitsSetIter {
    bits: u8,
}

impl Iterator for SuitsSetIter {
    type Item = Suit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the lowest set bit
        self.bits &= self.bits - 1;
        Some(Suit::ALL[idx])
    }
}

impl FusedIterator for SuitsSetIter {}

impl Serialize for SuitsSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(*self)
    }
}

impl<'de> Deserialize<'de> for SuitsSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let suits = Vec::<Suit>::deserialize(deserializer)?;
        Ok(Self::from_iter(suits))
    }
}
