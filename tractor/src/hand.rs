use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{match_by_key_preserving_order, Card};

/// A card in the local player's hand, as displayed.
///
/// `selected` is purely local and never comes from the authority.
/// `identity_key` only exists so that a UI can diff hands across updates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandEntry {
    #[serde(flatten)]
    pub card: Card,
    pub selected: bool,
    pub identity_key: String,
}

/// Builds the hand to display after the authority pushed `new_hand`.
///
/// The result contains exactly the cards of `new_hand`, in that order. A
/// card keeps the `selected` flag of the entry in `previous` it is matched
/// with; cards are matched on suit and rank, first available entry first
/// (see [`match_by_key_preserving_order`]). Unmatched cards start unselected.
///
/// Identity keys are `suit ++ rank ++ n`, where `n` counts the earlier
/// entries with the same suit and rank in the result, wherever they are.
pub fn reconcile(previous: &[HandEntry], new_hand: &[Card]) -> Vec<HandEntry> {
    let matched = match_by_key_preserving_order(previous, new_hand, |entry| entry.card, |card| *card);

    let mut duplicates: HashMap<Card, usize> = HashMap::new();
    new_hand
        .iter()
        .zip(matched)
        .map(|(&card, prev)| {
            let n = duplicates.entry(card).or_insert(0);
            let identity_key = format!("{}{}{}", card.suit, card.rank, n);
            *n += 1;
            HandEntry {
                card,
                selected: prev.is_some_and(|p| p.selected),
                identity_key,
            }
        })
        .collect()
}

/// The cards the user has currently selected, in hand order.
pub fn selected_cards(hand: &[HandEntry]) -> Vec<Card> {
    hand.iter()
        .filter(|entry| entry.selected)
        .map(|entry| entry.card)
        .collect()
}
