use serde::{Deserialize, Serialize};

use crate::{Card, Declaration, HandEntry, Rank, Suit, SuitsSet};

/// The phase of the round, as reported by the authority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Cards are being dealt and trump can be declared or overturned.
    #[serde(alias = "declaring")]
    Dealing,
    /// The declarer is choosing the bottom.
    Bottom,
    /// Tricks are being played.
    Playing,
    /// Any phase this client has no special handling for.
    #[default]
    #[serde(other)]
    Other,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Status::Dealing => "dealing",
            Status::Bottom => "bottom",
            Status::Playing => "playing",
            Status::Other => "other",
        };
        f.write_str(name)
    }
}

/// One push of the complete round state, from the point of view of this player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub status: Status,
    /// This player's hand, in no particular order.
    pub hand: Vec<Card>,
    pub trump_value: Rank,
    #[serde(default)]
    pub declaration: Option<Declaration>,
    /// This player's seat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_player: Option<usize>,
}

/// A message for the authority.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ClientAction {
    RoundDeclare { cards: Vec<Card> },
    RoundSetBottom { cards: Vec<Card> },
    RoundPlay { cards: Vec<Card> },
    RoundSuggestPlay,
    RoundSuggestBottom,
}

/// One line of input to the client: either pushed by the authority or
/// issued by the local user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Input {
    /// The authority pushed a new [`Snapshot`].
    State(Snapshot),
    /// A card was dealt. `card` is only present if it was dealt to us.
    CardDealt {
        player: usize,
        #[serde(default)]
        card: Option<Card>,
    },
    PlayerDeclared { player: usize, cards: Vec<Card> },
    /// The authority rejected something we sent.
    Error { message: String },
    /// Flip the selection of the card at this position in the displayed hand.
    Toggle { index: usize },
    /// Declare the given suit as trump.
    Declare { suit: Suit },
    /// Play the selected cards, or set them as the bottom.
    Play,
    /// Ask the authority for a suggested play or bottom.
    Suggest,
}

/// One line of output from the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Output {
    /// What to display.
    View {
        status: Status,
        hand: Vec<HandEntry>,
        declarable: SuitsSet,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    /// Forward this action to the authority.
    Send { action: ClientAction },
    /// A local command could not be carried out.
    Rejected { reason: String },
}
