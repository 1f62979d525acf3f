use crate::{Status, Suit};

/// The error type for local user commands on a [`ClientView`](crate::ClientView).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    NoSuchCard { index: usize, hand_len: usize },
    NotDeclarable { suit: Suit },
    NothingSelected,
    WrongPhase { status: Status },
}

impl std::error::Error for ActionError {}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionError::NoSuchCard { index, hand_len } => write!(
                f,
                "There is no card at position {} in a hand of {} cards",
                index, hand_len
            ),
            ActionError::NotDeclarable { suit } => {
                write!(f, "Not enough trump-rank cards to declare suit {}", suit)
            }
            ActionError::NothingSelected => write!(f, "No cards are selected"),
            ActionError::WrongPhase { status } => {
                write!(f, "This action is not possible while the round is in phase {}", status)
            }
        }
    }
}
