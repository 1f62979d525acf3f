use crate::{
    declarable_suits, declaration_cards, reconcile, selected_cards, ActionError, ClientAction,
    HandEntry, Output, Rank, Snapshot, Status, Suit, SuitsSet,
};

/// Everything the client displays, derived from the last [`Snapshot`] and
/// the local selection.
///
/// Updates are pure: [`apply_snapshot`](ClientView::apply_snapshot) takes the
/// previous view and returns the next one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientView {
    pub status: Status,
    /// `None` until the first snapshot arrives.
    pub trump_value: Option<Rank>,
    pub hand: Vec<HandEntry>,
    /// Only non-empty while dealing.
    pub declarable: SuitsSet,
    /// The last error reported by the authority, until the next snapshot.
    pub error: Option<String>,
}

impl ClientView {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn apply_snapshot(&self, snapshot: &Snapshot) -> ClientView {
        let hand = reconcile(&self.hand, &snapshot.hand);
        let declarable = if snapshot.status == Status::Dealing {
            declarable_suits(
                hand.iter().map(|entry| entry.card),
                snapshot.trump_value,
                snapshot.declaration.as_ref(),
            )
        } else {
            SuitsSet::new()
        };
        ClientView {
            status: snapshot.status,
            trump_value: Some(snapshot.trump_value),
            hand,
            declarable,
            error: None,
        }
    }

    #[must_use]
    pub fn with_error(&self, message: &str) -> ClientView {
        ClientView {
            error: Some(String::from(message)),
            ..self.clone()
        }
    }

    pub fn toggle(&mut self, index: usize) -> Result<(), ActionError> {
        let hand_len = self.hand.len();
        let entry = self
            .hand
            .get_mut(index)
            .ok_or(ActionError::NoSuchCard { index, hand_len })?;
        entry.selected = !entry.selected;
        Ok(())
    }

    /// Declares `suit` with every trump-rank card of that suit in the hand.
    pub fn declare(&self, suit: Suit) -> Result<ClientAction, ActionError> {
        let trump_value = match (self.status, self.trump_value) {
            (Status::Dealing, Some(rank)) => rank,
            _ => {
                return Err(ActionError::WrongPhase {
                    status: self.status,
                })
            }
        };
        if !self.declarable.contains(suit) {
            return Err(ActionError::NotDeclarable { suit });
        }
        let cards = declaration_cards(self.hand.iter().map(|entry| entry.card), trump_value, suit);
        Ok(ClientAction::RoundDeclare { cards })
    }

    /// Sends the selected cards, as the bottom or as a play depending on the phase.
    pub fn play(&self) -> Result<ClientAction, ActionError> {
        let cards = selected_cards(&self.hand);
        match self.status {
            Status::Bottom | Status::Playing if cards.is_empty() => {
                Err(ActionError::NothingSelected)
            }
            Status::Bottom => Ok(ClientAction::RoundSetBottom { cards }),
            Status::Playing => Ok(ClientAction::RoundPlay { cards }),
            status => Err(ActionError::WrongPhase { status }),
        }
    }

    pub fn suggest(&self) -> Result<ClientAction, ActionError> {
        match self.status {
            Status::Bottom => Ok(ClientAction::RoundSuggestBottom),
            Status::Playing => Ok(ClientAction::RoundSuggestPlay),
            status => Err(ActionError::WrongPhase { status }),
        }
    }

    pub fn to_output(&self) -> Output {
        Output::View {
            status: self.status,
            hand: self.hand.clone(),
            declarable: self.declarable,
            error: self.error.clone(),
        }
    }
}
