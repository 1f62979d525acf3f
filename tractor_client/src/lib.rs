use std::io::{BufRead, Write};

use tracing::{debug, info, trace, warn};
use tractor::{ActionError, ClientAction, ClientView, Input, Output};

/// The client side of one connection to the authority.
///
/// Holds the current [`ClientView`] and turns each [`Input`] into the
/// [`Output`]s that should be emitted in response.
#[derive(Debug, Default)]
pub struct Session {
    view: ClientView,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ClientView {
        &self.view
    }

    pub fn handle(&mut self, input: Input) -> Vec<Output> {
        match input {
            Input::State(snapshot) => {
                self.view = self.view.apply_snapshot(&snapshot);
                debug!(
                    status = %self.view.status,
                    hand_len = self.view.hand.len(),
                    declarable = ?self.view.declarable,
                    "Applied snapshot"
                );
                vec![self.view.to_output()]
            }
            Input::CardDealt { player, card } => {
                // The authority follows up with a full snapshot
                trace!(player, card = ?card, "Card dealt");
                Vec::new()
            }
            Input::PlayerDeclared { player, cards } => {
                info!(player, num_cards = cards.len(), "Player declared");
                Vec::new()
            }
            Input::Error { message } => {
                warn!(%message, "Error from authority");
                self.view = self.view.with_error(&message);
                vec![self.view.to_output()]
            }
            Input::Toggle { index } => match self.view.toggle(index) {
                Ok(()) => vec![self.view.to_output()],
                Err(err) => vec![rejected(err)],
            },
            Input::Declare { suit } => send_or_reject(self.view.declare(suit)),
            Input::Play => send_or_reject(self.view.play()),
            Input::Suggest => send_or_reject(self.view.suggest()),
        }
    }

    /// Processes newline-delimited JSON inputs until EOF.
    ///
    /// Only I/O failures end the session early. A line that is not a valid
    /// [`Input`] is answered with [`Output::Rejected`].
    pub fn run(&mut self, mut reader: impl BufRead, mut writer: impl Write) -> anyhow::Result<()> {
        // Lines are read as bytes, so invalid UTF-8 is a parse error, not an I/O error
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if buf.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            let outputs = match serde_json::from_slice::<Input>(&buf) {
                Ok(input) => self.handle(input),
                Err(err) => {
                    warn!(%err, "Could not parse input line");
                    vec![Output::Rejected {
                        reason: format!("Invalid input: {}", err),
                    }]
                }
            };
            for output in &outputs {
                serde_json::to_writer(&mut writer, output)?;
                writeln!(writer)?;
            }
            writer.flush()?;
        }
        debug!("Input closed, ending session");
        Ok(())
    }
}

fn send_or_reject(result: Result<ClientAction, ActionError>) -> Vec<Output> {
    match result {
        Ok(action) => {
            debug!(?action, "Sending action");
            vec![Output::Send { action }]
        }
        Err(err) => vec![rejected(err)],
    }
}

fn rejected(err: ActionError) -> Output {
    info!(%err, "Rejected local command");
    Output::Rejected {
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use tractor::{card, Status, Suit, SuitsSet};

    use super::*;

    fn run_lines(session: &mut Session, lines: &[&str]) -> Vec<Output> {
        let input = lines.join("\n");
        let mut out = Vec::new();
        session.run(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    const DEALING: &str = r#"{"type": "state", "status": "dealing", "trump_value": "2",
        "hand": [{"suit": "c", "value": "2"}, {"suit": "c", "value": "2"}, {"suit": "d", "value": "2"}],
        "declaration": {"player": 1, "cards": [{"suit": "s", "value": "2"}]}}"#;

    #[test]
    fn snapshot_then_declare() {
        let mut session = Session::new();
        let dealing = DEALING.replace('\n', " ");
        let outputs = run_lines(
            &mut session,
            &[
                &dealing,
                "",
                r#"{"type": "declare", "suit": "c"}"#,
                r#"{"type": "declare", "suit": "d"}"#,
            ],
        );
        assert_eq!(outputs.len(), 3);
        match &outputs[0] {
            Output::View {
                status, declarable, ..
            } => {
                assert_eq!(*status, Status::Dealing);
                assert_eq!(*declarable, SuitsSet::from_iter([Suit::Club]));
            }
            other => panic!("expected a view, got {:?}", other),
        }
        assert_eq!(
            outputs[1],
            Output::Send {
                action: ClientAction::RoundDeclare {
                    cards: vec![card!("2c"), card!("2c")]
                }
            }
        );
        assert!(matches!(outputs[2], Output::Rejected { .. }));
    }

    #[test]
    fn bad_lines_do_not_end_session() {
        let mut session = Session::new();
        let outputs = run_lines(
            &mut session,
            &[
                "not json",
                r#"{"type": "toggle", "index": 0}"#,
                r#"{"type": "error", "message": "slow down"}"#,
            ],
        );
        assert_eq!(outputs.len(), 3);
        assert!(matches!(outputs[0], Output::Rejected { .. }));
        assert!(matches!(outputs[1], Output::Rejected { .. }));
        assert_eq!(session.view().error.as_deref(), Some("slow down"));
    }

    #[test]
    fn invalid_utf8_is_rejected_not_fatal() {
        let mut session = Session::new();
        let input: &[u8] = b"\xff\xfe garbage\n{\"type\":\"toggle\",\"index\":0}\n";
        let mut out = Vec::new();
        session.run(input, &mut out).unwrap();
        let outputs: Vec<Output> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(outputs.len(), 2);
        assert!(matches!(outputs[0], Output::Rejected { .. }));
        // The toggle on the next line was still handled
        match &outputs[1] {
            Output::Rejected { reason } => assert!(reason.contains("no card at position 0")),
            other => panic!("expected a rejection, got {:?}", other),
        }
    }

    #[test]
    fn toggled_selection_is_played() {
        let mut session = Session::new();
        let playing = r#"{"type": "state", "status": "playing", "trump_value": "5", "hand": [{"suit": "h", "value": "K"}, {"suit": "joker", "value": "small"}]}"#;
        session.handle(serde_json::from_str(playing).unwrap());
        session.handle(Input::Toggle { index: 1 });
        // A new push with the same cards keeps the selection
        session.handle(serde_json::from_str(playing).unwrap());
        assert_eq!(
            session.handle(Input::Play),
            vec![Output::Send {
                action: ClientAction::RoundPlay {
                    cards: vec![card!("smalljoker")]
                }
            }]
        );
        assert!(session.handle(Input::CardDealt { player: 0, card: None }).is_empty());
    }
}
