use crate::quiz::bank::QuestionBank;
use crate::quiz::section::SectionSession;
use crate::view::{CallbackData, Card, CardSurface};

/// Per-chat state. Answers only live while their section is on screen.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum State {
    #[default]
    Menu,
    Section {
        session: SectionSession,
    },
}

/// What to do about one answer button press.
#[derive(Debug, PartialEq)]
pub enum Press {
    /// Missing or unusable payload.
    Ignored,
    /// The button belongs to a section display that is no longer open.
    Stale,
    /// Same answer as before. Telegram rejects edits that change nothing.
    Unchanged,
    Redraw { session: SectionSession, card: Card },
}

/// Applies a button press to the chat state. Every outcome still has to be
/// acknowledged by the caller.
pub fn resolve_press(state: State, bank: &QuestionBank, data: Option<&str>) -> Press {
    let Some(data) = data else {
        return Press::Ignored;
    };
    let pressed = match CallbackData::parse(data) {
        Ok(pressed) => pressed,
        Err(err) => {
            log::warn!("Ignoring callback data {:?}: {}", data, err);
            return Press::Ignored;
        }
    };

    let mut session = match state {
        State::Section { session }
            if session.topic == pressed.topic && session.display == pressed.display =>
        {
            session
        }
        _ => {
            log::debug!("Stale button {:?}", data);
            return Press::Stale;
        }
    };

    let section = match bank.section(session.topic) {
        Ok(section) => section,
        Err(err) => {
            log::warn!("Ignoring callback data {:?}: {}", data, err);
            return Press::Ignored;
        }
    };

    let mut surface = CardSurface::activating(&session, pressed.control);
    match session.render_one(section, pressed.control.ordinal, &mut surface) {
        Ok(true) => match surface.into_cards().into_iter().next() {
            Some(card) => Press::Redraw { session, card },
            None => Press::Unchanged,
        },
        Ok(false) => Press::Unchanged,
        Err(err) => {
            log::warn!("Ignoring callback data {:?}: {}", data, err);
            Press::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::quiz::{Answer, AnswerState, Topic};

    fn open(topic: Topic, display: i32) -> State {
        State::Section {
            session: SectionSession::new(topic, display),
        }
    }

    fn redrawn(press: Press) -> (SectionSession, Card) {
        match press {
            Press::Redraw { session, card } => (session, card),
            other => panic!("expected a redraw, got {other:?}"),
        }
    }

    #[rstest]
    #[case::no_payload(None)]
    #[case::malformed(Some("rbc:1:V"))]
    #[case::unknown_question(Some("rbc:20:99:V"))]
    fn unusable_presses_are_ignored(#[case] data: Option<&str>) {
        let bank = QuestionBank::standard();
        assert_eq!(
            resolve_press(open(Topic::RealBusinessCycles, 20), &bank, data),
            Press::Ignored
        );
    }

    #[rstest]
    #[case::menu(State::Menu)]
    #[case::other_topic(open(Topic::NewKeynesian, 20))]
    #[case::older_display(open(Topic::RealBusinessCycles, 30))]
    fn presses_outside_the_open_display_are_stale(#[case] state: State) {
        let bank = QuestionBank::standard();
        assert_eq!(
            resolve_press(state, &bank, Some("rbc:20:1:V")),
            Press::Stale
        );
    }

    #[test]
    fn reopened_topic_ignores_buttons_of_the_previous_display() {
        let bank = QuestionBank::standard();
        let state = open(Topic::RealBusinessCycles, 30);

        assert_eq!(
            resolve_press(state.clone(), &bank, Some("rbc:20:1:V")),
            Press::Stale
        );

        let (session, card) = redrawn(resolve_press(state, &bank, Some("rbc:30:1:V")));
        assert_eq!(session.state(1), AnswerState::Answered(Answer::True));
        assert!(card.text.contains("❌ INCORRETO! A resposta correta é: F"));
        assert!(card.text.contains("<b>Justificativa:</b>"));
    }

    #[test]
    fn pressing_the_same_answer_twice_is_unchanged() {
        let bank = QuestionBank::standard();

        let (session, card) = redrawn(resolve_press(
            open(Topic::RationalExpectations, 5),
            &bank,
            Some("ter:5:2:V"),
        ));
        assert!(card.text.contains("✅ CORRETO! Muito bem!"));

        let state = State::Section { session };
        assert_eq!(
            resolve_press(state, &bank, Some("ter:5:2:V")),
            Press::Unchanged
        );
    }

    #[test]
    fn changing_the_answer_redraws_only_that_question() {
        let bank = QuestionBank::standard();

        let (session, _) = redrawn(resolve_press(
            open(Topic::LabourMarket, 7),
            &bank,
            Some("mt:7:3:F"),
        ));
        let (session, card) = redrawn(resolve_press(
            State::Section { session },
            &bank,
            Some("mt:7:3:V"),
        ));

        assert!(card.text.starts_with("<b>Questão 3/10</b>"));
        assert!(card.text.contains("✅ CORRETO! Muito bem!"));
        assert_eq!(session.state(3), AnswerState::Answered(Answer::True));
        assert_eq!(session.state(1), AnswerState::Unanswered);
    }
}
