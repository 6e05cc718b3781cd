use crate::quiz::{Answer, AnswerState, Question};

/// Identifies one selectable control: the answer button of a given question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Control {
    pub ordinal: usize,
    pub answer: Answer,
}

impl Control {
    pub fn new(ordinal: usize, answer: Answer) -> Self {
        Self { ordinal, answer }
    }

    pub fn label(&self) -> &'static str {
        self.answer.label()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { correct_answer: Answer },
}

impl Verdict {
    pub fn message(&self) -> String {
        match self {
            Verdict::Correct => "✅ CORRETO! Muito bem!".to_string(),
            Verdict::Incorrect { correct_answer } => {
                format!("❌ INCORRETO! A resposta correta é: {}", correct_answer)
            }
        }
    }
}

pub fn verdict(question: &Question, answer: Answer) -> Verdict {
    if question.is_correct(answer) {
        Verdict::Correct
    } else {
        Verdict::Incorrect {
            correct_answer: question.correct_answer,
        }
    }
}

/// A unit of display content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Header {
        icon: &'static str,
        title: &'static str,
        description: &'static str,
    },
    Prompt {
        ordinal: usize,
        total: usize,
        text: &'static str,
    },
    Verdict(Verdict),
    Justification(&'static str),
    Divider,
    Complete,
}

/// What the quiz needs from whatever is displaying it.
pub trait Surface {
    /// Registers a control and reports whether it was activated during the
    /// current cycle.
    fn control(&mut self, control: &Control) -> bool;

    fn emit(&mut self, block: Block);
}

/// Renders one question. An activated control is recorded into `state`
/// before the verdict is drawn, so the verdict always reflects the latest
/// selection and stays put on later cycles.
pub fn render_question<S: Surface>(
    question: &Question,
    ordinal: usize,
    total: usize,
    state: &mut AnswerState,
    surface: &mut S,
) {
    surface.emit(Block::Prompt {
        ordinal,
        total,
        text: question.prompt,
    });

    // Both controls are registered every cycle, even after a hit.
    let mut selected = None;
    for answer in Answer::ALL {
        if surface.control(&Control::new(ordinal, answer)) && selected.is_none() {
            selected = Some(answer);
        }
    }
    if let Some(answer) = selected {
        *state = AnswerState::Answered(answer);
    }

    if let AnswerState::Answered(answer) = *state {
        surface.emit(Block::Verdict(verdict(question, answer)));
        surface.emit(Block::Justification(question.justification));
    }

    surface.emit(Block::Divider);
}

#[cfg(test)]
pub(crate) mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    /// Records everything and activates the controls it was told to.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub activate: Vec<Control>,
        pub controls: Vec<Control>,
        pub blocks: Vec<Block>,
    }

    impl RecordingSurface {
        pub fn activating(control: Control) -> Self {
            Self {
                activate: vec![control],
                ..Default::default()
            }
        }
    }

    impl Surface for RecordingSurface {
        fn control(&mut self, control: &Control) -> bool {
            self.controls.push(*control);
            self.activate.contains(control)
        }

        fn emit(&mut self, block: Block) {
            self.blocks.push(block);
        }
    }

    const QUESTION: Question = Question::new("X", Answer::True, "Y");

    fn prompt() -> Block {
        Block::Prompt {
            ordinal: 1,
            total: 1,
            text: "X",
        }
    }

    #[test]
    fn unanswered_shows_no_verdict_or_justification() {
        let mut surface = RecordingSurface::default();
        let mut state = AnswerState::Unanswered;

        render_question(&QUESTION, 1, 1, &mut state, &mut surface);

        assert_eq!(state, AnswerState::Unanswered);
        assert_eq!(surface.blocks, vec![prompt(), Block::Divider]);
        assert_eq!(
            surface.controls,
            vec![
                Control::new(1, Answer::True),
                Control::new(1, Answer::False)
            ]
        );
    }

    #[rstest]
    #[case::correct(Answer::True, Verdict::Correct)]
    #[case::incorrect(Answer::False, Verdict::Incorrect { correct_answer: Answer::True })]
    fn selecting_shows_verdict_and_justification(#[case] answer: Answer, #[case] expected: Verdict) {
        let mut surface = RecordingSurface::activating(Control::new(1, answer));
        let mut state = AnswerState::Unanswered;

        render_question(&QUESTION, 1, 1, &mut state, &mut surface);

        assert_eq!(state, AnswerState::Answered(answer));
        assert_eq!(
            surface.blocks,
            vec![
                prompt(),
                Block::Verdict(expected),
                Block::Justification("Y"),
                Block::Divider
            ]
        );
    }

    #[test]
    fn answered_state_is_kept_without_new_activation() {
        let mut surface = RecordingSurface::default();
        let mut state = AnswerState::Answered(Answer::False);

        render_question(&QUESTION, 1, 1, &mut state, &mut surface);

        assert_eq!(state, AnswerState::Answered(Answer::False));
        assert_eq!(
            surface.blocks[1],
            Block::Verdict(Verdict::Incorrect {
                correct_answer: Answer::True
            })
        );
    }

    #[test]
    fn reselecting_same_control_is_idempotent() {
        let control = Control::new(1, Answer::True);
        let mut state = AnswerState::Unanswered;

        let mut first = RecordingSurface::activating(control);
        render_question(&QUESTION, 1, 1, &mut state, &mut first);
        let mut second = RecordingSurface::activating(control);
        render_question(&QUESTION, 1, 1, &mut state, &mut second);

        assert_eq!(first.blocks, second.blocks);
    }

    #[test]
    fn controls_of_other_questions_are_ignored() {
        let mut surface = RecordingSurface::activating(Control::new(2, Answer::True));
        let mut state = AnswerState::Unanswered;

        render_question(&QUESTION, 1, 1, &mut state, &mut surface);

        assert_eq!(state, AnswerState::Unanswered);
    }

    #[test]
    fn verdict_messages() {
        assert_eq!(Verdict::Correct.message(), "✅ CORRETO! Muito bem!");
        assert_eq!(
            Verdict::Incorrect {
                correct_answer: Answer::True
            }
            .message(),
            "❌ INCORRETO! A resposta correta é: V"
        );
    }
}
