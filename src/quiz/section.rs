use std::collections::BTreeMap;

use thiserror::Error;

use crate::quiz::render::{render_question, Block, Surface};
use crate::quiz::{AnswerState, Topic, TopicSection};

#[derive(Error, Debug, PartialEq)]
pub enum SectionError {
    #[error("\"{topic}\" has no question {ordinal}")]
    UnknownQuestion { topic: Topic, ordinal: usize },
    #[error("Session belongs to \"{session}\", not \"{section}\"")]
    TopicMismatch { session: Topic, section: Topic },
}

/// Answers given while one section is on screen, keyed by 1-based ordinal.
/// A new session is started whenever a topic is selected. `display` tells
/// apart two displays of the same topic in one chat.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionSession {
    pub topic: Topic,
    pub display: i32,
    pub answers: BTreeMap<usize, AnswerState>,
}

impl SectionSession {
    pub fn new(topic: Topic, display: i32) -> Self {
        Self {
            topic,
            display,
            answers: BTreeMap::new(),
        }
    }

    pub fn state(&self, ordinal: usize) -> AnswerState {
        self.answers.get(&ordinal).copied().unwrap_or_default()
    }

    /// Draws the whole section: header, every question in order, and the
    /// completion marker. The marker does not depend on how many questions
    /// were answered.
    pub fn render_section<S: Surface>(
        &mut self,
        section: &TopicSection,
        surface: &mut S,
    ) -> Result<(), SectionError> {
        self.check_topic(section)?;

        surface.emit(Block::Header {
            icon: section.icon,
            title: section.title,
            description: section.description,
        });

        let total = section.len();
        for (i, question) in section.questions.iter().enumerate() {
            let state = self.answers.entry(i + 1).or_default();
            render_question(question, i + 1, total, state, surface);
        }

        surface.emit(Block::Complete);
        Ok(())
    }

    /// Runs one cycle for a single question and reports whether its state
    /// changed.
    pub fn render_one<S: Surface>(
        &mut self,
        section: &TopicSection,
        ordinal: usize,
        surface: &mut S,
    ) -> Result<bool, SectionError> {
        self.check_topic(section)?;
        let question = section
            .question(ordinal)
            .ok_or(SectionError::UnknownQuestion {
                topic: section.topic,
                ordinal,
            })?;

        let before = self.state(ordinal);
        let state = self.answers.entry(ordinal).or_default();
        render_question(question, ordinal, section.len(), state, surface);
        Ok(*state != before)
    }

    fn check_topic(&self, section: &TopicSection) -> Result<(), SectionError> {
        if section.topic != self.topic {
            return Err(SectionError::TopicMismatch {
                session: self.topic,
                section: section.topic,
            });
        }
        Ok(())
    }
}
