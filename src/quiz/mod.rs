pub mod bank;
pub mod render;
pub mod section;

use std::fmt;

use thiserror::Error;

/// The two possible answers to a true/false statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Answer {
    #[serde(rename = "V")]
    True,
    #[serde(rename = "F")]
    False,
}

impl Answer {
    pub const ALL: [Answer; 2] = [Answer::True, Answer::False];

    /// Short code shown to the user and carried in callback data.
    pub fn code(self) -> &'static str {
        match self {
            Answer::True => "V",
            Answer::False => "F",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Answer::True => "Verdadeiro (V)",
            Answer::False => "Falso (F)",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, AnswerCodeError> {
        match code {
            "V" => Ok(Answer::True),
            "F" => Ok(Answer::False),
            other => Err(AnswerCodeError(other.to_string())),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Answer code must be \"V\" or \"F\" (got {0:?})")]
pub struct AnswerCodeError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub correct_answer: Answer,
    pub justification: &'static str,
}

impl Question {
    pub const fn new(prompt: &'static str, correct_answer: Answer, justification: &'static str) -> Self {
        Self {
            prompt,
            correct_answer,
            justification,
        }
    }

    pub fn is_correct(&self, answer: Answer) -> bool {
        self.correct_answer == answer
    }

    /// `ordinal` is 1-based and only used to locate the record in the error.
    pub fn validate(&self, topic: Topic, ordinal: usize) -> Result<(), BankError> {
        if self.prompt.trim().is_empty() {
            return Err(BankError::EmptyPrompt { topic, ordinal });
        }
        if self.justification.trim().is_empty() {
            return Err(BankError::EmptyJustification { topic, ordinal });
        }
        Ok(())
    }
}

/// Per-question interaction state for one display of a section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AnswerState {
    #[default]
    Unanswered,
    Answered(Answer),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Topic {
    RationalExpectations,
    RealBusinessCycles,
    NewKeynesian,
    LabourMarket,
}

impl Topic {
    /// Menu order.
    pub const ALL: [Topic; 4] = [
        Topic::RationalExpectations,
        Topic::RealBusinessCycles,
        Topic::NewKeynesian,
        Topic::LabourMarket,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Topic::RationalExpectations => "ter",
            Topic::RealBusinessCycles => "rbc",
            Topic::NewKeynesian => "nk",
            Topic::LabourMarket => "mt",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|topic| topic.code() == code)
    }

    /// Label of the navigation menu entry.
    pub fn menu_label(self) -> &'static str {
        match self {
            Topic::RationalExpectations => "Teoria das Expectativas Racionais",
            Topic::RealBusinessCycles => "Ciclos Reais de Negócios",
            Topic::NewKeynesian => "Modelos Novo-Keynesianos",
            Topic::LabourMarket => "Mercado de Trabalho e Assimetrias",
        }
    }

    pub fn from_menu_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|topic| topic.menu_label() == label)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.menu_label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSection {
    pub topic: Topic,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub questions: Vec<Question>,
}

impl TopicSection {
    pub fn new(
        topic: Topic,
        title: &'static str,
        description: &'static str,
        icon: &'static str,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            topic,
            title,
            description,
            icon,
            questions,
        }
    }

    /// Looks a question up by its 1-based ordinal.
    pub fn question(&self, ordinal: usize) -> Option<&Question> {
        ordinal.checked_sub(1).and_then(|i| self.questions.get(i))
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum BankError {
    #[error("Question {ordinal} of \"{topic}\" has an empty prompt")]
    EmptyPrompt { topic: Topic, ordinal: usize },
    #[error("Question {ordinal} of \"{topic}\" has an empty justification")]
    EmptyJustification { topic: Topic, ordinal: usize },
    #[error("Topic \"{0}\" has no section in the bank")]
    MissingSection(Topic),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("V", Ok(Answer::True))]
    #[case("F", Ok(Answer::False))]
    #[case("v", Err(AnswerCodeError("v".to_string())))]
    #[case("", Err(AnswerCodeError(String::new())))]
    fn answer_from_code(#[case] code: &str, #[case] expected: Result<Answer, AnswerCodeError>) {
        assert_eq!(Answer::from_code(code), expected);
    }

    #[test]
    fn topic_codes_and_labels_are_unique() {
        for topic in Topic::ALL {
            assert_eq!(Topic::from_code(topic.code()), Some(topic));
            assert_eq!(Topic::from_menu_label(topic.menu_label()), Some(topic));
        }
        assert_eq!(Topic::from_code("xx"), None);
        assert_eq!(Topic::from_menu_label("Página Inicial"), None);
    }

    #[rstest]
    #[case::empty_prompt(Question::new("  ", Answer::True, "Y"), Err(BankError::EmptyPrompt { topic: Topic::NewKeynesian, ordinal: 3 }))]
    #[case::empty_justification(Question::new("X", Answer::False, ""), Err(BankError::EmptyJustification { topic: Topic::NewKeynesian, ordinal: 3 }))]
    #[case::valid(Question::new("X", Answer::True, "Y"), Ok(()))]
    fn question_validate(#[case] question: Question, #[case] expected: Result<(), BankError>) {
        assert_eq!(question.validate(Topic::NewKeynesian, 3), expected);
    }

    #[test]
    fn section_question_by_ordinal() {
        let section = TopicSection::new(
            Topic::LabourMarket,
            "T",
            "D",
            "*",
            vec![Question::new("X", Answer::True, "Y")],
        );
        assert_eq!(section.question(0), None);
        assert_eq!(section.question(1).map(|q| q.prompt), Some("X"));
        assert_eq!(section.question(2), None);
    }
}
