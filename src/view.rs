use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use teloxide::utils::html;
use thiserror::Error;

use crate::quiz::bank::QuestionBank;
use crate::quiz::render::{Block, Control, Surface};
use crate::quiz::section::SectionSession;
use crate::quiz::{Answer, AnswerCodeError, Topic};

/// Payload of an answer button: `<topic>:<display>:<ordinal>:<V|F>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallbackData {
    pub topic: Topic,
    pub display: i32,
    pub control: Control,
}

#[derive(Error, Debug, PartialEq)]
pub enum CallbackError {
    #[error("Malformed callback data {0:?}")]
    Malformed(String),
    #[error("Unknown topic code {0:?}")]
    UnknownTopic(String),
    #[error("Invalid display id {0:?}")]
    InvalidDisplay(String),
    #[error("Invalid question ordinal {0:?}")]
    InvalidOrdinal(String),
    #[error(transparent)]
    Answer(#[from] AnswerCodeError),
}

impl CallbackData {
    pub fn new(topic: Topic, display: i32, control: Control) -> Self {
        Self {
            topic,
            display,
            control,
        }
    }

    pub fn encode(&self) -> String {
        format!(
            "{}:{}:{}:{}",
            self.topic.code(),
            self.display,
            self.control.ordinal,
            self.control.answer.code()
        )
    }

    pub fn parse(data: &str) -> Result<Self, CallbackError> {
        let mut parts = data.split(':');
        let (Some(topic), Some(display), Some(ordinal), Some(answer), None) = (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) else {
            return Err(CallbackError::Malformed(data.to_string()));
        };

        let topic =
            Topic::from_code(topic).ok_or_else(|| CallbackError::UnknownTopic(topic.to_string()))?;
        let display = display
            .parse::<i32>()
            .map_err(|_| CallbackError::InvalidDisplay(display.to_string()))?;
        let ordinal = match ordinal.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => return Err(CallbackError::InvalidOrdinal(ordinal.to_string())),
        };
        let answer = Answer::from_code(answer)?;

        Ok(Self::new(topic, display, Control::new(ordinal, answer)))
    }
}

/// One Telegram message worth of content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Card {
    pub text: String,
    pub buttons: Vec<InlineKeyboardButton>,
}

impl Card {
    fn new(text: String) -> Self {
        Self {
            text,
            buttons: Vec::new(),
        }
    }

    /// Both answer buttons share a single row.
    pub fn keyboard(&self) -> Option<InlineKeyboardMarkup> {
        if self.buttons.is_empty() {
            return None;
        }
        Some(InlineKeyboardMarkup::new(vec![self.buttons.clone()]))
    }
}

/// Turns rendered blocks into Telegram messages: a header card, one card per
/// question carrying its buttons, and the completion card.
#[derive(Debug)]
pub struct CardSurface {
    topic: Topic,
    display: i32,
    activated: Option<Control>,
    cards: Vec<Card>,
}

impl CardSurface {
    pub fn new(session: &SectionSession) -> Self {
        Self {
            topic: session.topic,
            display: session.display,
            activated: None,
            cards: Vec::new(),
        }
    }

    /// A surface for the cycle triggered by pressing `control`.
    pub fn activating(session: &SectionSession, control: Control) -> Self {
        Self {
            activated: Some(control),
            ..Self::new(session)
        }
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    fn current(&mut self) -> &mut Card {
        if self.cards.is_empty() {
            self.cards.push(Card::default());
        }
        let last = self.cards.len() - 1;
        &mut self.cards[last]
    }
}

impl Surface for CardSurface {
    fn control(&mut self, control: &Control) -> bool {
        let data = CallbackData::new(self.topic, self.display, *control).encode();
        self.current()
            .buttons
            .push(InlineKeyboardButton::callback(control.label(), data));
        self.activated == Some(*control)
    }

    fn emit(&mut self, block: Block) {
        match block {
            Block::Header {
                icon,
                title,
                description,
            } => self.cards.push(Card::new(format!(
                "{} <b>{}</b>\n\n<i>{}</i>",
                icon,
                html::escape(title),
                html::escape(description)
            ))),
            Block::Prompt {
                ordinal,
                total,
                text,
            } => self.cards.push(Card::new(format!(
                "<b>Questão {}/{}</b>\n\n{}",
                ordinal,
                total,
                html::escape(text)
            ))),
            Block::Verdict(verdict) => {
                let text = format!("\n\n{}", html::escape(&verdict.message()));
                self.current().text.push_str(&text);
            }
            Block::Justification(justification) => {
                let text = format!("\n\n<b>Justificativa:</b> {}", html::escape(justification));
                self.current().text.push_str(&text);
            }
            Block::Divider => {}
            Block::Complete => self
                .cards
                .push(Card::new("▓▓▓▓▓▓▓▓▓▓ 100%\n\n<b>Seção concluída!</b>".to_string())),
        }
    }
}

pub const HOME_PAGE: &str = "Página Inicial";

pub fn instructions() -> String {
    format!(
        "🧠 <b>Quiz para P2 de Macro III</b>\n\
         <i>por Bernardo Louzada</i>\n\n\
         📝 <b>Instruções</b>\n\
         Bem-vindo ao Quiz de Macroeconomia!\n\n\
         • Responda às questões marcando <b>{}</b> ou <b>{}</b>\n\
         • Veja imediatamente se acertou e leia a justificativa\n\
         • As perguntas estão organizadas por tópicos\n\
         • Use o menu abaixo para navegar entre as seções",
        Answer::True.label(),
        Answer::False.label()
    )
}

pub fn home_page(bank: &QuestionBank) -> String {
    let contents = Topic::ALL
        .iter()
        .map(|topic| format!("• {}", html::escape(topic.menu_label())))
        .collect::<Vec<_>>()
        .join("\n");
    let counts = bank
        .sections()
        .iter()
        .map(|section| {
            let label = match section.topic {
                Topic::LabourMarket => "Mercado de Trabalho",
                other => other.menu_label(),
            };
            format!("• {}: {} questões", html::escape(label), section.len())
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<b>Quiz de revisão para a P2 de Macro</b>\n\
         por: Bernardo Louzada.\n\n\
         📝 <b>Conteúdo do Quiz</b>\n{}\n\n\
         🎯 <b>Como Usar</b>\n\
         1. Escolha um tópico no menu\n\
         2. Responda as questões clicando em V ou F\n\
         3. Veja a explicação após cada resposta\n\
         4. Retorne a qualquer momento para revisar\n\n\
         📊 <b>Estatísticas do Quiz</b>\n\
         Total de questões: <b>{}</b>\n\
         Questões por tópico:\n{}\n\n\
         Tempo estimado: <b>30-40 minutos</b>",
        contents,
        bank.total_questions(),
        counts
    )
}
