mod config;
mod dialogue;
mod quiz;
mod view;

use std::sync::Arc;

use dialogue::{resolve_press, Press, State};
use dotenv::dotenv;
use quiz::{bank::QuestionBank, section::SectionSession, Topic};
use teloxide::{
    adaptors::{throttle::Limits, Throttle},
    dispatching::dialogue::{ErasedStorage, InMemStorage, Storage},
    prelude::*,
    types::{KeyboardButton, KeyboardMarkup, ParseMode},
    utils::command::BotCommands,
};
use view::{CardSurface, HOME_PAGE};

type QuizBot = Throttle<Bot>;
type QuizDialogue = Dialogue<State, ErasedStorage<State>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;
type DialogueStorage = Arc<ErasedStorage<State>>;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Comandos disponíveis:")]
enum Command {
    #[command(description = "mostra as instruções e o menu de tópicos")]
    Start,
    #[command(description = "mostra as instruções")]
    Help,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let dotenv_loaded = dotenv().is_ok();
    pretty_env_logger::init();
    if !dotenv_loaded {
        log::debug!("No .env file found, using the process environment");
    }

    let config = config::Config::from_env()?;
    log::info!("Starting macro quiz bot...");

    let bank = Arc::new(QuestionBank::standard());
    bank.validate()?;
    log::info!(
        "Question bank loaded: {} questions in {} topics",
        bank.total_questions(),
        bank.sections().len()
    );

    let bot = Bot::new(config.token).throttle(Limits::default());
    let storage: DialogueStorage = InMemStorage::<State>::new().erase();

    let messages = Update::filter_message()
        .enter_dialogue::<Message, ErasedStorage<State>, State>()
        .branch(dptree::entry().filter_command::<Command>().endpoint(command))
        .branch(dptree::endpoint(menu_choice));
    let callbacks = Update::filter_callback_query()
        .enter_dialogue::<CallbackQuery, ErasedStorage<State>, State>()
        .endpoint(answer_pressed);

    Dispatcher::builder(bot, dptree::entry().branch(messages).branch(callbacks))
        .dependencies(dptree::deps![storage, bank])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

fn navigation_keyboard() -> KeyboardMarkup {
    let mut rows = vec![vec![KeyboardButton::new(HOME_PAGE)]];
    rows.extend(
        Topic::ALL
            .iter()
            .map(|topic| vec![KeyboardButton::new(topic.menu_label())]),
    );
    KeyboardMarkup::new(rows)
}

async fn command(bot: QuizBot, dialogue: QuizDialogue, cmd: Command, msg: Message) -> HandlerResult {
    match cmd {
        Command::Start => {
            bot.send_message(msg.chat.id, view::instructions())
                .parse_mode(ParseMode::Html)
                .reply_markup(navigation_keyboard())
                .await?;
            dialogue.update(State::Menu).await?;
        }
        Command::Help => {
            bot.send_message(msg.chat.id, view::instructions())
                .parse_mode(ParseMode::Html)
                .await?;
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
    }
    Ok(())
}

async fn menu_choice(
    bot: QuizBot,
    dialogue: QuizDialogue,
    bank: Arc<QuestionBank>,
    msg: Message,
) -> HandlerResult {
    if msg.text() == Some(HOME_PAGE) {
        bot.send_message(msg.chat.id, view::home_page(&bank))
            .parse_mode(ParseMode::Html)
            .reply_markup(navigation_keyboard())
            .await?;
        dialogue.update(State::Menu).await?;
    } else if let Some(topic) = msg.text().and_then(Topic::from_menu_label) {
        show_section(&bot, &dialogue, &bank, topic, &msg).await?;
    } else {
        bot.send_message(msg.chat.id, "Selecione um tópico no menu abaixo.")
            .reply_markup(navigation_keyboard())
            .await?;
    }
    Ok(())
}

/// Starts a fresh session for `topic`, dropping answers given in any
/// previous section. The id of the message that picked the topic tells this
/// display apart from earlier ones.
async fn show_section(
    bot: &QuizBot,
    dialogue: &QuizDialogue,
    bank: &QuestionBank,
    topic: Topic,
    msg: &Message,
) -> HandlerResult {
    let chat_id = msg.chat.id;
    log::info!("Chat {} opened \"{}\"", chat_id, topic);

    let section = bank.section(topic)?;
    let mut session = SectionSession::new(topic, msg.id.0);
    let mut surface = CardSurface::new(&session);
    session.render_section(section, &mut surface)?;

    for card in surface.into_cards() {
        let keyboard = card.keyboard();
        let request = bot.send_message(chat_id, card.text).parse_mode(ParseMode::Html);
        match keyboard {
            Some(keyboard) => request.reply_markup(keyboard).await?,
            None => request.await?,
        };
    }

    dialogue.update(State::Section { session }).await?;
    Ok(())
}

const STALE_BUTTON: &str = "Esta seção não está mais aberta. Escolha o tópico novamente no menu.";

async fn answer_pressed(
    bot: QuizBot,
    dialogue: QuizDialogue,
    bank: Arc<QuestionBank>,
    q: CallbackQuery,
) -> HandlerResult {
    let state = match dialogue.get_or_default().await {
        Ok(state) => state,
        Err(err) => {
            log::warn!("Could not load state of chat {}: {}", dialogue.chat_id(), err);
            State::default()
        }
    };
    let press = resolve_press(state, &bank, q.data.as_deref());

    let ack = bot.answer_callback_query(q.id);
    match press {
        Press::Ignored | Press::Unchanged => {
            ack.await?;
        }
        Press::Stale => {
            ack.text(STALE_BUTTON).await?;
        }
        Press::Redraw { session, card } => {
            ack.await?;
            log::debug!(
                "Chat {} answered in \"{}\" (display {})",
                dialogue.chat_id(),
                session.topic,
                session.display
            );
            dialogue.update(State::Section { session }).await?;

            if let Some(message) = q.message {
                let keyboard = card.keyboard();
                let request = bot
                    .edit_message_text(message.chat.id, message.id, card.text)
                    .parse_mode(ParseMode::Html);
                match keyboard {
                    Some(keyboard) => request.reply_markup(keyboard).await?,
                    None => request.await?,
                };
            }
        }
    }
    Ok(())
}
