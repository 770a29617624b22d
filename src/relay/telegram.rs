//! Telegram front end of the chat relay
//!
//! Long-polls Telegram with teloxide. `/start` and `/help` are answered
//! locally; every other plain text message is forwarded to the gateway.

use super::{handle_message, GatewayClient, HELP_REPLY, WELCOME_REPLY};
use std::sync::Arc;
use teloxide::{prelude::*, utils::command::BotCommands};
use tracing::info;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "show the welcome message.")]
    Start,
    #[command(description = "explain how to submit a task.")]
    Help,
}

impl Command {
    pub fn reply(&self) -> &'static str {
        match self {
            Command::Start => WELCOME_REPLY,
            Command::Help => HELP_REPLY,
        }
    }
}

/// Messages that look like commands are never forwarded as tasks
pub fn is_task_text(text: &str) -> bool {
    !text.trim_start().starts_with('/')
}

/// Sender id for the task payload. Falls back to the chat id when the sender
/// is unknown or does not fit in an `i64`.
pub fn sender_id(user_id: Option<u64>, chat_id: i64) -> i64 {
    user_id
        .and_then(|id| i64::try_from(id).ok())
        .unwrap_or(chat_id)
}

/// Run the bot until Ctrl-C
pub async fn run(bot: Bot, client: GatewayClient) {
    let handler = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(answer_command),
        )
        .branch(
            dptree::filter(|msg: Message| msg.text().is_some_and(is_task_text))
                .endpoint(answer_task),
        );

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![Arc::new(client)])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

async fn answer_command(bot: Bot, msg: Message, cmd: Command) -> ResponseResult<()> {
    info!(chat_id = msg.chat.id.0, command = ?cmd, "Received command");
    bot.send_message(msg.chat.id, cmd.reply()).await?;
    Ok(())
}

async fn answer_task(bot: Bot, msg: Message, client: Arc<GatewayClient>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let user_id = sender_id(msg.from.as_ref().map(|user| user.id.0), msg.chat.id.0);

    let reply = handle_message(&client, user_id, text).await;
    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}
