use teloxide::{
    dispatching::UpdateHandler, prelude::*, types::ChatId, utils::command::BotCommands,
};

use crate::command::Command;
use crate::engine::Reply;
use crate::{HandlerResult, SharedRegistry};

pub fn schema() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use dptree::case;

    let command_handler = teloxide::filter_command::<Command, _>()
        .branch(case![Command::Help].endpoint(help))
        .branch(case![Command::Start].endpoint(start))
        .branch(case![Command::Search].endpoint(search))
        .branch(case![Command::Next].endpoint(next))
        .branch(case![Command::Stop].endpoint(stop));

    Update::filter_message()
        .branch(command_handler)
        .endpoint(text)
}

async fn help(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, Command::descriptions().to_string())
        .await?;
    Ok(())
}

async fn start(bot: Bot, registry: SharedRegistry, msg: Message) -> HandlerResult {
    let replies = registry.lock().await.start(msg.chat.id.0);
    deliver(&bot, replies).await;
    Ok(())
}

async fn search(bot: Bot, registry: SharedRegistry, msg: Message) -> HandlerResult {
    let replies = registry.lock().await.search(msg.chat.id.0);
    deliver(&bot, replies).await;
    Ok(())
}

async fn next(bot: Bot, registry: SharedRegistry, msg: Message) -> HandlerResult {
    let replies = registry.lock().await.next(msg.chat.id.0);
    deliver(&bot, replies).await;
    Ok(())
}

async fn stop(bot: Bot, registry: SharedRegistry, msg: Message) -> HandlerResult {
    let replies = registry.lock().await.stop(msg.chat.id.0);
    deliver(&bot, replies).await;
    Ok(())
}

async fn text(bot: Bot, registry: SharedRegistry, msg: Message) -> HandlerResult {
    let Some(txt) = msg.text() else {
        // Text-only relay; media is dropped.
        return Ok(());
    };
    let replies = registry.lock().await.handle_text(msg.chat.id.0, txt);
    deliver(&bot, replies).await;
    Ok(())
}

/// Sends the replies computed under the registry lock. The lock is already
/// released here; a failed send is logged once and never rolls back the
/// state transition that produced it.
async fn deliver(bot: &Bot, replies: Vec<Reply>) {
    for Reply { to, text } in replies {
        if let Err(err) = bot.send_message(ChatId(to), text).await {
            log::warn!("failed to deliver to {to}: {err}");
        }
    }
}
