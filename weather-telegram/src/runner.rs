//! REPL runner: teloxide long-polling feeds core Messages into one channel; a single consumer drains it in
//! arrival order and runs the HandlerChain for each message, so no two messages are dispatched concurrently.

use anyhow::Result;
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tokio::sync::mpsc;
use tracing::{error, info, instrument, warn};
use weather_core::{Message as CoreMessage, ToCoreMessage};

use super::adapters::TelegramMessageWrapper;

/// Runs the chain for every message received on `rx`, one at a time, until the channel closes.
/// A failing chain is logged and the loop moves on. Returns the number of messages processed.
pub async fn drain_events(mut rx: mpsc::UnboundedReceiver<CoreMessage>, chain: HandlerChain) -> usize {
    let mut processed = 0;
    while let Some(message) = rx.recv().await {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: processing message (handler chain started)"
        );
        if let Err(e) = chain.handle(&message).await {
            error!(error = %e, chat_id = message.chat.id, "Handler chain failed");
        }
        processed += 1;
    }
    info!(processed, "Event channel closed, consumer stopped");
    processed
}

/// Starts long-polling with the given teloxide Bot and drives `handler_chain` from a single consumer task.
/// Returns after the REPL stops (Ctrl-C) and the consumer has drained what was already queued.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(username = ?me.user.username, "Bot authorized"),
        Err(e) => warn!(error = %e, "getMe failed; continuing with long polling"),
    }

    let (tx, rx) = mpsc::unbounded_channel::<CoreMessage>();
    let consumer = tokio::spawn(drain_events(rx, handler_chain));

    teloxide::repl(bot, move |msg: teloxide::types::Message| {
        let tx = tx.clone();
        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            match core_msg.text.as_deref() {
                Some(text) => info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    message_content = %text,
                    "Received message"
                ),
                None => info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Received non-text message"
                ),
            }
            if tx.send(core_msg).is_err() {
                error!("Event consumer stopped; message dropped");
            }
            respond(())
        }
    })
    .await;

    let processed = consumer.await?;
    info!(processed, "Runner finished");
    Ok(())
}
