//! Logs each inbound message before dispatch and its outcome after.

use async_trait::async_trait;
use tracing::info;
use weather_core::{Handler, HandlerResponse, Message, Result};

/// Pass-through handler; never stops the chain.
#[derive(Clone, Copy, Default)]
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            has_text = message.text.is_some(),
            command = ?message.command(),
            "Inbound message"
        );
        Ok(true)
    }

    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let outcome = match response {
            HandlerResponse::Reply(_) => "replied",
            HandlerResponse::Stop => "no reply",
            HandlerResponse::Continue | HandlerResponse::Ignore => "unhandled",
        };
        info!(chat_id = message.chat.id, outcome, "Message handled");
        Ok(())
    }
}
