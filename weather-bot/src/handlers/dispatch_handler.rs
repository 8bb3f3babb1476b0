//! Runs the [`Dispatcher`] for each message and sends its reply through the transport.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, instrument};
use weather_core::{Bot, Handler, HandlerResponse, Message, Result};

use crate::dispatcher::Dispatcher;

/// Terminal handler: one dispatch, at most one send. Send failures are logged and swallowed.
#[derive(Clone)]
pub struct DispatchHandler {
    dispatcher: Arc<Dispatcher>,
    bot: Arc<dyn Bot>,
}

impl DispatchHandler {
    pub fn new(dispatcher: Arc<Dispatcher>, bot: Arc<dyn Bot>) -> Self {
        Self { dispatcher, bot }
    }

    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }
}

#[async_trait]
impl Handler for DispatchHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(reply) = self.dispatcher.dispatch(message).await else {
            return Ok(HandlerResponse::Stop);
        };

        match self.bot.send_reply(&reply).await {
            Ok(()) => info!(
                reply_len = reply.text.len(),
                with_photo = reply.photo.is_some(),
                "Reply sent"
            ),
            Err(e) => error!(error = %e, "Failed to send reply"),
        }
        Ok(HandlerResponse::Reply(reply.text))
    }
}
