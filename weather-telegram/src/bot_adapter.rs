//! Wraps teloxide::Bot and implements [`weather_core::Bot`]. Production code sends via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatId, InputFile},
};
use weather_core::{Bot as CoreBot, BotError, Chat, Photo, Result};

/// Thin wrapper around teloxide::Bot that implements weather-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, photo: &Photo, caption: Option<&str>) -> Result<()> {
        let file = InputFile::memory(photo.bytes.clone()).file_name(photo.file_name.clone());
        let request = self.bot.send_photo(ChatId(chat.id), file);
        let request = match caption {
            Some(caption) => request.caption(caption.to_string()),
            None => request,
        };
        request.await.map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
