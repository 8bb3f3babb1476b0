//! Command dispatcher: turns one inbound message into at most one reply.
//!
//! Rules, first match wins:
//! 1. no text body → no reply;
//! 2. registered command → clear the chat's pending input, run the command;
//! 3. plain text while awaiting a city → take the pending input, look the city up;
//! 4. anything else → fallback hint, pending input untouched.
//!
//! Weather and image failures become reply text here and never propagate.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};
use weather_client::{ImageSource, WeatherProvider};
use weather_core::{Chat, Message, OutboundReply};

use crate::commands::{CommandAction, CommandTable, WeatherMode};
use crate::formatter;
use crate::state::{ConversationStore, PendingInput};

pub const GREETING: &str = "Hi! I'm a weather bot.\nUse /weather to get the weather.";
pub const ASK_CITY: &str = "Enter a city.";
pub const FALLBACK: &str = "Use /weather to get the weather.";
pub const PHOTO_CAPTION: &str = "Here is your picture.";

/// Dispatcher state: registered commands, weather mode, the per-chat store, and the outbound clients.
pub struct Dispatcher {
    commands: CommandTable,
    mode: WeatherMode,
    store: ConversationStore,
    weather: Arc<dyn WeatherProvider>,
    images: Option<Arc<dyn ImageSource>>,
}

impl Dispatcher {
    /// Dispatcher with the base commands (start, weather, help) and an empty store.
    pub fn new(weather: Arc<dyn WeatherProvider>, mode: WeatherMode) -> Self {
        Self {
            commands: CommandTable::new(),
            mode,
            store: ConversationStore::new(),
            weather,
            images: None,
        }
    }

    /// Registers `/photo`, served from `images`.
    pub fn with_image_source(mut self, images: Arc<dyn ImageSource>) -> Self {
        self.commands = self.commands.with_photo();
        self.images = Some(images);
        self
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn commands(&self) -> &CommandTable {
        &self.commands
    }

    pub fn mode(&self) -> &WeatherMode {
        &self.mode
    }

    /// Produces the reply for one message, or `None` when the message has no text body.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    pub async fn dispatch(&self, message: &Message) -> Option<OutboundReply> {
        let Some(text) = message.text.as_deref() else {
            debug!("Message without text body, no reply");
            return None;
        };
        let chat = &message.chat;

        if let Some(action) = message
            .command()
            .and_then(|token| self.commands.lookup(token))
            .map(|spec| spec.action)
        {
            self.store.clear(chat.id);
            info!(command = ?action, "step: dispatch command");
            return Some(self.run_command(action, chat).await);
        }

        if message.command().is_none() && self.store.take(chat.id) == PendingInput::AwaitingCity {
            let city = text.trim();
            info!(city = %city, "step: dispatch awaited city");
            return Some(OutboundReply::text(chat.clone(), self.weather_text(city).await));
        }

        debug!(command = ?message.command(), "Unrecognized input, fallback reply");
        Some(OutboundReply::text(chat.clone(), FALLBACK))
    }

    async fn run_command(&self, action: CommandAction, chat: &Chat) -> OutboundReply {
        match action {
            CommandAction::Start => OutboundReply::text(chat.clone(), GREETING),
            CommandAction::Help => OutboundReply::text(chat.clone(), self.commands.help_text()),
            CommandAction::Weather => match &self.mode {
                WeatherMode::PromptForCity => {
                    self.store.set(chat.id, PendingInput::AwaitingCity);
                    OutboundReply::text(chat.clone(), ASK_CITY)
                }
                WeatherMode::FixedCity(city) => {
                    OutboundReply::text(chat.clone(), self.weather_text(city).await)
                }
            },
            CommandAction::Photo => self.photo_reply(chat).await,
        }
    }

    /// One provider call; the formatted reading or the user-facing error text.
    async fn weather_text(&self, city: &str) -> String {
        match self.weather.fetch(city).await {
            Ok(reading) => formatter::render(city, &reading),
            Err(e) => {
                warn!(city = %city, error = %e, "Weather lookup failed");
                e.user_message().to_string()
            }
        }
    }

    async fn photo_reply(&self, chat: &Chat) -> OutboundReply {
        let Some(images) = &self.images else {
            return OutboundReply::text(chat.clone(), FALLBACK);
        };
        match images.fetch().await {
            Ok(photo) => OutboundReply::with_photo(chat.clone(), PHOTO_CAPTION, photo),
            Err(e) => {
                warn!(error = %e, "Image fetch failed");
                OutboundReply::text(chat.clone(), e.user_message())
            }
        }
    }
}
