//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; the Telegram implementation lives in weather-telegram.

use crate::error::Result;
use crate::types::{Chat, OutboundReply, Photo};
use async_trait::async_trait;

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a photo with an optional caption to the given chat.
    async fn send_photo(&self, chat: &Chat, photo: &Photo, caption: Option<&str>) -> Result<()>;

    /// Sends a reply: as a captioned photo when one is attached, otherwise as text.
    async fn send_reply(&self, reply: &OutboundReply) -> Result<()> {
        match &reply.photo {
            Some(photo) => {
                let caption = (!reply.text.is_empty()).then_some(reply.text.as_str());
                self.send_photo(&reply.chat, photo, caption).await
            }
            None => self.send_message(&reply.chat, &reply.text).await,
        }
    }
}
