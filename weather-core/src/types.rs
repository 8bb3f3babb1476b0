//! Core types: user, chat, inbound message, outbound reply, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (channel or private) identity. `id` is the provider-assigned chat identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// One inbound chat event.
///
/// `text` is `None` when the update carried no text body (stickers, joins, photos without caption);
/// such events are dropped by the dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub text: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Returns the command token: the word after a leading `/`, without any `@botname` suffix.
    /// Arguments after the first whitespace are ignored. Case is preserved.
    pub fn command(&self) -> Option<&str> {
        let text = self.text.as_deref()?;
        let rest = text.strip_prefix('/')?;
        let word = rest.split(char::is_whitespace).next()?;
        let token = word.split('@').next().unwrap_or(word);
        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }
}

/// Binary image attached to a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub bytes: Vec<u8>,
    pub file_name: String,
}

/// The single reply produced for an inbound message. When `photo` is set, `text` is its caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundReply {
    pub chat: Chat,
    pub text: String,
    pub photo: Option<Photo>,
}

impl OutboundReply {
    pub fn text(chat: Chat, text: impl Into<String>) -> Self {
        Self {
            chat,
            text: text.into(),
            photo: None,
        }
    }

    pub fn with_photo(chat: Chat, text: impl Into<String>, photo: Photo) -> Self {
        Self {
            chat,
            text: text.into(),
            photo: Some(photo),
        }
    }
}

/// Handler result for the chain. `Reply(text)` carries the sent text so later handlers can use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing was sent.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain; a reply with this text was produced.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(text: Option<&str>) -> Message {
        Message {
            id: "1".to_string(),
            user: User {
                id: 7,
                username: None,
                first_name: None,
                last_name: None,
            },
            chat: Chat {
                id: 42,
                chat_type: "private".to_string(),
            },
            text: text.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_command_plain() {
        assert_eq!(message(Some("/weather")).command(), Some("weather"));
    }

    #[test]
    fn test_command_strips_bot_mention_and_arguments() {
        assert_eq!(message(Some("/weather@forecast_bot")).command(), Some("weather"));
        assert_eq!(message(Some("/help me please")).command(), Some("help"));
    }

    #[test]
    fn test_command_is_case_sensitive() {
        assert_eq!(message(Some("/Weather")).command(), Some("Weather"));
    }

    #[test]
    fn test_no_command_for_plain_text_or_bare_slash() {
        assert_eq!(message(Some("London")).command(), None);
        assert_eq!(message(Some("/")).command(), None);
        assert_eq!(message(Some("/ weather")).command(), None);
        assert_eq!(message(None).command(), None);
    }

    #[test]
    fn test_outbound_reply_constructors() {
        let chat = message(None).chat;
        let reply = OutboundReply::text(chat.clone(), "hi");
        assert!(reply.photo.is_none());

        let photo = Photo {
            bytes: vec![1, 2, 3],
            file_name: "cat.jpg".to_string(),
        };
        let reply = OutboundReply::with_photo(chat, "caption", photo.clone());
        assert_eq!(reply.photo, Some(photo));
        assert_eq!(reply.text, "caption");
    }
}
