//! Tests for [`weather_telegram::drain_events`]: the single consumer processes messages in arrival order,
//! keeps going after a failing chain, and stops when the channel closes.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use handler_chain::HandlerChain;
use tokio::sync::mpsc;
use weather_core::{BotError, Chat, Handler, HandlerResponse, Message, User};
use weather_telegram::drain_events;

fn message(chat_id: i64, text: &str) -> Message {
    Message {
        id: format!("{}-{}", chat_id, text),
        user: User {
            id: chat_id,
            username: None,
            first_name: None,
            last_name: None,
        },
        chat: Chat {
            id: chat_id,
            chat_type: "private".to_string(),
        },
        text: Some(text.to_string()),
        created_at: Utc::now(),
    }
}

/// Records every text it sees and fails on the text "boom".
struct Recorder {
    seen: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl Handler for Recorder {
    async fn handle(&self, message: &Message) -> weather_core::Result<HandlerResponse> {
        let text = message.text.clone().unwrap_or_default();
        self.seen.lock().unwrap().push(text.clone());
        if text == "boom" {
            return Err(BotError::Bot("send failed".to_string()));
        }
        Ok(HandlerResponse::Reply(text))
    }
}

#[tokio::test]
async fn test_drain_events_processes_in_arrival_order_and_survives_errors() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new().add_handler(Arc::new(Recorder { seen: seen.clone() }));

    let (tx, rx) = mpsc::unbounded_channel();
    for (chat, text) in [(1, "/start"), (2, "boom"), (1, "/weather"), (1, "London")] {
        tx.send(message(chat, text)).unwrap();
    }
    drop(tx);

    let processed = drain_events(rx, chain).await;

    assert_eq!(processed, 4);
    assert_eq!(
        *seen.lock().unwrap(),
        vec!["/start", "boom", "/weather", "London"]
    );
}

#[tokio::test]
async fn test_drain_events_returns_when_channel_closed_empty() {
    let (tx, rx) = mpsc::unbounded_channel::<Message>();
    drop(tx);
    assert_eq!(drain_events(rx, HandlerChain::new()).await, 0);
}
