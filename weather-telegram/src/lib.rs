//! # weather-telegram
//!
//! Telegram transport layer: adapters, [`weather_core::Bot`] implementation, minimal config, and the runner
//! that feeds inbound messages through one channel to a single sequential consumer.
//! No dispatch logic lives here.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::{drain_events, run_repl};
