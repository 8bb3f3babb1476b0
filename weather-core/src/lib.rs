//! # weather-core
//!
//! Core types for the weather bot: [`Bot`], [`Handler`], inbound [`Message`] and [`OutboundReply`],
//! and tracing initialization. Transport-agnostic; used by handler-chain, weather-telegram and weather-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, OutboundReply, Photo, ToCoreMessage, ToCoreUser, User,
};
