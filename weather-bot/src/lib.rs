//! # Weather bot
//!
//! Telegram bot that answers `/weather` with current conditions from OpenWeatherMap.
//! Wires the [`Dispatcher`] (commands, per-chat pending input, formatter) into the handler chain and runs
//! the Telegram runner from weather-telegram.

pub mod cli;
pub mod commands;
pub mod components;
pub mod config;
pub mod dispatcher;
pub mod formatter;
pub mod handlers;
pub mod runner;
pub mod state;

pub use cli::{load_config, Cli, Commands};
pub use commands::{CommandAction, CommandSpec, CommandTable, WeatherMode};
pub use components::{build_bot_components, build_dispatcher, build_handler_chain, BotComponents};
pub use config::BotConfig;
pub use dispatcher::Dispatcher;
pub use formatter::render;
pub use handlers::{DispatchHandler, LoggingHandler};
pub use runner::{check_city, run_bot};
pub use state::{ConversationStore, PendingInput};
