//! Handlers in the bot's chain: logging around the dispatcher, and the dispatcher itself.

mod dispatch_handler;
mod logging_handler;

pub use dispatch_handler::DispatchHandler;
pub use logging_handler::LoggingHandler;
