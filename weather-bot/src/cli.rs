//! Command-line interface: `run` starts the bot, `check` performs one lookup.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "weather-bot")]
#[command(about = "Telegram weather bot: run, check", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; --token overrides BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Query the weather provider once and print the reply a chat would get.
    Check {
        city: String,
        #[arg(short, long)]
        token: Option<String>,
    },
}

/// Loads [`BotConfig`] from the environment with an optional token override.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_with_token() {
        let cli = Cli::try_parse_from(["weather-bot", "run", "--token", "1:abc"]).unwrap();
        match cli.command {
            Commands::Run { token } => assert_eq!(token.as_deref(), Some("1:abc")),
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_check_city() {
        let cli = Cli::try_parse_from(["weather-bot", "check", "New York"]).unwrap();
        match cli.command {
            Commands::Check { city, token } => {
                assert_eq!(city, "New York");
                assert!(token.is_none());
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn test_check_requires_city() {
        assert!(Cli::try_parse_from(["weather-bot", "check"]).is_err());
    }
}
