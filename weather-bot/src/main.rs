//! Binary for the weather bot.

use anyhow::Result;
use clap::Parser;
use weather_bot::{check_city, load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Check { city, token } => {
            let config = load_config(token)?;
            let reply = check_city(&config, &city).await?;
            println!("{}", reply);
            Ok(())
        }
    }
}
