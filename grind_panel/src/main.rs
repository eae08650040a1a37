use clap::Parser;
use motor_control::MotorControlClient;

use crate::commands::Cli;

pub mod commands;
pub mod config;
pub mod logging;

fn should_create_config() -> bool {
    std::env::var("CREATE_CONFIG")
        .map(|val| val == "1" || val.to_lowercase() == "true")
        .unwrap_or(false)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    if should_create_config() {
        config::save_default_config()?;
    }

    let cli = Cli::parse();

    let config = config::load_config().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        eprintln!("Run with CREATE_CONFIG=1 to create a default configuration file.");
        e
    })?;

    let client = MotorControlClient::new(reqwest::Client::new(), config.backend_url.clone());

    commands::run(&client, &config, cli.command).await;

    Ok(())
}
