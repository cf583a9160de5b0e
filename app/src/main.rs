use clap::Parser;
use tracing::error;

use xbridge_lib::cli::Cli;
use xbridge_lib::commands;
use xbridge_lib::dto::ErrorResponse;
use xbridge_lib::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = xbridge_lib::load_config(&cli)?;
    xbridge_lib::init_tracing(&config.log_filter);

    tracing::info!(network = %config.network, "Starting xbridge");

    let state = AppState::from_config(config).await?;

    match commands::dispatch(&state, cli.command).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(err) => {
            error!(error = %format!("{:#}", err), "Command failed");
            println!("{}", serde_json::to_string_pretty(&ErrorResponse::from_error(&err))?);
            std::process::exit(1);
        }
    }
}
