mod cli;
mod error;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cointalk_chat::{ChatService, ServiceConfig};
use cointalk_core::ReqwestHttpClient;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<ExitCode, CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.gateway {
        Some(gateway) => ServiceConfig::new(gateway.clone()),
        None => ServiceConfig::from_env(),
    };

    let service = ChatService::spawn(&config, Arc::new(ReqwestHttpClient::new()));
    let outcome = service
        .submit_message(&cli.message, cli.token.as_deref())
        .await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome.reply);
    }

    Ok(ExitCode::SUCCESS)
}
